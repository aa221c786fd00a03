use super::prelude::*;
use crate::parameters::Model;
use rand::{Rng, SeedableRng};

pub mod algo_parallel;
pub mod algo_sequential;

pub trait Algorithm: Sized {
    const IS_PARALLEL: bool = false;

    fn new(kernel: ConnectionKernel, self_loops: bool, num_threads: usize) -> Self;

    /// Evaluates every pair `(u, v)` with `u <= v` (or `u < v` without self loops)
    /// and reports the connected ones to `writer`, ordered by `u` then `v`.
    fn run<R: Rng + SeedableRng, W: EdgeWriter + ?Sized>(
        &mut self,
        rng: &mut R,
        latents: &LatentVariables,
        writer: &mut W,
    ) -> Result<(), GeneratorError>;

    fn from_model(model: &Model, num_threads: usize) -> Self {
        Self::new(model.kernel, model.self_loops, num_threads)
    }
}

/// Number of pairs evaluated for `n` nodes.
pub fn number_of_pairs(n: Node, self_loops: bool) -> usize {
    if self_loops {
        n * (n + 1) / 2
    } else {
        n * n.saturating_sub(1) / 2
    }
}

/// One Bernoulli draw per pair `(u, v)` for all `v >= u` (`v > u` without self
/// loops), in increasing order of `v`. A draw is consumed even if the kernel
/// value already decides the outcome.
fn sample_row(
    kernel: &ConnectionKernel,
    latents: &LatentVariables,
    u: Node,
    self_loops: bool,
    rng: &mut impl Rng,
    mut emit: impl FnMut(Node),
) {
    let positions = latents.positions();
    let kappas = latents.kappas();

    let (x_u, k_u) = (positions[u], kappas[u]);
    let first = if self_loops { u } else { u + 1 };

    for (v, (&x_v, &k_v)) in positions
        .iter()
        .zip(kappas)
        .enumerate()
        .skip(first)
    {
        let p = kernel.probability(x_u, k_u, x_v, k_v);
        if rng.gen::<f64>() < p {
            emit(v);
        }
    }
}
