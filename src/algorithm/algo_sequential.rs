use super::*;

/// Evaluates all pairs row by row on the caller's generator. For a seeded
/// generator the draw sequence is: all positions, all kappas, then one draw per
/// pair in row-major order.
pub struct AlgoSequential {
    kernel: ConnectionKernel,
    self_loops: bool,
}

impl Algorithm for AlgoSequential {
    fn new(kernel: ConnectionKernel, self_loops: bool, _num_threads: usize) -> Self {
        Self { kernel, self_loops }
    }

    fn run<R: Rng + SeedableRng, W: EdgeWriter + ?Sized>(
        &mut self,
        rng: &mut R,
        latents: &LatentVariables,
        writer: &mut W,
    ) -> Result<(), GeneratorError> {
        self.sample_edges(rng, latents, writer);
        Ok(())
    }
}

impl AlgoSequential {
    /// Same as [`Algorithm::run`], but accepts any generator, e.g. `thread_rng()`.
    pub fn sample_edges<R: Rng, W: EdgeWriter + ?Sized>(
        &self,
        rng: &mut R,
        latents: &LatentVariables,
        writer: &mut W,
    ) {
        tracing::debug!(
            nodes = latents.len(),
            pairs = number_of_pairs(latents.len(), self.self_loops),
            "sampling pairs sequentially"
        );

        for u in 0..latents.len() {
            sample_row(&self.kernel, latents, u, self.self_loops, rng, |v| {
                writer.add_edge(u, v)
            });
        }
    }
}
