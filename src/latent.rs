//! Per-node hidden variables of the model: an angular position on the unit
//! interval and a Pareto distributed degree correction ("kappa").

use crate::error::GeneratorError;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

/// Pareto distribution with minimum value `x_0` and tail exponent `gamma`,
/// sampled through the inverse of its survival function.
///
/// Each sample consumes exactly one uniform draw `p` in [0, 1) and returns
/// `x_0 * (1 - p)^(1 / (1 - gamma))`, which is never smaller than `x_0`.
///
/// For `gamma` close to 1 the exponent `1 / (1 - gamma)` is large and negative,
/// so draws with `p` near 1 overflow to `+inf` (with `gamma = 1.01` roughly one
/// draw in a thousand). An infinite kappa yields a `-inf` radius and a NaN kernel
/// value for the node's self pair, which never connects. Keep `gamma > 2`.
///
/// # Example
/// ```
/// use rust_dcsrgg::latent::ParetoTail;
/// use rand::SeedableRng;
/// use rand_distr::Distribution;
///
/// let pareto = ParetoTail::new(1.0, 2.5).unwrap();
/// let mut rng = pcg_rand::Pcg64::seed_from_u64(1);
/// assert!(pareto.sample(&mut rng) >= 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParetoTail {
    x_0: f64,
    exponent: f64,
}

impl ParetoTail {
    pub fn new(x_0: f64, gamma: f64) -> Result<Self, GeneratorError> {
        // negated comparisons also reject NaN
        if !(gamma > 1.0) {
            return Err(GeneratorError::InvalidExponent { gamma });
        }

        if !(x_0 > 0.0) {
            return Err(GeneratorError::InvalidSupport { x_0 });
        }

        Ok(Self {
            x_0,
            exponent: 1.0 / (1.0 - gamma),
        })
    }

    pub fn x_0(&self) -> f64 {
        self.x_0
    }

    pub fn gamma(&self) -> f64 {
        1.0 - 1.0 / self.exponent
    }

    #[inline]
    fn quantile(&self, p: f64) -> f64 {
        self.x_0 * (1.0 - p).powf(self.exponent)
    }
}

impl Distribution<f64> for ParetoTail {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.quantile(rng.gen::<f64>())
    }
}

/// `n` independent angular positions, uniform on [0, 1).
pub fn sample_angular_positions(rng: &mut impl Rng, n: usize) -> Vec<f64> {
    Uniform::new(0.0, 1.0).sample_iter(rng).take(n).collect()
}

/// A single Pareto draw; see [`ParetoTail`].
pub fn sample_pareto(rng: &mut impl Rng, x_0: f64, gamma: f64) -> Result<f64, GeneratorError> {
    Ok(ParetoTail::new(x_0, gamma)?.sample(rng))
}

/// `n` independent Pareto draws. Parameters are checked before anything is drawn.
pub fn sample_kappas(
    rng: &mut impl Rng,
    n: usize,
    x_0: f64,
    gamma: f64,
) -> Result<Vec<f64>, GeneratorError> {
    let pareto = ParetoTail::new(x_0, gamma)?;
    Ok(pareto.sample_iter(rng).take(n).collect())
}

/// Hidden variables of all nodes, aligned by node index.
#[derive(Debug, Clone, PartialEq)]
pub struct LatentVariables {
    positions: Vec<f64>,
    kappas: Vec<f64>,
}

impl LatentVariables {
    /// Draws all positions first, then all kappas, from the same generator.
    pub fn sample(rng: &mut impl Rng, n: usize, pareto: &ParetoTail) -> Self {
        let positions = sample_angular_positions(rng, n);
        let kappas = pareto.sample_iter(rng).take(n).collect();
        Self { positions, kappas }
    }

    /// Wraps externally chosen hidden variables; both sequences must be aligned.
    pub fn from_parts(positions: Vec<f64>, kappas: Vec<f64>) -> Result<Self, GeneratorError> {
        if positions.len() != kappas.len() {
            return Err(GeneratorError::MisalignedLatents {
                positions: positions.len(),
                kappas: kappas.len(),
            });
        }

        Ok(Self { positions, kappas })
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    pub fn kappas(&self) -> &[f64] {
        &self.kappas
    }

    pub fn position(&self, node: usize) -> f64 {
        self.positions[node]
    }

    pub fn kappa(&self, node: usize) -> f64 {
        self.kappas[node]
    }
}
