use crate::error::GeneratorError;

/// Which way the kernel depends on the hidden distance.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum KernelShape {
    /// `c * k_i * k_j * d^beta`. Grows with distance; this is the reference model.
    #[default]
    Literal,
    /// `c * k_i * k_j * d^-beta`. Closer nodes connect more likely; `d = 0` gives
    /// an infinite value and hence a certain edge.
    Decaying,
}

/// How two angular positions in [0, 1) are turned into a distance.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum DistanceMetric {
    /// `|x_i - x_j|`, in [0, 1).
    #[default]
    Linear,
    /// Distance on the circle of circumference one, in [0, 0.5].
    Periodic,
}

/// Implements the connection kernel `p = c * k_i * k_j * d^beta` (or its decaying
/// variant). Values are not clamped: anything `>= 1` means a certain edge.
///
/// # Example
/// ```
/// use rust_dcsrgg::kernel::ConnectionKernel;
/// let kernel = ConnectionKernel::new(2.0, 2.0).unwrap();
///
/// let computed = kernel.probability(0.1, 1.5, 0.6, 2.0);
/// let expected = 2.0 * 1.5 * 2.0 * 0.5 * 0.5;
///
/// assert!( (computed - expected).abs() < 1e-12 );
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ConnectionKernel {
    little_c: f64,
    beta: f64,
    shape: KernelShape,
    metric: DistanceMetric,
}

impl ConnectionKernel {
    pub fn new(little_c: f64, beta: f64) -> Result<Self, GeneratorError> {
        for (name, value) in [("little_c", little_c), ("beta", beta)] {
            if !value.is_finite() {
                return Err(GeneratorError::NonFiniteParameter { name, value });
            }
        }

        Ok(Self {
            little_c,
            beta,
            shape: KernelShape::default(),
            metric: DistanceMetric::default(),
        })
    }

    pub fn with_shape(mut self, shape: KernelShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
    }

    pub fn little_c(&self) -> f64 {
        self.little_c
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    pub fn shape(&self) -> KernelShape {
        self.shape
    }

    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }

    #[inline]
    pub fn distance(&self, x_i: f64, x_j: f64) -> f64 {
        let d = (x_i - x_j).abs();
        match self.metric {
            DistanceMetric::Linear => d,
            DistanceMetric::Periodic => d.min(1.0 - d),
        }
    }

    /// Kernel value for a pair given the pair's hidden distance.
    #[inline]
    pub fn from_distance(&self, distance: f64, k_i: f64, k_j: f64) -> f64 {
        let exponent = match self.shape {
            KernelShape::Literal => self.beta,
            KernelShape::Decaying => -self.beta,
        };

        self.little_c * k_i * k_j * distance.powf(exponent)
    }

    #[inline]
    pub fn probability(&self, x_i: f64, k_i: f64, x_j: f64, k_j: f64) -> f64 {
        self.from_distance(self.distance(x_i, x_j), k_i, k_j)
    }
}
