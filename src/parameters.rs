use crate::error::GeneratorError;
use crate::kernel::{ConnectionKernel, DistanceMetric, KernelShape};
use crate::latent::ParetoTail;
use std::str::FromStr;
use structopt::StructOpt;

/// Node labels used when neither `--labels` nor `--nodes` is given.
pub const DEMO_LABELS: [&str; 14] = [
    "orange-tan",
    "red",
    "bright-yellow",
    "royal-blue",
    "turquoise",
    "grey",
    "lime-green",
    "gold",
    "brown",
    "pink",
    "light-tan",
    "green",
    "purple",
    "orange",
];

/// Model hyperparameters of a single generation call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hyperparameters {
    /// `C`: radial coordinate of a node with minimal kappa.
    pub radial_offset: f64,
    /// Scale of the connection kernel.
    pub little_c: f64,
    /// Pareto tail exponent; must exceed 1, values above 2 give a finite mean.
    /// Close to 1 single kappas may overflow to infinity, see [`ParetoTail`].
    pub gamma: f64,
    /// Distance exponent of the kernel.
    pub beta: f64,
    /// Pareto minimum value.
    pub x_0: f64,
    pub shape: KernelShape,
    pub metric: DistanceMetric,
    /// Whether the pairs `(i, i)` are evaluated.
    pub self_loops: bool,
}

impl Default for Hyperparameters {
    fn default() -> Self {
        Self {
            radial_offset: 5.0,
            little_c: 2.0,
            gamma: 2.05,
            beta: 2.5,
            x_0: 1.0,
            shape: KernelShape::Literal,
            metric: DistanceMetric::Linear,
            self_loops: true,
        }
    }
}

/// Validated form of [`Hyperparameters`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Model {
    pub pareto: ParetoTail,
    pub kernel: ConnectionKernel,
    pub radial_offset: f64,
    pub self_loops: bool,
}

impl Hyperparameters {
    pub fn with_radial_offset(mut self, radial_offset: f64) -> Self {
        self.radial_offset = radial_offset;
        self
    }

    pub fn with_little_c(mut self, little_c: f64) -> Self {
        self.little_c = little_c;
        self
    }

    pub fn with_gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_x_0(mut self, x_0: f64) -> Self {
        self.x_0 = x_0;
        self
    }

    pub fn with_shape(mut self, shape: KernelShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
    }

    pub fn with_self_loops(mut self, self_loops: bool) -> Self {
        self.self_loops = self_loops;
        self
    }

    /// Checks the Pareto parameters first (exponent, then support), then the
    /// remaining real-valued parameters.
    pub fn validate(&self) -> Result<Model, GeneratorError> {
        let pareto = ParetoTail::new(self.x_0, self.gamma)?;

        if !self.radial_offset.is_finite() {
            return Err(GeneratorError::NonFiniteParameter {
                name: "radial_offset",
                value: self.radial_offset,
            });
        }

        let kernel = ConnectionKernel::new(self.little_c, self.beta)?
            .with_shape(self.shape)
            .with_metric(self.metric);

        Ok(Model {
            pareto,
            kernel,
            radial_offset: self.radial_offset,
            self_loops: self.self_loops,
        })
    }
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "dc-srgg",
    about = "Samples a degree-corrected soft random geometric graph and its polar embedding"
)]
pub struct Parameters {
    #[structopt(short = "a", long, default_value = "seq")]
    pub algorithm: SamplingAlgorithm,

    #[structopt(short = "s", long)]
    pub seed_value: Option<u64>,

    #[structopt(short = "t", long)]
    pub num_threads: Option<usize>,

    /// Comma separated node labels
    #[structopt(short = "l", long, use_delimiter = true)]
    pub labels: Vec<String>,

    /// Number of nodes, labelled v0, v1, ...
    #[structopt(short = "n", long)]
    pub nodes: Option<usize>,

    #[structopt(short = "C", long, default_value = "5.0")]
    pub radial_offset: f64,

    #[structopt(short = "c", long, default_value = "2.0")]
    pub little_c: f64,

    #[structopt(short = "g", long, default_value = "2.05")]
    pub gamma: f64,

    #[structopt(short = "b", long, default_value = "2.5")]
    pub beta: f64,

    #[structopt(short = "x", long = "x0", default_value = "1.0")]
    pub x_0: f64,

    /// Use the kernel that decays with distance
    #[structopt(short = "d", long)]
    pub decaying: bool,

    /// Measure distances on the circle
    #[structopt(short = "p", long)]
    pub periodic: bool,

    #[structopt(long)]
    pub no_self_loops: bool,
}

#[derive(Eq, Clone, Copy, PartialEq, Debug)]
pub enum SamplingAlgorithm {
    Sequential,
    Parallel,
}

impl FromStr for SamplingAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "seq" => Ok(SamplingAlgorithm::Sequential),
            "par" => Ok(SamplingAlgorithm::Parallel),
            _ => Err(format!("Unknown algorithm type: {}", s)),
        }
    }
}

impl Parameters {
    pub fn hyperparameters(&self) -> Hyperparameters {
        Hyperparameters {
            radial_offset: self.radial_offset,
            little_c: self.little_c,
            gamma: self.gamma,
            beta: self.beta,
            x_0: self.x_0,
            shape: if self.decaying {
                KernelShape::Decaying
            } else {
                KernelShape::Literal
            },
            metric: if self.periodic {
                DistanceMetric::Periodic
            } else {
                DistanceMetric::Linear
            },
            self_loops: !self.no_self_loops,
        }
    }

    pub fn num_threads(&self) -> usize {
        self.num_threads.unwrap_or_else(num_cpus::get).max(1)
    }

    pub fn node_labels(&self) -> Vec<String> {
        if !self.labels.is_empty() {
            self.labels.clone()
        } else if let Some(n) = self.nodes {
            (0..n).map(|i| format!("v{}", i)).collect()
        } else {
            DEMO_LABELS.iter().map(|&s| s.to_owned()).collect()
        }
    }
}

pub fn check_options(opt: Parameters) -> Result<Parameters, GeneratorError> {
    opt.hyperparameters().validate()?;
    Ok(opt)
}

pub fn get_and_check_options() -> Result<Parameters, GeneratorError> {
    check_options(Parameters::from_args())
}
