pub mod algorithm;
pub mod edge_writer;
pub mod error;
pub mod generator;
pub mod kernel;
pub mod latent;
pub mod logging;
pub mod parameters;
pub mod report;

pub type Node = usize;
pub type Edge = (Node, Node);

pub mod prelude {
    use super::*;

    pub use super::{Edge, Node};
    pub use edge_writer::EdgeWriter;
    pub use error::GeneratorError;
    pub use generator::{build_graph, generate, Adjacency, Coordinates, PolarCoordinate};
    pub use kernel::{ConnectionKernel, DistanceMetric, KernelShape};
    pub use latent::LatentVariables;
    pub use parameters::Hyperparameters;
}
