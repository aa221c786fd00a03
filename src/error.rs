use thiserror::Error;

/// Failures of a generation call. Everything except `WorkerPanicked` is an input
/// validation failure raised before the first random draw, so the caller's
/// generator is left untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeneratorError {
    #[error("Pareto exponent must be greater than 1, got {gamma}")]
    InvalidExponent { gamma: f64 },

    #[error("Pareto minimum value must be positive, got {x_0}")]
    InvalidSupport { x_0: f64 },

    #[error("node identifiers at positions {first} and {second} are equal")]
    DuplicateIdentifier { first: usize, second: usize },

    #[error("parameter `{name}` must be finite, got {value}")]
    NonFiniteParameter { name: &'static str, value: f64 },

    #[error("got {nodes} node identifiers but hidden variables for {latents} nodes")]
    LengthMismatch { nodes: usize, latents: usize },

    #[error("got {positions} angular positions but {kappas} degree corrections")]
    MisalignedLatents { positions: usize, kappas: usize },

    #[error("a worker thread panicked while materialising edges")]
    WorkerPanicked,
}
