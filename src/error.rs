use thiserror::Error;

pub type Result<T> = std::result::Result<T, NetworkError>;

/// Usage errors reported by the engine. All of them are detected before any
/// arithmetic runs, so a failed call never leaves the network half-updated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NetworkError {
    /// Invalid layer sizes or hyperparameters.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// A vector length disagrees with the layer it is fed to.
    #[error("shape mismatch in {context}: expected length {expected}, got {got}")]
    ShapeMismatch {
        context: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("cannot train on an empty dataset")]
    EmptyDataset,
}
