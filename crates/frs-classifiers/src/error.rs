use std::error::Error;
use std::fmt;

/// Errors raised while training a classifier or scoring an embedding.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassifierError {
    /// Unusable input: training length mismatch, empty or ragged rows, bad hyper-parameters, non-finite query values
    InvalidArgument(String),
    /// Embedding produced by a different embedding-calculator version than the model was trained on
    VersionMismatch { expected: String, found: String },
    /// Query embedding length differs from the training dimensionality
    DimensionMismatch { expected: usize, found: usize },
    /// Failure reported by the underlying solver, passed through as-is
    Solver(String),
}

impl fmt::Display for ClassifierError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ClassifierError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            ClassifierError::VersionMismatch { expected, found } => write!(
                f,
                "Embedding calculator version mismatch: classifier was trained with '{}', got '{}'",
                expected, found
            ),
            ClassifierError::DimensionMismatch { expected, found } => write!(
                f,
                "Embedding has {} dimensions, classifier expects {}",
                found, expected
            ),
            ClassifierError::Solver(msg) => write!(f, "Solver failure: {}", msg),
        }
    }
}

impl Error for ClassifierError {}

pub type Result<T> = std::result::Result<T, ClassifierError>;
