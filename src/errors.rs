//! Error taxonomy for the hole-finding engine.

use thiserror::Error;

/// Errors that can be returned by bigholes operations.
#[derive(Debug, Error)]
pub enum BigHolesError {
    #[error("dimension mismatch: left operand has {left} dimensions, right has {right}")]
    DimensionMismatch { left: usize, right: usize },

    #[error("dataset is empty: need at least one point and one dimension, got {points} points of {dims} dimensions")]
    EmptyDataset { points: usize, dims: usize },

    #[error("unrecognized expansion strategy {0:?}")]
    InvalidStrategy(String),

    #[error("maxitr must be positive, got {0}")]
    NonPositiveIteration(i64),

    #[error("failed to persist hall of fame to {path}: {source}")]
    PersistenceFailure {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("worker task failed: {0}")]
    WorkerFailure(String),
}

/// Crate-wide result alias, mirroring the teacher's single `check_argument` convention
/// but threaded through the full error taxonomy above.
pub type Result<T> = std::result::Result<T, BigHolesError>;
