use thiserror::Error;
use tracing::error;

/// Error types for the compute module
#[derive(Error, Debug)]
pub enum ComputeError {
    /// The account reference does not exist. Distinct from an account
    /// without matches, which yields an all-zero summary.
    #[error("Unknown account: {0}")]
    UnknownAccount(i32),

    /// The persistence layer failed to answer.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(sea_orm::DbErr),
}

impl From<sea_orm::DbErr> for ComputeError {
    fn from(error: sea_orm::DbErr) -> Self {
        error!(%error, "Storage error while computing statistics");
        ComputeError::StorageUnavailable(error)
    }
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;
