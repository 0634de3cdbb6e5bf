use thiserror::Error;

use crate::repository::errors::RepositoryError;

/// Errors surfaced by the aggregation services.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// An upstream call failed (network, HTTP status, timeout, decoding).
    #[error("Fetch failed: {0}")]
    Fetch(#[from] RepositoryError),

    /// Input or upstream data is missing a field the operation cannot do without.
    #[error("Inconsistent data: {0}")]
    DataInconsistency(String),

    /// The operation legitimately produced nothing.
    #[error("No result")]
    NoResult,
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    /// Message suitable for a blocking alert; details stay in the logs.
    pub fn user_message(&self) -> &'static str {
        match self {
            ServiceError::Fetch(_) => "Unable to reach the club server. Please try again.",
            ServiceError::NoResult => "Nothing to display.",
            ServiceError::DataInconsistency(_) => "The requested data is unavailable.",
        }
    }
}
