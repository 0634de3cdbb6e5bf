use thiserror::Error;

/// Failures reported by the club API client.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found")]
    NotFound,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<reqwest::Error> for RepositoryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return RepositoryError::Timeout(err.to_string());
        }

        if let Some(status) = err.status() {
            if status == reqwest::StatusCode::NOT_FOUND {
                return RepositoryError::NotFound;
            }
            return RepositoryError::Http {
                status: status.as_u16(),
                message: err.to_string(),
            };
        }

        if err.is_decode() {
            return RepositoryError::Decode(err.to_string());
        }

        if err.is_builder() {
            return RepositoryError::Configuration(err.to_string());
        }

        RepositoryError::Network(err.to_string())
    }
}
