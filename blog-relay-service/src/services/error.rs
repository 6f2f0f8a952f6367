use relay_core::error::AppError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Invalid input fields")]
    InvalidInput,

    #[error("Request body must be a JSON object")]
    NotAnObject,

    #[error("{0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error("{0}")]
    Upstream(#[from] reqwest::Error),

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(reqwest::Error),
}

impl From<RelayError> for AppError {
    fn from(err: RelayError) -> Self {
        match err {
            RelayError::ClientBuild(e) => AppError::InternalError(anyhow::Error::new(e)),
            // The caller sees the raw message for every request-path failure.
            other => AppError::BadRequest(anyhow::anyhow!(other.to_string())),
        }
    }
}
