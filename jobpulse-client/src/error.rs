use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

/// Errors surfaced by the API client and session operations.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("response decode failed: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("unauthorized - please sign in again")]
    Unauthorized,

    #[error("server returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("invalid payload: {0}")]
    Model(#[from] jobpulse_model::ModelError),
}
