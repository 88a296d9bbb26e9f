use thiserror::Error;

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}
