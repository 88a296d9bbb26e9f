use thiserror::Error;

/// Any failure to obtain a stats record: transport, status or body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchFailure {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("API {status}: {body}")]
    Status { status: u16, body: String },

    #[error("JSON decode: {0}")]
    Decode(String),
}

impl FetchFailure {
    /// Short label used for metrics and log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::Status { .. } => "status",
            Self::Decode(_) => "decode",
        }
    }
}

impl From<serde_json::Error> for FetchFailure {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
