use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("request to album server failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx answer to a create or list while status checking is strict.
    #[error("album server answered {status}: {body}")]
    Status {
        status: StatusCode,
        body: json::Value,
    },

    #[error("unexpected album payload: {0}")]
    Decode(String),

    #[error("no album selected")]
    EmptySelection,

    #[error("origin {origin} is not a valid url: {reason}")]
    InvalidOrigin { origin: String, reason: String },
}

impl SyncError {
    pub fn is_transport(&self) -> bool {
        matches!(self, SyncError::Transport(_))
    }
}
