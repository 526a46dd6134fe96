use thiserror::Error;

/// Errors surfaced by the session runtime and its protocol.
///
/// The engine itself never fails; these only cover the plumbing around it.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session closed")]
    Closed,
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("invalid message: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config {key}: {reason}")]
    InvalidConfig { key: String, reason: String },
}

impl SessionError {
    pub(crate) fn config(key: &str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}
