use thiserror::Error;

use crate::labels::Labels;

/// Malformed user input, rejected before anything reaches the network
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid action: {0:?}")]
    InvalidAction(String),
    #[error("verification code is empty")]
    EmptyCode,
    #[error("verification code must be exactly 6 digits")]
    MalformedCode,
    #[error("no pending action for the submitted code")]
    ActionExpired,
    #[error("device is offline")]
    DeviceOffline,
    #[error("another operation is in progress")]
    Busy,
}

/// Failure of a single client operation
///
/// None of these are retried; every variant ends the current attempt and is
/// surfaced to the user as a toast.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("request rejected: {}", message.as_deref().unwrap_or("no message"))]
    Rejected { message: Option<String> },

    #[error("{action} failed: {reason}")]
    Transport { action: String, reason: String },
}

impl ClientError {
    pub fn transport(action: &str, reason: impl ToString) -> Self {
        Self::Transport {
            action: action.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Text shown to the user; `fallback` is used for rejections without a message.
    pub fn user_message(&self, labels: &Labels, fallback: &str) -> String {
        match self {
            Self::Validation(e) => labels.validation(e).to_string(),
            Self::Rejected { message } => message
                .as_deref()
                .filter(|m| !m.is_empty())
                .unwrap_or(fallback)
                .to_string(),
            Self::Transport { .. } => labels.network_error.to_string(),
        }
    }
}
