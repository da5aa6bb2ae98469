use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_valid::Validate;

use crate::error::ValidationError;

/// Number of digits of an out-of-band verification code
pub const CODE_LENGTH: usize = 6;

/// Switching action the user can request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PowerAction {
    On,
    Off,
}

impl PowerAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
        }
    }
}

impl fmt::Display for PowerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PowerAction {
    type Err = ValidationError;

    fn from_str(action: &str) -> Result<Self, Self::Err> {
        match action {
            "on" => Ok(Self::On),
            "off" => Ok(Self::Off),
            other => Err(ValidationError::InvalidAction(other.to_string())),
        }
    }
}

/// A code that passed local validation: exactly six ASCII digits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationCode(String);

impl VerificationCode {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let code = raw.trim();

        if code.is_empty() {
            return Err(ValidationError::EmptyCode);
        }

        if code.len() != CODE_LENGTH || !code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::MalformedCode);
        }

        Ok(Self(code.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Normalize raw keystrokes of the code field: digits only, at most six.
pub fn sanitize_code_input(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(CODE_LENGTH)
        .collect()
}

/// Verification-gated control workflow
///
/// A modal is shown exactly while the workflow is not `Idle`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ControlWorkflowState {
    #[default]
    Idle,
    AwaitingCode {
        action: PowerAction,
    },
    Submitting {
        action: PowerAction,
        code: VerificationCode,
    },
}

impl ControlWorkflowState {
    pub fn action(&self) -> Option<PowerAction> {
        match self {
            Self::Idle => None,
            Self::AwaitingCode { action } | Self::Submitting { action, .. } => Some(*action),
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting { .. })
    }
}

// Request types for API calls
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerificationRequest {
    pub action: PowerAction,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct ControlRequest {
    pub action: PowerAction,
    #[validate(min_length = 6)]
    #[validate(max_length = 6)]
    pub code: String,
}

/// Reply shape shared by the verification, control and refresh endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    /// Set by `/api/refresh` when the query went out but the device looks offline
    #[serde(default)]
    pub device_offline: bool,
}
