use serde::{Deserialize, Deserializer, Serialize};

/// Sentinel the server uses for the device being unreachable
pub const OFFLINE_SENTINEL: &str = "offline";

/// Sentinel the server uses for a signal it has not measured yet
pub const UNKNOWN_SENTINEL: &str = "unknown";

/// Signal magnitudes up to this value (inclusive) count as strong
pub const STRONG_SIGNAL_MAX: i32 = 50;

/// Signal magnitudes up to this value (inclusive) count as medium
pub const MEDIUM_SIGNAL_MAX: i32 = 70;

/// Status as sent by `/api/status` and the `status_update` push event
///
/// Every field is optional on the wire; the server omits or nulls values it
/// does not know yet.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusPayload {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub online: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_signal")]
    pub signal: Option<String>,
    #[serde(default)]
    pub last_update: Option<String>,
}

// The signal is reported as a string ("45", "unknown", "offline") but a plain
// number is accepted too.
fn deserialize_signal<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        match Option::<serde_json::Value>::deserialize(deserializer)? {
            Some(serde_json::Value::String(signal)) => Some(signal),
            Some(serde_json::Value::Number(signal)) => Some(signal.to_string()),
            _ => None,
        },
    )
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum PowerState {
    On,
    Off,
    #[default]
    Unknown,
}

/// Last known device status, overwritten by every push or pull
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceStatus {
    pub power_state: PowerState,
    pub online: bool,
    /// Signal magnitude in dBm, displayed with a leading minus
    pub signal_strength: Option<i32>,
    /// The signal reading itself says offline; power and controls are unaffected
    pub signal_offline: bool,
    pub last_update: Option<String>,
}

impl From<&StatusPayload> for DeviceStatus {
    fn from(payload: &StatusPayload) -> Self {
        let status = payload.status.as_deref().map(str::trim);
        let signal = payload.signal.as_deref().map(str::trim);

        let online = payload.online != Some(false) && status != Some(OFFLINE_SENTINEL);

        let power_state = match status {
            Some("on") => PowerState::On,
            Some("off") => PowerState::Off,
            _ => PowerState::Unknown,
        };

        let signal_strength = signal
            .filter(|s| !s.is_empty() && *s != UNKNOWN_SENTINEL)
            .and_then(|s| s.parse::<i32>().ok())
            .map(i32::saturating_abs);

        Self {
            power_state,
            online,
            signal_strength,
            signal_offline: signal == Some(OFFLINE_SENTINEL),
            last_update: payload
                .last_update
                .clone()
                .filter(|ts| !ts.trim().is_empty()),
        }
    }
}

/// Colour band of the signal display
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SignalTone {
    Strong,
    Medium,
    Weak,
    Offline,
    #[default]
    Detecting,
}

impl SignalTone {
    pub fn for_strength(magnitude: i32) -> Self {
        if magnitude <= STRONG_SIGNAL_MAX {
            Self::Strong
        } else if magnitude <= MEDIUM_SIGNAL_MAX {
            Self::Medium
        } else {
            Self::Weak
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Strong => "#28a745",
            Self::Medium => "#ffc107",
            Self::Weak | Self::Offline => "#dc3545",
            Self::Detecting => "#666",
        }
    }
}
