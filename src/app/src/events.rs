use serde::{Deserialize, Serialize};

use crate::commands::{channel::ChannelOutput, timer::TimerOutput};
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::types::{ApiReply, StatusPayload};

/// Events that can happen in the app
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Event {
    /// Page loaded: open the push channel and pull the initial status
    Initialize { config: Option<ClientConfig> },

    Channel(ChannelEvent),
    Status(StatusEvent),
    Control(ControlEvent),
    Ui(UiEvent),
}

/// Push channel lifecycle, pushed status and reconnection triggers
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum ChannelEvent {
    Connected,
    Disconnected,
    ConnectError { message: String },

    /// Raw JSON of a `status_update` push message
    StatusUpdate { payload: String },

    // Reconnection triggers (page visibility, browser network state)
    PageVisible,
    NetworkOnline,
    NetworkOffline,

    #[serde(skip)]
    ConnectResponse(ChannelOutput),
}

/// Status pulls and the refresh trigger
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum StatusEvent {
    Fetch,
    Refresh,

    #[serde(skip)]
    FetchResponse(Result<StatusPayload, ClientError>),
    #[serde(skip)]
    RefreshResponse(Result<ApiReply, ClientError>),
    #[serde(skip)]
    RefreshCooldownElapsed(TimerOutput),
    #[serde(skip)]
    RefetchElapsed(TimerOutput),
}

/// Verification-gated control workflow
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum ControlEvent {
    RequestControl { action: String },
    CodeInput { value: String },
    SubmitVerification { code: String },
    CloseModal,
    BackdropClicked,

    #[serde(skip)]
    RequestControlResponse(Result<ApiReply, ClientError>),
    #[serde(skip)]
    SubmitResponse(Result<ApiReply, ClientError>),
}

/// Keyboard, clock and notification events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum UiEvent {
    KeyDown {
        key: String,
        ctrl: bool,
        meta: bool,
        /// Focus is inside the verification code field
        in_code_input: bool,
    },
    /// Sent by the Shell once per second
    ClockTick {
        epoch_millis: i64,
        /// Local time minus UTC, in minutes (east positive)
        utc_offset_minutes: i32,
    },
    DismissToast,

    #[serde(skip)]
    ToastElapsed(TimerOutput),
}
