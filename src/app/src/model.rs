use crate::commands::timer::TimerId;
use crate::config::ClientConfig;
use crate::labels::Labels;
use crate::types::*;

/// Application Model - the complete state
///
/// Owned by the Core and mutated only from `update`, one event at a time.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Model {
    pub config: ClientConfig,

    // Push channel state
    pub is_connected: bool,

    // Device state
    pub status: Option<DeviceStatus>,
    /// Survives payloads without a timestamp
    pub last_update: Option<String>,

    // Control workflow state
    pub workflow: ControlWorkflowState,
    /// Action whose verification request is in flight
    pub pending_request: Option<PowerAction>,
    pub code_input: String,
    /// Bumped whenever the Shell should focus the code field
    pub focus_code_input: u32,

    // Refresh state
    pub refresh_busy: bool,

    // Notification state
    pub toast: Option<Toast>,
    pub toast_timer: Option<TimerId>,

    // Header clock
    pub clock: String,

    pub(crate) next_timer_id: TimerId,
}

impl Model {
    pub fn labels(&self) -> &'static Labels {
        self.config.locale.labels()
    }

    /// Controls are usable unless the last status said the device is offline.
    /// Before the first status arrives they are enabled.
    pub fn device_online(&self) -> bool {
        self.status.as_ref().is_none_or(|status| status.online)
    }

    pub fn modal_open(&self) -> bool {
        self.workflow != ControlWorkflowState::Idle
    }

    /// Discard the pending action and reset the code field
    pub fn close_modal(&mut self) {
        self.workflow = ControlWorkflowState::Idle;
        self.code_input.clear();
    }

    pub fn request_code_focus(&mut self) {
        self.focus_code_input = self.focus_code_input.wrapping_add(1);
    }

    pub fn allocate_timer_id(&mut self) -> TimerId {
        self.next_timer_id += 1;
        self.next_timer_id
    }
}
