//! View model painted by the Shell.
//!
//! `ViewModel::from(&Model)` is a pure function: the same model always yields
//! the same view, so re-rendering a status is idempotent.

use serde::{Deserialize, Serialize};

use crate::model::Model;
use crate::types::{ControlWorkflowState, PowerAction, PowerState, Severity, SignalTone};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewModel {
    pub connection: ConnectionView,
    pub status: StatusView,
    pub on_button: ButtonView,
    pub off_button: ButtonView,
    pub refresh_button: ButtonView,
    pub modal: ModalView,
    pub toast: Option<ToastView>,
    pub clock: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConnectionView {
    pub connected: bool,
    pub label: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusView {
    pub power_label: String,
    /// CSS modifier of the power display: `on`, `off`, `offline` or `unknown`
    pub power_class: String,
    pub signal_label: String,
    pub signal_tone: SignalTone,
    pub signal_color: String,
    pub last_update: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ButtonView {
    pub label: String,
    pub disabled: bool,
    /// Tooltip, empty when none
    pub title: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModalView {
    pub open: bool,
    pub message: String,
    pub code: String,
    pub submit: ButtonView,
    pub focus_code_input: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToastView {
    pub message: String,
    pub severity: Severity,
}

impl From<&Model> for ViewModel {
    fn from(model: &Model) -> Self {
        let labels = model.labels();
        let online = model.device_online();

        let connection = ConnectionView {
            connected: model.is_connected,
            label: if model.is_connected {
                labels.connected
            } else {
                labels.disconnected
            }
            .to_string(),
        };

        let (power_label, power_class) = match model.status.as_ref() {
            _ if !online => (labels.device_offline, "offline"),
            Some(status) if status.power_state == PowerState::On => (labels.power_on, "on"),
            Some(status) if status.power_state == PowerState::Off => (labels.power_off, "off"),
            _ => (labels.power_unknown, "unknown"),
        };

        let signal_strength = model.status.as_ref().and_then(|s| s.signal_strength);
        let signal_offline = model.status.as_ref().is_some_and(|s| s.signal_offline);
        let (signal_label, signal_tone) = match signal_strength {
            _ if !online || signal_offline => {
                (labels.device_offline.to_string(), SignalTone::Offline)
            }
            Some(magnitude) => (
                format!("-{magnitude}dBm"),
                SignalTone::for_strength(magnitude),
            ),
            None => (labels.signal_detecting.to_string(), SignalTone::Detecting),
        };

        let control_button = |action: PowerAction, label: &str| {
            let busy = model.pending_request == Some(action);
            ButtonView {
                label: if busy { labels.busy_processing } else { label }.to_string(),
                disabled: busy || !online,
                title: if online {
                    String::new()
                } else {
                    labels.control_offline_tooltip.to_string()
                },
            }
        };

        let submitting = model.workflow.is_submitting();
        let modal = ModalView {
            open: model.modal_open(),
            message: model
                .workflow
                .action()
                .map(|action| labels.modal_prompt(action).to_string())
                .unwrap_or_default(),
            code: model.code_input.clone(),
            submit: ButtonView {
                label: if submitting {
                    labels.busy_verifying
                } else {
                    labels.button_submit
                }
                .to_string(),
                disabled: submitting,
                title: String::new(),
            },
            focus_code_input: model.focus_code_input,
        };

        Self {
            connection,
            status: StatusView {
                power_label: power_label.to_string(),
                power_class: power_class.to_string(),
                signal_label,
                signal_tone,
                signal_color: signal_tone.color().to_string(),
                last_update: model
                    .last_update
                    .clone()
                    .unwrap_or_else(|| labels.never_updated.to_string()),
            },
            on_button: control_button(PowerAction::On, labels.button_on),
            off_button: control_button(PowerAction::Off, labels.button_off),
            refresh_button: ButtonView {
                label: if model.refresh_busy {
                    labels.busy_refreshing
                } else {
                    labels.button_refresh
                }
                .to_string(),
                disabled: model.refresh_busy,
                title: String::new(),
            },
            modal,
            toast: model.toast.as_ref().map(|toast| ToastView {
                message: toast.message.clone(),
                severity: toast.severity,
            }),
            clock: model.clock.clone(),
        }
    }
}
