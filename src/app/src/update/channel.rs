use crux_core::Command;

use crate::commands::channel::ChannelOutput;
use crate::events::{ChannelEvent, Event};
use crate::model::Model;
use crate::types::{Severity, StatusPayload};
use crate::update_field;
use crate::{ChannelCmd, Effect};

use super::{show_toast, status::apply_status};

/// Handle push channel lifecycle, pushed status and reconnection triggers
pub fn handle(event: ChannelEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        ChannelEvent::Connected => {
            log::info!("push channel connected");
            update_field!(model.is_connected, true)
        }

        ChannelEvent::Disconnected => {
            log::info!("push channel disconnected");
            update_field!(model.is_connected, false)
        }

        ChannelEvent::ConnectError { message } => {
            log::warn!("push channel error: {message}");
            update_field!(model.is_connected, false)
        }

        ChannelEvent::ConnectResponse(output) => match output {
            ChannelOutput::Connected => handle(ChannelEvent::Connected, model),
            ChannelOutput::Disconnected => handle(ChannelEvent::Disconnected, model),
            ChannelOutput::Error { message } => {
                handle(ChannelEvent::ConnectError { message }, model)
            }
        },

        ChannelEvent::StatusUpdate { payload } => {
            match serde_json::from_str::<StatusPayload>(&payload) {
                Ok(status) => apply_status(&status, model),
                Err(e) => {
                    // keep the previous rendering
                    log::error!("failed to parse status update: {e}. JSON: {payload}");
                    Command::done()
                }
            }
        }

        ChannelEvent::PageVisible => reconnect(model),

        ChannelEvent::NetworkOnline => {
            let message = model.labels().network_online;
            Command::all([show_toast(model, message, Severity::Success), reconnect(model)])
        }

        ChannelEvent::NetworkOffline => {
            let message = model.labels().network_offline;
            show_toast(model, message, Severity::Error)
        }
    }
}

pub fn connect() -> Command<Effect, Event> {
    ChannelCmd::connect()
        .build()
        .then_send(|output| Event::Channel(ChannelEvent::ConnectResponse(output)))
}

/// Ask the Shell to reconnect unless the channel is already up
fn reconnect(model: &Model) -> Command<Effect, Event> {
    if model.is_connected {
        Command::done()
    } else {
        log::info!("requesting push channel reconnect");
        connect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PowerState;

    #[test]
    fn lifecycle_events_toggle_connection_state() {
        let mut model = Model::default();

        let _ = handle(ChannelEvent::Connected, &mut model);
        assert!(model.is_connected);

        let _ = handle(ChannelEvent::Disconnected, &mut model);
        assert!(!model.is_connected);

        model.is_connected = true;
        let _ = handle(
            ChannelEvent::ConnectError {
                message: "timeout".to_string(),
            },
            &mut model,
        );
        assert!(!model.is_connected);
    }

    #[test]
    fn connect_response_is_applied() {
        let mut model = Model::default();

        let _ = handle(
            ChannelEvent::ConnectResponse(ChannelOutput::Connected),
            &mut model,
        );

        assert!(model.is_connected);
    }

    #[test]
    fn status_update_is_applied() {
        let mut model = Model::default();

        let _ = handle(
            ChannelEvent::StatusUpdate {
                payload: r#"{"status":"off","online":true,"signal":"80"}"#.to_string(),
            },
            &mut model,
        );

        let status = model.status.expect("status applied");
        assert_eq!(status.power_state, PowerState::Off);
        assert_eq!(status.signal_strength, Some(80));
    }

    #[test]
    fn malformed_status_update_keeps_previous_status() {
        let mut model = Model::default();
        let _ = handle(
            ChannelEvent::StatusUpdate {
                payload: r#"{"status":"on"}"#.to_string(),
            },
            &mut model,
        );
        let before = model.clone();

        let _ = handle(
            ChannelEvent::StatusUpdate {
                payload: "not json".to_string(),
            },
            &mut model,
        );

        assert_eq!(model, before);
    }

    #[test]
    fn network_offline_shows_error_toast() {
        let mut model = Model::default();

        let _ = handle(ChannelEvent::NetworkOffline, &mut model);

        let toast = model.toast.expect("toast shown");
        assert_eq!(toast.message, "网络连接断开");
        assert_eq!(toast.severity, Severity::Error);
    }
}
