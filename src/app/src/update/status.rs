use crux_core::{render::render, Command};

use crate::events::{Event, StatusEvent};
use crate::http_helpers::{REFRESH_ENDPOINT, STATUS_ENDPOINT};
use crate::model::Model;
use crate::types::{DeviceStatus, Severity, StatusPayload};
use crate::{api_get, api_post};
use crate::{Effect, TimerCmd};

use super::show_toast;

/// Handle status pulls and the refresh workflow
pub fn handle(event: StatusEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        StatusEvent::Fetch => fetch_status(),

        StatusEvent::FetchResponse(result) => match result {
            Ok(payload) => apply_status(&payload, model),
            Err(e) => {
                log::warn!("{e}");
                let message = model.labels().fetch_failed;
                show_toast(model, message, Severity::Error)
            }
        },

        StatusEvent::Refresh => {
            if model.refresh_busy {
                log::debug!("refresh already in progress");
                return Command::done();
            }
            model.refresh_busy = true;
            api_post!(Status, StatusEvent, REFRESH_ENDPOINT, RefreshResponse, "Refresh")
        }

        StatusEvent::RefreshResponse(result) => {
            let labels = model.labels();
            let toast = match result {
                Ok(reply) if reply.device_offline => {
                    let message = reply
                        .message
                        .unwrap_or_else(|| labels.refresh_started.to_string());
                    show_toast(model, message, Severity::Info)
                }
                Ok(_) => show_toast(model, labels.refresh_started, Severity::Info),
                Err(e) => {
                    log::warn!("{e}");
                    let message = e.user_message(labels, labels.refresh_failed);
                    show_toast(model, message, Severity::Error)
                }
            };

            // the refresh control comes back after a short cooldown, whatever the outcome
            let id = model.allocate_timer_id();
            let cooldown = TimerCmd::start(id, model.config.refresh_cooldown_millis)
                .build()
                .then_send(|output| Event::Status(StatusEvent::RefreshCooldownElapsed(output)));

            Command::all([toast, cooldown])
        }

        StatusEvent::RefreshCooldownElapsed(output) => {
            if output.elapsed().is_some() && model.refresh_busy {
                model.refresh_busy = false;
                render()
            } else {
                Command::done()
            }
        }

        StatusEvent::RefetchElapsed(output) => match output.elapsed() {
            Some(_) => fetch_status(),
            None => Command::done(),
        },
    }
}

pub fn fetch_status() -> Command<Effect, Event> {
    api_get!(
        Status,
        StatusEvent,
        STATUS_ENDPOINT,
        FetchResponse,
        "Fetch status",
        StatusPayload
    )
}

/// Re-pull the status once, after `refetch_delay_millis`
pub fn schedule_refetch(model: &mut Model) -> Command<Effect, Event> {
    let id = model.allocate_timer_id();
    TimerCmd::start(id, model.config.refetch_delay_millis)
        .build()
        .then_send(|output| Event::Status(StatusEvent::RefetchElapsed(output)))
}

/// Apply a pushed or pulled status; last write wins.
pub fn apply_status(payload: &StatusPayload, model: &mut Model) -> Command<Effect, Event> {
    let status = DeviceStatus::from(payload);
    log::debug!("applying status {status:?}");

    if let Some(last_update) = &status.last_update {
        model.last_update = Some(last_update.clone());
    }
    model.status = Some(status);

    render()
}
