use chrono::{DateTime, FixedOffset};
use crux_core::{render::render, Command};

use crate::commands::timer::TimerId;
use crate::config::Locale;
use crate::events::{ControlEvent, Event, StatusEvent, UiEvent};
use crate::model::Model;
use crate::types::{Severity, Toast};
use crate::update_field;
use crate::{Effect, TimerCmd};

use super::{control, status};

/// Handle keyboard, clock and notification events
pub fn handle(event: UiEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        UiEvent::KeyDown {
            key,
            ctrl,
            meta,
            in_code_input,
        } => match key.as_str() {
            "Escape" if model.modal_open() => control::handle(ControlEvent::CloseModal, model),
            "Enter" if model.modal_open() && in_code_input => {
                let code = model.code_input.clone();
                control::handle(ControlEvent::SubmitVerification { code }, model)
            }
            "r" if ctrl || meta => status::handle(StatusEvent::Refresh, model),
            _ => Command::done(),
        },

        UiEvent::ClockTick {
            epoch_millis,
            utc_offset_minutes,
        } => match format_clock(epoch_millis, utc_offset_minutes, model.config.locale) {
            Some(clock) => update_field!(model.clock, clock),
            None => {
                log::warn!("clock tick out of range: {epoch_millis} (offset {utc_offset_minutes})");
                Command::done()
            }
        },

        UiEvent::DismissToast => {
            model.toast = None;
            match model.toast_timer.take() {
                Some(id) => Command::all([render(), cancel_toast_timer(id)]),
                None => render(),
            }
        }

        UiEvent::ToastElapsed(output) => {
            if output.elapsed().is_some() && output.elapsed() == model.toast_timer {
                model.toast = None;
                model.toast_timer = None;
                render()
            } else {
                // superseded by a newer toast
                Command::done()
            }
        }
    }
}

/// Show a toast, replacing any visible one and restarting the dismiss timer
pub fn show_toast(
    model: &mut Model,
    message: impl Into<String>,
    severity: Severity,
) -> Command<Effect, Event> {
    let mut commands = Vec::with_capacity(3);

    if let Some(previous) = model.toast_timer.take() {
        commands.push(cancel_toast_timer(previous));
    }

    let id = model.allocate_timer_id();
    model.toast = Some(Toast::new(message, severity));
    model.toast_timer = Some(id);

    commands.push(render());
    commands.push(
        TimerCmd::start(id, model.config.toast_millis)
            .build()
            .then_send(|output| Event::Ui(UiEvent::ToastElapsed(output))),
    );

    Command::all(commands)
}

fn cancel_toast_timer(id: TimerId) -> Command<Effect, Event> {
    TimerCmd::cancel(id)
        .build()
        .then_send(|output| Event::Ui(UiEvent::ToastElapsed(output)))
}

/// Format wall-clock time the way the header clock shows it
pub fn format_clock(epoch_millis: i64, utc_offset_minutes: i32, locale: Locale) -> Option<String> {
    let offset = FixedOffset::east_opt(utc_offset_minutes.checked_mul(60)?)?;
    let time = DateTime::from_timestamp_millis(epoch_millis)?.with_timezone(&offset);
    Some(time.format(locale.labels().clock_format).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::timer::TimerOutput;
    use crate::types::{ControlWorkflowState, PowerAction};

    fn key(key: &str) -> UiEvent {
        UiEvent::KeyDown {
            key: key.to_string(),
            ctrl: false,
            meta: false,
            in_code_input: false,
        }
    }

    #[test]
    fn new_toast_replaces_previous_one() {
        let mut model = Model::default();

        let _ = show_toast(&mut model, "first", Severity::Info);
        let first_timer = model.toast_timer;
        let _ = show_toast(&mut model, "second", Severity::Error);

        assert_eq!(model.toast, Some(Toast::new("second", Severity::Error)));
        assert_ne!(model.toast_timer, first_timer);

        // the first dismissal no longer applies
        let _ = handle(
            UiEvent::ToastElapsed(TimerOutput::Elapsed {
                id: first_timer.unwrap(),
            }),
            &mut model,
        );
        assert!(model.toast.is_some());

        let _ = handle(
            UiEvent::ToastElapsed(TimerOutput::Elapsed {
                id: model.toast_timer.unwrap(),
            }),
            &mut model,
        );
        assert!(model.toast.is_none());
        assert!(model.toast_timer.is_none());
    }

    #[test]
    fn dismiss_clears_toast() {
        let mut model = Model::default();
        let _ = show_toast(&mut model, "hello", Severity::Success);

        let _ = handle(UiEvent::DismissToast, &mut model);

        assert!(model.toast.is_none());
        assert!(model.toast_timer.is_none());
    }

    #[test]
    fn escape_closes_open_modal() {
        let mut model = Model {
            workflow: ControlWorkflowState::AwaitingCode {
                action: PowerAction::On,
            },
            ..Default::default()
        };

        let _ = handle(key("Escape"), &mut model);

        assert!(!model.modal_open());
    }

    #[test]
    fn enter_submits_only_from_code_field() {
        let mut model = Model {
            workflow: ControlWorkflowState::AwaitingCode {
                action: PowerAction::On,
            },
            code_input: "123456".to_string(),
            ..Default::default()
        };

        let _ = handle(key("Enter"), &mut model);
        assert!(!model.workflow.is_submitting());

        let _ = handle(
            UiEvent::KeyDown {
                key: "Enter".to_string(),
                ctrl: false,
                meta: false,
                in_code_input: true,
            },
            &mut model,
        );
        assert!(model.workflow.is_submitting());
    }

    #[test]
    fn modifier_r_triggers_refresh() {
        let mut model = Model::default();

        let _ = handle(key("r"), &mut model);
        assert!(!model.refresh_busy);

        let _ = handle(
            UiEvent::KeyDown {
                key: "r".to_string(),
                ctrl: false,
                meta: true,
                in_code_input: false,
            },
            &mut model,
        );
        assert!(model.refresh_busy);
    }

    #[test]
    fn clock_is_formatted_per_locale() {
        // 2024-01-01T02:00:00Z
        let millis = 1_704_074_400_000;

        assert_eq!(
            format_clock(millis, 8 * 60, Locale::ZhCn).as_deref(),
            Some("2024/01/01 10:00:00")
        );
        assert_eq!(
            format_clock(millis, 0, Locale::En).as_deref(),
            Some("01/01/2024, 02:00:00")
        );
        assert_eq!(format_clock(millis, 24 * 60, Locale::ZhCn), None);
    }

    #[test]
    fn clock_tick_updates_model() {
        let mut model = Model::default();

        let _ = handle(
            UiEvent::ClockTick {
                epoch_millis: 1_704_074_400_000,
                utc_offset_minutes: 480,
            },
            &mut model,
        );

        assert_eq!(model.clock, "2024/01/01 10:00:00");
    }
}
