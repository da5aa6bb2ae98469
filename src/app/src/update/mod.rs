mod channel;
mod control;
mod status;
mod ui;

pub use ui::{format_clock, show_toast};

use crux_core::{render::render, Command};

use crate::events::Event;
use crate::model::Model;
use crate::Effect;

/// Main update dispatcher - routes events to domain-specific handlers
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::Initialize { config } => {
            if let Some(config) = config {
                model.config = config;
            }
            log::info!("initializing plug panel ({:?})", model.config.locale);
            Command::all([render(), channel::connect(), status::fetch_status()])
        }

        Event::Channel(event) => channel::handle(event, model),
        Event::Status(event) => status::handle(event, model),
        Event::Control(event) => control::handle(event, model),
        Event::Ui(event) => ui::handle(event, model),
    }
}
