pub mod commands;
pub mod config;
pub mod error;
pub mod events;
pub mod http_helpers;
pub mod labels;
pub mod macros;
pub mod model;
pub mod types;
pub mod update;
pub mod view;

#[cfg(target_arch = "wasm32")]
pub mod wasm;


use crux_core::Command;

// Re-export core types
pub use crate::{
    commands::{
        channel::{ChannelOperation, ChannelOutput},
        timer::{TimerId, TimerOperation, TimerOutput},
    },
    config::{ClientConfig, Locale},
    error::{ClientError, ValidationError},
    events::{ChannelEvent, ControlEvent, Event, StatusEvent, UiEvent},
    model::Model,
    types::*,
    view::ViewModel,
};
pub use crux_http::Result as HttpResult;

#[crux_macros::effect(typegen)]
pub enum Effect {
    Render(crux_core::render::RenderOperation),
    Http(crux_http::protocol::HttpRequest),
    Channel(ChannelOperation),
    Timer(TimerOperation),
}

pub type ChannelCmd = crate::commands::channel::Channel<Effect, Event>;
pub type HttpCmd = crux_http::command::Http<Effect, Event>;
pub type TimerCmd = crate::commands::timer::Timer<Effect, Event>;

/// The Core application
#[derive(Default)]
pub struct App;

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = ViewModel;
    type Effect = Effect;

    fn update(&self, event: Self::Event, model: &mut Self::Model) -> Command<Effect, Event> {
        update::update(event, model)
    }

    fn view(&self, model: &Self::Model) -> Self::ViewModel {
        ViewModel::from(model)
    }
}
