//! Push channel command definitions.
//!
//! These types define the interface between the Core and the Shell for the
//! server push channel. The Shell owns the actual socket; lifecycle changes
//! and `status_update` messages come back to the Core as `ChannelEvent`s.

use crux_core::{capability::Operation, command, Command};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

// Operations that the Shell needs to perform for the push channel
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ChannelOperation {
    /// Open the channel, or reopen it if it dropped. A no-op on the Shell
    /// side when it is already connected.
    Connect,
}

// The output from channel operations (shell tells us what happened)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ChannelOutput {
    Connected,
    Disconnected,
    Error { message: String },
}

impl Operation for ChannelOperation {
    type Output = ChannelOutput;
}

/// Command-based push channel API
pub struct Channel<Effect, Event> {
    _effect: PhantomData<Effect>,
    _event: PhantomData<Event>,
}

impl<Effect, Event> Channel<Effect, Event>
where
    Effect: Send + From<crux_core::Request<ChannelOperation>> + 'static,
    Event: Send + 'static,
{
    /// Connect to the push channel
    pub fn connect() -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(ChannelOperation::Connect)
    }
}

/// Request builder for channel operations
#[must_use]
pub struct RequestBuilder<Effect, Event> {
    operation: ChannelOperation,
    _effect: PhantomData<Effect>,
    _event: PhantomData<fn() -> Event>,
}

impl<Effect, Event> RequestBuilder<Effect, Event>
where
    Effect: Send + From<crux_core::Request<ChannelOperation>> + 'static,
    Event: Send + 'static,
{
    fn new(operation: ChannelOperation) -> Self {
        Self {
            operation,
            _effect: PhantomData,
            _event: PhantomData,
        }
    }

    /// Build the request into a Command RequestBuilder
    pub fn build(
        self,
    ) -> command::RequestBuilder<Effect, Event, impl std::future::Future<Output = ChannelOutput>>
    {
        command::RequestBuilder::new(move |ctx| async move {
            Command::request_from_shell(self.operation)
                .into_future(ctx)
                .await
        })
    }
}
