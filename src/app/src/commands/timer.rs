//! One-shot timer command definitions.
//!
//! The Core cannot sleep; it asks the Shell to resolve a request after a
//! delay. Every timer carries an id allocated by the Core so that it can be
//! cancelled and so that a late `Elapsed` can be matched against the timer
//! the Core is still waiting for.

use crux_core::{capability::Operation, command, Command};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

pub type TimerId = u64;

// Operations that the Shell needs to perform for timers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimerOperation {
    /// Resolve with `Elapsed` after `millis` milliseconds
    Start { id: TimerId, millis: u64 },
    /// Drop a pending timer; the Shell resolves the `Start` request with
    /// `Cancelled` and this request with `Cancelled` as well
    Cancel { id: TimerId },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimerOutput {
    Elapsed { id: TimerId },
    Cancelled { id: TimerId },
}

impl TimerOutput {
    /// Id of the timer if it ran to completion
    pub fn elapsed(&self) -> Option<TimerId> {
        match self {
            Self::Elapsed { id } => Some(*id),
            Self::Cancelled { .. } => None,
        }
    }
}

impl Operation for TimerOperation {
    type Output = TimerOutput;
}

/// Command-based timer API
pub struct Timer<Effect, Event> {
    _effect: PhantomData<Effect>,
    _event: PhantomData<Event>,
}

impl<Effect, Event> Timer<Effect, Event>
where
    Effect: Send + From<crux_core::Request<TimerOperation>> + 'static,
    Event: Send + 'static,
{
    /// Start a one-shot timer
    pub fn start(id: TimerId, millis: u64) -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(TimerOperation::Start { id, millis })
    }

    /// Cancel a pending timer
    pub fn cancel(id: TimerId) -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(TimerOperation::Cancel { id })
    }
}

/// Request builder for timer operations
#[must_use]
pub struct RequestBuilder<Effect, Event> {
    operation: TimerOperation,
    _effect: PhantomData<Effect>,
    _event: PhantomData<fn() -> Event>,
}

impl<Effect, Event> RequestBuilder<Effect, Event>
where
    Effect: Send + From<crux_core::Request<TimerOperation>> + 'static,
    Event: Send + 'static,
{
    fn new(operation: TimerOperation) -> Self {
        Self {
            operation,
            _effect: PhantomData,
            _event: PhantomData,
        }
    }

    /// Build the request into a Command RequestBuilder
    pub fn build(
        self,
    ) -> command::RequestBuilder<Effect, Event, impl std::future::Future<Output = TimerOutput>> {
        command::RequestBuilder::new(move |ctx| async move {
            Command::request_from_shell(self.operation)
                .into_future(ctx)
                .await
        })
    }
}
