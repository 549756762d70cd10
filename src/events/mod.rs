//! # Event System
//!
//! Gateway event handlers and the registry that fans events out to them.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Once/on semantics over a compiled event list

mod interaction_create;
mod ready;

pub use interaction_create::InteractionCreateEvent;
pub use ready::ReadyEvent;

use anyhow::Result;
use log::{debug, error};
use serenity::async_trait;
use serenity::model::application::interaction::Interaction;
use serenity::model::gateway::Ready;
use serenity::prelude::Context;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::app::App;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventName {
    Ready,
    InteractionCreate,
}

impl EventName {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventName::Ready => "READY",
            EventName::InteractionCreate => "INTERACTION_CREATE",
        }
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Startup-fatal failure; the process exits with status 1 when an event returns it.
#[derive(Debug)]
pub struct FatalError(pub String);

impl fmt::Display for FatalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for FatalError {}

/// A handler for one gateway event, generic over what it receives.
#[async_trait]
pub trait BotEvent<A>: Send + Sync {
    fn name(&self) -> EventName;

    /// Run at most once for the lifetime of the registry
    fn once(&self) -> bool {
        false
    }

    async fn execute(&self, args: &A) -> Result<()>;
}

/// Payload of a gateway event as delivered by serenity
pub enum Payload {
    Ready(Ready),
    InteractionCreate(Interaction),
}

impl Payload {
    pub fn name(&self) -> EventName {
        match self {
            Payload::Ready(_) => EventName::Ready,
            Payload::InteractionCreate(_) => EventName::InteractionCreate,
        }
    }
}

/// What gateway event handlers receive
pub struct EventArgs {
    pub ctx: Context,
    pub app: Arc<App>,
    pub payload: Payload,
}

struct Entry<A> {
    event: Box<dyn BotEvent<A>>,
    fired: AtomicBool,
}

pub struct EventRegistry<A> {
    entries: Vec<Entry<A>>,
}

impl<A> Default for EventRegistry<A> {
    fn default() -> Self {
        EventRegistry {
            entries: Vec::new(),
        }
    }
}

impl<A: Sync> EventRegistry<A> {
    pub fn new(events: Vec<Box<dyn BotEvent<A>>>) -> Self {
        let mut registry = EventRegistry::default();
        for event in events {
            registry.register(event);
        }
        registry
    }

    pub fn register(&mut self, event: Box<dyn BotEvent<A>>) {
        self.entries.push(Entry {
            event,
            fired: AtomicBool::new(false),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Runs every handler registered for `name` and returns how many ran.
    ///
    /// Errors are logged and do not stop later handlers, except a
    /// [`FatalError`], which is returned immediately.
    pub async fn emit(&self, name: EventName, args: &A) -> Result<usize> {
        let mut ran = 0;

        for entry in self.entries.iter().filter(|e| e.event.name() == name) {
            if entry.event.once() && entry.fired.swap(true, Ordering::AcqRel) {
                debug!("Skipping already fired once-handler for {}", name);
                continue;
            }

            ran += 1;
            if let Err(e) = entry.event.execute(args).await {
                if e.downcast_ref::<FatalError>().is_some() {
                    return Err(e);
                }
                error!("Error in {} event handler: {:#}", name, e);
            }
        }

        Ok(ran)
    }
}

/// The gateway events the bot listens to
pub fn default_events(activity: &str) -> EventRegistry<EventArgs> {
    let events: Vec<Box<dyn BotEvent<EventArgs>>> = vec![
        Box::new(ReadyEvent::new(activity)),
        Box::new(InteractionCreateEvent),
    ];
    EventRegistry::new(events)
}
