//! # Slash Commands (/)
//!
//! Every command the bot ships with. Adding a command means adding its
//! handler to [`all`].
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

mod echo;
mod utility;

use super::SlashCommand;

/// Creates all slash command handlers
pub fn all() -> Vec<Box<dyn SlashCommand>> {
    vec![Box::new(utility::Ping), Box::new(echo::Echo)]
}
