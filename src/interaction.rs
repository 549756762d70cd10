//! # Interaction Surface
//!
//! The slice of a slash-command interaction that commands and the dispatcher
//! need, plus the serenity-backed implementation.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Reply/follow-up/defer with acknowledgement tracking

use anyhow::Result;
use serenity::async_trait;
use serenity::http::Http;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::application::interaction::InteractionResponseType;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::commands::get_string_option;

/// A message sent back to the invoking user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub content: String,
    /// Only visible to the invoking user
    pub ephemeral: bool,
}

impl Reply {
    pub fn public(content: impl Into<String>) -> Self {
        Reply {
            content: content.into(),
            ephemeral: false,
        }
    }

    pub fn ephemeral(content: impl Into<String>) -> Self {
        Reply {
            content: content.into(),
            ephemeral: true,
        }
    }
}

#[async_trait]
pub trait CommandInteraction: Send + Sync {
    /// Name of the invoked command
    fn command_name(&self) -> &str;

    /// Name of the guild the command was used in, `None` for DMs or uncached guilds
    fn guild_name(&self) -> Option<String>;

    fn string_option(&self, name: &str) -> Option<String>;

    /// True once the interaction has been replied to or deferred
    fn is_acknowledged(&self) -> bool;

    async fn reply(&self, reply: Reply) -> Result<()>;

    async fn follow_up(&self, reply: Reply) -> Result<()>;

    async fn defer(&self) -> Result<()>;
}

/// Chat-input interaction received over the gateway.
pub struct SerenityCommand {
    http: Arc<Http>,
    command: ApplicationCommandInteraction,
    guild_name: Option<String>,
    acknowledged: AtomicBool,
}

impl SerenityCommand {
    pub fn new(
        http: Arc<Http>,
        command: ApplicationCommandInteraction,
        guild_name: Option<String>,
    ) -> Self {
        SerenityCommand {
            http,
            command,
            guild_name,
            acknowledged: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl CommandInteraction for SerenityCommand {
    fn command_name(&self) -> &str {
        &self.command.data.name
    }

    fn guild_name(&self) -> Option<String> {
        self.guild_name.clone()
    }

    fn string_option(&self, name: &str) -> Option<String> {
        get_string_option(&self.command.data.options, name)
    }

    fn is_acknowledged(&self) -> bool {
        self.acknowledged.load(Ordering::Acquire)
    }

    async fn reply(&self, reply: Reply) -> Result<()> {
        self.command
            .create_interaction_response(&self.http, |response| {
                response
                    .kind(InteractionResponseType::ChannelMessageWithSource)
                    .interaction_response_data(|message| {
                        message.content(&reply.content).ephemeral(reply.ephemeral)
                    })
            })
            .await?;
        self.acknowledged.store(true, Ordering::Release);
        Ok(())
    }

    async fn follow_up(&self, reply: Reply) -> Result<()> {
        self.command
            .create_followup_message(&self.http, |followup| {
                followup.content(&reply.content).ephemeral(reply.ephemeral)
            })
            .await?;
        Ok(())
    }

    async fn defer(&self) -> Result<()> {
        self.command.defer(&self.http).await?;
        self.acknowledged.store(true, Ordering::Release);
        Ok(())
    }
}
