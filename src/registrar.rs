//! # Command Deployment
//!
//! One-shot upload of the slash command schemas, either to a single guild
//! (instant, for development) or globally.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Guild and global bulk overwrite

use anyhow::Result;
use log::{error, info};
use serenity::async_trait;
use serenity::builder::CreateApplicationCommand;
use serenity::http::Http;
use serenity::model::application::command::Command;
use serenity::model::id::GuildId;
use std::sync::Arc;

use crate::commands::CommandRegistry;
use crate::config::Config;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployScope {
    Guild(u64),
    Global,
}

impl DeployScope {
    pub fn from_config(global: bool, config: &Config) -> Result<Self> {
        if global {
            Ok(DeployScope::Global)
        } else {
            Ok(DeployScope::Guild(config.guild()?))
        }
    }

    /// REST route the commands are PUT to
    pub fn route(&self, application_id: u64) -> String {
        match self {
            DeployScope::Global => format!("/applications/{}/commands", application_id),
            DeployScope::Guild(guild_id) => format!(
                "/applications/{}/guilds/{}/commands",
                application_id, guild_id
            ),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DeployScope::Global => "globally",
            DeployScope::Guild(_) => "locally",
        }
    }
}

/// Destination of a bulk command overwrite.
#[async_trait]
pub trait CommandSink: Send + Sync {
    /// Replaces every command in `scope`, returning how many Discord accepted
    async fn put_commands(
        &self,
        scope: DeployScope,
        commands: Vec<CreateApplicationCommand>,
    ) -> Result<usize>;
}

/// Discord REST API
pub struct RestSink {
    http: Arc<Http>,
}

impl RestSink {
    pub fn new(token: &str, application_id: u64) -> Self {
        RestSink {
            http: Arc::new(Http::new_with_application_id(token, application_id)),
        }
    }
}

#[async_trait]
impl CommandSink for RestSink {
    async fn put_commands(
        &self,
        scope: DeployScope,
        commands: Vec<CreateApplicationCommand>,
    ) -> Result<usize> {
        let created = match scope {
            DeployScope::Global => {
                Command::set_global_application_commands(&self.http, |builder| {
                    for command in commands {
                        builder.add_application_command(command);
                    }
                    builder
                })
                .await?
            }
            DeployScope::Guild(guild_id) => {
                GuildId(guild_id)
                    .set_application_commands(&self.http, |builder| {
                        for command in commands {
                            builder.add_application_command(command);
                        }
                        builder
                    })
                    .await?
            }
        };
        Ok(created.len())
    }
}

/// Uploads every registered schema and returns the process exit status.
pub async fn run_load(
    sink: &dyn CommandSink,
    commands: &CommandRegistry,
    scope: DeployScope,
    application_id: u64,
) -> i32 {
    info!("Deploying slash commands");
    info!(
        "PUT {} ({} commands)",
        scope.route(application_id),
        commands.len()
    );

    match sink.put_commands(scope, commands.schemas()).await {
        Ok(count) => {
            info!(
                "Successfully loaded commands {} ({} registered)",
                scope.label(),
                count
            );
            EXIT_SUCCESS
        }
        Err(e) => {
            error!("Failed to deploy slash commands: {:#}", e);
            EXIT_FAILURE
        }
    }
}
