//! # Command System
//!
//! Slash command trait and the registry built from the compiled command set.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Compile-time registry replacing directory scanning

pub mod slash;

use anyhow::Result;
use log::{info, warn};
use serenity::async_trait;
use serenity::builder::CreateApplicationCommand;
use serenity::model::application::interaction::application_command::CommandDataOption;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::interaction::CommandInteraction;

/// A slash command handler.
///
/// The command name comes from the schema returned by [`SlashCommand::data`].
#[async_trait]
pub trait SlashCommand: Send + Sync {
    /// Schema uploaded to Discord
    fn data(&self) -> CreateApplicationCommand;

    async fn run(&self, interaction: &dyn CommandInteraction) -> Result<()>;

    /// Identifies the handler in startup errors
    fn source(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

struct RegisteredCommand {
    schema: CreateApplicationCommand,
    handler: Arc<dyn SlashCommand>,
}

/// Name → handler mapping, immutable after [`CommandRegistry::load`].
#[derive(Default)]
pub struct CommandRegistry {
    commands: BTreeMap<String, RegisteredCommand>,
}

impl CommandRegistry {
    /// Builds the registry, rejecting any command whose schema lacks a name or
    /// description. A later command with an already registered name replaces
    /// the earlier one.
    pub fn load(commands: Vec<Box<dyn SlashCommand>>) -> Result<Self> {
        let mut registry = CommandRegistry::default();

        for command in commands {
            let schema = command.data();
            let name = schema_str(&schema, "name").ok_or_else(|| {
                anyhow::anyhow!("Command {} does not have a data property", command.source())
            })?;
            if schema_str(&schema, "description").is_none() {
                anyhow::bail!(
                    "Command {} ({}) does not have a description",
                    command.source(),
                    name
                );
            }

            let handler: Arc<dyn SlashCommand> = Arc::from(command);
            if let Some(previous) = registry
                .commands
                .insert(name.clone(), RegisteredCommand { schema, handler })
            {
                warn!(
                    "Duplicate command name '{}': {} replaced by a later registration",
                    name,
                    previous.handler.source()
                );
            }
        }

        info!("Loaded {} slash commands", registry.len());
        Ok(registry)
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn SlashCommand>> {
        self.commands.get(name).map(|c| Arc::clone(&c.handler))
    }

    /// Registered command names, sorted
    pub fn names(&self) -> Vec<&str> {
        self.commands.keys().map(|k| k.as_str()).collect()
    }

    /// Schemas to upload, one per registered name
    pub fn schemas(&self) -> Vec<CreateApplicationCommand> {
        self.commands.values().map(|c| c.schema.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

fn schema_str(schema: &CreateApplicationCommand, key: &str) -> Option<String> {
    schema
        .0
        .get(key)
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}

/// Utility function to get string option from slash command
pub fn get_string_option(options: &[CommandDataOption], name: &str) -> Option<String> {
    options
        .iter()
        .find(|opt| opt.name == name)
        .and_then(|opt| opt.value.as_ref())
        .and_then(|val| val.as_str())
        .map(|s| s.to_string())
}
