use anyhow::Result;
use serenity::async_trait;
use serenity::model::application::command::CommandType;
use serenity::model::application::interaction::Interaction;
use std::sync::Arc;

use super::{BotEvent, EventArgs, EventName, Payload};
use crate::dispatcher::dispatch;
use crate::interaction::SerenityCommand;

/// Hands chat-input commands to the dispatcher; other interactions are ignored.
pub struct InteractionCreateEvent;

#[async_trait]
impl BotEvent<EventArgs> for InteractionCreateEvent {
    fn name(&self) -> EventName {
        EventName::InteractionCreate
    }

    async fn execute(&self, args: &EventArgs) -> Result<()> {
        let command = match &args.payload {
            Payload::InteractionCreate(Interaction::ApplicationCommand(command))
                if command.data.kind == CommandType::ChatInput =>
            {
                command
            }
            _ => return Ok(()),
        };

        let guild_name = command.guild_id.and_then(|id| id.name(&args.ctx.cache));
        let interaction =
            SerenityCommand::new(Arc::clone(&args.ctx.http), command.clone(), guild_name);

        dispatch(&args.app.commands, &interaction).await?;
        Ok(())
    }
}
