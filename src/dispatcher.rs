use anyhow::Result;
use log::{error, info};

use crate::commands::CommandRegistry;
use crate::interaction::{CommandInteraction, Reply};

pub const COMMAND_NOT_FOUND: &str = "Command not found!";
pub const COMMAND_FAILED: &str = "There was an error executing this command!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Executed,
    NotFound,
    /// The handler returned an error and the user was told so
    Failed,
}

/// Routes a chat-input interaction to its command.
///
/// Handler errors never escape: they are logged and reported to the user with
/// an ephemeral message, as a follow-up when the handler already replied or
/// deferred. The returned `Err` only covers failures to send that message.
pub async fn dispatch(
    commands: &CommandRegistry,
    interaction: &dyn CommandInteraction,
) -> Result<Dispatch> {
    let name = interaction.command_name();
    info!(
        "Slash command: {} | {}",
        name,
        interaction.guild_name().unwrap_or_else(|| "DM".to_string())
    );

    let command = match commands.get(name) {
        Some(command) => command,
        None => {
            interaction.reply(Reply::ephemeral(COMMAND_NOT_FOUND)).await?;
            return Ok(Dispatch::NotFound);
        }
    };

    if let Err(e) = command.run(interaction).await {
        error!("Error executing command {}: {:#}", name, e);

        let message = Reply::ephemeral(COMMAND_FAILED);
        if interaction.is_acknowledged() {
            interaction.follow_up(message).await?;
        } else {
            interaction.reply(message).await?;
        }
        return Ok(Dispatch::Failed);
    }

    Ok(Dispatch::Executed)
}
