//! Utility slash commands: /ping

use anyhow::Result;
use serenity::async_trait;
use serenity::builder::CreateApplicationCommand;

use crate::commands::SlashCommand;
use crate::interaction::{CommandInteraction, Reply};

pub struct Ping;

#[async_trait]
impl SlashCommand for Ping {
    fn data(&self) -> CreateApplicationCommand {
        CreateApplicationCommand::default()
            .name("ping")
            .description("Test bot responsiveness")
            .to_owned()
    }

    async fn run(&self, interaction: &dyn CommandInteraction) -> Result<()> {
        interaction.reply(Reply::public("Pong!")).await
    }
}
