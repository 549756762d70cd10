//! Echo slash command: /echo

use anyhow::Result;
use serenity::async_trait;
use serenity::builder::CreateApplicationCommand;
use serenity::model::application::command::CommandOptionType;

use crate::commands::SlashCommand;
use crate::interaction::{CommandInteraction, Reply};

pub struct Echo;

#[async_trait]
impl SlashCommand for Echo {
    fn data(&self) -> CreateApplicationCommand {
        CreateApplicationCommand::default()
            .name("echo")
            .description("Repeat a message back to you")
            .create_option(|option| {
                option
                    .name("message")
                    .description("What to repeat")
                    .kind(CommandOptionType::String)
                    .required(true)
            })
            .to_owned()
    }

    async fn run(&self, interaction: &dyn CommandInteraction) -> Result<()> {
        let message = interaction
            .string_option("message")
            .ok_or_else(|| anyhow::anyhow!("Missing message parameter"))?;

        interaction.reply(Reply::public(message)).await
    }
}
