use anyhow::{Context as _, Result};
use log::{error, info};
use serenity::async_trait;
use serenity::model::application::interaction::Interaction;
use serenity::model::gateway::Ready;
use serenity::prelude::*;
use std::sync::Arc;

use crate::commands::CommandRegistry;
use crate::config::Config;
use crate::events::{default_events, EventArgs, EventRegistry, Payload};

/// Everything event handlers need, built once at startup
pub struct App {
    pub commands: CommandRegistry,
    pub events: EventRegistry<EventArgs>,
}

impl App {
    pub fn new(commands: CommandRegistry, events: EventRegistry<EventArgs>) -> Self {
        App { commands, events }
    }
}

struct Handler {
    app: Arc<App>,
}

impl Handler {
    fn new(app: App) -> Self {
        Handler { app: Arc::new(app) }
    }

    async fn emit(&self, ctx: Context, payload: Payload) {
        let name = payload.name();
        let args = EventArgs {
            ctx,
            app: Arc::clone(&self.app),
            payload,
        };

        if let Err(e) = self.app.events.emit(name, &args).await {
            error!("{:#}", e);
            std::process::exit(1);
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        self.emit(ctx, Payload::Ready(ready)).await;
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        self.emit(ctx, Payload::InteractionCreate(interaction)).await;
    }
}

/// Connects to the gateway and serves events until the connection ends.
pub async fn start(config: &Config, commands: CommandRegistry) -> Result<()> {
    let events = default_events(&config.activity);
    info!("registered client events");

    let intents = GatewayIntents::GUILDS;
    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(Handler::new(App::new(commands, events)))
        .await
        .context("Failed to create Discord client")?;

    info!("Connecting to Discord gateway with intents {:?}", intents);
    client
        .start()
        .await
        .context("Failed to establish gateway connection")
}
