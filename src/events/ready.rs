use anyhow::Result;
use log::info;
use serenity::async_trait;
use serenity::model::gateway::Activity;

use super::{BotEvent, EventArgs, EventName, FatalError, Payload};

/// Confirms the bot's identity and sets its presence once connected.
pub struct ReadyEvent {
    activity: String,
}

impl ReadyEvent {
    pub fn new(activity: &str) -> Self {
        ReadyEvent {
            activity: activity.to_string(),
        }
    }
}

/// A connected client always knows who it is; anything else means the
/// session is unusable.
fn check_identity(user_id: u64, user_name: &str) -> Result<(), FatalError> {
    if user_id == 0 || user_name.is_empty() {
        return Err(FatalError("client user is null".to_string()));
    }
    Ok(())
}

#[async_trait]
impl BotEvent<EventArgs> for ReadyEvent {
    fn name(&self) -> EventName {
        EventName::Ready
    }

    fn once(&self) -> bool {
        true
    }

    async fn execute(&self, args: &EventArgs) -> Result<()> {
        let ready = match &args.payload {
            Payload::Ready(ready) => ready,
            _ => return Ok(()),
        };

        check_identity(ready.user.id.0, &ready.user.name)?;

        info!("Logged in as {}", ready.user.tag());
        info!("Connected to {} guilds", ready.guilds.len());
        if let Some(shard) = ready.shard {
            info!("Shard: {}/{}", shard[0] + 1, shard[1]);
        }

        args.ctx
            .set_activity(Activity::playing(&self.activity))
            .await;
        Ok(())
    }
}
