use crate::commands;
use crate::constants::READY_MESSAGE;
use crate::model::ReadyLatch;
use async_trait::async_trait;
use serenity::client::Context;
use serenity::model::{channel::Message, gateway::Ready};
use serenity::prelude::EventHandler;

#[derive(Default)]
pub struct Handler {
    pub ready: ReadyLatch,
}

impl Handler {
    pub fn new() -> Self {
        Self::default()
    }

    /// The line to print for a `ready` event; `None` after the first one.
    pub fn ready_announcement(&self) -> Option<&'static str> {
        self.ready.fire().then_some(READY_MESSAGE)
    }
}

#[async_trait]
impl EventHandler for Handler {
    // Every message is checked; no guild, channel or author filter.
    async fn message(&self, ctx: Context, msg: Message) {
        commands::ping::run(&ctx, &msg).await;
    }

    async fn ready(&self, _ctx: Context, ready: Ready) {
        let Some(line) = self.ready_announcement() else {
            tracing::debug!(target = "session", user = %ready.user.name, "gateway ready again after reconnect");
            return;
        };
        println!("{line}");
        tracing::info!(target = "session", user = %ready.user.name, guilds = ready.guilds.len(), "connected and ready");
    }
}
