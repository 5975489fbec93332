//! The `!ping` command: an exact, case-sensitive match on the message text
//! answered with a fixed reply in the same channel.
use std::sync::Arc;

use async_trait::async_trait;
use serenity::http::Http;
use serenity::model::channel::Message;
use serenity::model::id::ChannelId;
use serenity::prelude::Context;

use crate::constants::{PING_REPLY, PING_TRIGGER};

/// Where a reply goes: the channel the triggering message arrived in.
#[async_trait]
pub trait ReplyChannel: Send + Sync {
    async fn send_text(&self, text: &str) -> anyhow::Result<()>;
}

/// A Discord channel reached over the REST client of the current session.
pub struct SerenityChannel {
    http: Arc<Http>,
    channel_id: ChannelId,
}

impl SerenityChannel {
    pub fn new(http: Arc<Http>, channel_id: ChannelId) -> Self {
        Self { http, channel_id }
    }
}

#[async_trait]
impl ReplyChannel for SerenityChannel {
    async fn send_text(&self, text: &str) -> anyhow::Result<()> {
        self.channel_id.say(&self.http, text).await?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PingOutcome {
    Responded,
    Ignored,
}

/// Returns the reply for a message body, if it is the trigger. No trimming.
pub fn reply_for(content: &str) -> Option<&'static str> {
    (content == PING_TRIGGER).then_some(PING_REPLY)
}

pub async fn respond<C>(content: &str, channel: &C) -> anyhow::Result<PingOutcome>
where
    C: ReplyChannel + ?Sized,
{
    match reply_for(content) {
        Some(reply) => {
            channel.send_text(reply).await?;
            Ok(PingOutcome::Responded)
        }
        None => Ok(PingOutcome::Ignored),
    }
}

// Called for every message the session observes.
pub async fn run(ctx: &Context, msg: &Message) {
    let channel = SerenityChannel::new(ctx.http.clone(), msg.channel_id);
    match respond(&msg.content, &channel).await {
        Ok(PingOutcome::Responded) => {
            tracing::debug!(target = "cmd.ping", channel_id = %msg.channel_id, "sent ping reply");
        }
        Ok(PingOutcome::Ignored) => {}
        Err(e) => {
            tracing::error!(target = "cmd.ping", channel_id = %msg.channel_id, error = ?e, "error sending ping response");
        }
    }
}
