//! Session bootstrap: token from the environment, one serenity client, login.
use std::env;
use std::fmt;

use anyhow::{Context as _, Result};
use serenity::Client;
use serenity::model::gateway::GatewayIntents;

use crate::constants::TOKEN_ENV_VAR;
use crate::handler::Handler;

/// The bot token exactly as found in the environment. Not validated here;
/// the gateway rejects bad tokens at login.
pub struct Credentials {
    token: String,
}

impl Credentials {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Reads the token variable. Unset or non-unicode gives an empty token.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: FnOnce(&str) -> Option<String>,
    {
        Self::new(lookup(TOKEN_ENV_VAR).unwrap_or_default())
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn is_empty(&self) -> bool {
        self.token.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &if self.is_empty() { "<empty>" } else { "<redacted>" })
            .finish()
    }
}

/// Message text is only delivered with MESSAGE_CONTENT.
pub fn intents() -> GatewayIntents {
    GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
}

/// The single gateway client of this process.
pub struct Session {
    client: Client,
}

impl Session {
    pub async fn new(credentials: Credentials) -> Result<Self> {
        if credentials.is_empty() {
            tracing::debug!(target = "session", var = TOKEN_ENV_VAR, "token variable is unset or empty");
        }
        let client = Client::builder(credentials.token(), intents())
            .event_handler(Handler::new())
            .await
            .context("Error creating the Discord client.")?;
        Ok(Self { client })
    }

    /// Logs in and runs the event loop until the library stops it. No retry.
    pub async fn run(&mut self) -> Result<()> {
        self.client.start().await.context("Client error")
    }
}
