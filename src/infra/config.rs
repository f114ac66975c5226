// src/infra/config.rs — Environment configuration
//
// Everything comes from the process environment, the way the hosting
// platform injects it: `BOT_TOKEN` is the Telegram token, `PORT` is the
// port the platform probes for liveness.

use crate::infra::errors::BotError;

pub const DEFAULT_PORT: u16 = 10000;

#[derive(Debug, Clone)]
pub struct Config {
    pub bot_token: String,
    pub port: u16,
}

impl Config {
    /// Load from the process environment. A missing or empty `BOT_TOKEN`
    /// is fatal; `PORT` falls back to [`DEFAULT_PORT`].
    pub fn from_env() -> Result<Self, BotError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, BotError> {
        let bot_token = lookup("BOT_TOKEN")
            .filter(|t| !t.is_empty())
            .ok_or_else(|| BotError::Config("BOT_TOKEN environment variable not set".into()))?;

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| BotError::Config(format!("PORT is not a valid port: {raw}")))?,
            None => DEFAULT_PORT,
        };

        Ok(Self { bot_token, port })
    }
}
