//! Client configuration: bot token plus optional API base URL override.
//! Loaded from environment variables `BOT_TOKEN` and `TELEGRAM_API_URL`;
//! `.env` loading (dotenvy) stays at the binary/test entry points.

use std::env;

use crate::error::{BotApiError, Result};

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub bot_token: String,
    /// Base URL of a self-hosted Bot API server; `None` means the public
    /// `https://api.telegram.org`.
    pub api_url: Option<String>,
}

impl ClientConfig {
    /// Loads from env: `BOT_TOKEN` required, `TELEGRAM_API_URL` optional.
    pub fn from_env() -> Result<Self> {
        let bot_token = env::var("BOT_TOKEN")
            .map_err(|_| BotApiError::Config("BOT_TOKEN not set".to_string()))?;
        let api_url = env::var("TELEGRAM_API_URL").ok();
        Ok(Self { bot_token, api_url })
    }

    pub fn with_token(bot_token: impl Into<String>) -> Self {
        Self {
            bot_token: bot_token.into(),
            api_url: None,
        }
    }
}
