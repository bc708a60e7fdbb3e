//! # botgram-client
//!
//! HTTP client for the Telegram Bot API. [`BotApiClient`] dispatches typed
//! request payloads (anything implementing [`Payload`]) and surfaces the
//! service's error envelope as [`BotApiError`]. Per-endpoint payload structs
//! and convenience methods live under [`payloads`].
//!
//! ```rust,no_run
//! use botgram_client::BotApiClient;
//!
//! async fn example() -> botgram_client::Result<()> {
//!     let client = BotApiClient::from_env()?;
//!     let me = client.get_me().await?;
//!     let sent = client.send_message(me.id, "hello").await?;
//!     assert_eq!(sent.text.as_deref(), Some("hello"));
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod payloads;

pub use client::{BotApiClient, Payload, API_URL};
pub use config::ClientConfig;
pub use error::{ApiError, BotApiError, Result};

// The types crate is part of this crate's public API surface.
pub use botgram_types as types;
