//! Shared helpers for the live-API test suites.
//!
//! Live tests are `#[ignore]` and need `BOT_TOKEN` plus (per suite)
//! `TEST_CHAT_ID`, `TEST_USER_ID`, `TEST_CHANNEL`, `PAYMENT_PROVIDER_TOKEN`.
//! Run with: `cargo test -p botgram-client -- --ignored`

use std::env;
use std::path::Path;

use botgram_client::BotApiClient;

/// Loads `.env` from the workspace root so tokens are available when tests
/// run from the repo root or from the crate directory.
pub fn load_root_env() {
    let root_env = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../.env");
    let _ = dotenvy::from_path(root_env);
    let _ = dotenvy::dotenv();
}

pub fn live_client() -> BotApiClient {
    load_root_env();
    BotApiClient::from_env()
        .expect("BOT_TOKEN environment variable must be set for live tests (or set in root .env)")
}

fn required_var(name: &str) -> String {
    env::var(name).unwrap_or_else(|_| panic!("{name} must be set for this test"))
}

/// Supergroup the bot administers; most suites run against it.
#[allow(dead_code)]
pub fn test_chat_id() -> i64 {
    required_var("TEST_CHAT_ID")
        .parse()
        .expect("TEST_CHAT_ID must be a numeric chat id")
}

/// A regular (non-admin) member of the test supergroup.
#[allow(dead_code)]
pub fn test_user_id() -> i64 {
    required_var("TEST_USER_ID")
        .parse()
        .expect("TEST_USER_ID must be a numeric user id")
}

/// `@username` of a channel the bot administers.
#[allow(dead_code)]
pub fn test_channel() -> String {
    required_var("TEST_CHANNEL")
}

/// Private chat for invoices (payments only work in private chats).
#[allow(dead_code)]
pub fn private_chat_id() -> i64 {
    required_var("TEST_PRIVATE_CHAT_ID")
        .parse()
        .expect("TEST_PRIVATE_CHAT_ID must be a numeric chat id")
}

#[allow(dead_code)]
pub fn payment_provider_token() -> String {
    required_var("PAYMENT_PROVIDER_TOKEN")
}
