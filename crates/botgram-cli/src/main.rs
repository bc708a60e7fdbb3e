//! botgram CLI: manual smoke commands against the Bot API. Token from env
//! (BOT_TOKEN, optionally TELEGRAM_API_URL), `--token` overrides.

use std::path::PathBuf;

use anyhow::{Context, Result};
use botgram_client::payloads::GetUpdates;
use botgram_client::{BotApiClient, ClientConfig};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "botgram")]
#[command(about = "Telegram Bot API smoke CLI: get-me, send-message, get-updates, download-file", long_about = None)]
#[command(version)]
struct Cli {
    /// Bot token; overrides BOT_TOKEN.
    #[arg(short, long, global = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the bot's own user object (token check).
    GetMe,
    /// Send a text message to a chat (numeric id or @channelusername).
    SendMessage {
        #[arg(short, long)]
        chat: String,
        text: String,
    },
    /// Fetch pending updates via long polling.
    GetUpdates {
        #[arg(short, long)]
        offset: Option<i64>,
        /// Long-polling timeout in seconds.
        #[arg(long, default_value = "0")]
        timeout: u32,
    },
    /// Resolve a file_id via getFile and save the bytes.
    DownloadFile {
        file_id: String,
        #[arg(short, long, default_value = "downloaded.bin")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let client = build_client(cli.token)?;

    match cli.command {
        Commands::GetMe => {
            let me = client.get_me().await?;
            println!(
                "id={} username={} name={}",
                me.id,
                me.username.as_deref().unwrap_or("-"),
                me.full_name()
            );
        }
        Commands::SendMessage { chat, text } => {
            let chat_id = parse_chat(&chat);
            let message = client.send_message(chat_id, text).await?;
            info!(message_id = message.message_id, chat_id = message.chat.id, "message sent");
        }
        Commands::GetUpdates { offset, timeout } => {
            let mut payload = GetUpdates::new().timeout(timeout);
            if let Some(offset) = offset {
                payload = payload.offset(offset);
            }
            let updates = client.get_updates(&payload).await?;
            println!("{} update(s)", updates.len());
            for update in &updates {
                println!("  #{}: {:?}", update.update_id, update.kind());
            }
        }
        Commands::DownloadFile { file_id, output } => {
            let bytes = client.get_file_and_download(file_id).await?;
            std::fs::write(&output, &bytes)
                .with_context(|| format!("writing {}", output.display()))?;
            info!(bytes = bytes.len(), path = %output.display(), "file saved");
        }
    }

    Ok(())
}

/// Client from env; `--token` takes precedence over BOT_TOKEN.
fn build_client(token_override: Option<String>) -> Result<BotApiClient> {
    let config = match token_override {
        Some(token) => ClientConfig {
            api_url: std::env::var("TELEGRAM_API_URL").ok(),
            ..ClientConfig::with_token(token)
        },
        None => ClientConfig::from_env().context("BOT_TOKEN not set (flag, env, or .env)")?,
    };
    Ok(BotApiClient::from_config(config))
}

/// Numeric ids stay numeric; anything else is treated as a @username.
fn parse_chat(raw: &str) -> botgram_client::types::ChatId {
    match raw.parse::<i64>() {
        Ok(id) => botgram_client::types::ChatId::Id(id),
        Err(_) => botgram_client::types::ChatId::Username(raw.to_string()),
    }
}
