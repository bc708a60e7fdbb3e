//! Receiving updates: long polling and webhook management.

use botgram_types::{AllowedUpdate, InputFile, Update, WebhookInfo};
use serde::Serialize;

use crate::client::{BotApiClient, Payload};
use crate::error::Result;

/// `getUpdates` (long polling). Mutually exclusive with a webhook.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetUpdates {
    /// Id of the first update to return; pass last handled `update_id + 1`
    /// to confirm earlier updates (they are forgotten server-side).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    /// 1-100, defaults to 100 server-side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Long-polling timeout in seconds; 0 is short polling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_updates: Option<Vec<AllowedUpdate>>,
}

impl GetUpdates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn timeout(mut self, seconds: u32) -> Self {
        self.timeout = Some(seconds);
        self
    }
}

impl Payload for GetUpdates {
    const METHOD: &'static str = "getUpdates";
    type Output = Vec<Update>;
}

/// `setWebhook`. The certificate, when self-signed, is uploaded as a file.
#[derive(Debug, Clone, Serialize)]
pub struct SetWebhook {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate: Option<InputFile>,
    /// 1-100 simultaneous webhook connections, defaults to 40 server-side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_updates: Option<Vec<AllowedUpdate>>,
}

impl SetWebhook {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            certificate: None,
            max_connections: None,
            allowed_updates: None,
        }
    }
}

impl Payload for SetWebhook {
    const METHOD: &'static str = "setWebhook";
    type Output = bool;

    fn files(&self) -> Vec<&InputFile> {
        self.certificate.iter().collect()
    }
}

/// `deleteWebhook`: back to `getUpdates`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DeleteWebhook {}

impl Payload for DeleteWebhook {
    const METHOD: &'static str = "deleteWebhook";
    type Output = bool;
}

/// `getWebhookInfo`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetWebhookInfo {}

impl Payload for GetWebhookInfo {
    const METHOD: &'static str = "getWebhookInfo";
    type Output = WebhookInfo;
}

impl BotApiClient {
    pub async fn get_updates(&self, payload: &GetUpdates) -> Result<Vec<Update>> {
        self.request(payload).await
    }

    pub async fn set_webhook(&self, url: impl Into<String>) -> Result<bool> {
        self.request(&SetWebhook::new(url)).await
    }

    pub async fn delete_webhook(&self) -> Result<bool> {
        self.request(&DeleteWebhook {}).await
    }

    pub async fn get_webhook_info(&self) -> Result<WebhookInfo> {
        self.request(&GetWebhookInfo {}).await
    }
}
