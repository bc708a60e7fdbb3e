//! Payment methods: invoices and the two mandatory query answers.

use botgram_types::{InlineKeyboardMarkup, LabeledPrice, Message, ShippingOption};
use serde::Serialize;

use crate::client::{BotApiClient, Payload};
use crate::error::Result;

/// `sendInvoice`. Invoice targets are numeric chat ids only.
#[derive(Debug, Clone, Serialize)]
pub struct SendInvoice {
    pub chat_id: i64,
    pub title: String,
    pub description: String,
    /// Bot-internal payload, 1-128 bytes; echoed back in the queries and
    /// the successful payment, never shown to the user.
    pub payload: String,
    pub provider_token: String,
    /// Deep-linking parameter to regenerate the invoice.
    pub start_parameter: String,
    /// Three-letter ISO 4217 currency code.
    pub currency: String,
    pub prices: Vec<LabeledPrice>,
    /// JSON blob passed through to the payment provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub need_name: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub need_phone_number: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub need_email: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub need_shipping_address: Option<bool>,
    /// Final price depends on the chosen shipping option; triggers
    /// shipping queries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_flexible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,
    /// Inline keyboard only; first button of the first row must be a Pay
    /// button (added server-side when no markup is given).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl SendInvoice {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        chat_id: i64,
        title: impl Into<String>,
        description: impl Into<String>,
        payload: impl Into<String>,
        provider_token: impl Into<String>,
        start_parameter: impl Into<String>,
        currency: impl Into<String>,
        prices: Vec<LabeledPrice>,
    ) -> Self {
        Self {
            chat_id,
            title: title.into(),
            description: description.into(),
            payload: payload.into(),
            provider_token: provider_token.into(),
            start_parameter: start_parameter.into(),
            currency: currency.into(),
            prices,
            provider_data: None,
            photo_url: None,
            photo_size: None,
            photo_width: None,
            photo_height: None,
            need_name: None,
            need_phone_number: None,
            need_email: None,
            need_shipping_address: None,
            is_flexible: None,
            disable_notification: None,
            reply_to_message_id: None,
            reply_markup: None,
        }
    }

    /// Request a shipping address and make the price flexible; the bot must
    /// then answer shipping queries.
    pub fn flexible_with_shipping_address(mut self) -> Self {
        self.need_shipping_address = Some(true);
        self.is_flexible = Some(true);
        self
    }

    pub fn total_amount(&self) -> i64 {
        self.prices.iter().map(|price| price.amount).sum()
    }
}

impl Payload for SendInvoice {
    const METHOD: &'static str = "sendInvoice";
    type Output = Message;
}

/// `answerShippingQuery`. The API requires `shipping_options` exactly when
/// `ok` is true and `error_message` exactly when it is false; the
/// constructors are the only way to build this payload.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerShippingQuery {
    shipping_query_id: String,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    shipping_options: Option<Vec<ShippingOption>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_message: Option<String>,
}

impl AnswerShippingQuery {
    /// Delivery is possible; offer these options.
    pub fn ok(shipping_query_id: impl Into<String>, shipping_options: Vec<ShippingOption>) -> Self {
        Self {
            shipping_query_id: shipping_query_id.into(),
            ok: true,
            shipping_options: Some(shipping_options),
            error_message: None,
        }
    }

    /// Delivery is impossible; the user sees `error_message`.
    pub fn error(shipping_query_id: impl Into<String>, error_message: impl Into<String>) -> Self {
        Self {
            shipping_query_id: shipping_query_id.into(),
            ok: false,
            shipping_options: None,
            error_message: Some(error_message.into()),
        }
    }
}

impl Payload for AnswerShippingQuery {
    const METHOD: &'static str = "answerShippingQuery";
    type Output = bool;
}

/// `answerPreCheckoutQuery`: the final go/no-go, due within 10 seconds of
/// the query.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerPreCheckoutQuery {
    pre_checkout_query_id: String,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_message: Option<String>,
}

impl AnswerPreCheckoutQuery {
    pub fn ok(pre_checkout_query_id: impl Into<String>) -> Self {
        Self {
            pre_checkout_query_id: pre_checkout_query_id.into(),
            ok: true,
            error_message: None,
        }
    }

    pub fn error(
        pre_checkout_query_id: impl Into<String>,
        error_message: impl Into<String>,
    ) -> Self {
        Self {
            pre_checkout_query_id: pre_checkout_query_id.into(),
            ok: false,
            error_message: Some(error_message.into()),
        }
    }
}

impl Payload for AnswerPreCheckoutQuery {
    const METHOD: &'static str = "answerPreCheckoutQuery";
    type Output = bool;
}

impl BotApiClient {
    pub async fn send_invoice(&self, payload: &SendInvoice) -> Result<Message> {
        self.request(payload).await
    }

    pub async fn answer_shipping_query(&self, payload: &AnswerShippingQuery) -> Result<bool> {
        self.request(payload).await
    }

    pub async fn answer_pre_checkout_query(
        &self,
        payload: &AnswerPreCheckoutQuery,
    ) -> Result<bool> {
        self.request(payload).await
    }
}
