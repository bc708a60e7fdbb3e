//! Live-API contract tests for payments: invoice sending and the invoice
//! fields the service echoes back. Works against Telegram's test payment
//! provider; no real money moves.
//!
//! All tests are `#[ignore]`; they need `BOT_TOKEN`, `TEST_PRIVATE_CHAT_ID`
//! and `PAYMENT_PROVIDER_TOKEN` (from BotFather's test provider).
//! Run with: `cargo test -p botgram-client -- --ignored`

mod common;

use botgram_client::payloads::SendInvoice;
use botgram_client::types::{LabeledPrice, MessageKind};

fn sample_invoice(chat_id: i64, provider_token: String, payload: &str) -> SendInvoice {
    SendInvoice::new(
        chat_id,
        "PRODUCT_TITLE",
        "PRODUCT_DESCRIPTION",
        payload,
        provider_token,
        "start_param",
        "CAD",
        vec![
            LabeledPrice::new("One dollar 50 cents", 150),
            LabeledPrice::new("20 dollars 29 cents", 2029),
        ],
    )
}

#[tokio::test]
#[ignore] // Requires BOT_TOKEN, TEST_PRIVATE_CHAT_ID, PAYMENT_PROVIDER_TOKEN
async fn sends_invoice_and_echoes_invoice_fields() {
    let client = common::live_client();
    let chat_id = common::private_chat_id();
    let provider_token = common::payment_provider_token();

    let invoice = sample_invoice(chat_id, provider_token, "my-payload");
    let expected_total = invoice.total_amount();

    let message = client.send_invoice(&invoice).await.unwrap();

    assert_eq!(message.kind(), MessageKind::Invoice);
    let echoed = message.invoice.unwrap();
    assert_eq!(echoed.title, "PRODUCT_TITLE");
    assert_eq!(echoed.description, "PRODUCT_DESCRIPTION");
    assert_eq!(echoed.currency, "CAD");
    assert_eq!(echoed.start_parameter, "start_param");
    assert_eq!(echoed.total_amount, expected_total);
}

#[tokio::test]
#[ignore]
async fn sends_flexible_invoice_requiring_shipping_address() {
    let client = common::live_client();
    let chat_id = common::private_chat_id();
    let provider_token = common::payment_provider_token();

    let invoice = sample_invoice(chat_id, provider_token, "shipping-payload")
        .flexible_with_shipping_address();

    let message = client.send_invoice(&invoice).await.unwrap();
    assert_eq!(message.kind(), MessageKind::Invoice);
}
