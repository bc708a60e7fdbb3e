//! Answering callback queries from inline keyboard buttons.

use serde::Serialize;

use crate::client::{BotApiClient, Payload};
use crate::error::Result;

/// `answerCallbackQuery`: must be called for every callback query, even with
/// no text, or the client keeps showing a progress indicator.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerCallbackQuery {
    pub callback_query_id: String,
    /// Notification text (0-200 characters); alert when `show_alert`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_alert: Option<bool>,
    /// URL to open; games and bots with inline permission only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Client-side cache time for the answer, in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_time: Option<u32>,
}

impl AnswerCallbackQuery {
    pub fn new(callback_query_id: impl Into<String>) -> Self {
        Self {
            callback_query_id: callback_query_id.into(),
            text: None,
            show_alert: None,
            url: None,
            cache_time: None,
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn show_alert(mut self) -> Self {
        self.show_alert = Some(true);
        self
    }
}

impl Payload for AnswerCallbackQuery {
    const METHOD: &'static str = "answerCallbackQuery";
    type Output = bool;
}

impl BotApiClient {
    pub async fn answer_callback_query(&self, callback_query_id: impl Into<String>) -> Result<bool> {
        self.request(&AnswerCallbackQuery::new(callback_query_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_answer_sends_only_the_id() {
        assert_eq!(
            serde_json::to_value(AnswerCallbackQuery::new("q1")).unwrap(),
            serde_json::json!({"callback_query_id": "q1"})
        );
    }

    #[test]
    fn alert_answer_sets_both_fields() {
        let payload = AnswerCallbackQuery::new("q1").text("done").show_alert();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["text"], "done");
        assert_eq!(json["show_alert"], true);
    }
}
