//! Game methods. Inline-message variants share the wire method name with
//! their chat counterparts but differ in addressing and success payload, so
//! they are separate payload types.

use botgram_types::{GameHighScore, InlineKeyboardMarkup, Message};
use serde::Serialize;

use crate::client::{BotApiClient, Payload};
use crate::error::Result;

/// `sendGame`; the game must be registered with the platform's game
/// service under `game_short_name`.
#[derive(Debug, Clone, Serialize)]
pub struct SendGame {
    pub chat_id: i64,
    pub game_short_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,
    /// Inline keyboard only; without one, a single Play button is added.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl SendGame {
    pub fn new(chat_id: i64, game_short_name: impl Into<String>) -> Self {
        Self {
            chat_id,
            game_short_name: game_short_name.into(),
            disable_notification: None,
            reply_to_message_id: None,
            reply_markup: None,
        }
    }
}

impl Payload for SendGame {
    const METHOD: &'static str = "sendGame";
    type Output = Message;
}

/// `setGameScore` for a game message in a chat.
#[derive(Debug, Clone, Serialize)]
pub struct SetGameScore {
    pub user_id: i64,
    /// Non-negative.
    pub score: i64,
    pub chat_id: i64,
    pub message_id: i64,
    /// Allow the score to decrease (fixing mistakes, banning cheaters).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_edit_message: Option<bool>,
}

impl SetGameScore {
    pub fn new(user_id: i64, score: i64, chat_id: i64, message_id: i64) -> Self {
        Self {
            user_id,
            score,
            chat_id,
            message_id,
            force: None,
            disable_edit_message: None,
        }
    }
}

impl Payload for SetGameScore {
    const METHOD: &'static str = "setGameScore";
    type Output = Message;
}

/// `setGameScore` addressed by `inline_message_id`.
#[derive(Debug, Clone, Serialize)]
pub struct SetInlineGameScore {
    pub user_id: i64,
    pub score: i64,
    pub inline_message_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_edit_message: Option<bool>,
}

impl Payload for SetInlineGameScore {
    const METHOD: &'static str = "setGameScore";
    type Output = bool;
}

/// `getGameHighScores`: the user's score and several neighbors.
#[derive(Debug, Clone, Serialize)]
pub struct GetGameHighScores {
    pub user_id: i64,
    pub chat_id: i64,
    pub message_id: i64,
}

impl Payload for GetGameHighScores {
    const METHOD: &'static str = "getGameHighScores";
    type Output = Vec<GameHighScore>;
}

/// `getGameHighScores` addressed by `inline_message_id`.
#[derive(Debug, Clone, Serialize)]
pub struct GetInlineGameHighScores {
    pub user_id: i64,
    pub inline_message_id: String,
}

impl GetInlineGameHighScores {
    pub fn new(user_id: i64, inline_message_id: impl Into<String>) -> Self {
        Self {
            user_id,
            inline_message_id: inline_message_id.into(),
        }
    }
}

impl Payload for GetInlineGameHighScores {
    const METHOD: &'static str = "getGameHighScores";
    type Output = Vec<GameHighScore>;
}

impl BotApiClient {
    pub async fn send_game(&self, chat_id: i64, game_short_name: impl Into<String>) -> Result<Message> {
        self.request(&SendGame::new(chat_id, game_short_name)).await
    }

    pub async fn set_game_score(
        &self,
        user_id: i64,
        score: i64,
        chat_id: i64,
        message_id: i64,
    ) -> Result<Message> {
        self.request(&SetGameScore::new(user_id, score, chat_id, message_id))
            .await
    }

    pub async fn get_game_high_scores(
        &self,
        user_id: i64,
        chat_id: i64,
        message_id: i64,
    ) -> Result<Vec<GameHighScore>> {
        self.request(&GetGameHighScores {
            user_id,
            chat_id,
            message_id,
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_and_inline_variants_share_the_wire_method() {
        assert_eq!(SetGameScore::METHOD, SetInlineGameScore::METHOD);
        assert_eq!(GetGameHighScores::METHOD, GetInlineGameHighScores::METHOD);
    }

    #[test]
    fn inline_high_scores_wire_shape() {
        let payload = GetInlineGameHighScores::new(9, "inline-1");
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({"user_id": 9, "inline_message_id": "inline-1"})
        );
    }
}
