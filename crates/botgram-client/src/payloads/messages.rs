//! Sending, forwarding, editing and deleting messages, plus `getMe`.

use botgram_types::{
    ChatAction, ChatId, InputFile, Message, ParseMode, ReplyMarkup, User,
};
use serde::Serialize;

use crate::client::{BotApiClient, Payload};
use crate::error::Result;

/// `getMe`: the bot's own `User` object. Cheap liveness/token check.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetMe {}

impl Payload for GetMe {
    const METHOD: &'static str = "getMe";
    type Output = User;
}

/// `sendMessage`.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessage {
    pub chat_id: ChatId,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_web_page_preview: Option<bool>,
    /// Deliver silently (no notification sound).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendMessage {
    pub fn new(chat_id: impl Into<ChatId>, text: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            text: text.into(),
            parse_mode: None,
            disable_web_page_preview: None,
            disable_notification: None,
            reply_to_message_id: None,
            reply_markup: None,
        }
    }

    pub fn parse_mode(mut self, mode: ParseMode) -> Self {
        self.parse_mode = Some(mode);
        self
    }

    pub fn disable_web_page_preview(mut self) -> Self {
        self.disable_web_page_preview = Some(true);
        self
    }

    pub fn reply_to(mut self, message_id: i64) -> Self {
        self.reply_to_message_id = Some(message_id);
        self
    }

    pub fn reply_markup(mut self, markup: impl Into<ReplyMarkup>) -> Self {
        self.reply_markup = Some(markup.into());
        self
    }
}

impl Payload for SendMessage {
    const METHOD: &'static str = "sendMessage";
    type Output = Message;
}

/// `forwardMessage`.
#[derive(Debug, Clone, Serialize)]
pub struct ForwardMessage {
    pub chat_id: ChatId,
    pub from_chat_id: ChatId,
    pub message_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
}

impl ForwardMessage {
    pub fn new(chat_id: impl Into<ChatId>, from_chat_id: impl Into<ChatId>, message_id: i64) -> Self {
        Self {
            chat_id: chat_id.into(),
            from_chat_id: from_chat_id.into(),
            message_id,
            disable_notification: None,
        }
    }
}

impl Payload for ForwardMessage {
    const METHOD: &'static str = "forwardMessage";
    type Output = Message;
}

macro_rules! send_media_payload {
    ($(#[$doc:meta])* $name:ident, $method:literal, $field:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Serialize)]
        pub struct $name {
            pub chat_id: ChatId,
            pub $field: InputFile,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub caption: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub disable_notification: Option<bool>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub reply_to_message_id: Option<i64>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub reply_markup: Option<ReplyMarkup>,
        }

        impl $name {
            pub fn new(chat_id: impl Into<ChatId>, $field: InputFile) -> Self {
                Self {
                    chat_id: chat_id.into(),
                    $field,
                    caption: None,
                    disable_notification: None,
                    reply_to_message_id: None,
                    reply_markup: None,
                }
            }

            pub fn caption(mut self, caption: impl Into<String>) -> Self {
                self.caption = Some(caption.into());
                self
            }
        }

        impl Payload for $name {
            const METHOD: &'static str = $method;
            type Output = Message;

            fn files(&self) -> Vec<&InputFile> {
                vec![&self.$field]
            }
        }
    };
}

send_media_payload!(
    /// `sendPhoto`.
    SendPhoto, "sendPhoto", photo
);
send_media_payload!(
    /// `sendAudio`.
    SendAudio, "sendAudio", audio
);
send_media_payload!(
    /// `sendDocument`.
    SendDocument, "sendDocument", document
);
send_media_payload!(
    /// `sendVideo`.
    SendVideo, "sendVideo", video
);
send_media_payload!(
    /// `sendVoice`.
    SendVoice, "sendVoice", voice
);

/// `sendLocation`.
#[derive(Debug, Clone, Serialize)]
pub struct SendLocation {
    pub chat_id: ChatId,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendLocation {
    pub fn new(chat_id: impl Into<ChatId>, latitude: f64, longitude: f64) -> Self {
        Self {
            chat_id: chat_id.into(),
            latitude,
            longitude,
            disable_notification: None,
            reply_to_message_id: None,
            reply_markup: None,
        }
    }
}

impl Payload for SendLocation {
    const METHOD: &'static str = "sendLocation";
    type Output = Message;
}

/// `sendVenue`.
#[derive(Debug, Clone, Serialize)]
pub struct SendVenue {
    pub chat_id: ChatId,
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foursquare_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl Payload for SendVenue {
    const METHOD: &'static str = "sendVenue";
    type Output = Message;
}

/// `sendContact`.
#[derive(Debug, Clone, Serialize)]
pub struct SendContact {
    pub chat_id: ChatId,
    pub phone_number: String,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl Payload for SendContact {
    const METHOD: &'static str = "sendContact";
    type Output = Message;
}

/// `sendChatAction`: shows "typing..." and friends for up to 5 seconds.
#[derive(Debug, Clone, Serialize)]
pub struct SendChatAction {
    pub chat_id: ChatId,
    pub action: ChatAction,
}

impl Payload for SendChatAction {
    const METHOD: &'static str = "sendChatAction";
    type Output = bool;
}

/// `editMessageText` for a message the bot sent to a chat. The inline-mode
/// counterpart is [`EditInlineMessageText`]; they share the wire method but
/// the success payload differs (`Message` here, `true` there).
#[derive(Debug, Clone, Serialize)]
pub struct EditMessageText {
    pub chat_id: ChatId,
    pub message_id: i64,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_web_page_preview: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl EditMessageText {
    pub fn new(chat_id: impl Into<ChatId>, message_id: i64, text: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            message_id,
            text: text.into(),
            parse_mode: None,
            disable_web_page_preview: None,
            reply_markup: None,
        }
    }
}

impl Payload for EditMessageText {
    const METHOD: &'static str = "editMessageText";
    type Output = Message;
}

/// `editMessageText` addressed by `inline_message_id`.
#[derive(Debug, Clone, Serialize)]
pub struct EditInlineMessageText {
    pub inline_message_id: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_web_page_preview: Option<bool>,
}

impl Payload for EditInlineMessageText {
    const METHOD: &'static str = "editMessageText";
    type Output = bool;
}

/// `editMessageCaption`.
#[derive(Debug, Clone, Serialize)]
pub struct EditMessageCaption {
    pub chat_id: ChatId,
    pub message_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl Payload for EditMessageCaption {
    const METHOD: &'static str = "editMessageCaption";
    type Output = Message;
}

/// `editMessageCaption` addressed by `inline_message_id`.
#[derive(Debug, Clone, Serialize)]
pub struct EditInlineMessageCaption {
    pub inline_message_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl Payload for EditInlineMessageCaption {
    const METHOD: &'static str = "editMessageCaption";
    type Output = bool;
}

/// `editMessageReplyMarkup`.
#[derive(Debug, Clone, Serialize)]
pub struct EditMessageReplyMarkup {
    pub chat_id: ChatId,
    pub message_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl Payload for EditMessageReplyMarkup {
    const METHOD: &'static str = "editMessageReplyMarkup";
    type Output = Message;
}

/// `editMessageReplyMarkup` addressed by `inline_message_id`.
#[derive(Debug, Clone, Serialize)]
pub struct EditInlineMessageReplyMarkup {
    pub inline_message_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl Payload for EditInlineMessageReplyMarkup {
    const METHOD: &'static str = "editMessageReplyMarkup";
    type Output = bool;
}

/// `deleteMessage`. Bots can delete their own messages and, with the right
/// permission, others' messages in groups; outgoing messages only within
/// 48 hours.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteMessage {
    pub chat_id: ChatId,
    pub message_id: i64,
}

impl Payload for DeleteMessage {
    const METHOD: &'static str = "deleteMessage";
    type Output = bool;
}

impl BotApiClient {
    pub async fn get_me(&self) -> Result<User> {
        self.request(&GetMe {}).await
    }

    pub async fn send_message(
        &self,
        chat_id: impl Into<ChatId>,
        text: impl Into<String>,
    ) -> Result<Message> {
        self.request(&SendMessage::new(chat_id, text)).await
    }

    pub async fn forward_message(
        &self,
        chat_id: impl Into<ChatId>,
        from_chat_id: impl Into<ChatId>,
        message_id: i64,
    ) -> Result<Message> {
        self.request(&ForwardMessage::new(chat_id, from_chat_id, message_id))
            .await
    }

    pub async fn send_photo(&self, chat_id: impl Into<ChatId>, photo: InputFile) -> Result<Message> {
        self.request(&SendPhoto::new(chat_id, photo)).await
    }

    pub async fn send_audio(&self, chat_id: impl Into<ChatId>, audio: InputFile) -> Result<Message> {
        self.request(&SendAudio::new(chat_id, audio)).await
    }

    pub async fn send_document(
        &self,
        chat_id: impl Into<ChatId>,
        document: InputFile,
    ) -> Result<Message> {
        self.request(&SendDocument::new(chat_id, document)).await
    }

    pub async fn send_video(&self, chat_id: impl Into<ChatId>, video: InputFile) -> Result<Message> {
        self.request(&SendVideo::new(chat_id, video)).await
    }

    pub async fn send_voice(&self, chat_id: impl Into<ChatId>, voice: InputFile) -> Result<Message> {
        self.request(&SendVoice::new(chat_id, voice)).await
    }

    pub async fn send_location(
        &self,
        chat_id: impl Into<ChatId>,
        latitude: f64,
        longitude: f64,
    ) -> Result<Message> {
        self.request(&SendLocation::new(chat_id, latitude, longitude))
            .await
    }

    pub async fn send_venue(&self, payload: &SendVenue) -> Result<Message> {
        self.request(payload).await
    }

    pub async fn send_contact(&self, payload: &SendContact) -> Result<Message> {
        self.request(payload).await
    }

    pub async fn send_chat_action(
        &self,
        chat_id: impl Into<ChatId>,
        action: ChatAction,
    ) -> Result<bool> {
        self.request(&SendChatAction {
            chat_id: chat_id.into(),
            action,
        })
        .await
    }

    pub async fn edit_message_text(
        &self,
        chat_id: impl Into<ChatId>,
        message_id: i64,
        text: impl Into<String>,
    ) -> Result<Message> {
        self.request(&EditMessageText::new(chat_id, message_id, text))
            .await
    }

    pub async fn edit_message_caption(
        &self,
        chat_id: impl Into<ChatId>,
        message_id: i64,
        caption: impl Into<String>,
    ) -> Result<Message> {
        self.request(&EditMessageCaption {
            chat_id: chat_id.into(),
            message_id,
            caption: Some(caption.into()),
            reply_markup: None,
        })
        .await
    }

    pub async fn edit_message_reply_markup(
        &self,
        chat_id: impl Into<ChatId>,
        message_id: i64,
        reply_markup: impl Into<ReplyMarkup>,
    ) -> Result<Message> {
        self.request(&EditMessageReplyMarkup {
            chat_id: chat_id.into(),
            message_id,
            reply_markup: Some(reply_markup.into()),
        })
        .await
    }

    pub async fn delete_message(&self, chat_id: impl Into<ChatId>, message_id: i64) -> Result<bool> {
        self.request(&DeleteMessage {
            chat_id: chat_id.into(),
            message_id,
        })
        .await
    }
}
