//! Messages, text entities, and parse modes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::chat::Chat;
use crate::games::Game;
use crate::media::{
    Audio, Contact, Document, Location, PhotoSize, Sticker, Venue, Video, VideoNote, Voice,
};
use crate::payments::{Invoice, SuccessfulPayment};
use crate::user::User;

/// A message. The Bot API models every message kind as one object with a
/// large union of optional fields; exactly the content fields for the
/// message's kind are present. Use [`Message::kind`] for classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub message_id: i64,
    /// Sender; empty for messages sent to channels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<User>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub date: DateTime<Utc>,
    pub chat: Chat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forward_from: Option<User>,
    /// For messages forwarded from channels, information about the channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forward_from_chat: Option<Chat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forward_from_message_id: Option<i64>,
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub forward_date: Option<DateTime<Utc>>,
    /// The replied-to message. Will not contain its own `reply_to_message`
    /// even if it itself is a reply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message: Option<Box<Message>>,
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub edit_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Special entities (mentions, hashtags, URLs, ...) appearing in `text`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<MessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<Audio>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<Document>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game: Option<Game>,
    /// Available sizes of the photo, smallest first.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<Vec<PhotoSize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sticker: Option<Sticker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<Video>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice: Option<Voice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_note: Option<VideoNote>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<Venue>,
    /// Service message: members (possibly the bot itself) added to the chat.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_chat_members: Option<Vec<User>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_chat_member: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_chat_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_chat_photo: Option<Vec<PhotoSize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_chat_photo: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_chat_created: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supergroup_chat_created: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_chat_created: Option<bool>,
    /// The group has been migrated to a supergroup with this id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub migrate_to_chat_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub migrate_from_chat_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinned_message: Option<Box<Message>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice: Option<Invoice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub successful_payment: Option<SuccessfulPayment>,
}

impl Message {
    /// Classifies the message by which content field is populated.
    pub fn kind(&self) -> MessageKind {
        if self.text.is_some() {
            MessageKind::Text
        } else if self.photo.is_some() {
            MessageKind::Photo
        } else if self.audio.is_some() {
            MessageKind::Audio
        } else if self.document.is_some() {
            MessageKind::Document
        } else if self.video.is_some() {
            MessageKind::Video
        } else if self.voice.is_some() {
            MessageKind::Voice
        } else if self.video_note.is_some() {
            MessageKind::VideoNote
        } else if self.sticker.is_some() {
            MessageKind::Sticker
        } else if self.game.is_some() {
            MessageKind::Game
        } else if self.venue.is_some() {
            MessageKind::Venue
        } else if self.location.is_some() {
            MessageKind::Location
        } else if self.contact.is_some() {
            MessageKind::Contact
        } else if self.invoice.is_some() {
            MessageKind::Invoice
        } else if self.successful_payment.is_some() {
            MessageKind::SuccessfulPayment
        } else if self.is_service_message() {
            MessageKind::Service
        } else {
            MessageKind::Unknown
        }
    }

    fn is_service_message(&self) -> bool {
        self.new_chat_members.is_some()
            || self.left_chat_member.is_some()
            || self.new_chat_title.is_some()
            || self.new_chat_photo.is_some()
            || self.delete_chat_photo.is_some()
            || self.group_chat_created.is_some()
            || self.supergroup_chat_created.is_some()
            || self.channel_chat_created.is_some()
            || self.migrate_to_chat_id.is_some()
            || self.migrate_from_chat_id.is_some()
            || self.pinned_message.is_some()
    }

    /// Substrings of `text` covered by each entity, in entity order.
    ///
    /// Entity offsets and lengths are counted in UTF-16 code units (the Bot
    /// API contract), so the text is re-encoded before slicing; an emoji in
    /// front of an entity shifts its offset by two units, not one character.
    /// Entities whose range falls outside the text are skipped.
    pub fn entity_values(&self) -> Vec<String> {
        let (text, entities) = match (&self.text, &self.entities) {
            (Some(text), Some(entities)) => (text, entities),
            _ => return Vec::new(),
        };
        let units: Vec<u16> = text.encode_utf16().collect();
        entities
            .iter()
            .filter_map(|entity| {
                let start = entity.offset as usize;
                let end = start.checked_add(entity.length as usize)?;
                units.get(start..end).map(String::from_utf16_lossy)
            })
            .collect()
    }
}

/// One special entity in a text message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageEntity {
    #[serde(rename = "type")]
    pub kind: MessageEntityType,
    /// Offset in UTF-16 code units to the start of the entity.
    pub offset: u32,
    /// Length of the entity in UTF-16 code units.
    pub length: u32,
    /// URL opened after the user taps on the text; for `text_link` only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// The mentioned user; for `text_mention` only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Entity kinds. `Unknown` absorbs kinds introduced by newer API revisions
/// so deserialization of live traffic never fails on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageEntityType {
    Mention,
    Hashtag,
    BotCommand,
    Url,
    Email,
    Bold,
    Italic,
    Code,
    Pre,
    TextLink,
    TextMention,
    #[serde(other)]
    Unknown,
}

/// Classification of a message's content, derived from which optional field
/// is populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Text,
    Photo,
    Audio,
    Document,
    Video,
    Voice,
    VideoNote,
    Sticker,
    Game,
    Venue,
    Location,
    Contact,
    Invoice,
    SuccessfulPayment,
    /// Chat service message (member joined/left, title change, pin, ...).
    Service,
    Unknown,
}

/// Text formatting mode for captions and message bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseMode {
    Markdown,
    MarkdownV2,
    #[serde(rename = "HTML")]
    Html,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_text_message(text: &str, entities: Vec<MessageEntity>) -> Message {
        serde_json::from_value(serde_json::json!({
            "message_id": 1,
            "from": {"id": 10, "is_bot": false, "first_name": "Tester"},
            "date": 1_500_000_000,
            "chat": {"id": -100, "type": "supergroup", "title": "test group"},
            "text": text,
            "entities": serde_json::to_value(entities).unwrap(),
        }))
        .unwrap()
    }

    #[test]
    fn deserializes_real_world_text_message() {
        let message: Message = serde_json::from_str(
            r#"{
                "message_id": 42,
                "from": {"id": 1, "is_bot": true, "first_name": "bot", "username": "somebot"},
                "date": 1500000000,
                "chat": {"id": -1001000, "type": "supergroup", "title": "group"},
                "text": "Hello world!"
            }"#,
        )
        .unwrap();
        assert_eq!(message.message_id, 42);
        assert_eq!(message.text.as_deref(), Some("Hello world!"));
        assert_eq!(message.date.timestamp(), 1_500_000_000);
        assert_eq!(message.kind(), MessageKind::Text);
    }

    #[test]
    fn entity_values_slices_by_utf16_offsets() {
        // The leading emoji occupies two UTF-16 code units.
        let message = sample_text_message(
            "\u{1F600} call @somebot now",
            vec![MessageEntity {
                kind: MessageEntityType::Mention,
                offset: 8,
                length: 8,
                url: None,
                user: None,
            }],
        );
        assert_eq!(message.entity_values(), vec!["@somebot".to_string()]);
    }

    #[test]
    fn entity_values_skips_out_of_range_entities() {
        let message = sample_text_message(
            "short",
            vec![MessageEntity {
                kind: MessageEntityType::Bold,
                offset: 3,
                length: 99,
                url: None,
                user: None,
            }],
        );
        assert!(message.entity_values().is_empty());
    }

    #[test]
    fn unknown_entity_type_falls_back() {
        let entity: MessageEntity = serde_json::from_str(
            r#"{"type": "custom_emoji", "offset": 0, "length": 2}"#,
        )
        .unwrap();
        assert_eq!(entity.kind, MessageEntityType::Unknown);
    }

    #[test]
    fn parse_mode_wire_names() {
        assert_eq!(serde_json::to_string(&ParseMode::Html).unwrap(), r#""HTML""#);
        assert_eq!(serde_json::to_string(&ParseMode::Markdown).unwrap(), r#""Markdown""#);
        assert_eq!(
            serde_json::to_string(&ParseMode::MarkdownV2).unwrap(),
            r#""MarkdownV2""#
        );
    }

    #[test]
    fn service_message_is_classified() {
        let message: Message = serde_json::from_value(serde_json::json!({
            "message_id": 7,
            "date": 1_500_000_000,
            "chat": {"id": -100, "type": "supergroup", "title": "g"},
            "new_chat_members": [{"id": 5, "is_bot": false, "first_name": "New"}],
        }))
        .unwrap();
        assert_eq!(message.kind(), MessageKind::Service);
    }
}
