//! Chats, chat membership, and chat actions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::message::Message;
use crate::user::User;

/// A private, group, supergroup or channel chat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: ChatType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_members_are_administrators: Option<bool>,
    /// Description, for supergroups and channels. Returned only by `getChat`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Invite link. Returned only by `getChat`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invite_link: Option<String>,
    /// Pinned message. Returned only by `getChat`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinned_message: Option<Box<Message>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatType {
    Private,
    Group,
    Supergroup,
    Channel,
}

/// One member of a chat, with the flags relevant to their status.
/// Admin `can_*` flags are present for administrators, restriction flags for
/// restricted members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMember {
    pub user: User,
    pub status: ChatMemberStatus,
    /// When restriction or ban will be lifted, for restricted/kicked members.
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub until_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_be_edited: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_change_info: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_post_messages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_edit_messages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_delete_messages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_invite_users: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_restrict_members: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_pin_messages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_promote_members: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_send_messages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_send_media_messages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_send_other_messages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_add_web_page_previews: Option<bool>,
}

impl ChatMember {
    /// True for the creator and administrators.
    pub fn is_admin(&self) -> bool {
        matches!(
            self.status,
            ChatMemberStatus::Creator | ChatMemberStatus::Administrator
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatMemberStatus {
    Creator,
    Administrator,
    Member,
    Restricted,
    Left,
    Kicked,
}

/// Action shown to users while the bot prepares a response
/// (`sendChatAction`). Pick the one matching what will be sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatAction {
    Typing,
    UploadPhoto,
    RecordVideo,
    UploadVideo,
    RecordAudio,
    UploadAudio,
    UploadDocument,
    FindLocation,
    RecordVideoNote,
    UploadVideoNote,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_type_uses_lowercase_wire_names() {
        assert_eq!(serde_json::to_string(&ChatType::Supergroup).unwrap(), r#""supergroup""#);
        assert_eq!(
            serde_json::from_str::<ChatType>(r#""private""#).unwrap(),
            ChatType::Private
        );
    }

    #[test]
    fn chat_action_uses_snake_case_wire_names() {
        assert_eq!(
            serde_json::to_string(&ChatAction::UploadVideoNote).unwrap(),
            r#""upload_video_note""#
        );
    }

    #[test]
    fn chat_member_status_round_trip() {
        let member: ChatMember = serde_json::from_str(
            r#"{
                "user": {"id": 1, "is_bot": false, "first_name": "A"},
                "status": "administrator",
                "can_change_info": true
            }"#,
        )
        .unwrap();
        assert_eq!(member.status, ChatMemberStatus::Administrator);
        assert!(member.is_admin());
        assert_eq!(member.can_change_info, Some(true));
        assert!(member.until_date.is_none());
    }

    #[test]
    fn restricted_member_carries_until_date() {
        let member: ChatMember = serde_json::from_str(
            r#"{
                "user": {"id": 2, "is_bot": false, "first_name": "B"},
                "status": "restricted",
                "until_date": 1500000000,
                "can_send_messages": false
            }"#,
        )
        .unwrap();
        assert_eq!(member.status, ChatMemberStatus::Restricted);
        assert_eq!(member.until_date.unwrap().timestamp(), 1_500_000_000);
        assert!(!member.is_admin());
    }
}
