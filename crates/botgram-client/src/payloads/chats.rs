//! Chat administration and chat info methods.

use botgram_types::{Chat, ChatId, ChatMember};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::client::{BotApiClient, Payload};
use crate::error::Result;

/// `kickChatMember`: ban a user. In supergroups and channels the user will
/// not be able to return on their own; `until_date` bans temporarily (less
/// than 30 seconds or more than 366 days means forever).
#[derive(Debug, Clone, Serialize)]
pub struct KickChatMember {
    pub chat_id: ChatId,
    pub user_id: i64,
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub until_date: Option<DateTime<Utc>>,
}

impl KickChatMember {
    pub fn new(chat_id: impl Into<ChatId>, user_id: i64) -> Self {
        Self {
            chat_id: chat_id.into(),
            user_id,
            until_date: None,
        }
    }

    pub fn until(mut self, until_date: DateTime<Utc>) -> Self {
        self.until_date = Some(until_date);
        self
    }
}

impl Payload for KickChatMember {
    const METHOD: &'static str = "kickChatMember";
    type Output = bool;
}

/// `unbanChatMember`.
#[derive(Debug, Clone, Serialize)]
pub struct UnbanChatMember {
    pub chat_id: ChatId,
    pub user_id: i64,
}

impl Payload for UnbanChatMember {
    const METHOD: &'static str = "unbanChatMember";
    type Output = bool;
}

/// `restrictChatMember`: limits what a supergroup member may send. Omitted
/// flags keep their current value; `until_date` works as in
/// [`KickChatMember`].
#[derive(Debug, Clone, Serialize)]
pub struct RestrictChatMember {
    pub chat_id: ChatId,
    pub user_id: i64,
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub until_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_send_messages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_send_media_messages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_send_other_messages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_add_web_page_previews: Option<bool>,
}

impl RestrictChatMember {
    pub fn new(chat_id: impl Into<ChatId>, user_id: i64) -> Self {
        Self {
            chat_id: chat_id.into(),
            user_id,
            until_date: None,
            can_send_messages: None,
            can_send_media_messages: None,
            can_send_other_messages: None,
            can_add_web_page_previews: None,
        }
    }

    pub fn until(mut self, until_date: DateTime<Utc>) -> Self {
        self.until_date = Some(until_date);
        self
    }
}

impl Payload for RestrictChatMember {
    const METHOD: &'static str = "restrictChatMember";
    type Output = bool;
}

/// `promoteChatMember`: grant/revoke admin rights. All-false demotes.
#[derive(Debug, Clone, Serialize)]
pub struct PromoteChatMember {
    pub chat_id: ChatId,
    pub user_id: i64,
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
}

impl PromoteChatMember {
    pub fn new(chat_id: impl Into<ChatId>, user_id: i64) -> Self {
        Self {
            chat_id: chat_id.into(),
            user_id,
            can_change_info: None,
            can_post_messages: None,
            can_edit_messages: None,
            can_delete_messages: None,
            can_invite_users: None,
            can_restrict_members: None,
            can_pin_messages: None,
            can_promote_members: None,
        }
    }
}

impl Payload for PromoteChatMember {
    const METHOD: &'static str = "promoteChatMember";
    type Output = bool;
}

/// `exportChatInviteLink`: returns the link as a string.
#[derive(Debug, Clone, Serialize)]
pub struct ExportChatInviteLink {
    pub chat_id: ChatId,
}

impl Payload for ExportChatInviteLink {
    const METHOD: &'static str = "exportChatInviteLink";
    type Output = String;
}

/// `setChatTitle`.
#[derive(Debug, Clone, Serialize)]
pub struct SetChatTitle {
    pub chat_id: ChatId,
    pub title: String,
}

impl Payload for SetChatTitle {
    const METHOD: &'static str = "setChatTitle";
    type Output = bool;
}

/// `setChatDescription`.
#[derive(Debug, Clone, Serialize)]
pub struct SetChatDescription {
    pub chat_id: ChatId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Payload for SetChatDescription {
    const METHOD: &'static str = "setChatDescription";
    type Output = bool;
}

/// `pinChatMessage`.
#[derive(Debug, Clone, Serialize)]
pub struct PinChatMessage {
    pub chat_id: ChatId,
    pub message_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
}

impl Payload for PinChatMessage {
    const METHOD: &'static str = "pinChatMessage";
    type Output = bool;
}

/// `unpinChatMessage`.
#[derive(Debug, Clone, Serialize)]
pub struct UnpinChatMessage {
    pub chat_id: ChatId,
}

impl Payload for UnpinChatMessage {
    const METHOD: &'static str = "unpinChatMessage";
    type Output = bool;
}

/// `leaveChat`.
#[derive(Debug, Clone, Serialize)]
pub struct LeaveChat {
    pub chat_id: ChatId,
}

impl Payload for LeaveChat {
    const METHOD: &'static str = "leaveChat";
    type Output = bool;
}

/// `getChat`: up-to-date chat info including description, invite link and
/// pinned message where applicable.
#[derive(Debug, Clone, Serialize)]
pub struct GetChat {
    pub chat_id: ChatId,
}

impl Payload for GetChat {
    const METHOD: &'static str = "getChat";
    type Output = Chat;
}

/// `getChatAdministrators`: all admins except other bots.
#[derive(Debug, Clone, Serialize)]
pub struct GetChatAdministrators {
    pub chat_id: ChatId,
}

impl Payload for GetChatAdministrators {
    const METHOD: &'static str = "getChatAdministrators";
    type Output = Vec<ChatMember>;
}

/// `getChatMembersCount`.
#[derive(Debug, Clone, Serialize)]
pub struct GetChatMembersCount {
    pub chat_id: ChatId,
}

impl Payload for GetChatMembersCount {
    const METHOD: &'static str = "getChatMembersCount";
    type Output = u32;
}

/// `getChatMember`.
#[derive(Debug, Clone, Serialize)]
pub struct GetChatMember {
    pub chat_id: ChatId,
    pub user_id: i64,
}

impl Payload for GetChatMember {
    const METHOD: &'static str = "getChatMember";
    type Output = ChatMember;
}

impl BotApiClient {
    pub async fn kick_chat_member(&self, chat_id: impl Into<ChatId>, user_id: i64) -> Result<bool> {
        self.request(&KickChatMember::new(chat_id, user_id)).await
    }

    pub async fn unban_chat_member(&self, chat_id: impl Into<ChatId>, user_id: i64) -> Result<bool> {
        self.request(&UnbanChatMember {
            chat_id: chat_id.into(),
            user_id,
        })
        .await
    }

    pub async fn restrict_chat_member(&self, payload: &RestrictChatMember) -> Result<bool> {
        self.request(payload).await
    }

    pub async fn promote_chat_member(&self, payload: &PromoteChatMember) -> Result<bool> {
        self.request(payload).await
    }

    pub async fn set_chat_title(
        &self,
        chat_id: impl Into<ChatId>,
        title: impl Into<String>,
    ) -> Result<bool> {
        self.request(&SetChatTitle {
            chat_id: chat_id.into(),
            title: title.into(),
        })
        .await
    }

    pub async fn set_chat_description(
        &self,
        chat_id: impl Into<ChatId>,
        description: impl Into<String>,
    ) -> Result<bool> {
        self.request(&SetChatDescription {
            chat_id: chat_id.into(),
            description: Some(description.into()),
        })
        .await
    }

    pub async fn export_chat_invite_link(&self, chat_id: impl Into<ChatId>) -> Result<String> {
        self.request(&ExportChatInviteLink {
            chat_id: chat_id.into(),
        })
        .await
    }

    pub async fn get_chat(&self, chat_id: impl Into<ChatId>) -> Result<Chat> {
        self.request(&GetChat {
            chat_id: chat_id.into(),
        })
        .await
    }

    pub async fn get_chat_administrators(
        &self,
        chat_id: impl Into<ChatId>,
    ) -> Result<Vec<ChatMember>> {
        self.request(&GetChatAdministrators {
            chat_id: chat_id.into(),
        })
        .await
    }

    pub async fn get_chat_members_count(&self, chat_id: impl Into<ChatId>) -> Result<u32> {
        self.request(&GetChatMembersCount {
            chat_id: chat_id.into(),
        })
        .await
    }

    pub async fn get_chat_member(
        &self,
        chat_id: impl Into<ChatId>,
        user_id: i64,
    ) -> Result<ChatMember> {
        self.request(&GetChatMember {
            chat_id: chat_id.into(),
            user_id,
        })
        .await
    }

    pub async fn leave_chat(&self, chat_id: impl Into<ChatId>) -> Result<bool> {
        self.request(&LeaveChat {
            chat_id: chat_id.into(),
        })
        .await
    }

    pub async fn pin_chat_message(
        &self,
        chat_id: impl Into<ChatId>,
        message_id: i64,
    ) -> Result<bool> {
        self.request(&PinChatMessage {
            chat_id: chat_id.into(),
            message_id,
            disable_notification: None,
        })
        .await
    }

    pub async fn unpin_chat_message(&self, chat_id: impl Into<ChatId>) -> Result<bool> {
        self.request(&UnpinChatMessage {
            chat_id: chat_id.into(),
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn kick_until_date_serializes_as_unix_seconds() {
        let until = Utc.timestamp_opt(1_600_000_000, 0).unwrap();
        let payload = KickChatMember::new(-100_i64, 7).until(until);
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({"chat_id": -100, "user_id": 7, "until_date": 1_600_000_000})
        );
    }

    #[test]
    fn restrict_serializes_only_set_flags() {
        let mut payload = RestrictChatMember::new(-100_i64, 7);
        payload.can_send_messages = Some(false);
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({"chat_id": -100, "user_id": 7, "can_send_messages": false})
        );
    }

    #[test]
    fn promote_with_no_flags_is_a_bare_payload() {
        let payload = PromoteChatMember::new("@group", 7);
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({"chat_id": "@group", "user_id": 7})
        );
    }
}
