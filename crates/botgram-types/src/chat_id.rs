//! Chat addressing: numeric id or `@channelusername`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Target of a chat-scoped method: the numeric chat id, or the public
/// `@username` of a channel/supergroup. Serializes untagged, so the wire
/// value is a plain integer or string as the API expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatId {
    Id(i64),
    Username(String),
}

impl From<i64> for ChatId {
    fn from(id: i64) -> Self {
        ChatId::Id(id)
    }
}

impl From<&str> for ChatId {
    fn from(username: &str) -> Self {
        ChatId::Username(username.to_string())
    }
}

impl From<String> for ChatId {
    fn from(username: String) -> Self {
        ChatId::Username(username)
    }
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatId::Id(id) => write!(f, "{id}"),
            ChatId::Username(username) => f.write_str(username),
        }
    }
}
