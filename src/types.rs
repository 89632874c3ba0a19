use serde::{Deserialize, Serialize};
use std::fmt;
use time::OffsetDateTime;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageId(pub u64);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "msg-{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// Role name used by chat-completion APIs.
    pub fn wire_role(self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "assistant",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: MessageId,
    pub sender: Sender,
    pub content: String,
    pub typing: bool,
    pub created_at: Option<OffsetDateTime>,
}

impl ChatMessage {
    pub fn user(id: MessageId, content: impl Into<String>) -> Self {
        Self {
            id,
            sender: Sender::User,
            content: content.into(),
            typing: false,
            created_at: Some(OffsetDateTime::now_utc()),
        }
    }

    pub fn bot(id: MessageId, content: impl Into<String>) -> Self {
        Self {
            id,
            sender: Sender::Bot,
            content: content.into(),
            typing: false,
            created_at: Some(OffsetDateTime::now_utc()),
        }
    }

    pub fn typing_placeholder(id: MessageId) -> Self {
        Self {
            id,
            sender: Sender::Bot,
            content: String::new(),
            typing: true,
            created_at: None,
        }
    }
}
