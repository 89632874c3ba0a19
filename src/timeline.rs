//! Ordered chat history for the assistant widget.
//!
//! The timeline owns message ids and the single in-flight typing
//! placeholder. The widget pushes the user's text, opens a placeholder,
//! and later resolves it with the reply once the responder is done.

use crate::types::{ChatMessage, MessageId, Sender};

pub const WELCOME_MESSAGE: &str =
    "Hello! I'm your Home Security Assistant. How can I help you today?";

const WELCOME_ID: MessageId = MessageId(0);

#[derive(Clone, Debug, PartialEq)]
pub struct Timeline {
    messages: Vec<ChatMessage>,
    next_id: u64,
    pending: Option<MessageId>,
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Timeline {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::bot(WELCOME_ID, WELCOME_MESSAGE)],
            next_id: WELCOME_ID.0 + 1,
            pending: None,
        }
    }

    fn allocate_id(&mut self) -> MessageId {
        let id = MessageId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// True while a reply is outstanding.
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Appends the user's message. Blank input and input sent while a reply
    /// is pending are rejected.
    pub fn push_user(&mut self, text: &str) -> Option<MessageId> {
        let trimmed = text.trim();
        if trimmed.is_empty() || self.is_busy() {
            return None;
        }
        let id = self.allocate_id();
        self.messages.push(ChatMessage::user(id, trimmed));
        Some(id)
    }

    /// Opens the typing placeholder. Reuses the current one when a reply is
    /// already in flight.
    pub fn begin_typing(&mut self) -> MessageId {
        if let Some(existing) = self.pending {
            return existing;
        }
        let id = self.allocate_id();
        self.messages.push(ChatMessage::typing_placeholder(id));
        self.pending = Some(id);
        id
    }

    /// Replaces the placeholder with the bot's reply, keeping its position.
    pub fn resolve(&mut self, placeholder: MessageId, content: impl Into<String>) -> bool {
        if self.pending != Some(placeholder) {
            return false;
        }
        let Some(index) = self.messages.iter().position(|msg| msg.id == placeholder) else {
            self.pending = None;
            return false;
        };
        let id = self.allocate_id();
        self.messages[index] = ChatMessage::bot(id, content);
        self.pending = None;
        true
    }

    /// Messages worth forwarding to a remote model: everything except the
    /// greeting and the typing placeholder.
    pub fn conversation(&self) -> Vec<ChatMessage> {
        self.messages
            .iter()
            .filter(|msg| msg.id != WELCOME_ID && !msg.typing)
            .cloned()
            .collect()
    }

    pub fn last_user_text(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|msg| msg.sender == Sender::User)
            .map(|msg| msg.content.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_welcome() {
        let timeline = Timeline::new();
        assert_eq!(timeline.len(), 1);
        let first = &timeline.messages()[0];
        assert_eq!(first.sender, Sender::Bot);
        assert_eq!(first.content, WELCOME_MESSAGE);
        assert!(!timeline.is_busy());
    }

    #[test]
    fn test_blank_input_is_rejected() {
        let mut timeline = Timeline::new();
        assert!(timeline.push_user("").is_none());
        assert!(timeline.push_user("   \n\t").is_none());
        assert_eq!(timeline.len(), 1);
    }

    #[test]
    fn test_user_text_is_trimmed() {
        let mut timeline = Timeline::new();
        timeline.push_user("  door status?  ").unwrap();
        assert_eq!(timeline.last_user_text(), Some("door status?"));
    }

    #[test]
    fn test_typing_placeholder_is_replaced_in_place() {
        let mut timeline = Timeline::new();
        timeline.push_user("hello").unwrap();
        let placeholder = timeline.begin_typing();
        assert!(timeline.is_busy());
        assert!(timeline.messages()[2].typing);

        assert!(timeline.resolve(placeholder, "hi there"));
        assert!(!timeline.is_busy());
        assert_eq!(timeline.len(), 3);
        let reply = &timeline.messages()[2];
        assert_eq!(reply.content, "hi there");
        assert!(!reply.typing);
        assert_ne!(reply.id, placeholder);
    }

    #[test]
    fn test_input_rejected_while_busy() {
        let mut timeline = Timeline::new();
        timeline.push_user("first").unwrap();
        let placeholder = timeline.begin_typing();
        assert!(timeline.push_user("second").is_none());
        assert_eq!(timeline.begin_typing(), placeholder);
        assert_eq!(timeline.messages().iter().filter(|m| m.typing).count(), 1);
    }

    #[test]
    fn test_resolve_unknown_id_is_ignored() {
        let mut timeline = Timeline::new();
        timeline.push_user("first").unwrap();
        timeline.begin_typing();
        assert!(!timeline.resolve(MessageId(999), "nope"));
        assert!(timeline.is_busy());
    }

    #[test]
    fn test_conversation_skips_welcome_and_placeholder() {
        let mut timeline = Timeline::new();
        timeline.push_user("camera?").unwrap();
        timeline.begin_typing();
        let convo = timeline.conversation();
        assert_eq!(convo.len(), 1);
        assert_eq!(convo[0].content, "camera?");
    }

    #[test]
    fn test_ids_are_unique() {
        let mut timeline = Timeline::new();
        for turn in 0..5 {
            timeline.push_user(&format!("turn {turn}")).unwrap();
            let placeholder = timeline.begin_typing();
            timeline.resolve(placeholder, "ok");
        }
        let mut ids: Vec<_> = timeline.messages().iter().map(|m| m.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), timeline.len());
    }
}
