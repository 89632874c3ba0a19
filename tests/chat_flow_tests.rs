//! Integration tests for the assistant widget's reply flow
//!
//! Drives the timeline and responders the same way the chat view does:
//! push the user's text, open a typing placeholder, ask the responder,
//! then resolve the placeholder with whatever came back.

use async_trait::async_trait;
use safehome::ai::{ChatError, ChatResult};
use safehome::assistant::{FALLBACK_REPLY, Responder, answer};
use safehome::demo::{DemoResponder, OVERVIEW_REPLY, TypingPacing};
use safehome::timeline::{Timeline, WELCOME_MESSAGE};
use safehome::types::{ChatMessage, Sender};
use std::sync::Mutex;
use std::time::{Duration, Instant};

struct FailingResponder;

#[async_trait]
impl Responder for FailingResponder {
    async fn respond(&self, _conversation: &[ChatMessage]) -> ChatResult<String> {
        Err(ChatError::Transport("connection refused".to_string()))
    }

    fn label(&self) -> &'static str {
        "failing"
    }
}

/// Records what it was asked so tests can check the forwarded history.
#[derive(Default)]
struct RecordingResponder {
    seen: Mutex<Vec<Vec<String>>>,
}

#[async_trait]
impl Responder for RecordingResponder {
    async fn respond(&self, conversation: &[ChatMessage]) -> ChatResult<String> {
        let contents = conversation.iter().map(|m| m.content.clone()).collect();
        self.seen.lock().expect("recorder poisoned").push(contents);
        Ok(format!("echo {}", conversation.len()))
    }

    fn label(&self) -> &'static str {
        "recording"
    }
}

async fn send(timeline: &mut Timeline, responder: &dyn Responder, text: &str) -> Option<bool> {
    timeline.push_user(text)?;
    let conversation = timeline.conversation();
    let placeholder = timeline.begin_typing();
    let outcome = answer(responder, &conversation).await;
    assert!(timeline.resolve(placeholder, outcome.content));
    Some(outcome.failed)
}

mod demo_flow {
    use super::*;

    #[tokio::test]
    async fn test_demo_conversation() {
        let responder = DemoResponder::new(TypingPacing::INSTANT);
        let mut timeline = Timeline::new();

        assert_eq!(send(&mut timeline, &responder, "Are the windows shut?").await, Some(false));
        assert_eq!(send(&mut timeline, &responder, "what can you do").await, Some(false));

        let messages = timeline.messages();
        assert_eq!(messages.len(), 5);
        assert_eq!(messages[0].content, WELCOME_MESSAGE);
        assert_eq!(messages[1].sender, Sender::User);
        assert!(messages[2].content.contains("doors and windows"));
        assert_eq!(messages[4].content, OVERVIEW_REPLY);
        assert!(messages.iter().all(|m| !m.typing));
        assert!(!timeline.is_busy());
    }

    #[tokio::test]
    async fn test_blank_input_sends_nothing() {
        let responder = DemoResponder::new(TypingPacing::INSTANT);
        let mut timeline = Timeline::new();
        assert_eq!(send(&mut timeline, &responder, "   ").await, None);
        assert_eq!(timeline.len(), 1);
    }

    #[tokio::test]
    async fn test_typing_delay_is_applied() {
        let pacing = TypingPacing {
            base: Duration::from_millis(30),
            per_char: Duration::ZERO,
            max: Duration::from_millis(30),
        };
        let responder = DemoResponder::new(pacing);
        let mut timeline = Timeline::new();

        let started = Instant::now();
        send(&mut timeline, &responder, "camera").await;
        assert!(started.elapsed() >= Duration::from_millis(30));
    }
}

mod failure_flow {
    use super::*;

    #[tokio::test]
    async fn test_failure_resolves_with_fallback() {
        let mut timeline = Timeline::new();
        assert_eq!(send(&mut timeline, &FailingResponder, "door?").await, Some(true));

        let last = timeline.messages().last().unwrap();
        assert_eq!(last.sender, Sender::Bot);
        assert_eq!(last.content, FALLBACK_REPLY);
        assert!(!timeline.is_busy());
    }

    #[tokio::test]
    async fn test_can_send_again_after_failure() {
        let mut timeline = Timeline::new();
        send(&mut timeline, &FailingResponder, "door?").await;
        assert_eq!(send(&mut timeline, &FailingResponder, "again").await, Some(true));
        assert_eq!(timeline.len(), 5);
    }
}

mod history_flow {
    use super::*;

    #[tokio::test]
    async fn test_history_excludes_welcome_and_placeholder() {
        let responder = RecordingResponder::default();
        let mut timeline = Timeline::new();

        send(&mut timeline, &responder, "first").await;
        send(&mut timeline, &responder, "second").await;

        let seen = responder.seen.lock().unwrap();
        assert_eq!(seen[0], vec!["first".to_string()]);
        assert_eq!(
            seen[1],
            vec!["first".to_string(), "echo 1".to_string(), "second".to_string()]
        );
    }
}
