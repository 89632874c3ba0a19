//! Canned replies for the offline assistant.
//!
//! Input is lowercased and checked against a short ordered rule list; the
//! first rule with a matching keyword wins. Replies are delivered after a
//! typing delay that grows with the reply length.

use crate::ai::ChatResult;
use crate::assistant::Responder;
use crate::types::{ChatMessage, Sender};
use async_trait::async_trait;
use std::time::Duration;

struct CannedRule {
    keywords: &'static [&'static str],
    reply: &'static str,
}

const RULES: &[CannedRule] = &[
    CannedRule {
        keywords: &["door", "window"],
        reply: "Based on your home sensors, all doors and windows appear to be securely closed and locked.",
    },
    CannedRule {
        keywords: &["camera", "feed"],
        reply: "Your front door camera shows normal activity. The backyard camera detected some movement from a neighborhood cat about 15 minutes ago.",
    },
    CannedRule {
        keywords: &["intru", "unusual"],
        reply: "No intrusions detected in the last 24 hours. There was some unusual activity near your garage yesterday at 3:45 PM, but it was identified as a delivery person.",
    },
    CannedRule {
        keywords: &["alarm", "setting"],
        reply: "Your alarm is currently set to 'Home' mode. Would you like to change it to 'Away' or 'Night' mode?",
    },
    CannedRule {
        keywords: &["report"],
        reply: "Today's security report: All systems normal.\n\n\
- 3 authorized entries (You at 8:30 AM, Your spouse at 12:15 PM, and Your child at 3:40 PM)\n\
- No unusual activities detected\n\
- All cameras operational",
    },
];

pub const OVERVIEW_REPLY: &str = "I'm your Home Security Assistant. I can help you check door/window status, view camera feeds, report intrusions, manage alarm settings, or get security reports. What would you like to know?";

pub fn canned_reply(input: &str) -> &'static str {
    let text = input.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| text.contains(kw)))
        .map(|rule| rule.reply)
        .unwrap_or(OVERVIEW_REPLY)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingPacing {
    pub base: Duration,
    pub per_char: Duration,
    pub max: Duration,
}

impl Default for TypingPacing {
    fn default() -> Self {
        Self {
            base: Duration::from_millis(400),
            per_char: Duration::from_millis(12),
            max: Duration::from_millis(2500),
        }
    }
}

impl TypingPacing {
    pub const INSTANT: TypingPacing = TypingPacing {
        base: Duration::ZERO,
        per_char: Duration::ZERO,
        max: Duration::ZERO,
    };

    pub fn typing_delay(&self, reply: &str) -> Duration {
        let chars = u32::try_from(reply.chars().count()).unwrap_or(u32::MAX);
        let typed = self.per_char.saturating_mul(chars);
        self.base.saturating_add(typed).min(self.max)
    }
}

pub struct DemoResponder {
    pacing: TypingPacing,
}

impl DemoResponder {
    pub fn new(pacing: TypingPacing) -> Self {
        Self { pacing }
    }
}

#[async_trait]
impl Responder for DemoResponder {
    async fn respond(&self, conversation: &[ChatMessage]) -> ChatResult<String> {
        let input = conversation
            .iter()
            .rev()
            .find(|msg| msg.sender == Sender::User)
            .map(|msg| msg.content.as_str())
            .unwrap_or_default();
        let reply = canned_reply(input);
        let delay = self.pacing.typing_delay(reply);
        if !delay.is_zero() {
            crate::timer::sleep(delay).await;
        }
        Ok(reply.to_string())
    }

    fn label(&self) -> &'static str {
        "demo"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MessageId;
    use std::future::Future;
    use std::task::{Context, Poll, Waker};

    #[test]
    fn test_keyword_rules() {
        assert!(canned_reply("Is the back DOOR locked?").contains("doors and windows"));
        assert!(canned_reply("show me the camera").contains("front door camera"));
        assert!(canned_reply("any intruders?").contains("No intrusions"));
        assert!(canned_reply("change alarm").contains("'Home' mode"));
        assert!(canned_reply("daily report please").starts_with("Today's security report"));
        assert_eq!(canned_reply("hello"), OVERVIEW_REPLY);
    }

    #[test]
    fn test_first_rule_wins() {
        // "window" outranks "camera"
        assert!(canned_reply("camera near the window").contains("doors and windows"));
        // "setting" outranks "report"
        assert!(canned_reply("report my settings").contains("'Home' mode"));
    }

    #[test]
    fn test_typing_delay_grows_and_caps() {
        let pacing = TypingPacing::default();
        let short = pacing.typing_delay("ok");
        let long = pacing.typing_delay(OVERVIEW_REPLY);
        assert_eq!(short, Duration::from_millis(424));
        assert!(long > short);
        assert_eq!(pacing.typing_delay(&"x".repeat(10_000)), pacing.max);
    }

    #[tokio::test]
    async fn test_demo_responder_answers_last_user_turn() {
        let responder = DemoResponder::new(TypingPacing::INSTANT);
        let convo = [
            ChatMessage::user(MessageId(1), "camera"),
            ChatMessage::bot(MessageId(2), "..."),
            ChatMessage::user(MessageId(3), "give me a report"),
        ];
        let reply = responder.respond(&convo).await.unwrap();
        assert!(reply.starts_with("Today's security report"));
    }

    #[test]
    fn test_instant_reply_settles_without_a_runtime() {
        // The web build polls on a plain executor with no tokio reactor
        let responder = DemoResponder::new(TypingPacing::INSTANT);
        let convo = [ChatMessage::user(MessageId(1), "is the door locked")];
        let mut reply = responder.respond(&convo);
        let mut cx = Context::from_waker(Waker::noop());
        match reply.as_mut().poll(&mut cx) {
            Poll::Ready(Ok(text)) => assert!(text.contains("doors and windows")),
            other => panic!("reply did not settle on first poll: {other:?}"),
        }
    }
}
