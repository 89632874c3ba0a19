use crate::ai::{ChatResult, GuardianAI, ProviderClient};
use crate::config::{AssistantConfig, AssistantMode};
use crate::demo::DemoResponder;
use crate::types::ChatMessage;
use async_trait::async_trait;
use std::sync::Arc;

pub const FALLBACK_REPLY: &str = "I'm currently unable to process your request. Please try again later or check your network connection.";

/// Produces the bot's reply for a conversation that ends with a user turn.
#[async_trait]
pub trait Responder: Send + Sync {
    async fn respond(&self, conversation: &[ChatMessage]) -> ChatResult<String>;

    /// Short name for logs.
    fn label(&self) -> &'static str;
}

pub type SharedResponder = Arc<dyn Responder>;

/// What the widget should show once a reply attempt settles.
#[derive(Clone, Debug, PartialEq)]
pub struct ReplyOutcome {
    pub content: String,
    pub failed: bool,
}

/// Asks the responder for a reply, substituting the apology text on failure.
pub async fn answer(responder: &dyn Responder, conversation: &[ChatMessage]) -> ReplyOutcome {
    match responder.respond(conversation).await {
        Ok(content) => ReplyOutcome {
            content,
            failed: false,
        },
        Err(err) => {
            tracing::warn!(
                error = %err,
                responder = responder.label(),
                "assistant reply failed"
            );
            ReplyOutcome {
                content: FALLBACK_REPLY.to_string(),
                failed: true,
            }
        }
    }
}

/// Picks the responder for the configured mode. AI mode without a
/// configured provider degrades to the canned demo responder.
pub fn build_responder(config: &AssistantConfig) -> SharedResponder {
    build_responder_with(config, ProviderClient::from_env)
}

pub fn build_responder_with<F>(config: &AssistantConfig, provider: F) -> SharedResponder
where
    F: FnOnce() -> anyhow::Result<ProviderClient>,
{
    let demo = || -> SharedResponder { Arc::new(DemoResponder::new(config.pacing)) };

    match config.mode {
        AssistantMode::Demo => {
            tracing::info!("assistant running in demo mode");
            demo()
        }
        AssistantMode::Ai => match provider() {
            Ok(client) => {
                tracing::info!(model = client.model(), "assistant using chat-completion provider");
                Arc::new(GuardianAI::new(client))
            }
            Err(err) => {
                tracing::warn!(error = %err, "AI provider not configured, falling back to demo replies");
                demo()
            }
        },
    }
}
