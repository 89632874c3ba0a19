/// AI module for Safe Home Guardian
///
/// Backs the assistant widget with a real chat-completion model. Providers
/// (custom OpenAI-compatible endpoint, OpenAI, Anthropic, Ollama) are picked
/// from environment variables.
///
/// # Architecture
///
/// - `client` - `GuardianAI`, error types and the security system prompt
/// - `providers` - provider detection and the reqwest endpoint client
///
/// # Usage
///
/// ```rust,no_run
/// use safehome::ai::GuardianAI;
/// use safehome::types::{ChatMessage, MessageId};
///
/// # async fn example() -> anyhow::Result<()> {
/// let ai = GuardianAI::from_env()?;
/// let reply = ai.chat(&[ChatMessage::user(MessageId(1), "Are my doors locked?")]).await?;
/// # Ok(())
/// # }
/// ```
mod client;
mod providers;

// Re-export main types
pub use client::{ChatError, ChatResult, GuardianAI, SYSTEM_PROMPT, split_prompt, wire_messages};
pub use providers::{
    CompletionsClient, DEFAULT_ENDPOINT_MODEL, ProviderClient, ProviderKind, WireMessage,
    detect_provider, parse_completion_body,
};
