use crate::assistant::Responder;
use crate::types::{ChatMessage, Sender};
use anyhow::Result;
use async_trait::async_trait;
use rig::client::CompletionClient;
use rig::completion::Chat;

use super::providers::{ProviderClient, WireMessage};

// ============================================
// Error Types
// ============================================

#[derive(Debug, Clone, thiserror::Error)]
pub enum ChatError {
    #[error("No messages provided")]
    EmptyConversation,

    #[error("Last message must come from the user")]
    NotUserTurn,

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("LLM endpoint error {status}: {body}")]
    Endpoint { status: u16, body: String },

    #[error("Unexpected response from LLM endpoint: {0}")]
    UnexpectedResponse(String),

    #[error("Provider error: {0}")]
    Provider(String),
}

impl From<reqwest::Error> for ChatError {
    fn from(err: reqwest::Error) -> Self {
        ChatError::Transport(err.to_string())
    }
}

impl From<anyhow::Error> for ChatError {
    fn from(err: anyhow::Error) -> Self {
        ChatError::Provider(err.to_string())
    }
}

pub type ChatResult<T> = Result<T, ChatError>;

pub const SYSTEM_PROMPT: &str = r#"You are a home security assistant AI that helps users with their home security system.
You can provide information about:
- Door/window status (pretend you have access to this data)
- Camera feeds (describe what might be seen, but acknowledge these are simulated)
- Report intrusions or unusual activity (simulate alerts)
- Help manage alarm settings
- Provide simulated daily security reports

Always respond in a helpful, security-focused manner. If asked about real security status,
clearly indicate these are simulated responses for demonstration purposes."#;

/// Split a conversation into the prompt (last user message) and the prior turns.
pub fn split_prompt(messages: &[ChatMessage]) -> ChatResult<(&ChatMessage, &[ChatMessage])> {
    let (last, history) = messages.split_last().ok_or(ChatError::EmptyConversation)?;
    if last.sender != Sender::User {
        return Err(ChatError::NotUserTurn);
    }
    Ok((last, history))
}

/// Build the wire payload for an OpenAI-compatible endpoint: system prompt first.
pub fn wire_messages(messages: &[ChatMessage]) -> Vec<WireMessage<'_>> {
    let mut wire = Vec::with_capacity(messages.len() + 1);
    wire.push(WireMessage {
        role: "system",
        content: SYSTEM_PROMPT,
    });
    wire.extend(messages.iter().map(|msg| WireMessage {
        role: msg.sender.wire_role(),
        content: &msg.content,
    }));
    wire
}

/// Chat-completion backed assistant.
/// Handles provider auto-detection and agent configuration
pub struct GuardianAI {
    client: ProviderClient,
}

impl GuardianAI {
    /// Create AI client from environment configuration
    pub fn from_env() -> Result<Self> {
        let client = ProviderClient::from_env()?;
        Ok(Self { client })
    }

    pub fn new(client: ProviderClient) -> Self {
        Self { client }
    }

    pub fn provider(&self) -> &ProviderClient {
        &self.client
    }

    /// Chat with conversation history (non-streaming, multi-turn)
    pub async fn chat(&self, messages: &[ChatMessage]) -> ChatResult<String> {
        let (prompt, history) = split_prompt(messages)?;
        tracing::debug!(
            model = self.client.model(),
            turns = messages.len(),
            "requesting chat completion"
        );

        match &self.client {
            ProviderClient::Endpoint(client) => client.complete(&wire_messages(messages)).await,
            ProviderClient::OpenAI { client, model } => {
                let agent = client
                    .agent(model)
                    .preamble(SYSTEM_PROMPT)
                    .max_tokens(1024)
                    .temperature(0.7)
                    .build();

                agent
                    .chat(prompt.content.as_str(), to_rig_messages(history))
                    .await
                    .map_err(|e| ChatError::Provider(e.to_string()))
            }
            ProviderClient::Anthropic { client, model } => {
                let agent = client
                    .agent(model)
                    .preamble(SYSTEM_PROMPT)
                    .max_tokens(1024)
                    .temperature(0.7)
                    .build();

                agent
                    .chat(prompt.content.as_str(), to_rig_messages(history))
                    .await
                    .map_err(|e| ChatError::Provider(e.to_string()))
            }
            ProviderClient::Ollama { client, model } => {
                let agent = client.agent(model).preamble(SYSTEM_PROMPT).build();

                agent
                    .chat(prompt.content.as_str(), to_rig_messages(history))
                    .await
                    .map_err(|e| ChatError::Provider(e.to_string()))
            }
        }
    }
}

/// Convert timeline messages to Rig Message format
fn to_rig_messages(messages: &[ChatMessage]) -> Vec<rig::message::Message> {
    messages
        .iter()
        .map(|msg| match msg.sender {
            Sender::User => rig::message::Message::user(&msg.content),
            Sender::Bot => rig::message::Message::assistant(&msg.content),
        })
        .collect()
}

#[async_trait]
impl Responder for GuardianAI {
    async fn respond(&self, conversation: &[ChatMessage]) -> ChatResult<String> {
        self.chat(conversation).await
    }

    fn label(&self) -> &'static str {
        match self.client.kind() {
            super::ProviderKind::Endpoint => "endpoint",
            super::ProviderKind::OpenAI => "openai",
            super::ProviderKind::Anthropic => "anthropic",
            super::ProviderKind::Ollama => "ollama",
        }
    }
}
