pub mod endpoint;

use anyhow::Result;
use rig::providers;
use std::env;

pub use endpoint::{CompletionsClient, DEFAULT_ENDPOINT_MODEL, WireMessage, parse_completion_body};

const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";
const DEFAULT_ANTHROPIC_MODEL: &str = "claude-3-5-sonnet-20241022";
const DEFAULT_OLLAMA_MODEL: &str = "llama3.1:latest";

/// Enum to hold different provider clients
pub enum ProviderClient {
    Endpoint(CompletionsClient),
    OpenAI {
        client: providers::openai::Client,
        model: String,
    },
    Anthropic {
        client: providers::anthropic::Client,
        model: String,
    },
    Ollama {
        client: providers::ollama::Client,
        model: String,
    },
}

/// Which provider the environment selects, without building a client
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProviderKind {
    Endpoint,
    OpenAI,
    Anthropic,
    Ollama,
}

pub(crate) fn flag_enabled(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Priority order:
/// 1. GUARDIAN_ENDPOINT → OpenAI-compatible endpoint
/// 2. OPENAI_API_KEY → OpenAI
/// 3. ANTHROPIC_API_KEY → Claude
/// 4. LLM_USE_OLLAMA=true → Ollama
pub fn detect_provider<F>(lookup: F) -> Option<ProviderKind>
where
    F: Fn(&str) -> Option<String>,
{
    if lookup("GUARDIAN_ENDPOINT").is_some() {
        return Some(ProviderKind::Endpoint);
    }
    if lookup("OPENAI_API_KEY").is_some() {
        return Some(ProviderKind::OpenAI);
    }
    if lookup("ANTHROPIC_API_KEY").is_some() {
        return Some(ProviderKind::Anthropic);
    }
    if lookup("LLM_USE_OLLAMA").is_some_and(|v| flag_enabled(&v)) {
        return Some(ProviderKind::Ollama);
    }
    None
}

impl ProviderClient {
    /// Auto-detect and configure provider from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let model_or = |key: &str, fallback: &str| lookup(key).unwrap_or_else(|| fallback.to_string());

        match detect_provider(&lookup) {
            Some(ProviderKind::Endpoint) => {
                let endpoint = lookup("GUARDIAN_ENDPOINT")
                    .ok_or_else(|| anyhow::anyhow!("GUARDIAN_ENDPOINT not set"))?;
                Ok(Self::Endpoint(CompletionsClient::new(
                    endpoint,
                    model_or("GUARDIAN_MODEL", DEFAULT_ENDPOINT_MODEL),
                    lookup("GUARDIAN_API_KEY"),
                )))
            }
            Some(ProviderKind::OpenAI) => {
                let key = lookup("OPENAI_API_KEY")
                    .ok_or_else(|| anyhow::anyhow!("OPENAI_API_KEY not set"))?;
                Ok(Self::OpenAI {
                    client: providers::openai::Client::new(&key),
                    model: model_or("OPENAI_MODEL", DEFAULT_OPENAI_MODEL),
                })
            }
            Some(ProviderKind::Anthropic) => {
                let key = lookup("ANTHROPIC_API_KEY")
                    .ok_or_else(|| anyhow::anyhow!("ANTHROPIC_API_KEY not set"))?;
                Ok(Self::Anthropic {
                    client: providers::anthropic::Client::new(&key),
                    model: model_or("ANTHROPIC_MODEL", DEFAULT_ANTHROPIC_MODEL),
                })
            }
            // Ollama endpoint is configured via OLLAMA_HOST; the Rig client reads it
            Some(ProviderKind::Ollama) => Ok(Self::Ollama {
                client: providers::ollama::Client::new(),
                model: model_or("LLM_MODEL", DEFAULT_OLLAMA_MODEL),
            }),
            None => Err(anyhow::anyhow!(
                "No AI provider configured. Set GUARDIAN_ENDPOINT, OPENAI_API_KEY, ANTHROPIC_API_KEY, or LLM_USE_OLLAMA=true"
            )),
        }
    }

    pub fn kind(&self) -> ProviderKind {
        match self {
            Self::Endpoint(_) => ProviderKind::Endpoint,
            Self::OpenAI { .. } => ProviderKind::OpenAI,
            Self::Anthropic { .. } => ProviderKind::Anthropic,
            Self::Ollama { .. } => ProviderKind::Ollama,
        }
    }

    pub fn model(&self) -> &str {
        match self {
            Self::Endpoint(client) => client.model(),
            Self::OpenAI { model, .. } | Self::Anthropic { model, .. } | Self::Ollama { model, .. } => {
                model
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_endpoint_takes_priority() {
        let lookup = lookup_from(&[
            ("GUARDIAN_ENDPOINT", "http://localhost:8080/v1/chat/completions"),
            ("OPENAI_API_KEY", "sk-test"),
        ]);
        assert_eq!(detect_provider(lookup), Some(ProviderKind::Endpoint));
    }

    #[test]
    fn test_ollama_requires_truthy_flag() {
        assert_eq!(detect_provider(lookup_from(&[("LLM_USE_OLLAMA", "no")])), None);
        assert_eq!(
            detect_provider(lookup_from(&[("LLM_USE_OLLAMA", "Yes")])),
            Some(ProviderKind::Ollama)
        );
    }

    #[test]
    fn test_nothing_configured() {
        assert!(detect_provider(lookup_from(&[])).is_none());
        assert!(ProviderClient::from_lookup(lookup_from(&[])).is_err());
    }

    #[test]
    fn test_endpoint_model_defaults() {
        let client = ProviderClient::from_lookup(lookup_from(&[(
            "GUARDIAN_ENDPOINT",
            "http://localhost:8080/v1/chat/completions",
        )]))
        .unwrap();
        assert_eq!(client.kind(), ProviderKind::Endpoint);
        assert_eq!(client.model(), DEFAULT_ENDPOINT_MODEL);
    }
}
