use crate::ai::client::{ChatError, ChatResult};
use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT_MODEL: &str = "gpt-3.5-turbo";

/// Client for any OpenAI-compatible `chat/completions` endpoint
pub struct CompletionsClient {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct WireMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

#[derive(Serialize)]
struct CompletionsRequest<'a> {
    model: &'a str,
    messages: &'a [WireMessage<'a>],
}

// Response shapes accepted from the endpoint
#[derive(Deserialize)]
struct CompletionMessage {
    content: String,
}

#[derive(Deserialize)]
struct CompletionChoice {
    message: Option<CompletionMessage>,
}

#[derive(Deserialize)]
struct OpenAIShape {
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct ContentOnly {
    content: String,
}

/// Pull the reply text out of a successful response body.
///
/// Accepts the OpenAI `choices[0].message.content` shape or a bare
/// `{ "content": ... }` object. A body that isn't JSON at all is taken as
/// plain reply text; JSON in any other shape is an error.
pub fn parse_completion_body(body: &str) -> ChatResult<String> {
    let value = match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => value,
        Err(_) => return Ok(body.to_string()),
    };

    if let serde_json::Value::String(text) = &value {
        return Ok(text.clone());
    }

    if let Ok(parsed) = OpenAIShape::deserialize(&value)
        && let Some(choice) = parsed.choices.into_iter().next()
        && let Some(msg) = choice.message
    {
        return Ok(msg.content);
    }

    if let Ok(parsed) = ContentOnly::deserialize(&value) {
        return Ok(parsed.content);
    }

    Err(ChatError::UnexpectedResponse(body.to_string()))
}

impl CompletionsClient {
    pub fn new(endpoint: String, model: String, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
            model,
            api_key,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn complete(&self, messages: &[WireMessage<'_>]) -> ChatResult<String> {
        let mut request = self.client.post(&self.endpoint).json(&CompletionsRequest {
            model: &self.model,
            messages,
        });

        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ChatError::Endpoint {
                status: status.as_u16(),
                body,
            });
        }

        parse_completion_body(&body)
    }
}
