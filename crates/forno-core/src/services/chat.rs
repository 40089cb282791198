//! Chat-completion API client.
//!
//! Both AI collaborators (chef comment generation and voice order
//! interpretation) speak the same chat-completion protocol against a
//! fixed endpoint; this module owns the HTTP plumbing and the wire
//! types they share.

use std::time::Duration;

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const API_BASE_URL: &str = "https://ai.liara.ir/api/694c13b212cdc04b3dc02b24/v1";
const API_KEY: &str = "YOUR_API_KEY"; // TODO: Load from deployment config
const MODEL_NAME: &str = "google/gemini-2.5-flash";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Chat client errors
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("API error {0}: {1}")]
    ApiError(u16, String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Empty response from model")]
    EmptyResponse,
}

/// One message in a chat-completion request.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: MessageContent,
}

impl ChatMessage {
    /// A plain-text user message.
    pub fn user_text(text: impl Into<String>) -> Self {
        Self {
            role: "user",
            content: MessageContent::Text(text.into()),
        }
    }

    /// A user message carrying text instructions plus an inline
    /// base64-encoded WAV payload.
    pub fn user_with_audio(text: impl Into<String>, base64_audio: &str) -> Self {
        Self {
            role: "user",
            content: MessageContent::Parts(vec![
                ContentPart::Text { text: text.into() },
                ContentPart::ImageUrl {
                    image_url: InlineData {
                        url: format!("data:audio/wav;base64,{base64_audio}"),
                    },
                },
            ]),
        }
    }
}

/// Message content: either a bare string or a list of typed parts.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

/// A typed content part within a multi-part message.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: InlineData },
}

/// Inline data URL wrapper used for the audio payload.
#[derive(Debug, Clone, Serialize)]
pub struct InlineData {
    pub url: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}

/// Chat-completion API client
pub struct ChatClient {
    http_client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl ChatClient {
    /// Creates a client against the fixed production endpoint.
    pub fn new() -> Result<Self, ChatError> {
        Self::with_endpoint(API_BASE_URL, API_KEY, MODEL_NAME)
    }

    /// Creates a client against a custom endpoint (used by tests).
    pub fn with_endpoint(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self, ChatError> {
        let http_client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ChatError::NetworkError(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
        })
    }

    /// Send a completion request and return the first choice's trimmed
    /// text content.
    ///
    /// With `json_response` set, the model is instructed to answer with
    /// a strict JSON object.
    pub async fn complete(
        &self,
        messages: &[ChatMessage],
        json_response: bool,
    ) -> Result<String, ChatError> {
        let request = ChatRequest {
            model: &self.model,
            messages,
            response_format: json_response.then_some(ResponseFormat {
                kind: "json_object",
            }),
        };

        debug!(
            "Sending chat completion request ({} message(s), json={json_response})",
            messages.len()
        );

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ChatError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ChatError::ApiError(status.as_u16(), error_text));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| ChatError::ParseError(e.to_string()))?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or(ChatError::EmptyResponse)?;

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = ChatClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_audio_message_wire_shape() {
        let message = ChatMessage::user_with_audio("listen", "QUJD");
        let json = serde_json::to_value(&message).unwrap();

        assert_eq!(json["role"], "user");
        assert_eq!(json["content"][0]["type"], "text");
        assert_eq!(json["content"][1]["type"], "image_url");
        assert_eq!(
            json["content"][1]["image_url"]["url"],
            "data:audio/wav;base64,QUJD"
        );
    }

    #[test]
    fn test_text_message_serializes_as_bare_string() {
        let message = ChatMessage::user_text("hello");
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["content"], "hello");
    }

    #[test]
    fn test_request_omits_response_format_by_default() {
        let messages = vec![ChatMessage::user_text("hi")];
        let request = ChatRequest {
            model: "test-model",
            messages: &messages,
            response_format: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("response_format").is_none());

        let request = ChatRequest {
            model: "test-model",
            messages: &messages,
            response_format: Some(ResponseFormat {
                kind: "json_object",
            }),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["response_format"]["type"], "json_object");
    }

    #[test]
    fn test_response_content_extraction() {
        let raw = r#"{
            "choices": [
                {"message": {"role": "assistant", "content": "  نوش جان  "}}
            ]
        }"#;
        let parsed: ChatResponse = serde_json::from_str(raw).unwrap();
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|t| t.trim().to_string())
            .unwrap();
        assert_eq!(content, "نوش جان");
    }

    #[test]
    fn test_response_without_choices() {
        let parsed: ChatResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.choices.is_empty());
    }
}
