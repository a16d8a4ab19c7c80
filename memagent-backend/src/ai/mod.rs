//! Outbound chat-completion call. The rest of the system treats this as an
//! opaque `send(messages) -> text` collaborator.

pub mod types;

pub use types::AiError;

use reqwest::{Client, header};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::System => "system",
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Message {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Message {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// Client for an OpenAI-compatible chat-completions endpoint.
pub struct OpenAiClient {
    client: Client,
    auth_headers: header::HeaderMap,
    endpoint: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ApiMessage>,
}

#[derive(Debug, Serialize)]
struct ApiMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CompletionErrorResponse {
    error: CompletionError,
}

#[derive(Debug, Deserialize)]
struct CompletionError {
    message: String,
}

impl OpenAiClient {
    pub fn new(api_key: &str, endpoint: &str, model: &str) -> Result<Self, AiError> {
        let mut auth_headers = header::HeaderMap::new();
        auth_headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let auth_value = header::HeaderValue::from_str(&format!("Bearer {}", api_key))
            .map_err(|e| AiError::new(format!("Invalid API key format: {}", e)))?;
        auth_headers.insert(header::AUTHORIZATION, auth_value);

        Ok(Self {
            client: Client::new(),
            auth_headers,
            endpoint: endpoint.to_string(),
            model: model.to_string(),
        })
    }

    /// Send one completion request and return the assistant text. Transient
    /// upstream failures (429, 502, 503, 504, network errors) are retried
    /// with exponential backoff before giving up.
    pub async fn generate_text(&self, messages: Vec<Message>) -> Result<String, AiError> {
        let api_messages: Vec<ApiMessage> = messages
            .into_iter()
            .map(|m| ApiMessage {
                role: m.role.as_str().to_string(),
                content: m.content,
            })
            .collect();

        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: api_messages,
        };

        log::debug!("Sending request to completion endpoint: {:?}", request);

        const MAX_RETRIES: u32 = 3;
        const BASE_DELAY_MS: u64 = 2000;

        let mut last_error: Option<AiError> = None;

        for attempt in 0..=MAX_RETRIES {
            if attempt > 0 {
                let delay_ms = BASE_DELAY_MS * (1 << (attempt - 1));
                log::warn!(
                    "Completion retry attempt {}/{} after {}ms delay",
                    attempt,
                    MAX_RETRIES,
                    delay_ms
                );
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }

            let response = match self
                .client
                .post(&self.endpoint)
                .headers(self.auth_headers.clone())
                .json(&request)
                .send()
                .await
            {
                Ok(r) => r,
                Err(e) => {
                    log::warn!("Completion request failed (attempt {}): {}", attempt + 1, e);
                    last_error = Some(AiError::new(format!("Completion request failed: {}", e)));
                    continue;
                }
            };

            let status = response.status();
            if !status.is_success() {
                let status_code = status.as_u16();
                let error_text = response.text().await.unwrap_or_default();
                let message = match serde_json::from_str::<CompletionErrorResponse>(&error_text) {
                    Ok(body) => format!("Completion API error: {}", body.error.message),
                    Err(_) => format!(
                        "Completion API returned error status: {}, body: {}",
                        status, error_text
                    ),
                };
                let error = AiError::with_status(message, status_code);

                if matches!(status_code, 429 | 502 | 503 | 504) {
                    log::warn!(
                        "Completion endpoint returned retryable status {} (attempt {})",
                        status,
                        attempt + 1
                    );
                    last_error = Some(error);
                    continue;
                }
                return Err(error);
            }

            let body: ChatCompletionResponse = response
                .json()
                .await
                .map_err(|e| AiError::new(format!("Failed to parse completion response: {}", e)))?;

            let content = body
                .choices
                .into_iter()
                .next()
                .and_then(|choice| choice.message.content)
                .unwrap_or_default();

            if content.is_empty() {
                return Err(AiError::new("Completion endpoint returned no content"));
            }
            return Ok(content);
        }

        Err(last_error.unwrap_or_else(|| AiError::new("Max retries exceeded")))
    }
}
