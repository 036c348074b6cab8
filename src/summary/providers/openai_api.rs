use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info};

use super::SummaryProvider;
use crate::summary::{ServiceError, SummaryRequest, SUMMARY_FALLBACK};

const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatCompletionPayload<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Option<ChatResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Chat-completions client for OpenAI-compatible endpoints.
pub struct OpenAiChatProvider {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
    temperature: f32,
}

impl OpenAiChatProvider {
    pub fn new(
        api_key: String,
        endpoint: Option<String>,
        model: String,
        temperature: f32,
        timeout: Duration,
    ) -> Result<Self, ServiceError> {
        if api_key.trim().is_empty() {
            return Err(ServiceError::MissingCredential);
        }

        let client = reqwest::Client::builder().timeout(timeout).build()?;
        let endpoint = endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        info!(
            "Initialized OpenAI summary provider: endpoint={}, model={}",
            endpoint, model
        );

        Ok(Self {
            client,
            endpoint,
            api_key,
            model,
            temperature,
        })
    }
}

#[async_trait]
impl SummaryProvider for OpenAiChatProvider {
    fn name(&self) -> &'static str {
        "OpenAI API"
    }

    async fn generate(&self, request: &SummaryRequest) -> Result<String, ServiceError> {
        let payload = ChatCompletionPayload {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &request.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user_prompt,
                },
            ],
            temperature: self.temperature,
        };

        debug!("Requesting chat completion from {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;

        if !status.is_success() {
            error!(
                "Summary request failed with status {}: {}",
                status, response_text
            );

            let message = match serde_json::from_str::<ErrorResponse>(&response_text) {
                Ok(body) => body.error.message,
                Err(_) => response_text,
            };

            return Err(ServiceError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: ChatCompletionResponse = serde_json::from_str(&response_text)
            .map_err(|e| ServiceError::MalformedResponse(e.to_string()))?;

        let text = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty());

        // Degrade gracefully when the service answers without text.
        let text = text.unwrap_or_else(|| SUMMARY_FALLBACK.to_string());

        info!("Summary generated: {} chars", text.len());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_rejected_at_construction() {
        let result = OpenAiChatProvider::new(
            "  ".to_string(),
            None,
            "gpt-4.1-mini".to_string(),
            0.7,
            Duration::from_secs(30),
        );
        assert!(matches!(result, Err(ServiceError::MissingCredential)));
    }

    #[test]
    fn test_payload_serialization() {
        let payload = ChatCompletionPayload {
            model: "gpt-4.1-mini",
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "policy",
                },
                ChatMessage {
                    role: "user",
                    content: "notes",
                },
            ],
            temperature: 0.7,
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["model"], "gpt-4.1-mini");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "notes");
    }

    #[test]
    fn test_first_choice_extracted() {
        let body = r#"{"choices":[{"message":{"content":" A summary. "}},{"message":{"content":"ignored"}}]}"#;
        let parsed: ChatCompletionResponse = serde_json::from_str(body).unwrap();
        let text = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .unwrap();
        assert_eq!(text.trim(), "A summary.");
    }

    #[test]
    fn test_empty_choices_parse() {
        let parsed: ChatCompletionResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(parsed.choices.is_empty());
    }
}
