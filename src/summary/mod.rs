//! Narrative summary generation for completed review sessions.
//!
//! Mirrors the shape of a provider-backed service: a pure request
//! builder, a `SummaryProvider` trait, and a `Summarizer` facade that
//! resolves the configured provider by name.

use anyhow::{bail, Context, Result};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

use crate::config::SummaryConfig;

mod request;

pub mod providers;

pub use providers::{OpenAiChatProvider, SummaryProvider};
pub use request::{build_summary_request, ResponseMismatch, SummaryRequest};

/// Returned instead of an error when the service responds successfully
/// but without usable text.
pub const SUMMARY_FALLBACK: &str = "AI could not generate a summary.";

/// Failure of the external summary call. Never retried automatically;
/// the session keeps its responses so the user can retry.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("summary request failed: {0}")]
    Transport(String),
    #[error("summary request timed out")]
    Timeout,
    #[error("summary service returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("could not parse summary service response: {0}")]
    MalformedResponse(String),
    #[error("no API key configured for the summary provider")]
    MissingCredential,
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ServiceError::Timeout
        } else {
            ServiceError::Transport(err.to_string())
        }
    }
}

pub struct Summarizer {
    provider: Box<dyn SummaryProvider>,
}

impl std::fmt::Debug for Summarizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Summarizer")
            .field("provider", &self.provider.name())
            .finish()
    }
}

impl Summarizer {
    /// Build a summarizer for the named provider.
    pub fn with_provider(provider_name: &str, config: &SummaryConfig) -> Result<Self> {
        let provider: Box<dyn SummaryProvider> = match provider_name {
            "openai-api" => {
                let api_key = config
                    .resolved_api_key()
                    .context("api_key is required for the OpenAI API provider (set RECAP_API_KEY)")?;

                let model = config
                    .model
                    .clone()
                    .unwrap_or_else(|| "gpt-4.1-mini".to_string());

                Box::new(OpenAiChatProvider::new(
                    api_key,
                    config.api_endpoint.clone(),
                    model,
                    config.temperature,
                    Duration::from_secs(config.timeout_seconds),
                )?)
            }
            _ => bail!(
                "Unknown summary provider '{}'. Supported providers: openai-api",
                provider_name
            ),
        };

        info!("Using {} for summary generation", provider.name());

        Ok(Self { provider })
    }

    /// Wrap an already-constructed provider. Used by tests to inject mocks.
    pub fn from_provider(provider: Box<dyn SummaryProvider>) -> Self {
        Self { provider }
    }

    pub fn name(&self) -> &'static str {
        self.provider.name()
    }

    pub async fn generate(&self, request: &SummaryRequest) -> Result<String, ServiceError> {
        self.provider.generate(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_provider_rejected() {
        let config = SummaryConfig::default();
        let result = Summarizer::with_provider("carrier-pigeon", &config);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Unknown summary provider"));
    }

    #[test]
    fn test_service_error_display() {
        let err = ServiceError::Api {
            status: 401,
            message: "invalid key".to_string(),
        };
        assert_eq!(err.to_string(), "summary service returned 401: invalid key");
        assert_eq!(ServiceError::Timeout.to_string(), "summary request timed out");
    }
}
