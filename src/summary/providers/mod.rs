use async_trait::async_trait;

use super::{ServiceError, SummaryRequest};

pub mod openai_api;

pub use openai_api::OpenAiChatProvider;

/// A narrative-generation backend. One call per request, no streaming.
#[async_trait]
pub trait SummaryProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn generate(&self, request: &SummaryRequest) -> Result<String, ServiceError>;
}
