//! OpenAI provider implementation

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use super::convert::{from_openai_response, to_openai_request};
use super::types::OpenAIConfig;
use crate::client::ChatClient;
use crate::error::{Error, Result};
use crate::types::{ChatModel, Completion, ReasoningEffort};

/// OpenAI provider
#[derive(Debug)]
pub struct OpenAIProvider {
    config: OpenAIConfig,
    client: Client,
}

impl OpenAIProvider {
    /// Environment variable for API key
    pub const API_KEY_ENV: &'static str = "OPENAI_API_KEY";

    /// Create a new OpenAI provider
    pub fn new(config: OpenAIConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(Error::MissingApiKey("openai".to_string()));
        }

        let client = Client::new();
        Ok(Self { config, client })
    }

    /// Create provider from environment
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(Self::API_KEY_ENV)
            .map_err(|_| Error::MissingApiKey("openai".to_string()))?;

        Self::new(OpenAIConfig::new(api_key))
    }

    /// Create provider with custom base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let api_key = std::env::var(Self::API_KEY_ENV)
            .map_err(|_| Error::MissingApiKey("openai".to_string()))?;

        Self::new(OpenAIConfig::new(api_key).with_base_url(base_url))
    }

    /// Temperature-tuned completion against a sampling model.
    pub async fn complete_standard(
        &self,
        prompt: &str,
        model: impl Into<String>,
        temperature: f32,
    ) -> Result<Completion> {
        self.complete(prompt, &ChatModel::standard(model, temperature))
            .await
    }

    /// Effort-tuned completion against a reasoning model.
    pub async fn complete_reasoning(
        &self,
        prompt: &str,
        model: impl Into<String>,
        effort: ReasoningEffort,
    ) -> Result<Completion> {
        self.complete(prompt, &ChatModel::reasoning(model, effort))
            .await
    }
}

#[async_trait]
impl ChatClient for OpenAIProvider {
    async fn complete(&self, prompt: &str, model: &ChatModel) -> Result<Completion> {
        let url = format!("{}/chat/completions", self.config.base_url);
        let body = to_openai_request(prompt, model)?;

        debug!(model = body.model.as_str(), "sending chat completion request");

        let mut request = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body);
        if let Some(ref org_id) = self.config.organization_id {
            request = request.header("OpenAI-Organization", org_id);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 | 403 => Error::Auth,
                429 => Error::RateLimited,
                _ => Error::provider_error(format!("OpenAI API error {}: {}", status, error_text)),
            });
        }

        let openai_resp: super::types::OpenAIResponse = response
            .json()
            .await
            .map_err(|e| Error::invalid_response(e.to_string()))?;
        let completion = from_openai_response(openai_resp)?;

        // Usage diagnostic for caller-side cost tracking. Token counts
        // only; never the prompt, never the key.
        let usage = completion.usage;
        info!(
            model = model.id(),
            prompt_tokens = usage.prompt_tokens,
            completion_tokens = usage.completion_tokens,
            total_tokens = usage.total_tokens,
            reasoning_tokens = usage.reasoning_tokens.unwrap_or(0),
            "chat completion usage"
        );

        Ok(completion)
    }
}
