//! Client trait implemented by model providers.

use crate::error::Result;
use crate::types::{ChatModel, Completion};

/// A chat-completion client: one prompt in, one completion out.
///
/// Implementations hold their credential and HTTP client; both are
/// read-only after construction, so a single instance can serve
/// sequential calls. Callers needing concurrent use bring their own
/// synchronization or independent instances.
#[async_trait::async_trait]
pub trait ChatClient: Send + Sync {
    /// Single-shot completion: wraps the prompt as one user message,
    /// issues the request, and returns the generated text with usage
    /// counters. No streaming, no multi-turn state, no retry.
    async fn complete(&self, prompt: &str, model: &ChatModel) -> Result<Completion>;
}
