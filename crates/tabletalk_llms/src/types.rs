//! Unified request/response types shared across providers.

use serde::{Deserialize, Serialize};

/// Message role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }
}

/// How much internal deliberation a reasoning model performs before
/// emitting output. Higher effort costs more latency and more
/// reasoning tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReasoningEffort {
    Low,
    Medium,
    High,
}

impl ReasoningEffort {
    pub fn as_str(self) -> &'static str {
        match self {
            ReasoningEffort::Low => "low",
            ReasoningEffort::Medium => "medium",
            ReasoningEffort::High => "high",
        }
    }
}

/// Model descriptor.
///
/// Each variant carries only the tuning knob its model family accepts,
/// so a request can never mix a temperature with a reasoning-effort
/// level. The exclusivity holds at construction time; there is no
/// runtime validation to forget.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatModel {
    /// Sampling model tuned with a temperature.
    Standard { model: String, temperature: f32 },
    /// Reasoning model tuned with an effort level; accepts no temperature.
    Reasoning {
        model: String,
        effort: ReasoningEffort,
    },
}

impl ChatModel {
    pub fn standard(model: impl Into<String>, temperature: f32) -> Self {
        ChatModel::Standard {
            model: model.into(),
            temperature,
        }
    }

    pub fn reasoning(model: impl Into<String>, effort: ReasoningEffort) -> Self {
        ChatModel::Reasoning {
            model: model.into(),
            effort,
        }
    }

    /// Model identifier sent upstream.
    pub fn id(&self) -> &str {
        match self {
            ChatModel::Standard { model, .. } => model,
            ChatModel::Reasoning { model, .. } => model,
        }
    }
}

/// Token usage reported by the provider for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    /// Always `prompt_tokens + completion_tokens`.
    pub total_tokens: u32,
    /// Tokens spent on internal deliberation, billed as part of
    /// `completion_tokens` but absent from the visible text. `None` for
    /// sampling models.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning_tokens: Option<u32>,
}

/// Result of a single completion call. Immutable; owned by the caller.
#[derive(Debug, Clone)]
pub struct Completion {
    pub text: String,
    pub usage: Usage,
}
