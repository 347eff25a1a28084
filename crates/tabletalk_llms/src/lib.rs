//! tabletalk_llms — dual-mode chat completion client.
//!
//! Two model families sit behind one contract: sampling models tuned
//! with a temperature, and reasoning models tuned with an effort level.
//! The descriptor is a sum type, so a request can never carry both
//! options. Every invocation is a single round-trip returning the
//! generated text plus token-usage counters (including the
//! reasoning-token subcount when the model reports one).
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tabletalk_llms::{ChatClient, ChatModel, OpenAIProvider, ReasoningEffort};
//! use tabletalk_llms::providers::openai::OpenAIConfig;
//!
//! # async fn run() -> tabletalk_llms::Result<()> {
//! let provider = OpenAIProvider::new(OpenAIConfig::new("sk-..."))?;
//!
//! let standard = provider
//!     .complete(
//!         "Identify risk management strategies used by agencies. Data: ...",
//!         &ChatModel::standard("gpt-4o", 0.0),
//!     )
//!     .await?;
//! println!("{} ({} tokens)", standard.text, standard.usage.total_tokens);
//!
//! let reasoned = provider
//!     .complete_reasoning("Same question, think harder.", "o3-mini", ReasoningEffort::High)
//!     .await?;
//! println!("reasoning tokens: {:?}", reasoned.usage.reasoning_tokens);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod providers;
pub mod types;

// Re-export core abstractions
pub use client::ChatClient;
pub use error::{Error, Result};

// Re-export provider implementations
pub use providers::OpenAIProvider;

// Re-export commonly used types
pub use types::{ChatModel, Completion, Message, ReasoningEffort, Role, Usage};
