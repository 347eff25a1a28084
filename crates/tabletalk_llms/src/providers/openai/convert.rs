//! Conversion between unified types and OpenAI wire types.

use super::types::{OpenAIMessage, OpenAIRequest, OpenAIResponse};
use crate::error::{Error, Result};
use crate::types::{ChatModel, Completion, Message, Role, Usage};

/// Build the wire request for a prompt and model descriptor.
///
/// The prompt travels as a single user message. Which tuning option is
/// attached follows from the descriptor variant alone: `Standard` sets
/// `temperature`, `Reasoning` sets `reasoning_effort`, and the other
/// field stays unserialized.
pub fn to_openai_request(prompt: &str, model: &ChatModel) -> Result<OpenAIRequest> {
    if prompt.trim().is_empty() {
        return Err(Error::EmptyPrompt);
    }

    let messages = vec![to_openai_message(&Message::user(prompt))];

    let request = match model {
        ChatModel::Standard { model, temperature } => OpenAIRequest {
            model: model.clone(),
            messages,
            temperature: Some(*temperature),
            reasoning_effort: None,
        },
        ChatModel::Reasoning { model, effort } => OpenAIRequest {
            model: model.clone(),
            messages,
            temperature: None,
            reasoning_effort: Some(effort.as_str().to_string()),
        },
    };

    Ok(request)
}

fn to_openai_message(msg: &Message) -> OpenAIMessage {
    let role = match msg.role {
        Role::System => "system",
        Role::User => "user",
        Role::Assistant => "assistant",
    };

    OpenAIMessage {
        role: role.to_string(),
        content: msg.content.clone(),
    }
}

/// Extract text and usage from the wire response.
pub fn from_openai_response(resp: OpenAIResponse) -> Result<Completion> {
    let choice = resp
        .choices
        .first()
        .ok_or_else(|| Error::invalid_response("no choices in response"))?;

    let text = choice.message.content.clone().unwrap_or_default();
    if text.is_empty() {
        return Err(Error::invalid_response("empty completion content"));
    }

    // A success always carries internally consistent counters: the total
    // is the sum of the two parts, and the reasoning subcount is a
    // component of completion_tokens, never larger than it.
    if resp.usage.total_tokens != resp.usage.prompt_tokens + resp.usage.completion_tokens {
        return Err(Error::invalid_response(format!(
            "inconsistent usage: total_tokens {} != prompt_tokens {} + completion_tokens {}",
            resp.usage.total_tokens, resp.usage.prompt_tokens, resp.usage.completion_tokens
        )));
    }

    let reasoning_tokens = resp
        .usage
        .completion_tokens_details
        .as_ref()
        .map(|d| d.reasoning_tokens);

    if let Some(reasoning) = reasoning_tokens {
        if reasoning > resp.usage.completion_tokens {
            return Err(Error::invalid_response(format!(
                "inconsistent usage: reasoning_tokens {} > completion_tokens {}",
                reasoning, resp.usage.completion_tokens
            )));
        }
    }

    let usage = Usage {
        prompt_tokens: resp.usage.prompt_tokens,
        completion_tokens: resp.usage.completion_tokens,
        total_tokens: resp.usage.total_tokens,
        reasoning_tokens,
    };

    Ok(Completion { text, usage })
}
