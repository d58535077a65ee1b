//! Completion model trait definition.

use async_trait::async_trait;
use thiserror::Error;

/// Errors from a completion call. None of these are retried.
#[derive(Debug, Error)]
pub enum AiError {
    #[error("completion API unreachable: {0}")]
    Transport(String),
    #[error("completion API returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("completion response had no message content")]
    EmptyResponse,
    #[error("unexpected completion response: {0}")]
    Decode(String),
}

/// Sampling knobs for one completion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionParams {
    pub temperature: f32,
    pub max_tokens: u32,
}

/// A language model that turns a single user prompt into text.
///
/// Implementations return the raw text of the first choice; callers own
/// any parsing of that text.
#[async_trait]
pub trait CompletionModel: Send + Sync {
    async fn complete(&self, prompt: &str, params: CompletionParams) -> Result<String, AiError>;
}
