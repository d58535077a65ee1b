use super::{must_var, var_or};
use crate::error::AppError;

pub const DEFAULT_AI_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_AI_MODEL: &str = "meta-llama/llama-3.2-3b-instruct:free";

/// Settings for the OpenAI-compatible chat completion endpoint.
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl CompletionConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            api_key: must_var("OPENAI_API_KEY")?,
            base_url: var_or("AI_BASE_URL", DEFAULT_AI_BASE_URL),
            model: var_or("AI_MODEL", DEFAULT_AI_MODEL),
            temperature: 0.7,
            max_tokens: 1500,
        })
    }
}
