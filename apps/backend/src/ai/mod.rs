//! Language model access for meal plan generation.
//!
//! - `CompletionModel`: the seam handlers depend on
//! - `OpenRouterModel`: OpenAI-compatible chat completions over reqwest

mod openrouter;
mod trait_def;

pub use openrouter::OpenRouterModel;
pub use trait_def::{AiError, CompletionModel, CompletionParams};
