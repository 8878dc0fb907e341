pub mod gemini;
pub mod openai;

use crate::errors::GeneratorError;
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

/// A trait for interacting with a text-completion provider.
///
/// This defines a common interface for generating section content from a
/// prompt using different Large Language Models (e.g., OpenAI, Gemini).
#[async_trait]
pub trait AiProvider: Send + Sync + Debug + DynClone {
    /// Sends a single-turn prompt to the provider and returns the raw
    /// completion text.
    async fn complete(&self, prompt: &str, temperature: f32) -> Result<String, GeneratorError>;
}

dyn_clone::clone_trait_object!(AiProvider);
