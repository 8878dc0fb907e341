//! # AI Provider Factory
//!
//! This module centralizes the logic for creating AI provider instances from
//! a `ProviderConfig`. By placing it in the library, both the CLI and the
//! server build their providers the same way, and the credential check
//! happens exactly once, at construction time.

use crate::{
    errors::GeneratorError,
    providers::ai::{gemini::GeminiProvider, openai::OpenAiProvider, AiProvider},
    types::ProviderConfig,
};
use tracing::info;

/// The default endpoint for the "openai" provider when no URL is configured.
pub const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// The default model for the "openai" provider when none is configured.
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";

/// Creates an AI provider instance from the given configuration.
///
/// The API key is checked here, eagerly: a missing credential fails with
/// `GeneratorError::MissingApiKey` before any network interaction happens.
pub fn create_provider(config: &ProviderConfig) -> Result<Box<dyn AiProvider>, GeneratorError> {
    let api_key = config
        .api_key
        .clone()
        .ok_or(GeneratorError::MissingApiKey)?;

    let provider: Box<dyn AiProvider> = match config.provider.as_str() {
        "openai" => {
            let api_url = config
                .api_url
                .clone()
                .unwrap_or_else(|| DEFAULT_OPENAI_API_URL.to_string());
            let model = config
                .model
                .clone()
                .or_else(|| Some(DEFAULT_OPENAI_MODEL.to_string()));
            info!("Configuring OpenAI provider with URL: {api_url}");
            Box::new(OpenAiProvider::new(api_url, api_key, model)?)
        }
        "gemini" => {
            // If no URL is configured, derive it from the model name.
            let api_url = config.api_url.clone().unwrap_or_else(|| {
                let model = config.model.as_deref().unwrap_or("gemini-2.0-flash");
                format!(
                    "https://generativelanguage.googleapis.com/v1beta/models/{model}:generateContent"
                )
            });
            info!("Configuring Gemini provider with URL: {api_url}");
            Box::new(GeminiProvider::new(api_url, api_key)?)
        }
        other => {
            return Err(GeneratorError::MissingAiProvider(format!(
                "unsupported AI provider type '{other}'"
            )))
        }
    };

    Ok(provider)
}
