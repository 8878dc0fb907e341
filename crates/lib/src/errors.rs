use crate::types::SectionKind;
use thiserror::Error;

/// Custom error types for the case study generator.
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("No AI provider has been configured: {0}")]
    MissingAiProvider(String),
    #[error("API key is missing")]
    MissingApiKey,
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(reqwest::Error),
    #[error("Failed to send request to AI provider: {0}")]
    AiRequest(reqwest::Error),
    #[error("Failed to deserialize AI provider response: {0}")]
    AiDeserialization(reqwest::Error),
    #[error("AI provider returned an error: {0}")]
    AiApi(String),
    #[error("AI provider returned empty content for the {0} section")]
    EmptyCompletion(SectionKind),
}
