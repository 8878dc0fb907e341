use crate::{errors::GeneratorError, providers::ai::AiProvider};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;

/// The five fixed section kinds that structure every generated case study.
///
/// The variant order here is the canonical reading order of the final
/// document, so `SectionKind::ALL` can be iterated to assemble it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Summary,
    Client,
    Challenges,
    Solution,
    Results,
}

impl SectionKind {
    /// All section kinds in canonical document order.
    pub const ALL: [SectionKind; 5] = [
        SectionKind::Summary,
        SectionKind::Client,
        SectionKind::Challenges,
        SectionKind::Solution,
        SectionKind::Results,
    ];

    /// The heading shown for this section in the published document.
    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::Summary => "Summary",
            SectionKind::Client => "The Client",
            SectionKind::Challenges => "The Challenges",
            SectionKind::Solution => "The Solution",
            SectionKind::Results => "The Results",
        }
    }

    /// A stable tag used in serialized payloads and log messages.
    pub fn tag(&self) -> &'static str {
        match self {
            SectionKind::Summary => "summary",
            SectionKind::Client => "client",
            SectionKind::Challenges => "challenges",
            SectionKind::Solution => "solution",
            SectionKind::Results => "results",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// The structured input describing the case study to generate.
///
/// The four required fields must be non-empty after trimming; the optional
/// fields, when absent, never appear in any constructed prompt.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CaseStudyInput {
    pub client_name: String,
    pub industry: String,
    pub main_challenge: String,
    pub solution_provided: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub project_scale: Option<String>,
    #[serde(default)]
    pub technologies_used: Option<Vec<String>>,
    #[serde(default)]
    pub additional_context: Option<String>,
}

impl CaseStudyInput {
    /// Checks that every required field is non-empty after trimming.
    ///
    /// This runs before any provider call is made, so a validation failure
    /// never has partial side effects.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        let required = [
            ("client_name", &self.client_name),
            ("industry", &self.industry),
            ("main_challenge", &self.main_challenge),
            ("solution_provided", &self.solution_provided),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(GeneratorError::InvalidInput(format!(
                    "required field '{name}' must not be empty"
                )));
            }
        }
        Ok(())
    }
}

/// One generated section, ready for formatting.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GeneratedSection {
    pub title: String,
    pub content: String,
    pub kind: SectionKind,
}

/// The complete generated case study, the terminal artifact of a request.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CaseStudyDocument {
    pub title: String,
    pub sections: Vec<GeneratedSection>,
    pub wordpress_content: String,
}

/// A reusable configuration for a specific AI provider instance.
#[derive(Clone, Debug)]
pub struct ProviderConfig {
    /// The type of provider (e.g., "openai", "gemini").
    pub provider: String,
    /// The API URL. Optional for providers like Gemini where it can be derived.
    pub api_url: Option<String>,
    /// The API key. Absence is reported as a configuration error when the
    /// provider is instantiated, before any request is made.
    pub api_key: Option<String>,
    pub model: Option<String>,
}

impl ProviderConfig {
    /// Loads the provider configuration from environment variables.
    ///
    /// Recognized variables: `AI_PROVIDER`, `AI_API_URL`, `AI_API_KEY` and
    /// `AI_MODEL`. The result is an explicit value passed into constructors,
    /// so nothing reads ambient process state after startup.
    pub fn from_env() -> Self {
        Self {
            provider: env::var("AI_PROVIDER").unwrap_or_else(|_| "openai".to_string()),
            api_url: env::var("AI_API_URL").ok(),
            api_key: env::var("AI_API_KEY").ok().filter(|k| !k.is_empty()),
            model: env::var("AI_MODEL").ok(),
        }
    }
}

/// A client that generates complete case study documents.
#[derive(Clone)]
pub struct CaseStudyGenerator {
    pub(crate) ai_provider: Box<dyn AiProvider>,
}

impl fmt::Debug for CaseStudyGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaseStudyGenerator")
            .field("ai_provider", &self.ai_provider)
            .finish()
    }
}

/// A builder for creating `CaseStudyGenerator` instances.
#[derive(Default)]
pub struct CaseStudyGeneratorBuilder {
    ai_provider: Option<Box<dyn AiProvider>>,
}

impl CaseStudyGeneratorBuilder {
    /// Creates a new `CaseStudyGeneratorBuilder`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the AI provider used for section generation.
    pub fn ai_provider(mut self, provider: Box<dyn AiProvider>) -> Self {
        self.ai_provider = Some(provider);
        self
    }

    /// Builds the `CaseStudyGenerator`.
    ///
    /// Fails with `GeneratorError::MissingAiProvider` if no provider was
    /// configured.
    pub fn build(self) -> Result<CaseStudyGenerator, GeneratorError> {
        let ai_provider = self.ai_provider.ok_or_else(|| {
            GeneratorError::MissingAiProvider(
                "an AI provider must be set before building the generator".to_string(),
            )
        })?;
        Ok(CaseStudyGenerator { ai_provider })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> CaseStudyInput {
        CaseStudyInput {
            client_name: "Acme Co".to_string(),
            industry: "Manufacturing".to_string(),
            main_challenge: "slow onboarding".to_string(),
            solution_provided: "automated workflows".to_string(),
            location: None,
            project_scale: None,
            technologies_used: None,
            additional_context: None,
        }
    }

    #[test]
    fn validate_accepts_complete_input() {
        assert!(valid_input().validate().is_ok());
    }

    #[test]
    fn validate_rejects_blank_required_field() {
        let mut input = valid_input();
        input.industry = "   ".to_string();
        let err = input.validate().unwrap_err();
        assert!(err.to_string().contains("industry"));
    }

    #[test]
    fn section_kinds_are_in_canonical_order() {
        let tags: Vec<&str> = SectionKind::ALL.iter().map(|k| k.tag()).collect();
        assert_eq!(
            tags,
            vec!["summary", "client", "challenges", "solution", "results"]
        );
    }

    #[test]
    fn builder_requires_a_provider() {
        let err = CaseStudyGeneratorBuilder::new().build().unwrap_err();
        assert!(matches!(err, GeneratorError::MissingAiProvider(_)));
    }
}
