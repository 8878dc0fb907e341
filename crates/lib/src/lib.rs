//! # AI Case Study Generator
//!
//! This crate generates marketing case study documents by prompting a
//! configurable AI provider for five fixed sections (summary, client,
//! challenges, solution, results) and rendering the results into WordPress
//! block markup.

pub mod errors;
pub mod prompts;
pub mod providers;
pub mod types;
pub mod wordpress;

pub use errors::GeneratorError;
pub use types::{
    CaseStudyDocument, CaseStudyGenerator, CaseStudyGeneratorBuilder, CaseStudyInput,
    GeneratedSection, ProviderConfig, SectionKind,
};

use tracing::{debug, info};

/// The creativity parameter used for every section generation call.
const SECTION_TEMPERATURE: f32 = 0.7;

impl CaseStudyGenerator {
    /// Generates a complete case study document from the given input.
    ///
    /// The input is validated first; no provider call is made for invalid
    /// input. The five section generation calls are independent, so they run
    /// concurrently and are joined before assembly. The assembled document
    /// always lists the sections in the canonical order regardless of which
    /// call finishes first. The first error from any section aborts the
    /// whole request; no partial document is returned.
    pub async fn generate_document(
        &self,
        input: &CaseStudyInput,
    ) -> Result<CaseStudyDocument, GeneratorError> {
        input.validate()?;
        info!("Generating case study for {}", input.client_name);

        let (summary, client, challenges, solution, results) = tokio::try_join!(
            self.generate_section(SectionKind::Summary, input),
            self.generate_section(SectionKind::Client, input),
            self.generate_section(SectionKind::Challenges, input),
            self.generate_section(SectionKind::Solution, input),
            self.generate_section(SectionKind::Results, input),
        )?;
        let sections = vec![summary, client, challenges, solution, results];

        let formatted: Vec<String> = sections
            .iter()
            .map(|s| wordpress::format_section(&s.title, &s.content))
            .collect();
        let wordpress_content = formatted.join("\n\n");

        let title = format!(
            "Case Study: {} - {}",
            input.client_name, input.main_challenge
        );

        Ok(CaseStudyDocument {
            title,
            sections,
            wordpress_content,
        })
    }

    /// Generates the raw content for a single section.
    pub async fn generate_section(
        &self,
        kind: SectionKind,
        input: &CaseStudyInput,
    ) -> Result<GeneratedSection, GeneratorError> {
        let prompt = prompts::build_prompt(kind, input);
        debug!(section = %kind, "--> Sending prompt to AI provider");

        let raw_response = self
            .ai_provider
            .complete(&prompt, SECTION_TEMPERATURE)
            .await?;
        let content = raw_response.trim().to_string();

        if content.is_empty() {
            return Err(GeneratorError::EmptyCompletion(kind));
        }
        debug!(section = %kind, chars = content.len(), "<-- Received section content");

        Ok(GeneratedSection {
            title: kind.title().to_string(),
            content,
            kind,
        })
    }
}
