//! # casegen-cli
//!
//! Command-line front-end for the case study generator. Builds a
//! `CaseStudyInput` from flags, runs the generation pipeline, and prints or
//! writes the resulting WordPress content.

use anyhow::{Context, Result};
use casegen::providers::factory::create_provider;
use casegen::{CaseStudyGeneratorBuilder, CaseStudyInput, ProviderConfig};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Generate AI-powered case study content in WordPress format.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Client/company name
    #[arg(short, long)]
    client: String,
    /// Industry or sector
    #[arg(short, long)]
    industry: String,
    /// Main challenge faced
    #[arg(long)]
    challenge: String,
    /// Solution provided
    #[arg(short, long)]
    solution: String,
    /// Project location
    #[arg(short, long)]
    location: Option<String>,
    /// Project scale or size
    #[arg(long)]
    scale: Option<String>,
    /// Technologies used (comma-separated)
    #[arg(short, long)]
    technologies: Option<String>,
    /// Additional context or details
    #[arg(long)]
    context: Option<String>,
    /// Output file path (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Cli {
    fn into_input(self) -> (CaseStudyInput, Option<PathBuf>) {
        let technologies_used = self.technologies.map(|list| {
            list.split(',')
                .map(|tech| tech.trim().to_string())
                .filter(|tech| !tech.is_empty())
                .collect()
        });
        let input = CaseStudyInput {
            client_name: self.client,
            industry: self.industry,
            main_challenge: self.challenge,
            solution_provided: self.solution,
            location: self.location,
            project_scale: self.scale,
            technologies_used,
            additional_context: self.context,
        };
        (input, self.output)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .compact()
        .init();

    let cli = Cli::parse();
    let (input, output) = cli.into_input();

    let provider = create_provider(&ProviderConfig::from_env())
        .context("Failed to configure the AI provider. Is AI_API_KEY set?")?;
    let generator = CaseStudyGeneratorBuilder::new()
        .ai_provider(provider)
        .build()?;

    info!("Generating case study for {}", input.client_name);
    let case_study = generator.generate_document(&input).await?;

    match output {
        Some(path) => {
            fs::write(&path, &case_study.wordpress_content)
                .with_context(|| format!("Failed to write output to {}", path.display()))?;
            println!("Case study generated and saved to {}", path.display());
        }
        None => {
            println!("{}", "=".repeat(60));
            println!("CASE STUDY: {}", case_study.title);
            println!("{}", "=".repeat(60));
            println!("{}", case_study.wordpress_content);
        }
    }

    Ok(())
}
