//! # Application State
//!
//! Defines the shared application state (`AppState`) and the logic for
//! building it at startup. The AI provider is instantiated here, once, so a
//! missing credential fails the server at boot rather than on the first
//! request.

use crate::{config::AppConfig, preview::PreviewStore};
use casegen::{providers::factory::create_provider, CaseStudyGenerator, CaseStudyGeneratorBuilder};
use std::sync::Arc;

/// The shared application state, accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub generator: Arc<CaseStudyGenerator>,
    pub preview_store: Arc<PreviewStore>,
}

/// Builds the shared application state from the configuration.
pub async fn build_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let provider = create_provider(&config.provider)?;
    let generator = CaseStudyGeneratorBuilder::new()
        .ai_provider(provider)
        .build()?;

    let preview_store = PreviewStore::new(config.preview_dir.clone())?;
    tracing::info!(preview_dir = %config.preview_dir.display(), "Initialized preview store");

    Ok(AppState {
        config: Arc::new(config),
        generator: Arc::new(generator),
        preview_store: Arc::new(preview_store),
    })
}
