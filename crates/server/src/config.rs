//! # Application Configuration
//!
//! Loads the server configuration from environment variables into an
//! explicit `AppConfig` value at startup. Nothing reads ambient process
//! state after this point.

use casegen::ProviderConfig;
use std::env;
use std::path::PathBuf;

/// The server configuration.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// The port for the server to listen on. Loaded from `PORT`.
    pub port: u16,
    /// The AI provider configuration, loaded from `AI_PROVIDER`,
    /// `AI_API_URL`, `AI_API_KEY` and `AI_MODEL`.
    pub provider: ProviderConfig,
    /// Where generated previews are stored. Loaded from
    /// `CASEGEN_PREVIEW_DIR`, defaulting to a directory under the system
    /// temp dir. Previews are ephemeral; the store offers no durability.
    pub preview_dir: PathBuf,
}

/// Loads the application configuration from the environment.
pub fn get_config() -> anyhow::Result<AppConfig> {
    let port = match env::var("PORT") {
        Ok(value) => value
            .parse::<u16>()
            .map_err(|e| anyhow::anyhow!("PORT must be a valid port number: {e}"))?,
        Err(_) => 9090,
    };

    let preview_dir = env::var("CASEGEN_PREVIEW_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| env::temp_dir().join("casegen-previews"));

    Ok(AppConfig {
        port,
        provider: ProviderConfig::from_env(),
        preview_dir,
    })
}
