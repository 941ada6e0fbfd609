use anyhow::Context;
use retro_config::RetroConfig;

use crate::cli::GlobalFlags;

/// Load `.env` and the layered configuration.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<RetroConfig> {
    let config = RetroConfig::load_with_dotenv().context("failed to load retro configuration")?;
    if flags.verbose {
        tracing::debug!(
            source = %config.general.source,
            backend = %config.backend.base_url,
            gemini_configured = config.gemini.is_configured(),
            "configuration loaded"
        );
    }
    Ok(config)
}
