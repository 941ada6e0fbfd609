use retro_client::{BackendClient, ConfiguredSource};
use retro_config::{RetroConfig, SourceKind};
use retro_core::enums::DisplayMode;
use retro_dashboard::Dashboard;

/// Everything a command needs: configuration and the selected source.
pub struct AppContext {
    pub config: RetroConfig,
    pub source: ConfiguredSource,
}

impl AppContext {
    /// Build the context. `source_override` wins over `general.source`.
    pub fn init(mut config: RetroConfig, source_override: Option<SourceKind>) -> Self {
        if let Some(source) = source_override {
            config.general.source = source;
        }
        let source = ConfiguredSource::from_config(&config);
        tracing::debug!(
            requested = %config.general.source,
            using = %source.kind(),
            "source selected"
        );
        Self { config, source }
    }

    /// A REST client regardless of the selected source.
    pub fn backend(&self) -> BackendClient {
        match &self.source {
            ConfiguredSource::Backend(client) => client.clone(),
            _ => BackendClient::new(&self.config.backend),
        }
    }

    /// Start a dashboard session over the selected source.
    pub fn into_dashboard(self, display_mode: Option<DisplayMode>) -> Dashboard<ConfiguredSource> {
        let mode = display_mode.unwrap_or(self.config.general.display_mode);
        Dashboard::new(self.source, mode)
    }
}
