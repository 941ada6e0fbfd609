//! Environment variable precedence tests.
//!
//! Uses figment::Jail so env changes never leak between tests.

use figment::Jail;
use retro_config::{RetroConfig, SourceKind};
use retro_core::enums::DisplayMode;

#[test]
fn prefixed_env_fills_nested_sections() {
    Jail::expect_with(|jail| {
        jail.set_env("RETRO_BACKEND__BASE_URL", "http://retro.internal:8080/api");
        jail.set_env("RETRO_GENERAL__SOURCE", "mock");
        jail.set_env("RETRO_GENERAL__DISPLAY_MODE", "inline");

        let config = RetroConfig::load().expect("config loads");
        assert_eq!(config.backend.base_url, "http://retro.internal:8080/api");
        assert_eq!(config.general.source, SourceKind::Mock);
        assert_eq!(config.general.display_mode, DisplayMode::Inline);
        Ok(())
    });
}

#[test]
fn legacy_api_key_configures_gemini() {
    Jail::expect_with(|jail| {
        jail.set_env("API_KEY", "AIza-legacy");

        let config = RetroConfig::load().expect("config loads");
        assert_eq!(config.gemini.api_key, "AIza-legacy");
        assert!(config.gemini.is_configured());
        Ok(())
    });
}

#[test]
fn prefixed_key_beats_legacy_key() {
    Jail::expect_with(|jail| {
        jail.set_env("API_KEY", "AIza-legacy");
        jail.set_env("GEMINI_API_KEY", "AIza-backend");
        jail.set_env("RETRO_GEMINI__API_KEY", "AIza-prefixed");

        let config = RetroConfig::load().expect("config loads");
        assert_eq!(config.gemini.api_key, "AIza-prefixed");
        Ok(())
    });
}

#[test]
fn placeholder_key_is_loaded_but_not_configured() {
    Jail::expect_with(|jail| {
        jail.set_env("API_KEY", retro_config::PLACEHOLDER_API_KEY);

        let config = RetroConfig::load().expect("config loads");
        assert!(!config.gemini.is_configured());
        Ok(())
    });
}

#[test]
fn invalid_source_fails_extraction() {
    Jail::expect_with(|jail| {
        jail.set_env("RETRO_GENERAL__SOURCE", "carrier-pigeon");
        assert!(RetroConfig::load().is_err());
        Ok(())
    });
}
