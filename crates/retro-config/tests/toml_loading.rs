//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed file and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use retro_config::{RetroConfig, SourceKind};

#[test]
fn loads_all_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[backend]
base_url = "https://retro.example.com/api"
timeout_secs = 5

[gemini]
api_key = "AIza-from-toml"
model = "gemini-2.0-flash"
summary_temperature = 0.2

[general]
source = "gemini"
display_mode = "inline"
mock_count = 12
"#,
        )?;

        let config: RetroConfig = Figment::from(Serialized::defaults(RetroConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.backend.base_url, "https://retro.example.com/api");
        assert_eq!(config.backend.timeout_secs, 5);
        assert_eq!(config.gemini.model, "gemini-2.0-flash");
        assert!(config.gemini.is_configured());
        assert!((config.gemini.custom_temperature - 0.5).abs() < f32::EPSILON);
        assert_eq!(config.general.source, SourceKind::Gemini);
        assert_eq!(config.general.mock_count, 12);
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".retro")?;
        jail.create_file(
            ".retro/config.toml",
            r#"
[general]
source = "mock"
"#,
        )?;

        let config = RetroConfig::load().expect("config loads");
        assert_eq!(config.general.source, SourceKind::Mock);
        Ok(())
    });
}

#[test]
fn env_beats_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[backend]
base_url = "https://from-toml.example.com/api"
"#,
        )?;
        jail.set_env("RETRO_BACKEND__BASE_URL", "https://from-env.example.com/api");

        let config: RetroConfig = Figment::from(Serialized::defaults(RetroConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("RETRO_").split("__"))
            .extract()?;

        assert_eq!(config.backend.base_url, "https://from-env.example.com/api");
        Ok(())
    });
}
