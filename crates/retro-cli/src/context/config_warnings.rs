use retro_config::RetroConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &RetroConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &RetroConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.gemini.is_configured() && has_single_underscore_key(&env_keys, "RETRO_GEMINI") {
        warnings.push(
            "Gemini config appears default while RETRO_GEMINI_* env vars exist. Use double underscores (example: RETRO_GEMINI__API_KEY)."
                .to_string(),
        );
    }

    if has_single_underscore_key(&env_keys, "RETRO_BACKEND") {
        warnings.push(
            "RETRO_BACKEND_* env vars are ignored. Use double underscores (example: RETRO_BACKEND__BASE_URL)."
                .to_string(),
        );
    }

    warnings
}

fn has_single_underscore_key(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| {
        key.strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('_') && !rest.starts_with("__"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(keys: &[&str]) -> Vec<(String, String)> {
        keys.iter().map(|key| ((*key).to_string(), "x".to_string())).collect()
    }

    #[test]
    fn single_underscore_gemini_key_warns() {
        let warnings =
            collect_unconfigured_warnings(&RetroConfig::default(), env(&["RETRO_GEMINI_API_KEY"]));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("RETRO_GEMINI__API_KEY"));
    }

    #[test]
    fn double_underscore_keys_are_quiet() {
        let warnings = collect_unconfigured_warnings(
            &RetroConfig::default(),
            env(&["RETRO_GEMINI__API_KEY", "RETRO_BACKEND__BASE_URL"]),
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn single_underscore_backend_key_warns() {
        let warnings = collect_unconfigured_warnings(
            &RetroConfig::default(),
            env(&["RETRO_BACKEND_BASE_URL"]),
        );
        assert_eq!(warnings.len(), 1);
    }
}
