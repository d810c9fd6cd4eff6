use anyhow::{Context, Result};

use crate::screening::prompts::JOB_DESCRIPTION;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Built once in `main` and shared read-only through `AppState`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Not validated at startup: a missing key only fails when the model is invoked.
    pub google_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_api_base: String,
    pub job_description: String,
    pub port: u16,
    pub max_upload_bytes: usize,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            google_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_api_base: DEFAULT_GEMINI_API_BASE.to_string(),
            job_description: JOB_DESCRIPTION.to_string(),
            port: DEFAULT_PORT,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Empty values count as unset.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Config::default();

        Ok(Config {
            google_api_key: get("GOOGLE_API_KEY"),
            gemini_model: get("GEMINI_MODEL").unwrap_or(defaults.gemini_model),
            gemini_api_base: get("GEMINI_API_BASE")
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or(defaults.gemini_api_base),
            job_description: get("JOB_DESCRIPTION").unwrap_or(defaults.job_description),
            port: get("PORT")
                .map(|p| p.parse::<u16>())
                .transpose()
                .context("PORT must be a valid port number")?
                .unwrap_or(defaults.port),
            max_upload_bytes: get("MAX_UPLOAD_BYTES")
                .map(|n| n.parse::<usize>())
                .transpose()
                .context("MAX_UPLOAD_BYTES must be a byte count")?
                .unwrap_or(defaults.max_upload_bytes),
            rust_log: get("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_env_is_empty() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert!(config.google_api_key.is_none());
        assert_eq!(config.gemini_model, DEFAULT_GEMINI_MODEL);
        assert_eq!(config.gemini_api_base, DEFAULT_GEMINI_API_BASE);
        assert_eq!(config.job_description, JOB_DESCRIPTION);
        assert_eq!(config.port, 5000);
        assert_eq!(config.max_upload_bytes, 16 * 1024 * 1024);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = Config::from_lookup(lookup_from(&[
            ("GOOGLE_API_KEY", "secret"),
            ("GEMINI_MODEL", "gemini-1.5-pro"),
            ("GEMINI_API_BASE", "http://localhost:9999/v1beta/"),
            ("JOB_DESCRIPTION", "Rust engineer"),
            ("PORT", "8081"),
            ("MAX_UPLOAD_BYTES", "1024"),
        ]))
        .unwrap();
        assert_eq!(config.google_api_key.as_deref(), Some("secret"));
        assert_eq!(config.gemini_model, "gemini-1.5-pro");
        assert_eq!(config.gemini_api_base, "http://localhost:9999/v1beta");
        assert_eq!(config.job_description, "Rust engineer");
        assert_eq!(config.port, 8081);
        assert_eq!(config.max_upload_bytes, 1024);
    }

    #[test]
    fn test_blank_api_key_counts_as_missing() {
        let config = Config::from_lookup(lookup_from(&[("GOOGLE_API_KEY", "  ")])).unwrap();
        assert!(config.google_api_key.is_none());
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "not-a-port")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
