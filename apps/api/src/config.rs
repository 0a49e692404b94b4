use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::llm_client::{DEFAULT_API_BASE, DEFAULT_MODEL};

/// Application configuration loaded from environment variables.
/// The API key is not part of it; see `credentials`.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_model: String,
    pub gemini_api_base: String,
    pub secrets_path: PathBuf,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let or_default =
            |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Config {
            gemini_model: or_default("GEMINI_MODEL", DEFAULT_MODEL),
            gemini_api_base: or_default("GEMINI_API_BASE", DEFAULT_API_BASE),
            secrets_path: PathBuf::from(or_default("SECRETS_PATH", "secrets.toml")),
            port: or_default("PORT", "8501")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: or_default("RUST_LOG", "info"),
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
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.gemini_model, "gemini-1.5-flash");
        assert_eq!(config.gemini_api_base, DEFAULT_API_BASE);
        assert_eq!(config.secrets_path, PathBuf::from("secrets.toml"));
        assert_eq!(config.port, 8501);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("GEMINI_MODEL", "gemini-2.0-flash"),
            ("PORT", "9000"),
            ("SECRETS_PATH", "/run/secrets/app.toml"),
        ]))
        .unwrap();
        assert_eq!(config.gemini_model, "gemini-2.0-flash");
        assert_eq!(config.port, 9000);
        assert_eq!(config.secrets_path, PathBuf::from("/run/secrets/app.toml"));
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "not-a-port")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
