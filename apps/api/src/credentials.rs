//! Credential resolution for the Gemini API key.
//!
//! Lookup order: `GEMINI_API_KEY` in the process environment (populated from
//! `.env` by `Config::from_env`), then the same key in a TOML secrets file.
//! A double miss is fatal: the service refuses to start.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

pub const SETUP_INSTRUCTIONS: &str = "\
Setup instructions:
  For local development: add `GEMINI_API_KEY=your_api_key_here` to your `.env` file.
  For deployment: add `GEMINI_API_KEY = \"your_api_key_here\"` to the secrets file \
(SECRETS_PATH, default `secrets.toml`).";

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("GEMINI_API_KEY not found in environment variables or secrets file\n{}", SETUP_INSTRUCTIONS)]
    Missing,

    #[error("Failed to read secrets file {}: {reason}", .path.display())]
    SecretsFile { path: PathBuf, reason: String },
}

/// The Gemini API key. `Debug` never prints the secret.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Resolves the API key: `env_value` (the caller's read of `GEMINI_API_KEY`)
/// first, then the secrets file at `secrets_path`.
pub fn resolve_from(
    env_value: Option<String>,
    secrets_path: &Path,
) -> Result<ApiKey, CredentialError> {
    if let Some(key) = env_value.as_deref().map(str::trim).filter(|k| !k.is_empty()) {
        info!("Using {API_KEY_VAR} from environment");
        return Ok(ApiKey::new(key));
    }

    if let Some(key) = read_secrets_file(secrets_path)? {
        info!("Using {API_KEY_VAR} from {}", secrets_path.display());
        return Ok(ApiKey::new(key));
    }

    Err(CredentialError::Missing)
}

/// `Ok(None)` when the file or the key is absent.
fn read_secrets_file(path: &Path) -> Result<Option<String>, CredentialError> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(CredentialError::SecretsFile {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
        }
    };

    let table: toml::Table = raw.parse().map_err(|e: toml::de::Error| CredentialError::SecretsFile {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    Ok(table
        .get(API_KEY_VAR)
        .and_then(toml::Value::as_str)
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(String::from))
}
