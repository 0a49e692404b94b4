use std::sync::Arc;

use crate::config::Config;
use crate::credentials::{resolve_from, CredentialError};
use crate::llm_client::{CompletionService, GeminiClient, LlmError};

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup; every request carries its own inputs.
#[derive(Clone)]
pub struct AppState {
    /// Completion backend. Gemini in production, scripted in tests.
    pub llm: Arc<dyn CompletionService>,
}

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Credential(#[from] CredentialError),

    #[error("Failed to initialize Gemini client: {0}")]
    Client(#[from] LlmError),
}

impl AppState {
    /// Resolves the API key and builds the Gemini-backed state.
    /// Fails before any client exists when no key can be found.
    pub fn connect(config: &Config, env_key: Option<String>) -> Result<Self, StartupError> {
        let api_key = resolve_from(env_key, &config.secrets_path)?;
        let client = GeminiClient::new(api_key, &config.gemini_api_base, &config.gemini_model)?;
        tracing::info!("LLM client initialized (model: {})", client.model());
        Ok(Self {
            llm: Arc::new(client),
        })
    }
}
