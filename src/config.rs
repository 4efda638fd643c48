//! Runtime configuration.
//!
//! The only required configuration is the service credential; everything
//! else has working defaults. Values come from the environment:
//!
//! - `GEMINI_API_KEY` - service credential (required for generate/battle)
//! - `CARDFORGE_ENDPOINT` - override the service base URL
//! - `CARDFORGE_MODEL` - override the model name
//! - `CARDFORGE_TIMEOUT_SECS` - override the request timeout

use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Generative service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    pub endpoint: String,
    pub model: String,
    /// Service credential. `None` makes generation and battle hard-fail.
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl LlmConfig {
    /// Build a config from the process environment.
    ///
    /// Empty strings count as unset. A bad timeout value falls back to the
    /// default rather than failing startup.
    #[must_use]
    pub fn from_env() -> Self {
        let get = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());

        let timeout_secs = get("CARDFORGE_TIMEOUT_SECS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            endpoint: get("CARDFORGE_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            model: get("CARDFORGE_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_key: get("GEMINI_API_KEY"),
            timeout_secs,
        }
    }

    /// Whether a usable credential is present.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }
}
