use std::env;

/// Sentinel value used when no real API key has been provided.
pub const PLACEHOLDER_API_KEY: &str = "YOUR_API_KEY_HERE";

/// Current-weather endpoint of the upstream provider.
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Process-wide read-only configuration, resolved once at startup and passed
/// explicitly to the provider. Never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    /// Upstream API key, `PLACEHOLDER_API_KEY` when unset.
    pub api_key: String,

    /// Upstream base URL. Overridable so tests can point at a local mock.
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: PLACEHOLDER_API_KEY.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Config {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Resolve configuration from the environment.
    ///
    /// `OPENWEATHER_API_KEY` falls back to the placeholder sentinel,
    /// `OPENWEATHER_BASE_URL` to the provider's current-weather endpoint.
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("OPENWEATHER_API_KEY")
                .unwrap_or_else(|_| PLACEHOLDER_API_KEY.to_string()),
            base_url: env::var("OPENWEATHER_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        }
    }

    /// True iff a real key was configured (anything other than the placeholder).
    pub fn api_key_configured(&self) -> bool {
        self.api_key != PLACEHOLDER_API_KEY
    }
}
