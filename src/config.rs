/// Runtime configuration
///
/// A single API key read from the environment plus webserver bind settings.
/// Without a real key the upstream provider rejects every query and the
/// service degrades to cached/synthesized quotes.
use std::env;

use crate::arguments;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

/// Placeholder used when SERPAPI_KEY is absent; forces the fallback path
pub const PLACEHOLDER_API_KEY: &str = "demo_key";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// SerpAPI key for the Google Finance query engine
    pub serpapi_key: String,
    /// Host/IP to bind the webserver
    pub host: String,
    /// Port to bind the webserver
    pub port: u16,
}

impl AppConfig {
    /// Build configuration from the environment and command-line overrides
    pub fn from_env() -> Self {
        Self {
            serpapi_key: env::var("SERPAPI_KEY")
                .unwrap_or_else(|_| PLACEHOLDER_API_KEY.to_string()),
            host: DEFAULT_HOST.to_string(),
            port: arguments::get_port_override().unwrap_or(DEFAULT_PORT),
        }
    }

    pub fn has_real_api_key(&self) -> bool {
        self.serpapi_key != PLACEHOLDER_API_KEY && !self.serpapi_key.is_empty()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            serpapi_key: PLACEHOLDER_API_KEY.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}
