/// Shared application state
///
/// Owned by the router via `Arc`; built once at startup. Holds the runtime
/// configuration and the quote service with its caches. No globals: tests
/// construct their own state around a scripted quote source.
use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::apis::google_finance::{GoogleFinanceAdapter, SerpApiSource};
use crate::config::AppConfig;
use crate::quotes::QuoteService;

pub struct AppState {
    pub config: AppConfig,
    pub quotes: QuoteService,
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    /// Build production state: SerpAPI source behind the cached adapter
    pub fn new(config: AppConfig) -> Result<Self, String> {
        let source = SerpApiSource::new(&config.serpapi_key)?;
        let adapter = GoogleFinanceAdapter::new(Arc::new(source));

        Ok(Self {
            config,
            quotes: QuoteService::new(adapter),
            startup_time: Utc::now(),
        })
    }

    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.startup_time).num_seconds()
    }

    #[cfg(test)]
    pub fn with_quotes(quotes: QuoteService) -> Self {
        Self {
            config: AppConfig::default(),
            quotes,
            startup_time: Utc::now(),
        }
    }
}
