/// Google Finance quote provider (via SerpAPI)
///
/// One symbol in, one normalized `Quote` out. The adapter keeps a per-symbol
/// cache so sequential callers issue at most one upstream query per symbol per
/// TTL window, and exposes a looser stale read (2x TTL) that the endpoint
/// layer uses as a fallback tier only.
pub mod types;

pub use self::types::{FinancialsBlock, GoogleFinanceResponse, QuoteBlock};

use async_trait::async_trait;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::apis::client::HttpClient;
use crate::errors::UpstreamError;
use crate::logger::{self, LogTag};
use crate::quotes::cache::CacheEntry;
use crate::quotes::types::Quote;

const SERPAPI_BASE_URL: &str = "https://serpapi.com/search.json";
const QUERY_ENGINE: &str = "google_finance";

/// Request timeout in seconds; expiry is treated as any other upstream failure
pub const TIMEOUT_SECS: u64 = 10;

/// Per-symbol cache freshness window
pub const CACHE_TTL: Duration = Duration::from_secs(15);

/// Stale reads via `get_cached` accept entries up to this multiple of the TTL
const STALE_READ_MULTIPLIER: u32 = 2;

/// NSE ".NS" symbols mapped to the provider's "SYMBOL:NSE" query syntax.
/// Unmapped symbols pass through unchanged.
static SYMBOL_MAP: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // Financial sector
        ("HDFCBANK.NS", "HDFCBANK:NSE"),
        ("BAJFINANCE.NS", "BAJFINANCE:NSE"),
        ("ICICIBANK.NS", "ICICIBANK:NSE"),
        ("BAJAJ-AUTO.NS", "BAJAJ-AUTO:NSE"),
        ("SAVANIFIN.NS", "SAVANIFIN:NSE"),
        // Tech
        ("AFFLE.NS", "AFFLE:NSE"),
        ("LTIM.NS", "LTIM:NSE"),
        ("KPITTECH.NS", "KPITTECH:NSE"),
        ("TATATECH.NS", "TATATECH:NSE"),
        ("BLSE.NS", "BLSE:NSE"),
        ("TANLA.NS", "TANLA:NSE"),
        // Consumer
        ("DMART.NS", "DMART:NSE"),
        ("TATACONSUM.NS", "TATACONSUM:NSE"),
        ("PIDILITE.NS", "PIDILITE:NSE"),
        // Power
        ("TATAPOWER.NS", "TATAPOWER:NSE"),
        ("KPIGREEN.NS", "KPIGREEN:NSE"),
        ("SUZLON.NS", "SUZLON:NSE"),
        ("GENSOL.NS", "GENSOL:NSE"),
        // Pipes
        ("HARIOMPIPE.NS", "HARIOMPIPE:NSE"),
        ("ASTRAL.NS", "ASTRAL:NSE"),
        ("POLYCAB.NS", "POLYCAB:NSE"),
        // Others
        ("CLEANSCI.NS", "CLEANSCI:NSE"),
        ("DEEPAKNTR.NS", "DEEPAKNTR:NSE"),
        ("FINEORG.NS", "FINEORG:NSE"),
        ("GRAVITA.NS", "GRAVITA:NSE"),
        ("SBILIFE.NS", "SBILIFE:NSE"),
        ("INFY.NS", "INFY:NSE"),
        ("HAPPSTMNDS.NS", "HAPPSTMNDS:NSE"),
        ("EASEMYTRIP.NS", "EASEMYTRIP:NSE"),
    ])
});

/// Resolve a domestic symbol to the provider's query syntax
pub fn map_symbol(symbol: &str) -> &str {
    SYMBOL_MAP.get(symbol).copied().unwrap_or(symbol)
}

/// Upstream quote source, mockable for tests
#[async_trait]
pub trait QuoteSource: Send + Sync {
    async fn fetch(&self, query: &str) -> Result<GoogleFinanceResponse, UpstreamError>;
}

/// Production source: SerpAPI's Google Finance query engine
pub struct SerpApiSource {
    http: HttpClient,
    api_key: String,
}

impl SerpApiSource {
    pub fn new(api_key: &str) -> Result<Self, String> {
        Ok(Self {
            http: HttpClient::new(TIMEOUT_SECS)?,
            api_key: api_key.to_string(),
        })
    }
}

#[async_trait]
impl QuoteSource for SerpApiSource {
    async fn fetch(&self, query: &str) -> Result<GoogleFinanceResponse, UpstreamError> {
        logger::debug(
            LogTag::Api,
            &format!("[SERPAPI] Fetching quote: query={}", query),
        );

        let response = self
            .http
            .client()
            .get(SERPAPI_BASE_URL)
            .query(&[
                ("engine", QUERY_ENGINE),
                ("q", query),
                ("api_key", &self.api_key),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let parsed: GoogleFinanceResponse = serde_json::from_str(&body)?;
        Ok(parsed)
    }
}

/// Quote provider adapter with a per-symbol TTL cache
pub struct GoogleFinanceAdapter {
    source: Arc<dyn QuoteSource>,
    cache: RwLock<HashMap<String, CacheEntry<Quote>>>,
    ttl: Duration,
}

impl GoogleFinanceAdapter {
    pub fn new(source: Arc<dyn QuoteSource>) -> Self {
        Self::with_ttl(source, CACHE_TTL)
    }

    pub fn with_ttl(source: Arc<dyn QuoteSource>, ttl: Duration) -> Self {
        Self {
            source,
            cache: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Fetch a quote for one symbol, or `None` on any upstream failure.
    ///
    /// A fresh cache hit returns without a network call. Failures are logged
    /// and swallowed here; the caller treats absence as "no live data". No
    /// internal retry.
    pub async fn fetch_quote(&self, symbol: &str) -> Option<Quote> {
        if let Some(hit) = self.read_cache(symbol, self.ttl).await {
            logger::debug(
                LogTag::Cache,
                &format!("quote cache hit: symbol={}", symbol),
            );
            return Some(hit);
        }

        let query = map_symbol(symbol);
        match self.source.fetch(query).await {
            Ok(response) => match response.normalize(symbol) {
                Some(quote) => {
                    self.cache
                        .write()
                        .await
                        .insert(symbol.to_string(), CacheEntry::new(quote.clone()));
                    Some(quote)
                }
                None => {
                    logger::warning(
                        LogTag::Api,
                        &format!("no quote block in response: symbol={}", symbol),
                    );
                    None
                }
            },
            Err(err) => {
                logger::error(
                    LogTag::Api,
                    &format!("quote fetch failed: symbol={}, error={}", symbol, err),
                );
                None
            }
        }
    }

    /// Stale read used only as a fallback tier: entries up to 2x TTL old
    /// still count, anything older is ignored.
    pub async fn get_cached(&self, symbol: &str) -> Option<Quote> {
        self.read_cache(symbol, self.ttl * STALE_READ_MULTIPLIER)
            .await
    }

    async fn read_cache(&self, symbol: &str, max_age: Duration) -> Option<Quote> {
        self.cache
            .read()
            .await
            .get(symbol)
            .filter(|entry| entry.is_fresh(max_age))
            .map(|entry| entry.value().clone())
    }
}

#[cfg(test)]
pub mod testing {
    //! Shared mock source for adapter, orchestrator, and endpoint tests

    use super::*;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Mutex;
    use tokio::time::Instant;

    /// Scripted upstream: fixed price per query, optional failures, and a log
    /// of (query, instant) pairs for pacing assertions.
    pub struct MockSource {
        pub calls: AtomicUsize,
        pub call_log: Mutex<Vec<(String, Instant)>>,
        pub price: f64,
        fail_all: AtomicBool,
        fail_queries: HashSet<String>,
    }

    impl MockSource {
        pub fn healthy(price: f64) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                call_log: Mutex::new(Vec::new()),
                price,
                fail_all: AtomicBool::new(false),
                fail_queries: HashSet::new(),
            }
        }

        pub fn failing() -> Self {
            let source = Self::healthy(0.0);
            source.fail_all.store(true, Ordering::SeqCst);
            source
        }

        pub fn failing_for(queries: &[&str]) -> Self {
            Self {
                fail_queries: queries.iter().map(|q| q.to_string()).collect(),
                ..Self::healthy(100.0)
            }
        }

        /// Flip the whole upstream into (or out of) failure mid-test
        pub fn set_fail_all(&self, fail: bool) {
            self.fail_all.store(fail, Ordering::SeqCst);
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl QuoteSource for MockSource {
        async fn fetch(&self, query: &str) -> Result<GoogleFinanceResponse, UpstreamError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.call_log
                .lock()
                .unwrap()
                .push((query.to_string(), Instant::now()));

            if self.fail_all.load(Ordering::SeqCst) || self.fail_queries.contains(query) {
                return Err(UpstreamError::Status {
                    status: 503,
                    body: "service unavailable".to_string(),
                });
            }

            Ok(GoogleFinanceResponse {
                summary: None,
                knowledge_graph: Some(QuoteBlock {
                    price: Some(self.price),
                    change: Some(1.0),
                    change_percent: Some(0.5),
                    pe_ratio: Some(20.0),
                    ..Default::default()
                }),
                financials: None,
            })
        }
    }
}
