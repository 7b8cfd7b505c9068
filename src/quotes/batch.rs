/// Batch fetch orchestration
///
/// Symbols are fetched in fixed-size groups to respect upstream rate limits:
/// all fetches in a group run concurrently, each one settles for a short
/// delay after completing, and a longer delay separates groups (skipped after
/// the final group). Failed symbols are simply absent from the result map.
use futures::future::join_all;
use std::collections::HashMap;
use std::time::Duration;
use tokio::time::sleep;

use crate::apis::google_finance::GoogleFinanceAdapter;
use crate::logger::{self, LogTag};
use crate::quotes::types::Quote;

/// Pacing knobs, injectable so tests can run under a paused clock
#[derive(Debug, Clone, Copy)]
pub struct FetchPacing {
    pub batch_size: usize,
    /// Settle delay after each fetch inside a group
    pub request_delay: Duration,
    /// Delay between groups
    pub batch_delay: Duration,
}

impl Default for FetchPacing {
    fn default() -> Self {
        Self {
            batch_size: 5,
            request_delay: Duration::from_millis(200),
            batch_delay: Duration::from_millis(1000),
        }
    }
}

/// Fetch quotes for an ordered symbol list through the adapter.
///
/// Returns only after every group has completed; a missing key means "no live
/// data", never an error.
pub async fn fetch_many(
    adapter: &GoogleFinanceAdapter,
    symbols: &[String],
    pacing: FetchPacing,
) -> HashMap<String, Quote> {
    let mut results = HashMap::new();
    if symbols.is_empty() {
        return results;
    }

    let groups: Vec<&[String]> = symbols.chunks(pacing.batch_size.max(1)).collect();
    let total_groups = groups.len();

    for (index, group) in groups.into_iter().enumerate() {
        logger::debug(
            LogTag::Quotes,
            &format!(
                "fetching group {}/{} ({} symbols)",
                index + 1,
                total_groups,
                group.len()
            ),
        );

        let fetches = group.iter().map(|symbol| async move {
            let quote = adapter.fetch_quote(symbol).await;
            sleep(pacing.request_delay).await;
            (symbol.clone(), quote)
        });

        for (symbol, quote) in join_all(fetches).await {
            if let Some(quote) = quote {
                results.insert(symbol, quote);
            }
        }

        if index + 1 < total_groups {
            sleep(pacing.batch_delay).await;
        }
    }

    results
}
