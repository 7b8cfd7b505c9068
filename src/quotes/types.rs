/// Quote records
///
/// A `Quote` is immutable once produced; a fresh fetch supersedes it rather
/// than mutating it in place.
use serde::{Deserialize, Serialize};

/// Normalized price/financial record for one symbol at one point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub symbol: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pe_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earnings: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue: Option<String>,
    pub last_updated: String,
}

/// Wire shape served by `GET /quotes`; `price` travels as `currentPrice`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRecord {
    pub symbol: String,
    pub current_price: f64,
    pub change: f64,
    pub change_percent: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pe_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earnings: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue: Option<String>,
    pub last_updated: String,
}

impl From<Quote> for QuoteRecord {
    fn from(quote: Quote) -> Self {
        Self {
            symbol: quote.symbol,
            current_price: quote.price,
            change: quote.change,
            change_percent: quote.change_percent,
            pe_ratio: quote.pe_ratio,
            earnings: quote.earnings,
            market_cap: quote.market_cap,
            revenue: quote.revenue,
            last_updated: quote.last_updated,
        }
    }
}
