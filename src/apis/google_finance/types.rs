/// SerpAPI Google Finance response model
///
/// The provider answers one of two shapes depending on the query: a rich
/// `knowledge_graph` block for well-known listings, or a thinner `summary`
/// block. A separate optional `financials` block may carry ratios that are
/// missing from either. Normalization resolves each output field in that
/// order: financials, knowledge graph, summary.
use chrono::Utc;
use serde::Deserialize;

use crate::quotes::types::Quote;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GoogleFinanceResponse {
    pub summary: Option<QuoteBlock>,
    pub knowledge_graph: Option<QuoteBlock>,
    pub financials: Option<FinancialsBlock>,
}

/// Price-level fields shared by the summary and knowledge-graph shapes
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuoteBlock {
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub change: Option<f64>,
    pub change_percent: Option<f64>,
    pub pe_ratio: Option<f64>,
    pub market_cap: Option<String>,
    pub earnings: Option<String>,
    pub revenue: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FinancialsBlock {
    pub pe_ratio: Option<f64>,
    pub market_cap: Option<String>,
    pub revenue: Option<String>,
    pub net_income: Option<String>,
}

impl GoogleFinanceResponse {
    /// Normalize into a `Quote`, or `None` when neither quote block is present
    ///
    /// Numeric price fields default to 0; the optional ratio/financial fields
    /// stay `None` when absent everywhere.
    pub fn normalize(&self, symbol: &str) -> Option<Quote> {
        let block = self.knowledge_graph.as_ref().or(self.summary.as_ref())?;
        let financials = self.financials.as_ref();

        Some(Quote {
            symbol: symbol.to_string(),
            price: block.price.unwrap_or(0.0),
            change: block.change.unwrap_or(0.0),
            change_percent: block.change_percent.unwrap_or(0.0),
            pe_ratio: financials.and_then(|f| f.pe_ratio).or(block.pe_ratio),
            market_cap: financials
                .and_then(|f| f.market_cap.clone())
                .or_else(|| block.market_cap.clone()),
            earnings: financials
                .and_then(|f| f.net_income.clone())
                .or_else(|| block.earnings.clone()),
            revenue: financials
                .and_then(|f| f.revenue.clone())
                .or_else(|| block.revenue.clone()),
            last_updated: Utc::now().to_rfc3339(),
        })
    }
}
