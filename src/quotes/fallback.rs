/// Synthetic quote generator
///
/// Pure function of the symbol plus RNG draws: a random walk around a static
/// per-symbol base price, with ratio/financial strings from fixed ranges.
/// Always succeeds; this is the terminal tier of the fallback chain.
use chrono::Utc;
use rand::Rng;

use crate::quotes::types::Quote;

pub const DEFAULT_BASE_PRICE: f64 = 1000.0;

static BASE_PRICES: &[(&str, f64)] = &[
    ("HDFCBANK.NS", 1770.0),
    ("BAJFINANCE.NS", 6500.0),
    ("ICICIBANK.NS", 1200.0),
    ("BAJAJ-AUTO.NS", 9500.0),
    ("AFFLE.NS", 1200.0),
    ("KPITTECH.NS", 1800.0),
    ("TATATECH.NS", 900.0),
    ("TANLA.NS", 480.0),
    ("DMART.NS", 3500.0),
    ("TATACONSUM.NS", 850.0),
    ("PIDILITE.NS", 2800.0),
    ("TATAPOWER.NS", 350.0),
    ("KPIGREEN.NS", 200.0),
    ("SUZLON.NS", 45.0),
    ("GENSOL.NS", 150.0),
    ("POLYCAB.NS", 4500.0),
    ("INFY.NS", 1450.0),
];

pub fn base_price(symbol: &str) -> f64 {
    BASE_PRICES
        .iter()
        .find(|(s, _)| *s == symbol)
        .map(|(_, p)| *p)
        .unwrap_or(DEFAULT_BASE_PRICE)
}

/// Synthesize a plausible quote for a symbol with no live or cached data
pub fn fallback_quote(symbol: &str) -> Quote {
    let mut rng = rand::thread_rng();
    let base = base_price(symbol);

    let change = (rng.gen::<f64>() - 0.5) * base * 0.05;
    let change_percent = (change / base) * 100.0;

    Quote {
        symbol: symbol.to_string(),
        price: base + change,
        change,
        change_percent,
        pe_ratio: Some(15.0 + rng.gen::<f64>() * 25.0),
        market_cap: Some(format!("₹{:.0} Cr", rng.gen::<f64>() * 100_000.0 + 10_000.0)),
        earnings: Some(format!("₹{:.0} Cr", rng.gen::<f64>() * 5_000.0 + 500.0)),
        revenue: Some(format!("₹{:.0} Cr", rng.gen::<f64>() * 20_000.0 + 2_000.0)),
        last_updated: Utc::now().to_rfc3339(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_stays_within_five_percent_of_base() {
        for _ in 0..200 {
            let quote = fallback_quote("TATAPOWER.NS");
            let base = 350.0;
            assert!(quote.price >= base * 0.95 && quote.price <= base * 1.05);
        }
    }

    #[test]
    fn unknown_symbol_uses_default_base() {
        let quote = fallback_quote("NEWLISTING.NS");
        assert!(quote.price >= DEFAULT_BASE_PRICE * 0.95);
        assert!(quote.price <= DEFAULT_BASE_PRICE * 1.05);
    }

    #[test]
    fn all_fields_populated() {
        let quote = fallback_quote("SUZLON.NS");
        assert_eq!(quote.symbol, "SUZLON.NS");
        assert!(quote.price.is_finite());
        assert!(quote.change.is_finite());
        assert!(quote.change_percent.is_finite());
        assert!(quote.pe_ratio.is_some());
        assert!(quote.market_cap.as_deref().unwrap().starts_with('₹'));
        assert!(quote.earnings.is_some());
        assert!(quote.revenue.is_some());
        assert!(!quote.last_updated.is_empty());
    }

    #[test]
    fn change_percent_consistent_with_change() {
        let quote = fallback_quote("DMART.NS");
        let expected = quote.change / 3500.0 * 100.0;
        assert!((quote.change_percent - expected).abs() < 1e-9);
    }
}
