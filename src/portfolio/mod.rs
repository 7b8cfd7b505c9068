/// Sample portfolio: static holdings plus derived statistics
///
/// Everything here is deterministic arithmetic over the seed table: per
/// holding investment/present value/gain figures, sector rollups, portfolio
/// totals, and the recommendation text looked up from the gain-percent
/// bucket. No market data flows in; the dashboard refreshes prices client
/// side through `/quotes`.
use serde::Serialize;

/// Seed row: what the investor bought and the price it was last seen at
struct Position {
    name: &'static str,
    symbol: &'static str,
    sector: &'static str,
    quantity: f64,
    purchase_price: f64,
    current_price: f64,
    pe_ratio: f64,
    earnings: &'static str,
}

#[rustfmt::skip]
static SAMPLE_POSITIONS: &[Position] = &[
    // Financial sector
    Position { name: "HDFC Bank", symbol: "HDFCBANK.NS", sector: "Financial Sector", quantity: 50.0, purchase_price: 1450.0, current_price: 1770.0, pe_ratio: 20.5, earnings: "₹45,000 Cr" },
    Position { name: "Bajaj Finance", symbol: "BAJFINANCE.NS", sector: "Financial Sector", quantity: 10.0, purchase_price: 4450.0, current_price: 6500.0, pe_ratio: 28.3, earnings: "₹12,500 Cr" },
    Position { name: "ICICI Bank", symbol: "ICICIBANK.NS", sector: "Financial Sector", quantity: 75.0, purchase_price: 800.0, current_price: 1200.0, pe_ratio: 18.2, earnings: "₹38,000 Cr" },
    Position { name: "Bajaj Auto", symbol: "BAJAJ-AUTO.NS", sector: "Financial Sector", quantity: 20.0, purchase_price: 8500.0, current_price: 9500.0, pe_ratio: 32.1, earnings: "₹15,200 Cr" },
    Position { name: "Savani Financials", symbol: "SAVANIFIN.NS", sector: "Financial Sector", quantity: 100.0, purchase_price: 290.0, current_price: 180.0, pe_ratio: 12.5, earnings: "₹450 Cr" },
    // Information technology
    Position { name: "Affle India", symbol: "AFFLE.NS", sector: "Information Technology", quantity: 50.0, purchase_price: 950.0, current_price: 1200.0, pe_ratio: 28.5, earnings: "₹850 Cr" },
    Position { name: "LTI Mindtree", symbol: "LTIM.NS", sector: "Information Technology", quantity: 25.0, purchase_price: 4200.0, current_price: 5800.0, pe_ratio: 24.8, earnings: "₹8,500 Cr" },
    Position { name: "KPIT Technologies", symbol: "KPITTECH.NS", sector: "Information Technology", quantity: 100.0, purchase_price: 950.0, current_price: 1800.0, pe_ratio: 35.2, earnings: "₹2,800 Cr" },
    Position { name: "Tata Technologies", symbol: "TATATECH.NS", sector: "Information Technology", quantity: 80.0, purchase_price: 1450.0, current_price: 900.0, pe_ratio: 18.5, earnings: "₹1,200 Cr" },
    Position { name: "BLS E-Services", symbol: "BLSE.NS", sector: "Information Technology", quantity: 200.0, purchase_price: 135.0, current_price: 90.0, pe_ratio: 15.2, earnings: "₹350 Cr" },
    Position { name: "Tanla Platforms", symbol: "TANLA.NS", sector: "Information Technology", quantity: 50.0, purchase_price: 1200.0, current_price: 480.0, pe_ratio: 15.2, earnings: "₹1,200 Cr" },
    // Consumer
    Position { name: "DMart", symbol: "DMART.NS", sector: "Consumer", quantity: 15.0, purchase_price: 3800.0, current_price: 3500.0, pe_ratio: 45.2, earnings: "₹2,800 Cr" },
    Position { name: "Tata Consumer", symbol: "TATACONSUM.NS", sector: "Consumer", quantity: 37.0, purchase_price: 750.0, current_price: 850.0, pe_ratio: 35.1, earnings: "₹8,200 Cr" },
    Position { name: "Pidilite Industries", symbol: "PIDILITE.NS", sector: "Consumer", quantity: 25.0, purchase_price: 2400.0, current_price: 2800.0, pe_ratio: 42.5, earnings: "₹5,600 Cr" },
    // Power
    Position { name: "Tata Power", symbol: "TATAPOWER.NS", sector: "Power", quantity: 200.0, purchase_price: 220.0, current_price: 350.0, pe_ratio: 28.7, earnings: "₹12,400 Cr" },
    Position { name: "KPI Green Energy", symbol: "KPIGREEN.NS", sector: "Power", quantity: 150.0, purchase_price: 435.0, current_price: 200.0, pe_ratio: 12.8, earnings: "₹450 Cr" },
    Position { name: "Suzlon Energy", symbol: "SUZLON.NS", sector: "Power", quantity: 500.0, purchase_price: 38.0, current_price: 45.0, pe_ratio: 8.5, earnings: "₹850 Cr" },
    Position { name: "Gensol Engineering", symbol: "GENSOL.NS", sector: "Power", quantity: 100.0, purchase_price: 400.0, current_price: 150.0, pe_ratio: 8.5, earnings: "₹450 Cr" },
    // Pipes
    Position { name: "Hariom Pipe Industries", symbol: "HARIOMPIPE.NS", sector: "Pipe Sector", quantity: 200.0, purchase_price: 410.0, current_price: 250.0, pe_ratio: 18.5, earnings: "₹650 Cr" },
    Position { name: "Astral Limited", symbol: "ASTRAL.NS", sector: "Pipe Sector", quantity: 40.0, purchase_price: 1850.0, current_price: 2200.0, pe_ratio: 28.5, earnings: "₹1,200 Cr" },
    Position { name: "Polycab India", symbol: "POLYCAB.NS", sector: "Pipe Sector", quantity: 30.0, purchase_price: 2500.0, current_price: 4500.0, pe_ratio: 25.3, earnings: "₹8,900 Cr" },
    // Others
    Position { name: "Clean Science", symbol: "CLEANSCI.NS", sector: "Others", quantity: 60.0, purchase_price: 1800.0, current_price: 1650.0, pe_ratio: 22.5, earnings: "₹850 Cr" },
    Position { name: "Deepak Nitrite", symbol: "DEEPAKNTR.NS", sector: "Others", quantity: 45.0, purchase_price: 2200.0, current_price: 2650.0, pe_ratio: 18.8, earnings: "₹1,850 Cr" },
    Position { name: "Fine Organic", symbol: "FINEORG.NS", sector: "Others", quantity: 35.0, purchase_price: 4500.0, current_price: 5200.0, pe_ratio: 32.5, earnings: "₹650 Cr" },
    Position { name: "Gravita India", symbol: "GRAVITA.NS", sector: "Others", quantity: 80.0, purchase_price: 1200.0, current_price: 1450.0, pe_ratio: 15.2, earnings: "₹450 Cr" },
    Position { name: "SBI Life Insurance", symbol: "SBILIFE.NS", sector: "Others", quantity: 50.0, purchase_price: 1350.0, current_price: 1580.0, pe_ratio: 28.5, earnings: "₹8,500 Cr" },
    Position { name: "Infosys", symbol: "INFY.NS", sector: "Others", quantity: 15.0, purchase_price: 1200.0, current_price: 1450.0, pe_ratio: 22.8, earnings: "₹65,000 Cr" },
    Position { name: "Happiest Minds", symbol: "HAPPSTMNDS.NS", sector: "Others", quantity: 120.0, purchase_price: 850.0, current_price: 920.0, pe_ratio: 28.5, earnings: "₹450 Cr" },
    Position { name: "EaseMyTrip", symbol: "EASEMYTRIP.NS", sector: "Others", quantity: 200.0, purchase_price: 45.0, current_price: 38.0, pe_ratio: 18.5, earnings: "₹250 Cr" },
];

/// One holding with everything the dashboard table shows
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub name: &'static str,
    pub symbol: &'static str,
    pub sector: &'static str,
    pub exchange: &'static str,
    pub quantity: f64,
    pub purchase_price: f64,
    pub current_price: f64,
    pub investment: f64,
    pub present_value: f64,
    pub gain_loss: f64,
    pub gain_loss_percent: f64,
    pub portfolio_percent: f64,
    pub pe_ratio: f64,
    pub earnings: &'static str,
    pub recommendation: &'static str,
    pub recommendation_reason: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorSummary {
    pub sector: &'static str,
    pub investment: f64,
    pub present_value: f64,
    pub gain_loss: f64,
    pub gain_loss_percent: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    pub holdings: Vec<Holding>,
    pub sectors: Vec<SectorSummary>,
    pub total_investment: f64,
    pub current_value: f64,
    pub total_gain_loss: f64,
    pub total_gain_loss_percent: f64,
}

/// Fixed rule table keyed on the gain-percent bucket; returns (action, reason)
pub fn recommendation(gain_loss_percent: f64) -> (&'static str, &'static str) {
    if gain_loss_percent >= 50.0 {
        ("Sell", "Gains above 50%; consider booking profits on strength.")
    } else if gain_loss_percent >= 20.0 {
        ("Hold", "Strong uptrend; hold with a trailing stop.")
    } else if gain_loss_percent >= 0.0 {
        ("Hold", "Steady performer; no action needed.")
    } else if gain_loss_percent >= -20.0 {
        ("Hold", "Minor drawdown; review after the next quarterly results.")
    } else if gain_loss_percent >= -40.0 {
        ("Watch", "Significant drawdown; average down only with conviction.")
    } else {
        ("Sell", "Deep loss; exit and redeploy the capital.")
    }
}

/// Build the full derived snapshot from the seed table
pub fn snapshot() -> PortfolioSnapshot {
    let total_investment: f64 = SAMPLE_POSITIONS
        .iter()
        .map(|p| p.quantity * p.purchase_price)
        .sum();

    let holdings: Vec<Holding> = SAMPLE_POSITIONS
        .iter()
        .map(|p| {
            let investment = p.quantity * p.purchase_price;
            let present_value = p.quantity * p.current_price;
            let gain_loss = present_value - investment;
            let gain_loss_percent = (gain_loss / investment) * 100.0;
            let (action, reason) = recommendation(gain_loss_percent);

            Holding {
                name: p.name,
                symbol: p.symbol,
                sector: p.sector,
                exchange: "NSE",
                quantity: p.quantity,
                purchase_price: p.purchase_price,
                current_price: p.current_price,
                investment,
                present_value,
                gain_loss,
                gain_loss_percent,
                portfolio_percent: (investment / total_investment) * 100.0,
                pe_ratio: p.pe_ratio,
                earnings: p.earnings,
                recommendation: action,
                recommendation_reason: reason,
            }
        })
        .collect();

    let mut sectors: Vec<SectorSummary> = Vec::new();
    for holding in &holdings {
        match sectors.iter_mut().find(|s| s.sector == holding.sector) {
            Some(summary) => {
                summary.investment += holding.investment;
                summary.present_value += holding.present_value;
            }
            None => sectors.push(SectorSummary {
                sector: holding.sector,
                investment: holding.investment,
                present_value: holding.present_value,
                gain_loss: 0.0,
                gain_loss_percent: 0.0,
            }),
        }
    }
    for summary in &mut sectors {
        summary.gain_loss = summary.present_value - summary.investment;
        summary.gain_loss_percent = (summary.gain_loss / summary.investment) * 100.0;
    }

    let current_value: f64 = holdings.iter().map(|h| h.present_value).sum();
    let total_gain_loss = current_value - total_investment;

    PortfolioSnapshot {
        holdings,
        sectors,
        total_investment,
        current_value,
        total_gain_loss,
        total_gain_loss_percent: (total_gain_loss / total_investment) * 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_are_consistent() {
        let snapshot = snapshot();

        let investment_sum: f64 = snapshot.holdings.iter().map(|h| h.investment).sum();
        let value_sum: f64 = snapshot.holdings.iter().map(|h| h.present_value).sum();

        assert!((snapshot.total_investment - investment_sum).abs() < 1e-6);
        assert!((snapshot.current_value - value_sum).abs() < 1e-6);
        assert!(
            (snapshot.total_gain_loss - (value_sum - investment_sum)).abs() < 1e-6
        );
    }

    #[test]
    fn portfolio_percentages_sum_to_hundred() {
        let snapshot = snapshot();
        let percent_sum: f64 = snapshot.holdings.iter().map(|h| h.portfolio_percent).sum();
        assert!((percent_sum - 100.0).abs() < 1e-6);
    }

    #[test]
    fn sector_rollups_cover_all_holdings() {
        let snapshot = snapshot();

        let sector_investment: f64 = snapshot.sectors.iter().map(|s| s.investment).sum();
        assert!((sector_investment - snapshot.total_investment).abs() < 1e-6);

        let names: Vec<&str> = snapshot.sectors.iter().map(|s| s.sector).collect();
        assert!(names.contains(&"Financial Sector"));
        assert!(names.contains(&"Power"));
        assert!(names.contains(&"Others"));
    }

    #[test]
    fn recommendation_buckets() {
        assert_eq!(recommendation(80.0).0, "Sell");
        assert_eq!(recommendation(50.0).0, "Sell");
        assert_eq!(recommendation(35.0).0, "Hold");
        assert_eq!(recommendation(10.0).0, "Hold");
        assert_eq!(recommendation(-5.0).0, "Hold");
        assert_eq!(recommendation(-25.0).0, "Watch");
        assert_eq!(recommendation(-60.0).0, "Sell");
    }

    #[test]
    fn known_holding_derivations() {
        let snapshot = snapshot();
        let hdfc = snapshot
            .holdings
            .iter()
            .find(|h| h.symbol == "HDFCBANK.NS")
            .unwrap();

        assert_eq!(hdfc.investment, 72_500.0);
        assert_eq!(hdfc.present_value, 88_500.0);
        assert_eq!(hdfc.gain_loss, 16_000.0);
        assert!((hdfc.gain_loss_percent - 22.07).abs() < 0.01);
        assert_eq!(hdfc.recommendation, "Hold");
    }
}
