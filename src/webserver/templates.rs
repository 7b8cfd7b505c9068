/// Embedded dashboard page
///
/// Single static HTML document served at `/`. It renders the portfolio table
/// from `/portfolio` and refreshes live prices through `/quotes` on a timer;
/// no assets are served from disk.
pub const DASHBOARD_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Portfolio Dashboard</title>
<style>
  body { font-family: -apple-system, "Segoe UI", sans-serif; margin: 0; background: #0f172a; color: #e2e8f0; }
  header { padding: 16px 24px; background: #1e293b; display: flex; justify-content: space-between; align-items: baseline; }
  h1 { font-size: 18px; margin: 0; }
  #totals { font-size: 14px; color: #94a3b8; }
  main { padding: 16px 24px; }
  table { width: 100%; border-collapse: collapse; font-size: 13px; }
  th, td { text-align: right; padding: 6px 10px; border-bottom: 1px solid #1e293b; }
  th:first-child, td:first-child { text-align: left; }
  th { color: #94a3b8; font-weight: 500; }
  .gain { color: #4ade80; }
  .loss { color: #f87171; }
  .sector-row td { background: #1e293b; font-weight: 600; text-align: left; }
  #status { font-size: 12px; color: #64748b; padding: 8px 24px; }
</style>
</head>
<body>
<header>
  <h1>Portfolio Dashboard</h1>
  <div id="totals">loading&hellip;</div>
</header>
<main>
  <table id="holdings">
    <thead>
      <tr>
        <th>Stock</th><th>Qty</th><th>Buy</th><th>Price</th>
        <th>Invested</th><th>Value</th><th>P&amp;L</th><th>P&amp;L %</th>
        <th>P/E</th><th>Call</th>
      </tr>
    </thead>
    <tbody></tbody>
  </table>
</main>
<div id="status"></div>
<script>
const fmt = n => n.toLocaleString("en-IN", { maximumFractionDigits: 2 });
const pct = n => (n >= 0 ? "+" : "") + n.toFixed(2) + "%";
const cls = n => n >= 0 ? "gain" : "loss";

let snapshot = null;
let live = {};

function render() {
  if (!snapshot) return;
  const body = document.querySelector("#holdings tbody");
  body.innerHTML = "";
  let sector = null;
  for (const h of snapshot.holdings) {
    if (h.sector !== sector) {
      sector = h.sector;
      const s = snapshot.sectors.find(x => x.sector === sector);
      const row = document.createElement("tr");
      row.className = "sector-row";
      row.innerHTML = `<td colspan="10">${sector} &mdash; ` +
        `<span class="${cls(s.gainLoss)}">${fmt(s.gainLoss)} (${pct(s.gainLossPercent)})</span></td>`;
      body.appendChild(row);
    }
    const quote = live[h.symbol];
    const price = quote ? quote.currentPrice : h.currentPrice;
    const value = price * h.quantity;
    const gain = value - h.investment;
    const gainPct = (gain / h.investment) * 100;
    const row = document.createElement("tr");
    row.innerHTML =
      `<td>${h.name}</td><td>${fmt(h.quantity)}</td><td>${fmt(h.purchasePrice)}</td>` +
      `<td>${fmt(price)}</td><td>${fmt(h.investment)}</td><td>${fmt(value)}</td>` +
      `<td class="${cls(gain)}">${fmt(gain)}</td>` +
      `<td class="${cls(gain)}">${pct(gainPct)}</td>` +
      `<td>${quote && quote.peRatio != null ? quote.peRatio.toFixed(1) : h.peRatio.toFixed(1)}</td>` +
      `<td title="${h.recommendationReason}">${h.recommendation}</td>`;
    body.appendChild(row);
  }
  const t = snapshot;
  document.getElementById("totals").innerHTML =
    `Invested ${fmt(t.totalInvestment)} &middot; Value ${fmt(t.currentValue)} &middot; ` +
    `<span class="${cls(t.totalGainLoss)}">${fmt(t.totalGainLoss)} (${pct(t.totalGainLossPercent)})</span>`;
}

async function loadPortfolio() {
  const res = await fetch("/portfolio");
  snapshot = await res.json();
  render();
}

async function refreshQuotes() {
  if (!snapshot) return;
  const symbols = snapshot.holdings.map(h => h.symbol).join(",");
  try {
    const res = await fetch("/quotes?symbols=" + encodeURIComponent(symbols));
    if (res.ok) {
      live = await res.json();
      document.getElementById("status").textContent =
        "Quotes refreshed at " + new Date().toLocaleTimeString();
      render();
    }
  } catch (e) {
    document.getElementById("status").textContent = "Quote refresh failed";
  }
}

loadPortfolio().then(refreshQuotes);
setInterval(refreshQuotes, 30000);
</script>
</body>
</html>
"##;
