/// Portfolio snapshot endpoint
use axum::{response::Response, routing::get, Router};
use std::sync::Arc;

use crate::{
    portfolio,
    webserver::{state::AppState, utils::json_response},
};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/portfolio", get(get_portfolio))
}

/// GET /portfolio - holdings with derived metrics and sector rollups
async fn get_portfolio() -> Response {
    json_response(portfolio::snapshot())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apis::google_finance::testing::MockSource;
    use crate::apis::google_finance::GoogleFinanceAdapter;
    use crate::quotes::QuoteService;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::util::ServiceExt;

    #[tokio::test]
    async fn snapshot_has_holdings_and_totals() {
        let adapter = GoogleFinanceAdapter::new(Arc::new(MockSource::healthy(100.0)));
        let state = Arc::new(AppState::with_quotes(QuoteService::new(adapter)));

        let response = routes()
            .with_state(state)
            .oneshot(
                Request::builder()
                    .uri("/portfolio")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["holdings"].as_array().unwrap().len(), 29);
        assert!(body["totalInvestment"].as_f64().unwrap() > 0.0);
        assert!(!body["sectors"].as_array().unwrap().is_empty());
    }
}
