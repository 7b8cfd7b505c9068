/// Quote endpoint
///
/// `GET /quotes?symbols=A.NS,B.NS` returns a JSON object keyed by every
/// requested symbol. The body is the raw symbol map, no envelope, so the key
/// set is exactly what the client asked for (modulo the blanket response
/// cache window).
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Response,
    routing::get,
    Router,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    logger::{self, LogTag},
    webserver::{
        state::AppState,
        utils::{error_response, json_response},
    },
};

#[derive(Debug, Deserialize)]
pub struct QuotesQuery {
    pub symbols: Option<String>,
}

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/quotes", get(get_quotes))
}

/// GET /quotes
async fn get_quotes(
    State(state): State<Arc<AppState>>,
    Query(query): Query<QuotesQuery>,
) -> Response {
    let symbols: Vec<String> = query
        .symbols
        .as_deref()
        .unwrap_or("")
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if symbols.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "No symbols provided");
    }

    logger::debug(
        LogTag::Webserver,
        &format!("quote request: {} symbols", symbols.len()),
    );

    let quotes = state.quotes.get_quotes(&symbols).await;
    json_response(quotes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apis::google_finance::testing::MockSource;
    use crate::apis::google_finance::GoogleFinanceAdapter;
    use crate::quotes::QuoteService;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::util::ServiceExt;

    fn app(source: MockSource) -> Router {
        let adapter = GoogleFinanceAdapter::new(Arc::new(source));
        let state = Arc::new(AppState::with_quotes(QuoteService::new(adapter)));
        routes().with_state(state)
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn missing_symbols_is_bad_request() {
        let response = app(MockSource::healthy(100.0))
            .oneshot(Request::builder().uri("/quotes").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "No symbols provided");
    }

    #[tokio::test(start_paused = true)]
    async fn empty_symbols_is_bad_request() {
        let response = app(MockSource::healthy(100.0))
            .oneshot(
                Request::builder()
                    .uri("/quotes?symbols=,%20,")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test(start_paused = true)]
    async fn response_keys_match_request() {
        let response = app(MockSource::healthy(1770.0))
            .oneshot(
                Request::builder()
                    .uri("/quotes?symbols=HDFCBANK.NS,%20INFY.NS")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let keys: Vec<&str> = body.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["HDFCBANK.NS", "INFY.NS"]);
        assert_eq!(body["HDFCBANK.NS"]["currentPrice"], 1770.0);
    }

    #[tokio::test(start_paused = true)]
    async fn upstream_failure_still_returns_ok_with_fallback() {
        let response = app(MockSource::failing())
            .oneshot(
                Request::builder()
                    .uri("/quotes?symbols=TATAPOWER.NS")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        // degraded, never a 5xx
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let price = body["TATAPOWER.NS"]["currentPrice"].as_f64().unwrap();
        assert!(price >= 350.0 * 0.95 && price <= 350.0 * 1.05);
    }
}
