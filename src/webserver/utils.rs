/// Response helpers shared by all route handlers
use axum::{
    http::{header, StatusCode},
    response::Response,
};
use serde::Serialize;

/// Serialize a payload as a 200 JSON response
pub fn json_response<T: Serialize>(payload: T) -> Response {
    build(StatusCode::OK, &payload)
}

/// JSON error body `{"error": message}` with the given status
pub fn error_response(status: StatusCode, message: &str) -> Response {
    build(status, &serde_json::json!({ "error": message }))
}

fn build<T: Serialize>(status: StatusCode, payload: &T) -> Response {
    match serde_json::to_string(payload) {
        Ok(body) => Response::builder()
            .status(status)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.into())
            .unwrap_or_else(|_| fallback()),
        Err(_) => fallback(),
    }
}

fn fallback() -> Response {
    let mut response = Response::new(r#"{"error":"Internal server error"}"#.into());
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    response
}
