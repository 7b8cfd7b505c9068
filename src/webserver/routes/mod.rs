/// Route registration
///
/// Each handler group lives in its own module and exposes a `routes()`
/// builder; this file merges them and attaches the shared state.
pub mod portfolio;
pub mod quotes;
pub mod status;
pub mod upload;

use axum::{response::Html, routing::get, Router};
use std::sync::Arc;

use crate::webserver::{state::AppState, templates};

/// Build the complete router for the application
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(dashboard))
        .merge(quotes::routes())
        .merge(upload::routes())
        .merge(portfolio::routes())
        .merge(status::routes())
        .with_state(state)
}

/// GET / - embedded dashboard page
async fn dashboard() -> Html<&'static str> {
    Html(templates::DASHBOARD_HTML)
}
