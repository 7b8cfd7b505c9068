use std::process::exit;
use std::sync::Arc;

use foliodash::{
    arguments,
    config::AppConfig,
    logger::{self, LogTag},
    webserver::{self, state::AppState},
};

#[tokio::main]
async fn main() {
    if arguments::is_help_requested() {
        arguments::print_help();
        return;
    }

    logger::info(
        LogTag::System,
        &format!("foliodash v{} starting", env!("CARGO_PKG_VERSION")),
    );

    let config = AppConfig::from_env();
    if !config.has_real_api_key() {
        logger::warning(
            LogTag::System,
            "SERPAPI_KEY not set; live quotes disabled, serving fallback data",
        );
    }

    let state = match AppState::new(config) {
        Ok(state) => Arc::new(state),
        Err(err) => {
            logger::error(LogTag::System, &format!("startup failed: {}", err));
            exit(1);
        }
    };

    tokio::spawn(async {
        if tokio::signal::ctrl_c().await.is_ok() {
            logger::info(LogTag::System, "Ctrl+C received, shutting down");
            webserver::server::shutdown();
        }
    });

    if let Err(err) = webserver::server::start_server(state).await {
        logger::error(LogTag::System, &format!("webserver error: {}", err));
        exit(1);
    }
}
