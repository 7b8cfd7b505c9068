pub mod routes;
pub mod server;
pub mod state;
pub mod templates;
pub mod utils;
