pub mod batch;
pub mod cache;
pub mod fallback;
pub mod service;
pub mod types;

pub use batch::{fetch_many, FetchPacing};
pub use service::QuoteService;
pub use types::{Quote, QuoteRecord};
