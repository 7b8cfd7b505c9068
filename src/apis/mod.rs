pub mod client;
pub mod google_finance;
