pub mod api;
pub mod models;
pub mod processors;

pub use api::{create_http_client_with_timeout, fetch_odds, fetch_results};
pub use models::{GameOdds, GameResult};
