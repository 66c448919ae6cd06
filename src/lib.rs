//! NBA odds and results as plain text files
//!
//! Fetches moneyline odds from The Odds API and scores from the NBA live
//! scoreboard, keeps the games that fall on a requested date in a configured
//! local timezone, and writes one line per game.
//!
//! # Examples
//!
//! ```rust,no_run
//! use nba_txt::config::Config;
//! use nba_txt::data_fetcher::create_http_client_with_timeout;
//! use nba_txt::error::AppError;
//! use nba_txt::pipeline::{export_odds, parse_target_date};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
//!
//!     let date = parse_target_date("25.11.2025")?;
//!     let summary = export_odds(&client, &config, date).await?;
//!     println!("{} lines in {}", summary.lines_written, summary.path.display());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod output;
pub mod pipeline;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::{GameOdds, GameResult, fetch_odds, fetch_results};
pub use error::AppError;
pub use output::{FileWriter, RecordKind};
pub use pipeline::{ExportSummary, export_odds, export_results, parse_target_date};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
