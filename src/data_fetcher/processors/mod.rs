//! Turning raw upstream records into normalized [`GameOdds`] and [`GameResult`] values.
//!
//! Every record is processed on its own and ends up either as a record or as a
//! [`SkipReason`]. Skips never abort the batch; batch-level failures belong to
//! the fetch layer.
//!
//! [`GameOdds`]: crate::data_fetcher::models::GameOdds
//! [`GameResult`]: crate::data_fetcher::models::GameResult

pub mod odds;
pub mod results;
pub mod time_normalization;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

pub use odds::{extract_game_odds, extract_odds, find_first_complete_quote};
pub use results::{extract_game_result, extract_results, parse_scores};
pub use time_normalization::{DateFilter, TimeNormalizer, TimestampError};

/// Why a single upstream record produced no output.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SkipReason {
    #[error("record does not match the expected shape: {0}")]
    Malformed(String),

    #[error("record has no start time")]
    MissingTime,

    #[error(transparent)]
    Timestamp(#[from] TimestampError),

    #[error("record is on {0}, not on the requested date")]
    OtherDate(NaiveDate),

    #[error("record is missing a team name")]
    MissingTeam,

    #[error("no bookmaker quotes both teams")]
    IncompleteOdds,
}

/// Decodes one raw record into its model, mapping decode failures to a skip.
pub(crate) fn decode_record<T: DeserializeOwned>(raw: &Value) -> Result<T, SkipReason> {
    T::deserialize(raw).map_err(|e| SkipReason::Malformed(e.to_string()))
}

/// Applies `extract` to every raw record, keeping the successes in input order.
pub(crate) fn collect_records<T>(
    kind: &str,
    raw: &[Value],
    extract: impl Fn(&Value) -> Result<T, SkipReason>,
) -> Vec<T> {
    let records: Vec<T> = raw
        .iter()
        .enumerate()
        .filter_map(|(index, record)| match extract(record) {
            Ok(extracted) => Some(extracted),
            Err(reason) => {
                debug!("Skipping {kind} record #{index}: {reason}");
                None
            }
        })
        .collect();

    debug!(
        "Extracted {} of {} {kind} records",
        records.len(),
        raw.len()
    );
    records
}
