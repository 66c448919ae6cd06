//! URL building utilities for the upstream endpoints

use crate::constants::odds_query::{DATE_FORMAT, MONEYLINE_MARKET, ODDS_FORMAT};
use crate::error::AppError;
use chrono::{DateTime, Utc};
use reqwest::Url;

const API_KEY_PARAM: &str = "apiKey";

/// Timestamp layout The Odds API accepts for `commenceTimeFrom`/`commenceTimeTo`.
const COMMENCE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Builds the odds request URL for moneyline prices in decimal format.
///
/// `window` limits the result to events starting within that UTC span.
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use nba_txt::data_fetcher::api::build_odds_url;
///
/// let window = (
///     Utc.with_ymd_and_hms(2025, 11, 24, 23, 0, 0).unwrap(),
///     Utc.with_ymd_and_hms(2025, 11, 25, 23, 0, 0).unwrap(),
/// );
/// let url = build_odds_url("https://api.example.com/v4/sports/basketball_nba/odds", "KEY", "eu", window).unwrap();
/// assert_eq!(
///     url.as_str(),
///     "https://api.example.com/v4/sports/basketball_nba/odds?apiKey=KEY&regions=eu&markets=h2h&dateFormat=iso&oddsFormat=decimal&commenceTimeFrom=2025-11-24T23%3A00%3A00Z&commenceTimeTo=2025-11-25T23%3A00%3A00Z"
/// );
/// ```
pub fn build_odds_url(
    base_url: &str,
    api_key: &str,
    regions: &str,
    window: (DateTime<Utc>, DateTime<Utc>),
) -> Result<Url, AppError> {
    let from = window.0.format(COMMENCE_TIME_FORMAT).to_string();
    let to = window.1.format(COMMENCE_TIME_FORMAT).to_string();

    Url::parse_with_params(
        base_url,
        &[
            (API_KEY_PARAM, api_key),
            ("regions", regions),
            ("markets", MONEYLINE_MARKET),
            ("dateFormat", DATE_FORMAT),
            ("oddsFormat", ODDS_FORMAT),
            ("commenceTimeFrom", from.as_str()),
            ("commenceTimeTo", to.as_str()),
        ],
    )
    .map_err(|e| AppError::config_error(format!("Invalid odds URL '{base_url}': {e}")))
}

/// Parses the scoreboard URL, which takes no query parameters.
pub fn build_scoreboard_url(scoreboard_url: &str) -> Result<Url, AppError> {
    Url::parse(scoreboard_url).map_err(|e| {
        AppError::config_error(format!("Invalid scoreboard URL '{scoreboard_url}': {e}"))
    })
}

/// The URL as text with the API key replaced, for logs and error messages.
pub fn redact_api_key(url: &Url) -> String {
    if !url.query_pairs().any(|(key, _)| key == API_KEY_PARAM) {
        return url.to_string();
    }

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| {
            let value = if key == API_KEY_PARAM {
                "REDACTED".to_string()
            } else {
                value.into_owned()
            };
            (key.into_owned(), value)
        })
        .collect();

    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}
