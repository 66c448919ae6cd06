use chrono::NaiveDate;
use reqwest::Client;
use reqwest::header::HeaderMap;
use serde_json::Value;
use tracing::{info, instrument, warn};

use super::fetch_utils::fetch;
use super::http_client::scoreboard_headers;
use super::urls::{build_odds_url, build_scoreboard_url};
use crate::config::Config;
use crate::constants::formats::FILE_DATE;
use crate::data_fetcher::models::{GameOdds, GameResult, ScoreboardResponse};
use crate::data_fetcher::processors::{
    DateFilter, TimeNormalizer, extract_odds, extract_results,
};
use crate::error::AppError;

/// Fetches the raw odds events for the local day `target_date`.
///
/// The request window covers the whole local day; events are returned
/// undecoded and in upstream order.
pub async fn fetch_odds_events(
    client: &Client,
    config: &Config,
    target_date: NaiveDate,
) -> Result<Vec<Value>, AppError> {
    let api_key = config.require_api_key()?;
    let normalizer = TimeNormalizer::new(config.time_zone()?);
    let url = build_odds_url(
        &config.odds_api_url,
        api_key,
        &config.odds_regions,
        normalizer.day_bounds_utc(target_date),
    )?;

    fetch(client, &url, HeaderMap::new()).await
}

/// Fetches the current NBA scoreboard.
pub async fn fetch_scoreboard(
    client: &Client,
    config: &Config,
) -> Result<ScoreboardResponse, AppError> {
    let url = build_scoreboard_url(&config.scoreboard_url)?;
    fetch(client, &url, scoreboard_headers()).await
}

/// Fetches moneyline odds for all games on `target_date` (local time).
///
/// Transport failures are returned as errors. Events that cannot be used are
/// left out, so an empty list is a valid answer.
#[instrument(skip(client, config))]
pub async fn fetch_odds(
    client: &Client,
    config: &Config,
    target_date: NaiveDate,
) -> Result<Vec<GameOdds>, AppError> {
    let normalizer = TimeNormalizer::new(config.time_zone()?);
    let events = fetch_odds_events(client, config, target_date).await?;

    let odds = extract_odds(&events, &DateFilter::new(normalizer, target_date));
    info!(
        "Found odds for {} of {} events on {}",
        odds.len(),
        events.len(),
        target_date
    );
    Ok(odds)
}

/// Fetches results for all games on `target_date` (local time).
///
/// The scoreboard only ever describes the current day, so older or future
/// dates normally yield an empty list.
#[instrument(skip(client, config))]
pub async fn fetch_results(
    client: &Client,
    config: &Config,
    target_date: NaiveDate,
) -> Result<Vec<GameResult>, AppError> {
    let normalizer = TimeNormalizer::new(config.time_zone()?);
    let scoreboard = fetch_scoreboard(client, config).await?;
    let scoreboard_date = scoreboard.game_date().map(str::to_string);
    let games = scoreboard.into_games();

    let results = extract_results(&games, &DateFilter::new(normalizer, target_date));
    info!(
        "Found {} of {} scoreboard games on {}",
        results.len(),
        games.len(),
        target_date
    );

    if let Some(scoreboard_date) =
        scoreboard_date_mismatch(scoreboard_date.as_deref(), target_date)
    {
        warn!(
            "Scoreboard covers {scoreboard_date}, requested {}; the live scoreboard cannot serve other days",
            target_date.format(FILE_DATE)
        );
    }

    Ok(results)
}

/// The scoreboard's `gameDate` when it names a day other than `target_date`.
fn scoreboard_date_mismatch(
    scoreboard_date: Option<&str>,
    target_date: NaiveDate,
) -> Option<&str> {
    let requested = target_date.format(FILE_DATE).to_string();
    scoreboard_date.filter(|date| date.trim() != requested)
}
