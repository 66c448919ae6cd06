//! End-to-end export of one day of odds or results to its text file.
//!
//! Fetching and extraction finish before the output file is opened, so a
//! failed request never leaves a partial file behind.

use crate::config::Config;
use crate::constants::formats::INPUT_DATE;
use crate::data_fetcher::{fetch_odds, fetch_results};
use crate::error::AppError;
use crate::output::{FileWriter, RecordKind, format_odds_line, format_result_line};
use chrono::{NaiveDate, Utc};
use reqwest::Client;
use std::path::PathBuf;
use tracing::info;

/// What an export wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub kind: RecordKind,
    pub date: NaiveDate,
    pub lines_written: usize,
    pub path: PathBuf,
}

/// Parses a target date typed as `DD.MM.YYYY`.
pub fn parse_target_date(input: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(input.trim(), INPUT_DATE)
        .map_err(|_| AppError::InvalidDate(input.trim().to_string()))
}

/// Today's date in the configured timezone.
pub fn today(config: &Config) -> Result<NaiveDate, AppError> {
    Ok(Utc::now().with_timezone(&config.time_zone()?).date_naive())
}

/// Fetches the odds for `date` and writes the odds file.
pub async fn export_odds(
    client: &Client,
    config: &Config,
    date: NaiveDate,
) -> Result<ExportSummary, AppError> {
    let odds = fetch_odds(client, config, date).await?;
    let lines: Vec<String> = odds.iter().map(format_odds_line).collect();
    write_export(config, RecordKind::Odds, date, lines).await
}

/// Fetches the results for `date` and writes the results file.
pub async fn export_results(
    client: &Client,
    config: &Config,
    date: NaiveDate,
) -> Result<ExportSummary, AppError> {
    let results = fetch_results(client, config, date).await?;
    let lines: Vec<String> = results.iter().map(format_result_line).collect();
    write_export(config, RecordKind::Results, date, lines).await
}

async fn write_export(
    config: &Config,
    kind: RecordKind,
    date: NaiveDate,
    lines: Vec<String>,
) -> Result<ExportSummary, AppError> {
    let path = FileWriter::from_config(config)
        .write(kind, date, &lines)
        .await?;

    info!("Exported {} {} for {}", lines.len(), kind.label(), date);
    Ok(ExportSummary {
        kind,
        date,
        lines_written: lines.len(),
        path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_target_date() {
        assert_eq!(
            parse_target_date(" 25.11.2025 ").unwrap(),
            NaiveDate::from_ymd_opt(2025, 11, 25).unwrap()
        );
        assert_eq!(
            parse_target_date("01.02.2026").unwrap(),
            NaiveDate::from_ymd_opt(2026, 2, 1).unwrap()
        );
    }

    #[test]
    fn test_parse_target_date_rejects_other_formats() {
        for bad in ["2025-11-25", "31.02.2025", "25/11/2025", "", "heute"] {
            assert!(
                matches!(parse_target_date(bad), Err(AppError::InvalidDate(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_today_uses_configured_zone() {
        let config = Config {
            timezone: "Pacific/Kiritimati".to_string(),
            ..Config::default()
        };
        let kiritimati = today(&config).unwrap();
        let utc_today = Utc::now().date_naive();
        // UTC+14 is never behind UTC
        assert!(kiritimati >= utc_today);
    }
}
