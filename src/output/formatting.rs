//! Text line formats of the odds and results files.
//!
//! Odds:    `25.11.2025 19:00 | Toronto Raptors : Cleveland Cavaliers | 3,48 | 1,36`
//! Results: `LA Clippers : Los Angeles Lakers 118:135`
//!
//! The parsers split a line back into its fields. They assume team names do
//! not contain the ` | ` or ` : ` delimiters.

use crate::constants::formats::LINE_DATETIME;
use crate::data_fetcher::models::{GameOdds, GameResult};
use chrono::NaiveDateTime;

const FIELD_SEPARATOR: &str = " | ";
const TEAM_SEPARATOR: &str = " : ";

/// Formats a decimal with two fraction digits and a comma, `1.25` → `"1,25"`.
pub fn format_decimal_comma(value: f64) -> String {
    format!("{value:.2}").replace('.', ",")
}

/// `<DD.MM.YYYY HH:MM> | <away> : <home> | <odds_away> | <odds_home>`
pub fn format_odds_line(odds: &GameOdds) -> String {
    format!(
        "{}{FIELD_SEPARATOR}{}{TEAM_SEPARATOR}{}{FIELD_SEPARATOR}{}{FIELD_SEPARATOR}{}",
        odds.local_datetime.format(LINE_DATETIME),
        odds.away_team,
        odds.home_team,
        format_decimal_comma(odds.odds_away),
        format_decimal_comma(odds.odds_home),
    )
}

/// `<away> : <home> <score_away>:<score_home>`, without date or time.
pub fn format_result_line(result: &GameResult) -> String {
    format!(
        "{}{TEAM_SEPARATOR}{} {}:{}",
        result.away_team, result.home_team, result.score_away, result.score_home
    )
}

/// Fields of a parsed odds line.
#[derive(Debug, Clone, PartialEq)]
pub struct OddsLine {
    pub local_datetime: NaiveDateTime,
    pub away_team: String,
    pub home_team: String,
    pub odds_away: f64,
    pub odds_home: f64,
}

/// Fields of a parsed result line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultLine {
    pub away_team: String,
    pub home_team: String,
    pub score_away: u32,
    pub score_home: u32,
}

pub fn parse_odds_line(line: &str) -> Option<OddsLine> {
    let mut fields = line.split(FIELD_SEPARATOR);
    let datetime = fields.next()?;
    let teams = fields.next()?;
    let odds_away = fields.next()?;
    let odds_home = fields.next()?;
    if fields.next().is_some() {
        return None;
    }

    let (away_team, home_team) = teams.split_once(TEAM_SEPARATOR)?;

    Some(OddsLine {
        local_datetime: NaiveDateTime::parse_from_str(datetime, LINE_DATETIME).ok()?,
        away_team: away_team.to_string(),
        home_team: home_team.to_string(),
        odds_away: parse_decimal_comma(odds_away)?,
        odds_home: parse_decimal_comma(odds_home)?,
    })
}

pub fn parse_result_line(line: &str) -> Option<ResultLine> {
    let (teams, score) = line.rsplit_once(' ')?;
    let (score_away, score_home) = score.split_once(':')?;
    let (away_team, home_team) = teams.split_once(TEAM_SEPARATOR)?;

    Some(ResultLine {
        away_team: away_team.to_string(),
        home_team: home_team.to_string(),
        score_away: score_away.parse().ok()?,
        score_home: score_home.parse().ok()?,
    })
}

fn parse_decimal_comma(text: &str) -> Option<f64> {
    text.replace(',', ".").parse().ok()
}
