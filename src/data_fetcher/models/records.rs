use chrono::DateTime;
use chrono_tz::Tz;

/// Moneyline odds for one game, ready for formatting.
#[derive(Debug, Clone, PartialEq)]
pub struct GameOdds {
    /// Tip-off in the configured local timezone
    pub local_datetime: DateTime<Tz>,
    pub away_team: String,
    pub home_team: String,
    /// Decimal odds for an away win
    pub odds_away: f64,
    /// Decimal odds for a home win
    pub odds_home: f64,
}

/// Score of one game, ready for formatting.
#[derive(Debug, Clone, PartialEq)]
pub struct GameResult {
    pub local_datetime: DateTime<Tz>,
    pub away_team: String,
    pub home_team: String,
    pub score_away: u32,
    pub score_home: u32,
}
