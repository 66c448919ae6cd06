use super::{DateFilter, SkipReason, collect_records, decode_record};
use crate::constants::odds_query::MONEYLINE_MARKET;
use crate::data_fetcher::models::{Bookmaker, GameOdds, OddsEvent};
use serde_json::Value;

/// Extracts moneyline odds for every event on the target date.
///
/// Events keep their upstream order. Events without a complete quote, with
/// unreadable start times or missing team names are left out.
pub fn extract_odds(events: &[Value], filter: &DateFilter) -> Vec<GameOdds> {
    collect_records("odds", events, |raw| {
        let event: OddsEvent = decode_record(raw)?;
        extract_game_odds(&event, filter)
    })
}

/// Builds a [`GameOdds`] from one event, or explains why the event is skipped.
pub fn extract_game_odds(event: &OddsEvent, filter: &DateFilter) -> Result<GameOdds, SkipReason> {
    let local_datetime = filter.local_start(event.commence_time.as_deref())?;

    let (Some(home_team), Some(away_team)) =
        (non_blank(&event.home_team), non_blank(&event.away_team))
    else {
        return Err(SkipReason::MissingTeam);
    };

    let (odds_away, odds_home) = find_first_complete_quote(&event.bookmakers, away_team, home_team)
        .ok_or(SkipReason::IncompleteOdds)?;

    Ok(GameOdds {
        local_datetime,
        away_team: away_team.to_string(),
        home_team: home_team.to_string(),
        odds_away,
        odds_home,
    })
}

/// Returns `(away, home)` prices of the first bookmaker that quotes both teams
/// in its head-to-head market.
///
/// Bookmakers are taken in the order given. This is neither the best nor an
/// average price: a bookmaker with only one side quoted is passed over and
/// prices are never combined across bookmakers.
pub fn find_first_complete_quote(
    bookmakers: &[Bookmaker],
    away_team: &str,
    home_team: &str,
) -> Option<(f64, f64)> {
    bookmakers
        .iter()
        .find_map(|bookmaker| bookmaker_quote(bookmaker, away_team, home_team))
}

fn bookmaker_quote(bookmaker: &Bookmaker, away_team: &str, home_team: &str) -> Option<(f64, f64)> {
    let mut odds_away = None;
    let mut odds_home = None;

    let moneyline_markets = bookmaker
        .markets
        .iter()
        .filter(|market| market.key.as_deref() == Some(MONEYLINE_MARKET));

    for market in moneyline_markets {
        for outcome in &market.outcomes {
            let (Some(name), Some(price)) = (outcome.name.as_deref(), outcome.price) else {
                continue;
            };
            if !(price.is_finite() && price > 0.0) {
                continue;
            }
            if name == away_team {
                odds_away.get_or_insert(price);
            } else if name == home_team {
                odds_home.get_or_insert(price);
            }
        }

        if let (Some(away), Some(home)) = (odds_away, odds_home) {
            return Some((away, home));
        }
    }

    None
}

fn non_blank(name: &Option<String>) -> Option<&str> {
    name.as_deref().filter(|n| !n.trim().is_empty())
}
