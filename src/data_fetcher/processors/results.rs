use super::{DateFilter, SkipReason, collect_records, decode_record};
use crate::data_fetcher::models::{GameResult, ScoreboardGame, ScoreboardTeam};
use serde_json::Value;
use tracing::debug;

/// Extracts results for every scoreboard game on the target date, in scoreboard order.
pub fn extract_results(games: &[Value], filter: &DateFilter) -> Vec<GameResult> {
    collect_records("result", games, |raw| {
        let game: ScoreboardGame = decode_record(raw)?;
        extract_game_result(&game, filter)
    })
}

/// Builds a [`GameResult`] from one scoreboard game.
///
/// Only the start time can cause a skip. Missing team data gives empty names
/// and unreadable scores give 0:0.
pub fn extract_game_result(
    game: &ScoreboardGame,
    filter: &DateFilter,
) -> Result<GameResult, SkipReason> {
    let local_datetime = filter.local_start(game.game_time_utc.as_deref())?;

    let home = game.home_team.as_ref();
    let away = game.away_team.as_ref();

    let (score_away, score_home) = parse_scores(away, home).unwrap_or_else(|| {
        debug!(
            "Unreadable score for game {}, using 0:0",
            game.game_id.as_deref().unwrap_or("?")
        );
        (0, 0)
    });

    Ok(GameResult {
        local_datetime,
        away_team: full_team_name(away),
        home_team: full_team_name(home),
        score_away,
        score_home,
    })
}

/// Parses `(away, home)` scores; `None` if either side is not a non-negative integer.
pub fn parse_scores(
    away: Option<&ScoreboardTeam>,
    home: Option<&ScoreboardTeam>,
) -> Option<(u32, u32)> {
    Some((team_score(away)?, team_score(home)?))
}

fn team_score(team: Option<&ScoreboardTeam>) -> Option<u32> {
    match team?.score.as_ref()? {
        Value::Number(number) => number.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(text) => text.trim().parse::<u32>().ok(),
        _ => None,
    }
}

/// City and nickname joined by a space, e.g. "Los Angeles Lakers".
fn full_team_name(team: Option<&ScoreboardTeam>) -> String {
    let Some(team) = team else {
        return String::new();
    };
    let city = team.team_city.as_deref().unwrap_or("").trim();
    let name = team.team_name.as_deref().unwrap_or("").trim();
    format!("{city} {name}").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::processors::TimeNormalizer;
    use chrono::{NaiveDate, Timelike};
    use serde_json::json;

    fn filter() -> DateFilter {
        DateFilter::new(
            TimeNormalizer::new(chrono_tz::Europe::Berlin),
            NaiveDate::from_ymd_opt(2025, 11, 25).unwrap(),
        )
    }

    fn team(city: &str, name: &str, score: Value) -> ScoreboardTeam {
        ScoreboardTeam {
            team_city: Some(city.to_string()),
            team_name: Some(name.to_string()),
            score: Some(score),
        }
    }

    fn game(away: ScoreboardTeam, home: ScoreboardTeam) -> ScoreboardGame {
        ScoreboardGame {
            game_id: Some("0022500300".to_string()),
            game_time_utc: Some("2025-11-25T19:00:00Z".to_string()),
            home_team: Some(home),
            away_team: Some(away),
        }
    }

    #[test]
    fn test_extracts_full_names_and_scores() {
        let result = extract_game_result(
            &game(
                team("LA", "Clippers", json!(118)),
                team("Los Angeles", "Lakers", json!(135)),
            ),
            &filter(),
        )
        .unwrap();

        assert_eq!(result.away_team, "LA Clippers");
        assert_eq!(result.home_team, "Los Angeles Lakers");
        assert_eq!((result.score_away, result.score_home), (118, 135));
        assert_eq!(result.local_datetime.hour(), 20);
    }

    #[test]
    fn test_numeric_string_scores_are_accepted() {
        let result = extract_game_result(
            &game(team("A", "B", json!(" 99 ")), team("C", "D", json!("101"))),
            &filter(),
        )
        .unwrap();
        assert_eq!((result.score_away, result.score_home), (99, 101));
    }

    #[test]
    fn test_unreadable_score_zeroes_both_sides() {
        for bad in [json!(null), json!("TBD"), json!(-3), json!(98.5), json!([1])] {
            let result = extract_game_result(
                &game(team("A", "B", bad.clone()), team("C", "D", json!(100))),
                &filter(),
            )
            .unwrap();
            assert_eq!(
                (result.score_away, result.score_home),
                (0, 0),
                "score {bad} should zero both sides"
            );
        }
    }

    #[test]
    fn test_missing_score_field_zeroes_both_sides() {
        let mut home = team("C", "D", json!(100));
        home.score = None;
        let result = extract_game_result(&game(team("A", "B", json!(90)), home), &filter()).unwrap();
        assert_eq!((result.score_away, result.score_home), (0, 0));
    }

    #[test]
    fn test_partial_and_missing_team_names() {
        let away = ScoreboardTeam {
            team_city: None,
            team_name: Some(" Celtics ".to_string()),
            score: Some(json!(1)),
        };
        let mut game = game(away, team("", "", json!(2)));
        let result = extract_game_result(&game, &filter()).unwrap();
        assert_eq!(result.away_team, "Celtics");
        assert_eq!(result.home_team, "");

        game.home_team = None;
        let result = extract_game_result(&game, &filter()).unwrap();
        assert_eq!(result.home_team, "");
        assert_eq!((result.score_away, result.score_home), (0, 0));
    }

    #[test]
    fn test_games_on_other_dates_are_skipped() {
        let mut other = game(team("A", "B", json!(1)), team("C", "D", json!(2)));
        other.game_time_utc = Some("2025-11-25T23:30:00Z".to_string());
        assert!(matches!(
            extract_game_result(&other, &filter()),
            Err(SkipReason::OtherDate(_))
        ));

        other.game_time_utc = None;
        assert_eq!(
            extract_game_result(&other, &filter()),
            Err(SkipReason::MissingTime)
        );
    }

    #[test]
    fn test_extract_results_preserves_order() {
        let games = vec![
            json!({"gameTimeUTC": "2025-11-25T18:00:00Z",
                   "awayTeam": {"teamCity": "Team", "teamName": "A", "score": null},
                   "homeTeam": {"teamCity": "Team", "teamName": "B", "score": null}}),
            json!({"gameTimeUTC": "not-a-time"}),
            json!({"gameTimeUTC": "2025-11-25T01:00:00Z",
                   "awayTeam": {"teamCity": "Team", "teamName": "C", "score": 80},
                   "homeTeam": {"teamCity": "Team", "teamName": "D", "score": 82}}),
        ];

        let results = extract_results(&games, &filter());
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].away_team, "Team A");
        assert_eq!((results[0].score_away, results[0].score_home), (0, 0));
        assert_eq!(results[1].home_team, "Team D");
    }
}
