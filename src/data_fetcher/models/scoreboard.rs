use super::odds::null_as_empty;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Top level of the NBA live scoreboard document.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScoreboardResponse {
    #[serde(default)]
    pub scoreboard: Option<Scoreboard>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Scoreboard {
    /// Day the scoreboard describes, `YYYY-MM-DD` (US Eastern)
    #[serde(rename = "gameDate", default)]
    pub game_date: Option<String>,
    /// Raw game objects; each one is decoded into a [`ScoreboardGame`] on its own
    /// so a single malformed game does not fail the whole scoreboard.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub games: Vec<Value>,
}

impl ScoreboardResponse {
    /// Games of the scoreboard, empty when the document has no scoreboard.
    pub fn into_games(self) -> Vec<Value> {
        self.scoreboard.map(|s| s.games).unwrap_or_default()
    }

    pub fn game_date(&self) -> Option<&str> {
        self.scoreboard.as_ref()?.game_date.as_deref()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ScoreboardGame {
    #[serde(rename = "gameId", default)]
    pub game_id: Option<String>,
    #[serde(rename = "gameTimeUTC", default)]
    pub game_time_utc: Option<String>,
    #[serde(rename = "homeTeam", default)]
    pub home_team: Option<ScoreboardTeam>,
    #[serde(rename = "awayTeam", default)]
    pub away_team: Option<ScoreboardTeam>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ScoreboardTeam {
    #[serde(rename = "teamCity", default)]
    pub team_city: Option<String>,
    #[serde(rename = "teamName", default)]
    pub team_name: Option<String>,
    /// Usually an integer, but kept untyped: the feed has been seen sending
    /// strings and nulls here.
    #[serde(default)]
    pub score: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scoreboard_deserialization() {
        let response: ScoreboardResponse = serde_json::from_value(json!({
            "meta": {"version": 1},
            "scoreboard": {
                "gameDate": "2025-11-24",
                "leagueId": "00",
                "games": [{
                    "gameId": "0022500300",
                    "gameTimeUTC": "2025-11-25T00:30:00Z",
                    "homeTeam": {"teamCity": "Los Angeles", "teamName": "Lakers", "score": 135},
                    "awayTeam": {"teamCity": "LA", "teamName": "Clippers", "score": 118}
                }]
            }
        }))
        .unwrap();

        assert_eq!(response.game_date(), Some("2025-11-24"));
        let games = response.into_games();
        assert_eq!(games.len(), 1);

        let game: ScoreboardGame = serde_json::from_value(games[0].clone()).unwrap();
        assert_eq!(game.game_time_utc.as_deref(), Some("2025-11-25T00:30:00Z"));
        let home = game.home_team.unwrap();
        assert_eq!(home.team_name.as_deref(), Some("Lakers"));
        assert_eq!(home.score, Some(json!(135)));
    }

    #[test]
    fn test_missing_scoreboard_yields_no_games() {
        let response: ScoreboardResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(response.game_date(), None);
        assert!(response.into_games().is_empty());
    }

    #[test]
    fn test_team_with_null_score() {
        let team: ScoreboardTeam =
            serde_json::from_value(json!({"teamCity": "Boston", "score": null})).unwrap();
        assert_eq!(team.team_name, None);
        assert_eq!(team.score, None);
    }
}
