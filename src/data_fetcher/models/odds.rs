use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One event from The Odds API `/odds` endpoint.
///
/// Every field is optional; the extractor decides what a missing value means.
/// Bookmakers, markets and outcomes that do not decode are dropped one by one,
/// so a malformed entry never takes the rest of the event with it.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OddsEvent {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub commence_time: Option<String>,
    #[serde(default)]
    pub home_team: Option<String>,
    #[serde(default)]
    pub away_team: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub bookmakers: Vec<Bookmaker>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Bookmaker {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub markets: Vec<Market>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Market {
    /// Market type, `h2h` for moneyline
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub outcomes: Vec<Outcome>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Outcome {
    #[serde(default)]
    pub name: Option<String>,
    /// Decimal odds; numeric strings are accepted
    #[serde(default, deserialize_with = "lenient_price")]
    pub price: Option<f64>,
}

/// Treats an explicit JSON `null` list like a missing one.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decodes a list element by element, dropping the elements that do not fit.
///
/// A missing, null or non-list value becomes an empty list.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}

/// Reads a price given as a JSON number or a numeric string; anything else is unset.
fn lenient_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_deserialization() {
        let event: OddsEvent = serde_json::from_value(json!({
            "id": "e912304de2b2ce35b473ce2ecd3d1502",
            "sport_key": "basketball_nba",
            "commence_time": "2025-11-25T18:00:00Z",
            "home_team": "Cleveland Cavaliers",
            "away_team": "Toronto Raptors",
            "bookmakers": [{
                "key": "unibet_eu",
                "title": "Unibet",
                "last_update": "2025-11-25T10:00:00Z",
                "markets": [{
                    "key": "h2h",
                    "outcomes": [
                        {"name": "Cleveland Cavaliers", "price": 1.36},
                        {"name": "Toronto Raptors", "price": 3.48}
                    ]
                }]
            }]
        }))
        .unwrap();

        assert_eq!(event.home_team.as_deref(), Some("Cleveland Cavaliers"));
        assert_eq!(event.bookmakers.len(), 1);
        let market = &event.bookmakers[0].markets[0];
        assert_eq!(market.key.as_deref(), Some("h2h"));
        assert_eq!(market.outcomes[1].price, Some(3.48));
    }

    #[test]
    fn test_event_with_missing_and_null_fields() {
        let event: OddsEvent = serde_json::from_value(json!({
            "home_team": null,
            "bookmakers": null
        }))
        .unwrap();

        assert_eq!(event, OddsEvent::default());
    }

    #[test]
    fn test_outcome_with_null_price() {
        let outcome: Outcome =
            serde_json::from_value(json!({"name": "Boston Celtics", "price": null})).unwrap();
        assert_eq!(outcome.price, None);
    }

    #[test]
    fn test_numeric_string_price_is_read() {
        let outcome: Outcome =
            serde_json::from_value(json!({"name": "Boston Celtics", "price": " 3.60 "})).unwrap();
        assert_eq!(outcome.price, Some(3.6));

        let outcome: Outcome =
            serde_json::from_value(json!({"name": "Boston Celtics", "price": "n/a"})).unwrap();
        assert_eq!(outcome.price, None);

        let outcome: Outcome =
            serde_json::from_value(json!({"name": "Boston Celtics", "price": [1.5]})).unwrap();
        assert_eq!(outcome.price, None);
    }

    #[test]
    fn test_malformed_entries_are_dropped_individually() {
        let event: OddsEvent = serde_json::from_value(json!({
            "home_team": "Cleveland Cavaliers",
            "away_team": "Toronto Raptors",
            "bookmakers": [
                {"key": "first", "markets": [{"key": "h2h", "outcomes": [
                    {"name": "Toronto Raptors", "price": 3.48},
                    {"name": 42, "price": 1.36}
                ]}]},
                {"key": 7, "markets": []},
                {"key": "third", "markets": "h2h"},
                "not a bookmaker"
            ]
        }))
        .unwrap();

        assert_eq!(event.bookmakers.len(), 2);
        assert_eq!(event.bookmakers[0].markets[0].outcomes.len(), 1);
        assert_eq!(event.bookmakers[1].key.as_deref(), Some("third"));
        assert!(event.bookmakers[1].markets.is_empty());
    }
}
