pub mod odds;
pub mod records;
pub mod scoreboard;

pub use odds::{Bookmaker, Market, OddsEvent, Outcome};
pub use records::{GameOdds, GameResult};
pub use scoreboard::{Scoreboard, ScoreboardGame, ScoreboardResponse, ScoreboardTeam};
