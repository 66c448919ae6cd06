pub mod file_writer;
pub mod formatting;

pub use file_writer::{FileWriter, RecordKind};
pub use formatting::{
    OddsLine, ResultLine, format_decimal_comma, format_odds_line, format_result_line,
    parse_odds_line, parse_result_line,
};
