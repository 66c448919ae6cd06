use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// NBA odds and results as text files
///
/// Fetches moneyline odds (The Odds API) or final scores (NBA live scoreboard)
/// for one date and saves one line per game:
///
///   NBA_Quoten_YYYY-MM-DD.txt      25.11.2025 19:00 | Away : Home | 3,48 | 1,36
///   NBA_Ergebnisse_YYYY-MM-DD.txt  Away : Home 118:135
///
/// Without --odds or --results an interactive menu is shown.
#[derive(Parser, Debug)]
#[command(version, about, long_about)]
#[command(styles = get_styles())]
pub struct Args {
    /// Fetch odds for the date and write the odds file, then exit.
    #[arg(long)]
    pub odds: bool,

    /// Fetch results for the date and write the results file, then exit.
    /// The scoreboard only serves the current day.
    #[arg(long)]
    pub results: bool,

    /// Date in DD.MM.YYYY format. Defaults to today in the configured timezone.
    #[arg(short, long, value_name = "DD.MM.YYYY")]
    pub date: Option<String>,

    /// Write output files to this directory instead of the configured one.
    #[arg(short = 'o', long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<String>,

    /// Save The Odds API key in the config file.
    #[arg(long = "set-api-key", help_heading = "Configuration", value_name = "KEY")]
    pub new_api_key: Option<String>,

    /// Save the timezone used to match games to dates (IANA name, e.g. Europe/Berlin).
    #[arg(long = "set-timezone", help_heading = "Configuration", value_name = "TZ")]
    pub new_timezone: Option<String>,

    /// Save the default output directory in the config file.
    #[arg(long = "set-output-dir", help_heading = "Configuration", value_name = "DIR")]
    pub new_output_dir: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also write log output to the terminal.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

impl Args {
    /// True when any option that edits the config file is set.
    pub fn is_config_update(&self) -> bool {
        self.new_api_key.is_some()
            || self.new_timezone.is_some()
            || self.new_output_dir.is_some()
            || self.new_log_file_path.is_some()
            || self.clear_log_file_path
    }

    /// True when the program should run once and exit instead of showing the menu.
    pub fn is_noninteractive_mode(&self) -> bool {
        self.odds || self.results || self.list_config || self.is_config_update()
    }
}
