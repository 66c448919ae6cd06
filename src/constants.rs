//! Application-wide constants and default configuration values
//!
//! Endpoint URLs, file naming and date formats live here so the
//! configuration defaults and the pipeline agree on a single source.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 20;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 4;

/// Default local timezone used to match games to a calendar date
pub const DEFAULT_TIMEZONE: &str = "Europe/Berlin";

/// Upstream endpoints
pub mod endpoints {
    /// The Odds API, NBA odds for upcoming and live events
    pub const ODDS_API_URL: &str = "https://api.the-odds-api.com/v4/sports/basketball_nba/odds";

    /// Official NBA live scoreboard (only ever serves the current day)
    pub const NBA_SCOREBOARD_URL: &str =
        "https://cdn.nba.com/static/json/liveData/scoreboard/todaysScoreboard_00.json";

    /// Referer sent to the scoreboard CDN
    pub const NBA_REFERER: &str = "https://www.nba.com/";

    /// User agent sent to the scoreboard CDN, which rejects bare clients
    pub const USER_AGENT: &str = "Mozilla/5.0 (NBA-Results-Script)";
}

/// Odds API query values
pub mod odds_query {
    /// European bookmakers
    pub const DEFAULT_REGIONS: &str = "eu";

    /// Head-to-head (moneyline) market key
    pub const MONEYLINE_MARKET: &str = "h2h";

    pub const DATE_FORMAT: &str = "iso";

    pub const ODDS_FORMAT: &str = "decimal";
}

/// Output file naming
pub mod output {
    /// Prefix of the odds file, followed by `_YYYY-MM-DD.txt`
    pub const ODDS_FILE_PREFIX: &str = "NBA_Quoten";

    /// Prefix of the results file, followed by `_YYYY-MM-DD.txt`
    pub const RESULTS_FILE_PREFIX: &str = "NBA_Ergebnisse";

    pub const FILE_EXTENSION: &str = "txt";
}

/// chrono format strings
pub mod formats {
    /// Format of the target date typed by the user
    pub const INPUT_DATE: &str = "%d.%m.%Y";

    /// Date and time prefix of an odds line
    pub const LINE_DATETIME: &str = "%d.%m.%Y %H:%M";

    /// Date used in output file names
    pub const FILE_DATE: &str = "%Y-%m-%d";
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for The Odds API key
    pub const ODDS_API_KEY: &str = "NBA_TXT_ODDS_API_KEY";

    /// Environment variable for the timezone override
    pub const TIMEZONE: &str = "NBA_TXT_TIMEZONE";

    /// Environment variable for the output directory override
    pub const OUTPUT_DIR: &str = "NBA_TXT_OUTPUT_DIR";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "NBA_TXT_LOG_FILE";

    /// Environment variable for HTTP timeout in seconds
    pub const HTTP_TIMEOUT: &str = "NBA_TXT_HTTP_TIMEOUT";
}

/// Name of the application directory under the platform config dir
pub const APP_DIR_NAME: &str = "nba_txt";

/// Default log file name
pub const LOG_FILE_NAME: &str = "nba_txt.log";
