use crate::constants::{self, env_vars, odds_query, output};
use crate::error::AppError;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod user_prompts;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::{parse_timezone, validate_config};

/// Configuration structure for the application.
///
/// Every component receives the values it needs from this struct; nothing
/// reads timezone, endpoints or credentials from ambient state.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// API key for The Odds API. Only needed for fetching odds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub odds_api_key: Option<String>,
    /// Odds endpoint, including the sport path segment.
    #[serde(default = "default_odds_api_url")]
    pub odds_api_url: String,
    /// Comma separated bookmaker regions passed to the odds endpoint.
    #[serde(default = "default_odds_regions")]
    pub odds_regions: String,
    /// Live scoreboard endpoint.
    #[serde(default = "default_scoreboard_url")]
    pub scoreboard_url: String,
    /// IANA timezone used to match games to the requested date.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Directory for the generated text files. Defaults to the working directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<String>,
    #[serde(default = "default_odds_file_prefix")]
    pub odds_file_prefix: String,
    #[serde(default = "default_results_file_prefix")]
    pub results_file_prefix: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
}

fn default_odds_api_url() -> String {
    constants::endpoints::ODDS_API_URL.to_string()
}

fn default_odds_regions() -> String {
    odds_query::DEFAULT_REGIONS.to_string()
}

fn default_scoreboard_url() -> String {
    constants::endpoints::NBA_SCOREBOARD_URL.to_string()
}

fn default_timezone() -> String {
    constants::DEFAULT_TIMEZONE.to_string()
}

fn default_odds_file_prefix() -> String {
    output::ODDS_FILE_PREFIX.to_string()
}

fn default_results_file_prefix() -> String {
    output::RESULTS_FILE_PREFIX.to_string()
}

fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            odds_api_key: None,
            odds_api_url: default_odds_api_url(),
            odds_regions: default_odds_regions(),
            scoreboard_url: default_scoreboard_url(),
            timezone: default_timezone(),
            output_dir: None,
            odds_file_prefix: default_odds_file_prefix(),
            results_file_prefix: default_results_file_prefix(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    ///
    /// A missing file is not an error: defaults are used instead. Environment
    /// variables override values from the file.
    ///
    /// # Environment Variables
    /// - `NBA_TXT_ODDS_API_KEY` - API key for The Odds API
    /// - `NBA_TXT_TIMEZONE` - Override timezone
    /// - `NBA_TXT_OUTPUT_DIR` - Override output directory
    /// - `NBA_TXT_LOG_FILE` - Override log file path
    /// - `NBA_TXT_HTTP_TIMEOUT` - Override HTTP timeout in seconds
    pub async fn load() -> Result<Self, AppError> {
        let mut config = Self::load_file_or_default().await?;

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Reads the config file as stored, or defaults if there is none.
    ///
    /// No environment overrides and no validation: this is the starting point
    /// for editing and saving the file.
    pub async fn load_file_or_default() -> Result<Self, AppError> {
        let config_path = get_config_path();
        if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await
        } else {
            Ok(Config::default())
        }
    }

    /// Applies `NBA_TXT_*` environment variable overrides in place.
    pub fn apply_env_overrides(&mut self) {
        if let Some(key) = std::env::var(env_vars::ODDS_API_KEY)
            .ok()
            .filter(|k| !k.trim().is_empty())
        {
            self.odds_api_key = Some(key.trim().to_string());
        }

        if let Ok(timezone) = std::env::var(env_vars::TIMEZONE) {
            self.timezone = timezone;
        }

        if let Ok(output_dir) = std::env::var(env_vars::OUTPUT_DIR) {
            self.output_dir = Some(output_dir);
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// The configured timezone.
    pub fn time_zone(&self) -> Result<Tz, AppError> {
        parse_timezone(&self.timezone)
    }

    /// Directory where output files are written.
    pub fn output_dir_path(&self) -> PathBuf {
        self.output_dir
            .as_deref()
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// The API key, or [`AppError::MissingApiKey`] if none is configured.
    pub fn require_api_key(&self) -> Result<&str, AppError> {
        self.odds_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(AppError::MissingApiKey)
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// The API key itself is never printed.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();
        let config = Config::load().await?;

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        if !Path::new(&config_path).exists() {
            println!("(Not created yet, using defaults)");
        }
        println!("────────────────────────────────────");
        println!("Odds API Key:");
        println!(
            "{}",
            if config.require_api_key().is_ok() {
                "(set)"
            } else {
                "(not set)"
            }
        );
        println!("────────────────────────────────────");
        println!("Timezone:");
        println!("{}", config.timezone);
        println!("────────────────────────────────────");
        println!("Output Directory:");
        println!("{}", config.output_dir_path().display());
        println!("────────────────────────────────────");
        println!("Odds URL:");
        println!("{}", config.odds_api_url);
        println!("Scoreboard URL:");
        println!("{}", config.scoreboard_url);
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", config.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{}", constants::LOG_FILE_NAME);
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path, creating the parent directory if needed.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without env overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
