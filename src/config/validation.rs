use super::Config;
use crate::error::AppError;
use chrono_tz::Tz;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - Endpoint URLs must use http:// or https://
/// - Timezone must be a known IANA zone name
/// - HTTP timeout must be at least one second
/// - File prefixes cannot be empty or contain path separators
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    validate_url("Odds API URL", &config.odds_api_url)?;
    validate_url("Scoreboard URL", &config.scoreboard_url)?;

    parse_timezone(&config.timezone)?;

    if config.http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least 1 second",
        ));
    }

    validate_prefix("Odds file prefix", &config.odds_file_prefix)?;
    validate_prefix("Results file prefix", &config.results_file_prefix)?;

    if config.odds_regions.trim().is_empty() {
        return Err(AppError::config_error("Odds regions cannot be empty"));
    }

    if let Some(log_path) = &config.log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

/// Parses an IANA timezone name such as `Europe/Berlin`.
pub fn parse_timezone(name: &str) -> Result<Tz, AppError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| AppError::InvalidTimezone(name.to_string()))
}

fn validate_url(label: &str, url: &str) -> Result<(), AppError> {
    if url.is_empty() {
        return Err(AppError::config_error(format!("{label} cannot be empty")));
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(AppError::config_error(format!(
            "{label} must start with http:// or https://"
        )));
    }
    Ok(())
}

fn validate_prefix(label: &str, prefix: &str) -> Result<(), AppError> {
    if prefix.trim().is_empty() {
        return Err(AppError::config_error(format!("{label} cannot be empty")));
    }
    if prefix.contains('/') || prefix.contains('\\') {
        return Err(AppError::config_error(format!(
            "{label} cannot contain path separators"
        )));
    }
    Ok(())
}
