use crate::cli::Args;
use nba_txt::config::Config;
use nba_txt::data_fetcher::create_http_client_with_timeout;
use nba_txt::error::AppError;
use nba_txt::output::RecordKind;
use nba_txt::pipeline::{ExportSummary, export_odds, export_results, parse_target_date, today};

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--set-api-key, --set-timezone,
/// --set-output-dir, --set-log-file, --clear-log-file).
///
/// Edits the config file as stored; environment overrides are not written back.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load_file_or_default().await?;

    if let Some(api_key) = &args.new_api_key {
        config.odds_api_key = Some(api_key.trim().to_string()).filter(|k| !k.is_empty());
    }

    if let Some(timezone) = &args.new_timezone {
        config.timezone = timezone.trim().to_string();
    }

    if let Some(output_dir) = &args.new_output_dir {
        config.output_dir = Some(output_dir.clone()).filter(|d| !d.is_empty());
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save().await?;
    println!("Config updated successfully!");

    Ok(())
}

/// Handles --odds and --results: fetch, write and report, then exit.
pub async fn handle_export_command(args: &Args, config: &Config) -> Result<(), AppError> {
    let date = match &args.date {
        Some(input) => parse_target_date(input)?,
        None => today(config)?,
    };
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;

    if args.odds {
        let summary = export_odds(&client, config, date).await?;
        print_summary(&summary);
    }

    if args.results {
        let summary = export_results(&client, config, date).await?;
        print_summary(&summary);
    }

    Ok(())
}

/// Tells the user where an export went.
pub fn print_summary(summary: &ExportSummary) {
    let date = summary.date.format("%d.%m.%Y");
    match summary.kind {
        RecordKind::Odds => {
            if summary.lines_written == 0 {
                println!("No odds found for {date}.");
            }
            println!(
                "{} odds saved to: {}",
                summary.lines_written,
                summary.path.display()
            );
        }
        RecordKind::Results => {
            if summary.lines_written == 0 {
                println!("No results found for {date}.");
            }
            println!(
                "{} results saved to: {}",
                summary.lines_written,
                summary.path.display()
            );
            println!("Line format: Awayteam : Hometeam AwayScore:HomeScore");
        }
    }
}
