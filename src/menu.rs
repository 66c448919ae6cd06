//! Interactive menu: pick odds or results, type a date, get a file.

use crate::commands::print_summary;
use chrono::NaiveDate;
use nba_txt::config::Config;
use nba_txt::config::user_prompts::Prompter;
use nba_txt::data_fetcher::create_http_client_with_timeout;
use nba_txt::error::AppError;
use nba_txt::pipeline::{export_odds, export_results, parse_target_date};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Odds,
    Results,
    Quit,
}

fn parse_choice(input: &str) -> Option<MenuChoice> {
    match input.trim() {
        "1" => Some(MenuChoice::Odds),
        "2" => Some(MenuChoice::Results),
        "3" => Some(MenuChoice::Quit),
        _ => None,
    }
}

fn print_menu() {
    println!("========================================");
    println!(" NBA TXT TOOL");
    println!("========================================");
    println!("1) Fetch odds for a date and save as TXT");
    println!("2) Fetch results for a date and save as TXT");
    println!("3) Quit");
    println!("========================================");
}

/// Runs the menu until the user quits or stdin closes.
///
/// Fetch errors are reported and the menu continues.
pub async fn run_menu(mut config: Config) -> Result<(), AppError> {
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
    let mut prompter = Prompter::new();

    loop {
        print_menu();
        let Some(input) = prompter.line("Choice (1/2/3): ").await? else {
            break;
        };

        let choice = match parse_choice(&input) {
            Some(MenuChoice::Quit) => {
                println!("Exiting.");
                break;
            }
            Some(choice) => choice,
            None => {
                println!("Invalid choice.");
                continue;
            }
        };

        let Some(date) = ask_date(&mut prompter).await? else {
            break;
        };

        match choice {
            MenuChoice::Odds => {
                if config.require_api_key().is_err()
                    && !ask_for_api_key(&mut prompter, &mut config).await?
                {
                    println!("ERROR: No API key configured for The Odds API.");
                    continue;
                }
                run_export(export_odds(&client, &config, date).await, "odds");
            }
            MenuChoice::Results => {
                run_export(export_results(&client, &config, date).await, "results");
            }
            MenuChoice::Quit => break,
        }

        if prompter.line("\nPress Enter to continue...").await?.is_none() {
            break;
        }
    }

    Ok(())
}

/// Asks until a valid `DD.MM.YYYY` date is typed; `None` once stdin closes.
async fn ask_date(prompter: &mut Prompter) -> Result<Option<NaiveDate>, AppError> {
    while let Some(input) = prompter.line("Enter date (DD.MM.YYYY): ").await? {
        match parse_target_date(&input) {
            Ok(date) => return Ok(Some(date)),
            Err(_) => println!("Invalid date. Please use the format DD.MM.YYYY."),
        }
    }
    Ok(None)
}

fn run_export(result: Result<nba_txt::ExportSummary, AppError>, label: &str) {
    match result {
        Ok(summary) => print_summary(&summary),
        Err(e) if e.is_transport() => {
            warn!("Fetching {label} failed: {e}");
            println!("Error fetching {label}: {e}");
            println!("No file was written.");
        }
        Err(e) => {
            warn!("Exporting {label} failed: {e}");
            println!("Error: {e}");
        }
    }
}

/// Prompts for a missing API key and stores it in the config file.
///
/// Returns false if the user entered nothing.
async fn ask_for_api_key(prompter: &mut Prompter, config: &mut Config) -> Result<bool, AppError> {
    let Some(api_key) = prompter.api_key().await? else {
        return Ok(false);
    };

    let mut stored = Config::load_file_or_default().await?;
    stored.odds_api_key = Some(api_key.clone());
    match stored.save().await {
        Ok(()) => info!("Saved API key to {}", Config::get_config_path()),
        Err(e) => println!("Could not save the API key ({e}); using it for this session only."),
    }

    config.odds_api_key = Some(api_key);
    Ok(true)
}
