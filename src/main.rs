// src/main.rs
mod cli;
mod commands;
mod logging;
mod menu;

use clap::Parser;
use cli::Args;
use commands::{handle_config_update_command, handle_export_command, handle_list_config_command};
use nba_txt::config::Config;
use nba_txt::error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    if args.list_config {
        return handle_list_config_command().await;
    }

    // Loaded before logging so a configured log file path is honored;
    // the error surfaces below once logging is up
    let config = Config::load().await;
    let config_log_path = config
        .as_ref()
        .ok()
        .and_then(|config| config.log_file_path.clone());

    let (log_file_path, _guard) = logging::setup_logging(&args, config_log_path.as_deref()).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if args.is_config_update() {
        return handle_config_update_command(&args).await;
    }

    let mut config = config.inspect_err(|e| tracing::error!("Failed to load config: {e}"))?;
    if let Some(output_dir) = &args.output_dir {
        config.output_dir = Some(output_dir.clone());
    }

    if args.is_noninteractive_mode() {
        let result = handle_export_command(&args, &config).await;
        if let Err(e) = &result {
            tracing::error!("Export failed: {e}");
        }
        return result;
    }

    menu::run_menu(config).await
}
