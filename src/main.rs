// src/main.rs
mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Args, is_config_command};
use commands::{
    handle_bracket_command, handle_config_update_command, handle_list_config_command,
    handle_schedule_command, handle_sos_command, load_schedule_config, validate_args,
};
use fantasy_schedule::config::Config;
use fantasy_schedule::error::AppError;
use logging::setup_logging;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    validate_args(&args)?;

    // Config is loaded before logging so a configured log path is honoured
    let config = Config::load().await;

    // The guard must be kept alive for the duration of the program
    let (log_file_path, _guard) = setup_logging(&args, config.as_ref().ok()).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if args.list_config {
        return handle_list_config_command().await;
    }

    if is_config_command(&args) {
        return handle_config_update_command(&args).await;
    }

    let config = config?;
    let schedule_config = load_schedule_config(&args, &config).await?;

    if args.bracket {
        handle_bracket_command(&args, &schedule_config)
    } else if let Some(team_id) = args.sos_team.as_deref() {
        handle_sos_command(&args, &schedule_config, team_id)
    } else {
        handle_schedule_command(&args, &schedule_config)
    }
}
