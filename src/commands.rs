use crate::cli::Args;
use fantasy_schedule::config::Config;
use fantasy_schedule::config::validation::validate_season_shape;
use fantasy_schedule::constants::MAX_REGULAR_SEASON_WEEKS;
use fantasy_schedule::display::{
    render_bracket_round, render_schedule, render_strength_of_schedule,
};
use fantasy_schedule::error::AppError;
use fantasy_schedule::league::LeagueFile;
use fantasy_schedule::schedule::{
    Matchup, PlayoffBracket, ScheduleConfig, generate_regular_season_schedule,
    remaining_matchups_for_team, strength_of_schedule, validate_schedule,
};
use serde::Serialize;
use std::io::stdout;
use tracing::{error, info};

/// Validates command line argument combinations.
///
/// Returns an error if incompatible arguments are used together.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    if args.bracket && args.sos_team.is_some() {
        return Err(AppError::config_error(
            "Cannot use --bracket and --sos together",
        ));
    }
    if args.from_week == 0 {
        return Err(AppError::config_error("--from-week must be at least 1"));
    }
    if let Some(weeks) = args.weeks
        && !(1..=MAX_REGULAR_SEASON_WEEKS).contains(&weeks)
    {
        return Err(AppError::config_error(format!(
            "--weeks must be between 1 and {MAX_REGULAR_SEASON_WEEKS}"
        )));
    }
    Ok(())
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--set-log-file, --clear-log-file).
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    update_config_at(args, &Config::get_config_path()).await?;
    println!("Config updated successfully!");
    Ok(())
}

/// Rewrites the saved config at `path`. Environment overrides are never
/// written back, and an unreadable or invalid file is reported instead of
/// being replaced with defaults.
async fn update_config_at(args: &Args, path: &str) -> Result<Config, AppError> {
    let mut config = Config::load_saved_from_path(path).await?;

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save_to_path(path).await?;
    Ok(config)
}

/// Loads the league named by `--league` and folds in `--weeks`.
pub async fn load_schedule_config(
    args: &Args,
    config: &Config,
) -> Result<ScheduleConfig, AppError> {
    let path = args
        .league
        .as_deref()
        .ok_or_else(|| AppError::config_error("A league file is required (--league FILE)"))?;

    let league = LeagueFile::load(path).await?;
    let mut schedule_config = league.schedule_config(config);
    if let Some(weeks) = args.weeks {
        schedule_config.regular_season_weeks = weeks;
    }
    validate_season_shape(
        schedule_config.regular_season_weeks,
        schedule_config.playoff_weeks,
        schedule_config.playoff_teams,
    )?;
    Ok(schedule_config)
}

/// Fails with `AppError::InvalidSchedule` when validation has findings.
fn ensure_valid(matchups: &[Matchup]) -> Result<(), AppError> {
    let validation = validate_schedule(matchups);
    if validation.is_valid {
        return Ok(());
    }
    for finding in &validation.errors {
        error!("{finding}");
    }
    Err(AppError::InvalidSchedule {
        errors: validation.errors.len(),
    })
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Generates, validates and prints the regular season.
pub fn handle_schedule_command(
    args: &Args,
    schedule_config: &ScheduleConfig,
) -> Result<(), AppError> {
    let schedule = generate_regular_season_schedule(schedule_config)?;
    ensure_valid(&schedule)?;

    if args.json {
        print_json(&schedule)
    } else {
        render_schedule(&mut stdout(), &schedule, &schedule_config.teams)
    }
}

/// Seeds the bracket from league order and prints its opening round.
pub fn handle_bracket_command(
    args: &Args,
    schedule_config: &ScheduleConfig,
) -> Result<(), AppError> {
    let bracket = PlayoffBracket::new(&schedule_config.teams, schedule_config)?;
    let opening_round = bracket.first_round();
    ensure_valid(&opening_round)?;

    if args.json {
        print_json(&opening_round)
    } else {
        render_bracket_round(
            &mut stdout(),
            bracket.seeds(),
            &opening_round,
            &schedule_config.teams,
        )
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StrengthOfScheduleReport<'a> {
    team_id: &'a str,
    from_week: u32,
    remaining_matchups: usize,
    strength_of_schedule: f64,
}

/// Computes strength of schedule for one team over the generated season.
pub fn handle_sos_command(
    args: &Args,
    schedule_config: &ScheduleConfig,
    team_id: &str,
) -> Result<(), AppError> {
    if !schedule_config.teams.iter().any(|t| t.id == team_id) {
        return Err(AppError::config_error(format!(
            "Team '{team_id}' is not in the league"
        )));
    }

    let schedule = generate_regular_season_schedule(schedule_config)?;
    ensure_valid(&schedule)?;

    let remaining = remaining_matchups_for_team(&schedule, team_id, args.from_week);
    let sos = strength_of_schedule(team_id, &remaining, &schedule_config.teams);
    info!(
        "Strength of schedule for {} from week {}: {:.3}",
        team_id, args.from_week, sos
    );

    if args.json {
        print_json(&StrengthOfScheduleReport {
            team_id,
            from_week: args.from_week,
            remaining_matchups: remaining.len(),
            strength_of_schedule: sos,
        })
    } else {
        render_strength_of_schedule(
            &mut stdout(),
            team_id,
            args.from_week,
            sos,
            &schedule_config.teams,
        )
    }
}
