use crate::constants::{MAX_PLAYOFF_WEEKS, MAX_REGULAR_SEASON_WEEKS, SUPPORTED_PLAYOFF_TEAMS};
use crate::error::AppError;
use crate::schedule::BracketFormat;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - Season shape rules from [`validate_season_shape`]
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(
    regular_season_weeks: u32,
    playoff_weeks: u32,
    playoff_teams: u32,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    validate_season_shape(regular_season_weeks, playoff_weeks, playoff_teams)?;

    if let Some(log_path) = log_file_path {
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

/// Checks the season layout wherever it comes from: config, env or league file.
///
/// - Regular season runs 1 to `MAX_REGULAR_SEASON_WEEKS` weeks
/// - Playoff bracket size must be one the bracket builder supports
/// - Playoff weeks fit every bracket round and stay within `MAX_PLAYOFF_WEEKS`
pub fn validate_season_shape(
    regular_season_weeks: u32,
    playoff_weeks: u32,
    playoff_teams: u32,
) -> Result<(), AppError> {
    if regular_season_weeks == 0 {
        return Err(AppError::config_error(
            "Regular season must have at least one week",
        ));
    }
    if regular_season_weeks > MAX_REGULAR_SEASON_WEEKS {
        return Err(AppError::config_error(format!(
            "Regular season cannot exceed {MAX_REGULAR_SEASON_WEEKS} weeks, got {regular_season_weeks}"
        )));
    }

    if !SUPPORTED_PLAYOFF_TEAMS.contains(&playoff_teams) {
        return Err(AppError::config_error(format!(
            "Playoff teams must be one of {SUPPORTED_PLAYOFF_TEAMS:?}, got {playoff_teams}"
        )));
    }

    let rounds = BracketFormat::from_playoff_teams(playoff_teams)?.round_count();
    if playoff_weeks < rounds {
        return Err(AppError::config_error(format!(
            "A {playoff_teams}-team bracket needs at least {rounds} playoff weeks, got {playoff_weeks}"
        )));
    }
    if playoff_weeks > MAX_PLAYOFF_WEEKS {
        return Err(AppError::config_error(format!(
            "Playoffs cannot exceed {MAX_PLAYOFF_WEEKS} weeks, got {playoff_weeks}"
        )));
    }

    Ok(())
}
