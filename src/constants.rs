//! Application-wide constants and configuration values
//!
//! Default season shape, identifier formats and neutral values used by the
//! scheduling engine live here so they are not scattered as magic numbers.

/// Default number of regular-season weeks when neither config nor league file sets one
pub const DEFAULT_REGULAR_SEASON_WEEKS: u32 = 14;

/// Default number of playoff weeks
pub const DEFAULT_PLAYOFF_WEEKS: u32 = 3;

/// Default playoff bracket size
pub const DEFAULT_PLAYOFF_TEAMS: u32 = 6;

/// Longest regular season the config accepts
pub const MAX_REGULAR_SEASON_WEEKS: u32 = 52;

/// Most weeks that can be reserved for the playoffs
pub const MAX_PLAYOFF_WEEKS: u32 = 8;

/// Bracket sizes the playoff builder knows how to seed
pub const SUPPORTED_PLAYOFF_TEAMS: [u32; 2] = [4, 6];

/// Strength of schedule used when there is nothing to measure
pub const NEUTRAL_STRENGTH_OF_SCHEDULE: f64 = 0.5;

/// Minimum number of teams a round-robin can be built for
pub const MIN_TEAMS: usize = 2;

/// Default log file name inside the log directory
pub const LOG_FILE_NAME: &str = "fantasy_schedule.log";

/// Name of the application directory under the platform config dir
pub const APP_DIR_NAME: &str = "fantasy_schedule";

/// Environment variables that override config file values
pub mod env_vars {
    pub const LOG_FILE: &str = "FANTASY_SCHEDULE_LOG_FILE";
    pub const REGULAR_SEASON_WEEKS: &str = "FANTASY_SCHEDULE_WEEKS";
    pub const PLAYOFF_WEEKS: &str = "FANTASY_SCHEDULE_PLAYOFF_WEEKS";
    pub const PLAYOFF_TEAMS: &str = "FANTASY_SCHEDULE_PLAYOFF_TEAMS";
}

/// Matchup identifier formats
pub mod matchup_ids {
    /// Regular-season matchup id, `n` is the 1-based position within the week
    pub fn regular(week: u32, n: usize) -> String {
        format!("week{week}_match{n}")
    }

    /// Quarterfinal and semifinal matchup id
    pub fn playoff(week: u32, n: usize) -> String {
        format!("week{week}_playoff{n}")
    }

    pub fn championship(week: u32) -> String {
        format!("week{week}_championship")
    }

    pub fn consolation(week: u32) -> String {
        format!("week{week}_consolation")
    }
}
