//! Fantasy League Season Scheduler Library
//!
//! This library builds the regular-season matchup calendar for a fantasy
//! football league, seeds and advances its playoff bracket, scores strength
//! of schedule and validates schedules before they are stored.
//!
//! # Examples
//!
//! ```rust
//! use fantasy_schedule::schedule::{
//!     PlayoffBracket, ScheduleConfig, Team, generate_regular_season_schedule,
//!     validate_schedule,
//! };
//!
//! # fn main() -> Result<(), fantasy_schedule::AppError> {
//! let teams: Vec<Team> = (1..=8)
//!     .map(|i| Team::new(format!("team{i}"), format!("Team {i}"), format!("Owner {i}")))
//!     .collect();
//! let config = ScheduleConfig::new(teams.clone(), 14, 3, 6);
//!
//! // Build and check the regular season
//! let schedule = generate_regular_season_schedule(&config)?;
//! assert_eq!(schedule.len(), 14 * 4);
//! assert!(validate_schedule(&schedule).is_valid);
//!
//! // Seed the playoffs once standings are known
//! let bracket = PlayoffBracket::new(&teams, &config)?;
//! let quarterfinals = bracket.first_round();
//! let winners = vec!["team3".to_string(), "team5".to_string()];
//! let semifinals = bracket.advance(&quarterfinals, &winners)?;
//! assert_eq!(semifinals.len(), 2);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod display;
pub mod error;
pub mod league;
pub mod schedule;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::AppError;
pub use league::LeagueFile;
pub use schedule::{
    Matchup, PlayoffBracket, PlayoffRound, ScheduleConfig, ScheduleValidation, Team, TeamRecord,
    generate_regular_season_schedule, strength_of_schedule, validate_schedule,
};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
