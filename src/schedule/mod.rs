//! Season scheduling engine
//!
//! Pure, synchronous building blocks for a league season:
//! - [`round_robin`] pairs team indices with the circle method
//! - [`regular_season`] turns pairings into weekly [`Matchup`]s
//! - [`strength`] scores the difficulty of a team's remaining opponents
//! - [`playoffs`] seeds the post-season and advances it round by round
//! - [`validation`] checks a schedule before it is handed off
//!
//! Every function takes its inputs by reference and returns new values; no
//! argument is modified and no ambient season state is consulted.

pub mod models;
pub mod playoffs;
pub mod regular_season;
pub mod round_robin;
pub mod strength;
pub mod validation;

pub use models::{
    Lineup, Matchup, MatchupSide, PlayoffRound, ScheduleConfig, Team, TeamRecord,
};
pub use playoffs::{BracketFormat, PlayoffBracket};
pub use regular_season::{
    generate_regular_season_schedule, matchups_for_week, remaining_matchups_for_team,
    schedule_regular_season,
};
pub use round_robin::{Round, generate_round_robin, round_for_week};
pub use strength::{league_strength_of_schedule, strength_of_schedule};
pub use validation::{ScheduleValidation, validate_schedule};
