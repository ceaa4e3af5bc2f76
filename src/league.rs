//! League file loading
//!
//! A league file is TOML: optional season shape overrides followed by one
//! `[[teams]]` table per team. Team order in the file is the standings order
//! used for playoff seeding.
//!
//! ```toml
//! regular_season_weeks = 13
//! playoff_teams = 4
//!
//! [[teams]]
//! id = "hawks"
//! name = "Gridiron Hawks"
//! owner = "Sam"
//! wins = 9
//! losses = 4
//! ```

use crate::config::Config;
use crate::error::AppError;
use crate::schedule::{ScheduleConfig, Team, TeamRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tokio::fs;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueTeam {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub ties: u32,
    #[serde(default)]
    pub points_for: f64,
    #[serde(default)]
    pub points_against: f64,
}

impl From<&LeagueTeam> for Team {
    fn from(team: &LeagueTeam) -> Self {
        Team {
            id: team.id.clone(),
            name: team.name.clone(),
            owner: team.owner.clone(),
            record: TeamRecord::new(team.wins, team.losses, team.ties),
            points_for: team.points_for,
            points_against: team.points_against,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LeagueFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regular_season_weeks: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playoff_weeks: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playoff_teams: Option<u32>,
    #[serde(default)]
    pub teams: Vec<LeagueTeam>,
}

impl LeagueFile {
    /// Reads and parses a league file.
    pub async fn load(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await.map_err(|e| {
            AppError::league_file_error(format!("Cannot read league file '{path}': {e}"))
        })?;
        let league = Self::parse(&content)?;
        info!("Loaded {} teams from {}", league.teams.len(), path);
        Ok(league)
    }

    /// Parses league TOML and checks team ids.
    ///
    /// # Errors
    /// * `AppError::TomlDeserialize` - malformed TOML
    /// * `AppError::LeagueFile` - empty or repeated team ids
    pub fn parse(content: &str) -> Result<Self, AppError> {
        let league: LeagueFile = toml::from_str(content)?;

        let mut seen = HashSet::new();
        for team in &league.teams {
            if team.id.trim().is_empty() {
                return Err(AppError::league_file_error(format!(
                    "Team '{}' has an empty id",
                    team.name
                )));
            }
            if !seen.insert(team.id.as_str()) {
                return Err(AppError::league_file_error(format!(
                    "Team id '{}' appears more than once",
                    team.id
                )));
            }
        }

        Ok(league)
    }

    /// Teams in file order.
    pub fn teams(&self) -> Vec<Team> {
        self.teams.iter().map(Team::from).collect()
    }

    /// Builds the schedule config, taking any season shape the file leaves
    /// out from `defaults`.
    pub fn schedule_config(&self, defaults: &Config) -> ScheduleConfig {
        ScheduleConfig::new(
            self.teams(),
            self.regular_season_weeks
                .unwrap_or(defaults.regular_season_weeks),
            self.playoff_weeks.unwrap_or(defaults.playoff_weeks),
            self.playoff_teams.unwrap_or(defaults.playoff_teams),
        )
    }
}
