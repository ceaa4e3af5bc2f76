use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    // Schedule configuration errors
    #[error("Round-robin scheduling requires an even number of teams, got {count}")]
    OddTeamCount { count: usize },

    #[error("At least 2 teams are required to build a schedule, got {count}")]
    NotEnoughTeams { count: usize },

    #[error("Unsupported playoff bracket size: {count} (supported sizes are 4 and 6)")]
    UnsupportedPlayoffTeams { count: u32 },

    #[error("Playoff bracket needs {required} teams but standings only have {available}")]
    NotEnoughTeamsForPlayoffs { required: usize, available: usize },

    #[error("Playoff bracket needs {required} playoff weeks but only {configured} are configured")]
    InsufficientPlayoffWeeks { required: u32, configured: u32 },

    // Bracket progression errors
    #[error("Invalid playoff results: {0}")]
    InvalidPlayoffResults(String),

    #[error("Playoff bracket is already complete")]
    BracketComplete,

    #[error("Generated schedule failed validation with {errors} error(s)")]
    InvalidSchedule { errors: usize },

    #[error("League file error: {0}")]
    LeagueFile(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a league file error with context
    pub fn league_file_error(msg: impl Into<String>) -> Self {
        Self::LeagueFile(msg.into())
    }

    /// Create an invalid playoff results error
    pub fn invalid_playoff_results(msg: impl Into<String>) -> Self {
        Self::InvalidPlayoffResults(msg.into())
    }

    pub fn odd_team_count(count: usize) -> Self {
        Self::OddTeamCount { count }
    }

    pub fn not_enough_teams(count: usize) -> Self {
        Self::NotEnoughTeams { count }
    }

    pub fn unsupported_playoff_teams(count: u32) -> Self {
        Self::UnsupportedPlayoffTeams { count }
    }

    pub fn not_enough_teams_for_playoffs(required: usize, available: usize) -> Self {
        Self::NotEnoughTeamsForPlayoffs {
            required,
            available,
        }
    }

    pub fn insufficient_playoff_weeks(required: u32, configured: u32) -> Self {
        Self::InsufficientPlayoffWeeks {
            required,
            configured,
        }
    }

    /// Check if error was caused by caller-supplied league setup rather than
    /// by I/O or by bracket progression
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            AppError::OddTeamCount { .. }
                | AppError::NotEnoughTeams { .. }
                | AppError::UnsupportedPlayoffTeams { .. }
                | AppError::NotEnoughTeamsForPlayoffs { .. }
                | AppError::InsufficientPlayoffWeeks { .. }
                | AppError::Config(_)
        )
    }
}
