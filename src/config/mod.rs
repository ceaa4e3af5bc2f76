use crate::constants::{
    DEFAULT_PLAYOFF_TEAMS, DEFAULT_PLAYOFF_WEEKS, DEFAULT_REGULAR_SEASON_WEEKS, LOG_FILE_NAME,
    env_vars,
};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Holds the default season shape and logging settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// Regular-season length used when a league file does not set one.
    #[serde(default = "default_regular_season_weeks")]
    pub regular_season_weeks: u32,
    /// Number of weeks reserved for the playoffs.
    #[serde(default = "default_playoff_weeks")]
    pub playoff_weeks: u32,
    /// Playoff bracket size, 4 or 6.
    #[serde(default = "default_playoff_teams")]
    pub playoff_teams: u32,
}

fn default_regular_season_weeks() -> u32 {
    DEFAULT_REGULAR_SEASON_WEEKS
}

fn default_playoff_weeks() -> u32 {
    DEFAULT_PLAYOFF_WEEKS
}

fn default_playoff_teams() -> u32 {
    DEFAULT_PLAYOFF_TEAMS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_file_path: None,
            regular_season_weeks: default_regular_season_weeks(),
            playoff_weeks: default_playoff_weeks(),
            playoff_teams: default_playoff_teams(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// Falls back to defaults when no config file exists.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `FANTASY_SCHEDULE_LOG_FILE` - Override log file path
    /// - `FANTASY_SCHEDULE_WEEKS` - Override regular-season weeks
    /// - `FANTASY_SCHEDULE_PLAYOFF_WEEKS` - Override playoff weeks
    /// - `FANTASY_SCHEDULE_PLAYOFF_TEAMS` - Override playoff bracket size
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded configuration
    /// * `Err(AppError)` - Config file unreadable or values invalid
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            debug!("No config file at {config_path}, using defaults");
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads the config file exactly as saved, without environment overrides.
    ///
    /// Use this before writing the config back so temporary env values are
    /// never persisted. Falls back to defaults only when no file exists.
    pub async fn load_saved() -> Result<Self, AppError> {
        Self::load_saved_from_path(&get_config_path()).await
    }

    /// [`Config::load_saved`] against a custom file path.
    pub async fn load_saved_from_path(path: &str) -> Result<Self, AppError> {
        let config = if Path::new(path).exists() {
            Self::load_from_path(path).await?
        } else {
            debug!("No config file at {path}, starting from defaults");
            Config::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Applies `FANTASY_SCHEDULE_*` environment variables on top of the current values.
    /// Unparseable numbers are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        let numeric = |name: &str| -> Option<u32> {
            let raw = std::env::var(name).ok()?;
            match raw.parse::<u32>() {
                Ok(value) => Some(value),
                Err(e) => {
                    warn!("Ignoring {name}={raw}: {e}");
                    None
                }
            }
        };

        if let Some(weeks) = numeric(env_vars::REGULAR_SEASON_WEEKS) {
            self.regular_season_weeks = weeks;
        }
        if let Some(weeks) = numeric(env_vars::PLAYOFF_WEEKS) {
            self.playoff_weeks = weeks;
        }
        if let Some(teams) = numeric(env_vars::PLAYOFF_TEAMS) {
            self.playoff_teams = teams;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            self.regular_season_weeks,
            self.playoff_weeks,
            self.playoff_teams,
            &self.log_file_path,
        )
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if !Path::new(&config_path).exists() {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
            println!("(Defaults are in use)");
        }

        let config = Config::load().await?;
        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        println!("────────────────────────────────────");
        println!("Regular Season:");
        println!("{} weeks", config.regular_season_weeks);
        println!("────────────────────────────────────");
        println!("Playoffs:");
        println!(
            "{} teams over {} weeks",
            config.playoff_teams, config.playoff_weeks
        );
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{LOG_FILE_NAME}");
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without applying env overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
