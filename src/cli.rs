use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Returns true when the invocation only touches configuration
pub fn is_config_command(args: &Args) -> bool {
    args.list_config || args.new_log_file_path.is_some() || args.clear_log_file_path
}

/// Fantasy league season scheduler
///
/// Builds a round-robin regular season from a league file, validates it and
/// prints it. Can also seed the opening playoff round from the league's
/// standings order or report a team's strength of schedule.
///
/// A league file is TOML with one [[teams]] table per team (id, name, owner,
/// wins, losses). Teams are listed in standings order.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// League file describing the teams, in standings order.
    #[arg(short = 'L', long = "league", value_name = "FILE")]
    pub league: Option<String>,

    /// Number of regular-season weeks. Overrides league file and config.
    #[arg(short = 'w', long = "weeks", help_heading = "Schedule Options")]
    pub weeks: Option<u32>,

    /// Print matchups as JSON instead of a coloured table.
    #[arg(long = "json", help_heading = "Schedule Options")]
    pub json: bool,

    /// Print the opening playoff round seeded from the league file order.
    #[arg(short = 'b', long = "bracket", help_heading = "Schedule Options")]
    pub bracket: bool,

    /// Print strength of schedule for the given team id.
    #[arg(long = "sos", value_name = "TEAM_ID", help_heading = "Schedule Options")]
    pub sos_team: Option<String>,

    /// First week counted for strength of schedule.
    #[arg(
        long = "from-week",
        default_value_t = 1,
        help_heading = "Schedule Options"
    )]
    pub from_week: u32,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also write logs to the terminal.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
