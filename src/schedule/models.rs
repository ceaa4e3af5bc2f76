use serde::{Deserialize, Serialize};

/// Win/loss/tie record of a team as kept by the league.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TeamRecord {
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub ties: u32,
}

impl TeamRecord {
    pub fn new(wins: u32, losses: u32, ties: u32) -> Self {
        Self { wins, losses, ties }
    }

    /// `wins / (wins + losses)`, or `None` when no decided games exist.
    /// Ties are not part of the percentage.
    pub fn win_percentage(&self) -> Option<f64> {
        let decided = u64::from(self.wins) + u64::from(self.losses);
        if decided == 0 {
            None
        } else {
            Some(f64::from(self.wins) / decided as f64)
        }
    }

    pub fn games_played(&self) -> u64 {
        u64::from(self.wins) + u64::from(self.losses) + u64::from(self.ties)
    }
}

/// A league member. Owned by the league aggregate; the scheduler only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub record: TeamRecord,
    #[serde(default)]
    pub points_for: f64,
    #[serde(default)]
    pub points_against: f64,
}

impl Team {
    pub fn new(id: impl Into<String>, name: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            owner: owner.into(),
            record: TeamRecord::default(),
            points_for: 0.0,
            points_against: 0.0,
        }
    }

    pub fn with_record(mut self, record: TeamRecord) -> Self {
        self.record = record;
        self
    }
}

/// Per-position lineup slots. Empty when a matchup is created.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct Lineup {
    pub qb: Vec<String>,
    pub rb: Vec<String>,
    pub wr: Vec<String>,
    pub te: Vec<String>,
    pub flex: Vec<String>,
    pub k: Vec<String>,
    pub dst: Vec<String>,
    pub bench: Vec<String>,
}

impl Lineup {
    pub fn is_empty(&self) -> bool {
        [
            &self.qb,
            &self.rb,
            &self.wr,
            &self.te,
            &self.flex,
            &self.k,
            &self.dst,
            &self.bench,
        ]
        .iter()
        .all(|slot| slot.is_empty())
    }
}

/// One team's side of a matchup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchupSide {
    pub team_id: String,
    pub score: f64,
    pub lineup: Lineup,
    pub bench_points: f64,
}

impl MatchupSide {
    /// Fresh side: zero score, empty lineup.
    pub fn new(team_id: impl Into<String>) -> Self {
        Self {
            team_id: team_id.into(),
            score: 0.0,
            lineup: Lineup::default(),
            bench_points: 0.0,
        }
    }
}

/// Post-season round a playoff matchup belongs to.
///
/// `Quarterfinal -> Semifinal -> {Championship, Consolation}`; the last two are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayoffRound {
    Quarterfinal,
    Semifinal,
    Championship,
    Consolation,
}

impl PlayoffRound {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayoffRound::Quarterfinal => "quarterfinal",
            PlayoffRound::Semifinal => "semifinal",
            PlayoffRound::Championship => "championship",
            PlayoffRound::Consolation => "consolation",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, PlayoffRound::Championship | PlayoffRound::Consolation)
    }
}

/// The schedule's unit of work. Created once by the scheduler; afterwards only
/// the external scoring system writes scores and completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Matchup {
    pub id: String,
    pub week: u32,
    pub team_a: MatchupSide,
    pub team_b: MatchupSide,
    pub is_complete: bool,
    pub is_playoffs: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playoff_round: Option<PlayoffRound>,
}

impl Matchup {
    /// Regular-season matchup between two teams.
    pub fn regular(
        id: impl Into<String>,
        week: u32,
        team_a: impl Into<String>,
        team_b: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            week,
            team_a: MatchupSide::new(team_a),
            team_b: MatchupSide::new(team_b),
            is_complete: false,
            is_playoffs: false,
            playoff_round: None,
        }
    }

    /// Playoff matchup in the given round.
    pub fn playoff(
        id: impl Into<String>,
        week: u32,
        round: PlayoffRound,
        team_a: impl Into<String>,
        team_b: impl Into<String>,
    ) -> Self {
        Self {
            is_playoffs: true,
            playoff_round: Some(round),
            ..Self::regular(id, week, team_a, team_b)
        }
    }

    pub fn team_ids(&self) -> [&str; 2] {
        [self.team_a.team_id.as_str(), self.team_b.team_id.as_str()]
    }

    pub fn involves(&self, team_id: &str) -> bool {
        self.team_a.team_id == team_id || self.team_b.team_id == team_id
    }

    /// The other team in this matchup, or `None` if `team_id` is not playing.
    pub fn opponent_of(&self, team_id: &str) -> Option<&str> {
        if self.team_a.team_id == team_id {
            Some(self.team_b.team_id.as_str())
        } else if self.team_b.team_id == team_id {
            Some(self.team_a.team_id.as_str())
        } else {
            None
        }
    }
}

/// Everything needed to lay out one season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleConfig {
    pub teams: Vec<Team>,
    pub regular_season_weeks: u32,
    pub playoff_weeks: u32,
    pub playoff_teams: u32,
}

impl ScheduleConfig {
    pub fn new(
        teams: Vec<Team>,
        regular_season_weeks: u32,
        playoff_weeks: u32,
        playoff_teams: u32,
    ) -> Self {
        Self {
            teams,
            regular_season_weeks,
            playoff_weeks,
            playoff_teams,
        }
    }

    /// First week after the regular season.
    pub fn playoff_start_week(&self) -> u32 {
        self.regular_season_weeks.saturating_add(1)
    }
}
