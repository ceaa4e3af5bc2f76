//! Seeded post-season bracket, advanced one round at a time
//!
//! The bracket only ever emits matchups whose participants are known. The
//! opening round comes from standings; every later round is produced by
//! [`PlayoffBracket::advance`] from the finished round and its winners, so no
//! placeholder teams are ever scheduled.

use super::models::{Matchup, PlayoffRound, ScheduleConfig, Team};
use crate::constants::matchup_ids;
use crate::error::AppError;
use tracing::{debug, info};

/// Supported bracket shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketFormat {
    /// Semifinals 1v4 and 2v3, then championship and consolation
    FourTeam,
    /// Seeds 1-2 on a bye, quarterfinals 3v6 and 4v5, then as four-team
    SixTeam,
}

impl BracketFormat {
    /// # Errors
    /// * `AppError::UnsupportedPlayoffTeams` - anything other than 4 or 6
    pub fn from_playoff_teams(count: u32) -> Result<Self, AppError> {
        match count {
            4 => Ok(BracketFormat::FourTeam),
            6 => Ok(BracketFormat::SixTeam),
            other => Err(AppError::unsupported_playoff_teams(other)),
        }
    }

    pub fn team_count(&self) -> usize {
        match self {
            BracketFormat::FourTeam => 4,
            BracketFormat::SixTeam => 6,
        }
    }

    pub fn initial_round(&self) -> PlayoffRound {
        match self {
            BracketFormat::FourTeam => PlayoffRound::Semifinal,
            BracketFormat::SixTeam => PlayoffRound::Quarterfinal,
        }
    }

    /// Number of playoff weeks the bracket spans.
    pub fn round_count(&self) -> u32 {
        match self {
            BracketFormat::FourTeam => 2,
            BracketFormat::SixTeam => 3,
        }
    }

    /// 0-based week offset of `round` from the start of the playoffs.
    fn round_offset(&self, round: PlayoffRound) -> u32 {
        let base = match round {
            PlayoffRound::Quarterfinal => 0,
            PlayoffRound::Semifinal => 1,
            PlayoffRound::Championship | PlayoffRound::Consolation => 2,
        };
        match self {
            BracketFormat::SixTeam => base,
            BracketFormat::FourTeam => base.saturating_sub(1),
        }
    }
}

/// Result of one finished playoff game.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Outcome {
    winner: String,
    loser: String,
}

/// Seeded bracket for one post-season.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayoffBracket {
    format: BracketFormat,
    seeds: Vec<String>,
    first_week: u32,
}

impl PlayoffBracket {
    /// Seeds the bracket from `standings`, best team first.
    ///
    /// # Errors
    /// * `AppError::UnsupportedPlayoffTeams` - `config.playoff_teams` is not 4 or 6
    /// * `AppError::NotEnoughTeamsForPlayoffs` - standings are shorter than the bracket
    /// * `AppError::InsufficientPlayoffWeeks` - `config.playoff_weeks` cannot fit every round
    pub fn new(standings: &[Team], config: &ScheduleConfig) -> Result<Self, AppError> {
        let format = BracketFormat::from_playoff_teams(config.playoff_teams)?;

        if standings.len() < format.team_count() {
            return Err(AppError::not_enough_teams_for_playoffs(
                format.team_count(),
                standings.len(),
            ));
        }
        if config.playoff_weeks < format.round_count() {
            return Err(AppError::insufficient_playoff_weeks(
                format.round_count(),
                config.playoff_weeks,
            ));
        }

        let seeds: Vec<String> = standings
            .iter()
            .take(format.team_count())
            .map(|team| team.id.clone())
            .collect();

        debug!("Playoff seeds ({:?}): {:?}", format, seeds);

        Ok(Self {
            format,
            seeds,
            first_week: config.playoff_start_week(),
        })
    }

    pub fn format(&self) -> BracketFormat {
        self.format
    }

    /// Seeded team ids, seed 1 first.
    pub fn seeds(&self) -> &[String] {
        &self.seeds
    }

    /// Week in which `round` is played.
    pub fn week_of(&self, round: PlayoffRound) -> u32 {
        self.first_week
            .saturating_add(self.format.round_offset(round))
    }

    fn seed(&self, seed: usize) -> &str {
        &self.seeds[seed - 1]
    }

    /// Matchups of the opening round.
    pub fn first_round(&self) -> Vec<Matchup> {
        let round = self.format.initial_round();
        let pairings = match self.format {
            BracketFormat::FourTeam => [(1, 4), (2, 3)],
            BracketFormat::SixTeam => [(3, 6), (4, 5)],
        };

        let matchups: Vec<Matchup> = pairings
            .iter()
            .map(|&(a, b)| (self.seed(a).to_string(), self.seed(b).to_string()))
            .enumerate()
            .map(|(i, (a, b))| self.bracket_matchup(round, i + 1, a, b))
            .collect();

        info!(
            "Opening playoff round ({}) in week {}: {} matchups",
            round.as_str(),
            self.week_of(round),
            matchups.len()
        );
        matchups
    }

    /// Produces the next round from a finished one.
    ///
    /// `completed` is every matchup of one round and `winners` holds the id of
    /// exactly one winner per matchup, in any order.
    ///
    /// # Errors
    /// * `AppError::BracketComplete` - `completed` is the championship/consolation round
    /// * `AppError::InvalidPlayoffResults` - matchups or winners do not describe a
    ///   finished round of this bracket
    pub fn advance(
        &self,
        completed: &[Matchup],
        winners: &[String],
    ) -> Result<Vec<Matchup>, AppError> {
        let round = self.completed_round(completed)?;
        let outcomes = resolve_outcomes(completed, winners)?;

        let next = match round {
            PlayoffRound::Quarterfinal => self.semifinals_after(completed, &outcomes)?,
            PlayoffRound::Semifinal => self.finals_after(completed, &outcomes)?,
            PlayoffRound::Championship | PlayoffRound::Consolation => {
                return Err(AppError::BracketComplete);
            }
        };

        info!(
            "Advanced playoff bracket past {} with {} new matchups",
            round.as_str(),
            next.len()
        );
        Ok(next)
    }

    /// Checks that `completed` is one full round of this bracket and returns it.
    fn completed_round(&self, completed: &[Matchup]) -> Result<PlayoffRound, AppError> {
        let first = completed
            .first()
            .ok_or_else(|| AppError::invalid_playoff_results("no completed matchups supplied"))?;

        let round = match first.playoff_round {
            Some(round) if first.is_playoffs => round,
            _ => {
                return Err(AppError::invalid_playoff_results(format!(
                    "matchup {} is not a playoff matchup",
                    first.id
                )));
            }
        };

        if round.is_terminal() {
            return Err(AppError::BracketComplete);
        }
        if round == PlayoffRound::Quarterfinal && self.format == BracketFormat::FourTeam {
            return Err(AppError::invalid_playoff_results(
                "four-team brackets have no quarterfinal round",
            ));
        }
        if let Some(stray) = completed
            .iter()
            .find(|m| !m.is_playoffs || m.playoff_round != Some(round))
        {
            return Err(AppError::invalid_playoff_results(format!(
                "matchup {} does not belong to the {} round",
                stray.id,
                round.as_str()
            )));
        }
        if completed.len() != 2 {
            return Err(AppError::invalid_playoff_results(format!(
                "expected 2 {} matchups, got {}",
                round.as_str(),
                completed.len()
            )));
        }
        if let Some(outsider) = completed
            .iter()
            .flat_map(|m| m.team_ids())
            .find(|id| !self.seeds.iter().any(|seed| seed == id))
        {
            return Err(AppError::invalid_playoff_results(format!(
                "team {outsider} is not seeded in this bracket"
            )));
        }
        self.check_pairings(round, completed)?;

        Ok(round)
    }

    /// Every anchor seed must meet one of its allowed opponents. Two anchors
    /// with disjoint opponent sets cover both matchups of the round.
    fn check_pairings(&self, round: PlayoffRound, completed: &[Matchup]) -> Result<(), AppError> {
        let anchors: [(usize, &[usize]); 2] = match (self.format, round) {
            (_, PlayoffRound::Quarterfinal) => [(3, &[6][..]), (4, &[5][..])],
            (BracketFormat::FourTeam, PlayoffRound::Semifinal) => [(1, &[4][..]), (2, &[3][..])],
            (BracketFormat::SixTeam, PlayoffRound::Semifinal) => {
                [(1, &[4, 5][..]), (2, &[3, 6][..])]
            }
            _ => return Ok(()),
        };

        for (anchor, opponents) in anchors {
            let id = self.seed(anchor);
            let paired = completed
                .iter()
                .filter_map(|m| m.opponent_of(id))
                .collect::<Vec<_>>();
            let valid = match paired.as_slice() {
                [opponent] => opponents.iter().any(|&seed| self.seed(seed) == *opponent),
                _ => false,
            };
            if !valid {
                return Err(AppError::invalid_playoff_results(format!(
                    "seed {anchor} ({id}) is not paired as this bracket's {} round expects",
                    round.as_str()
                )));
            }
        }

        Ok(())
    }

    /// Fixed bracket: seed 1 meets the 4v5 winner, seed 2 meets the 3v6 winner.
    fn semifinals_after(
        &self,
        completed: &[Matchup],
        outcomes: &[Outcome],
    ) -> Result<Vec<Matchup>, AppError> {
        let winner_involving = |seed: usize| -> Result<String, AppError> {
            completed
                .iter()
                .zip(outcomes)
                .find(|(m, _)| m.involves(self.seed(seed)))
                .map(|(_, outcome)| outcome.winner.clone())
                .ok_or_else(|| {
                    AppError::invalid_playoff_results(format!(
                        "no quarterfinal result for seed {seed}"
                    ))
                })
        };

        let four_five = winner_involving(4)?;
        let three_six = winner_involving(3)?;

        Ok(vec![
            self.bracket_matchup(
                PlayoffRound::Semifinal,
                1,
                self.seed(1).to_string(),
                four_five,
            ),
            self.bracket_matchup(
                PlayoffRound::Semifinal,
                2,
                self.seed(2).to_string(),
                three_six,
            ),
        ])
    }

    /// Semifinal winners play for the title, losers play for third place.
    fn finals_after(
        &self,
        completed: &[Matchup],
        outcomes: &[Outcome],
    ) -> Result<Vec<Matchup>, AppError> {
        let mut ordered: Vec<(&Matchup, &Outcome)> = completed.iter().zip(outcomes).collect();
        ordered.sort_by(|(a, _), (b, _)| a.id.cmp(&b.id));

        let [(_, first), (_, second)] = ordered.as_slice() else {
            return Err(AppError::invalid_playoff_results(
                "expected exactly 2 semifinal results",
            ));
        };

        Ok(vec![
            self.bracket_matchup(
                PlayoffRound::Championship,
                1,
                first.winner.clone(),
                second.winner.clone(),
            ),
            self.bracket_matchup(
                PlayoffRound::Consolation,
                2,
                first.loser.clone(),
                second.loser.clone(),
            ),
        ])
    }

    fn bracket_matchup(
        &self,
        round: PlayoffRound,
        n: usize,
        team_a: String,
        team_b: String,
    ) -> Matchup {
        let week = self.week_of(round);
        let id = match round {
            PlayoffRound::Quarterfinal | PlayoffRound::Semifinal => matchup_ids::playoff(week, n),
            PlayoffRound::Championship => matchup_ids::championship(week),
            PlayoffRound::Consolation => matchup_ids::consolation(week),
        };
        Matchup::playoff(id, week, round, team_a, team_b)
    }
}

/// Pairs each completed matchup with its single winner.
fn resolve_outcomes(completed: &[Matchup], winners: &[String]) -> Result<Vec<Outcome>, AppError> {
    if winners.len() != completed.len() {
        return Err(AppError::invalid_playoff_results(format!(
            "expected {} winners, got {}",
            completed.len(),
            winners.len()
        )));
    }

    completed
        .iter()
        .map(|matchup| {
            let found: Vec<&String> = winners.iter().filter(|w| matchup.involves(w)).collect();
            match found.as_slice() {
                [winner] => {
                    let loser = matchup.opponent_of(winner).unwrap_or_default().to_string();
                    Ok(Outcome {
                        winner: (*winner).clone(),
                        loser,
                    })
                }
                [] => Err(AppError::invalid_playoff_results(format!(
                    "no winner supplied for matchup {}",
                    matchup.id
                ))),
                _ => Err(AppError::invalid_playoff_results(format!(
                    "more than one winner supplied for matchup {}",
                    matchup.id
                ))),
            }
        })
        .collect()
}
