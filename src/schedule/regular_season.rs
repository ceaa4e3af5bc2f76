//! Regular-season calendar built from round-robin pairings

use super::models::{Matchup, ScheduleConfig, Team};
use super::round_robin::{Round, generate_round_robin, round_for_week};
use crate::constants::matchup_ids;
use crate::error::AppError;
use tracing::{debug, info};

/// Lays `rounds` out over `weeks` weeks.
///
/// Week `w` uses round `(w - 1) mod rounds.len()`. Pair indices are resolved
/// against `teams` here and nowhere earlier. Matchup ids are `week{w}_match{n}`
/// with `n` the 1-based position inside the week, so the same input always
/// produces the same ids.
///
/// # Panics
/// If a pair refers to an index outside `teams`; rounds must come from
/// [`generate_round_robin`] for `teams.len()`.
pub fn schedule_regular_season(teams: &[Team], rounds: &[Round], weeks: u32) -> Vec<Matchup> {
    let mut matchups = Vec::new();

    for week in 1..=weeks {
        let Some(round) = round_for_week(rounds, week) else {
            break;
        };
        for (position, &(a, b)) in round.iter().enumerate() {
            matchups.push(Matchup::regular(
                matchup_ids::regular(week, position + 1),
                week,
                teams[a].id.as_str(),
                teams[b].id.as_str(),
            ));
        }
    }

    matchups
}

/// Generates the full regular season for a league.
///
/// # Errors
/// * `AppError::OddTeamCount` - the league has an odd number of teams
/// * `AppError::NotEnoughTeams` - the league has fewer than 2 teams
pub fn generate_regular_season_schedule(
    config: &ScheduleConfig,
) -> Result<Vec<Matchup>, AppError> {
    let team_count = config.teams.len();
    let rounds = generate_round_robin(team_count)?;

    if config.regular_season_weeks as usize > rounds.len() {
        debug!(
            "{} weeks requested for {} teams, pairings repeat every {} weeks",
            config.regular_season_weeks,
            team_count,
            rounds.len()
        );
    }

    let matchups = schedule_regular_season(&config.teams, &rounds, config.regular_season_weeks);

    info!(
        "Generated {} regular-season matchups for {} teams over {} weeks",
        matchups.len(),
        team_count,
        config.regular_season_weeks
    );

    Ok(matchups)
}

/// Matchups played in `week`, in schedule order.
pub fn matchups_for_week(schedule: &[Matchup], week: u32) -> Vec<&Matchup> {
    schedule.iter().filter(|m| m.week == week).collect()
}

/// Incomplete matchups for `team_id` from `from_week` onwards.
pub fn remaining_matchups_for_team(
    schedule: &[Matchup],
    team_id: &str,
    from_week: u32,
) -> Vec<Matchup> {
    schedule
        .iter()
        .filter(|m| m.week >= from_week && !m.is_complete && m.involves(team_id))
        .cloned()
        .collect()
}
