//! Strength of schedule over a team's remaining opponents

use super::models::{Matchup, Team};
use super::regular_season::remaining_matchups_for_team;
use crate::constants::NEUTRAL_STRENGTH_OF_SCHEDULE;
use std::collections::{BTreeMap, HashMap};
use tracing::trace;

/// Average win percentage of `team_id`'s opponents in `remaining`.
///
/// Only regular-season matchups involving `team_id` count. An opponent with
/// no decided games, or one missing from `teams`, counts as a neutral 0.5.
/// With nothing to average the result is 0.5. The value is always in `[0, 1]`.
pub fn strength_of_schedule(team_id: &str, remaining: &[Matchup], teams: &[Team]) -> f64 {
    let records: HashMap<&str, &Team> = teams.iter().map(|t| (t.id.as_str(), t)).collect();

    let opponent_strengths: Vec<f64> = remaining
        .iter()
        .filter(|m| !m.is_playoffs)
        .filter_map(|m| m.opponent_of(team_id))
        .map(|opponent| {
            records
                .get(opponent)
                .and_then(|team| team.record.win_percentage())
                .unwrap_or(NEUTRAL_STRENGTH_OF_SCHEDULE)
        })
        .collect();

    if opponent_strengths.is_empty() {
        return NEUTRAL_STRENGTH_OF_SCHEDULE;
    }

    let sos = opponent_strengths.iter().sum::<f64>() / opponent_strengths.len() as f64;
    trace!(
        "Strength of schedule for {}: {:.3} over {} opponents",
        team_id,
        sos,
        opponent_strengths.len()
    );
    sos
}

/// Strength of schedule for every team, counting incomplete matchups from `from_week` on.
pub fn league_strength_of_schedule(
    schedule: &[Matchup],
    teams: &[Team],
    from_week: u32,
) -> BTreeMap<String, f64> {
    teams
        .iter()
        .map(|team| {
            let remaining = remaining_matchups_for_team(schedule, &team.id, from_week);
            (team.id.clone(), strength_of_schedule(&team.id, &remaining, teams))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::models::{PlayoffRound, TeamRecord};
    use crate::testing_utils::TestDataBuilder;

    fn teams() -> Vec<Team> {
        TestDataBuilder::create_standings(&[
            ("a", 6, 2),
            ("b", 4, 4),
            ("c", 2, 6),
            ("d", 0, 0),
        ])
    }

    #[test]
    fn test_no_remaining_matchups_is_neutral() {
        assert_eq!(strength_of_schedule("a", &[], &teams()), 0.5);
    }

    #[test]
    fn test_opponent_without_games_is_neutral() {
        let remaining = vec![Matchup::regular("week9_match1", 9, "a", "d")];
        assert_eq!(strength_of_schedule("a", &remaining, &teams()), 0.5);
    }

    #[test]
    fn test_average_of_opponent_win_percentages() {
        let remaining = vec![
            Matchup::regular("week9_match1", 9, "a", "b"),
            Matchup::regular("week10_match2", 10, "c", "a"),
        ];
        // (0.5 + 0.25) / 2
        let sos = strength_of_schedule("a", &remaining, &teams());
        assert!((sos - 0.375).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unknown_opponent_is_neutral() {
        let remaining = vec![
            Matchup::regular("week9_match1", 9, "c", "ghost"),
            Matchup::regular("week10_match1", 10, "c", "a"),
        ];
        // (0.5 + 0.75) / 2
        let sos = strength_of_schedule("c", &remaining, &teams());
        assert!((sos - 0.625).abs() < f64::EPSILON);
    }

    #[test]
    fn test_playoff_and_unrelated_matchups_are_ignored() {
        let remaining = vec![
            Matchup::playoff("week15_playoff1", 15, PlayoffRound::Semifinal, "b", "a"),
            Matchup::regular("week9_match1", 9, "b", "c"),
        ];
        assert_eq!(strength_of_schedule("a", &remaining, &teams()), 0.5);
    }

    #[test]
    fn test_ties_are_not_decided_games() {
        let teams = vec![
            Team::new("a", "A", "owner").with_record(TeamRecord::new(1, 1, 0)),
            Team::new("b", "B", "owner").with_record(TeamRecord::new(3, 1, 4)),
        ];
        let remaining = vec![Matchup::regular("week9_match1", 9, "a", "b")];
        assert_eq!(strength_of_schedule("a", &remaining, &teams), 0.75);
    }

    #[test]
    fn test_huge_opponent_record() {
        let teams = vec![
            Team::new("a", "A", "o"),
            Team::new("b", "B", "o").with_record(TeamRecord::new(u32::MAX, 1, 0)),
        ];
        let remaining = vec![Matchup::regular("week3_match1", 3, "a", "b")];
        let sos = strength_of_schedule("a", &remaining, &teams);
        assert!(sos > 0.999_999 && sos < 1.0);
    }

    #[test]
    fn test_result_stays_in_unit_interval() {
        let teams = vec![
            Team::new("a", "A", "o").with_record(TeamRecord::new(0, 9, 0)),
            Team::new("b", "B", "o").with_record(TeamRecord::new(9, 0, 0)),
        ];
        let remaining = vec![Matchup::regular("week10_match1", 10, "a", "b")];
        assert_eq!(strength_of_schedule("a", &remaining, &teams), 1.0);
        assert_eq!(strength_of_schedule("b", &remaining, &teams), 0.0);
    }

    #[test]
    fn test_league_strength_of_schedule_covers_every_team() {
        let teams = teams();
        let schedule = vec![
            Matchup::regular("week9_match1", 9, "a", "b"),
            Matchup::regular("week9_match2", 9, "c", "d"),
        ];
        let sos = league_strength_of_schedule(&schedule, &teams, 9);
        assert_eq!(sos.len(), 4);
        assert_eq!(sos["a"], 0.5);
        assert_eq!(sos["b"], 0.75);
        assert_eq!(sos["c"], 0.5);
        assert_eq!(sos["d"], 0.25);

        // Nothing left after week 9
        let later = league_strength_of_schedule(&schedule, &teams, 10);
        assert!(later.values().all(|&v| v == 0.5));
    }
}
