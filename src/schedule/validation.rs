use super::models::Matchup;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use tracing::warn;

/// Findings from a structural check of a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleValidation {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

/// Checks that no team is scheduled twice in the same week and that matchup ids
/// are unique.
///
/// Findings are returned, never raised, and the schedule is left untouched.
/// Weeks are checked in ascending order; within a week, matchups are checked
/// in the order given.
pub fn validate_schedule(matchups: &[Matchup]) -> ScheduleValidation {
    let mut by_week: BTreeMap<u32, Vec<&Matchup>> = BTreeMap::new();
    for matchup in matchups {
        by_week.entry(matchup.week).or_default().push(matchup);
    }

    let mut errors = Vec::new();

    for (week, week_matchups) in &by_week {
        let mut seen: HashSet<&str> = HashSet::new();
        for team_id in week_matchups.iter().flat_map(|m| m.team_ids()) {
            if !seen.insert(team_id) {
                errors.push(format!("Team {team_id} scheduled twice in week {week}"));
            }
        }
    }

    let mut ids: HashSet<&str> = HashSet::with_capacity(matchups.len());
    for matchup in matchups {
        if !ids.insert(matchup.id.as_str()) {
            errors.push(format!("Duplicate matchup id {}", matchup.id));
        }
    }

    if !errors.is_empty() {
        warn!("Schedule validation found {} problem(s)", errors.len());
        for error in &errors {
            warn!("{}", error);
        }
    }

    ScheduleValidation {
        is_valid: errors.is_empty(),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::models::ScheduleConfig;
    use crate::schedule::regular_season::generate_regular_season_schedule;
    use crate::testing_utils::TestDataBuilder;

    #[test]
    fn test_generated_schedule_is_valid() {
        for n in (2..=12).step_by(2) {
            let config = ScheduleConfig::new(TestDataBuilder::create_teams(n), 17, 3, 6);
            let schedule = generate_regular_season_schedule(&config).unwrap();
            let result = validate_schedule(&schedule);
            assert!(result.is_valid);
            assert!(result.errors.is_empty());
        }
    }

    #[test]
    fn test_empty_schedule_is_valid() {
        let result = validate_schedule(&[]);
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_team_scheduled_twice_in_a_week() {
        let schedule = vec![
            Matchup::regular("week1_match1", 1, "a", "b"),
            Matchup::regular("week1_match2", 1, "a", "c"),
            Matchup::regular("week2_match1", 2, "a", "b"),
        ];
        let result = validate_schedule(&schedule);
        assert!(!result.is_valid);
        assert_eq!(result.errors, vec!["Team a scheduled twice in week 1"]);
    }

    #[test]
    fn test_each_repeat_is_reported() {
        let schedule = vec![
            Matchup::regular("week3_match1", 3, "a", "b"),
            Matchup::regular("week3_match2", 3, "b", "a"),
            Matchup::regular("week1_match1", 1, "c", "c"),
        ];
        let result = validate_schedule(&schedule);
        assert_eq!(
            result.errors,
            vec![
                "Team c scheduled twice in week 1",
                "Team b scheduled twice in week 3",
                "Team a scheduled twice in week 3",
            ]
        );
    }

    #[test]
    fn test_duplicate_matchup_id() {
        let schedule = vec![
            Matchup::regular("week1_match1", 1, "a", "b"),
            Matchup::regular("week1_match1", 2, "a", "b"),
        ];
        let result = validate_schedule(&schedule);
        assert!(!result.is_valid);
        assert_eq!(result.errors, vec!["Duplicate matchup id week1_match1"]);
    }

    #[test]
    fn test_input_is_not_modified() {
        let schedule = vec![
            Matchup::regular("week1_match1", 1, "a", "b"),
            Matchup::regular("week1_match2", 1, "a", "c"),
        ];
        let before = schedule.clone();
        let _ = validate_schedule(&schedule);
        assert_eq!(schedule, before);
    }
}
