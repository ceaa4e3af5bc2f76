use crate::schedule::{Matchup, ScheduleConfig, Team, TeamRecord};

/// Test utilities for creating mock leagues and schedules
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Creates `count` teams with ids `team1..=teamN` and empty records
    pub fn create_teams(count: usize) -> Vec<Team> {
        (1..=count)
            .map(|i| Team::new(format!("team{i}"), format!("Team {i}"), format!("Owner {i}")))
            .collect()
    }

    /// Creates a team with the given record
    pub fn create_team_with_record(id: &str, wins: u32, losses: u32) -> Team {
        Team::new(id, id.to_uppercase(), format!("{id} owner"))
            .with_record(TeamRecord::new(wins, losses, 0))
    }

    /// Creates standings in the given order from `(id, wins, losses)` rows
    pub fn create_standings(rows: &[(&str, u32, u32)]) -> Vec<Team> {
        rows.iter()
            .map(|&(id, wins, losses)| Self::create_team_with_record(id, wins, losses))
            .collect()
    }

    /// Creates a schedule config around freshly generated teams
    pub fn create_config(
        team_count: usize,
        regular_season_weeks: u32,
        playoff_teams: u32,
    ) -> ScheduleConfig {
        ScheduleConfig::new(
            Self::create_teams(team_count),
            regular_season_weeks,
            3,
            playoff_teams,
        )
    }

    /// Marks a matchup as finished with the given scores
    pub fn complete_matchup(matchup: &Matchup, score_a: f64, score_b: f64) -> Matchup {
        let mut finished = matchup.clone();
        finished.team_a.score = score_a;
        finished.team_b.score = score_b;
        finished.is_complete = true;
        finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_teams_ids() {
        let teams = TestDataBuilder::create_teams(3);
        let ids: Vec<&str> = teams.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["team1", "team2", "team3"]);
        assert!(teams.iter().all(|t| t.record == TeamRecord::default()));
    }

    #[test]
    fn test_create_standings_keeps_order() {
        let standings = TestDataBuilder::create_standings(&[("x", 5, 1), ("y", 1, 5)]);
        assert_eq!(standings[0].id, "x");
        assert_eq!(standings[0].record.wins, 5);
        assert_eq!(standings[1].record.losses, 5);
    }

    #[test]
    fn test_complete_matchup_leaves_original() {
        let matchup = Matchup::regular("week1_match1", 1, "a", "b");
        let finished = TestDataBuilder::complete_matchup(&matchup, 101.5, 88.0);
        assert!(finished.is_complete);
        assert_eq!(finished.team_a.score, 101.5);
        assert!(!matchup.is_complete);
    }
}
