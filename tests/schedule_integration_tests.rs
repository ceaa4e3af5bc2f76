use fantasy_schedule::{
    AppError, Config, LeagueFile,
    schedule::{
        Matchup, ScheduleConfig, generate_regular_season_schedule, league_strength_of_schedule,
        matchups_for_week, remaining_matchups_for_team, strength_of_schedule, validate_schedule,
    },
    testing_utils::TestDataBuilder,
};
use std::collections::HashSet;

fn unordered(matchup: &Matchup) -> (String, String) {
    let [a, b] = matchup.team_ids();
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

/// Every team plays exactly once per week, for any even league size and season length
#[test]
fn test_every_team_plays_once_per_week() {
    for n in (2..=16).step_by(2) {
        for weeks in 1..=20 {
            let config = TestDataBuilder::create_config(n, weeks, 6);
            let schedule = generate_regular_season_schedule(&config).unwrap();
            assert_eq!(schedule.len(), weeks as usize * n / 2);

            for week in 1..=weeks {
                let mut seen = HashSet::new();
                for matchup in matchups_for_week(&schedule, week) {
                    for id in matchup.team_ids() {
                        assert!(seen.insert(id), "{id} twice in week {week} (n={n})");
                    }
                }
                assert_eq!(seen.len(), n);
            }
        }
    }
}

/// The first n-1 weeks are one complete round-robin
#[test]
fn test_first_cycle_covers_all_pairs_exactly_once() {
    for n in (2..=16).step_by(2) {
        let config = TestDataBuilder::create_config(n, (n - 1) as u32, 6);
        let schedule = generate_regular_season_schedule(&config).unwrap();

        let pairs: Vec<(String, String)> = schedule.iter().map(unordered).collect();
        let unique: HashSet<&(String, String)> = pairs.iter().collect();
        assert_eq!(pairs.len(), n * (n - 1) / 2);
        assert_eq!(unique.len(), pairs.len());
    }
}

/// Ten teams have a nine-week cycle, so week 10 repeats week 1 exactly
#[test]
fn test_pairings_repeat_after_full_cycle() {
    let config = TestDataBuilder::create_config(10, 14, 6);
    let schedule = generate_regular_season_schedule(&config).unwrap();

    let pairings = |week: u32| -> Vec<[String; 2]> {
        matchups_for_week(&schedule, week)
            .iter()
            .map(|m| [m.team_a.team_id.clone(), m.team_b.team_id.clone()])
            .collect()
    };

    assert_eq!(pairings(1), pairings(10));
    assert_eq!(pairings(5), pairings(14));
    assert_ne!(pairings(1), pairings(9));
}

/// Generating twice from the same config gives identical schedules
#[test]
fn test_generation_is_deterministic() {
    let config = TestDataBuilder::create_config(12, 14, 6);
    let first = generate_regular_season_schedule(&config).unwrap();
    let second = generate_regular_season_schedule(&config).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

/// Generated schedules always pass validation and have unique ids
#[test]
fn test_generated_schedules_validate() {
    for n in (2..=14).step_by(2) {
        let config = TestDataBuilder::create_config(n, 17, 6);
        let schedule = generate_regular_season_schedule(&config).unwrap();
        let validation = validate_schedule(&schedule);
        assert!(validation.is_valid);
        assert!(validation.errors.is_empty());

        let ids: HashSet<&str> = schedule.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids.len(), schedule.len());
    }
}

/// A partial regeneration that leaves stale weeks in place is caught by the validator
#[test]
fn test_patched_schedule_is_flagged() {
    let config = TestDataBuilder::create_config(6, 5, 6);
    let mut schedule = generate_regular_season_schedule(&config).unwrap();
    // Splice a week-2 matchup into week 1
    let mut stray = schedule
        .iter()
        .find(|m| m.week == 2)
        .cloned()
        .unwrap();
    stray.week = 1;
    stray.id = "week1_match4".to_string();
    schedule.push(stray);

    let validation = validate_schedule(&schedule);
    assert!(!validation.is_valid);
    assert_eq!(validation.errors.len(), 2);
    assert!(
        validation
            .errors
            .iter()
            .all(|e| e.ends_with("scheduled twice in week 1"))
    );
}

/// Odd leagues are a configuration error, not a malformed schedule
#[test]
fn test_odd_league_is_rejected() {
    let config = TestDataBuilder::create_config(9, 14, 6);
    let error = generate_regular_season_schedule(&config).unwrap_err();
    assert!(matches!(error, AppError::OddTeamCount { count: 9 }));
    assert!(error.is_configuration_error());
}

/// Strength of schedule over a league loaded from a file
#[test]
fn test_strength_of_schedule_from_league_file() {
    let league = LeagueFile::parse(
        r#"
regular_season_weeks = 6

[[teams]]
id = "a"
name = "A"
wins = 4
losses = 0

[[teams]]
id = "b"
name = "B"
wins = 2
losses = 2

[[teams]]
id = "c"
name = "C"
wins = 0
losses = 4

[[teams]]
id = "d"
name = "D"
"#,
    )
    .unwrap();
    let config: ScheduleConfig = league.schedule_config(&Config::default());
    assert_eq!(config.regular_season_weeks, 6);

    let schedule = generate_regular_season_schedule(&config).unwrap();

    // Nothing played beyond week 6
    let remaining = remaining_matchups_for_team(&schedule, "a", 7);
    assert!(remaining.is_empty());
    assert_eq!(strength_of_schedule("a", &remaining, &config.teams), 0.5);

    // Two full cycles: every opponent twice, so the mean is the mean of the three opponents
    let remaining = remaining_matchups_for_team(&schedule, "d", 1);
    assert_eq!(remaining.len(), 6);
    let sos = strength_of_schedule("d", &remaining, &config.teams);
    assert!((sos - 0.5).abs() < 1e-12);

    let remaining = remaining_matchups_for_team(&schedule, "a", 1);
    let sos = strength_of_schedule("a", &remaining, &config.teams);
    // Opponents b (0.5), c (0.0), d (neutral 0.5)
    assert!((sos - 1.0 / 3.0).abs() < 1e-12);

    let all = league_strength_of_schedule(&schedule, &config.teams, 1);
    assert!(all.values().all(|v| (0.0..=1.0).contains(v)));
}

/// Completed matchups drop out of the remaining schedule
#[test]
fn test_completed_matchups_are_not_remaining() {
    let config = TestDataBuilder::create_config(4, 3, 4);
    let schedule: Vec<Matchup> = generate_regular_season_schedule(&config)
        .unwrap()
        .iter()
        .map(|m| {
            if m.week == 1 {
                TestDataBuilder::complete_matchup(m, 110.0, 95.5)
            } else {
                m.clone()
            }
        })
        .collect();

    let remaining = remaining_matchups_for_team(&schedule, "team1", 1);
    assert_eq!(remaining.len(), 2);
    assert!(remaining.iter().all(|m| m.week > 1));
}
