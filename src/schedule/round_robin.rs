//! Circle-method round-robin pairing over team indices

use crate::constants::MIN_TEAMS;
use crate::error::AppError;
use tracing::trace;

/// One week of pairings, as indices into the caller's team table.
pub type Round = Vec<(usize, usize)>;

/// Builds a single round-robin for `team_count` teams.
///
/// Position 0 stays fixed while the remaining positions rotate one step per
/// round, so every index meets every other index exactly once across the
/// `team_count - 1` returned rounds. Each round has `team_count / 2` pairs.
///
/// # Errors
/// * `AppError::OddTeamCount` - `team_count` is odd
/// * `AppError::NotEnoughTeams` - fewer than 2 teams
pub fn generate_round_robin(team_count: usize) -> Result<Vec<Round>, AppError> {
    if team_count % 2 != 0 {
        return Err(AppError::odd_team_count(team_count));
    }
    if team_count < MIN_TEAMS {
        return Err(AppError::not_enough_teams(team_count));
    }

    let round_count = team_count - 1;
    let mut rounds = Vec::with_capacity(round_count);
    let mut positions: Vec<usize> = (0..team_count).collect();

    for round in 0..round_count {
        let pairs: Round = (0..team_count / 2)
            .map(|i| (positions[i], positions[team_count - 1 - i]))
            .collect();
        trace!("Round {}: {:?}", round + 1, pairs);
        rounds.push(pairs);
        positions = rotate(&positions);
    }

    Ok(rounds)
}

/// Moves the last position to index 1, shifting the rest right. Index 0 never moves.
fn rotate(positions: &[usize]) -> Vec<usize> {
    match positions.split_last() {
        Some((&last, rest)) if positions.len() > 2 => {
            let mut next = Vec::with_capacity(positions.len());
            next.push(rest[0]);
            next.push(last);
            next.extend_from_slice(&rest[1..]);
            next
        }
        _ => positions.to_vec(),
    }
}

/// Round played in `week` (1-based). Weeks past the end of the cycle wrap around
/// and repeat earlier pairings exactly.
pub fn round_for_week(rounds: &[Round], week: u32) -> Option<&Round> {
    if rounds.is_empty() || week == 0 {
        return None;
    }
    rounds.get((week as usize - 1) % rounds.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_odd_team_count_is_rejected() {
        for count in [1, 3, 5, 11] {
            let result = generate_round_robin(count);
            assert!(
                matches!(result, Err(AppError::OddTeamCount { count: c }) if c == count),
                "expected OddTeamCount for {count}"
            );
        }
    }

    #[test]
    fn test_zero_teams_is_rejected() {
        assert!(matches!(
            generate_round_robin(0),
            Err(AppError::NotEnoughTeams { count: 0 })
        ));
    }

    #[test]
    fn test_two_teams_single_round() {
        let rounds = generate_round_robin(2).unwrap();
        assert_eq!(rounds, vec![vec![(0, 1)]]);
    }

    #[test]
    fn test_first_round_pairs_mirror_positions() {
        let rounds = generate_round_robin(6).unwrap();
        assert_eq!(rounds[0], vec![(0, 5), (1, 4), (2, 3)]);
        // After one rotation: [0, 5, 1, 2, 3, 4]
        assert_eq!(rounds[1], vec![(0, 4), (5, 3), (1, 2)]);
    }

    #[test]
    fn test_round_shape() {
        for n in (2..=16).step_by(2) {
            let rounds = generate_round_robin(n).unwrap();
            assert_eq!(rounds.len(), n - 1);
            for round in &rounds {
                assert_eq!(round.len(), n / 2);
                let seen: HashSet<usize> = round.iter().flat_map(|&(a, b)| [a, b]).collect();
                assert_eq!(seen.len(), n, "every index plays once per round");
            }
        }
    }

    #[test]
    fn test_full_cycle_covers_every_pair_once() {
        for n in (2..=20).step_by(2) {
            let rounds = generate_round_robin(n).unwrap();
            let mut pairs = HashSet::new();
            for &(a, b) in rounds.iter().flatten() {
                assert_ne!(a, b);
                let key = (a.min(b), a.max(b));
                assert!(pairs.insert(key), "pair {key:?} repeated for n={n}");
            }
            assert_eq!(pairs.len(), n * (n - 1) / 2);
        }
    }

    #[test]
    fn test_rotate_keeps_first_position() {
        let positions = vec![0, 1, 2, 3];
        let rotated = rotate(&positions);
        assert_eq!(rotated, vec![0, 3, 1, 2]);
        // Input is left untouched
        assert_eq!(positions, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_round_for_week_wraps() {
        let rounds = generate_round_robin(10).unwrap();
        assert_eq!(round_for_week(&rounds, 1), round_for_week(&rounds, 10));
        assert_eq!(round_for_week(&rounds, 2), round_for_week(&rounds, 11));
        assert_ne!(round_for_week(&rounds, 1), round_for_week(&rounds, 2));
        assert_eq!(round_for_week(&rounds, 0), None);
        assert_eq!(round_for_week(&[], 1), None);
    }
}
