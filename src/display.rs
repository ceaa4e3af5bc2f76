//! Coloured terminal rendering of schedules, brackets and strength of schedule

use crate::error::AppError;
use crate::schedule::{Matchup, Team};
use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::collections::HashMap;
use std::io::Write;

const HEADER_FG: Color = Color::AnsiValue(51); // cyan
const TEAM_FG: Color = Color::AnsiValue(231); // white
const MUTED_FG: Color = Color::AnsiValue(250);
const PLAYOFF_FG: Color = Color::AnsiValue(226); // yellow

fn team_names(teams: &[Team]) -> HashMap<&str, &str> {
    teams
        .iter()
        .map(|t| (t.id.as_str(), t.name.as_str()))
        .collect()
}

fn display_name<'a>(names: &HashMap<&str, &'a str>, team_id: &'a str) -> &'a str {
    names.get(team_id).copied().unwrap_or(team_id)
}

fn write_matchup<W: Write>(
    out: &mut W,
    matchup: &Matchup,
    names: &HashMap<&str, &str>,
) -> Result<(), AppError> {
    let team_a = display_name(names, &matchup.team_a.team_id);
    let team_b = display_name(names, &matchup.team_b.team_id);
    let label_fg = if matchup.is_playoffs {
        PLAYOFF_FG
    } else {
        MUTED_FG
    };
    let label = match matchup.playoff_round {
        Some(round) => format!("{:<14}", round.as_str()),
        None => format!("{:<14}", matchup.id),
    };

    queue!(
        out,
        Print("  "),
        SetForegroundColor(label_fg),
        Print(label),
        SetForegroundColor(TEAM_FG),
        Print(format!("{team_a:>24}")),
        SetForegroundColor(MUTED_FG),
        Print("  vs  "),
        SetForegroundColor(TEAM_FG),
        Print(format!("{team_b}\n")),
        ResetColor
    )?;
    Ok(())
}

fn write_week_header<W: Write>(out: &mut W, week: u32) -> Result<(), AppError> {
    queue!(
        out,
        SetForegroundColor(HEADER_FG),
        Print(format!("WEEK {week}\n")),
        ResetColor
    )?;
    Ok(())
}

/// Writes matchups grouped under week headers, in schedule order.
pub fn render_schedule<W: Write>(
    out: &mut W,
    schedule: &[Matchup],
    teams: &[Team],
) -> Result<(), AppError> {
    let names = team_names(teams);
    let mut current_week = None;

    for matchup in schedule {
        if current_week != Some(matchup.week) {
            if current_week.is_some() {
                queue!(out, Print("\n"))?;
            }
            write_week_header(out, matchup.week)?;
            current_week = Some(matchup.week);
        }
        write_matchup(out, matchup, &names)?;
    }

    out.flush()?;
    Ok(())
}

/// Writes one playoff round with the seeds that made the bracket.
pub fn render_bracket_round<W: Write>(
    out: &mut W,
    seeds: &[String],
    matchups: &[Matchup],
    teams: &[Team],
) -> Result<(), AppError> {
    let names = team_names(teams);

    queue!(
        out,
        SetForegroundColor(HEADER_FG),
        Print("SEEDS\n"),
        ResetColor
    )?;
    for (i, seed) in seeds.iter().enumerate() {
        queue!(
            out,
            SetForegroundColor(MUTED_FG),
            Print(format!("  {:>2}. ", i + 1)),
            SetForegroundColor(TEAM_FG),
            Print(format!("{}\n", display_name(&names, seed))),
            ResetColor
        )?;
    }
    queue!(out, Print("\n"))?;

    render_schedule(out, matchups, teams)
}

/// Writes a team's strength of schedule as a percentage.
pub fn render_strength_of_schedule<W: Write>(
    out: &mut W,
    team_id: &str,
    from_week: u32,
    sos: f64,
    teams: &[Team],
) -> Result<(), AppError> {
    let names = team_names(teams);
    queue!(
        out,
        SetForegroundColor(HEADER_FG),
        Print(format!(
            "STRENGTH OF SCHEDULE FROM WEEK {from_week}\n"
        )),
        SetForegroundColor(TEAM_FG),
        Print(format!("  {:<24}", display_name(&names, team_id))),
        SetForegroundColor(PLAYOFF_FG),
        Print(format!("{:.1}%\n", sos * 100.0)),
        ResetColor
    )?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{PlayoffRound, generate_regular_season_schedule};
    use crate::testing_utils::TestDataBuilder;

    fn rendered<F>(render: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<(), AppError>,
    {
        let mut buffer = Vec::new();
        render(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_schedule_lists_weeks_and_team_names() {
        let config = TestDataBuilder::create_config(4, 2, 4);
        let schedule = generate_regular_season_schedule(&config).unwrap();
        let output = rendered(|out| render_schedule(out, &schedule, &config.teams));

        assert!(output.contains("WEEK 1"));
        assert!(output.contains("WEEK 2"));
        assert!(output.contains("Team 1"));
        assert!(output.contains("week2_match2"));
    }

    #[test]
    fn test_unknown_team_falls_back_to_id() {
        let schedule = vec![Matchup::regular("week1_match1", 1, "ghost", "team1")];
        let teams = TestDataBuilder::create_teams(2);
        let output = rendered(|out| render_schedule(out, &schedule, &teams));
        assert!(output.contains("ghost"));
        assert!(output.contains("Team 1"));
    }

    #[test]
    fn test_bracket_round_shows_seeds_and_round() {
        let teams = TestDataBuilder::create_teams(4);
        let seeds: Vec<String> = teams.iter().map(|t| t.id.clone()).collect();
        let round = vec![Matchup::playoff(
            "week15_playoff1",
            15,
            PlayoffRound::Semifinal,
            "team1",
            "team4",
        )];
        let output = rendered(|out| render_bracket_round(out, &seeds, &round, &teams));
        assert!(output.contains("SEEDS"));
        assert!(output.contains(" 4. "));
        assert!(output.contains("semifinal"));
        assert!(output.contains("WEEK 15"));
    }

    #[test]
    fn test_strength_of_schedule_percentage() {
        let teams = TestDataBuilder::create_teams(2);
        let output =
            rendered(|out| render_strength_of_schedule(out, "team2", 5, 0.625, &teams));
        assert!(output.contains("FROM WEEK 5"));
        assert!(output.contains("Team 2"));
        assert!(output.contains("62.5%"));
    }
}
