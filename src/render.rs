//! Standings table and team history rendering for the terminal.

use std::io::Write;

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use league_table::league::models::{FormattedMatch, MatchOutcome, Team};

fn header_fg() -> Color {
    Color::AnsiValue(51) // Bright cyan
}
fn text_fg() -> Color {
    Color::AnsiValue(231) // Pure white
}
fn favorite_fg() -> Color {
    Color::AnsiValue(226) // Bright yellow
}

fn outcome_fg(outcome: MatchOutcome) -> Color {
    match outcome {
        MatchOutcome::Win => Color::AnsiValue(46),   // Bright green
        MatchOutcome::Draw => Color::AnsiValue(226), // Bright yellow
        MatchOutcome::Loss => Color::AnsiValue(196), // Bright red
    }
}

/// Signed goal-difference label: "+3", "0", "-2".
fn goal_difference_label(diff: i32) -> String {
    if diff > 0 {
        format!("+{diff}")
    } else {
        diff.to_string()
    }
}

/// Renders the standings table to the given writer with buffered output.
///
/// The favorite team, when present in the table, is marked with a star.
pub fn render_standings(
    out: &mut impl Write,
    teams: &[Team],
    favorite_team_id: Option<i32>,
) -> std::io::Result<()> {
    queue!(
        out,
        SetForegroundColor(header_fg()),
        Print(format!(
            "{:>3} {:<22} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>4} {:>4}  {}\n",
            "#", "Team", "GP", "W", "D", "L", "GF", "GA", "GD", "Pts", "Form"
        )),
        ResetColor
    )?;

    for team in teams {
        let is_favorite = favorite_team_id == Some(team.id);
        let marker = if is_favorite { "*" } else { " " };
        let fg = if is_favorite { favorite_fg() } else { text_fg() };

        queue!(
            out,
            SetForegroundColor(fg),
            Print(format!(
                "{:>2}{} {:<22} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>4} {:>4}  ",
                team.position,
                marker,
                team.name,
                team.games_played(),
                team.wins,
                team.draws,
                team.losses,
                team.goals_for,
                team.goals_against,
                goal_difference_label(team.goal_difference()),
                team.points,
            )),
        )?;

        for outcome in &team.recent_form {
            queue!(
                out,
                SetForegroundColor(outcome_fg(*outcome)),
                Print(outcome.letter()),
            )?;
        }
        queue!(out, ResetColor, Print("\n"))?;
    }

    out.flush()
}

/// Renders one team's match history, most recent first.
pub fn render_history(
    out: &mut impl Write,
    team_name: &str,
    history: &[FormattedMatch],
) -> std::io::Result<()> {
    queue!(
        out,
        SetForegroundColor(header_fg()),
        Print(format!("Recent matches - {team_name}\n")),
        ResetColor
    )?;

    if history.is_empty() {
        queue!(out, Print("No matches on record.\n"))?;
        return out.flush();
    }

    for entry in history {
        let venue = if entry.is_home { "home" } else { "away" };
        queue!(
            out,
            SetForegroundColor(outcome_fg(entry.result)),
            Print(entry.result.letter()),
            ResetColor,
            Print(format!(
                "  {}  {} {}-{} {}  ({venue})\n",
                entry.date,
                entry.home_team,
                entry.home_score,
                entry.away_score,
                entry.away_team,
            )),
        )?;
    }

    out.flush()
}
