//! Standings aggregation and ranking.
//!
//! Everything here is a pure function over the roster and the match log: the
//! aggregator never mutates its inputs and always hands back freshly built
//! records. Derived stats are recomputed in full after every match-log
//! mutation rather than patched incrementally, which keeps them from ever
//! drifting out of sync with the log.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::constants::scoring::{DRAW_POINTS, RECENT_FORM_LEN, WIN_POINTS};

use super::models::{Match, MatchOutcome, Team};

/// Rebuilds the full standings table from the match log.
///
/// Matches are folded in log order (insertion order, not calendar order); a
/// match referencing a team id absent from the roster is skipped without
/// error. Each team ends up with its win/draw/loss counters, goal totals,
/// points, a form guide of at most the last five outcomes (oldest to
/// newest), and a dense 1-based `position` assigned by [`rank_ordering`].
///
/// # Arguments
/// * `roster` - Teams under management; identity fields are carried over,
///   derived fields are ignored and rebuilt from zero
/// * `matches` - The complete match log
///
/// # Returns
/// A new `Vec<Team>` sorted best-first with positions assigned.
pub fn aggregate(roster: &[Team], matches: &[Match]) -> Vec<Team> {
    let mut table: HashMap<i32, Team> = roster
        .iter()
        .map(|team| {
            (
                team.id,
                Team {
                    id: team.id,
                    name: team.name.clone(),
                    coach: team.coach.clone(),
                    stadium: team.stadium.clone(),
                    ..Default::default()
                },
            )
        })
        .collect();

    for m in matches {
        // Both sides must be known; otherwise the match is silently skipped.
        if !table.contains_key(&m.home_team_id) || !table.contains_key(&m.away_team_id) {
            continue;
        }

        let (home_outcome, away_outcome) = match m.home_score.cmp(&m.away_score) {
            Ordering::Greater => (MatchOutcome::Win, MatchOutcome::Loss),
            Ordering::Less => (MatchOutcome::Loss, MatchOutcome::Win),
            Ordering::Equal => (MatchOutcome::Draw, MatchOutcome::Draw),
        };

        if let Some(home) = table.get_mut(&m.home_team_id) {
            apply_outcome(home, m.home_score, m.away_score, home_outcome);
        }
        if let Some(away) = table.get_mut(&m.away_team_id) {
            apply_outcome(away, m.away_score, m.home_score, away_outcome);
        }
    }

    let mut standings: Vec<Team> = table
        .into_values()
        .map(|mut team| {
            // Keep the tail: the five most recent outcomes, oldest first.
            if team.recent_form.len() > RECENT_FORM_LEN {
                let cut = team.recent_form.len() - RECENT_FORM_LEN;
                team.recent_form.drain(..cut);
            }
            // Points are derived from the counters as a final step, overriding
            // whatever the fold accumulated. Invariant: points == wins*3 + draws.
            team.points = team.wins * WIN_POINTS + team.draws * DRAW_POINTS;
            team
        })
        .collect();

    standings.sort_by(rank_ordering);
    for (index, team) in standings.iter_mut().enumerate() {
        team.position = index + 1;
    }

    standings
}

fn apply_outcome(team: &mut Team, scored: i32, conceded: i32, outcome: MatchOutcome) {
    team.goals_for += scored;
    team.goals_against += conceded;
    match outcome {
        MatchOutcome::Win => {
            team.wins += 1;
            team.points += WIN_POINTS;
        }
        MatchOutcome::Draw => {
            team.draws += 1;
            team.points += DRAW_POINTS;
        }
        MatchOutcome::Loss => {
            team.losses += 1;
        }
    }
    team.recent_form.push(outcome);
}

/// Total ranking order over aggregated teams, best first.
///
/// Tie-breaks in sequence: higher points, higher goal difference, higher
/// goals scored, then ascending name. Used for position assignment on every
/// aggregation path; the user-selectable single-key view ordering is a
/// separate concern and never feeds back into positions.
pub fn rank_ordering(a: &Team, b: &Team) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_difference().cmp(&a.goal_difference()))
        .then_with(|| b.goals_for.cmp(&a.goals_for))
        .then_with(|| compare_names(&a.name, &b.name))
}

/// Case-insensitive name ordering with a byte-wise tiebreak so the result is
/// total. Stands in for locale-aware collation.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
