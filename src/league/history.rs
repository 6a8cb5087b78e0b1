//! Match history for a single team.
//!
//! History views are ordered by calendar date (most recent first), unlike the
//! aggregation fold which always walks the log in insertion order.

use chrono::{DateTime, NaiveDate, Utc};

use super::models::{FormattedMatch, Match, MatchOutcome, Team};

/// Returns the matches involving `team_id`, most recent first, each annotated
/// with the team's own outcome and home/away flag.
///
/// A zero team id or an empty match log yields an empty list. `limit`, when
/// given, caps the result to that many most-recent entries. Team names are
/// resolved against the roster; ids no longer present render as
/// "Unknown Team".
pub fn team_history(
    teams: &[Team],
    matches: &[Match],
    team_id: i32,
    limit: Option<usize>,
) -> Vec<FormattedMatch> {
    if team_id == 0 || matches.is_empty() {
        return Vec::new();
    }

    let mut involved: Vec<&Match> = matches
        .iter()
        .filter(|m| m.home_team_id == team_id || m.away_team_id == team_id)
        .collect();

    // Stable sort keeps log order among matches on the same date.
    involved.sort_by_key(|m| std::cmp::Reverse(parse_match_date(&m.date)));

    if let Some(limit) = limit {
        involved.truncate(limit);
    }

    involved
        .into_iter()
        .map(|m| {
            let is_home = m.home_team_id == team_id;
            let (own_score, opponent_score) = if is_home {
                (m.home_score, m.away_score)
            } else {
                (m.away_score, m.home_score)
            };
            let result = match own_score.cmp(&opponent_score) {
                std::cmp::Ordering::Greater => MatchOutcome::Win,
                std::cmp::Ordering::Less => MatchOutcome::Loss,
                std::cmp::Ordering::Equal => MatchOutcome::Draw,
            };

            FormattedMatch {
                id: m.id,
                date: m.date.clone(),
                home_team: team_name(teams, m.home_team_id),
                away_team: team_name(teams, m.away_team_id),
                home_score: m.home_score,
                away_score: m.away_score,
                result,
                is_home,
            }
        })
        .collect()
}

fn team_name(teams: &[Team], id: i32) -> String {
    teams
        .iter()
        .find(|t| t.id == id)
        .map(|t| t.name.clone())
        .unwrap_or_else(|| "Unknown Team".to_string())
}

/// Parses a match date as RFC 3339 or a bare `YYYY-MM-DD` day. Unparseable
/// dates sort as the oldest possible instant.
fn parse_match_date(raw: &str) -> DateTime<Utc> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return timestamp.with_timezone(&Utc);
    }
    if let Ok(day) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return day.and_hms_opt(0, 0, 0).map_or(DateTime::<Utc>::MIN_UTC, |dt| dt.and_utc());
    }
    DateTime::<Utc>::MIN_UTC
}
