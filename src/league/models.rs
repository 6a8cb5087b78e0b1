use serde::{Deserialize, Serialize};

/// Outcome of a single match from one team's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchOutcome {
    Win,
    Draw,
    Loss,
}

impl MatchOutcome {
    /// Single-letter label used in the form guide column.
    pub fn letter(&self) -> char {
        match self {
            MatchOutcome::Win => 'W',
            MatchOutcome::Draw => 'D',
            MatchOutcome::Loss => 'L',
        }
    }
}

/// Roster entry plus the stats derived from the match log.
///
/// Identity fields (`id`, `name`, `coach`, `stadium`) come from the fixture
/// and are stable; everything else is rebuilt from scratch on every
/// aggregation pass, so the fixture may omit the derived fields entirely.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Team {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub coach: String,
    #[serde(default)]
    pub stadium: String,
    #[serde(default)]
    pub points: u32,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub draws: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(rename = "goalsFor", default)]
    pub goals_for: i32,
    #[serde(rename = "goalsAgainst", default)]
    pub goals_against: i32,
    #[serde(rename = "recentForm", default)]
    pub recent_form: Vec<MatchOutcome>,
    #[serde(default)]
    pub position: usize,
}

impl Team {
    pub fn games_played(&self) -> u32 {
        self.wins + self.draws + self.losses
    }

    pub fn goal_difference(&self) -> i32 {
        self.goals_for - self.goals_against
    }
}

/// One recorded match. Scores are validated against the 0-7 range at the
/// mutation boundary only; matches already in the log are taken as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    pub id: i32,
    #[serde(rename = "homeTeamId")]
    pub home_team_id: i32,
    #[serde(rename = "awayTeamId")]
    pub away_team_id: i32,
    #[serde(rename = "homeScore")]
    pub home_score: i32,
    #[serde(rename = "awayScore")]
    pub away_score: i32,
    /// RFC 3339 timestamp or bare `YYYY-MM-DD` date. Only used for ordering
    /// a team's match history, never for standings.
    pub date: String,
}

/// Match data supplied by a caller before the controller assigns an id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMatch {
    #[serde(rename = "homeTeamId")]
    pub home_team_id: i32,
    #[serde(rename = "awayTeamId")]
    pub away_team_id: i32,
    #[serde(rename = "homeScore")]
    pub home_score: i32,
    #[serde(rename = "awayScore")]
    pub away_score: i32,
    pub date: String,
}

/// A match annotated for display in one team's history view.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FormattedMatch {
    pub id: i32,
    pub date: String,
    #[serde(rename = "homeTeam")]
    pub home_team: String,
    #[serde(rename = "awayTeam")]
    pub away_team: String,
    #[serde(rename = "homeScore")]
    pub home_score: i32,
    #[serde(rename = "awayScore")]
    pub away_score: i32,
    /// Outcome from the subject team's perspective.
    pub result: MatchOutcome,
    #[serde(rename = "isHome")]
    pub is_home: bool,
}

/// Column the user-selectable table view sorts by. Distinct from the ranking
/// comparator, which always applies the full tie-break sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Position,
    Name,
    Points,
    Wins,
    Draws,
    Losses,
    GoalsFor,
    GoalsAgainst,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Wire shape of the fixture endpoint: the full roster and match log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueResponse {
    pub teams: Vec<Team>,
    pub matches: Vec<Match>,
}
