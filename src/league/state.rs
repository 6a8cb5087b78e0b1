//! League state controller.
//!
//! [`LeagueState`] owns the roster, the match log, and the view preferences,
//! and is the only place either collection is mutated. Every match-log
//! mutation re-runs the full aggregation pipeline; derived stats are never
//! patched in place. The struct is meant to be owned by a single logical
//! caller (one event loop, one CLI invocation) - there is no internal
//! locking, and overlapping initial loads are not guarded against.

use reqwest::Client;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::constants::score::{MAX_GOALS, MIN_GOALS};
use crate::data_source::{create_http_client_with_timeout, fetch_league_data};
use crate::error::AppError;
use crate::storage::FavoriteStore;

use super::history;
use super::models::{
    FormattedMatch, LeagueResponse, Match, NewMatch, SortDirection, SortField, Team,
};
use super::standings::{aggregate, compare_names};

/// Owned league state: roster, match log, and view preferences.
pub struct LeagueState {
    config: Config,
    client: Client,
    favorite_store: FavoriteStore,
    teams: Vec<Team>,
    matches: Vec<Match>,
    is_loading: bool,
    sort_by: SortField,
    sort_direction: SortDirection,
    favorite_team_id: Option<i32>,
}

impl LeagueState {
    /// Creates a controller with the favorite store at its default platform
    /// location.
    pub fn new(config: Config) -> Result<Self, AppError> {
        Self::with_favorite_store(config, FavoriteStore::new())
    }

    /// Creates a controller with a caller-supplied favorite store.
    pub fn with_favorite_store(
        config: Config,
        favorite_store: FavoriteStore,
    ) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
        Ok(Self {
            config,
            client,
            favorite_store,
            teams: Vec::new(),
            matches: Vec::new(),
            is_loading: false,
            sort_by: SortField::default(),
            sort_direction: SortDirection::default(),
            favorite_team_id: None,
        })
    }

    /// Restores the persisted favorite team (if any), then loads the league
    /// fixture. Meant to be called once at startup.
    pub async fn bootstrap(&mut self) {
        self.favorite_team_id = self.favorite_store.load().await;
        if let Some(id) = self.favorite_team_id {
            debug!("Restored favorite team id {id}");
        }
        self.fetch_initial_data().await;
    }

    /// Loads the roster and match log from the configured endpoint and
    /// computes the standings.
    ///
    /// Fails soft: any fetch or parse failure resets both collections to
    /// empty and is logged, never surfaced. The loading flag is set for the
    /// duration of the call on both paths.
    pub async fn fetch_initial_data(&mut self) {
        self.is_loading = true;

        match fetch_league_data(&self.client, &self.config).await {
            Ok(response) => {
                self.apply_fixture(response);
            }
            Err(e) => {
                warn!("Failed to load league data, resetting to empty state: {e}");
                self.teams.clear();
                self.matches.clear();
            }
        }

        self.is_loading = false;
    }

    /// Installs a fixture directly and computes the standings from it. The
    /// network load path goes through here; callers with a local fixture can
    /// use it to skip the fetch.
    pub fn apply_fixture(&mut self, response: LeagueResponse) {
        self.matches = response.matches;
        self.teams = aggregate(&response.teams, &self.matches);
        info!(
            "Standings computed for {} teams from {} matches",
            self.teams.len(),
            self.matches.len()
        );
    }

    /// Ranked roster, best first (position order).
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// The full match log in insertion order.
    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn sort_by(&self) -> SortField {
        self.sort_by
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn favorite_team_id(&self) -> Option<i32> {
        self.favorite_team_id
    }

    /// The favorite team, if the persisted id still matches a roster entry.
    /// A stale id simply yields `None`.
    pub fn favorite_team(&self) -> Option<&Team> {
        let id = self.favorite_team_id?;
        self.teams.iter().find(|t| t.id == id)
    }

    /// Matches involving the given team, most recent first, annotated with
    /// the team's own result. See [`history::team_history`].
    pub fn team_history(&self, team_id: i32, limit: Option<usize>) -> Vec<FormattedMatch> {
        history::team_history(&self.teams, &self.matches, team_id, limit)
    }

    /// Selects the view sort column. Selecting the active column flips the
    /// direction; selecting a new column resets it to ascending.
    pub fn set_sort_preference(&mut self, field: SortField) {
        if self.sort_by == field {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_by = field;
            self.sort_direction = SortDirection::Asc;
        }
    }

    /// The roster ordered by the active single-key view preference. This is
    /// presentation ordering only; it never feeds back into positions.
    pub fn sorted_view(&self) -> Vec<Team> {
        let mut view = self.teams.clone();
        view.sort_by(|a, b| {
            let ordering = match self.sort_by {
                SortField::Position => a.position.cmp(&b.position),
                SortField::Name => compare_names(&a.name, &b.name),
                SortField::Points => a.points.cmp(&b.points),
                SortField::Wins => a.wins.cmp(&b.wins),
                SortField::Draws => a.draws.cmp(&b.draws),
                SortField::Losses => a.losses.cmp(&b.losses),
                SortField::GoalsFor => a.goals_for.cmp(&b.goals_for),
                SortField::GoalsAgainst => a.goals_against.cmp(&b.goals_against),
            };
            match self.sort_direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
        view
    }

    /// Toggles the favorite team: picking the current favorite clears it,
    /// anything else becomes the new favorite. The persisted value follows
    /// the in-memory state; persistence failures are logged, not surfaced.
    pub async fn set_favorite_team(&mut self, team_id: Option<i32>) {
        if team_id.is_some() && self.favorite_team_id == team_id {
            self.favorite_team_id = None;
            if let Err(e) = self.favorite_store.clear().await {
                warn!("Failed to clear persisted favorite team: {e}");
            }
            return;
        }

        self.favorite_team_id = team_id;
        let result = match team_id {
            Some(id) => self.favorite_store.save(id).await,
            None => self.favorite_store.clear().await,
        };
        if let Err(e) = result {
            warn!("Failed to persist favorite team: {e}");
        }
    }

    /// Edits a team's coach and stadium in place. Returns `false` when the
    /// id is unknown. Identity metadata only - standings are untouched and
    /// no re-aggregation runs.
    pub fn edit_team_profile(&mut self, team_id: i32, coach: &str, stadium: &str) -> bool {
        let Some(team) = self.teams.iter_mut().find(|t| t.id == team_id) else {
            return false;
        };
        team.coach = coach.to_string();
        team.stadium = stadium.to_string();
        true
    }

    /// Overwrites a match result and rebuilds the standings.
    ///
    /// Both scores must lie in the accepted range and the match id must
    /// exist; otherwise returns `false` with the roster and match log left
    /// exactly as they were.
    pub fn correct_match_result(
        &mut self,
        match_id: i32,
        new_home_score: i32,
        new_away_score: i32,
    ) -> bool {
        if !(MIN_GOALS..=MAX_GOALS).contains(&new_home_score)
            || !(MIN_GOALS..=MAX_GOALS).contains(&new_away_score)
        {
            debug!(
                "Rejected score correction for match {match_id}: {new_home_score}-{new_away_score} out of range"
            );
            return false;
        }

        let Some(entry) = self.matches.iter_mut().find(|m| m.id == match_id) else {
            debug!("Rejected score correction: match {match_id} not found");
            return false;
        };
        entry.home_score = new_home_score;
        entry.away_score = new_away_score;

        info!("Corrected match {match_id} to {new_home_score}-{new_away_score}");
        self.rebuild_standings();
        true
    }

    /// Appends a new match to the log and rebuilds the standings. The id is
    /// always one above the highest existing id (1 on an empty log).
    pub fn record_match(&mut self, new_match: NewMatch) -> i32 {
        let new_id = self
            .matches
            .iter()
            .map(|m| m.id)
            .max()
            .unwrap_or(0)
            .max(0)
            + 1;

        self.matches.push(Match {
            id: new_id,
            home_team_id: new_match.home_team_id,
            away_team_id: new_match.away_team_id,
            home_score: new_match.home_score,
            away_score: new_match.away_score,
            date: new_match.date,
        });

        info!("Recorded match {new_id}");
        self.rebuild_standings();
        new_id
    }

    /// Full recompute of every derived field from the match log, then
    /// re-rank. The current roster supplies identity metadata only.
    fn rebuild_standings(&mut self) {
        self.teams = aggregate(&self.teams, &self.matches);
    }
}
