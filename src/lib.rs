//! League Standings Engine Library
//!
//! This library derives a ranked sports-league standings table from a match
//! log: wins, draws, losses, goal totals, points, a five-match form guide,
//! and a dense 1-based position per team. A small state controller loads the
//! fixture over HTTP, applies incremental edits (recording a match,
//! correcting a score), and keeps the table consistent by recomputing it in
//! full after every change.
//!
//! # Examples
//!
//! ```rust,no_run
//! use league_table::config::Config;
//! use league_table::error::AppError;
//! use league_table::league::{LeagueState, NewMatch};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let mut state = LeagueState::new(config)?;
//!
//!     // Load roster + match log and compute the standings.
//!     state.bootstrap().await;
//!
//!     // Record a result; the table is rebuilt and re-ranked.
//!     let match_id = state.record_match(NewMatch {
//!         home_team_id: 1,
//!         away_team_id: 2,
//!         home_score: 2,
//!         away_score: 1,
//!         date: "2025-08-07".to_string(),
//!     });
//!     println!("recorded match {match_id}");
//!
//!     for team in state.teams() {
//!         println!("{:>2}. {} {} pts", team.position, team.name, team.points);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod data_source;
pub mod error;
pub mod league;
pub mod storage;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_source::fetch_league_data;
pub use error::AppError;
pub use league::{
    FormattedMatch, LeagueResponse, LeagueState, Match, MatchOutcome, NewMatch, SortDirection,
    SortField, Team, aggregate, rank_ordering,
};
pub use storage::FavoriteStore;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
