//! League domain: data model, standings aggregation, and the state
//! controller that ties them to the data source and favorite store.

pub mod history;
pub mod models;
pub mod standings;
pub mod state;

pub use models::{
    FormattedMatch, LeagueResponse, Match, MatchOutcome, NewMatch, SortDirection, SortField, Team,
};
pub use standings::{aggregate, rank_ordering};
pub use state::LeagueState;
