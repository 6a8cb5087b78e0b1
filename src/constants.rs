//! Application-wide constants and configuration values
//!
//! This module centralizes magic numbers used across the crate so the rules
//! of the league and the transport defaults live in one place.

#![allow(dead_code)]

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 100;

/// League scoring rules (fixed, not configurable)
pub mod scoring {
    /// Points awarded for a win
    pub const WIN_POINTS: u32 = 3;

    /// Points awarded for a draw
    pub const DRAW_POINTS: u32 = 1;

    /// Number of most recent outcomes kept in a team's form guide
    pub const RECENT_FORM_LEN: usize = 5;
}

/// Score validation bounds, enforced at the mutation boundary only
pub mod score {
    /// Lowest accepted goal count for one side of a match
    pub const MIN_GOALS: i32 = 0;

    /// Highest accepted goal count for one side of a match
    pub const MAX_GOALS: i32 = 7;
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for API domain override
    pub const API_DOMAIN: &str = "LEAGUE_API_DOMAIN";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "LEAGUE_LOG_FILE";

    /// Environment variable for HTTP timeout override in seconds
    pub const HTTP_TIMEOUT: &str = "LEAGUE_HTTP_TIMEOUT";
}

/// Retry configuration for the data source fetch loop
pub mod retry {
    /// Maximum number of retry attempts for API calls
    pub const MAX_ATTEMPTS: u32 = 3;

    /// Base delay for exponential backoff (milliseconds)
    pub const BASE_DELAY_MS: u64 = 250;
}
