//! # lg_core - Tennis Scoring and Schedule Engine
//!
//! Pure derivations over tennis match data: point counters become
//! scoreboard calls, game counts become set and match completion state, and
//! scraped tournament date text becomes ISO date ranges. A JSON string API
//! mirrors the library surface for embedding hosts.
//!
//! ## Features
//! - Stateless scoring: same counters in, same derived state out
//! - Persisted-document models for matches and tournament listings
//! - Natural-language tournament date ranges reduced to ISO dates
//! - JSON API for easy integration

pub mod api;
pub mod models;
pub mod schedule;
pub mod scoring;

// Re-export main API functions
pub use api::{game_score_json, match_status_json, tournament_dates_json};

// Re-export the scoring engine
pub use scoring::{
    current_game_score, format_game_score, is_deuce, is_set_complete, is_tiebreak, match_status,
    GameScore, GameStatus, MatchOutcome, MatchStatus, MatchWinner, SetScore, TiebreakPoints,
    DEFAULT_BEST_OF,
};

// Re-export document models
pub use models::{
    GamePoints, MatchPhase, MatchRecord, PlayerSide, ServingPlayer, Tournament,
    TournamentCategory, TournamentRef, TournamentWinner,
};

// Re-export schedule parsing
pub use schedule::{parse_date_range, DateParseError, DateRange};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
