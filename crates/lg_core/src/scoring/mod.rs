//! Tennis scoring engine.
//!
//! Pure, stateless derivations from raw counters: point counts become the
//! 0/15/30/40 call with deuce/advantage state, game counts become set
//! completion, and the set list becomes match completion. Nothing here does
//! I/O or validates its inputs; out-of-domain counters degrade to the
//! fallback branches rather than erroring.

pub mod game;
pub mod match_status;
pub mod set;

pub use game::{current_game_score, format_game_score, is_deuce, GameScore, GameStatus};
pub use match_status::{
    match_status, MatchOutcome, MatchStatus, MatchWinner, DEFAULT_BEST_OF,
};
pub use set::{is_set_complete, is_tiebreak, SetScore, TiebreakPoints};
