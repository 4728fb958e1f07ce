//! Match-level completion state derived from per-set game counts.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::set::{is_set_complete, SetScore};

/// Sets are best-of-3 unless the caller says otherwise.
pub const DEFAULT_BEST_OF: u32 = 3;

/// Which side took the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MatchWinner {
    Player1,
    Player2,
}

/// Completion state of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Completed,
    InProgress,
}

/// Derived outcome view: completion status, winner once decided, and the
/// completed-set tally for both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MatchOutcome {
    pub status: MatchStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<MatchWinner>,
    pub sets_won: [u32; 2],
}

/// Tally completed sets and decide whether the match is over.
///
/// Incomplete sets contribute nothing to the tally even when listed. A
/// completed set goes to the side with the higher game count, and the match
/// is over once one side holds `best_of / 2 + 1` completed sets. The tally
/// is reported either way.
pub fn match_status(sets: &[SetScore], best_of: u32) -> MatchOutcome {
    let mut player1_sets = 0u32;
    let mut player2_sets = 0u32;

    for set in sets {
        if is_set_complete(set.player1_score, set.player2_score) {
            if set.player1_score > set.player2_score {
                player1_sets += 1;
            } else {
                player2_sets += 1;
            }
        }
    }

    let sets_to_win = best_of / 2 + 1;
    let sets_won = [player1_sets, player2_sets];

    if player1_sets >= sets_to_win {
        MatchOutcome {
            status: MatchStatus::Completed,
            winner: Some(MatchWinner::Player1),
            sets_won,
        }
    } else if player2_sets >= sets_to_win {
        MatchOutcome {
            status: MatchStatus::Completed,
            winner: Some(MatchWinner::Player2),
            sets_won,
        }
    } else {
        MatchOutcome { status: MatchStatus::InProgress, winner: None, sets_won }
    }
}
