//! Set-level scoring: tiebreak detection and set completion.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Tiebreak point counters stored alongside the game counts once a set
/// reaches 6-6.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TiebreakPoints {
    pub player1: u32,
    pub player2: u32,
}

/// Games won per side within one set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SetScore {
    #[serde(default)]
    pub player1_score: u32,
    #[serde(default)]
    pub player2_score: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tiebreak_points: Option<TiebreakPoints>,
}

impl SetScore {
    pub fn new(player1_score: u32, player2_score: u32) -> Self {
        Self { player1_score, player2_score, tiebreak_points: None }
    }

    /// Attach a tiebreak point pair to the game counts.
    pub fn with_tiebreak(mut self, player1: u32, player2: u32) -> Self {
        self.tiebreak_points = Some(TiebreakPoints { player1, player2 });
        self
    }
}

/// A set enters tiebreak scoring at 6-6 and stays in it while both sides
/// are at 6 or above.
pub fn is_tiebreak(player1_score: u32, player2_score: u32) -> bool {
    (player1_score == 6 && player2_score == 6)
        || (player1_score >= 6 && player2_score >= 6)
}

/// Whether the set is over: a regular win at 6+ games with a two-game
/// lead, or a tiebreak win once the side past 6 leads by two.
pub fn is_set_complete(player1_score: u32, player2_score: u32) -> bool {
    // Regular set: at least 6 games and a lead of 2 or more.
    if (player1_score >= 6 && player1_score.saturating_sub(player2_score) >= 2)
        || (player2_score >= 6 && player2_score.saturating_sub(player1_score) >= 2)
    {
        return true;
    }

    // Tiebreak: a side is in tiebreak scoring once its count exceeds 6, and
    // wins on a 2-point margin.
    if is_tiebreak(player1_score, player2_score) {
        let p1_in_tiebreak = player1_score > 6;
        let p2_in_tiebreak = player2_score > 6;

        return (p1_in_tiebreak && player1_score.saturating_sub(player2_score) >= 2)
            || (p2_in_tiebreak && player2_score.saturating_sub(player1_score) >= 2);
    }

    false
}
