//! Point-level scoring for a single game.
//!
//! Raw point counters become the traditional 0/15/30/40 call, plus the
//! deuce/advantage state once both sides are past three points. Counters
//! are never capped: repeated deuces keep incrementing both sides, and only
//! the display rule changes at three and above.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Point names for counts 0 through 4. Counts past the table render as
/// plain decimal strings.
static POINT_NAMES: [&str; 5] = ["0", "15", "30", "40", "Ad"];

/// Convert a raw point count to its scoreboard name.
pub fn format_game_score(points: u32) -> String {
    match POINT_NAMES.get(points as usize) {
        Some(name) => (*name).to_string(),
        None => points.to_string(),
    }
}

/// Both sides at three or more points with equal counts.
pub fn is_deuce(player1_points: u32, player2_points: u32) -> bool {
    player1_points >= 3 && player2_points >= 3 && player1_points == player2_points
}

/// Game-level status attached to a formatted score pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Normal,
    Deuce,
    Advantage1,
    Advantage2,
}

/// Scoreboard view of the game in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GameScore {
    pub player1: String,
    pub player2: String,
    pub status: GameStatus,
}

/// Derive the scoreboard view of the current game.
///
/// Branch order is part of the contract: deuce first, then advantage (which
/// requires *both* sides at 3+), then plain formatting. With one side at 3+
/// and the other below 3 the advantage branch never fires, so a 4-2 game
/// renders as "Ad" / "30" with status `normal`.
pub fn current_game_score(player1_points: u32, player2_points: u32) -> GameScore {
    if is_deuce(player1_points, player2_points) {
        return GameScore {
            player1: "40".to_string(),
            player2: "40".to_string(),
            status: GameStatus::Deuce,
        };
    }

    if player1_points >= 3 && player2_points >= 3 {
        if player1_points > player2_points {
            return GameScore {
                player1: "Ad".to_string(),
                player2: "40".to_string(),
                status: GameStatus::Advantage1,
            };
        }
        if player2_points > player1_points {
            return GameScore {
                player1: "40".to_string(),
                player2: "Ad".to_string(),
                status: GameStatus::Advantage2,
            };
        }
    }

    GameScore {
        player1: format_game_score(player1_points),
        player2: format_game_score(player2_points),
        status: GameStatus::Normal,
    }
}
