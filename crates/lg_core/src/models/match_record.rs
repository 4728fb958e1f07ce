//! Persisted match document shape.
//!
//! These are the shapes the surrounding service stores and feeds into the
//! scoring engine. The engine never touches storage itself: a record is
//! deserialized from whatever the service persisted, and the derived views
//! are computed on demand from the stored counters.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::scoring::{self, GameScore, MatchOutcome, MatchStatus, SetScore, DEFAULT_BEST_OF};

/// One side of a match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PlayerSide {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
}

/// Tournament reference embedded in a match document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TournamentRef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Raw point counters for the game in progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GamePoints {
    pub player1: u32,
    pub player2: u32,
}

/// Which side serves next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ServingPlayer {
    Player1,
    Player2,
}

/// Lifecycle phase of a stored match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MatchPhase {
    #[default]
    Scheduled,
    Live,
    Completed,
}

/// A stored match: identity, participants, counters, and timestamps.
///
/// Timestamps are UTC; the original store kept native datetimes and emitted
/// ISO-8601 on the way out, which is what `chrono`'s serde impl does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MatchRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub tournament: TournamentRef,
    pub player1: PlayerSide,
    pub player2: PlayerSide,
    #[serde(default = "default_best_of")]
    pub best_of: u32,
    #[serde(default)]
    pub sets: Vec<SetScore>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_game_score: Option<GamePoints>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serving_player: Option<ServingPlayer>,
    #[serde(default)]
    pub status: MatchPhase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_best_of() -> u32 {
    DEFAULT_BEST_OF
}

impl MatchRecord {
    /// Derive completion state from the stored set scores.
    pub fn outcome(&self) -> MatchOutcome {
        scoring::match_status(&self.sets, self.best_of)
    }

    /// Scoreboard view of the game in progress, when live counters exist.
    pub fn game_score(&self) -> Option<GameScore> {
        self.current_game_score
            .map(|points| scoring::current_game_score(points.player1, points.player2))
    }

    /// True once one side has taken enough sets.
    pub fn is_finished(&self) -> bool {
        self.outcome().status == MatchStatus::Completed
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::scoring::MatchWinner;

    fn live_match_doc() -> serde_json::Value {
        json!({
            "id": "67f3a2b1c4d5e6f701234567",
            "tournament": { "name": "Australian Open", "id": "australian-open" },
            "player1": { "name": "C. Alcaraz", "country": "ESP", "seed": 2 },
            "player2": { "name": "J. Sinner", "country": "ITA", "seed": 1 },
            "status": "live",
            "sets": [
                { "player1_score": 6, "player2_score": 4 },
                { "player1_score": 3, "player2_score": 5 }
            ],
            "current_game_score": { "player1": 4, "player2": 3 },
            "serving_player": "player1",
            "start_time": "2025-01-20T09:00:00Z"
        })
    }

    #[test]
    fn deserializes_a_stored_document() {
        let record: MatchRecord = serde_json::from_value(live_match_doc()).unwrap();
        assert_eq!(record.tournament.name, "Australian Open");
        assert_eq!(record.best_of, 3);
        assert_eq!(record.status, MatchPhase::Live);
        assert_eq!(record.serving_player, Some(ServingPlayer::Player1));
        assert_eq!(record.sets.len(), 2);
        assert!(record.end_time.is_none());
    }

    #[test]
    fn derives_outcome_from_stored_sets() {
        let record: MatchRecord = serde_json::from_value(live_match_doc()).unwrap();
        let outcome = record.outcome();
        assert_eq!(outcome.sets_won, [1, 0]);
        assert!(!record.is_finished());
    }

    #[test]
    fn derives_live_game_score() {
        let record: MatchRecord = serde_json::from_value(live_match_doc()).unwrap();
        let game = record.game_score().unwrap();
        assert_eq!(game.player1, "Ad");
        assert_eq!(game.player2, "40");
    }

    #[test]
    fn finished_match_reports_winner() {
        let mut record: MatchRecord = serde_json::from_value(live_match_doc()).unwrap();
        record.sets = vec![SetScore::new(6, 4), SetScore::new(7, 5)];
        record.current_game_score = None;

        assert!(record.is_finished());
        assert_eq!(record.outcome().winner, Some(MatchWinner::Player1));
        assert!(record.game_score().is_none());
    }

    #[test]
    fn minimal_document_fills_defaults() {
        let record: MatchRecord = serde_json::from_value(json!({
            "tournament": { "name": "Exhibition" },
            "player1": { "name": "A" },
            "player2": { "name": "B" }
        }))
        .unwrap();
        assert_eq!(record.status, MatchPhase::Scheduled);
        assert_eq!(record.best_of, 3);
        assert!(record.sets.is_empty());
        assert_eq!(record.outcome().sets_won, [0, 0]);
    }

    #[test]
    fn timestamps_round_trip_as_iso8601() {
        let record: MatchRecord = serde_json::from_value(live_match_doc()).unwrap();
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("2025-01-20T09:00:00Z"));
    }
}
