//! JSON string entry points.
//!
//! Embedding hosts hand in a JSON request and get a JSON response back; the
//! domain types stay internal. Every request carries a `schema_version`
//! field that must match [`SCHEMA_VERSION`](crate::SCHEMA_VERSION).

use serde::{Deserialize, Serialize};

use crate::schedule;
use crate::scoring::{self, GameStatus, MatchStatus, MatchWinner, SetScore, DEFAULT_BEST_OF};

#[derive(Debug, Deserialize)]
pub struct GameScoreRequest {
    pub schema_version: u8,
    pub player1_points: u32,
    pub player2_points: u32,
}

#[derive(Debug, Serialize)]
pub struct GameScoreResponse {
    pub schema_version: u8,
    pub player1: String,
    pub player2: String,
    pub status: GameStatus,
}

#[derive(Debug, Deserialize)]
pub struct MatchStatusRequest {
    pub schema_version: u8,
    #[serde(default)]
    pub sets: Vec<SetScore>,
    #[serde(default = "default_best_of")]
    pub best_of: u32,
}

fn default_best_of() -> u32 {
    DEFAULT_BEST_OF
}

#[derive(Debug, Serialize)]
pub struct MatchStatusResponse {
    pub schema_version: u8,
    pub status: MatchStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<MatchWinner>,
    pub sets_won: [u32; 2],
}

#[derive(Debug, Deserialize)]
pub struct TournamentDatesRequest {
    pub schema_version: u8,
    pub date: String,
}

#[derive(Debug, Serialize)]
pub struct TournamentDatesResponse {
    pub schema_version: u8,
    pub start_date: String,
    pub end_date: String,
}

fn check_schema_version(found: u8) -> Result<(), String> {
    if found != crate::SCHEMA_VERSION {
        return Err(format!("Unsupported schema version: {}", found));
    }
    Ok(())
}

/// Derive the scoreboard view of a game from raw point counters.
pub fn game_score_json(request_json: &str) -> Result<String, String> {
    let request: GameScoreRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid JSON request: {}", e))?;
    check_schema_version(request.schema_version)?;

    let score = scoring::current_game_score(request.player1_points, request.player2_points);
    let response = GameScoreResponse {
        schema_version: crate::SCHEMA_VERSION,
        player1: score.player1,
        player2: score.player2,
        status: score.status,
    };
    serde_json::to_string(&response).map_err(|e| format!("Serialization error: {}", e))
}

/// Derive match completion state from a list of set scores.
pub fn match_status_json(request_json: &str) -> Result<String, String> {
    let request: MatchStatusRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid JSON request: {}", e))?;
    check_schema_version(request.schema_version)?;

    let outcome = scoring::match_status(&request.sets, request.best_of);
    let response = MatchStatusResponse {
        schema_version: crate::SCHEMA_VERSION,
        status: outcome.status,
        winner: outcome.winner,
        sets_won: outcome.sets_won,
    };
    serde_json::to_string(&response).map_err(|e| format!("Serialization error: {}", e))
}

/// Resolve raw tournament listing date text to an ISO start/end pair.
pub fn tournament_dates_json(request_json: &str) -> Result<String, String> {
    let request: TournamentDatesRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid JSON request: {}", e))?;
    check_schema_version(request.schema_version)?;

    let range = schedule::parse_date_range(&request.date)
        .map_err(|e| format!("Date parse error: {}", e))?;
    let (start_date, end_date) = range.to_iso_strings();
    let response = TournamentDatesResponse {
        schema_version: crate::SCHEMA_VERSION,
        start_date,
        end_date,
    };
    serde_json::to_string(&response).map_err(|e| format!("Serialization error: {}", e))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn game_score_request_roundtrip() {
        let request = json!({
            "schema_version": 1,
            "player1_points": 4,
            "player2_points": 3
        });

        let result = game_score_json(&request.to_string()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();

        assert_eq!(parsed["schema_version"], 1);
        assert_eq!(parsed["player1"], "Ad");
        assert_eq!(parsed["player2"], "40");
        assert_eq!(parsed["status"], "advantage1");
    }

    #[test]
    fn match_status_request_applies_best_of_default() {
        let request = json!({
            "schema_version": 1,
            "sets": [
                { "player1_score": 6, "player2_score": 4 },
                { "player1_score": 6, "player2_score": 3 }
            ]
        });

        let result = match_status_json(&request.to_string()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();

        assert_eq!(parsed["status"], "completed");
        assert_eq!(parsed["winner"], "player1");
        assert_eq!(parsed["sets_won"], json!([2, 0]));
    }

    #[test]
    fn match_status_in_progress_omits_winner() {
        let request = json!({
            "schema_version": 1,
            "sets": [
                { "player1_score": 6, "player2_score": 4 },
                { "player1_score": 4, "player2_score": 6 }
            ]
        });

        let result = match_status_json(&request.to_string()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();

        assert_eq!(parsed["status"], "in_progress");
        assert!(parsed.get("winner").is_none());
        assert_eq!(parsed["sets_won"], json!([1, 1]));
    }

    #[test]
    fn match_status_honors_explicit_best_of() {
        let request = json!({
            "schema_version": 1,
            "best_of": 5,
            "sets": [
                { "player1_score": 6, "player2_score": 4 },
                { "player1_score": 6, "player2_score": 3 }
            ]
        });

        let result = match_status_json(&request.to_string()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed["status"], "in_progress");
    }

    #[test]
    fn tournament_dates_roundtrip() {
        let request = json!({
            "schema_version": 1,
            "date": "31 March - 6 April, 2025"
        });

        let result = tournament_dates_json(&request.to_string()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();

        assert_eq!(parsed["start_date"], "2025-03-31");
        assert_eq!(parsed["end_date"], "2025-04-06");
    }

    #[test]
    fn tournament_dates_reports_parse_failures() {
        let request = json!({
            "schema_version": 1,
            "date": "dates to be announced"
        });

        let err = tournament_dates_json(&request.to_string()).unwrap_err();
        assert!(err.starts_with("Date parse error:"), "unexpected error: {}", err);
    }

    #[test]
    fn schema_version_is_enforced() {
        let request = json!({
            "schema_version": 2,
            "player1_points": 0,
            "player2_points": 0
        });

        let err = game_score_json(&request.to_string()).unwrap_err();
        assert_eq!(err, "Unsupported schema version: 2");
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = game_score_json("not json").unwrap_err();
        assert!(err.starts_with("Invalid JSON request:"), "unexpected error: {}", err);
    }
}
