pub mod json_api;

pub use json_api::{
    game_score_json, match_status_json, tournament_dates_json, GameScoreRequest,
    GameScoreResponse, MatchStatusRequest, MatchStatusResponse, TournamentDatesRequest,
    TournamentDatesResponse,
};
