//! Document models for matches and tournament listings.

pub mod match_record;
pub mod tournament;

pub use match_record::{
    GamePoints, MatchPhase, MatchRecord, PlayerSide, ServingPlayer, TournamentRef,
};
pub use tournament::{
    absolutize_url, Tournament, TournamentCategory, TournamentWinner, ATP_BASE_URL,
};
