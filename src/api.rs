#[cfg(feature = "api")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::NotationError;
use crate::position::Position;
use crate::replay::{ReplayError, replay};

#[cfg_attr(feature = "api", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayRequest {
    pub fen: Option<String>, // Starting position, standard start when absent
    pub movetext: String,    // PGN movetext, e.g. "1. e4 e5 2. Nf3"
    pub time_control: Option<String>, // e.g. "600+0"
    pub elo: Option<u32>,
}

/// A position paired with the move played from it
#[cfg_attr(feature = "api", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedPosition {
    pub fen: String,
    pub uci: String,
    pub time_control: Option<String>,
    pub elo: Option<u32>,
}

#[cfg_attr(feature = "api", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayResponse {
    pub positions: Vec<AnnotatedPosition>,
    pub final_fen: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid starting position: {0}")]
    InvalidFen(NotationError),
    #[error(transparent)]
    Replay(#[from] ReplayError),
    #[cfg(feature = "api")]
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Main entry point for API consumers.
/// Replays the movetext and returns every position with the move played from it.
pub fn replay_game(request: ReplayRequest) -> Result<ReplayResponse, ApiError> {
    let start = match &request.fen {
        Some(fen) => Position::from_fen(fen).map_err(ApiError::InvalidFen)?,
        None => Position::new(),
    };

    let game = replay(&start, &request.movetext)?;

    let positions = game
        .plies()
        .iter()
        .map(|ply| AnnotatedPosition {
            fen: ply.position.to_fen(),
            uci: ply.uci.to_string(),
            time_control: request.time_control.clone(),
            elo: request.elo,
        })
        .collect();

    Ok(ReplayResponse {
        positions,
        final_fen: game.final_position().to_fen(),
    })
}

/// JSON in, JSON out
#[cfg(feature = "api")]
pub fn replay_game_json(request: &str) -> Result<String, ApiError> {
    let request: ReplayRequest = serde_json::from_str(request)?;
    let response = replay_game(request)?;
    Ok(serde_json::to_string(&response)?)
}
