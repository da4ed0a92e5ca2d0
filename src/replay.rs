//! Playing a whole movetext blob from a starting position.

use log::debug;
use thiserror::Error;

use crate::{error::NotationError, moves::UciMove, movetext, position::Position, types::Side};

/// One half-move of a replayed game
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ply {
    /// Position the move was played from
    pub position: Position,
    pub side: Side,
    pub san: String,
    pub uci: UciMove,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameReplay {
    plies: Vec<Ply>,
    final_position: Position,
}

/// A token that could not be resolved or played, with its 0-based ply index
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("ply {ply} (`{token}`): {source}")]
pub struct ReplayError {
    pub ply: usize,
    pub token: String,
    #[source]
    pub source: NotationError,
}

/// Resolve and play every SAN token of `movetext` in order, starting from
/// `start`. Stops at the first token that fails.
pub fn replay(start: &Position, movetext: &str) -> Result<GameReplay, ReplayError> {
    let mut plies = Vec::new();
    let mut position = start.clone();

    for (ply, token) in movetext::tokens(movetext).enumerate() {
        let (uci, next) = position.play_san(token).map_err(|source| ReplayError {
            ply,
            token: token.to_string(),
            source,
        })?;

        plies.push(Ply {
            side: position.side,
            san: token.to_string(),
            uci,
            position,
        });
        position = next;
    }

    debug!("replayed {} plies, final position {position}", plies.len());

    Ok(GameReplay {
        plies,
        final_position: position,
    })
}

impl GameReplay {
    pub fn plies(&self) -> &[Ply] {
        &self.plies
    }

    pub fn len(&self) -> usize {
        self.plies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plies.is_empty()
    }

    pub fn final_position(&self) -> &Position {
        &self.final_position
    }

    pub fn uci_moves(&self) -> Vec<UciMove> {
        self.plies.iter().map(|ply| ply.uci).collect()
    }

    /// FEN of every position in the game, the start and final position included
    pub fn fens(&self) -> Vec<String> {
        self.plies
            .iter()
            .map(|ply| &ply.position)
            .chain(std::iter::once(&self.final_position))
            .map(Position::to_fen)
            .collect()
    }

    /// How many positions of the game share `position`'s key
    pub fn occurrences(&self, position: &Position) -> usize {
        let key = position.key();

        self.plies
            .iter()
            .map(|ply| &ply.position)
            .chain(std::iter::once(&self.final_position))
            .filter(|seen| seen.key() == key)
            .count()
    }
}
