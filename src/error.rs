use thiserror::Error;

use crate::types::Square;

pub type Result<T> = std::result::Result<T, NotationError>;

/// Every failure the notation engine reports.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("malformed FEN: {0}")]
    MalformedFen(#[from] FenError),
    #[error("invalid UCI move `{0}`")]
    InvalidMoveFormat(String),
    #[error("unsupported notation `{0}`")]
    UnsupportedNotation(String),
    #[error("ambiguous move `{san}` (candidates: {})", format_squares(.candidates))]
    AmbiguousMove { san: String, candidates: Vec<Square> },
    #[error("no legal origin for `{0}`")]
    NoLegalOrigin(String),
}

/// Which part of a FEN record was rejected
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("expected 6 fields, found {0}")]
    FieldCount(usize),
    #[error("expected 8 ranks, found {0}")]
    RankCount(usize),
    #[error("rank {rank} covers {files} files")]
    RankWidth { rank: u8, files: usize },
    #[error("unexpected placement character `{0}`")]
    PlacementChar(char),
    #[error("side to move must be `w` or `b`, found `{0}`")]
    SideToMove(String),
    #[error("invalid castling field `{0}`")]
    Castling(String),
    #[error("invalid en passant field `{0}`")]
    EnPassant(String),
    #[error("invalid halfmove clock `{0}`")]
    HalfmoveClock(String),
    #[error("invalid fullmove number `{0}`")]
    FullmoveNumber(String),
}

fn format_squares(squares: &[Square]) -> String {
    squares
        .iter()
        .map(Square::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ambiguous_message_lists_candidates() {
        let error = NotationError::AmbiguousMove {
            san: "Nd2".to_string(),
            candidates: vec![Square::B1, Square::F3],
        };

        assert_eq!(
            error.to_string(),
            "ambiguous move `Nd2` (candidates: b1, f3)"
        );
    }

    #[test]
    fn test_fen_error_converts() {
        let error: NotationError = FenError::RankCount(7).into();
        assert_eq!(error.to_string(), "malformed FEN: expected 8 ranks, found 7");
    }
}
