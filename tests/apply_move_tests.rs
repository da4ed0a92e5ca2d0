
use chess_notation::{
    error::NotationError,
    position::Position,
    types::{CastleRight, Piece, Side, Square},
};
use test_utils::*;

const CASTLING_FEN: &str = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";

#[test]
fn test_double_push_sets_en_passant_target() {
    let after_e4 = Position::new().apply(&uci("e2e4")).unwrap();

    assert_eq!(after_e4.en_passant, Some(Square::E3));
    assert_eq!(after_e4.side, Side::Black);
    assert_eq!(
        after_e4.to_fen(),
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
    );

    let after_nf6 = after_e4.apply(&uci("g8f6")).unwrap();
    assert_eq!(after_nf6.en_passant, None, "target lasts for one move only");
    assert_eq!(after_nf6.fullmove_number, 2);
    assert_eq!(after_nf6.halfmove_clock, 1);
}

#[test]
fn test_source_position_is_unchanged() {
    let start = Position::new();
    let before = start.clone();

    let _ = start.apply(&uci("g1f3")).unwrap();

    assert_eq!(start, before);
}

#[test]
fn test_kingside_castling_moves_the_rook() {
    let position = position_from_fen(CASTLING_FEN);
    let (uci, next) = position.play_san("O-O").unwrap();

    assert_eq!(uci.to_string(), "e1g1");
    assert_eq!(next.piece_at(Square::G1), Some(unit(Side::White, Piece::King)));
    assert_eq!(next.piece_at(Square::F1), Some(unit(Side::White, Piece::Rook)));
    assert_eq!(next.piece_at(Square::H1), None);
    assert_eq!(next.to_fen(), "r3k2r/8/8/8/8/8/8/R4RK1 b kq - 1 1");
}

#[test]
fn test_two_square_king_move_without_rook_keeps_f1() {
    let position = position_from_fen("4k3/8/8/8/8/8/8/4KB2 w - - 0 1");
    let next = position.apply(&uci("e1g1")).unwrap();

    assert_eq!(next.piece_at(Square::F1), Some(unit(Side::White, Piece::Bishop)));
    assert_eq!(next.to_fen(), "4k3/8/8/8/8/8/8/5BK1 b - - 1 1");
}

#[test]
fn test_queenside_castling_moves_the_rook() {
    let position = position_from_fen(CASTLING_FEN)
        .play_san("O-O")
        .map(|(_, next)| next)
        .unwrap();
    let (uci, next) = position.play_san("O-O-O").unwrap();

    assert_eq!(uci.to_string(), "e8c8");
    assert_eq!(next.to_fen(), "2kr3r/8/8/8/8/8/8/R4RK1 w - - 2 2");
}

#[test]
fn test_rook_capture_clears_both_rights() {
    let position = position_from_fen(CASTLING_FEN);
    let next = position.apply(&uci("a1a8")).unwrap();

    assert!(!next.castling.contains(CastleRight::WhiteQueenside));
    assert!(!next.castling.contains(CastleRight::BlackQueenside));
    assert_eq!(next.to_fen(), "R3k2r/8/8/8/8/8/8/4K2R b Kk - 0 1");
}

#[test]
fn test_king_step_clears_both_own_rights() {
    let position = position_from_fen(CASTLING_FEN);
    let next = position.play_san("Kd1").map(|(_, next)| next).unwrap();

    assert_eq!(next.castling.mask(), 0b1100);
    assert_eq!(next.to_fen(), "r3k2r/8/8/8/8/8/8/R2K3R b kq - 1 1");
}

#[test]
fn test_castling_rights_keep_their_order() {
    let position = position_from_fen("r3k2r/8/8/8/8/8/8/R3K2R w qkQK - 0 1");
    let next = position.apply(&uci("h1h2")).unwrap();

    assert_eq!(next.to_fen(), "r3k2r/8/8/8/8/8/7R/R3K3 b qkQ - 1 1");
}

#[test]
fn test_promotion_replaces_the_pawn() {
    let position = position_from_fen("8/4P3/8/8/8/8/k7/4K3 w - - 7 40");
    let next = position.apply(&uci("e7e8n")).unwrap();

    assert_eq!(next.piece_at(Square::E8), Some(unit(Side::White, Piece::Knight)));
    assert_eq!(next.piece_at(Square::E7), None);
    assert_eq!(next.halfmove_clock, 0);
    assert_eq!(next.to_fen(), "4N3/8/8/8/8/8/k7/4K3 b - - 0 40");
}

#[test]
fn test_apply_rejects_bad_moves() {
    let start = Position::new();

    assert_eq!(
        start.apply(&uci("e7e5")),
        Err(NotationError::NoLegalOrigin("e7e5".to_string())),
        "black piece with white to move"
    );
    assert_eq!(
        start.apply(&uci("e4e5")),
        Err(NotationError::NoLegalOrigin("e4e5".to_string())),
        "empty origin"
    );
    assert_eq!(
        start.apply(&uci("d1d2")),
        Err(NotationError::NoLegalOrigin("d1d2".to_string())),
        "own piece on the destination"
    );
    assert_eq!(
        start.apply(&uci("e2e4q")),
        Err(NotationError::InvalidMoveFormat("e2e4q".to_string()))
    );

    let promoting = position_from_fen("8/4P3/8/8/8/8/k7/4K3 w - - 0 1");
    assert_eq!(
        promoting.apply(&uci("e7e8")),
        Err(NotationError::InvalidMoveFormat("e7e8".to_string()))
    );
}
