use super::{find_move, play, sq};
use crate::board::{Color, Piece, Position};

#[test]
fn double_push_sets_target_behind_the_pawn() {
    let mut position = Position::new();
    play(&mut position, &["e2e4"]);
    assert_eq!(position.en_passant_target(), Some(sq("e3")));
    play(&mut position, &["g8f6"]);
    assert_eq!(position.en_passant_target(), None);
}

#[test]
fn en_passant_removes_the_passed_pawn() {
    let mut position = Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
    let mv = find_move(&mut position, "e5", "d6");
    assert!(mv.is_en_passant());
    assert_eq!(mv.piece_captured(), Some((Color::Black, Piece::Pawn)));

    position.make_move(&mv);
    assert!(position.piece_at(sq("d5")).is_none());
    assert!(position.piece_at(sq("e5")).is_none());
    assert_eq!(position.piece_at(sq("d6")), Some((Color::White, Piece::Pawn)));
    assert_eq!(position.hash(), position.calculate_hash());

    position.undo_move();
    assert_eq!(position.piece_at(sq("d5")), Some((Color::Black, Piece::Pawn)));
    assert_eq!(position.piece_at(sq("e5")), Some((Color::White, Piece::Pawn)));
    assert!(position.piece_at(sq("d6")).is_none());
}

#[test]
fn capture_is_offered_only_on_the_next_ply() {
    let mut position = Position::from_fen("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1");
    play(&mut position, &["d7d5"]);
    let moves = position.get_legal_moves();
    assert!(moves.find(sq("e5"), sq("d6")).is_some_and(|mv| mv.is_en_passant()));

    play(&mut position, &["e1e2", "e8f7"]);
    let moves = position.get_legal_moves();
    assert!(moves.find(sq("e5"), sq("d6")).is_none());
}

#[test]
fn black_can_capture_en_passant() {
    let mut position = Position::from_fen("4k3/8/8/8/3p4/8/4P3/4K3 w - - 0 1");
    play(&mut position, &["e2e4", "d4e3"]);
    assert!(position.piece_at(sq("e4")).is_none());
    assert_eq!(position.piece_at(sq("e3")), Some((Color::Black, Piece::Pawn)));
}

#[test]
fn en_passant_that_exposes_the_king_is_illegal() {
    // taking on d6 would open the fifth rank between the rook and the king
    let mut position = Position::from_fen("8/8/8/K2pP2r/8/8/8/7k w - d6 0 1");
    let moves = position.get_legal_moves();
    assert!(moves.find(sq("e5"), sq("d6")).is_none());
    assert!(moves.find(sq("e5"), sq("e6")).is_some());
}

#[test]
fn single_push_sets_no_target() {
    let mut position = Position::new();
    play(&mut position, &["e2e3"]);
    assert_eq!(position.en_passant_target(), None);
}
