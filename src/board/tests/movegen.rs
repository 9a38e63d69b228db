use super::{find_move, play, sq};
use crate::board::{Color, Piece, Position};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const ENDGAME: &str = "8/2p5/3p4/KP5r/1R3p2/6k1/4P1P1/8 w - - 0 1";

#[test]
fn starting_position_has_twenty_moves() {
    let mut position = Position::new();
    let moves = position.get_legal_moves();
    assert_eq!(moves.len(), 20);
    assert!(moves.iter().all(|mv| mv.color() == Color::White));
    assert!(!position.is_game_over());
}

#[test]
fn perft_from_start() {
    let mut position = Position::new();
    assert_eq!(position.perft(1), 20);
    assert_eq!(position.perft(2), 400);
    assert_eq!(position.perft(3), 8_902);
}

#[test]
fn perft_kiwipete() {
    let mut position = Position::from_fen(KIWIPETE);
    assert_eq!(position.perft(1), 48);
    assert_eq!(position.perft(2), 2_039);
}

#[test]
fn perft_rook_endgame() {
    let mut position = Position::from_fen(ENDGAME);
    assert_eq!(position.perft(1), 14);
    assert_eq!(position.perft(2), 191);
    assert_eq!(position.perft(3), 2_812);
}

#[test]
fn perft_leaves_position_unchanged() {
    let mut position = Position::from_fen(KIWIPETE);
    let before = position.clone();
    position.perft(2);
    assert_eq!(position.to_fen(), before.to_fen());
    assert_eq!(position.hash(), before.hash());
    assert_eq!(position.ply_count(), 0);
}

#[test]
fn pawn_double_push_needs_both_squares_empty() {
    let mut position = Position::from_fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1");
    let moves = position.get_legal_moves();
    assert!(moves.find(sq("e2"), sq("e3")).is_none());
    assert!(moves.find(sq("e2"), sq("e4")).is_none());

    let mut position = Position::from_fen("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1");
    let moves = position.get_legal_moves();
    assert!(moves.find(sq("e2"), sq("e3")).is_some());
    assert!(moves.find(sq("e2"), sq("e4")).is_none());
}

#[test]
fn pawns_capture_diagonally_forward_only() {
    // the bishops on d3 and f3 are behind the pawn
    let mut position = Position::from_fen("4k3/8/8/3n1n2/4P3/3b1b2/8/4K3 w - - 0 1");
    let moves = position.get_legal_moves();
    assert!(moves.find(sq("e4"), sq("d5")).is_some_and(|mv| mv.is_capture()));
    assert!(moves.find(sq("e4"), sq("f5")).is_some_and(|mv| mv.is_capture()));
    assert!(moves.find(sq("e4"), sq("d3")).is_none());
    assert!(moves.find(sq("e4"), sq("f3")).is_none());
}

#[test]
fn black_pawns_move_down_the_board() {
    let mut position = Position::new();
    play(&mut position, &["e2e4"]);
    let moves = position.get_legal_moves();
    let mv = moves.find(sq("e7"), sq("e5")).expect("double push");
    assert!(mv.is_double_pawn_push());
    assert_eq!(mv.color(), Color::Black);
}

#[test]
fn sliders_stop_at_the_first_piece() {
    let mut position = Position::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1");
    let rook_targets: Vec<_> = position
        .get_legal_moves()
        .iter()
        .filter(|mv| mv.from() == sq("a1"))
        .map(|mv| mv.to().to_string())
        .collect();
    // up the a-file to a8 and along the first rank to d1
    assert_eq!(rook_targets.len(), 10);
    assert!(rook_targets.contains(&"a8".to_string()));
    assert!(!rook_targets.contains(&"e1".to_string()));

    let mut position = Position::from_fen("4k3/8/8/8/8/8/p7/R3K3 w - - 0 1");
    let up: Vec<_> = position
        .get_legal_moves()
        .iter()
        .filter(|mv| mv.from() == sq("a1") && mv.to().col() == 0)
        .copied()
        .collect();
    assert_eq!(up.len(), 1);
    assert_eq!(up[0].piece_captured(), Some((Color::Black, Piece::Pawn)));
}

#[test]
fn pinned_piece_cannot_leave_the_line() {
    // the e2 knight shields its king from the e8 rook
    let mut position = Position::from_fen("k3r3/8/8/8/8/8/4N3/4K3 w - - 0 1");
    let moves = position.get_legal_moves();
    assert!(moves.iter().all(|mv| mv.from() != sq("e2")));
}

#[test]
fn king_cannot_step_next_to_the_other_king() {
    let mut position = Position::from_fen("8/8/8/3k4/8/3K4/8/8 w - - 0 1");
    let moves = position.get_legal_moves();
    for target in ["c4", "d4", "e4"] {
        assert!(moves.find(sq("d3"), sq(target)).is_none(), "{target}");
    }
    assert_eq!(moves.len(), 5);
}

#[test]
fn promotion_always_makes_a_queen() {
    let mut position = Position::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let mv = find_move(&mut position, "a7", "a8");
    assert!(mv.is_promotion());
    position.make_move(&mv);
    assert_eq!(
        position.piece_at(sq("a8")),
        Some((Color::White, Piece::Queen))
    );
    assert!(position.piece_at(sq("a7")).is_none());
}

#[test]
fn no_moves_after_checkmate() {
    let mut position = Position::new();
    play(&mut position, &["f2f3", "e7e5", "g2g4", "d8h4"]);
    assert!(position.get_legal_moves().is_empty());
    assert!(position.is_checkmate());
    assert!(!position.is_stalemate());
}

#[test]
fn stalemate_has_no_moves_and_no_check() {
    let mut position = Position::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    assert!(position.get_legal_moves().is_empty());
    assert!(position.is_stalemate());
    assert!(!position.is_checkmate());
    assert!(position.flags().is_draw());
}
