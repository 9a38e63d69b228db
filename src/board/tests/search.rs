use rand::rngs::StdRng;
use rand::SeedableRng;

use super::{play, sq};
use crate::board::{
    choose_move, random_move, MoveList, Position, Search, SearchParams, SilentLogger, MATE_SCORE,
};
use crate::sync::StopFlag;

fn search_at(depth: u32) -> Search {
    Search::new(SearchParams::with_depth(depth)).with_logger(SilentLogger)
}

#[test]
fn pruning_does_not_change_the_result() {
    let fens = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "8/2p5/3p4/KP5r/1R3p2/6k1/4P1P1/8 w - - 0 1",
        "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 0 1",
    ];
    for fen in fens {
        for depth in [2, 3] {
            if depth == 3 && fen.starts_with("r3k2r") {
                continue;
            }
            let mut position = Position::from_fen(fen);
            let moves = position.get_legal_moves();
            let pruned = search_at(depth).search(&mut position, &moves);
            let full = search_at(depth).search_exhaustive(&mut position, &moves);
            assert_eq!(pruned.score, full.score, "{fen} depth {depth}");
            assert_eq!(pruned.best_move, full.best_move, "{fen} depth {depth}");
            assert!(pruned.stats.nodes <= full.stats.nodes);
        }
    }
}

#[test]
fn pruning_visits_fewer_nodes() {
    let mut position = Position::new();
    let moves = position.get_legal_moves();
    let pruned = search_at(3).search(&mut position, &moves);
    let full = search_at(3).search_exhaustive(&mut position, &moves);
    assert!(pruned.stats.nodes < full.stats.nodes);
    assert!(pruned.stats.cutoffs > 0);
    assert_eq!(full.stats.cutoffs, 0);
}

#[test]
fn finds_back_rank_mate() {
    let mut position = Position::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1");
    let moves = position.get_legal_moves();
    let result = search_at(3).search(&mut position, &moves);
    let best = result.best_move.expect("a move");
    assert_eq!((best.from(), best.to()), (sq("a1"), sq("a8")));
    assert_eq!(result.score, MATE_SCORE - 1);
}

#[test]
fn black_finds_mate_in_one() {
    let mut position = Position::new();
    play(&mut position, &["f2f3", "e7e5", "g2g4"]);
    let moves = position.get_legal_moves();
    let result = search_at(2).search(&mut position, &moves);
    let best = result.best_move.expect("a move");
    assert_eq!(best.notation(), "Qh4+");
    assert_eq!(result.score, MATE_SCORE - 1);
}

#[test]
fn mated_side_scores_mate_by_distance() {
    // Kb8 is forced and Rh8 mates
    let mut position = Position::from_fen("k7/8/1K6/8/8/8/8/7R b - - 0 1");
    let moves = position.get_legal_moves();
    assert_eq!(moves.len(), 1);
    for depth in [2, 3] {
        let result = search_at(depth).search(&mut position, &moves);
        assert_eq!(result.best_move.map(|mv| mv.to()), Some(sq("b8")));
        assert_eq!(result.score, -(MATE_SCORE - 2), "depth {depth}");
    }
}

#[test]
fn takes_a_hanging_queen() {
    let mut position = Position::from_fen("4k3/8/8/3q4/8/8/8/3QK3 w - - 0 1");
    let moves = position.get_legal_moves();
    let mv = search_at(2)
        .choose_move(&mut position, &moves)
        .expect("a move");
    assert_eq!((mv.from(), mv.to()), (sq("d1"), sq("d5")));
}

#[test]
fn search_leaves_the_position_as_it_was() {
    let mut position = Position::from_fen(
        "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 0 1",
    );
    let moves = position.get_legal_moves();
    let before = position.clone();
    search_at(3).search(&mut position, &moves);
    assert_eq!(position, before);
}

#[test]
fn root_score_does_not_depend_on_the_shuffle() {
    let mut position = Position::from_fen(
        "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 0 1",
    );
    let moves = position.get_legal_moves();
    let scores: Vec<i32> = [None, Some(1), Some(2), Some(11)]
        .into_iter()
        .map(|seed| {
            let params = SearchParams {
                shuffle_seed: seed,
                ..SearchParams::with_depth(2)
            };
            Search::new(params)
                .with_logger(SilentLogger)
                .search(&mut position, &moves)
                .score
        })
        .collect();
    assert!(scores.windows(2).all(|pair| pair[0] == pair[1]), "{scores:?}");
}

#[test]
fn same_seed_same_move() {
    let mut position = Position::new();
    let moves = position.get_legal_moves();
    let first = search_at(2).search(&mut position, &moves).best_move;
    let second = search_at(2).search(&mut position, &moves).best_move;
    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn terminal_root_falls_back_to_a_random_move() {
    let mut position = Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1");
    let moves = position.get_legal_moves();
    assert!(position.flags().insufficient_material);

    let mut search = search_at(3);
    let result = search.search(&mut position, &moves);
    assert!(result.best_move.is_none());
    assert_eq!(result.score, 0);

    let mv = search.choose_move(&mut position, &moves).expect("kings can move");
    assert!(moves.contains(&mv));
}

#[test]
fn stopped_search_still_returns_a_legal_move() {
    let mut position = Position::new();
    let moves = position.get_legal_moves();
    let mut search = search_at(3).with_stop_flag(StopFlag::stopped());
    let result = search.search(&mut position, &moves);
    assert!(result.aborted);
    assert!(result.best_move.is_none());

    let mv = search.choose_move(&mut position, &moves).expect("a move");
    assert!(moves.contains(&mv));
}

#[test]
fn no_legal_moves_means_no_choice() {
    let mut position = Position::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    let moves = position.get_legal_moves();
    assert!(moves.is_empty());
    assert_eq!(choose_move(&mut position, &moves), None);
    assert_eq!(random_move(&MoveList::new(), &mut StdRng::seed_from_u64(7)), None);
}

#[test]
fn cache_carries_over_between_searches() {
    let mut position = Position::new();
    let moves = position.get_legal_moves();
    let mut search = search_at(2);
    let first = search.search(&mut position, &moves);
    assert_eq!(first.stats.evaluations, search.evaluator().evaluations());
    let second = search.search(&mut position, &moves);
    assert_eq!(second.stats.cache_hits, second.stats.evaluations);
    assert!(!search.into_cache().is_empty());
}
