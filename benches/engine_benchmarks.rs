//! Benchmarks for move generation, perft, search and evaluation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_core::board::{Evaluator, Position, Search, SearchParams, SilentLogger};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const MIDDLEGAME: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 0 1";

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.sample_size(10);

    let mut start = Position::new();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| start.perft(black_box(depth)))
        });
    }

    let mut kiwipete = Position::from_fen(KIWIPETE);
    for depth in 1..=2 {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| kiwipete.perft(black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    for (name, fen) in [
        ("startpos", None),
        ("middlegame", Some(MIDDLEGAME)),
        ("kiwipete", Some(KIWIPETE)),
    ] {
        let mut position = fen.map_or_else(Position::new, Position::from_fen);
        group.bench_function(name, |b| b.iter(|| black_box(position.get_legal_moves())));
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);

    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("middlegame", depth), &depth, |b, &depth| {
            let mut position = Position::from_fen(MIDDLEGAME);
            let moves = position.get_legal_moves();
            b.iter(|| {
                // fresh memo each iteration
                let mut search =
                    Search::new(SearchParams::with_depth(depth)).with_logger(SilentLogger);
                black_box(search.search(&mut position, &moves))
            })
        });
    }

    group.finish();
}

fn bench_eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval");

    let position = Position::from_fen(KIWIPETE);
    group.bench_function("kiwipete_uncached", |b| {
        b.iter(|| Evaluator::new().score(black_box(&position)))
    });

    let mut evaluator = Evaluator::new();
    group.bench_function("kiwipete_cached", |b| {
        b.iter(|| evaluator.score(black_box(&position)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_perft,
    bench_movegen,
    bench_search,
    bench_eval
);
criterion_main!(benches);
