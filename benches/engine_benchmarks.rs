//! Benchmarks for rule engine performance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use halfboard_chess::board::{Color, Game, MoveOutcome, PieceKind, Square};

/// Count leaf positions `depth` plies deep, promoting to a queen.
fn perft(game: &Game, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let mut nodes = 0;
    for (from, to) in game.legal_moves() {
        let mut child = game.clone();
        if let MoveOutcome::PromotionRequired { .. } = child.apply_move(from, to) {
            child.resolve_promotion(PieceKind::Queen);
        }
        nodes += perft(&child, depth - 1);
    }
    nodes
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    let startpos = Game::new(Color::White);
    for depth in 1..=4 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| perft(&startpos, black_box(depth)))
        });
    }

    // Open middlegame with castling and promotions in reach
    let middlegame = Game::from_fen("r2k/1p1p/pP2/4/2n1/3N/p1PP/R2K w").unwrap();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("middlegame", depth), &depth, |b, &depth| {
            b.iter(|| perft(&middlegame, black_box(depth)))
        });
    }

    group.finish();
}

fn bench_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("range");

    let startpos = Game::new(Color::White);
    group.bench_function("startpos_all_pieces", |b| {
        b.iter(|| {
            startpos
                .board()
                .pieces()
                .map(|(sq, _)| startpos.range(black_box(sq)).len())
                .sum::<usize>()
        })
    });

    let queen = Game::from_fen("3k/4/4/1Q2/4/4/4/3K w").unwrap();
    group.bench_function("queen_open_board", |b| {
        b.iter(|| queen.range(black_box(Square(3, 1))))
    });

    group.finish();
}

fn bench_legal_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("legal_moves");

    let startpos = Game::new(Color::White);
    group.bench_function("startpos", |b| b.iter(|| black_box(startpos.legal_moves())));

    let middlegame = Game::from_fen("r2k/1p1p/pP2/4/2n1/3N/p1PP/R2K w").unwrap();
    group.bench_function("middlegame", |b| {
        b.iter(|| black_box(middlegame.legal_moves()))
    });

    group.finish();
}

criterion_group!(benches, bench_perft, bench_range, bench_legal_moves);
criterion_main!(benches);
