use criterion::*;

use sentinel_othello::Board;
use sentinel_solver::{best_move, best_move_parallel};

fn criterion_minimax(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");
    group.sample_size(10);
    let board = Board::new();

    for depth in 1..=5 {
        group.bench_with_input(BenchmarkId::new("sequential", depth), &depth, |b, &depth| {
            b.iter(|| best_move(black_box(&board), depth, true))
        });
        group.bench_with_input(BenchmarkId::new("parallel", depth), &depth, |b, &depth| {
            b.iter(|| best_move_parallel(black_box(&board), depth, true))
        });
    }

    group.finish();
}

criterion_group!(minimax, criterion_minimax);
criterion_main!(minimax);
