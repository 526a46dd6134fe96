use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{GameSnapshot, GameState, Grid};
use blockfall::types::{Command, Position, ShapeKind};

fn bench_move_down(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("move_down", |b| {
        b.iter(|| {
            if state.game_over() {
                state = GameState::new(12345);
            }
            state.apply(black_box(Command::MoveDown));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut grid = Grid::new();
            // Fill bottom 4 rows
            for row in 18..22 {
                for column in 0..10 {
                    grid.set(Position::new(row, column), Some(ShapeKind::I));
                }
            }
            grid.clear_full_rows()
        })
    });
}

fn bench_drop_distance(c: &mut Criterion) {
    let state = GameState::new(12345);

    c.bench_function("drop_distance", |b| b.iter(|| black_box(&state).drop_distance()));
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.move_down();
    state.move_down();

    c.bench_function("rotate_cw", |b| {
        b.iter(|| {
            state.rotate_cw();
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let state = GameState::new(12345);
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
        })
    });
}

criterion_group!(
    benches,
    bench_move_down,
    bench_line_clear,
    bench_drop_distance,
    bench_rotate,
    bench_snapshot
);
criterion_main!(benches);
