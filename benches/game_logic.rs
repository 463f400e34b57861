use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_blockfall::core::{resolve_lines, Board, GameSession, GameSnapshot};
use tui_blockfall::types::{GameCommand, PieceKind};

fn running_session() -> GameSession {
    let mut session = GameSession::new(12345);
    session.apply(GameCommand::StartOrPause);
    session
}

fn bench_tick(c: &mut Criterion) {
    let mut session = running_session();

    c.bench_function("session_tick_16ms", |b| {
        b.iter(|| {
            if session.game_over() {
                session.restart();
                session.apply(GameCommand::StartOrPause);
            }
            session.tick(black_box(16));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let full: Vec<i32> = (160..200).collect();

    c.bench_function("resolve_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            board.occupy(&full, PieceKind::I);
            resolve_lines(black_box(&mut board))
        })
    });
}

fn bench_piece_spawn(c: &mut Criterion) {
    let mut session = running_session();

    c.bench_function("spawn_piece", |b| {
        b.iter(|| {
            session.spawn();
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut session = running_session();

    c.bench_function("move_left_right", |b| {
        b.iter(|| {
            session.move_left();
            session.move_right();
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut session = running_session();

    c.bench_function("rotate", |b| {
        b.iter(|| {
            session.rotate();
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let session = running_session();
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            session.snapshot_into(black_box(&mut snap));
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_piece_spawn,
    bench_move,
    bench_rotate,
    bench_snapshot
);
criterion_main!(benches);
