use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use go_rules::generation::play_random_moves;
use go_rules::go::{BoardPosition, BoardState, GoGame, GoPlayer};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;

// A black wall along the bottom row of a 19x19 board and white everywhere else
// but one corner, so black filling that corner takes the whole white group.
fn large_group() -> GoGame {
    let mut board = BoardState::new(19).unwrap();

    for col in 0..19 {
        board
            .place(BoardPosition::new(18, col), GoPlayer::Black)
            .unwrap();
    }

    for row in 0..18 {
        for col in 0..19 {
            if (row, col) != (0, 0) {
                board
                    .place(BoardPosition::new(row, col), GoPlayer::White)
                    .unwrap();
            }
        }
    }

    GoGame::from_board(board)
}

fn playing_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("playing moves");

    group.bench_function("simple move", |b| {
        b.iter_batched(
            || GoGame::from_sgf(include_str!("../src/test_sgfs/single_groups_are_captured.sgf"), 9).unwrap(),
            |mut game| game.place_stone(black_box(2), black_box(2)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("single capture", |b| {
        b.iter_batched(
            || {
                let mut game = GoGame::default();
                for &(row, col) in &[(4, 4), (3, 4), (0, 0), (5, 4), (0, 2), (4, 3), (0, 4)] {
                    game.place_stone(row, col);
                }
                game
            },
            |mut game| game.place_stone(black_box(4), black_box(5)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("large group capture", |b| {
        b.iter_batched(
            large_group,
            |mut game| game.place_stone(black_box(0), black_box(0)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("random playout", |b| {
        b.iter_batched(
            || (GoGame::default(), StdRng::seed_from_u64(1)),
            |(mut game, mut rng)| play_random_moves(&mut game, black_box(200), &mut rng),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, playing_moves);
criterion_main!(benches);
