use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion};

use parlor_chess::game_state::chess_types::PieceTeam;
use parlor_chess::game_state::game_state::GameState;
use parlor_chess::move_generation::legal_move_generator::generate_legal_moves;
use parlor_chess::move_generation::perft::perft;
use parlor_chess::utils::layout::parse_layout;

struct BenchCase {
    name: &'static str,
    game: GameState,
    expected_moves: Option<usize>,
}

// An open middlegame layout: both sides developed, sliders with long rays.
const MIDGAME_LAYOUT: [&str; 8] = [
    "bR -- -- bQ bK -- -- bR",
    "bp bp -- -- bB bp bp bp",
    "-- -- bN bp -- bN -- --",
    "-- -- -- -- bp -- -- --",
    "-- -- wB -- wp -- -- --",
    "-- -- wN -- -- wN -- --",
    "wp wp wp -- -- wp wp wp",
    "wR -- wB wQ wK -- -- wR",
];

fn bench_cases() -> Vec<BenchCase> {
    vec![
        BenchCase {
            name: "startpos",
            game: GameState::new_game(),
            expected_moves: Some(20),
        },
        BenchCase {
            name: "midgame",
            game: parse_layout(&MIDGAME_LAYOUT, PieceTeam::Light)
                .expect("benchmark layout should parse"),
            expected_moves: None,
        },
    ]
}

fn bench_legal_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("legal_moves");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));

    for case in bench_cases() {
        // Correctness guard before benchmarking.
        let mut warmup = case.game.clone();
        let moves = generate_legal_moves(&mut warmup).expect("generation should run");
        assert!(!moves.is_empty(), "warmup position for {} is terminal", case.name);
        if let Some(expected) = case.expected_moves {
            assert_eq!(
                moves.len(),
                expected,
                "move count mismatch in warmup for {}",
                case.name
            );
        }

        let mut bench_game = case.game.clone();
        group.bench_function(case.name, |b| {
            b.iter(|| {
                let moves = generate_legal_moves(black_box(&mut bench_game))
                    .expect("benchmark run should succeed");
                black_box(moves.len())
            });
        });
    }

    group.finish();
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    let mut game = GameState::new_game();
    let warmup = perft(&mut game, 2).expect("perft should run");
    assert_eq!(warmup, 400, "node mismatch in warmup at depth 2");

    group.bench_function("startpos_d2", |b| {
        b.iter(|| {
            let nodes =
                perft(black_box(&mut game), black_box(2)).expect("perft run should succeed");
            assert_eq!(nodes, 400);
            black_box(nodes)
        });
    });

    group.finish();
}

criterion_group!(movegen_benches, bench_legal_moves, bench_perft);
criterion_main!(movegen_benches);
