use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chessbot::game_state::chess_types::CheckState;
use chessbot::game_state::game_state::Game;
use chessbot::move_legality::legal_move_checks::determine_check;
use chessbot::utils::long_algebraic::long_algebraic_to_move;

#[derive(Clone, Copy)]
struct CheckCase {
    name: &'static str,
    fen: &'static str,
    expected: CheckState,
}

const CHECK_CASES: &[CheckCase] = &[
    CheckCase {
        name: "startpos",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        expected: CheckState::NoCheck,
    },
    CheckCase {
        name: "open_middlegame",
        fen: "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
        expected: CheckState::NoCheck,
    },
    CheckCase {
        name: "queen_check",
        fen: "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3",
        expected: CheckState::WhiteInCheck,
    },
    CheckCase {
        name: "sparse_endgame",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        expected: CheckState::NoCheck,
    },
];

const SCRIPTED_OPENING: &[&str] = &[
    "e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6", "e1g1", "f8c5", "d2d3", "e8g8",
];

fn bench_determine_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("determine_check");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    for case in CHECK_CASES {
        let game = Game::from_fen(case.fen).expect("benchmark FEN should parse");
        let board = *game.board();
        assert_eq!(determine_check(&board), case.expected, "check mismatch for {}", case.name);

        group.bench_with_input(BenchmarkId::from_parameter(case.name), &board, |b, board| {
            b.iter(|| black_box(determine_check(black_box(board))));
        });
    }

    group.finish();
}

fn play_scripted_opening() -> Game {
    let mut game = Game::new_game();
    for text in SCRIPTED_OPENING {
        let mv = long_algebraic_to_move(text, game.board()).expect("scripted move should parse");
        game.attempt_move(&mv).expect("scripted move should be legal");
    }
    game
}

fn bench_attempt_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("attempt_move");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));
    group.sample_size(50);

    // Correctness guard before benchmarking.
    let finished = play_scripted_opening();
    assert_eq!(finished.history().len(), SCRIPTED_OPENING.len());

    group.throughput(Throughput::Elements(SCRIPTED_OPENING.len() as u64));
    group.bench_function("scripted_opening", |b| {
        b.iter(|| black_box(play_scripted_opening().move_counter()));
    });

    group.finish();
}

criterion_group!(legality_benches, bench_determine_check, bench_attempt_move);
criterion_main!(legality_benches);
