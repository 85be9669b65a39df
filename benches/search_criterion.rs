use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use gomoku_ai::test_positions::{MID_1, MID_2, OPENING_2, SMALL_1};
use gomoku_ai::{
    board_from_notation, evaluate_position, AIConfig, AIEngine, Color, PatternWeights,
    StrategyKind,
};

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    notation: &'static str,
    depths: &'static [u32],
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "small_1",
        notation: SMALL_1,
        depths: &[1, 2, 3],
    },
    BenchCase {
        name: "opening_2",
        notation: OPENING_2,
        depths: &[1, 2],
    },
    BenchCase {
        name: "mid_1",
        notation: MID_1,
        depths: &[1, 2],
    },
    BenchCase {
        name: "mid_2",
        notation: MID_2,
        depths: &[1, 2],
    },
];

fn bench_search(c: &mut Criterion) {
    for kind in [StrategyKind::Minimax, StrategyKind::AlphaBeta] {
        let mut group = c.benchmark_group(format!("search_{}", kind));
        group.warm_up_time(Duration::from_secs(1));
        group.measurement_time(Duration::from_secs(4));
        group.sample_size(10);

        for case in CASES {
            let (board, turn) =
                board_from_notation(case.notation).expect("benchmark notation should parse");

            for &depth in case.depths {
                let engine = AIEngine::new(
                    kind,
                    &AIConfig {
                        depth,
                        ..Default::default()
                    },
                );
                group.bench_with_input(
                    BenchmarkId::from_parameter(format!("{}_d{}", case.name, depth)),
                    &board,
                    |b, board| {
                        b.iter(|| black_box(engine.get_move(black_box(board), turn)));
                    },
                );
            }
        }

        group.finish();
    }
}

fn bench_heuristic(c: &mut Criterion) {
    let mut group = c.benchmark_group("heuristic");
    let engine = AIEngine::new(StrategyKind::Heuristic, &AIConfig::default());

    for case in CASES {
        let (board, turn) =
            board_from_notation(case.notation).expect("benchmark notation should parse");
        group.bench_with_input(BenchmarkId::from_parameter(case.name), &board, |b, board| {
            b.iter(|| black_box(engine.select_moves(black_box(board), turn, 5)));
        });
    }

    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let weights = PatternWeights::default();
    let mut group = c.benchmark_group("evaluate_position");

    for case in CASES {
        let (board, _) =
            board_from_notation(case.notation).expect("benchmark notation should parse");
        group.bench_with_input(BenchmarkId::from_parameter(case.name), &board, |b, board| {
            b.iter(|| black_box(evaluate_position(black_box(board), Color::White, &weights)));
        });
    }

    group.finish();
}

criterion_group!(search_benches, bench_search, bench_heuristic, bench_evaluate);
criterion_main!(search_benches);
