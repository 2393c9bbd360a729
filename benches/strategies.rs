use criterion::{criterion_group, criterion_main, Criterion};
use npuzzle_solver::engine::PuzzleState;
use npuzzle_solver::heuristics::{GoalPositions, Heuristic};
use npuzzle_solver::solver::{solve, Problem, SearchOptions, Strategy};
use rand::{rngs::SmallRng, SeedableRng};
use std::hint::black_box;

fn scrambled(size: usize, moves: usize, seed: u64) -> PuzzleState {
    let mut rng = SmallRng::seed_from_u64(seed);
    PuzzleState::scrambled(size, moves, &mut rng).expect("valid size")
}

fn bench_heuristics(c: &mut Criterion) {
    let boards: Vec<PuzzleState> = (0..64).map(|seed| scrambled(4, 60, seed)).collect();
    let targets = GoalPositions::new(&PuzzleState::goal(4).expect("valid size"));
    for heuristic in Heuristic::ALL {
        c.bench_function(&format!("heuristic/{}", heuristic), |b| {
            b.iter(|| {
                let mut acc = 0u32;
                for board in &boards {
                    acc = acc.wrapping_add(heuristic.estimate(board, &targets));
                }
                black_box(acc)
            })
        });
    }
}

fn bench_strategies(c: &mut Criterion) {
    let problem = Problem::from_state(scrambled(3, 10, 7));
    let options = SearchOptions::default().with_depth_limit(10).with_max_depth(10);
    let mut group = c.benchmark_group("solve/8-puzzle");
    group.sample_size(20);
    for strategy in Strategy::all() {
        group.bench_function(strategy.to_string(), |b| {
            b.iter(|| black_box(solve(strategy, &problem, &options)))
        });
    }
    group.finish();
}

criterion_group!(strategies, bench_heuristics, bench_strategies);
criterion_main!(strategies);
