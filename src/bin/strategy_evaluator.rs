use npuzzle_solver::engine::PuzzleState;
use npuzzle_solver::solver::{solve, Problem, ResourceLimits, SearchOptions, Strategy};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::time::Duration;

const NUM_RANDOM_BOARDS_FOR_EVALUATION: usize = 20;
const START_SEED: u64 = 0;
const BOARD_SIZE: usize = 3;
const SCRAMBLE_MOVES: usize = 14;
const NODE_LIMIT: u64 = 200_000;

#[derive(Default)]
struct Totals {
    solved: usize,
    moves: usize,
    expanded: u64,
    generated: u64,
    elapsed: Duration,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let strategies = Strategy::all();
    let options = SearchOptions::default()
        .with_depth_limit(SCRAMBLE_MOVES as u32 + 6)
        .with_max_depth(SCRAMBLE_MOVES as u32)
        .with_limits(ResourceLimits::default().with_node_limit(NODE_LIMIT));

    let mut totals: HashMap<Strategy, Totals> = HashMap::new();

    println!(
        "Evaluating {} strategies on {} boards ({}x{}, {} scramble moves)...",
        strategies.len(),
        NUM_RANDOM_BOARDS_FOR_EVALUATION,
        BOARD_SIZE,
        BOARD_SIZE,
        SCRAMBLE_MOVES
    );

    for board_idx in 0..NUM_RANDOM_BOARDS_FOR_EVALUATION {
        let current_seed = START_SEED + board_idx as u64;
        let mut rng = SmallRng::seed_from_u64(current_seed);
        let initial = match PuzzleState::scrambled(BOARD_SIZE, SCRAMBLE_MOVES, &mut rng) {
            Ok(state) => state,
            Err(e) => {
                eprintln!("Error: could not generate board {}: {}", board_idx, e);
                return;
            }
        };
        let problem = Problem::from_state(initial);

        println!("\nBoard {} (Seed: {})", board_idx, current_seed);
        for &strategy in &strategies {
            let result = solve(strategy, &problem, &options);
            println!(
                "  Strategy: {:<24} Solved: {:<5} Moves: {:<4} Expanded: {}",
                strategy.to_string(),
                result.success,
                result.solution_length(),
                result.nodes_expanded
            );

            let entry = totals.entry(strategy).or_default();
            if result.success {
                entry.solved += 1;
                entry.moves += result.solution_length();
            }
            entry.expanded += result.nodes_expanded;
            entry.generated += result.nodes_generated;
            entry.elapsed += result.elapsed;
        }
    }

    println!("\n--- Evaluation Complete ---");
    println!("{:<24} {:>7} {:>10} {:>14} {:>14} {:>12}", "Strategy", "Solved", "Avg moves", "Avg expanded", "Avg generated", "Avg time");

    let mut rows: Vec<(Strategy, &Totals)> = strategies.iter().filter_map(|s| totals.get(s).map(|t| (*s, t))).collect();
    // Fewest expansions first.
    rows.sort_by_key(|(_, t)| t.expanded);

    let boards = NUM_RANDOM_BOARDS_FOR_EVALUATION as f64;
    for (strategy, t) in rows {
        let avg_moves = if t.solved > 0 { t.moves as f64 / t.solved as f64 } else { 0.0 };
        println!(
            "{:<24} {:>7} {:>10.2} {:>14.1} {:>14.1} {:>12?}",
            strategy.to_string(),
            t.solved,
            avg_moves,
            t.expanded as f64 / boards,
            t.generated as f64 / boards,
            t.elapsed / NUM_RANDOM_BOARDS_FOR_EVALUATION as u32
        );
    }
}
