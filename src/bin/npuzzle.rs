use clap::Parser;
use npuzzle_solver::engine::PuzzleState;
use npuzzle_solver::heuristics::Heuristic;
use npuzzle_solver::solver::{compare, solve, Algorithm, Problem, ResourceLimits, SearchOptions, SearchResult, Strategy};
use npuzzle_solver::utils::board_from_str;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::fs;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Solve a sliding-tile N-puzzle", long_about = None)]
struct Args {
    /// Path to a board file (one row per line, blank as 0 or _)
    board_file: Option<PathBuf>,

    /// Search algorithm: bfs, dfs, ids, astar or greedy
    #[clap(short, long, default_value = "astar")]
    algorithm: String,

    /// Heuristic for astar/greedy: manhattan, misplaced or linear_conflict
    #[clap(long, default_value = "manhattan")]
    heuristic: String,

    /// Depth bound for dfs
    #[clap(long, default_value_t = SearchOptions::DEFAULT_DEPTH_LIMIT)]
    depth_limit: u32,

    /// Largest depth bound ids will try
    #[clap(long, default_value_t = SearchOptions::DEFAULT_MAX_DEPTH)]
    max_depth: u32,

    /// Time limit in seconds
    #[clap(long, default_value_t = 60.0)]
    time_limit: f64,

    /// Maximum number of expanded nodes
    #[clap(long, default_value_t = ResourceLimits::DEFAULT_NODE_LIMIT)]
    node_limit: u64,

    /// Instead of reading a file, scramble the goal with this many random moves
    #[clap(long, conflicts_with = "board_file")]
    scramble: Option<usize>,

    /// Board size used with --scramble
    #[clap(long, default_value_t = 3)]
    size: usize,

    /// Seed used with --scramble
    #[clap(long, default_value_t = 514514)]
    seed: u64,

    /// Run every algorithm/heuristic combination and print a summary line for each
    #[clap(long)]
    compare: bool,

    /// Print every intermediate board of the solution
    #[clap(long)]
    show_path: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn read_board_file(path: &PathBuf) -> Result<PuzzleState, String> {
    let content = fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;
    board_from_str(&content).map_err(|e| format!("Invalid board in {}: {}", path.display(), e))
}

fn load_initial(args: &Args) -> Result<PuzzleState, String> {
    match (&args.board_file, args.scramble) {
        (Some(path), _) => read_board_file(path),
        (None, Some(moves)) => {
            let mut rng = SmallRng::seed_from_u64(args.seed);
            PuzzleState::scrambled(args.size, moves, &mut rng).map_err(|e| e.to_string())
        }
        (None, None) => Err("Provide a board file or --scramble N".to_string()),
    }
}

fn build_options(args: &Args) -> Result<SearchOptions, String> {
    let time_limit = Duration::try_from_secs_f64(args.time_limit)
        .map_err(|e| format!("Invalid --time-limit {}: {}", args.time_limit, e))?;
    let limits = ResourceLimits::default()
        .with_time_limit(time_limit)
        .with_node_limit(args.node_limit);
    Ok(SearchOptions::default()
        .with_depth_limit(args.depth_limit)
        .with_max_depth(args.max_depth)
        .with_limits(limits))
}

fn print_summary(result: &SearchResult) {
    let label = match result.heuristic {
        Some(h) => format!("{}({})", result.algorithm_name(), h),
        None => result.algorithm_name().to_string(),
    };
    println!(
        "{:<26} success={:<5} moves={:<4} expanded={:<9} generated={:<9} peak={:<8} time={:?} ({:?})",
        label,
        result.success,
        result.solution_length(),
        result.nodes_expanded,
        result.nodes_generated,
        result.max_frontier_or_depth,
        result.elapsed,
        result.termination
    );
}

fn run(args: &Args) -> Result<(), String> {
    let initial = load_initial(args)?;
    let options = build_options(args)?;
    let problem = Problem::from_state(initial);

    println!("Initial board:\n{}\n", problem.initial());
    if !problem.is_solvable() {
        println!("Board is not solvable (inversion parity differs from the goal).\n");
    }

    if args.compare {
        for result in compare(&problem, &Strategy::all(), &options) {
            print_summary(&result);
        }
        return Ok(());
    }

    let algorithm: Algorithm = args.algorithm.parse().map_err(|e| format!("{}", e))?;
    let heuristic: Heuristic = args.heuristic.parse().map_err(|e| format!("{}", e))?;
    let strategy = Strategy::new(algorithm, Some(heuristic)).map_err(|e| format!("{}", e))?;

    println!("Searching with {}...\n", strategy);
    let result = solve(strategy, &problem, &options);
    print_summary(&result);

    if result.success {
        let moves: Vec<String> = result.moves.iter().map(|m| m.to_string()).collect();
        println!("\nMoves ({}): {}", moves.len(), moves.join(" "));
        if args.show_path {
            for (i, state) in result.path.iter().enumerate().skip(1) {
                println!("\nStep {}: {}\n{}", i, result.moves[i - 1], state);
            }
        }
    } else {
        println!("\nNo solution found.");
    }
    Ok(())
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(message) = run(&args) {
        eprintln!("Error: {}", message);
        process::exit(1);
    }
}
