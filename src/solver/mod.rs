//! Search strategies for the N-puzzle and the types they share.
//!
//! Every strategy takes a [`Problem`] and [`SearchOptions`] and returns a
//! [`SearchResult`]. Unsolvable boards are detected by the parity test before
//! any node is expanded. Hitting a time or node ceiling is a normal negative
//! result; [`SearchResult::termination`] says which ceiling it was.
//!
//! Counters follow one rule everywhere: `nodes_generated` counts the root and
//! every successor produced, `nodes_expanded` counts nodes taken off the
//! frontier (or entered, for the depth-first searches) and tested for the goal.
use crate::engine::{Move, PuzzleState, Tile};
use crate::error::PuzzleError;
use crate::heuristics::Heuristic;
use crate::successors::{SlidingMoves, SuccessorGenerator};
use log::{debug, info, warn};
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

pub mod arena;
mod best_first;
mod bfs;
mod budget;
mod depth_first;
pub mod frontier;

pub use frontier::VisitScope;

use budget::Budget;

/// A start board and the board to reach.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Problem {
    initial: PuzzleState,
    goal: PuzzleState,
}

impl Problem {
    /// Validates a `size x size` grid and pairs it with the canonical goal.
    ///
    /// # Errors
    /// `PuzzleError::InvalidBoard` if the grid is not `size x size` or does not
    /// hold each value `0..size*size` exactly once.
    ///
    /// # Examples
    /// ```
    /// use npuzzle_solver::solver::Problem;
    /// let problem = Problem::new(&[vec![1, 2, 3], vec![4, 0, 6], vec![7, 5, 8]], 3).unwrap();
    /// assert!(problem.is_solvable());
    /// assert!(Problem::new(&[vec![1, 2], vec![3, 0]], 3).is_err());
    /// ```
    pub fn new(grid: &[Vec<Tile>], size: usize) -> Result<Self, PuzzleError> {
        if grid.len() != size {
            return Err(PuzzleError::InvalidBoard(format!(
                "expected {} rows, found {}",
                size,
                grid.len()
            )));
        }
        let initial = PuzzleState::from_grid(grid)?;
        Ok(Self::from_state(initial))
    }

    /// Uses the canonical goal for the state's size.
    pub fn from_state(initial: PuzzleState) -> Self {
        let goal = PuzzleState::goal(initial.size()).unwrap_or_else(|_| initial.clone());
        Problem { initial, goal }
    }

    /// Pairs `initial` with an explicit goal of the same size.
    pub fn with_goal(initial: PuzzleState, goal: PuzzleState) -> Result<Self, PuzzleError> {
        if initial.size() != goal.size() {
            return Err(PuzzleError::SizeMismatch {
                initial: initial.size(),
                goal: goal.size(),
            });
        }
        Ok(Problem { initial, goal })
    }

    pub fn initial(&self) -> &PuzzleState {
        &self.initial
    }

    pub fn goal(&self) -> &PuzzleState {
        &self.goal
    }

    pub fn size(&self) -> usize {
        self.initial.size()
    }

    pub fn is_solvable(&self) -> bool {
        self.initial.is_solvable(&self.goal)
    }
}

/// Ceilings that stop a search early.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResourceLimits {
    /// Wall-clock budget for one search call.
    pub time_limit: Duration,
    /// Maximum number of expanded nodes (cumulative across IDS iterations).
    pub node_limit: u64,
}

impl ResourceLimits {
    pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(60);
    pub const DEFAULT_NODE_LIMIT: u64 = 2_000_000;

    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = time_limit;
        self
    }

    pub fn with_node_limit(mut self, node_limit: u64) -> Self {
        self.node_limit = node_limit;
        self
    }
}

impl Default for ResourceLimits {
    fn default() -> Self {
        ResourceLimits {
            time_limit: Self::DEFAULT_TIME_LIMIT,
            node_limit: Self::DEFAULT_NODE_LIMIT,
        }
    }
}

/// Per-call tuning knobs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOptions {
    /// Depth bound for DFS.
    pub depth_limit: u32,
    /// Largest depth bound IDS will try.
    pub max_depth: u32,
    pub limits: ResourceLimits,
    /// Visited-set discipline for DFS. IDS always uses `PathScoped`.
    pub dfs_scope: VisitScope,
}

impl SearchOptions {
    pub const DEFAULT_DEPTH_LIMIT: u32 = 50;
    pub const DEFAULT_MAX_DEPTH: u32 = 50;

    pub fn with_depth_limit(mut self, depth_limit: u32) -> Self {
        self.depth_limit = depth_limit;
        self
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_limits(mut self, limits: ResourceLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_dfs_scope(mut self, scope: VisitScope) -> Self {
        self.dfs_scope = scope;
        self
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            depth_limit: Self::DEFAULT_DEPTH_LIMIT,
            max_depth: Self::DEFAULT_MAX_DEPTH,
            limits: ResourceLimits::default(),
            dfs_scope: VisitScope::PathScoped,
        }
    }
}

/// The five search algorithms, without their heuristic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bfs,
    Dfs,
    Ids,
    AStar,
    Greedy,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Ids,
        Algorithm::AStar,
        Algorithm::Greedy,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Ids => "ids",
            Algorithm::AStar => "astar",
            Algorithm::Greedy => "greedy",
        }
    }

    /// Whether a returned path is guaranteed to be shortest.
    pub fn is_optimal(self) -> bool {
        matches!(self, Algorithm::Bfs | Algorithm::Ids | Algorithm::AStar)
    }

    pub fn needs_heuristic(self) -> bool {
        matches!(self, Algorithm::AStar | Algorithm::Greedy)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "ids" => Ok(Algorithm::Ids),
            "astar" | "a*" => Ok(Algorithm::AStar),
            "greedy" => Ok(Algorithm::Greedy),
            _ => Err(PuzzleError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// An algorithm together with the heuristic it needs, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    Bfs,
    Dfs,
    Ids,
    AStar(Heuristic),
    Greedy(Heuristic),
}

impl Strategy {
    /// Combines an algorithm with an optional heuristic.
    ///
    /// Uninformed algorithms ignore the heuristic; informed ones fail with
    /// `PuzzleError::MissingHeuristic` without one.
    pub fn new(algorithm: Algorithm, heuristic: Option<Heuristic>) -> Result<Self, PuzzleError> {
        match (algorithm, heuristic) {
            (Algorithm::Bfs, _) => Ok(Strategy::Bfs),
            (Algorithm::Dfs, _) => Ok(Strategy::Dfs),
            (Algorithm::Ids, _) => Ok(Strategy::Ids),
            (Algorithm::AStar, Some(h)) => Ok(Strategy::AStar(h)),
            (Algorithm::Greedy, Some(h)) => Ok(Strategy::Greedy(h)),
            (algorithm, None) => Err(PuzzleError::MissingHeuristic(algorithm)),
        }
    }

    /// Every algorithm, with each informed one paired with every heuristic.
    pub fn all() -> Vec<Strategy> {
        let mut strategies = vec![Strategy::Bfs, Strategy::Dfs, Strategy::Ids];
        strategies.extend(Heuristic::ALL.iter().map(|&h| Strategy::AStar(h)));
        strategies.extend(Heuristic::ALL.iter().map(|&h| Strategy::Greedy(h)));
        strategies
    }

    pub fn algorithm(self) -> Algorithm {
        match self {
            Strategy::Bfs => Algorithm::Bfs,
            Strategy::Dfs => Algorithm::Dfs,
            Strategy::Ids => Algorithm::Ids,
            Strategy::AStar(_) => Algorithm::AStar,
            Strategy::Greedy(_) => Algorithm::Greedy,
        }
    }

    pub fn heuristic(self) -> Option<Heuristic> {
        match self {
            Strategy::AStar(h) | Strategy::Greedy(h) => Some(h),
            _ => None,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.heuristic() {
            Some(h) => write!(f, "{}({})", self.algorithm(), h),
            None => write!(f, "{}", self.algorithm()),
        }
    }
}

/// Why a search stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Termination {
    Solved,
    /// Rejected by the parity test; no search effort spent.
    Unsolvable,
    /// Every reachable state (within the depth bound, for DFS/IDS) was tried.
    Exhausted,
    TimeLimit,
    NodeLimit,
}

impl Termination {
    pub fn is_limit(self) -> bool {
        matches!(self, Termination::TimeLimit | Termination::NodeLimit)
    }
}

/// Outcome and cost of one search call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub algorithm: Algorithm,
    pub heuristic: Option<Heuristic>,
    /// States from the initial board to the goal inclusive; empty on failure.
    pub path: Vec<PuzzleState>,
    /// Blank moves between consecutive `path` entries.
    pub moves: Vec<Move>,
    pub nodes_expanded: u64,
    pub nodes_generated: u64,
    /// Peak frontier size for BFS/A*/Greedy, deepest path held for DFS/IDS.
    pub max_frontier_or_depth: usize,
    pub max_depth_reached: u32,
    /// Depth-bounded rounds run by IDS; 1 for the other algorithms.
    pub iterations: u32,
    pub elapsed: Duration,
    pub success: bool,
    /// Whether the algorithm guarantees a shortest path.
    pub optimal: bool,
    pub termination: Termination,
}

impl SearchResult {
    pub fn algorithm_name(&self) -> &'static str {
        self.algorithm.name()
    }

    /// Number of moves in the solution, `0` on failure.
    pub fn solution_length(&self) -> usize {
        self.moves.len()
    }

    fn unsolvable(strategy: Strategy) -> Self {
        SearchResult {
            algorithm: strategy.algorithm(),
            heuristic: strategy.heuristic(),
            path: Vec::new(),
            moves: Vec::new(),
            nodes_expanded: 0,
            nodes_generated: 0,
            max_frontier_or_depth: 0,
            max_depth_reached: 0,
            iterations: 0,
            elapsed: Duration::ZERO,
            success: false,
            optimal: strategy.algorithm().is_optimal(),
            termination: Termination::Unsolvable,
        }
    }
}

/// Counters every algorithm maintains.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct SearchStats {
    pub nodes_expanded: u64,
    pub nodes_generated: u64,
    pub max_frontier_or_depth: usize,
    pub max_depth_reached: u32,
    pub iterations: u32,
}

/// What an algorithm hands back before timing and labels are attached.
#[derive(Clone, Debug)]
pub(crate) struct Outcome {
    pub termination: Termination,
    pub path: Vec<PuzzleState>,
    pub moves: Vec<Move>,
    pub stats: SearchStats,
}

impl Outcome {
    pub(crate) fn solved(path: Vec<PuzzleState>, moves: Vec<Move>, stats: SearchStats) -> Self {
        Outcome {
            termination: Termination::Solved,
            path,
            moves,
            stats,
        }
    }

    pub(crate) fn failed(termination: Termination, stats: SearchStats) -> Self {
        Outcome {
            termination,
            path: Vec::new(),
            moves: Vec::new(),
            stats,
        }
    }
}

/// Parses names and runs one search.
///
/// `heuristic` is required for `astar` and `greedy` and ignored otherwise.
/// Name errors are reported before any search work starts.
///
/// # Examples
/// ```
/// use npuzzle_solver::solver::{run, Problem, SearchOptions};
/// let problem = Problem::new(&[vec![1, 2, 3], vec![4, 5, 6], vec![7, 0, 8]], 3).unwrap();
/// let result = run("astar", &problem, Some("manhattan"), &SearchOptions::default()).unwrap();
/// assert!(result.success);
/// assert_eq!(result.solution_length(), 1);
/// assert!(run("astar", &problem, None, &SearchOptions::default()).is_err());
/// ```
pub fn run(
    algorithm: &str,
    problem: &Problem,
    heuristic: Option<&str>,
    options: &SearchOptions,
) -> Result<SearchResult, PuzzleError> {
    let algorithm: Algorithm = algorithm.parse()?;
    let heuristic = heuristic.map(str::parse::<Heuristic>).transpose()?;
    let strategy = Strategy::new(algorithm, heuristic)?;
    Ok(solve(strategy, problem, options))
}

/// Runs one strategy with the standard sliding move model.
pub fn solve(strategy: Strategy, problem: &Problem, options: &SearchOptions) -> SearchResult {
    solve_with(strategy, problem, options, &SlidingMoves)
}

/// Runs one strategy with a caller-supplied move model.
pub fn solve_with<G: SuccessorGenerator>(
    strategy: Strategy,
    problem: &Problem,
    options: &SearchOptions,
    generator: &G,
) -> SearchResult {
    if !problem.is_solvable() {
        info!("{}: board is unsolvable, skipping search", strategy);
        return SearchResult::unsolvable(strategy);
    }

    debug!(
        "{}: searching {}x{} board (depth_limit={}, max_depth={}, limits={:?})",
        strategy,
        problem.size(),
        problem.size(),
        options.depth_limit,
        options.max_depth,
        options.limits
    );

    let started = Instant::now();
    let budget = Budget::start(options.limits);
    let outcome = match strategy {
        Strategy::Bfs => bfs::search(problem, generator, &budget),
        Strategy::Dfs => depth_first::dfs(problem, generator, options.depth_limit, options.dfs_scope, &budget),
        Strategy::Ids => depth_first::ids(problem, generator, options.max_depth, &budget),
        Strategy::AStar(h) => best_first::search(problem, generator, h, best_first::Order::AStar, &budget),
        Strategy::Greedy(h) => best_first::search(problem, generator, h, best_first::Order::Greedy, &budget),
    };
    let elapsed = started.elapsed();

    let stats = outcome.stats;
    match outcome.termination {
        Termination::Solved => info!(
            "{}: solved in {} moves ({} expanded, {} generated, {:?})",
            strategy,
            outcome.moves.len(),
            stats.nodes_expanded,
            stats.nodes_generated,
            elapsed
        ),
        Termination::TimeLimit | Termination::NodeLimit => warn!(
            "{}: stopped by {:?} after {} expanded, {} generated, {:?}",
            strategy, outcome.termination, stats.nodes_expanded, stats.nodes_generated, elapsed
        ),
        Termination::Exhausted | Termination::Unsolvable => info!(
            "{}: search space exhausted without a solution ({} expanded)",
            strategy, stats.nodes_expanded
        ),
    }

    SearchResult {
        algorithm: strategy.algorithm(),
        heuristic: strategy.heuristic(),
        success: outcome.termination == Termination::Solved,
        path: outcome.path,
        moves: outcome.moves,
        nodes_expanded: stats.nodes_expanded,
        nodes_generated: stats.nodes_generated,
        max_frontier_or_depth: stats.max_frontier_or_depth,
        max_depth_reached: stats.max_depth_reached,
        iterations: stats.iterations,
        elapsed,
        optimal: strategy.algorithm().is_optimal(),
        termination: outcome.termination,
    }
}

/// Runs several strategies on the same problem, results in input order.
pub fn compare(problem: &Problem, strategies: &[Strategy], options: &SearchOptions) -> Vec<SearchResult> {
    strategies.iter().map(|&s| solve(s, problem, options)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn problem(grid: &[&[Tile]]) -> Problem {
        let rows: Vec<Vec<Tile>> = grid.iter().map(|r| r.to_vec()).collect();
        Problem::new(&rows, rows.len()).unwrap()
    }

    /// Checks that `moves` replayed from the initial board walk through `path`.
    fn assert_valid_path(problem: &Problem, result: &SearchResult) {
        assert_eq!(result.path.len(), result.moves.len() + 1);
        assert_eq!(result.path.first(), Some(problem.initial()));
        assert_eq!(result.path.last(), Some(problem.goal()));
        for (pair, &mv) in result.path.windows(2).zip(&result.moves) {
            assert_eq!(pair[0].apply_move(mv).as_ref(), Some(&pair[1]));
        }
    }

    #[test]
    fn test_problem_new_validates_shape() {
        assert!(Problem::new(&[vec![1, 2, 3], vec![4, 0, 6], vec![7, 5, 8]], 3).is_ok());
        assert!(matches!(
            Problem::new(&[vec![1, 2, 3], vec![4, 0, 6]], 3),
            Err(PuzzleError::InvalidBoard(_))
        ));
        assert!(matches!(
            Problem::new(&[vec![1, 2, 3], vec![4, 4, 6], vec![7, 5, 8]], 3),
            Err(PuzzleError::InvalidBoard(_))
        ));
    }

    #[test]
    fn test_problem_with_goal_size_mismatch() {
        let initial = PuzzleState::goal(3).unwrap();
        let goal = PuzzleState::goal(4).unwrap();
        assert_eq!(
            Problem::with_goal(initial, goal),
            Err(PuzzleError::SizeMismatch { initial: 3, goal: 4 })
        );
    }

    #[test]
    fn test_algorithm_parse() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name().parse::<Algorithm>().unwrap(), algorithm);
        }
        assert_eq!(
            "dijkstra".parse::<Algorithm>(),
            Err(PuzzleError::UnknownAlgorithm("dijkstra".to_string()))
        );
    }

    #[test]
    fn test_strategy_requires_heuristic_for_informed() {
        assert_eq!(Strategy::new(Algorithm::Bfs, None), Ok(Strategy::Bfs));
        assert_eq!(Strategy::new(Algorithm::Ids, Some(Heuristic::Manhattan)), Ok(Strategy::Ids));
        assert_eq!(
            Strategy::new(Algorithm::Greedy, None),
            Err(PuzzleError::MissingHeuristic(Algorithm::Greedy))
        );
        assert_eq!(Strategy::AStar(Heuristic::LinearConflict).to_string(), "astar(linear_conflict)");
        assert_eq!(Strategy::all().len(), 9);
    }

    #[test]
    fn test_run_reports_config_errors() {
        let p = problem(&[&[1, 2, 3], &[4, 5, 6], &[7, 0, 8]]);
        let options = SearchOptions::default();
        assert!(matches!(run("beam", &p, None, &options), Err(PuzzleError::UnknownAlgorithm(_))));
        assert!(matches!(
            run("astar", &p, Some("euclid"), &options),
            Err(PuzzleError::UnknownHeuristic(_))
        ));
        assert!(matches!(run("greedy", &p, None, &options), Err(PuzzleError::MissingHeuristic(_))));
    }

    #[test]
    fn test_one_move_from_goal_all_algorithms() {
        let p = problem(&[&[1, 2, 3], &[4, 5, 6], &[7, 0, 8]]);
        let options = SearchOptions::default();
        for algorithm in Algorithm::ALL {
            let heuristic = algorithm.needs_heuristic().then_some("manhattan");
            let result = run(algorithm.name(), &p, heuristic, &options).unwrap();
            assert!(result.success, "{} failed", algorithm);
            assert_eq!(result.solution_length(), 1, "{} path length", algorithm);
            assert_eq!(result.moves, vec![Move::Right]);
            assert_eq!(result.optimal, algorithm.is_optimal());
            assert_valid_path(&p, &result);
        }
    }

    #[test]
    fn test_two_moves_bfs_and_astar() {
        let p = problem(&[&[1, 2, 3], &[4, 0, 6], &[7, 5, 8]]);
        assert!(p.is_solvable());
        let options = SearchOptions::default();
        for strategy in [Strategy::Bfs, Strategy::AStar(Heuristic::Manhattan), Strategy::Ids] {
            let result = solve(strategy, &p, &options);
            assert!(result.success);
            assert_eq!(result.moves, vec![Move::Down, Move::Right], "{}", strategy);
            assert_valid_path(&p, &result);
        }
    }

    #[test]
    fn test_unsolvable_skips_search() {
        let p = problem(&[&[1, 2, 3], &[4, 5, 6], &[8, 7, 0]]);
        assert!(!p.is_solvable());
        for strategy in Strategy::all() {
            let result = solve(strategy, &p, &SearchOptions::default());
            assert!(!result.success);
            assert_eq!(result.termination, Termination::Unsolvable);
            assert_eq!(result.nodes_expanded, 0);
            assert_eq!(result.nodes_generated, 0);
            assert!(result.path.is_empty());
        }
    }

    #[test]
    fn test_already_solved() {
        let p = Problem::from_state(PuzzleState::goal(3).unwrap());
        for strategy in Strategy::all() {
            let result = solve(strategy, &p, &SearchOptions::default());
            assert!(result.success);
            assert_eq!(result.solution_length(), 0);
            assert_eq!(result.path, vec![p.goal().clone()]);
            assert_eq!(result.nodes_expanded, 1);
        }
    }

    #[test]
    fn test_node_limit_is_a_normal_failure() {
        // 31 moves from the goal; a 10-node budget cannot reach it.
        let p = problem(&[&[8, 6, 7], &[2, 5, 4], &[3, 0, 1]]);
        let options = SearchOptions::default().with_limits(ResourceLimits::default().with_node_limit(10));
        for strategy in Strategy::all() {
            let result = solve(strategy, &p, &options);
            assert!(!result.success, "{}", strategy);
            assert_eq!(result.termination, Termination::NodeLimit, "{}", strategy);
            assert!(result.nodes_expanded <= 10);
            assert!(result.path.is_empty());
        }
    }

    #[test]
    fn test_time_limit_is_a_normal_failure() {
        let p = problem(&[&[8, 6, 7], &[2, 5, 4], &[3, 0, 1]]);
        let options =
            SearchOptions::default().with_limits(ResourceLimits::default().with_time_limit(Duration::ZERO));
        let result = solve(Strategy::Bfs, &p, &options);
        assert!(!result.success);
        assert_eq!(result.termination, Termination::TimeLimit);
        assert!(result.termination.is_limit());
        assert_eq!(result.nodes_expanded, 0);
    }

    #[test]
    fn test_compare_keeps_order() {
        let p = problem(&[&[1, 2, 3], &[4, 0, 6], &[7, 5, 8]]);
        let strategies = [Strategy::Greedy(Heuristic::Misplaced), Strategy::Bfs];
        let results = compare(&p, &strategies, &SearchOptions::default());
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].algorithm, Algorithm::Greedy);
        assert_eq!(results[0].heuristic, Some(Heuristic::Misplaced));
        assert_eq!(results[1].algorithm_name(), "bfs");
    }

    #[test]
    fn test_custom_successor_generator() {
        /// Same moves as `SlidingMoves`, counting how often it is asked.
        struct Counting(std::cell::Cell<usize>);
        impl SuccessorGenerator for Counting {
            fn successors(&self, state: &PuzzleState) -> Vec<(PuzzleState, Move)> {
                self.0.set(self.0.get() + 1);
                state.successors()
            }
        }

        let p = problem(&[&[1, 2, 3], &[4, 0, 6], &[7, 5, 8]]);
        let generator = Counting(std::cell::Cell::new(0));
        let result = solve_with(Strategy::Bfs, &p, &SearchOptions::default(), &generator);
        assert!(result.success);
        assert_eq!(result.moves, vec![Move::Down, Move::Right]);
        assert_valid_path(&p, &result);
        // One call per non-goal expansion.
        assert_eq!(generator.0.get() as u64, result.nodes_expanded - 1);
    }
}
