mod a_star;

use std::collections::{BinaryHeap, HashMap, VecDeque};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::BuildHasher;

use fnv::FnvHashMap;
use log::{debug, info};
use typed_arena::Arena;

use crate::config::Strategy;
use crate::data::Dir;
use crate::moves::Moves;
use crate::problem::{Expander, Problem};
use crate::state::State;
use crate::Solve;

use self::a_star::SearchNode;
pub use self::a_star::Stats;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub moves: Moves,
    pub cost: u32,
}

pub struct SolverOk {
    pub solution: Option<Solution>,
    pub stats: Stats,
    pub strategy: Strategy,
}

impl SolverOk {
    fn new(solution: Option<Solution>, stats: Stats, strategy: Strategy) -> Self {
        Self {
            solution,
            stats,
            strategy,
        }
    }
}

impl Display for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Search strategy: {}", self.strategy)?;
        write!(f, "{}", self.stats)?;
        match self.solution {
            None => writeln!(f, "No solution"),
            Some(ref solution) => {
                writeln!(f, "Solution cost: {}", solution.cost)?;
                writeln!(f, "Solution path length: {}", solution.moves.len())?;
                writeln!(f, "Solution path (actions): {}", solution.moves)
            }
        }
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.solution {
            None => writeln!(f, "No solution")?,
            Some(ref solution) => writeln!(
                f,
                "{}: {} (cost {})",
                self.strategy, solution.moves, solution.cost
            )?,
        }
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for Problem {
    fn solve(&self, strategy: Strategy, print_status: bool) -> SolverOk {
        solve(self, strategy, print_status)
    }
}

fn solve(problem: &Problem, strategy: Strategy, print_status: bool) -> SolverOk {
    info!("Solving using {} with {} heuristic", strategy, problem.heuristic());
    let (solution, stats) = match strategy {
        Strategy::BreadthFirst | Strategy::DepthFirst => search_graph(problem, strategy, print_status),
        Strategy::UniformCost | Strategy::Greedy | Strategy::AStar => {
            search_priority(problem, strategy, print_status)
        }
    };
    SolverOk::new(solution, stats, strategy)
}

/// Frontier ordered by cost and/or heuristic, duplicates are dropped when they're reached.
fn search_priority(
    problem: &Problem,
    strategy: Strategy,
    print_status: bool,
) -> (Option<Solution>, Stats) {
    debug!("Search called");

    let arena = Arena::new();
    let mut stats = Stats::new();
    let mut to_visit = BinaryHeap::new();
    let mut prevs = FnvHashMap::default();

    let start_state: &State = arena.alloc(problem.start().clone());
    let start = SearchNode::new(
        start_state,
        None,
        0,
        0,
        problem.estimate(start_state),
        strategy,
        0,
    );
    stats.add_created(&start);
    to_visit.push(start);
    stats.update_frontier(to_visit.len());

    while let Some(cur_node) = to_visit.pop() {
        if prevs.contains_key(cur_node.state) {
            stats.add_reached_duplicate(&cur_node);
            continue;
        }
        if stats.add_expanded(&cur_node) && print_status {
            println!("Expanded new depth: {}", cur_node.depth);
            println!("{:?}", stats);
        }

        // insert here and not as soon as we discover it
        // otherwise we overwrite the cheapest path with more expensive ones
        prevs.insert(cur_node.state, cur_node.prev);

        if problem.is_goal(cur_node.state) {
            debug!("Solved, backtracking path");
            let moves = backtrack_moves(&prevs, cur_node.state);
            return (Some(Solution { moves, cost: cur_node.cost }), stats);
        }

        for successor in problem.successors(cur_node.state) {
            // insert and then ignore duplicates
            let order = stats.total_created() as usize;
            let state: &State = arena.alloc(successor.state);
            let next_node = SearchNode::new(
                state,
                Some((cur_node.state, successor.action)),
                cur_node.depth + 1,
                cur_node.cost + successor.cost,
                successor.estimate,
                strategy,
                order,
            );
            stats.add_created(&next_node);
            to_visit.push(next_node);
        }
        stats.update_frontier(to_visit.len());
    }

    (None, stats)
}

/// FIFO (breadth first) or LIFO (depth first) frontier, duplicates are dropped when they're created.
fn search_graph(
    problem: &Problem,
    strategy: Strategy,
    print_status: bool,
) -> (Option<Solution>, Stats) {
    debug!("Search called");

    let arena = Arena::new();
    let mut stats = Stats::new();
    let mut expander = Expander::new(problem);
    let mut to_visit = VecDeque::new();
    let mut prevs = FnvHashMap::default();

    let start_state: &State = arena.alloc(problem.start().clone());
    let start = SearchNode::new(start_state, None, 0, 0, 0.0, strategy, 0);
    stats.add_created(&start);
    prevs.insert(start_state, None);
    to_visit.push_back(start);
    stats.update_frontier(to_visit.len());

    loop {
        let cur_node = match strategy {
            Strategy::DepthFirst => to_visit.pop_back(),
            _ => to_visit.pop_front(),
        };
        let cur_node = match cur_node {
            Some(node) => node,
            None => break,
        };

        if stats.add_expanded(&cur_node) && print_status {
            println!("Expanded new depth: {}", cur_node.depth);
            println!("{:?}", stats);
        }

        if problem.is_goal(cur_node.state) {
            debug!("Solved, backtracking path");
            let moves = backtrack_moves(&prevs, cur_node.state);
            return (Some(Solution { moves, cost: cur_node.cost }), stats);
        }

        for successor in expander.successors(cur_node.state) {
            let order = stats.total_created() as usize;
            let state: &State = arena.alloc(successor.state);
            // the expander only returns new states so the first path is kept
            prevs.insert(state, Some((cur_node.state, successor.action)));
            let next_node = SearchNode::new(
                state,
                Some((cur_node.state, successor.action)),
                cur_node.depth + 1,
                cur_node.cost + successor.cost,
                successor.estimate,
                strategy,
                order,
            );
            stats.add_created(&next_node);
            to_visit.push_back(next_node);
        }
        stats.update_frontier(to_visit.len());
    }

    (None, stats)
}

fn backtrack_moves<'a, H: BuildHasher>(
    prevs: &HashMap<&'a State, Option<(&'a State, Dir)>, H>,
    final_state: &'a State,
) -> Moves {
    let mut moves = Moves::default();
    let mut state = final_state;
    while let Some((prev, dir)) = prevs[state] {
        moves.add(dir);
        state = prev;
    }
    moves.reverse();
    moves
}

/// Applies `moves` from the start state.
///
/// Returns the final state and the total cost, `None` if a move leaves the board.
pub fn replay(problem: &Problem, moves: &Moves) -> Option<(State, u32)> {
    let mut state = problem.start().clone();
    let mut cost = 0;
    for &dir in moves {
        let successor = problem.apply(&state, dir)?;
        cost += successor.cost;
        state = successor.state;
    }
    Some((state, cost))
}
