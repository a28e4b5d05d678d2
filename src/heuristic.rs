use crate::config::Heuristic;
use crate::data::Pos;
use crate::state::State;

impl Heuristic {
    /// Estimated cost from `state` to a goal state. Less is better.
    pub fn estimate(self, exit: Pos, state: &State) -> f64 {
        match self {
            Heuristic::None => 0.0,
            Heuristic::Manhattan => f64::from(manhattan(exit, state)),
            Heuristic::Euclidean => euclidean(exit, state),
            Heuristic::MiceRemaining => f64::from(mice_remaining(exit, state)),
            Heuristic::TotalDistance => f64::from(total_distance(exit, state)),
            Heuristic::ClosestMice => f64::from(closest_mice(exit, state)),
        }
    }
}

fn manhattan(exit: Pos, state: &State) -> u32 {
    state.agent().dist(exit)
}

fn euclidean(exit: Pos, state: &State) -> f64 {
    state.agent().euclidean_dist(exit)
}

// admissible only because no step costs less than 1
fn mice_remaining(exit: Pos, state: &State) -> u32 {
    match state.mice_cnt() {
        0 => manhattan(exit, state),
        cnt => cnt as u32,
    }
}

/// Length of the chain through all mice in stored order - NOT admissible.
fn total_distance(exit: Pos, state: &State) -> u32 {
    if state.mice_cnt() == 0 {
        return manhattan(exit, state);
    }
    state
        .mice()
        .windows(2)
        .map(|pair| pair[0].dist(pair[1]))
        .sum()
}

/// The agent has to get to at least one mouse before going to the exit.
fn closest_mice(exit: Pos, state: &State) -> u32 {
    let agent = state.agent();

    let mut closest = None;
    for &mouse in state.mice() {
        let dist = agent.dist(mouse);
        match closest {
            Some((min, _)) if min <= dist => {}
            _ => closest = Some((dist, mouse)),
        }
    }

    match closest {
        Some((dist, mouse)) => dist + mouse.dist(exit),
        None => manhattan(exit, state),
    }
}
