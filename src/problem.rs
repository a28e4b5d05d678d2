use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use fnv::FnvHashSet;
use log::{debug, trace};

use crate::board::Board;
use crate::config::{ConfigErr, Heuristic};
use crate::data::{Dir, Pos, DIRECTIONS};
use crate::parser::{self, ParserErr};
use crate::state::State;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProblemErr {
    Parser(ParserErr),
    Config(ConfigErr),
}

impl Display for ProblemErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ProblemErr::Parser(err) => write!(f, "Failed to parse board: {}", err),
            ProblemErr::Config(err) => write!(f, "{}", err),
        }
    }
}

impl Error for ProblemErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ProblemErr::Parser(err) => Some(err),
            ProblemErr::Config(err) => Some(err),
        }
    }
}

impl From<ParserErr> for ProblemErr {
    fn from(err: ParserErr) -> Self {
        ProblemErr::Parser(err)
    }
}

impl From<ConfigErr> for ProblemErr {
    fn from(err: ConfigErr) -> Self {
        ProblemErr::Config(err)
    }
}

/// A state reachable in one move.
#[derive(Debug, Clone, PartialEq)]
pub struct Successor {
    pub action: Dir,
    pub state: State,
    pub cost: u32,
    /// The problem's heuristic evaluated on `state`.
    pub estimate: f64,
}

/// Catch all the mice, then get to the exit.
///
/// Holds no mutable state so it can be shared between any number of searches.
/// Keeping track of already expanded states is up to the search
/// (or an [`Expander`]).
#[derive(Debug, Clone)]
pub struct Problem {
    board: Board,
    exit: Pos,
    start: State,
    heuristic: Heuristic,
}

impl Problem {
    pub fn new(text: &str, heuristic: Heuristic) -> Result<Problem, ProblemErr> {
        let parsed = parser::parse(text)?;
        debug!("Heuristic: {}", heuristic);
        Ok(Problem {
            board: parsed.board,
            exit: parsed.exit,
            start: parsed.start,
            heuristic,
        })
    }

    /// Same as `new` but with the heuristic given by name.
    pub fn with_heuristic_name(text: &str, heuristic: &str) -> Result<Problem, ProblemErr> {
        // name first, then the board
        let heuristic = heuristic.parse()?;
        Problem::new(text, heuristic)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn exit(&self) -> Pos {
        self.exit
    }

    pub fn start(&self) -> &State {
        &self.start
    }

    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    /// The same board with a different heuristic.
    pub fn with(&self, heuristic: Heuristic) -> Problem {
        Problem {
            heuristic,
            ..self.clone()
        }
    }

    pub fn estimate(&self, state: &State) -> f64 {
        self.heuristic.estimate(self.exit, state)
    }

    pub fn is_goal(&self, state: &State) -> bool {
        state.agent() == self.exit && state.mice_cnt() == 0
    }

    /// Moving in `dir`, `None` if that would leave the board.
    /// Entering a cell with a mouse catches it.
    pub fn apply(&self, state: &State, dir: Dir) -> Option<Successor> {
        let new_pos = state.agent() + dir;
        let cell = self.board.cell(new_pos)?;

        let new_state = state.moved_to(new_pos);
        let estimate = self.estimate(&new_state);
        Some(Successor {
            action: dir,
            state: new_state,
            cost: cell.cost(),
            estimate,
        })
    }

    /// Moves left, up, right and down that stay on the board.
    pub fn successors(&self, state: &State) -> Vec<Successor> {
        let successors: Vec<_> = DIRECTIONS
            .iter()
            .filter_map(|&dir| self.apply(state, dir))
            .collect();
        trace!("{} has {} successors", state, successors.len());
        successors
    }
}

impl FromStr for Problem {
    type Err = ProblemErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Problem::new(s, Heuristic::default())
    }
}

/// Generates successors, skipping states this expander has already generated.
///
/// Every expander has its own record so independent searches never affect each other.
#[derive(Debug)]
pub struct Expander<'a> {
    problem: &'a Problem,
    seen: FnvHashSet<State>,
}

impl<'a> Expander<'a> {
    /// The start state counts as seen.
    pub fn new(problem: &'a Problem) -> Self {
        let mut seen = FnvHashSet::default();
        seen.insert(problem.start().clone());
        Expander { problem, seen }
    }

    pub fn problem(&self) -> &'a Problem {
        self.problem
    }

    pub fn seen_cnt(&self) -> usize {
        self.seen.len()
    }

    pub fn has_seen(&self, state: &State) -> bool {
        self.seen.contains(state)
    }

    pub fn successors(&mut self, state: &State) -> Vec<Successor> {
        let mut successors = self.problem.successors(state);
        let seen = &mut self.seen;
        successors.retain(|successor| seen.insert(successor.state.clone()));
        successors
    }
}
