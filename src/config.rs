use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigErr {
    UnknownHeuristic(String),
    UnknownStrategy(String),
}

impl Display for ConfigErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ConfigErr::UnknownHeuristic(name) => write!(f, "Invalid heuristic: {}", name),
            ConfigErr::UnknownStrategy(name) => write!(f, "Unrecognized search strategy: {}", name),
        }
    }
}

impl Error for ConfigErr {}

/// Estimates of the remaining cost, selected once per problem.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heuristic {
    None,
    Manhattan,
    Euclidean,
    MiceRemaining,
    TotalDistance,
    ClosestMice,
}

impl Heuristic {
    pub const ALL: [(&'static str, Heuristic); 6] = [
        ("none", Heuristic::None),
        ("manhattan", Heuristic::Manhattan),
        ("euclidean", Heuristic::Euclidean),
        ("mice-remaining", Heuristic::MiceRemaining),
        ("totalDistance", Heuristic::TotalDistance),
        ("closestMice", Heuristic::ClosestMice),
    ];

    pub fn name(self) -> &'static str {
        Self::ALL
            .iter()
            .find(|&&(_, h)| h == self)
            .map(|&(name, _)| name)
            .unwrap_or("none")
    }

    /// Whether the estimate never exceeds the real remaining cost.
    ///
    /// `TotalDistance` chains the mice in row-major order which can be longer
    /// than the best order to catch them in.
    pub fn is_admissible(self) -> bool {
        self != Heuristic::TotalDistance
    }

    /// Whether the estimate never drops by more than the cost of a move.
    ///
    /// Only then is A* guaranteed to find the cheapest solution while expanding each state once.
    /// `ClosestMice` can jump when a different mouse becomes the closest one.
    pub fn is_consistent(self) -> bool {
        match self {
            Heuristic::None | Heuristic::Manhattan | Heuristic::Euclidean | Heuristic::MiceRemaining => true,
            Heuristic::TotalDistance | Heuristic::ClosestMice => false,
        }
    }
}

impl Default for Heuristic {
    fn default() -> Self {
        Heuristic::None
    }
}

impl Display for Heuristic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Heuristic {
    type Err = ConfigErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|&&(name, _)| name == s)
            .map(|&(_, h)| h)
            .ok_or_else(|| ConfigErr::UnknownHeuristic(s.to_owned()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    BreadthFirst,
    DepthFirst,
    UniformCost,
    Greedy,
    AStar,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::BreadthFirst,
        Strategy::DepthFirst,
        Strategy::UniformCost,
        Strategy::Greedy,
        Strategy::AStar,
    ];

    /// Whether the strategy uses the heuristic at all.
    pub fn is_informed(self) -> bool {
        match self {
            Strategy::Greedy | Strategy::AStar => true,
            _ => false,
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Strategy::BreadthFirst => write!(f, "bfs"),
            Strategy::DepthFirst => write!(f, "dfs"),
            Strategy::UniformCost => write!(f, "ucs"),
            Strategy::Greedy => write!(f, "greedy"),
            Strategy::AStar => write!(f, "astar"),
        }
    }
}

impl FromStr for Strategy {
    type Err = ConfigErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .cloned()
            .find(|strategy| strategy.to_string() == s)
            .ok_or_else(|| ConfigErr::UnknownStrategy(s.to_owned()))
    }
}
