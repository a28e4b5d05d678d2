use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};

use separator::Separatable;

use crate::config::Strategy;
use crate::data::Dir;
use crate::state::State;

#[derive(Clone, Default, PartialEq, Eq)]
pub struct Stats {
    created_states: Vec<u64>,
    expanded_states: Vec<u64>,
    duplicate_states: Vec<u64>,
    max_frontier: u64,
}

impl Stats {
    pub(crate) fn new() -> Self {
        Stats::default()
    }

    pub fn total_created(&self) -> u64 {
        self.created_states.iter().sum()
    }

    pub fn total_expanded(&self) -> u64 {
        self.expanded_states.iter().sum()
    }

    pub fn total_reached_duplicates(&self) -> u64 {
        self.duplicate_states.iter().sum()
    }

    pub fn max_frontier(&self) -> u64 {
        self.max_frontier
    }

    pub(crate) fn add_created(&mut self, node: &SearchNode<'_>) -> bool {
        Self::add(&mut self.created_states, node)
    }

    pub(crate) fn add_expanded(&mut self, node: &SearchNode<'_>) -> bool {
        Self::add(&mut self.expanded_states, node)
    }

    pub(crate) fn add_reached_duplicate(&mut self, node: &SearchNode<'_>) -> bool {
        Self::add(&mut self.duplicate_states, node)
    }

    pub(crate) fn update_frontier(&mut self, len: usize) {
        self.max_frontier = self.max_frontier.max(len as u64);
    }

    fn add(counts: &mut Vec<u64>, node: &SearchNode<'_>) -> bool {
        let mut ret = false;

        // while because some depths might be skipped - duplicates
        while node.depth >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[node.depth] += 1;
        ret
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "created by depth: {:?}", self.created_states)?;
        writeln!(f, "reached duplicates by depth: {:?}", self.duplicate_states)?;
        writeln!(f, "expanded by depth: {:?}", self.expanded_states)?;
        writeln!(f, "total created: {}", self.total_created().separated_string())?;
        writeln!(
            f,
            "total reached duplicates: {}",
            self.total_reached_duplicates().separated_string()
        )?;
        writeln!(f, "total expanded: {}", self.total_expanded().separated_string())
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "States created: {}", self.total_created().separated_string())?;
        writeln!(f, "States expanded: {}", self.total_expanded().separated_string())?;
        writeln!(
            f,
            "Reached duplicates: {}",
            self.total_reached_duplicates().separated_string()
        )?;
        writeln!(f, "Max frontier size: {}", self.max_frontier.separated_string())
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct SearchNode<'a> {
    pub(crate) state: &'a State,
    pub(crate) prev: Option<(&'a State, Dir)>,
    pub(crate) depth: usize,
    pub(crate) cost: u32,
    priority: f64,
    // nodes with the same priority are expanded in the order they were created
    order: usize,
}

impl<'a> SearchNode<'a> {
    pub(crate) fn new(
        state: &'a State,
        prev: Option<(&'a State, Dir)>,
        depth: usize,
        cost: u32,
        estimate: f64,
        strategy: Strategy,
        order: usize,
    ) -> Self {
        let priority = match strategy {
            Strategy::UniformCost => f64::from(cost),
            Strategy::Greedy => estimate,
            Strategy::AStar => f64::from(cost) + estimate,
            // ordered by the frontier itself
            Strategy::BreadthFirst | Strategy::DepthFirst => 0.0,
        };
        SearchNode {
            state,
            prev,
            depth,
            cost,
            priority,
            order,
        }
    }
}

impl PartialOrd for SearchNode<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SearchNode<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // intentionally reversed for BinaryHeap
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.order.cmp(&self.order))
    }
}

impl PartialEq for SearchNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SearchNode<'_> {}

#[cfg(test)]
mod tests {
    use std::collections::BinaryHeap;

    use super::*;
    use crate::data::Pos;

    #[test]
    fn heap_order() {
        let state = State::new(Pos::new(0, 0), vec![]);
        let mut heap = BinaryHeap::new();
        heap.push(SearchNode::new(&state, None, 0, 5, 0.0, Strategy::AStar, 0));
        heap.push(SearchNode::new(&state, None, 0, 1, 3.5, Strategy::AStar, 1));
        heap.push(SearchNode::new(&state, None, 0, 2, 2.5, Strategy::AStar, 2));
        heap.push(SearchNode::new(&state, None, 0, 3, 0.0, Strategy::AStar, 3));

        let order: Vec<_> = ::std::iter::from_fn(|| heap.pop().map(|n| n.order)).collect();
        // 3, then the tie at 4.5 goes to the older node, then 5
        assert_eq!(order, vec![3, 1, 2, 0]);
    }

    #[test]
    fn priorities() {
        let state = State::new(Pos::new(0, 0), vec![]);
        let ucs = SearchNode::new(&state, None, 0, 4, 1.0, Strategy::UniformCost, 0);
        let greedy = SearchNode::new(&state, None, 0, 4, 1.0, Strategy::Greedy, 0);
        let a_star = SearchNode::new(&state, None, 0, 4, 1.0, Strategy::AStar, 0);
        assert_eq!(ucs.priority, 4.0);
        assert_eq!(greedy.priority, 1.0);
        assert_eq!(a_star.priority, 5.0);
    }

    #[test]
    fn counting() {
        let state = State::new(Pos::new(0, 0), vec![]);
        let mut stats = Stats::new();
        let root = SearchNode::new(&state, None, 0, 0, 0.0, Strategy::AStar, 0);
        let deep = SearchNode::new(&state, None, 2, 0, 0.0, Strategy::AStar, 1);
        assert!(stats.add_created(&root));
        assert!(stats.add_created(&deep));
        assert!(!stats.add_created(&deep));
        assert!(stats.add_expanded(&root));
        assert!(stats.add_reached_duplicate(&deep));
        stats.update_frontier(3);
        stats.update_frontier(2);

        assert_eq!(stats.total_created(), 3);
        assert_eq!(stats.total_expanded(), 1);
        assert_eq!(stats.total_reached_duplicates(), 1);
        assert_eq!(stats.max_frontier(), 3);
        assert_eq!(
            stats.to_string(),
            "States created: 3\nStates expanded: 1\nReached duplicates: 1\nMax frontier size: 3\n"
        );
        assert_eq!(
            format!("{:?}", stats),
            "created by depth: [1, 0, 2]\n\
             reached duplicates by depth: [0, 0, 1]\n\
             expanded by depth: [1]\n\
             total created: 3\n\
             total reached duplicates: 1\n\
             total expanded: 1\n"
        );
    }
}
