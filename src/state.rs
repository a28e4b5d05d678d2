use std::fmt::{self, Display, Formatter};

use crate::data::Pos;

// mice are private to keep them sorted
#[derive(Debug, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct State {
    agent: Pos,
    mice: Vec<Pos>,
}

impl State {
    pub fn new(agent: Pos, mut mice: Vec<Pos>) -> State {
        // sort to detect equal states when mice are caught in a different order
        mice.sort();
        State { agent, mice }
    }

    pub fn agent(&self) -> Pos {
        self.agent
    }

    /// Remaining mice in row-major order.
    pub fn mice(&self) -> &[Pos] {
        &self.mice
    }

    pub fn mice_cnt(&self) -> usize {
        self.mice.len()
    }

    pub fn has_mouse(&self, pos: Pos) -> bool {
        self.mice.binary_search(&pos).is_ok()
    }

    /// The state after the agent moves to `pos`, catching the mouse there if any.
    pub(crate) fn moved_to(&self, pos: Pos) -> State {
        let mut mice = self.mice.clone();
        if let Ok(index) = mice.binary_search(&pos) {
            // remove keeps the order
            mice.remove(index);
        }
        State { agent: pos, mice }
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.agent)?;
        for mouse in &self.mice {
            write!(f, "{}", mouse)?;
        }
        Ok(())
    }
}
