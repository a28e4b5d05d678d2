use std::fmt::{self, Debug, Display, Formatter};

use crate::data::Dir;

/// A sequence of actions, printed as their first letters (`lurd`).
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Moves(Vec<Dir>);

impl Moves {
    pub fn new(moves: Vec<Dir>) -> Self {
        Moves(moves)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn add(&mut self, dir: Dir) {
        self.0.push(dir);
    }

    pub(crate) fn reverse(&mut self) {
        self.0.reverse();
    }

    pub fn iter(&self) -> ::std::slice::Iter<'_, Dir> {
        self.0.iter()
    }

    /// Full action names - `left`, `up`, ...
    pub fn actions(&self) -> Vec<&'static str> {
        self.0.iter().map(|dir| dir.action()).collect()
    }
}

impl IntoIterator for Moves {
    type Item = Dir;
    type IntoIter = ::std::vec::IntoIter<Dir>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Moves {
    type Item = &'a Dir;
    type IntoIter = ::std::slice::Iter<'a, Dir>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for dir in self {
            write!(f, "{}", dir)?;
        }
        Ok(())
    }
}

impl Debug for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
