use std::fmt::{self, Debug, Display, Formatter};

use crate::data::{Cell, Pos};
use crate::vec2d::Vec2d;

/// The fixed part of a problem - never changes during the search.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    grid: Vec2d<Cell>,
}

impl Board {
    pub(crate) fn new(rows: &[Vec<Cell>]) -> Self {
        Board {
            grid: Vec2d::new(rows, Cell::Void),
        }
    }

    pub fn rows(&self) -> i32 {
        self.grid.rows()
    }

    pub fn cols(&self) -> i32 {
        self.grid.cols()
    }

    /// `None` outside the board, including after the end of a shorter row.
    pub fn cell(&self, pos: Pos) -> Option<Cell> {
        match self.grid.get(pos) {
            Some(Cell::Void) | None => None,
            Some(&cell) => Some(cell),
        }
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.cell(pos).is_some()
    }

    /// Every position on the board in row-major order.
    pub fn positions<'a>(&'a self) -> impl Iterator<Item = Pos> + 'a {
        self.grid.positions().filter(move |&pos| self.contains(pos))
    }

    /// The board as it was loaded, with spaces shown as `_` so they're visible.
    pub fn underscored(&self) -> String {
        self.to_string().replace(' ', "_")
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for r in 0..self.grid.rows() {
            for c in 0..self.grid.cols() {
                // padding is only ever at the end of a row
                if let Some(ch) = self.grid[Pos::new(r, c)].to_char() {
                    write!(f, "{}", ch)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
