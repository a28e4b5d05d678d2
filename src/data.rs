use std::fmt::{self, Display, Formatter};
use std::ops::Add;

/// Cost of stepping into any cell except water.
pub const STEP_COST: u32 = 1;
/// Cats don't like getting wet.
pub const WATER_COST: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Start,
    Exit,
    Water,
    Mouse,
    Open,
    /// Any other character - kept as is, behaves like `Open`.
    Other(char),
    /// Padding after the end of a shorter row - not part of the board.
    Void,
}

impl Cell {
    pub(crate) fn from_char(c: char) -> Cell {
        match c {
            's' => Cell::Start,
            'e' => Cell::Exit,
            'w' => Cell::Water,
            'm' => Cell::Mouse,
            ' ' => Cell::Open,
            other => Cell::Other(other),
        }
    }

    pub(crate) fn to_char(self) -> Option<char> {
        match self {
            Cell::Start => Some('s'),
            Cell::Exit => Some('e'),
            Cell::Water => Some('w'),
            Cell::Mouse => Some('m'),
            Cell::Open => Some(' '),
            Cell::Other(c) => Some(c),
            Cell::Void => None,
        }
    }

    pub fn cost(self) -> u32 {
        match self {
            Cell::Water => WATER_COST,
            _ => STEP_COST,
        }
    }
}

// signed so that moves off the top and left edge can be represented before the bounds check
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: i32,
    pub c: i32,
}

impl Pos {
    pub fn new(r: i32, c: i32) -> Pos {
        Pos { r, c }
    }

    /// Manhattan distance
    pub fn dist(self, other: Pos) -> u32 {
        ((self.r - other.r).abs() + (self.c - other.c).abs()) as u32
    }

    pub fn euclidean_dist(self, other: Pos) -> f64 {
        let dr = f64::from(self.r - other.r);
        let dc = f64::from(self.c - other.c);
        (dr * dr + dc * dc).sqrt()
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Left,
    Up,
    Right,
    Down,
}

/// The order in which successors are generated.
pub const DIRECTIONS: [Dir; 4] = [Dir::Left, Dir::Up, Dir::Right, Dir::Down];

impl Dir {
    pub fn action(self) -> &'static str {
        match self {
            Dir::Left => "left",
            Dir::Up => "up",
            Dir::Right => "right",
            Dir::Down => "down",
        }
    }

    fn offset(self) -> (i32, i32) {
        match self {
            Dir::Left => (0, -1),
            Dir::Up => (-1, 0),
            Dir::Right => (0, 1),
            Dir::Down => (1, 0),
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // first letter of the action
        match *self {
            Dir::Left => write!(f, "l"),
            Dir::Up => write!(f, "u"),
            Dir::Right => write!(f, "r"),
            Dir::Down => write!(f, "d"),
        }
    }
}

impl Add<Dir> for Pos {
    type Output = Pos;

    fn add(self, dir: Dir) -> Pos {
        let (dr, dc) = dir.offset();
        Pos {
            r: self.r + dr,
            c: self.c + dc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        let a = Pos::new(0, 0);
        let b = Pos::new(3, -4);
        assert_eq!(a.dist(b), 7);
        assert_eq!(b.dist(a), 7);
        assert_eq!(a.euclidean_dist(b), 5.0);
        assert_eq!(a.dist(a), 0);
    }

    #[test]
    fn moving() {
        let pos = Pos::new(1, 1);
        let neighbors: Vec<_> = DIRECTIONS.iter().map(|&dir| pos + dir).collect();
        assert_eq!(
            neighbors,
            vec![Pos::new(1, 0), Pos::new(0, 1), Pos::new(1, 2), Pos::new(2, 1)]
        );
        assert_eq!(Pos::new(0, 0) + Dir::Up, Pos::new(-1, 0));
    }

    #[test]
    fn cells() {
        for &c in &['s', 'e', 'w', 'm', ' ', '#', 'x'] {
            assert_eq!(Cell::from_char(c).to_char(), Some(c));
        }
        assert_eq!(Cell::from_char('w').cost(), 6);
        assert_eq!(Cell::from_char('#').cost(), 1);
        assert_eq!(Cell::from_char('m').cost(), 1);
    }
}
