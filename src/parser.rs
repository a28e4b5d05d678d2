use std::error::Error;
use std::fmt::{self, Display, Formatter};

use log::debug;

use crate::board::Board;
use crate::data::{Cell, Pos};
use crate::state::State;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErr {
    Empty,
    NoStart,
    MultipleStarts(Pos),
    NoExit,
    MultipleExits(Pos),
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Empty => write!(f, "Empty board"),
            ParserErr::NoStart => write!(f, "No start"),
            ParserErr::MultipleStarts(pos) => write!(f, "Another start at {}", pos),
            ParserErr::NoExit => write!(f, "No exit"),
            ParserErr::MultipleExits(pos) => write!(f, "Another exit at {}", pos),
        }
    }
}

impl Error for ParserErr {}

#[derive(Debug)]
pub(crate) struct ParsedBoard {
    pub(crate) board: Board,
    pub(crate) exit: Pos,
    pub(crate) start: State,
}

/// Parses one character per cell:
/// - `s` - the agent's starting position
/// - `e` - the exit
/// - `w` - water
/// - `m` - a mouse (any number of them)
/// - space - an open cell
///
/// Anything else is kept as is and treated like an open cell.
pub(crate) fn parse(text: &str) -> Result<ParsedBoard, ParserErr> {
    // trim so we can specify boards using raw strings more easily
    // only whole empty lines though, spaces are cells
    // leading empty lines are not counted so rows are numbered from the first non-empty one
    let text = text.trim_matches(|c| c == '\n' || c == '\r');
    if text.is_empty() {
        return Err(ParserErr::Empty);
    }

    let mut rows = Vec::new();
    let mut start = None;
    let mut exit = None;
    let mut mice = Vec::new();

    for (r, line) in text.lines().enumerate() {
        let mut row = Vec::new();
        for (c, ch) in line.chars().enumerate() {
            let pos = Pos::new(r as i32, c as i32);
            let cell = Cell::from_char(ch);
            match cell {
                Cell::Start => {
                    if start.is_some() {
                        return Err(ParserErr::MultipleStarts(pos));
                    }
                    start = Some(pos);
                }
                Cell::Exit => {
                    if exit.is_some() {
                        return Err(ParserErr::MultipleExits(pos));
                    }
                    exit = Some(pos);
                }
                Cell::Mouse => mice.push(pos),
                _ => {}
            }
            row.push(cell);
        }
        rows.push(row);
    }

    let start = start.ok_or(ParserErr::NoStart)?;
    let exit = exit.ok_or(ParserErr::NoExit)?;
    debug!(
        "Parsed {} rows, start {}, exit {}, {} mice",
        rows.len(),
        start,
        exit,
        mice.len()
    );

    Ok(ParsedBoard {
        board: Board::new(&rows),
        exit,
        start: State::new(start, mice),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fail_empty() {
        assert_failure("", ParserErr::Empty);
        assert_failure("\n\n", ParserErr::Empty);
    }

    #[test]
    fn fail_no_start() {
        let board = r"
  m
 e
";
        assert_failure(board, ParserErr::NoStart);
    }

    #[test]
    fn fail_no_exit() {
        let board = r"
s m

";
        assert_failure(board, ParserErr::NoExit);
    }

    #[test]
    fn fail_multiple() {
        assert_failure("s e\n s", ParserErr::MultipleStarts(Pos::new(1, 1)));
        assert_failure("se\n e", ParserErr::MultipleExits(Pos::new(1, 1)));
    }

    #[test]
    fn simplest() {
        let parsed = parse("s m\n e").unwrap();
        assert_eq!(parsed.exit, Pos::new(1, 1));
        assert_eq!(parsed.start.agent(), Pos::new(0, 0));
        assert_eq!(parsed.start.mice(), &[Pos::new(0, 2)]);
        assert_eq!(parsed.board.to_string(), "s m\n e\n");
    }

    #[test]
    fn mice_row_major() {
        let board = r"
m  m
 s m
m  e
";
        let parsed = parse(board).unwrap();
        assert_eq!(
            parsed.start.mice(),
            &[Pos::new(0, 0), Pos::new(0, 3), Pos::new(1, 3), Pos::new(2, 0)]
        );
    }

    #[test]
    fn unknown_cells_are_kept() {
        let parsed = parse("s#x\n e").unwrap();
        assert_eq!(parsed.board.cell(Pos::new(0, 1)), Some(Cell::Other('#')));
        assert_eq!(parsed.board.cell(Pos::new(0, 2)), Some(Cell::Other('x')));
    }

    #[test]
    fn leading_empty_lines() {
        let parsed = parse("\n\ns e\n").unwrap();
        assert_eq!(parsed.start.agent(), Pos::new(0, 0));
        assert_eq!(parsed.exit, Pos::new(0, 2));
        assert_eq!(parsed.board.rows(), 1);
    }

    #[test]
    fn windows_line_endings() {
        let parsed = parse("s m\r\n e\r\n").unwrap();
        assert_eq!(parsed.board.to_string(), "s m\n e\n");
    }

    fn assert_failure(text: &str, expected_err: ParserErr) {
        assert_eq!(parse(text).unwrap_err(), expected_err);
    }
}
