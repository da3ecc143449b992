use crate::error::Error;
use crate::GRID_SIZE;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One grid position. Plain value type; row 0 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn in_grid(self) -> bool {
        (0..GRID_SIZE).contains(&self.row) && (0..GRID_SIZE).contains(&self.col)
    }

    /// The grid-adjacent cell on the given side, bounds not checked.
    pub fn neighbor(self, mv: Move) -> Cell {
        match mv {
            Move::Up => Cell::new(self.row - 1, self.col),
            Move::Down => Cell::new(self.row + 1, self.col),
            Move::Left => Cell::new(self.row, self.col - 1),
            Move::Right => Cell::new(self.row, self.col + 1),
        }
    }

    pub fn coordinate_token(self) -> String {
        format!("<|{}-{}|>", self.row, self.col)
    }
}

/// Renders as `"(r,c)"` with no internal space, the form wrong-path output
/// uses. Parsing accepts internal whitespace (`"(1, 3)"`).
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

impl FromStr for Cell {
    type Err = Error;

    /// Strict pair parser: parentheses around two comma-separated integers,
    /// whitespace tolerated around each part. Anything else is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || Error::MalformedCell { text: s.to_string() };
        let inner = s
            .trim()
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(malformed)?;
        let (row, col) = inner.split_once(',').ok_or_else(malformed)?;
        let row = row.trim().parse().map_err(|_| malformed())?;
        let col = col.trim().parse().map_err(|_| malformed())?;
        Ok(Self { row, col })
    }
}

/// Parse a whitespace-separated sequence of coordinate pairs.
pub fn parse_path(path_str: &str) -> Result<Vec<Cell>, Error> {
    path_str.split_whitespace().map(str::parse).collect()
}

/// Join a cell sequence back into the whitespace-separated `"(r,c)"` form.
pub fn render_path(path: &[Cell]) -> String {
    path.iter()
        .map(Cell::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// One cardinal step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Fixed canonical order: up, down, left, right.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    pub fn label(self) -> &'static str {
        match self {
            Move::Up => "up",
            Move::Down => "down",
            Move::Left => "left",
            Move::Right => "right",
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Move::Up => "<|up|>",
            Move::Down => "<|down|>",
            Move::Left => "<|left|>",
            Move::Right => "<|right|>",
        }
    }

    /// Direction of the step from `from` to `to`.
    ///
    /// Checked strictly in the order row-decrease, row-increase, col-decrease,
    /// col-increase; the first match wins, so a diagonal delta resolves to its
    /// row axis. A zero delta is no movement.
    pub fn between(from: Cell, to: Cell) -> Option<Move> {
        if to.row < from.row {
            Some(Move::Up)
        } else if to.row > from.row {
            Some(Move::Down)
        } else if to.col < from.col {
            Some(Move::Left)
        } else if to.col > from.col {
            Some(Move::Right)
        } else {
            None
        }
    }
}
