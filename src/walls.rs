use crate::cell::{Cell, Move};
use crate::graph::AdjacencyMap;
use crate::GRID_SIZE;
use hashbrown::HashMap;

/// Per-cell wall layout for a whole maze, keyed by cell.
pub type WallMap = HashMap<Cell, WallProfile>;

/// Which of a cell's four sides are walls (`true` = walled).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WallProfile {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl WallProfile {
    /// All four sides walled.
    pub const SEALED: WallProfile = WallProfile {
        up: true,
        down: true,
        left: true,
        right: true,
    };

    /// Derive the profile of `cell` from the adjacency map. A side is a wall
    /// unless the neighbor on that side lies inside the grid and appears in
    /// the cell's adjacency entry.
    pub fn of(adj: &AdjacencyMap, cell: Cell) -> Self {
        let neighbors = adj.neighbors(cell);
        let open = |mv: Move| {
            let n = cell.neighbor(mv);
            n.in_grid() && neighbors.contains(&n)
        };
        Self {
            up: !open(Move::Up),
            down: !open(Move::Down),
            left: !open(Move::Left),
            right: !open(Move::Right),
        }
    }

    /// Profile from a 4-bit pattern (bit 0 = up, 1 = down, 2 = left,
    /// 3 = right). Used to enumerate the vocabulary.
    pub fn from_bits(bits: u8) -> Self {
        Self {
            up: bits & 1 != 0,
            down: bits & 2 != 0,
            left: bits & 4 != 0,
            right: bits & 8 != 0,
        }
    }

    /// Number of walled sides.
    pub fn count(self) -> u8 {
        self.up as u8 + self.down as u8 + self.left as u8 + self.right as u8
    }

    /// Canonical key: the walled direction names joined by `_` in the fixed
    /// order up, down, left, right, with the two endpoints renamed to
    /// `no_wall` and `all`.
    pub fn key(self) -> &'static str {
        match (self.up, self.down, self.left, self.right) {
            (false, false, false, false) => "no_wall",
            (true, false, false, false) => "up",
            (false, true, false, false) => "down",
            (false, false, true, false) => "left",
            (false, false, false, true) => "right",
            (true, true, false, false) => "up_down",
            (true, false, true, false) => "up_left",
            (true, false, false, true) => "up_right",
            (false, true, true, false) => "down_left",
            (false, true, false, true) => "down_right",
            (false, false, true, true) => "left_right",
            (true, true, true, false) => "up_down_left",
            (true, true, false, true) => "up_down_right",
            (true, false, true, true) => "up_left_right",
            (false, true, true, true) => "down_left_right",
            (true, true, true, true) => "all",
        }
    }

    /// The wall-pattern token for this profile.
    pub fn token(self) -> &'static str {
        match (self.up, self.down, self.left, self.right) {
            (false, false, false, false) => "<|no_wall|>",
            (true, false, false, false) => "<|up_wall|>",
            (false, true, false, false) => "<|down_wall|>",
            (false, false, true, false) => "<|left_wall|>",
            (false, false, false, true) => "<|right_wall|>",
            (true, true, false, false) => "<|up_down_wall|>",
            (true, false, true, false) => "<|up_left_wall|>",
            (true, false, false, true) => "<|up_right_wall|>",
            (false, true, true, false) => "<|down_left_wall|>",
            (false, true, false, true) => "<|down_right_wall|>",
            (false, false, true, true) => "<|left_right_wall|>",
            (true, true, true, false) => "<|up_down_left_wall|>",
            (true, true, false, true) => "<|up_down_right_wall|>",
            (true, false, true, true) => "<|up_left_right_wall|>",
            (false, true, true, true) => "<|down_left_right_wall|>",
            (true, true, true, true) => "<|all_wall|>",
        }
    }
}

/// Derive profiles for every cell of the grid, including cells the adjacency
/// map never mentions (those seal to `all`). Computed once per maze and
/// reused across the prompt and every step rendering.
pub fn wall_profiles(adj: &AdjacencyMap) -> WallMap {
    let mut map = WallMap::with_capacity((GRID_SIZE * GRID_SIZE) as usize);
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            let cell = Cell::new(row, col);
            map.insert(cell, WallProfile::of(adj, cell));
        }
    }
    map
}
