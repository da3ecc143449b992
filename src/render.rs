use crate::cell::{Cell, Move};
use crate::tokens;
use crate::walls::{WallMap, WallProfile};
use crate::GRID_SIZE;

/// Renders full-grid snapshots over a fixed wall layout.
///
/// The wall layout never changes across one generated sequence; only the
/// marker tokens differ between the prompt and the individual steps, so one
/// tokenizer is built per maze and reused for every rendering.
#[derive(Debug)]
pub struct GridTokenizer<'a> {
    walls: &'a WallMap,
    origin: Cell,
    target: Cell,
}

impl<'a> GridTokenizer<'a> {
    pub fn new(walls: &'a WallMap, origin: Cell, target: Cell) -> Self {
        Self {
            walls,
            origin,
            target,
        }
    }

    /// The static prompt: origin and target as fixed markers, nothing
    /// highlighted.
    pub fn prompt(&self) -> String {
        self.render(None, None, &mut Vec::new())
    }

    /// One chain-of-thought step with `highlight` as the walker's cell.
    ///
    /// Emitting the directional token also appends its instruction line to
    /// `instructions`. With `mv` of `None` (a zero-delta transition) the
    /// highlighted cell falls through to the ordinary marker rules and no
    /// instruction is logged.
    pub fn step(
        &self,
        highlight: Cell,
        mv: Option<Move>,
        instructions: &mut Vec<String>,
    ) -> String {
        self.render(Some(highlight), mv, instructions)
    }

    fn render(
        &self,
        highlight: Option<Cell>,
        mv: Option<Move>,
        instructions: &mut Vec<String>,
    ) -> String {
        let mut out = String::with_capacity((GRID_SIZE * GRID_SIZE) as usize * 36);
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let cell = Cell::new(row, col);
                out.push_str(&cell.coordinate_token());
                let profile = self
                    .walls
                    .get(&cell)
                    .copied()
                    .unwrap_or(WallProfile::SEALED);
                out.push_str(profile.token());
                out.push_str(self.marker(cell, highlight, mv, instructions));
            }
            out.push('\n');
        }
        out
    }

    /// Exactly one marker per cell, by fixed precedence:
    ///
    /// 1. highlighted cell with a movement override: the directional token
    ///    (side effect: instruction line appended);
    /// 2. the target;
    /// 3. the origin, unless the origin is the highlighted cell;
    /// 4. blank.
    ///
    /// The target outranking a plain origin, and the origin losing its marker
    /// while highlighted, are both load-bearing for bit-exact output.
    fn marker(
        &self,
        cell: Cell,
        highlight: Option<Cell>,
        mv: Option<Move>,
        instructions: &mut Vec<String>,
    ) -> &'static str {
        if highlight == Some(cell) {
            if let Some(mv) = mv {
                instructions.push(format!("Step {}: Go {}", instructions.len() + 1, mv.label()));
                return mv.token();
            }
        }
        if cell == self.target {
            return tokens::TARGET;
        }
        if cell == self.origin && highlight != Some(self.origin) {
            return tokens::ORIGIN;
        }
        tokens::BLANK
    }
}
