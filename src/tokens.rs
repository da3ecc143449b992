//! The process-wide token vocabulary.
//!
//! Three disjoint families, 48 tokens total for a 5x5 grid: 25 coordinate
//! tokens, 16 wall-pattern tokens, 7 marker tokens. Literal forms are stable;
//! downstream tokenizers depend on them byte for byte.

use crate::cell::Cell;
use crate::walls::WallProfile;
use crate::GRID_SIZE;
use std::sync::OnceLock;

pub const BLANK: &str = "<|blank|>";
pub const ORIGIN: &str = "<|origin|>";
pub const TARGET: &str = "<|target|>";

/// The seven marker tokens: blank, origin, target, and the four moves.
pub const MARKERS: [&str; 7] = [
    BLANK,
    ORIGIN,
    TARGET,
    "<|up|>",
    "<|down|>",
    "<|left|>",
    "<|right|>",
];

/// Every token the renderer can emit, built once per process: coordinates in
/// row-major order, wall patterns in bit order, then the markers.
pub fn vocabulary() -> &'static [String] {
    static VOCAB: OnceLock<Vec<String>> = OnceLock::new();
    VOCAB.get_or_init(|| {
        let mut v = Vec::with_capacity(48);
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                v.push(Cell::new(row, col).coordinate_token());
            }
        }
        for bits in 0..16u8 {
            v.push(WallProfile::from_bits(bits).token().to_string());
        }
        v.extend(MARKERS.iter().map(|s| s.to_string()));
        v
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Move;
    use std::collections::HashSet;

    #[test]
    fn vocabulary_has_48_distinct_tokens() {
        let vocab = vocabulary();
        assert_eq!(vocab.len(), 48);
        let unique: HashSet<&str> = vocab.iter().map(String::as_str).collect();
        assert_eq!(unique.len(), 48);
    }

    #[test]
    fn vocabulary_covers_all_families() {
        let vocab = vocabulary();
        let has = |t: &str| vocab.iter().any(|v| v == t);
        assert!(has("<|0-0|>"));
        assert!(has("<|2-3|>"));
        assert!(has("<|4-4|>"));
        assert!(has("<|no_wall|>"));
        assert!(has("<|up_left_wall|>"));
        assert!(has("<|all_wall|>"));
        assert!(has(BLANK));
        assert!(has(ORIGIN));
        assert!(has(TARGET));
        for mv in Move::ALL {
            assert!(has(mv.token()));
        }
    }
}
