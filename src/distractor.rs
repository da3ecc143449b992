//! Wrong-path sampling.
//!
//! Both samplers grow constrained random walks over the passage graph to
//! synthesize plausible-but-incorrect paths: a candidate cell is usable only
//! if it does not collide with the correct path's remaining suffix at the
//! corresponding position and has not already been visited by the walk.
//! Failure to find a path inside the attempt budget is an ordinary empty
//! result, never an error.

use crate::cell::{self, Cell};
use crate::error::Error;
use crate::graph::{self, AdjacencyMap};
use rand::seq::IndexedRandom;
use rand::Rng;

/// Upper bound on `n_steps` for the single-path sampler.
pub const MAX_WRONG_STEPS: usize = 3;

const SINGLE_PATH_ATTEMPTS: usize = 1000;
const ATTEMPTS_PER_LENGTH: usize = 100;

/// The correct path's tail starting at `from`, empty once the walk has grown
/// past the correct path's length.
fn suffix(correct_path: &[Cell], from: usize) -> &[Cell] {
    correct_path.get(from..).unwrap_or(&[])
}

/// Grow `path` by up to `extra_steps` random cells under the avoidance rules.
/// Stops early at a dead end; the caller checks the final length.
fn extend_walk<R: Rng>(
    adj: &AdjacencyMap,
    path: &mut Vec<Cell>,
    correct_path: &[Cell],
    extra_steps: usize,
    rng: &mut R,
) {
    let mut current = match path.last() {
        Some(&c) => c,
        None => return,
    };
    for _ in 0..extra_steps {
        let candidates: Vec<Cell> = adj
            .neighbors(current)
            .iter()
            .copied()
            .filter(|n| !suffix(correct_path, path.len()).contains(n) && !path.contains(n))
            .collect();
        let Some(&next) = candidates.choose(rng) else {
            break;
        };
        path.push(next);
        current = next;
    }
}

/// Sample one wrong path of exactly `n_steps` moves starting at the origin.
///
/// `n_steps` outside `1..=3` is rejected before any sampling. Up to 1000
/// attempts; the first walk reaching full length wins. `Ok(None)` means the
/// budget ran out without a full-length walk.
pub fn sample_wrong_path<R: Rng>(
    adj: &AdjacencyMap,
    origin: Cell,
    correct_path: &[Cell],
    n_steps: usize,
    rng: &mut R,
) -> Result<Option<Vec<Cell>>, Error> {
    if !(1..=MAX_WRONG_STEPS).contains(&n_steps) {
        return Err(Error::InvalidStepCount { n_steps });
    }

    for _ in 0..SINGLE_PATH_ATTEMPTS {
        let mut wrong_path = vec![origin];
        extend_walk(adj, &mut wrong_path, correct_path, n_steps, rng);
        if wrong_path.len() == n_steps + 1 {
            return Ok(Some(wrong_path));
        }
    }
    Ok(None)
}

/// Sample up to one wrong path per eligible first-move neighbor of the origin.
///
/// A neighbor is eligible if it is not the origin and does not collide with
/// the correct path from index 1 on. A neighbor walled on three sides is a
/// near-dead-end trap and is accepted outright as a two-cell path. Otherwise
/// extensions are tried at decreasing extra lengths, `max_n_steps - 1` down to
/// 1, with up to 100 attempts each; the first full-length walk is kept. State
/// is fresh for every attempt, so neighbors never see each other's partial
/// walks.
pub fn sample_wrong_paths<R: Rng>(
    adj: &AdjacencyMap,
    origin: Cell,
    correct_path: &[Cell],
    max_n_steps: usize,
    rng: &mut R,
) -> Vec<Vec<Cell>> {
    let first_moves: Vec<Cell> = adj
        .neighbors(origin)
        .iter()
        .copied()
        .filter(|n| !suffix(correct_path, 1).contains(n) && *n != origin)
        .collect();

    let mut wrong_paths = Vec::new();
    for seed in first_moves {
        if graph::wall_count(adj, seed) == 3 {
            wrong_paths.push(vec![origin, seed]);
            continue;
        }
        'lengths: for extra in (1..max_n_steps).rev() {
            for _ in 0..ATTEMPTS_PER_LENGTH {
                let mut wrong_path = vec![origin, seed];
                extend_walk(adj, &mut wrong_path, correct_path, extra, rng);
                if wrong_path.len() == extra + 2 {
                    wrong_paths.push(wrong_path);
                    break 'lengths;
                }
            }
        }
    }
    wrong_paths
}

/// Single-path sampler over raw strings; output is the whitespace-joined
/// `"(r,c)"` form.
pub fn sample_wrong_path_from_strs<R: Rng>(
    adj_list_str: &str,
    origin_str: &str,
    path_str: &str,
    n_steps: usize,
    rng: &mut R,
) -> Result<Option<String>, Error> {
    let adj = AdjacencyMap::parse(adj_list_str)?;
    let origin: Cell = origin_str.parse()?;
    let correct_path = cell::parse_path(path_str)?;
    Ok(sample_wrong_path(&adj, origin, &correct_path, n_steps, rng)?
        .map(|path| cell::render_path(&path)))
}

/// Multi-path sampler over raw strings.
pub fn sample_wrong_paths_from_strs<R: Rng>(
    adj_list_str: &str,
    origin_str: &str,
    path_str: &str,
    max_n_steps: usize,
    rng: &mut R,
) -> Result<Vec<String>, Error> {
    let adj = AdjacencyMap::parse(adj_list_str)?;
    let origin: Cell = origin_str.parse()?;
    let correct_path = cell::parse_path(path_str)?;
    Ok(
        sample_wrong_paths(&adj, origin, &correct_path, max_n_steps, rng)
            .iter()
            .map(|path| cell::render_path(path))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    const ADJ: &str = "(1,1) <--> (1,2) ; (1,2) <--> (2,2) ; (4,4) <--> (4,3) ; \
        (4,1) <--> (4,2) ; (2,3) <--> (3,3) ; (1,3) <--> (0,3) ; (0,3) <--> (0,2) ; \
        (4,3) <--> (4,2) ; (2,1) <--> (2,0) ; (3,1) <--> (3,0) ; (3,3) <--> (4,3) ; \
        (0,0) <--> (0,1) ; (4,1) <--> (4,0) ; (1,1) <--> (0,1) ; (2,4) <--> (1,4) ; \
        (2,2) <--> (3,2) ; (1,3) <--> (1,4) ; (0,4) <--> (1,4) ; (0,1) <--> (0,2) ; \
        (2,0) <--> (1,0) ; (1,0) <--> (0,0) ; (3,1) <--> (3,2) ; (2,4) <--> (3,4) ; \
        (3,3) <--> (3,4) ; ";
    const PATH: &str = "(3,3) (3,4) (2,4) (1,4) (1,3)";

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(0x5EED)
    }

    fn assert_wrong_path_invariants(wrong: &[Cell], origin: Cell, correct: &[Cell]) {
        assert_eq!(wrong[0], origin);
        let unique: HashSet<Cell> = wrong.iter().copied().collect();
        assert_eq!(unique.len(), wrong.len(), "repeat in {wrong:?}");
        // Cells past the fixed prefix must dodge the correct path's suffix at
        // the position they were appended.
        for (i, c) in wrong.iter().enumerate().skip(1) {
            assert!(
                !suffix(correct, i).contains(c),
                "{c} collides with the correct-path suffix at {i}"
            );
        }
    }

    #[test]
    fn step_count_validated_before_sampling() {
        let adj = AdjacencyMap::parse(ADJ).unwrap();
        let correct = cell::parse_path(PATH).unwrap();
        for n_steps in [0, 4, 10] {
            assert_eq!(
                sample_wrong_path(&adj, Cell::new(3, 3), &correct, n_steps, &mut rng()),
                Err(Error::InvalidStepCount { n_steps })
            );
        }
    }

    #[test]
    fn single_sampler_upholds_shape_invariants() {
        let adj = AdjacencyMap::parse(ADJ).unwrap();
        let origin = Cell::new(3, 3);
        let correct = cell::parse_path(PATH).unwrap();
        for n_steps in 1..=MAX_WRONG_STEPS {
            if let Some(wrong) =
                sample_wrong_path(&adj, origin, &correct, n_steps, &mut rng()).unwrap()
            {
                assert_eq!(wrong.len(), n_steps + 1);
                assert_wrong_path_invariants(&wrong, origin, &correct);
            }
        }
    }

    #[test]
    fn forced_corridor_yields_the_only_detour() {
        // From (0,0) the only neighbor off the correct path is (1,0).
        let adj = AdjacencyMap::parse("(0,0) <--> (0,1) ; (0,0) <--> (1,0)").unwrap();
        let correct = [Cell::new(0, 0), Cell::new(0, 1)];
        let wrong = sample_wrong_path(&adj, Cell::new(0, 0), &correct, 1, &mut rng())
            .unwrap()
            .expect("detour exists");
        assert_eq!(wrong, vec![Cell::new(0, 0), Cell::new(1, 0)]);
    }

    #[test]
    fn exhaustion_is_a_value_not_an_error() {
        // A single corridor: every move from the origin is on the correct path.
        let adj = AdjacencyMap::parse("(0,0) <--> (0,1)").unwrap();
        let correct = [Cell::new(0, 0), Cell::new(0, 1)];
        let got = sample_wrong_path(&adj, Cell::new(0, 0), &correct, 1, &mut rng()).unwrap();
        assert_eq!(got, None);
    }

    #[test]
    fn string_entry_point_renders_space_free_pairs() {
        let wrong = sample_wrong_path_from_strs(
            "(0, 0) <--> (0, 1) ; (0, 0) <--> (1, 0)",
            "(0,0)",
            "(0,0) (0,1)",
            1,
            &mut rng(),
        )
        .unwrap()
        .expect("detour exists");
        assert_eq!(wrong, "(0,0) (1,0)");
    }

    #[test]
    fn multi_sampler_accepts_trap_neighbors_outright() {
        // (1,0) hangs off the origin with three walls; it must come back as
        // the two-cell trap path.
        let adj = AdjacencyMap::parse("(0,0) <--> (0,1) ; (0,0) <--> (1,0)").unwrap();
        let correct = [Cell::new(0, 0), Cell::new(0, 1)];
        let paths = sample_wrong_paths(&adj, Cell::new(0, 0), &correct, 3, &mut rng());
        assert_eq!(paths, vec![vec![Cell::new(0, 0), Cell::new(1, 0)]]);
    }

    #[test]
    fn multi_sampler_upholds_shape_invariants() {
        let adj = AdjacencyMap::parse(ADJ).unwrap();
        let origin = Cell::new(3, 3);
        let correct = cell::parse_path(PATH).unwrap();
        let eligible: Vec<Cell> = adj
            .neighbors(origin)
            .iter()
            .copied()
            .filter(|n| !correct[1..].contains(n) && *n != origin)
            .collect();

        let paths = sample_wrong_paths(&adj, origin, &correct, 3, &mut rng());
        assert!(paths.len() <= eligible.len());
        let mut seen_seeds = HashSet::new();
        for wrong in &paths {
            assert!(wrong.len() >= 2);
            assert!(wrong.len() <= 4);
            assert!(eligible.contains(&wrong[1]));
            assert!(seen_seeds.insert(wrong[1]), "neighbor used twice");
            assert_wrong_path_invariants(wrong, origin, &correct);
        }
    }

    #[test]
    fn excluded_trap_neighbor_yields_nothing() {
        // The origin's only neighbor is the correct path's next cell, so the
        // multi-path sampler has no eligible seed at all.
        let adj = AdjacencyMap::parse("(0,0) <--> (0,1)").unwrap();
        let correct = [Cell::new(0, 0), Cell::new(0, 1)];
        let paths = sample_wrong_paths(&adj, Cell::new(0, 0), &correct, 3, &mut rng());
        assert!(paths.is_empty());
    }

    #[test]
    fn trap_accept_survives_a_minimal_length_budget() {
        let adj = AdjacencyMap::parse("(0,0) <--> (0,1) ; (0,0) <--> (1,0)").unwrap();
        let correct = [Cell::new(0, 0), Cell::new(0, 1)];
        // No extension lengths to try, but the trap check runs first.
        let paths = sample_wrong_paths(&adj, Cell::new(0, 0), &correct, 1, &mut rng());
        assert_eq!(paths, vec![vec![Cell::new(0, 0), Cell::new(1, 0)]]);
    }
}
