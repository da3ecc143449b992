use crate::cell::{self, Cell, Move};
use crate::error::Error;
use crate::graph::AdjacencyMap;
use crate::render::GridTokenizer;
use crate::walls;
use serde::{Deserialize, Serialize};

/// The four artifacts generated from one maze instance.
///
/// `cot_steps` and `instructions` are index-aligned: step `i` shows the grid
/// with the walker at `path[i]` marked by the move toward `path[i+1]`, and
/// `instructions[i]` states that move in words. `golden_answer` is the same
/// move sequence as bare tokens, no separators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CotSequence {
    pub prompt: String,
    pub cot_steps: Vec<String>,
    pub instructions: Vec<String>,
    pub golden_answer: String,
}

/// Generate the full training sequence for one maze.
///
/// Wall profiles are derived once and shared by the prompt and every step.
/// A path of fewer than two cells produces zero steps and an empty golden
/// answer. The path is trusted: nothing checks it against the adjacency map.
pub fn generate(adj: &AdjacencyMap, origin: Cell, target: Cell, path: &[Cell]) -> CotSequence {
    let walls = walls::wall_profiles(adj);
    let tokenizer = GridTokenizer::new(&walls, origin, target);

    let mut cot_steps = Vec::new();
    let mut instructions = Vec::new();
    let mut golden_answer = String::new();
    for pair in path.windows(2) {
        let mv = Move::between(pair[0], pair[1]);
        cot_steps.push(tokenizer.step(pair[0], mv, &mut instructions));
        if let Some(mv) = mv {
            golden_answer.push_str(mv.token());
        }
    }

    CotSequence {
        prompt: tokenizer.prompt(),
        cot_steps,
        instructions,
        golden_answer,
    }
}

/// One-shot entry point over the four raw strings, duplicating the parse.
pub fn generate_from_strs(
    adj_list_str: &str,
    origin_str: &str,
    target_str: &str,
    path_str: &str,
) -> Result<CotSequence, Error> {
    let adj = AdjacencyMap::parse(adj_list_str)?;
    let origin = origin_str.parse()?;
    let target = target_str.parse()?;
    let path = cell::parse_path(path_str)?;
    Ok(generate(&adj, origin, target, &path))
}

/// Human-readable step directions for a path, independent of any rendering.
/// A zero delta reads "Stay in place".
pub fn path_directions(path: &[Cell]) -> Vec<String> {
    path.windows(2)
        .enumerate()
        .map(|(i, pair)| match Move::between(pair[0], pair[1]) {
            Some(mv) => format!("Step {}: Go {}", i + 1, mv.label()),
            None => format!("Step {}: Stay in place", i + 1),
        })
        .collect()
}
