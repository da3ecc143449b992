use thiserror::Error;

/// Failures surfaced by the string-level entry points.
///
/// Exhausting the sampling attempt budget is not represented here: the
/// samplers report that as an empty result, since a maze with no usable wrong
/// path is an expected input, not a fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An edge clause that does not split into two coordinate pairs. The
    /// whole adjacency parse aborts; callers never see a partial graph.
    #[error("malformed edge clause: {clause:?}")]
    MalformedEdge { clause: String },

    /// Text that is not a `(row,col)` integer pair.
    #[error("malformed coordinate pair: {text:?}")]
    MalformedCell { text: String },

    /// A delimited input blob without the named section (or with its sections
    /// out of order).
    #[error("missing {section} section in input")]
    MissingSection { section: &'static str },

    /// Wrong-path step count outside the supported range, rejected before any
    /// sampling work starts.
    #[error("n_steps must be between 1 and 3, got {n_steps}")]
    InvalidStepCount { n_steps: usize },
}
