use crate::error::Error;

/// The four raw sections extracted from a delimited maze blob.
///
/// Each field is the trimmed text between one delimiter pair; no parsing
/// happens here beyond finding the delimiters in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeInput {
    pub adjacency: String,
    pub origin: String,
    pub target: String,
    pub path: String,
}

impl MazeInput {
    /// Pull the four sections out of a blob of the form
    /// `<ADJLIST_START>..<ADJLIST_END> .. <ORIGIN_START>..<ORIGIN_END> ..
    /// <TARGET_START>..<TARGET_END> .. <PATH_START>..<PATH_END>`.
    ///
    /// Sections must appear in that order; the first one not found (in what
    /// remains of the input) is reported by name.
    pub fn extract(input: &str) -> Result<Self, Error> {
        let (adjacency, rest) = section(input, "adjacency list", "<ADJLIST_START>", "<ADJLIST_END>")?;
        let (origin, rest) = section(rest, "origin", "<ORIGIN_START>", "<ORIGIN_END>")?;
        let (target, rest) = section(rest, "target", "<TARGET_START>", "<TARGET_END>")?;
        let (path, _) = section(rest, "path", "<PATH_START>", "<PATH_END>")?;
        Ok(Self {
            adjacency,
            origin,
            target,
            path,
        })
    }
}

/// Trimmed text between `start` and `end`, plus the remainder after `end`.
fn section<'a>(
    input: &'a str,
    name: &'static str,
    start: &str,
    end: &str,
) -> Result<(String, &'a str), Error> {
    let missing = Error::MissingSection { section: name };
    let s = input.find(start).ok_or(missing.clone())?;
    let after = &input[s + start.len()..];
    let e = after.find(end).ok_or(missing)?;
    Ok((after[..e].trim().to_string(), &after[e + end.len()..]))
}
