use crate::cell::{Cell, Move};
use crate::error::Error;
use hashbrown::HashMap;

/// Undirected open-passage graph over grid cells.
///
/// Edges are the only positive information: any grid-adjacent pair without an
/// edge is implicitly walled. Neighbor lists keep insertion order, so a fixed
/// input string plus a fixed random source gives reproducible sampling.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyMap {
    edges: HashMap<Cell, Vec<Cell>>,
}

impl AdjacencyMap {
    /// Parse a semicolon-separated edge list: `"(r,c) <--> (r,c) ; ..."`.
    ///
    /// Empty or whitespace-only clauses are skipped. Any clause that does not
    /// split into two coordinate pairs aborts the whole parse.
    pub fn parse(input: &str) -> Result<Self, Error> {
        let mut edges: HashMap<Cell, Vec<Cell>> = HashMap::new();
        for clause in input.split(';') {
            let clause = clause.trim();
            if clause.is_empty() {
                continue;
            }
            let malformed = || Error::MalformedEdge {
                clause: clause.to_string(),
            };
            let (a, b) = clause.split_once("<-->").ok_or_else(malformed)?;
            let a: Cell = a.parse().map_err(|_| malformed())?;
            let b: Cell = b.parse().map_err(|_| malformed())?;
            edges.entry(a).or_default().push(b);
            edges.entry(b).or_default().push(a);
        }
        Ok(Self { edges })
    }

    /// Cells reachable from `cell` through one open passage. Empty for cells
    /// no edge mentions.
    pub fn neighbors(&self, cell: Cell) -> &[Cell] {
        self.edges.get(&cell).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.edges.contains_key(&cell)
    }
}

/// Number of walled sides (0-4) around `cell`: cardinal neighbors with no
/// open-edge entry in the adjacency map.
pub fn wall_count(adj: &AdjacencyMap, cell: Cell) -> u8 {
    let neighbors = adj.neighbors(cell);
    Move::ALL
        .iter()
        .filter(|&&mv| !neighbors.contains(&cell.neighbor(mv)))
        .count() as u8
}

/// Standalone wall counter over raw strings, with the same parse and failure
/// policy as [`AdjacencyMap::parse`].
pub fn count_walls(adj_list_str: &str, point_str: &str) -> Result<u8, Error> {
    let adj = AdjacencyMap::parse(adj_list_str)?;
    let point: Cell = point_str.parse()?;
    Ok(wall_count(&adj, point))
}
