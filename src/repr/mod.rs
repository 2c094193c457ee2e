/*!
# Graph Representations

Two independent storage backends implement the full [`Graph`] contract:

- [`EdgeListGraph`] stores a set of labels and a flat list of immutable [`Edge`]s.
  Every edge-touching operation scans the edge list (`O(m)`), vertex-only operations are `O(1)`.
  Checking the "one edge per pair" invariant only needs a single pass over one list.
- [`VertexListGraph`] stores one [`Vertex`] record per label, each exclusively owning a map of its
  outgoing edges. `targets` is a single lookup plus a copy, `sources` scans all records (`O(n)`).

Neither representation depends on the other. [`Representation`] picks one at runtime and hands it
out as a `Box<dyn Graph<Label = L>>`.
*/

use std::{fmt::Display, str::FromStr};

use fxhash::{FxHashMap, FxHashSet};

use crate::{
    Edge, GraphError, InvariantViolation, NO_EDGE, NumEdges, NumVertices, Result, VertexLabel,
    Weight,
    invariants::{CheckInvariants, debug_check_invariants, describe},
    ops::*,
};

mod edge_list;
mod vertex_list;

pub mod digest;

pub use edge_list::*;
pub use vertex_list::*;

/// Identifier for a graph representation.
///
/// Can be parsed from its name (e.g. `"edge-list"` or `"vertex-list"`) to allow choosing the
/// backend from configuration.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Representation {
    /// [`EdgeListGraph`]
    #[default]
    EdgeList,
    /// [`VertexListGraph`]
    VertexList,
}

impl Representation {
    /// All available representations
    pub const ALL: [Representation; 2] = [Representation::EdgeList, Representation::VertexList];

    /// Returns the canonical name of the representation
    pub const fn name(self) -> &'static str {
        match self {
            Representation::EdgeList => "edge-list",
            Representation::VertexList => "vertex-list",
        }
    }

    /// Creates an empty graph using this representation
    pub fn empty<L>(self) -> Box<dyn Graph<Label = L>>
    where
        L: VertexLabel + 'static,
    {
        match self {
            Representation::EdgeList => Box::new(EdgeListGraph::<L>::new()),
            Representation::VertexList => Box::new(VertexListGraph::<L>::new()),
        }
    }
}

impl FromStr for Representation {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "edge-list" | "edgelist" | "edges" => Ok(Representation::EdgeList),
            "vertex-list" | "vertexlist" | "vertices" => Ok(Representation::VertexList),
            _ => Err(GraphError::UnknownRepresentation(s.to_string())),
        }
    }
}

impl Display for Representation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
