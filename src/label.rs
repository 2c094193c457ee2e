/*!
# Label Representation

Vertices are identified by user-supplied labels instead of dense indices.
Any cheap-to-compare, immutable value works: `String`, `&'static str`, integers or small
domain-specific newtypes.

A label must be hashable (storage is keyed by label), printable (the diagnostic dumps
mention every label) and cloneable (queries hand out owned snapshots).
*/

use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

/// Vertex labels can be any cloneable, hashable and printable value
pub trait VertexLabel: Clone + Eq + Hash + Debug + Display {}

impl<T> VertexLabel for T where T: Clone + Eq + Hash + Debug + Display {}

/// Edge weights. Weights stored in a graph are always strictly positive,
/// a weight of `0` denotes the absence of an edge.
pub type Weight = i32;

/// Weight reported for an edge that does not exist
pub const NO_EDGE: Weight = 0;

/// There can be at most `usize::MAX` vertices in a graph
pub type NumVertices = usize;

/// There can be at most `usize::MAX` edges in a graph
pub type NumEdges = usize;
