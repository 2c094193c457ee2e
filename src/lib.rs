/*!
`wgraphs` is a small graph data structure library for graphs that are
- **labelled** : Vertices are identified by arbitrary user-supplied labels (strings, integers, ...)
- **w**eighted : Every edge carries a strictly positive integer weight
- **directed** : The edge `(u, v)` is distinct from `(v, u)`; self-loops are allowed
- **mutable** : Vertices and edges can be added, re-weighted and removed at any time

# Representation

We represent **labels** by any type implementing [`VertexLabel`] and **weights** as [`Weight`].
For **edges**, we use the immutable value type [`Edge`]; a weight of `0` means "no edge" and is never stored.

### Available Representations

See the [`repr`] module for the graph storage backends:

- [`EdgeListGraph`](crate::repr::EdgeListGraph): a label set plus a flat list of edges
- [`VertexListGraph`](crate::repr::VertexListGraph): vertex records, each owning its outgoing edges

Both satisfy exactly the same contract and are observably indistinguishable; they only differ in
their cost profile. [`Representation`](crate::repr::Representation) selects one at runtime.

# Design

All operations are provided through the traits in [`ops`]. Client code should only depend on those
traits (or on `dyn Graph`), never on a concrete representation.

Edges are created, re-weighted and deleted through a single primitive,
[`set_edge`](crate::ops::GraphEdgeEditing::set_edge):
```
use wgraphs::prelude::*;

let mut graph = EdgeListGraph::new();
assert_eq!(graph.set_edge("A", "B", 10), Ok(0));
assert_eq!(graph.set_edge("A", "C", 20), Ok(0));
assert_eq!(graph.set_edge("B", "C", 30), Ok(0));
assert_eq!(graph.set_edge("A", "B", 5), Ok(10));

assert!(graph.remove_vertex(&"B"));
assert_eq!(graph.set_edge("A", "C", 0), Ok(20));

assert_eq!(graph.number_of_vertices(), 2);
assert!(graph.targets(&"A").is_empty());
assert!(graph.sources(&"C").is_empty());
```

Queries return owned snapshots, so no caller can observe or induce changes of the internal state.
Invariants are re-validated after every mutation in debug builds (see [`invariants`]).

# Usage

In most use-cases, `use wgraphs::prelude::*;` suffices for your needs.
*/

pub mod edge;
pub mod error;
pub mod invariants;
pub mod label;
pub mod ops;
pub mod repr;
pub(crate) mod testing;

pub use edge::Edge;
pub use error::{GraphError, InvariantViolation, Result};
pub use label::*;

/// `wgraphs::prelude` includes definitions for labels and edges, all graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{
        edge::*,
        error::{GraphError, InvariantViolation},
        invariants::CheckInvariants,
        label::*,
        ops::*,
        repr::*,
    };
}
