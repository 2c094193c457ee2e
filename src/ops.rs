/*!
# Graph Operations

The graph contract is split into small capability traits, mirroring how the operations are
used:

- [`GraphVertexOrder`], [`GraphEdgeOrder`] and [`WeightedAdjacency`] are read-only queries,
- [`GraphVertexEditing`] and [`GraphEdgeEditing`] mutate the graph,
- [`GraphNew`] and [`GraphFromScratch`] construct graphs.

[`Graph`] bundles all object-safe capabilities so client code can be written once and run
against any representation, including a `Box<dyn Graph<Label = L>>`.

Every query hands out an owned snapshot. Mutating a returned set or map never changes the
graph, and later mutations of the graph never change a snapshot already handed out.
*/

use std::fmt::Display;

use fxhash::{FxHashMap, FxHashSet};

use crate::{
    Edge, GraphError, NO_EDGE, NumEdges, NumVertices, Result, VertexLabel, Weight,
    invariants::CheckInvariants,
};

/// Binds a graph to the type of its vertex labels
pub trait GraphType {
    type Label: VertexLabel;
}

/// Provides getters pertaining to the vertex set of a graph
pub trait GraphVertexOrder: GraphType {
    /// Returns the number of vertices of the graph
    fn number_of_vertices(&self) -> NumVertices;

    /// Returns *true* if a vertex with the given label exists
    fn has_vertex(&self, label: &Self::Label) -> bool;

    /// Returns a snapshot of all vertex labels
    fn vertices(&self) -> FxHashSet<Self::Label>;

    /// Returns *true* if the graph has no vertices (and thus no edges)
    fn is_empty(&self) -> bool {
        self.number_of_vertices() == 0
    }
}

/// Provides getters pertaining to the edge set of a graph
pub trait GraphEdgeOrder: GraphType {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns a snapshot of all edges in unspecified order
    fn edges(&self) -> Vec<Edge<Self::Label>>;

    /// Returns *true* if the graph has no edges
    fn has_no_edges(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Queries on the weighted neighborhoods of vertices.
///
/// Unknown vertices are treated like vertices without any matching edge: both yield empty
/// maps, zero weights and zero degrees.
pub trait WeightedAdjacency: GraphVertexOrder {
    /// Returns a map from every vertex with an edge into `target` to that edge's weight
    fn sources(&self, target: &Self::Label) -> FxHashMap<Self::Label, Weight>;

    /// Returns a map from every vertex `source` has an edge to, to that edge's weight
    fn targets(&self, source: &Self::Label) -> FxHashMap<Self::Label, Weight>;

    /// Returns the weight of the edge `(source, target)` or [`NO_EDGE`] if it does not exist
    fn weight_of(&self, source: &Self::Label, target: &Self::Label) -> Weight {
        self.targets(source).get(target).copied().unwrap_or(NO_EDGE)
    }

    /// Returns *true* if the edge `(source, target)` exists
    fn has_edge(&self, source: &Self::Label, target: &Self::Label) -> bool {
        self.weight_of(source, target) > 0
    }

    /// Returns the number of outgoing edges of a vertex
    fn out_degree_of(&self, label: &Self::Label) -> NumVertices {
        self.targets(label).len()
    }

    /// Returns the number of incoming edges of a vertex
    fn in_degree_of(&self, label: &Self::Label) -> NumVertices {
        self.sources(label).len()
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates a graph without vertices
    fn new() -> Self;
}

/// Provides functions to insert/delete vertices
pub trait GraphVertexEditing: GraphType {
    /// Adds an isolated vertex.
    /// Returns *true* exactly if the vertex was not present previously.
    fn add_vertex(&mut self, label: Self::Label) -> bool;

    /// Removes a vertex together with all edges it is an endpoint of.
    /// Returns *true* exactly if the vertex was present.
    fn remove_vertex(&mut self, label: &Self::Label) -> bool;

    /// Adds all vertices in the collection and returns how many of them were new
    fn add_vertices(&mut self, labels: impl IntoIterator<Item = Self::Label>) -> NumVertices
    where
        Self: Sized,
    {
        labels
            .into_iter()
            .map(|label| self.add_vertex(label))
            .filter(|&added| added)
            .count()
    }

    /// Removes all vertices in the collection and returns how many of them existed
    fn remove_vertices<'a>(
        &mut self,
        labels: impl IntoIterator<Item = &'a Self::Label>,
    ) -> NumVertices
    where
        Self: Sized,
        Self::Label: 'a,
    {
        labels
            .into_iter()
            .map(|label| self.remove_vertex(label))
            .filter(|&removed| removed)
            .count()
    }
}

/// Provides the single primitive that creates, updates and deletes edges
pub trait GraphEdgeEditing: GraphVertexEditing {
    /// Sets the weight of the edge `(source, target)` and returns its previous weight,
    /// or [`NO_EDGE`] if it did not exist.
    ///
    /// - `weight > 0` creates missing endpoints and inserts or overwrites the edge,
    /// - `weight == 0` removes the edge if present and never creates vertices,
    /// - `weight < 0` is rejected with [`GraphError::NegativeWeight`](crate::GraphError)
    ///   and leaves the graph unchanged.
    fn set_edge(
        &mut self,
        source: Self::Label,
        target: Self::Label,
        weight: Weight,
    ) -> Result<Weight>;

    /// Removes the edge `(source, target)` if present and returns its previous weight
    fn remove_edge(&mut self, source: Self::Label, target: Self::Label) -> Weight {
        // a weight of zero is never rejected
        self.set_edge(source, target, NO_EDGE).unwrap_or(NO_EDGE)
    }

    /// Applies [`GraphEdgeEditing::set_edge`] to all triples in order.
    /// If any triple carries a negative weight, the first one is reported and the graph is
    /// left unchanged.
    fn set_edges(
        &mut self,
        edges: impl IntoIterator<Item = (Self::Label, Self::Label, Weight)>,
    ) -> Result<()>
    where
        Self: Sized,
    {
        let edges: Vec<_> = edges.into_iter().collect();
        if let Some(&(_, _, weight)) = edges.iter().find(|(_, _, weight)| *weight < 0) {
            return Err(GraphError::NegativeWeight(weight));
        }

        for (source, target, weight) in edges {
            self.set_edge(source, target, weight)?;
        }
        Ok(())
    }
}

/// A super trait for creating a graph from scratch from a set of weighted edges
pub trait GraphFromScratch: GraphType + Sized {
    /// Creates a graph containing exactly the given edges and their endpoints.
    /// All triples are validated before the graph is built; weights must be positive.
    fn from_edges(
        edges: impl IntoIterator<Item = (Self::Label, Self::Label, Weight)>,
    ) -> Result<Self>;
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges(
        edges: impl IntoIterator<Item = (Self::Label, Self::Label, Weight)>,
    ) -> Result<Self> {
        let edges = edges
            .into_iter()
            .map(Edge::try_from)
            .collect::<Result<Vec<_>>>()?;

        let mut graph = Self::new();
        for edge in edges {
            let (source, target, weight) = edge.into_parts();
            graph.set_edge(source, target, weight)?;
        }
        Ok(graph)
    }
}

/// The complete graph contract.
///
/// Implemented for every type providing all object-safe capabilities plus a diagnostic
/// [`Display`] rendering that mentions all vertices and edges.
pub trait Graph:
    GraphVertexOrder
    + GraphEdgeOrder
    + WeightedAdjacency
    + GraphVertexEditing
    + GraphEdgeEditing
    + CheckInvariants
    + Display
{
}

impl<G> Graph for G where
    G: GraphVertexOrder
        + GraphEdgeOrder
        + WeightedAdjacency
        + GraphVertexEditing
        + GraphEdgeEditing
        + CheckInvariants
        + Display
{
}
