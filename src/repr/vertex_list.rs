use itertools::Itertools;
use tracing::{debug, trace, warn};

use crate::testing::test_graph_ops;

use super::*;

/// A mutable vertex record owning its **outgoing edges**.
///
/// The record maps every target label to the (positive) weight of the edge pointing there.
/// It never creates other vertices: keeping targets inside the vertex set is the job of the
/// graph holding the record. The outgoing map is only ever handed out as a copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vertex<L>
where
    L: VertexLabel,
{
    label: L,
    outgoing: FxHashMap<L, Weight>,
}

impl<L: VertexLabel> Vertex<L> {
    /// Creates a vertex without outgoing edges
    pub fn new(label: L) -> Self {
        Self {
            label,
            outgoing: FxHashMap::default(),
        }
    }

    /// Returns the label of the vertex
    pub fn label(&self) -> &L {
        &self.label
    }

    /// Adds, re-weights or removes the outgoing edge to `target` and returns its previous
    /// weight, or [`NO_EDGE`] if there was none.
    ///
    /// `weight == 0` removes the edge, `weight > 0` inserts or overwrites it and negative
    /// weights are rejected without changing the vertex.
    pub fn set_edge_to(&mut self, target: L, weight: Weight) -> Result<Weight> {
        if weight < 0 {
            return Err(GraphError::NegativeWeight(weight));
        }

        let previous = if weight > 0 {
            self.outgoing.insert(target, weight)
        } else {
            self.outgoing.remove(&target)
        };

        Ok(previous.unwrap_or(NO_EDGE))
    }

    /// Removes the outgoing edge to `target` if it exists and returns its previous weight
    pub fn remove_edge_to(&mut self, target: &L) -> Weight {
        self.outgoing.remove(target).unwrap_or(NO_EDGE)
    }

    /// Returns the weight of the outgoing edge to `target`, or [`NO_EDGE`] if there is none
    pub fn weight_to(&self, target: &L) -> Weight {
        self.outgoing.get(target).copied().unwrap_or(NO_EDGE)
    }

    /// Returns a copy of all outgoing edges as a map from target to weight
    pub fn outgoing_edges(&self) -> FxHashMap<L, Weight> {
        self.outgoing.clone()
    }

    /// Returns the number of outgoing edges
    pub fn out_degree(&self) -> NumVertices {
        self.outgoing.len()
    }

    /// Returns all outgoing edges as [`Edge`]s
    pub fn out_edges(&self) -> Vec<Edge<L>> {
        self.outgoing
            .iter()
            .map(|(target, &weight)| {
                Edge::new_unchecked(self.label.clone(), target.clone(), weight)
            })
            .collect()
    }

    /// Returns an iterator over the labels this vertex has an edge to
    pub(crate) fn target_labels(&self) -> impl Iterator<Item = &L> + '_ {
        self.outgoing.keys()
    }
}

impl<L: VertexLabel> CheckInvariants for Vertex<L> {
    fn check_invariants(&self) -> std::result::Result<(), InvariantViolation> {
        match self.outgoing.iter().find(|&(_, &weight)| weight <= 0) {
            Some((target, &weight)) => Err(InvariantViolation::NonPositiveWeight {
                from: describe(&self.label),
                to: describe(target),
                weight,
            }),
            None => Ok(()),
        }
    }
}

impl<L: VertexLabel> Display for Vertex<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)?;
        if !self.outgoing.is_empty() {
            write!(
                f,
                " -> {{{}}}",
                self.outgoing
                    .iter()
                    .map(|(target, weight)| format!("{target}({weight})"))
                    .join(", ")
            )?;
        }
        Ok(())
    }
}

/// A directed graph storing one [`Vertex`] record per label.
///
/// - Outgoing edges live inside the record of their source.
/// - Incoming edges are derived on demand by asking every record (costly).
/// - Removing a vertex asks every surviving record to drop its edge to the removed label.
///
/// # Type parameters
/// - `L`: [`VertexLabel`] used to identify vertices.
#[derive(Clone)]
pub struct VertexListGraph<L>
where
    L: VertexLabel,
{
    vertices: FxHashMap<L, Vertex<L>>,
}

impl<L: VertexLabel> GraphType for VertexListGraph<L> {
    type Label = L;
}

impl<L: VertexLabel> GraphNew for VertexListGraph<L> {
    fn new() -> Self {
        Self {
            vertices: FxHashMap::default(),
        }
    }
}

impl<L: VertexLabel> Default for VertexListGraph<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: VertexLabel> GraphVertexOrder for VertexListGraph<L> {
    fn number_of_vertices(&self) -> NumVertices {
        self.vertices.len()
    }

    fn has_vertex(&self, label: &L) -> bool {
        self.vertices.contains_key(label)
    }

    fn vertices(&self) -> FxHashSet<L> {
        self.vertices.keys().cloned().collect()
    }
}

impl<L: VertexLabel> GraphEdgeOrder for VertexListGraph<L> {
    fn number_of_edges(&self) -> NumEdges {
        self.vertices.values().map(Vertex::out_degree).sum()
    }

    fn edges(&self) -> Vec<Edge<L>> {
        self.vertices.values().flat_map(Vertex::out_edges).collect()
    }
}

impl<L: VertexLabel> WeightedAdjacency for VertexListGraph<L> {
    fn sources(&self, target: &L) -> FxHashMap<L, Weight> {
        // no reverse index: ask every record for its weight to `target`
        self.vertices
            .values()
            .filter_map(|vertex| {
                let weight = vertex.weight_to(target);
                (weight > 0).then(|| (vertex.label().clone(), weight))
            })
            .collect()
    }

    fn targets(&self, source: &L) -> FxHashMap<L, Weight> {
        self.vertices
            .get(source)
            .map(Vertex::outgoing_edges)
            .unwrap_or_default()
    }

    fn weight_of(&self, source: &L, target: &L) -> Weight {
        self.vertices
            .get(source)
            .map_or(NO_EDGE, |vertex| vertex.weight_to(target))
    }

    fn out_degree_of(&self, label: &L) -> NumVertices {
        self.vertices.get(label).map_or(0, Vertex::out_degree)
    }
}

impl<L: VertexLabel> GraphVertexEditing for VertexListGraph<L> {
    fn add_vertex(&mut self, label: L) -> bool {
        if self.vertices.contains_key(&label) {
            return false;
        }

        trace!(%label, "add vertex");
        self.vertices.insert(label.clone(), Vertex::new(label));
        debug_check_invariants!(self);
        true
    }

    fn remove_vertex(&mut self, label: &L) -> bool {
        let Some(removed) = self.vertices.remove(label) else {
            return false;
        };

        let mut removed_edges = removed.out_degree();
        for vertex in self.vertices.values_mut() {
            if vertex.remove_edge_to(label) != NO_EDGE {
                removed_edges += 1;
            }
        }

        debug!(%label, removed_edges, "remove vertex");
        debug_check_invariants!(self);
        true
    }
}

impl<L: VertexLabel> GraphEdgeEditing for VertexListGraph<L> {
    fn set_edge(&mut self, source: L, target: L, weight: Weight) -> Result<Weight> {
        if weight < 0 {
            warn!(%source, %target, weight, "rejected negative edge weight");
            return Err(GraphError::NegativeWeight(weight));
        }

        let previous = if weight == 0 {
            // removal never creates vertices
            self.vertices
                .get_mut(&source)
                .map_or(NO_EDGE, |vertex| vertex.remove_edge_to(&target))
        } else {
            if !self.vertices.contains_key(&target) {
                self.vertices
                    .insert(target.clone(), Vertex::new(target.clone()));
            }

            self.vertices
                .entry(source.clone())
                .or_insert_with(|| Vertex::new(source.clone()))
                .set_edge_to(target.clone(), weight)?
        };

        trace!(%source, %target, weight, previous, "set edge");
        debug_check_invariants!(self);
        Ok(previous)
    }
}

impl<L: VertexLabel> CheckInvariants for VertexListGraph<L> {
    fn check_invariants(&self) -> std::result::Result<(), InvariantViolation> {
        // keys are unique by construction of the map; each record must match its key
        for (key, vertex) in &self.vertices {
            if key != vertex.label() {
                return Err(InvariantViolation::MislabeledVertex {
                    key: describe(key),
                    label: describe(vertex.label()),
                });
            }

            vertex.check_invariants()?;

            if let Some(target) = vertex
                .target_labels()
                .find(|target| !self.vertices.contains_key(*target))
            {
                return Err(InvariantViolation::DanglingEdge {
                    from: describe(key),
                    to: describe(target),
                });
            }
        }

        Ok(())
    }
}

impl<L: VertexLabel> Display for VertexListGraph<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Graph:")?;
        if self.vertices.is_empty() {
            writeln!(f, "  (empty)")?;
        }
        for vertex in self.vertices.values() {
            writeln!(f, "  {vertex}")?;
        }
        Ok(())
    }
}

// ---------- Testing ----------

test_graph_ops!(
    test_vertex_list_graph,
    VertexListGraph,
    (
        GraphNew,
        GraphVertexEditing,
        GraphEdgeEditing,
        WeightedAdjacency,
        SnapshotIsolation,
        MutationStory,
        RandomModel
    )
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_label() {
        let vertex = Vertex::new("A");
        assert_eq!(*vertex.label(), "A");
        assert_eq!(vertex.out_degree(), 0);
        assert!(vertex.satisfies_invariants());
    }

    #[test]
    fn vertex_set_edge_add_and_update() {
        let mut vertex = Vertex::new("A");

        assert_eq!(vertex.set_edge_to("B", 10), Ok(0));
        assert_eq!(vertex.weight_to(&"B"), 10);

        assert_eq!(vertex.set_edge_to("B", 20), Ok(10));
        assert_eq!(vertex.weight_to(&"B"), 20);
        assert_eq!(vertex.out_degree(), 1);
    }

    #[test]
    fn vertex_set_edge_remove() {
        let mut vertex = Vertex::new("A");
        vertex.set_edge_to("B", 10).unwrap();

        assert_eq!(vertex.set_edge_to("B", 0), Ok(10));
        assert_eq!(vertex.weight_to(&"B"), 0);

        assert_eq!(vertex.set_edge_to("C", 0), Ok(0));
        assert_eq!(vertex.out_degree(), 0);
    }

    #[test]
    fn vertex_rejects_negative_weight() {
        let mut vertex = Vertex::new("A");
        vertex.set_edge_to("B", 10).unwrap();

        assert_eq!(
            vertex.set_edge_to("B", -1),
            Err(GraphError::NegativeWeight(-1))
        );
        assert_eq!(vertex.weight_to(&"B"), 10);
    }

    #[test]
    fn vertex_remove_edge_to() {
        let mut vertex = Vertex::new("A");
        vertex.set_edge_to("B", 10).unwrap();

        assert_eq!(vertex.remove_edge_to(&"B"), 10);
        assert_eq!(vertex.weight_to(&"B"), 0);

        assert_eq!(vertex.remove_edge_to(&"C"), 0);
        assert_eq!(vertex.weight_to(&"C"), 0);
    }

    #[test]
    fn vertex_outgoing_edges_are_copies() {
        let mut vertex = Vertex::new("A");
        vertex.set_edge_to("B", 10).unwrap();
        vertex.set_edge_to("C", 20).unwrap();

        let mut targets = vertex.outgoing_edges();
        assert_eq!(targets.len(), 2);
        assert_eq!(targets[&"B"], 10);
        assert_eq!(targets[&"C"], 20);

        targets.insert("D", 50);
        targets.remove(&"B");
        assert_eq!(vertex.weight_to(&"D"), 0);
        assert_eq!(vertex.weight_to(&"B"), 10);

        let mut out_edges = vertex.out_edges();
        out_edges.sort_by_key(Edge::weight);
        assert_eq!(
            out_edges,
            vec![
                Edge::new("A", "B", 10).unwrap(),
                Edge::new("A", "C", 20).unwrap()
            ]
        );
    }

    #[test]
    fn vertex_display() {
        let mut vertex = Vertex::new("A");
        assert_eq!(vertex.to_string(), "A");

        vertex.set_edge_to("B", 10).unwrap();
        assert_eq!(vertex.to_string(), "A -> {B(10)}");

        vertex.set_edge_to("C", 20).unwrap();
        let dump = vertex.to_string();
        assert!(dump.starts_with("A -> {"));
        assert!(dump.contains("B(10)"));
        assert!(dump.contains("C(20)"));
    }

    #[test]
    fn display_empty_graph() {
        let dump = VertexListGraph::<String>::new().to_string();
        assert!(dump.contains("Graph:"));
        assert!(dump.contains("(empty)"));
    }

    #[test]
    fn display_vertices_without_edges() {
        let mut graph = VertexListGraph::new();
        graph.add_vertex("A");
        graph.add_vertex("B");
        let dump = graph.to_string();

        assert!(dump.contains("\n  A\n"));
        assert!(dump.contains("\n  B\n"));
        assert!(!dump.contains("->"));
        assert!(!dump.contains("(empty)"));
    }

    #[test]
    fn display_with_edges() {
        let mut graph = VertexListGraph::new();
        graph.set_edge("A", "B", 10).unwrap();
        assert!(graph.to_string().contains("A -> {B(10)}"));
    }

    #[test]
    fn detects_broken_invariants() {
        let mut graph = VertexListGraph::new();
        graph.set_edge(1u32, 2, 5).unwrap();
        assert_eq!(graph.check_invariants(), Ok(()));

        let mut dangling = graph.clone();
        dangling.vertices.remove(&2);
        assert_eq!(
            dangling.check_invariants(),
            Err(InvariantViolation::DanglingEdge {
                from: "1".into(),
                to: "2".into()
            })
        );

        let mut mislabeled = graph.clone();
        mislabeled.vertices.insert(3, Vertex::new(4));
        assert_eq!(
            mislabeled.check_invariants(),
            Err(InvariantViolation::MislabeledVertex {
                key: "3".into(),
                label: "4".into()
            })
        );

        let mut non_positive = graph;
        if let Some(vertex) = non_positive.vertices.get_mut(&1) {
            vertex.outgoing.insert(2, 0);
        }
        assert_eq!(
            non_positive.check_invariants(),
            Err(InvariantViolation::NonPositiveWeight {
                from: "1".into(),
                to: "2".into(),
                weight: 0
            })
        );
    }

    #[test]
    fn out_edges_report_stored_weights() {
        let mut vertex = Vertex::new("A");
        vertex.set_edge_to("B", 10).unwrap();
        vertex.outgoing.insert("C", 0);

        let mut out_edges = vertex.out_edges();
        out_edges.sort_by_key(Edge::weight);
        assert_eq!(out_edges.len(), 2);
        assert_eq!(out_edges[0].weight(), 0);
        assert_eq!(*out_edges[0].target(), "C");
        assert!(!vertex.satisfies_invariants());
    }

    #[test]
    #[cfg(any(debug_assertions, feature = "check-invariants"))]
    #[should_panic(expected = "graph invariant violated")]
    fn mutation_revalidates_invariants() {
        let mut graph = VertexListGraph::new();
        graph.set_edge(1u32, 2, 5).unwrap();

        graph.vertices.remove(&2);
        graph.add_vertex(3);
    }
}
