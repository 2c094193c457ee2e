use itertools::Itertools;
use tracing::{debug, trace, warn};

use crate::testing::test_graph_ops;

use super::*;

/// A directed graph storing a **set of labels** and a **flat list of edges**.
///
/// - Every `(source, target)` pair occurs at most once in `edges`.
/// - Edges are immutable; re-weighting replaces the stored edge.
/// - `sources`, `targets` and `set_edge` scan the whole edge list.
///
/// # Type parameters
/// - `L`: [`VertexLabel`] used to identify vertices.
#[derive(Clone)]
pub struct EdgeListGraph<L>
where
    L: VertexLabel,
{
    vertices: FxHashSet<L>,
    edges: Vec<Edge<L>>,
}

impl<L: VertexLabel> GraphType for EdgeListGraph<L> {
    type Label = L;
}

impl<L: VertexLabel> GraphNew for EdgeListGraph<L> {
    fn new() -> Self {
        Self {
            vertices: FxHashSet::default(),
            edges: Vec::new(),
        }
    }
}

impl<L: VertexLabel> Default for EdgeListGraph<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: VertexLabel> GraphVertexOrder for EdgeListGraph<L> {
    fn number_of_vertices(&self) -> NumVertices {
        self.vertices.len()
    }

    fn has_vertex(&self, label: &L) -> bool {
        self.vertices.contains(label)
    }

    fn vertices(&self) -> FxHashSet<L> {
        self.vertices.clone()
    }
}

impl<L: VertexLabel> GraphEdgeOrder for EdgeListGraph<L> {
    fn number_of_edges(&self) -> NumEdges {
        self.edges.len()
    }

    fn edges(&self) -> Vec<Edge<L>> {
        self.edges.clone()
    }
}

impl<L: VertexLabel> WeightedAdjacency for EdgeListGraph<L> {
    fn sources(&self, target: &L) -> FxHashMap<L, Weight> {
        self.edges
            .iter()
            .filter(|edge| edge.target() == target)
            .map(|edge| (edge.source().clone(), edge.weight()))
            .collect()
    }

    fn targets(&self, source: &L) -> FxHashMap<L, Weight> {
        self.edges
            .iter()
            .filter(|edge| edge.source() == source)
            .map(|edge| (edge.target().clone(), edge.weight()))
            .collect()
    }

    fn weight_of(&self, source: &L, target: &L) -> Weight {
        self.edges
            .iter()
            .find(|edge| edge.connects(source, target))
            .map_or(NO_EDGE, Edge::weight)
    }
}

impl<L: VertexLabel> GraphVertexEditing for EdgeListGraph<L> {
    fn add_vertex(&mut self, label: L) -> bool {
        if self.vertices.contains(&label) {
            return false;
        }

        trace!(%label, "add vertex");
        self.vertices.insert(label);
        debug_check_invariants!(self);
        true
    }

    fn remove_vertex(&mut self, label: &L) -> bool {
        if !self.vertices.contains(label) {
            return false;
        }

        // drop incident edges before the label so no edge ever dangles
        let num_edges = self.edges.len();
        self.edges.retain(|edge| !edge.touches(label));
        self.vertices.remove(label);

        debug!(
            %label,
            removed_edges = num_edges - self.edges.len(),
            "remove vertex"
        );
        debug_check_invariants!(self);
        true
    }
}

impl<L: VertexLabel> GraphEdgeEditing for EdgeListGraph<L> {
    fn set_edge(&mut self, source: L, target: L, weight: Weight) -> Result<Weight> {
        if weight < 0 {
            warn!(%source, %target, weight, "rejected negative edge weight");
            return Err(GraphError::NegativeWeight(weight));
        }

        // build the replacement first: a rejected edge must leave the graph untouched
        let replacement = (weight > 0)
            .then(|| Edge::new(source.clone(), target.clone(), weight))
            .transpose()?;

        let previous = match self
            .edges
            .iter()
            .position(|edge| edge.connects(&source, &target))
        {
            Some(idx) => self.edges.swap_remove(idx).weight(),
            None => NO_EDGE,
        };

        if let Some(edge) = replacement {
            self.vertices.insert(source.clone());
            self.vertices.insert(target.clone());
            self.edges.push(edge);
        }

        trace!(%source, %target, weight, previous, "set edge");
        debug_check_invariants!(self);
        Ok(previous)
    }
}

impl<L: VertexLabel> CheckInvariants for EdgeListGraph<L> {
    fn check_invariants(&self) -> std::result::Result<(), InvariantViolation> {
        // labels are unique by construction of the set, only edges need checking
        let mut pairs = FxHashSet::default();
        for edge in &self.edges {
            let endpoints = || (describe(edge.source()), describe(edge.target()));

            if edge.weight() <= 0 {
                let (from, to) = endpoints();
                return Err(InvariantViolation::NonPositiveWeight {
                    from,
                    to,
                    weight: edge.weight(),
                });
            }

            if !self.vertices.contains(edge.source()) || !self.vertices.contains(edge.target()) {
                let (from, to) = endpoints();
                return Err(InvariantViolation::DanglingEdge { from, to });
            }

            if !pairs.insert((edge.source(), edge.target())) {
                let (from, to) = endpoints();
                return Err(InvariantViolation::DuplicateEdge { from, to });
            }
        }

        Ok(())
    }
}

impl<L: VertexLabel> Display for EdgeListGraph<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Graph:")?;
        writeln!(f, "  Vertices: [{}]", self.vertices.iter().join(", "))?;
        writeln!(f, "  Edges:")?;
        if self.edges.is_empty() {
            writeln!(f, "    (none)")?;
        }
        for edge in &self.edges {
            writeln!(f, "    {edge}")?;
        }
        Ok(())
    }
}

// ---------- Testing ----------

test_graph_ops!(
    test_edge_list_graph,
    EdgeListGraph,
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
    fn display_empty_graph() {
        let graph = EdgeListGraph::<String>::new();
        let dump = graph.to_string();

        assert!(dump.contains("Vertices: []"));
        assert!(dump.contains("Edges:"));
        assert!(dump.contains("(none)"));
    }

    #[test]
    fn display_vertices_without_edges() {
        let mut graph = EdgeListGraph::new();
        graph.add_vertex("A");
        graph.add_vertex("B");
        let dump = graph.to_string();

        assert!(dump.contains("A, B") || dump.contains("B, A"));
        assert!(dump.contains("(none)"));
    }

    #[test]
    fn display_with_edges() {
        let mut graph = EdgeListGraph::new();
        graph.set_edge("A", "B", 10).unwrap();
        graph.set_edge("B", "C", 20).unwrap();
        let dump = graph.to_string();

        assert!(dump.contains("A -> B (10)"));
        assert!(dump.contains("B -> C (20)"));
        assert!(!dump.contains("(none)"));
    }

    #[test]
    fn replacing_an_edge_keeps_a_single_record() {
        let mut graph = EdgeListGraph::new();
        graph.set_edge(1u32, 2, 5).unwrap();
        graph.set_edge(1, 2, 10).unwrap();
        graph.set_edge(1, 2, 15).unwrap();

        assert_eq!(graph.edges(), vec![Edge::new(1, 2, 15).unwrap()]);
        assert!(graph.satisfies_invariants());
    }

    #[test]
    fn detects_broken_invariants() {
        let mut graph = EdgeListGraph::new();
        graph.set_edge(1u32, 2, 5).unwrap();

        let mut dangling = graph.clone();
        dangling.vertices.remove(&2);
        assert_eq!(
            dangling.check_invariants(),
            Err(InvariantViolation::DanglingEdge {
                from: "1".into(),
                to: "2".into()
            })
        );

        let mut duplicate = graph.clone();
        duplicate.edges.push(Edge::new(1, 2, 7).unwrap());
        assert_eq!(
            duplicate.check_invariants(),
            Err(InvariantViolation::DuplicateEdge {
                from: "1".into(),
                to: "2".into()
            })
        );

        assert_eq!(graph.check_invariants(), Ok(()));
    }

    #[test]
    #[cfg(any(debug_assertions, feature = "check-invariants"))]
    #[should_panic(expected = "graph invariant violated")]
    fn mutation_revalidates_invariants() {
        let mut graph = EdgeListGraph::new();
        graph.set_edge(1u32, 2, 5).unwrap();

        graph.vertices.remove(&2);
        graph.add_vertex(3);
    }
}
