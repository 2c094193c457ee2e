use std::fmt::{Debug, Display};

use crate::{GraphError, Result, VertexLabel, Weight};

/// An edge is defined by its source, its target and a strictly positive weight.
///
/// Edges are immutable: changing the weight of a connection replaces the edge.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Edge<L> {
    source: L,
    target: L,
    weight: Weight,
}

impl<L: VertexLabel> Edge<L> {
    /// Creates a new edge from `source` to `target`.
    /// Returns [`GraphError::NonPositiveWeight`] if `weight <= 0`.
    pub fn new(source: L, target: L, weight: Weight) -> Result<Self> {
        if weight <= 0 {
            return Err(GraphError::NonPositiveWeight(weight));
        }

        Ok(Self {
            source,
            target,
            weight,
        })
    }

    /// Creates an edge from parts already stored in a graph, without re-validating the weight
    pub(crate) fn new_unchecked(source: L, target: L, weight: Weight) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the label of the vertex this edge starts at
    pub fn source(&self) -> &L {
        &self.source
    }

    /// Returns the label of the vertex this edge points to
    pub fn target(&self) -> &L {
        &self.target
    }

    /// Returns the (always positive) weight of the edge
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.source == self.target
    }

    /// Returns true if the edge connects `source` to `target`
    pub fn connects(&self, source: &L, target: &L) -> bool {
        &self.source == source && &self.target == target
    }

    /// Returns true if `label` is either endpoint of the edge
    pub fn touches(&self, label: &L) -> bool {
        &self.source == label || &self.target == label
    }

    /// Splits the edge into its parts
    pub fn into_parts(self) -> (L, L, Weight) {
        (self.source, self.target, self.weight)
    }
}

impl<L: Display> Display for Edge<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} ({})", self.source, self.target, self.weight)
    }
}

impl<L: Debug> Debug for Edge<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} -> {:?} ({})", self.source, self.target, self.weight)
    }
}

impl<L: VertexLabel> TryFrom<(L, L, Weight)> for Edge<L> {
    type Error = GraphError;

    fn try_from(value: (L, L, Weight)) -> Result<Self> {
        Edge::new(value.0, value.1, value.2)
    }
}

impl<L: VertexLabel> TryFrom<&(L, L, Weight)> for Edge<L> {
    type Error = GraphError;

    fn try_from(value: &(L, L, Weight)) -> Result<Self> {
        Edge::new(value.0.clone(), value.1.clone(), value.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructor_and_observers() {
        let edge = Edge::new("A", "B", 5).unwrap();
        assert_eq!(*edge.source(), "A");
        assert_eq!(*edge.target(), "B");
        assert_eq!(edge.weight(), 5);
        assert!(!edge.is_loop());
        assert!(edge.connects(&"A", &"B"));
        assert!(!edge.connects(&"B", &"A"));
        assert!(edge.touches(&"A") && edge.touches(&"B"));
        assert!(!edge.touches(&"C"));

        assert!(Edge::new("A", "A", 1).unwrap().is_loop());
    }

    #[test]
    fn rejects_non_positive_weight() {
        assert_eq!(
            Edge::new("A", "B", 0),
            Err(GraphError::NonPositiveWeight(0))
        );
        assert_eq!(
            Edge::new("A", "B", -1),
            Err(GraphError::NonPositiveWeight(-1))
        );
        assert!(Edge::try_from(("A", "B", -3)).is_err());
    }

    #[test]
    fn display() {
        let edge = Edge::new("Src", "Tgt", 10).unwrap();
        assert_eq!(edge.to_string(), "Src -> Tgt (10)");
        assert_eq!(format!("{edge:?}"), "\"Src\" -> \"Tgt\" (10)");

        let ambiguous = Edge::new("A -> B", "C", 1).unwrap();
        assert_eq!(ambiguous.to_string(), "A -> B -> C (1)");
        assert_eq!(format!("{ambiguous:?}"), "\"A -> B\" -> \"C\" (1)");
    }
}
