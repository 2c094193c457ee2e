/*!
# Graph Hash Digests

This module provides the [`GraphDigest`] trait, which computes **hash-based digests** of graphs
that are independent of the underlying representation.

The digest encodes:
- the number of vertices followed by the sorted, length-prefixed labels, and
- the number of edges followed by the sorted `(source, target, weight)` triples,

before feeding them into a cryptographic hash function. Labels are encoded by their
[`Debug`](std::fmt::Debug) rendering, so two labels are only told apart if their `Debug` output differs.

## Example
```
use wgraphs::{prelude::*, repr::digest::GraphDigest};

let mut edge_list = EdgeListGraph::new();
edge_list.set_edge("A", "B", 3).unwrap();
edge_list.add_vertex("C");

let mut vertex_list = VertexListGraph::new();
vertex_list.add_vertex("C");
vertex_list.set_edge("A", "B", 3).unwrap();

assert_eq!(edge_list.digest_sha256(), vertex_list.digest_sha256());
```
*/

use std::fmt::LowerHex;

use super::*;
use ::digest::{Digest, Output};
use itertools::Itertools;

/// Trait for computing a **canonical hash digest** of a graph.
///
/// Two graphs with equal vertex sets and equal weighted edge sets yield the same digest,
/// regardless of their representation or the order in which they were built.
/// Distinct labels with identical `Debug` renderings are indistinguishable to the digest.
pub trait GraphDigest {
    /// Computes a digest of the graph using the provided hash function `D`.
    ///
    /// The result is returned as a **hexadecimal string**.
    fn digest<D>(&self) -> String
    where
        Output<D>: LowerHex,
        D: Digest;

    /// Computes a **SHA-256 digest** of the graph.
    ///
    /// The returned string is exactly 64 characters long.
    fn digest_sha256(&self) -> String {
        self.digest::<sha2::Sha256>()
    }
}

impl<G> GraphDigest for G
where
    G: GraphVertexOrder + GraphEdgeOrder + ?Sized,
{
    fn digest<D>(&self) -> String
    where
        Output<D>: LowerHex,
        D: Digest,
    {
        let mut hasher = D::new();

        let encode = |hasher: &mut D, text: &str| {
            hasher.update((text.len() as u64).to_le_bytes());
            hasher.update(text.as_bytes());
        };

        let mut vertices = self.vertices().iter().map(describe).collect_vec();
        vertices.sort_unstable();

        hasher.update((vertices.len() as u64).to_le_bytes());
        for label in &vertices {
            encode(&mut hasher, label);
        }

        let mut edges = self
            .edges()
            .iter()
            .map(|edge| {
                (
                    describe(edge.source()),
                    describe(edge.target()),
                    edge.weight(),
                )
            })
            .collect_vec();
        edges.sort_unstable();

        hasher.update((edges.len() as u64).to_le_bytes());
        for (source, target, weight) in &edges {
            encode(&mut hasher, source);
            encode(&mut hasher, target);
            hasher.update(weight.to_le_bytes());
        }

        format!("{:x}", hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_ignores_construction_order() {
        let mut first = EdgeListGraph::new();
        first.set_edge(1u32, 2, 5).unwrap();
        first.set_edge(2, 3, 7).unwrap();
        first.add_vertex(9);

        let mut second = EdgeListGraph::new();
        second.add_vertex(9);
        second.set_edge(2u32, 3, 1).unwrap();
        second.set_edge(1, 2, 5).unwrap();
        second.set_edge(2, 3, 7).unwrap();

        assert_eq!(first.digest_sha256(), second.digest_sha256());
        assert_eq!(first.digest_sha256().len(), 64);
    }

    #[test]
    fn digest_depends_on_weights_and_direction() {
        let mut graph = VertexListGraph::new();
        graph.set_edge(1u32, 2, 5).unwrap();
        let original = graph.digest_sha256();

        graph.set_edge(1, 2, 6).unwrap();
        let reweighted = graph.digest_sha256();

        let mut reversed = VertexListGraph::new();
        reversed.set_edge(2u32, 1, 5).unwrap();

        assert_ne!(original, reweighted);
        assert_ne!(original, reversed.digest_sha256());
    }

    #[test]
    fn digest_sees_isolated_vertices() {
        let mut graph = EdgeListGraph::new();
        graph.set_edge("A", "B", 1).unwrap();
        let before = graph.digest_sha256();

        graph.remove_edge("A", "B");
        assert_ne!(before, graph.digest_sha256());

        let boxed = Representation::VertexList.empty::<&str>();
        assert_ne!(boxed.digest_sha256(), graph.digest_sha256());
    }

    #[test]
    fn digest_separates_labels_with_equal_display() {
        #[derive(Clone, PartialEq, Eq, Hash, Debug)]
        struct Tagged(u8, &'static str);

        impl Display for Tagged {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.1)
            }
        }

        let mut first = EdgeListGraph::new();
        first.set_edge(Tagged(1, "x"), Tagged(2, "y"), 1).unwrap();

        let mut second = EdgeListGraph::new();
        second.set_edge(Tagged(3, "x"), Tagged(2, "y"), 1).unwrap();

        assert_eq!(first.edges()[0].to_string(), second.edges()[0].to_string());
        assert_ne!(first.digest_sha256(), second.digest_sha256());
    }

    #[test]
    fn representations_agree() {
        let edges = [(1u32, 2, 4), (2, 2, 1), (3, 1, 8)];
        let edge_list = EdgeListGraph::from_edges(edges).unwrap();
        let vertex_list = VertexListGraph::from_edges(edges).unwrap();

        assert_eq!(edge_list.digest_sha256(), vertex_list.digest_sha256());
        assert_eq!(
            edge_list.digest::<sha2::Sha512>(),
            vertex_list.digest::<sha2::Sha512>()
        );
    }
}
