use proptest::prelude::*;
use wgraphs::{prelude::*, repr::digest::GraphDigest};

#[derive(Debug, Clone)]
enum Operation {
    AddVertex(u8),
    RemoveVertex(u8),
    SetEdge(u8, u8, Weight),
}

const LABELS: std::ops::Range<u8> = 0..6;

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        1 => LABELS.prop_map(Operation::AddVertex),
        1 => LABELS.prop_map(Operation::RemoveVertex),
        4 => (LABELS, LABELS, -2..20).prop_map(|(s, t, w)| Operation::SetEdge(s, t, w)),
    ]
}

fn assert_same_state(edge_list: &EdgeListGraph<u8>, vertex_list: &VertexListGraph<u8>) {
    assert_eq!(edge_list.vertices(), vertex_list.vertices());
    assert_eq!(edge_list.number_of_edges(), vertex_list.number_of_edges());

    for label in LABELS {
        assert_eq!(
            edge_list.sources(&label),
            vertex_list.sources(&label),
            "sources mismatch for {label}"
        );
        assert_eq!(
            edge_list.targets(&label),
            vertex_list.targets(&label),
            "targets mismatch for {label}"
        );
    }

    assert_eq!(edge_list.check_invariants(), Ok(()));
    assert_eq!(vertex_list.check_invariants(), Ok(()));
}

proptest! {
    #[test]
    fn representations_are_indistinguishable(ops in proptest::collection::vec(operation(), 1..150)) {
        let mut edge_list = EdgeListGraph::new();
        let mut vertex_list = VertexListGraph::new();

        for op in ops {
            match op {
                Operation::AddVertex(u) => {
                    assert_eq!(edge_list.add_vertex(u), vertex_list.add_vertex(u), "add_vertex({u})");
                }
                Operation::RemoveVertex(u) => {
                    assert_eq!(edge_list.remove_vertex(&u), vertex_list.remove_vertex(&u), "remove_vertex({u})");
                }
                Operation::SetEdge(s, t, w) => {
                    assert_eq!(edge_list.set_edge(s, t, w), vertex_list.set_edge(s, t, w), "set_edge({s}, {t}, {w})");
                }
            }

            assert_same_state(&edge_list, &vertex_list);
        }

        assert_eq!(edge_list.digest_sha256(), vertex_list.digest_sha256());
    }

    #[test]
    fn boxed_representations_are_indistinguishable(edges in proptest::collection::vec((LABELS, LABELS, 0..10), 0..40)) {
        let mut graphs = Representation::ALL.map(|repr| repr.empty::<u8>());

        for &(s, t, w) in &edges {
            let [first, second] = &mut graphs;
            assert_eq!(first.set_edge(s, t, w), second.set_edge(s, t, w));
        }

        let [first, second] = &graphs;
        assert_eq!(first.vertices(), second.vertices());
        assert_eq!(first.digest_sha256(), second.digest_sha256());
        prop_assert!(first.satisfies_invariants() && second.satisfies_invariants());
    }
}
