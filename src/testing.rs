/// Every representation has to pass the same contract suite.
///
/// `test_graph_ops!(module, Graph, (Suite, ...))` instantiates the listed suites for the
/// representation `Graph<L>` inside a `#[cfg(test)]` module named `module`.
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, ($($suite:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use std::collections::{BTreeMap, BTreeSet};

            use crate::{prelude::*, testing::test_graph_ops};
            use fxhash::{FxHashMap, FxHashSet};
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            fn label(s: &str) -> String {
                s.to_string()
            }

            fn set_of(labels: &[&str]) -> FxHashSet<String> {
                labels.iter().map(|s| label(s)).collect()
            }

            fn map_of(entries: &[(&str, Weight)]) -> FxHashMap<String, Weight> {
                entries.iter().map(|&(s, w)| (label(s), w)).collect()
            }

            fn empty() -> $graph<String> {
                $graph::<String>::new()
            }

            $(
                test_graph_ops!($graph: $suite);
            )*
        }
    };
    ($graph:ident: GraphNew) => {
        #[test]
        fn graph_new() {
            let graph = empty();

            assert!(graph.is_empty());
            assert!(graph.has_no_edges());
            assert_eq!(graph.number_of_vertices(), 0);
            assert_eq!(graph.number_of_edges(), 0);
            assert!(graph.vertices().is_empty());
            assert!(graph.edges().is_empty());
            assert!(graph.satisfies_invariants());

            assert!($graph::<String>::default().is_empty());
        }

        #[test]
        fn graph_from_edges() {
            let graph = $graph::from_edges([
                (label("A"), label("B"), 1),
                (label("B"), label("C"), 2),
                (label("A"), label("B"), 3),
            ])
            .unwrap();

            assert_eq!(graph.vertices(), set_of(&["A", "B", "C"]));
            assert_eq!(graph.number_of_edges(), 2);
            assert_eq!(graph.weight_of(&label("A"), &label("B")), 3);
            assert_eq!(graph.weight_of(&label("B"), &label("C")), 2);

            assert_eq!(
                $graph::<String>::from_edges([
                    (label("A"), label("B"), 1),
                    (label("A"), label("C"), 0),
                ])
                .err(),
                Some(GraphError::NonPositiveWeight(0))
            );
        }
    };
    ($graph:ident: GraphVertexEditing) => {
        #[test]
        fn add_single_vertex() {
            let mut graph = empty();

            assert!(graph.add_vertex(label("A")));
            assert_eq!(graph.vertices(), set_of(&["A"]));
            assert!(graph.has_vertex(&label("A")));
            assert!(graph.has_no_edges());
        }

        #[test]
        fn add_duplicate_vertex() {
            let mut graph = empty();

            assert!(graph.add_vertex(label("A")));
            assert!(!graph.add_vertex(label("A")));
            assert_eq!(graph.number_of_vertices(), 1);
            assert_eq!(graph.vertices(), set_of(&["A"]));
        }

        #[test]
        fn add_vertex_keeps_edges() {
            let mut graph = empty();
            graph.set_edge(label("A"), label("B"), 4).unwrap();

            assert!(!graph.add_vertex(label("A")));
            assert_eq!(graph.targets(&label("A")), map_of(&[("B", 4)]));
        }

        #[test]
        fn add_multiple_vertices() {
            let mut graph = empty();

            assert_eq!(graph.add_vertices(["A", "B", "A", "C"].map(label)), 3);
            assert_eq!(graph.vertices(), set_of(&["A", "B", "C"]));
        }

        #[test]
        fn remove_nonexistent_vertex() {
            let mut graph = empty();
            graph.add_vertex(label("A"));

            assert!(!graph.remove_vertex(&label("B")));
            assert_eq!(graph.vertices(), set_of(&["A"]));
        }

        #[test]
        fn remove_vertex_without_edges() {
            let mut graph = empty();
            graph.add_vertex(label("A"));

            assert!(graph.remove_vertex(&label("A")));
            assert!(graph.is_empty());
            assert!(!graph.remove_vertex(&label("A")));
        }

        #[test]
        fn remove_vertex_cascades_to_edges() {
            let mut graph = empty();
            // A -> B -> C, D -> B
            graph.set_edge(label("A"), label("B"), 1).unwrap();
            graph.set_edge(label("B"), label("C"), 2).unwrap();
            graph.set_edge(label("D"), label("B"), 3).unwrap();
            graph.set_edge(label("A"), label("C"), 4).unwrap();

            assert!(graph.remove_vertex(&label("B")));

            assert_eq!(graph.vertices(), set_of(&["A", "C", "D"]));
            assert_eq!(graph.targets(&label("A")), map_of(&[("C", 4)]));
            assert_eq!(graph.sources(&label("C")), map_of(&[("A", 4)]));
            assert!(graph.targets(&label("D")).is_empty());
            assert!(graph.sources(&label("B")).is_empty());
            assert!(graph.targets(&label("B")).is_empty());
            assert_eq!(graph.number_of_edges(), 1);
            assert!(graph.satisfies_invariants());
        }

        #[test]
        fn remove_vertex_with_self_loop() {
            let mut graph = empty();
            graph.set_edge(label("A"), label("A"), 7).unwrap();
            graph.set_edge(label("B"), label("A"), 1).unwrap();

            assert!(graph.remove_vertex(&label("A")));
            assert_eq!(graph.vertices(), set_of(&["B"]));
            assert!(graph.has_no_edges());
        }

        #[test]
        fn remove_multiple_vertices() {
            let mut graph = empty();
            graph.add_vertices(["A", "B", "C"].map(label));
            graph.set_edge(label("A"), label("C"), 1).unwrap();

            let doomed = ["A", "B", "X"].map(label);
            assert_eq!(graph.remove_vertices(doomed.iter()), 2);
            assert_eq!(graph.vertices(), set_of(&["C"]));
            assert!(graph.has_no_edges());
        }
    };
    ($graph:ident: GraphEdgeEditing) => {
        #[test]
        fn set_new_edge() {
            let mut graph = empty();

            assert_eq!(graph.set_edge(label("A"), label("B"), 5), Ok(0));
            assert_eq!(graph.vertices(), set_of(&["A", "B"]));
            assert_eq!(graph.targets(&label("A")), map_of(&[("B", 5)]));
            assert_eq!(graph.sources(&label("B")), map_of(&[("A", 5)]));
            assert_eq!(graph.number_of_edges(), 1);
        }

        #[test]
        fn set_edge_merges_with_existing_targets() {
            let mut graph = empty();
            graph.set_edge(label("A"), label("B"), 1).unwrap();
            graph.set_edge(label("C"), label("D"), 2).unwrap();

            assert_eq!(graph.set_edge(label("A"), label("D"), 3), Ok(0));
            assert_eq!(graph.targets(&label("A")), map_of(&[("B", 1), ("D", 3)]));
            assert_eq!(graph.sources(&label("D")), map_of(&[("A", 3), ("C", 2)]));
        }

        #[test]
        fn set_edge_updates_weight() {
            let mut graph = empty();
            graph.set_edge(label("A"), label("B"), 5).unwrap();

            assert_eq!(graph.set_edge(label("A"), label("B"), 10), Ok(5));
            assert_eq!(graph.targets(&label("A")), map_of(&[("B", 10)]));
            assert_eq!(graph.number_of_edges(), 1);
        }

        #[test]
        fn set_edge_is_directed() {
            let mut graph = empty();
            graph.set_edge(label("A"), label("B"), 5).unwrap();

            assert_eq!(graph.set_edge(label("B"), label("A"), 6), Ok(0));
            assert_eq!(graph.weight_of(&label("A"), &label("B")), 5);
            assert_eq!(graph.weight_of(&label("B"), &label("A")), 6);
            assert_eq!(graph.number_of_edges(), 2);
        }

        #[test]
        fn set_zero_removes_edge() {
            let mut graph = empty();
            graph.set_edge(label("A"), label("B"), 5).unwrap();

            assert_eq!(graph.set_edge(label("A"), label("B"), 0), Ok(5));
            assert!(graph.targets(&label("A")).is_empty());
            assert!(graph.sources(&label("B")).is_empty());
            assert_eq!(graph.vertices(), set_of(&["A", "B"]));
        }

        #[test]
        fn set_zero_on_missing_edge() {
            let mut graph = empty();
            graph.add_vertex(label("A"));
            graph.add_vertex(label("B"));

            assert_eq!(graph.set_edge(label("A"), label("B"), 0), Ok(0));
            assert!(graph.targets(&label("A")).is_empty());
            assert!(graph.sources(&label("B")).is_empty());

            // neither endpoint is created by a removal
            assert_eq!(graph.set_edge(label("X"), label("Y"), 0), Ok(0));
            assert_eq!(graph.set_edge(label("A"), label("Y"), 0), Ok(0));
            assert_eq!(graph.vertices(), set_of(&["A", "B"]));
        }

        #[test]
        fn set_self_loop() {
            let mut graph = empty();

            assert_eq!(graph.set_edge(label("A"), label("A"), 7), Ok(0));
            assert_eq!(graph.vertices(), set_of(&["A"]));
            assert_eq!(graph.targets(&label("A")), map_of(&[("A", 7)]));
            assert_eq!(graph.sources(&label("A")), map_of(&[("A", 7)]));
        }

        #[test]
        fn set_negative_weight_is_rejected() {
            let mut graph = empty();
            graph.set_edge(label("A"), label("B"), 5).unwrap();

            assert_eq!(
                graph.set_edge(label("A"), label("B"), -1),
                Err(GraphError::NegativeWeight(-1))
            );
            assert_eq!(
                graph.set_edge(label("C"), label("D"), -7),
                Err(GraphError::NegativeWeight(-7))
            );

            assert_eq!(graph.vertices(), set_of(&["A", "B"]));
            assert_eq!(graph.targets(&label("A")), map_of(&[("B", 5)]));
            assert_eq!(graph.number_of_edges(), 1);
        }

        #[test]
        fn remove_edge() {
            let mut graph = empty();
            graph.set_edge(label("A"), label("B"), 5).unwrap();

            assert_eq!(graph.remove_edge(label("A"), label("B")), 5);
            assert_eq!(graph.remove_edge(label("A"), label("B")), 0);
            assert!(graph.has_no_edges());
        }

        #[test]
        fn set_edges_rejects_the_whole_batch() {
            let mut graph = empty();

            assert_eq!(
                graph.set_edges([
                    (label("A"), label("B"), 1),
                    (label("B"), label("C"), -2),
                    (label("C"), label("D"), -3),
                ]),
                Err(GraphError::NegativeWeight(-2))
            );
            assert!(graph.is_empty());
            assert!(graph.has_no_edges());

            assert_eq!(
                graph.set_edges([
                    (label("A"), label("B"), 1),
                    (label("B"), label("C"), 2),
                    (label("A"), label("B"), 0),
                ]),
                Ok(())
            );
            assert_eq!(graph.vertices(), set_of(&["A", "B", "C"]));
            assert_eq!(graph.targets(&label("B")), map_of(&[("C", 2)]));
            assert_eq!(graph.number_of_edges(), 1);
        }
    };
    ($graph:ident: WeightedAdjacency) => {
        #[test]
        fn sources_and_targets_of_unknown_vertex() {
            let mut graph = empty();
            graph.add_vertex(label("A"));

            assert!(graph.sources(&label("B")).is_empty());
            assert!(graph.targets(&label("B")).is_empty());
            assert_eq!(graph.in_degree_of(&label("B")), 0);
            assert_eq!(graph.out_degree_of(&label("B")), 0);
        }

        #[test]
        fn sources_and_targets_of_isolated_vertex() {
            let mut graph = empty();
            graph.add_vertex(label("A"));

            assert!(graph.sources(&label("A")).is_empty());
            assert!(graph.targets(&label("A")).is_empty());
        }

        #[test]
        fn sources_and_targets() {
            let mut graph = empty();
            graph.set_edge(label("A"), label("C"), 1).unwrap();
            graph.set_edge(label("B"), label("C"), 2).unwrap();
            graph.set_edge(label("A"), label("B"), 3).unwrap();

            assert_eq!(graph.sources(&label("C")), map_of(&[("A", 1), ("B", 2)]));
            assert_eq!(graph.sources(&label("B")), map_of(&[("A", 3)]));
            assert!(graph.sources(&label("A")).is_empty());

            assert_eq!(graph.targets(&label("A")), map_of(&[("B", 3), ("C", 1)]));
            assert_eq!(graph.targets(&label("B")), map_of(&[("C", 2)]));
            assert!(graph.targets(&label("C")).is_empty());

            assert_eq!(graph.in_degree_of(&label("C")), 2);
            assert_eq!(graph.out_degree_of(&label("A")), 2);
        }

        #[test]
        fn weight_of_and_has_edge() {
            let mut graph = empty();
            graph.set_edge(label("A"), label("B"), 9).unwrap();

            assert_eq!(graph.weight_of(&label("A"), &label("B")), 9);
            assert_eq!(graph.weight_of(&label("B"), &label("A")), 0);
            assert_eq!(graph.weight_of(&label("X"), &label("B")), 0);
            assert!(graph.has_edge(&label("A"), &label("B")));
            assert!(!graph.has_edge(&label("B"), &label("A")));
        }

        #[test]
        fn edges_snapshot() {
            let mut graph = empty();
            graph.set_edge(label("A"), label("B"), 1).unwrap();
            graph.set_edge(label("B"), label("A"), 2).unwrap();
            graph.set_edge(label("B"), label("B"), 3).unwrap();

            let edges = graph
                .edges()
                .into_iter()
                .map(Edge::into_parts)
                .sorted()
                .collect_vec();

            assert_eq!(
                edges,
                vec![
                    (label("A"), label("B"), 1),
                    (label("B"), label("A"), 2),
                    (label("B"), label("B"), 3),
                ]
            );
        }
    };
    ($graph:ident: SnapshotIsolation) => {
        #[test]
        fn snapshots_do_not_alias_the_graph() {
            let mut graph = empty();
            graph.set_edge(label("A"), label("B"), 1).unwrap();
            graph.set_edge(label("C"), label("B"), 2).unwrap();

            let mut vertices = graph.vertices();
            vertices.insert(label("Z"));
            vertices.remove(&label("A"));

            let mut sources = graph.sources(&label("B"));
            sources.insert(label("Z"), 5);
            sources.remove(&label("A"));

            let mut targets = graph.targets(&label("A"));
            targets.insert(label("Z"), 5);
            targets.clear();

            let mut edges = graph.edges();
            edges.clear();

            assert_eq!(graph.vertices(), set_of(&["A", "B", "C"]));
            assert_eq!(graph.sources(&label("B")), map_of(&[("A", 1), ("C", 2)]));
            assert_eq!(graph.targets(&label("A")), map_of(&[("B", 1)]));
            assert_eq!(graph.number_of_edges(), 2);
        }

        #[test]
        fn snapshots_survive_later_mutations() {
            let mut graph = empty();
            graph.set_edge(label("A"), label("B"), 1).unwrap();

            let vertices = graph.vertices();
            let targets = graph.targets(&label("A"));

            graph.set_edge(label("A"), label("B"), 8).unwrap();
            graph.set_edge(label("A"), label("C"), 2).unwrap();
            graph.remove_vertex(&label("B"));

            assert_eq!(vertices, set_of(&["A", "B"]));
            assert_eq!(targets, map_of(&[("B", 1)]));
        }
    };
    ($graph:ident: MutationStory) => {
        #[test]
        fn mutation_story() {
            let mut graph = empty();
            assert!(graph.vertices().is_empty());

            graph.set_edge(label("A"), label("B"), 10).unwrap();
            graph.set_edge(label("A"), label("C"), 20).unwrap();
            assert_eq!(graph.vertices(), set_of(&["A", "B", "C"]));
            assert_eq!(graph.targets(&label("A")), map_of(&[("B", 10), ("C", 20)]));

            graph.set_edge(label("B"), label("C"), 30).unwrap();
            assert_eq!(graph.sources(&label("C")), map_of(&[("A", 20), ("B", 30)]));

            assert_eq!(graph.set_edge(label("A"), label("B"), 5), Ok(10));
            assert_eq!(graph.targets(&label("A")), map_of(&[("B", 5), ("C", 20)]));

            assert!(graph.remove_vertex(&label("B")));
            assert_eq!(graph.vertices(), set_of(&["A", "C"]));
            assert_eq!(graph.targets(&label("A")), map_of(&[("C", 20)]));
            assert_eq!(graph.sources(&label("C")), map_of(&[("A", 20)]));

            assert_eq!(graph.set_edge(label("A"), label("C"), 0), Ok(20));
            assert_eq!(graph.vertices(), set_of(&["A", "C"]));
            assert!(graph.targets(&label("A")).is_empty());
            assert!(graph.sources(&label("C")).is_empty());
            assert!(graph.satisfies_invariants());
        }
    };
    ($graph:ident: RandomModel) => {
        #[test]
        fn matches_reference_model() {
            const N: u32 = 8;

            for seed in 0..5 {
                let rng = &mut Pcg64Mcg::seed_from_u64(seed);

                let mut graph = $graph::<u32>::new();
                let mut vertices: BTreeSet<u32> = BTreeSet::new();
                let mut edges: BTreeMap<(u32, u32), Weight> = BTreeMap::new();

                for _ in 0..1000 {
                    let u = rng.random_range(0..N);
                    let v = rng.random_range(0..N);

                    match rng.random_range(0..10) {
                        0 => {
                            assert_eq!(graph.add_vertex(u), vertices.insert(u));
                        }
                        1 => {
                            let existed = vertices.remove(&u);
                            if existed {
                                edges.retain(|&(s, t), _| s != u && t != u);
                            }
                            assert_eq!(graph.remove_vertex(&u), existed);
                        }
                        _ => {
                            let weight = rng.random_range(-2..10);
                            let expected = if weight < 0 {
                                Err(GraphError::NegativeWeight(weight))
                            } else if weight == 0 {
                                Ok(edges.remove(&(u, v)).unwrap_or(0))
                            } else {
                                vertices.insert(u);
                                vertices.insert(v);
                                Ok(edges.insert((u, v), weight).unwrap_or(0))
                            };
                            assert_eq!(graph.set_edge(u, v, weight), expected);
                        }
                    }

                    assert_eq!(graph.check_invariants(), Ok(()));
                    assert_eq!(graph.number_of_edges(), edges.len());
                    assert_eq!(
                        graph.vertices().into_iter().sorted().collect_vec(),
                        vertices.iter().copied().collect_vec()
                    );

                    for w in 0..N {
                        let targets: FxHashMap<u32, Weight> = edges
                            .iter()
                            .filter(|&(&(s, _), _)| s == w)
                            .map(|(&(_, t), &weight)| (t, weight))
                            .collect();
                        let sources: FxHashMap<u32, Weight> = edges
                            .iter()
                            .filter(|&(&(_, t), _)| t == w)
                            .map(|(&(s, _), &weight)| (s, weight))
                            .collect();

                        assert_eq!(graph.targets(&w), targets);
                        assert_eq!(graph.sources(&w), sources);
                    }
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;
