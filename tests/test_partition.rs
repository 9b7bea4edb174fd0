mod utility;

#[cfg(test)]
mod tests {

    use leidenrs::{generators, Graph, QualityFunction, VertexPartition};
    use std::sync::Arc;

    fn unweighted_graphs() -> Vec<Arc<Graph>> {
        vec![
            Arc::new(generators::social::karate_club_graph()),
            Arc::new(
                generators::random::fast_gnp_random_graph(60, 0.08, false, Some(5)).unwrap(),
            ),
            Arc::new(generators::random::fast_gnp_random_graph(60, 0.08, true, Some(5)).unwrap()),
            Arc::new(generators::classic::balanced_tree(3, 3).unwrap()),
            Arc::new(generators::classic::path_graph(20)),
        ]
    }

    fn reweighted(graph: &Graph) -> Arc<Graph> {
        let edges: Vec<(usize, usize, f64)> = graph
            .edges()
            .iter()
            .map(|e| (e.u, e.v, 0.5 + ((e.u * 31 + e.v * 7) % 10) as f64 / 10.0))
            .collect();
        Arc::new(Graph::from_edges(graph.vcount(), graph.is_directed(), &edges).unwrap())
    }

    fn with_self_loops() -> Arc<Graph> {
        Arc::new(
            Graph::from_edges(
                6,
                false,
                &[
                    (0, 0, 2.0),
                    (0, 1, 1.0),
                    (1, 2, 1.5),
                    (2, 3, 1.0),
                    (3, 4, 0.5),
                    (4, 5, 1.0),
                    (5, 5, 1.0),
                ],
            )
            .unwrap(),
        )
    }

    fn quality_functions() -> Vec<QualityFunction> {
        vec![
            QualityFunction::Modularity,
            QualityFunction::CPM { resolution: 0.4 },
            QualityFunction::RBConfiguration { resolution: 0.7 },
            QualityFunction::RBER { resolution: 0.7 },
            QualityFunction::Surprise,
            QualityFunction::Significance,
        ]
    }

    fn check_diff_move_consistency(graph: &Arc<Graph>, quality_function: QualityFunction) {
        let mut partition = VertexPartition::new(graph, quality_function).unwrap();
        for v in 0..graph.vcount() {
            let target = match graph.out_neighbours(v).first() {
                Some(nb) => partition.membership()[nb.node],
                None => continue,
            };
            let diff = partition.diff_move(v, target).unwrap();
            let before = partition.quality();
            partition.move_node(v, target).unwrap();
            let after = partition.quality();
            assert!(
                (after - before - diff).abs() < 1e-10,
                "{:?}: moving {} changed quality by {} but diff_move returned {}",
                quality_function,
                v,
                after - before,
                diff
            );
        }
    }

    #[test]
    fn test_diff_move_matches_quality_difference() {
        for graph in unweighted_graphs() {
            for quality_function in quality_functions() {
                check_diff_move_consistency(&graph, quality_function);
            }
        }
    }

    #[test]
    fn test_diff_move_matches_quality_difference_weighted() {
        for graph in unweighted_graphs() {
            let graph = reweighted(&graph);
            for quality_function in quality_functions() {
                if quality_function == QualityFunction::Significance {
                    continue;
                }
                check_diff_move_consistency(&graph, quality_function);
            }
        }
    }

    #[test]
    fn test_diff_move_matches_quality_difference_with_self_loops() {
        let graph = with_self_loops();
        for quality_function in quality_functions() {
            if quality_function == QualityFunction::Significance {
                continue;
            }
            check_diff_move_consistency(&graph, quality_function);
        }
    }

    #[test]
    fn test_aggregate_partition_preserves_quality() {
        for graph in unweighted_graphs() {
            let membership: Vec<usize> = (0..graph.vcount()).map(|v| v % 5).collect();
            for quality_function in quality_functions() {
                let partition =
                    VertexPartition::with_membership(&graph, quality_function, &membership)
                        .unwrap();
                let aggregate = partition.aggregate_partition();
                assert!(
                    (aggregate.quality() - partition.quality()).abs() < 1e-10,
                    "{:?}: aggregation changed the quality from {} to {}",
                    quality_function,
                    partition.quality(),
                    aggregate.quality()
                );
                assert_eq!(aggregate.graph().vcount(), 5);
            }
        }
    }

    #[test]
    fn test_aggregate_partition_preserves_quality_with_self_loops() {
        let graph = with_self_loops();
        let partition = VertexPartition::with_membership(
            &graph,
            QualityFunction::CPM { resolution: 0.3 },
            &[0, 0, 0, 1, 1, 1],
        )
        .unwrap();
        let aggregate = partition.aggregate_partition();
        assert!((aggregate.quality() - partition.quality()).abs() < 1e-10);
        // aggregating twice must not drift either
        let twice = aggregate.aggregate_partition();
        assert!((twice.quality() - partition.quality()).abs() < 1e-10);
    }

    #[test]
    fn test_statistics_stay_consistent_under_moves() {
        let graph = Arc::new(generators::social::karate_club_graph());
        let mut partition =
            VertexPartition::new(&graph, QualityFunction::Modularity).unwrap();
        for v in 0..graph.vcount() {
            let target = partition.membership()[graph.out_neighbours(v)[0].node];
            partition.move_node(v, target).unwrap();
            let total: f64 = (0..partition.n_communities())
                .map(|c| partition.total_weight_in_comm(c).unwrap())
                .sum();
            assert!((total - partition.total_weight_in_all_comms()).abs() < 1e-10);
            let sizes: usize = (0..partition.n_communities())
                .map(|c| partition.community_size(c).unwrap())
                .sum();
            assert_eq!(sizes, graph.total_node_size());
            let counts: usize = (0..partition.n_communities())
                .map(|c| partition.community_count(c).unwrap())
                .sum();
            assert_eq!(counts, graph.vcount());
        }
    }

    #[test]
    fn test_weight_to_comm_matches_scratch_statistics() {
        let graph = Arc::new(generators::social::karate_club_graph());
        let mut partition = VertexPartition::with_membership(
            &graph,
            QualityFunction::Modularity,
            &(0..graph.vcount()).map(|v| v % 4).collect::<Vec<usize>>(),
        )
        .unwrap();
        for v in 0..graph.vcount() {
            let by_hand: f64 = graph
                .out_neighbours(v)
                .iter()
                .filter(|nb| partition.membership()[nb.node] == 1)
                .map(|nb| nb.weight)
                .sum();
            assert_eq!(partition.weight_to_comm(v, 1).unwrap(), by_hand);
            assert_eq!(
                partition.weight_from_comm(v, 1).unwrap(),
                by_hand,
                "undirected graphs are symmetric"
            );
        }
        // moving a vertex must not invalidate subsequent queries
        partition.move_node(0, 2).unwrap();
        let by_hand: f64 = graph
            .out_neighbours(1)
            .iter()
            .filter(|nb| partition.membership()[nb.node] == 2)
            .map(|nb| nb.weight)
            .sum();
        assert_eq!(partition.weight_to_comm(1, 2).unwrap(), by_hand);
    }
}
