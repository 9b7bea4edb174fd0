mod utility;

#[cfg(test)]
mod tests {

    use crate::utility;
    use leidenrs::{
        find_partition_temporal, generators, ConsiderPolicy, Graph, Optimiser, QualityFunction,
        VertexPartition,
    };
    use std::sync::Arc;

    #[test]
    fn test_single_weighted_layer_equals_single_layer_run() {
        let graph = Arc::new(generators::social::karate_club_graph());
        let silent = Arc::new(Graph::from_edges(graph.vcount(), false, &[]).unwrap());

        let mut single = VertexPartition::new(&graph, QualityFunction::Modularity).unwrap();
        let mut optimiser = Optimiser::new();
        optimiser.set_rng_seed(42);
        let single_diff = optimiser.optimise_partition(&mut single, 2, None).unwrap();

        let mut layers = vec![
            VertexPartition::new(&graph, QualityFunction::Modularity).unwrap(),
            VertexPartition::new(&silent, QualityFunction::Modularity).unwrap(),
        ];
        let mut optimiser = Optimiser::new();
        optimiser.set_rng_seed(42);
        let multi_diff = optimiser
            .optimise_partition_multiplex(&mut layers, Some(&[1.0, 0.0]), 2, None)
            .unwrap();

        assert_eq!(single.membership(), layers[0].membership());
        assert_eq!(layers[0].membership(), layers[1].membership());
        assert!((single_diff - multi_diff).abs() < 1e-12);
    }

    #[test]
    fn test_signed_layers_separate_positive_from_negative() {
        // two blocks: dense positive links inside, negative links between
        let mut positive = vec![];
        let mut negative = vec![];
        for u in 0..10 {
            for v in (u + 1)..10 {
                let same_block = (u < 5) == (v < 5);
                match same_block {
                    true => positive.push((u, v, 1.0)),
                    false => negative.push((u, v, 1.0)),
                }
            }
        }
        let g_pos = Arc::new(Graph::from_edges(10, false, &positive).unwrap());
        let g_neg = Arc::new(Graph::from_edges(10, false, &negative).unwrap());
        let mut layers = vec![
            VertexPartition::new(&g_pos, QualityFunction::CPM { resolution: 0.2 }).unwrap(),
            VertexPartition::new(&g_neg, QualityFunction::CPM { resolution: 0.0 }).unwrap(),
        ];
        let mut optimiser = Optimiser::new();
        optimiser.set_rng_seed(42);
        optimiser.consider_comms = ConsiderPolicy::AllComms;
        let diff = optimiser
            .optimise_partition_multiplex(&mut layers, Some(&[1.0, -1.0]), -1, None)
            .unwrap();
        assert!(diff > 0.0);
        assert_eq!(utility::community_sizes(layers[0].membership()), vec![5, 5]);
        let membership = layers[0].membership();
        assert_eq!(membership[0], membership[4]);
        assert_ne!(membership[0], membership[5]);
    }

    #[test]
    fn test_layers_share_every_move() {
        let g1 = Arc::new(generators::classic::path_graph(12));
        let g2 = Arc::new(generators::classic::complete_graph(12, false));
        let mut layers = vec![
            VertexPartition::new(&g1, QualityFunction::CPM { resolution: 0.3 }).unwrap(),
            VertexPartition::new(&g2, QualityFunction::CPM { resolution: 0.3 }).unwrap(),
        ];
        let mut optimiser = Optimiser::new();
        optimiser.set_rng_seed(42);
        optimiser
            .optimise_partition_multiplex(&mut layers, None, 2, None)
            .unwrap();
        assert_eq!(layers[0].membership(), layers[1].membership());
    }

    #[test]
    fn test_interslice_coupling_aligns_communities_over_time() {
        // two communities that persist over three time slices
        let slices: Vec<Graph> = (0..3)
            .map(|_| {
                Graph::from_edges(
                    6,
                    false,
                    &[
                        (0, 1, 1.0),
                        (1, 2, 1.0),
                        (0, 2, 1.0),
                        (3, 4, 1.0),
                        (4, 5, 1.0),
                        (3, 5, 1.0),
                    ],
                )
                .unwrap()
            })
            .collect();
        let ids: Vec<Vec<usize>> = (0..3).map(|_| (0..6).collect()).collect();
        let (memberships, improvement) = find_partition_temporal(
            &slices,
            &ids,
            QualityFunction::CPM { resolution: 0.5 },
            1.0,
            2,
            0,
            Some(42),
        )
        .unwrap();
        assert!(improvement > 0.0);
        assert_eq!(memberships.len(), 3);
        for membership in &memberships {
            assert_eq!(utility::community_sizes(membership), vec![3, 3]);
        }
        // the same community id follows the same vertexes across slices
        assert_eq!(memberships[0], memberships[1]);
        assert_eq!(memberships[1], memberships[2]);
    }

    #[test]
    fn test_ghost_vertexes_do_not_count_towards_sizes() {
        let graph = Arc::new(
            Graph::from_edges_with_node_sizes(
                4,
                false,
                &[(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0)],
                vec![1, 1, 0, 1],
            )
            .unwrap(),
        );
        let partition = VertexPartition::with_membership(
            &graph,
            QualityFunction::CPM { resolution: 1.0 },
            &[0, 0, 0, 1],
        )
        .unwrap();
        assert_eq!(partition.community_size(0).unwrap(), 2);
        assert_eq!(partition.community_count(0).unwrap(), 3);
    }
}
