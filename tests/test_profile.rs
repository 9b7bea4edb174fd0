mod utility;

#[cfg(test)]
mod tests {

    use leidenrs::{generators, Optimiser, QualityFunction};
    use std::sync::Arc;

    #[test]
    fn test_karate_profile_runs_from_one_community_to_singletons() {
        let graph = Arc::new(generators::social::karate_club_graph());
        let mut optimiser = Optimiser::new();
        optimiser.set_rng_seed(42);
        let profile = optimiser
            .resolution_profile(
                &graph,
                QualityFunction::CPM { resolution: 1.0 },
                (0.0, 1.0),
                None,
                None,
                false,
                1,
            )
            .unwrap();
        assert!(profile.len() >= 2);
        let first = profile.first().unwrap();
        assert_eq!(first.n_nonempty_communities(), 1);
        assert_eq!(first.bisect_value(), graph.ecount() as f64);
        let last = profile.last().unwrap();
        assert_eq!(last.n_nonempty_communities(), graph.vcount());
        assert_eq!(last.bisect_value(), 0.0);
    }

    #[test]
    fn test_profile_bisect_values_decrease_with_resolution() {
        let graph = Arc::new(generators::social::karate_club_graph());
        let mut optimiser = Optimiser::new();
        optimiser.set_rng_seed(42);
        let profile = optimiser
            .resolution_profile(
                &graph,
                QualityFunction::CPM { resolution: 1.0 },
                (0.0, 1.0),
                None,
                None,
                false,
                1,
            )
            .unwrap();
        let bisect_values: Vec<f64> = profile.iter().map(|p| p.bisect_value()).collect();
        for pair in bisect_values.windows(2) {
            assert_ne!(pair[0], pair[1], "the profile must be stepwise");
        }
        assert!(bisect_values.first().unwrap() > bisect_values.last().unwrap());
    }

    #[test]
    fn test_profile_partitions_carry_their_resolution() {
        let graph = Arc::new(generators::social::karate_club_graph());
        let mut optimiser = Optimiser::new();
        optimiser.set_rng_seed(42);
        let profile = optimiser
            .resolution_profile(
                &graph,
                QualityFunction::RBConfiguration { resolution: 1.0 },
                (0.1, 2.0),
                None,
                None,
                false,
                1,
            )
            .unwrap();
        let mut previous = f64::NEG_INFINITY;
        for partition in &profile {
            let resolution = partition.resolution_parameter().unwrap();
            assert!(resolution > previous);
            previous = resolution;
        }
    }
}
