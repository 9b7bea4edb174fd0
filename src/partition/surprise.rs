use super::{kl_divergence, VertexPartition};

/**
Asymptotic Surprise:

`Q = m · D(q ‖ ⟨q⟩)`

with `q` the fraction of weight inside communities, `⟨q⟩` the expected
fraction under the possible-edge counts and `D` the binary Kullback-Leibler
divergence. An empty or edgeless graph has quality 0.
*/
pub(super) fn quality(partition: &VertexPartition) -> f64 {
    let graph = partition.graph();
    let m = graph.total_weight();
    let possible = graph.possible_edges();
    if m <= 0.0 || possible <= 0.0 {
        return 0.0;
    }
    let q = partition.total_weight_in_all_comms() / m;
    let q_expected = partition.total_possible_edges_in_all_comms() / possible;
    m * kl_divergence(q, q_expected)
}

pub(super) fn diff_move(
    partition: &VertexPartition,
    v: usize,
    old_comm: usize,
    new_comm: usize,
) -> f64 {
    let graph = partition.graph();
    let m = graph.total_weight();
    let possible = graph.possible_edges();
    if m <= 0.0 || possible <= 0.0 {
        return 0.0;
    }
    let (w_removed, w_added) = partition.weight_in_deltas(old_comm, new_comm);
    let delta_possible = super::cpm::delta_possible_edges(partition, v, old_comm, new_comm);
    let q = partition.total_weight_in_all_comms() / m;
    let q_expected = partition.total_possible_edges_in_all_comms() / possible;
    let q_after = (partition.total_weight_in_all_comms() + w_added - w_removed) / m;
    let q_expected_after =
        (partition.total_possible_edges_in_all_comms() + delta_possible) / possible;
    m * kl_divergence(q_after, q_expected_after) - m * kl_divergence(q, q_expected)
}

#[cfg(test)]
mod tests {

    use crate::{Graph, QualityFunction, VertexPartition};
    use assert_approx_eq::assert_approx_eq;
    use std::sync::Arc;

    #[test]
    fn test_quality_path_graph() {
        let graph = Arc::new(
            Graph::from_edges(4, false, &[(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0)]).unwrap(),
        );
        let partition = VertexPartition::with_membership(
            &graph,
            QualityFunction::Surprise,
            &[0, 0, 1, 1],
        )
        .unwrap();
        // q = 2/3, <q> = 1/3: 3 * D(2/3 || 1/3) = ln 2
        assert_approx_eq!(partition.quality(), 2.0_f64.ln());
    }

    #[test]
    fn test_quality_zero_for_perfect_expectation() {
        let graph = Arc::new(
            Graph::from_edges(
                4,
                false,
                &[(0, 1, 1.0), (0, 2, 1.0), (0, 3, 1.0), (1, 2, 1.0), (1, 3, 1.0), (2, 3, 1.0)],
            )
            .unwrap(),
        );
        let partition = VertexPartition::with_membership(
            &graph,
            QualityFunction::Surprise,
            &[0, 0, 1, 1],
        )
        .unwrap();
        // in a complete graph every split matches the expectation exactly
        assert_approx_eq!(partition.quality(), 0.0);
    }

    #[test]
    fn test_diff_move_matches_quality_delta() {
        let graph = Arc::new(
            Graph::from_edges(5, false, &[(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0), (3, 4, 1.0)])
                .unwrap(),
        );
        let mut partition = VertexPartition::with_membership(
            &graph,
            QualityFunction::Surprise,
            &[0, 0, 0, 1, 1],
        )
        .unwrap();
        let diff = partition.diff_move(2, 1).unwrap();
        let before = partition.quality();
        partition.move_node(2, 1).unwrap();
        assert_approx_eq!(partition.quality() - before, diff);
    }
}
