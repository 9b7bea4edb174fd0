use super::VertexPartition;

/**
Modularity, in the igraph normalisation: for an undirected graph

`Q = (1/m) Σ_c [ w_in(c) − K_c² / 4m ]`

where `K_c` is the summed strength of the community's members. Directed
graphs use the Leicht-Newman form with `K_c^out · K_c^in / m` as the null
term. An empty graph has quality 0.
*/
pub(super) fn quality(partition: &VertexPartition) -> f64 {
    let graph = partition.graph();
    let m = graph.total_weight();
    if m <= 0.0 {
        return 0.0;
    }
    let directed = graph.is_directed();
    let mut sum = 0.0;
    for comm in 0..partition.n_communities() {
        let null = match directed {
            true => partition.w_from_at(comm) * partition.w_to_at(comm) / m,
            false => partition.w_from_at(comm) * partition.w_from_at(comm) / (4.0 * m),
        };
        sum += partition.w_in_at(comm) - null;
    }
    sum / m
}

pub(super) fn diff_move(
    partition: &VertexPartition,
    v: usize,
    old_comm: usize,
    new_comm: usize,
) -> f64 {
    let graph = partition.graph();
    let m = graph.total_weight();
    if m <= 0.0 {
        return 0.0;
    }
    let (w_removed, w_added) = partition.weight_in_deltas(old_comm, new_comm);
    let delta_internal = w_added - w_removed;
    let delta_null = match graph.is_directed() {
        true => {
            let k_out = graph.strength_out(v);
            let k_in = graph.strength_in(v);
            (k_out * (partition.w_to_at(new_comm) - partition.w_to_at(old_comm))
                + k_in * (partition.w_from_at(new_comm) - partition.w_from_at(old_comm))
                + 2.0 * k_out * k_in)
                / m
        }
        false => {
            let k = graph.strength_out(v);
            k * (partition.w_from_at(new_comm) - partition.w_from_at(old_comm) + k) / (2.0 * m)
        }
    };
    (delta_internal - delta_null) / m
}

#[cfg(test)]
mod tests {

    use crate::{Graph, QualityFunction, VertexPartition};
    use assert_approx_eq::assert_approx_eq;
    use std::sync::Arc;

    #[test]
    fn test_quality_path_graph() {
        let graph = Arc::new(Graph::from_edges(3, false, &[(0, 1, 1.0), (1, 2, 1.0)]).unwrap());
        let partition =
            VertexPartition::with_membership(&graph, QualityFunction::Modularity, &[0, 0, 1])
                .unwrap();
        assert_approx_eq!(partition.quality(), -0.125);
    }

    #[test]
    fn test_diff_move_matches_quality_delta() {
        let graph = Arc::new(Graph::from_edges(3, false, &[(0, 1, 1.0), (1, 2, 1.0)]).unwrap());
        let mut partition =
            VertexPartition::with_membership(&graph, QualityFunction::Modularity, &[0, 0, 1])
                .unwrap();
        let diff = partition.diff_move(2, 0).unwrap();
        assert_approx_eq!(diff, 0.125);
        let before = partition.quality();
        partition.move_node(2, 0).unwrap();
        assert_approx_eq!(partition.quality() - before, diff);
        assert_approx_eq!(partition.quality(), 0.0);
    }

    #[test]
    fn test_diff_move_matches_quality_delta_directed() {
        let graph = Arc::new(
            Graph::from_edges(4, true, &[(0, 1, 1.0), (1, 2, 2.0), (2, 0, 1.0), (2, 3, 1.5)])
                .unwrap(),
        );
        let mut partition =
            VertexPartition::with_membership(&graph, QualityFunction::Modularity, &[0, 0, 1, 1])
                .unwrap();
        let diff = partition.diff_move(2, 0).unwrap();
        let before = partition.quality();
        partition.move_node(2, 0).unwrap();
        assert_approx_eq!(partition.quality() - before, diff);
    }
}
