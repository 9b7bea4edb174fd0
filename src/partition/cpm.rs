use super::VertexPartition;

/**
The Constant Potts Model:

`Q = Σ_c [ w_in(c) − γ · possible_edges(S_c) ]`

where `S_c` is the community's total node size. No normalisation is
applied, and negative edge weights are accepted.
*/
pub(super) fn quality(partition: &VertexPartition, resolution: f64) -> f64 {
    let graph = partition.graph();
    (0..partition.n_communities())
        .map(|comm| {
            partition.w_in_at(comm)
                - resolution * graph.possible_edges_of(partition.size_at(comm))
        })
        .sum()
}

pub(super) fn diff_move(
    partition: &VertexPartition,
    v: usize,
    old_comm: usize,
    new_comm: usize,
    resolution: f64,
) -> f64 {
    let (w_removed, w_added) = partition.weight_in_deltas(old_comm, new_comm);
    (w_added - w_removed) - resolution * delta_possible_edges(partition, v, old_comm, new_comm)
}

/// The change in `Σ_c possible_edges(S_c)` if the vertex moved, computed as
/// a difference of the same counts the quality uses so the two stay
/// consistent to the last bit of the binomials.
pub(super) fn delta_possible_edges(
    partition: &VertexPartition,
    v: usize,
    old_comm: usize,
    new_comm: usize,
) -> f64 {
    let graph = partition.graph();
    let sigma = graph.node_size(v);
    let size_old = partition.size_at(old_comm);
    let size_new = partition.size_at(new_comm);
    (graph.possible_edges_of(size_new + sigma) - graph.possible_edges_of(size_new))
        - (graph.possible_edges_of(size_old) - graph.possible_edges_of(size_old - sigma))
}
