use super::{cpm, VertexPartition};

/**
The Reichardt-Bornholdt Potts model with an Erdős–Rényi null model:

`Q = Σ_c [ w_in(c) − γ p · possible_edges(S_c) ]`

where `p` is the overall density of the graph.
*/
pub(super) fn quality(partition: &VertexPartition, resolution: f64) -> f64 {
    let graph = partition.graph();
    let density = graph.density();
    (0..partition.n_communities())
        .map(|comm| {
            partition.w_in_at(comm)
                - resolution * density * graph.possible_edges_of(partition.size_at(comm))
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
    let density = partition.graph().density();
    let (w_removed, w_added) = partition.weight_in_deltas(old_comm, new_comm);
    (w_added - w_removed)
        - resolution * density * cpm::delta_possible_edges(partition, v, old_comm, new_comm)
}
