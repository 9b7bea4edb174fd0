use super::{kl_divergence, VertexPartition};
use crate::graph::Graph;

/**
Significance:

`Q = Σ_c possible_edges(S_c) · D(p_c ‖ p)`

with `p_c` the internal density of community `c` and `p` the density of the
graph. Only defined for unweighted graphs; communities too small to contain
an edge contribute 0.
*/
pub(super) fn quality(partition: &VertexPartition) -> f64 {
    let graph = partition.graph();
    let density = graph.density();
    (0..partition.n_communities())
        .map(|comm| community_term(graph, partition.size_at(comm), partition.w_in_at(comm), density))
        .sum()
}

pub(super) fn diff_move(
    partition: &VertexPartition,
    v: usize,
    old_comm: usize,
    new_comm: usize,
) -> f64 {
    let graph = partition.graph();
    let density = graph.density();
    let sigma = graph.node_size(v);
    let (w_removed, w_added) = partition.weight_in_deltas(old_comm, new_comm);
    let before = community_term(graph, partition.size_at(old_comm), partition.w_in_at(old_comm), density)
        + community_term(graph, partition.size_at(new_comm), partition.w_in_at(new_comm), density);
    let after = community_term(
        graph,
        partition.size_at(old_comm) - sigma,
        partition.w_in_at(old_comm) - w_removed,
        density,
    ) + community_term(
        graph,
        partition.size_at(new_comm) + sigma,
        partition.w_in_at(new_comm) + w_added,
        density,
    );
    after - before
}

fn community_term(graph: &Graph, size: usize, w_in: f64, density: f64) -> f64 {
    let possible = graph.possible_edges_of(size);
    if possible <= 0.0 {
        return 0.0;
    }
    possible * kl_divergence(w_in / possible, density)
}
