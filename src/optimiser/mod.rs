use crate::partition::VertexPartition;
use crate::utility;
use crate::{Error, ErrorKind};
use nohash::{IntMap, IntSet};
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::Arc;

mod profile;

/**
Determines which candidate communities are evaluated when a vertex is
considered for moving.

* `AllComms`: every non-empty community. Useful with negative edge weights,
  where the best community for a vertex may be one it has no neighbour in.
* `AllNeighComms`: every community a neighbour of the vertex belongs to.
* `RandComm`: one community, drawn uniformly from the non-empty ones.
* `RandNeighComm`: one community, drawn from the neighbouring ones with
  probability proportional to the weight connecting the vertex to it.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConsiderPolicy {
    AllComms,
    AllNeighComms,
    RandComm,
    RandNeighComm,
}

/// The local-move routine used for optimising or refining a partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptimiseRoutine {
    MoveNodes,
    MergeNodes,
}

/**
Optimises [VertexPartition](../struct.VertexPartition.html)s with the Leiden
algorithm: a queue-driven fast local move, an optional refinement phase that
keeps communities well connected, and repeated aggregation until no coarser
level improves the quality function.

All randomised choices, vertex order and random-community draws alike, come from a
single seedable generator, so two runs with the same seed, inputs and
iteration counts produce identical memberships.

# Examples

```
use leidenrs::{Graph, Optimiser, QualityFunction, VertexPartition};
use std::sync::Arc;

let edges = vec![
    (0, 1, 1.0),
    (1, 2, 1.0),
    (0, 2, 1.0),
    (3, 4, 1.0),
    (4, 5, 1.0),
    (3, 5, 1.0),
    (2, 3, 0.2),
];
let graph = Arc::new(Graph::from_edges(6, false, &edges).unwrap());
let mut partition =
    VertexPartition::new(&graph, QualityFunction::CPM { resolution: 0.5 }).unwrap();
let mut optimiser = Optimiser::new();
optimiser.set_rng_seed(42);
optimiser.optimise_partition(&mut partition, 2, None).unwrap();
assert_eq!(partition.n_communities(), 2);
```
*/
pub struct Optimiser {
    /// Candidate policy for the optimisation phase.
    pub consider_comms: ConsiderPolicy,
    /// Candidate policy for the refinement phase.
    pub refine_consider_comms: ConsiderPolicy,
    /// Routine used for the optimisation phase.
    pub optimise_routine: OptimiseRoutine,
    /// Routine used for the refinement phase.
    pub refine_routine: OptimiseRoutine,
    /// If `true`, refine the partition before aggregating. Without
    /// refinement the procedure reduces to the Louvain algorithm with a
    /// fast local move.
    pub refine_partition: bool,
    /// If `true`, moving a vertex into a new, empty community is also
    /// evaluated, which allows communities to split.
    pub consider_empty_community: bool,
    /// Maximal total node size of a community; 0 means unconstrained.
    pub max_comm_size: usize,
    rng: ChaCha20Rng,
}

impl Default for Optimiser {
    fn default() -> Optimiser {
        Optimiser::new()
    }
}

impl Optimiser {
    /// Creates an `Optimiser` with the default Leiden settings and an
    /// entropy-seeded random number generator.
    pub fn new() -> Optimiser {
        Optimiser {
            consider_comms: ConsiderPolicy::AllNeighComms,
            refine_consider_comms: ConsiderPolicy::AllNeighComms,
            optimise_routine: OptimiseRoutine::MoveNodes,
            refine_routine: OptimiseRoutine::MergeNodes,
            refine_partition: true,
            consider_empty_community: true,
            max_comm_size: 0,
            rng: utility::get_rng(None),
        }
    }

    /// Reseeds the random number generator.
    pub fn set_rng_seed(&mut self, seed: u64) {
        self.rng = utility::get_rng(Some(seed));
    }

    /// Sets the maximal community size, rejecting negative values.
    pub fn set_max_comm_size(&mut self, value: i64) -> Result<(), Error> {
        if value < 0 {
            return Err(Error {
                kind: ErrorKind::InvalidConfig,
                message: format!("negative max_comm_size: {}", value),
            });
        }
        self.max_comm_size = value as usize;
        Ok(())
    }

    /**
    Optimises the partition by running the Leiden algorithm for
    `n_iterations` iterations; a negative count keeps iterating until an
    iteration brings no improvement. Vertexes flagged in
    `is_membership_fixed` never change community. Returns the total
    improvement in the quality function.

    Inputs are validated up front; on error the partition is left exactly
    as it was.
    */
    pub fn optimise_partition(
        &mut self,
        partition: &mut VertexPartition,
        n_iterations: i32,
        is_membership_fixed: Option<&[bool]>,
    ) -> Result<f64, Error> {
        self.optimise_partition_multiplex(
            std::slice::from_mut(partition),
            None,
            n_iterations,
            is_membership_fixed,
        )
    }

    /**
    Optimises several partitions over a shared vertex set simultaneously,
    maximising `Σ_k λ_k · Q_k` for the given layer weights (1 for every
    layer by default; negative weights are allowed). All partitions must
    start from the same membership; every accepted move is applied to every
    layer, so they remain identical throughout.

    With one layer holding only the positive edges of a signed graph at
    weight 1 and another holding only the negative edges at weight -1, this
    finds communities with many positive links inside and many negative
    links between them; `consider_comms` is then best set to
    [AllComms](./enum.ConsiderPolicy.html).
    */
    pub fn optimise_partition_multiplex(
        &mut self,
        partitions: &mut [VertexPartition],
        layer_weights: Option<&[f64]>,
        n_iterations: i32,
        is_membership_fixed: Option<&[bool]>,
    ) -> Result<f64, Error> {
        let default_weights;
        let weights: &[f64] = match layer_weights {
            Some(w) => w,
            None => {
                default_weights = vec![1.0; partitions.len()];
                default_weights.as_slice()
            }
        };
        check_layers(partitions, weights, is_membership_fixed)?;
        let initial_membership = partitions[0].membership().to_vec();
        let mut total_diff = 0.0;
        let mut iteration = 0;
        loop {
            if n_iterations >= 0 && iteration >= n_iterations {
                break;
            }
            let diff = self.optimise_level_stack(partitions, weights, is_membership_fixed)?;
            total_diff += diff;
            iteration += 1;
            if n_iterations < 0 && diff <= 0.0 {
                break;
            }
        }
        if iteration > 0 {
            match is_membership_fixed {
                Some(fixed) if fixed.iter().any(|&f| f) => {
                    restore_fixed_labels(partitions, fixed, &initial_membership)?;
                }
                _ => renumber_layers(partitions)?,
            }
        }
        Ok(total_diff)
    }

    /**
    Moves vertexes between communities as long as any move improves the
    quality function. Vertexes are processed from a randomised queue;
    whenever a vertex moves, its neighbours outside the new community
    re-enter the queue. Returns the accumulated improvement; finding no
    improving move is not an error and simply returns 0.

    `consider_comms` overrides the optimiser's policy for this call.
    */
    pub fn move_nodes(
        &mut self,
        partition: &mut VertexPartition,
        is_membership_fixed: Option<&[bool]>,
        consider_comms: Option<ConsiderPolicy>,
    ) -> Result<f64, Error> {
        let consider = consider_comms.unwrap_or(self.consider_comms);
        self.move_nodes_internal(
            std::slice::from_mut(partition),
            &[1.0],
            is_membership_fixed,
            consider,
            None,
        )
    }

    /// [move_nodes](#method.move_nodes) restricted so that no move crosses
    /// a community boundary of `constrained_partition`. Used to refine a
    /// partition: start from singletons and move within the communities of
    /// the partition being refined.
    pub fn move_nodes_constrained(
        &mut self,
        partition: &mut VertexPartition,
        constrained_partition: &VertexPartition,
        consider_comms: Option<ConsiderPolicy>,
    ) -> Result<f64, Error> {
        let consider = consider_comms.unwrap_or(self.refine_consider_comms);
        self.move_nodes_internal(
            std::slice::from_mut(partition),
            &[1.0],
            None,
            consider,
            Some(constrained_partition),
        )
    }

    /**
    A single randomised pass over the vertexes in which each vertex still
    alone in its community may merge into another community. Communities
    only ever grow, so a merge is never undone within the pass.
    */
    pub fn merge_nodes(
        &mut self,
        partition: &mut VertexPartition,
        is_membership_fixed: Option<&[bool]>,
        consider_comms: Option<ConsiderPolicy>,
    ) -> Result<f64, Error> {
        let consider = consider_comms.unwrap_or(self.consider_comms);
        self.merge_nodes_internal(
            std::slice::from_mut(partition),
            &[1.0],
            is_membership_fixed,
            consider,
            None,
        )
    }

    /// [merge_nodes](#method.merge_nodes) restricted to the community
    /// boundaries of `constrained_partition`.
    pub fn merge_nodes_constrained(
        &mut self,
        partition: &mut VertexPartition,
        constrained_partition: &VertexPartition,
        consider_comms: Option<ConsiderPolicy>,
    ) -> Result<f64, Error> {
        let consider = consider_comms.unwrap_or(self.refine_consider_comms);
        self.merge_nodes_internal(
            std::slice::from_mut(partition),
            &[1.0],
            None,
            consider,
            Some(constrained_partition),
        )
    }

    /// One full pass of the Leiden level loop: local move, propagation to
    /// the original partitions, optional refinement, aggregation; repeated
    /// until aggregation no longer shrinks the graph.
    fn optimise_level_stack(
        &mut self,
        partitions: &mut [VertexPartition],
        layer_weights: &[f64],
        is_fixed: Option<&[bool]>,
    ) -> Result<f64, Error> {
        let n = partitions[0].graph().vcount();
        let n_layers = partitions.len();
        let mut level: Vec<VertexPartition> = partitions.to_vec();
        let mut aggregate_node: Vec<usize> = (0..n).collect();
        let mut level_fixed: Option<Vec<bool>> = is_fixed.map(|f| f.to_vec());
        let mut total_diff = 0.0;
        loop {
            let n_level = level[0].graph().vcount();
            let diff = match self.optimise_routine {
                OptimiseRoutine::MoveNodes => self.move_nodes_internal(
                    &mut level,
                    layer_weights,
                    level_fixed.as_deref(),
                    self.consider_comms,
                    None,
                )?,
                OptimiseRoutine::MergeNodes => self.merge_nodes_internal(
                    &mut level,
                    layer_weights,
                    level_fixed.as_deref(),
                    self.consider_comms,
                    None,
                )?,
            };
            total_diff += diff;
            renumber_layers(&mut level)?;
            for k in 0..n_layers {
                partitions[k].from_coarse_partition(&level[k], Some(&aggregate_node))?;
            }
            // build the next, coarser level
            let coarsening: Vec<usize>;
            let n_coarse: usize;
            let next: Vec<VertexPartition>;
            if self.refine_partition {
                let mut refinement: Vec<VertexPartition> = level
                    .iter()
                    .map(|p| {
                        VertexPartition::from_parts(
                            Arc::clone(p.graph()),
                            *p.quality_function(),
                            (0..n_level).collect(),
                        )
                    })
                    .collect();
                match self.refine_routine {
                    OptimiseRoutine::MoveNodes => self.move_nodes_internal(
                        &mut refinement,
                        layer_weights,
                        None,
                        self.refine_consider_comms,
                        Some(&level[0]),
                    )?,
                    OptimiseRoutine::MergeNodes => self.merge_nodes_internal(
                        &mut refinement,
                        layer_weights,
                        None,
                        self.refine_consider_comms,
                        Some(&level[0]),
                    )?,
                };
                renumber_layers(&mut refinement)?;
                n_coarse = refinement[0].n_communities();
                if n_coarse == n_level {
                    break;
                }
                coarsening = refinement[0].membership().to_vec();
                // an aggregated vertex inherits the community its members
                // currently belong to
                let mut coarse_membership = vec![0usize; n_coarse];
                for v in 0..n_level {
                    coarse_membership[coarsening[v]] = level[0].membership()[v];
                }
                next = (0..n_layers)
                    .map(|k| {
                        let graph = level[k].graph().collapse(&coarsening, n_coarse);
                        VertexPartition::from_parts(
                            Arc::new(graph),
                            *level[k].quality_function(),
                            coarse_membership.clone(),
                        )
                    })
                    .collect();
            } else {
                n_coarse = level[0].n_communities();
                if n_coarse == n_level {
                    break;
                }
                coarsening = level[0].membership().to_vec();
                next = (0..n_layers)
                    .map(|k| {
                        let graph = level[k].graph().collapse(&coarsening, n_coarse);
                        VertexPartition::from_parts(
                            Arc::new(graph),
                            *level[k].quality_function(),
                            (0..n_coarse).collect(),
                        )
                    })
                    .collect();
            }
            for entry in aggregate_node.iter_mut() {
                *entry = coarsening[*entry];
            }
            level_fixed = is_fixed.map(|fixed| {
                let mut lf = vec![false; n_coarse];
                for v in 0..n {
                    if fixed[v] {
                        lf[aggregate_node[v]] = true;
                    }
                }
                lf
            });
            level = next;
        }
        Ok(total_diff)
    }

    fn move_nodes_internal(
        &mut self,
        partitions: &mut [VertexPartition],
        layer_weights: &[f64],
        is_fixed: Option<&[bool]>,
        consider: ConsiderPolicy,
        constrained: Option<&VertexPartition>,
    ) -> Result<f64, Error> {
        check_layers(partitions, layer_weights, is_fixed)?;
        let n = partitions[0].graph().vcount();
        let n_layers = partitions.len();
        let constrained_groups = constrained.map(group_by_community);
        let mut total_diff = 0.0;
        let mut in_queue = vec![false; n];
        let mut queue: VecDeque<usize> = utility::get_shuffled_vertex_order(n, &mut self.rng)
            .into_iter()
            .filter(|&v| !fixed_at(is_fixed, v))
            .collect();
        for &v in &queue {
            in_queue[v] = true;
        }
        while let Some(v) = queue.pop_front() {
            in_queue[v] = false;
            let old_comm = partitions[0].membership()[v];
            let mut candidates = candidate_communities(
                &mut self.rng,
                v,
                partitions,
                layer_weights,
                consider,
                constrained_context(constrained, &constrained_groups),
            );
            if self.consider_empty_community && partitions[0].count_at(old_comm) > 1 {
                if let Some(empty) = empty_candidate(&partitions[0]) {
                    if !candidates.contains(&empty) {
                        candidates.push(empty);
                    }
                }
            }
            let mut best_comm = old_comm;
            let mut best_diff = 0.0;
            for &comm in &candidates {
                if comm == old_comm {
                    continue;
                }
                if self.exceeds_max_comm_size(partitions, v, comm) {
                    continue;
                }
                let mut diff = 0.0;
                for k in 0..n_layers {
                    diff += layer_weights[k] * partitions[k].diff_move(v, comm)?;
                }
                if diff > best_diff {
                    best_diff = diff;
                    best_comm = comm;
                }
            }
            if best_diff > 0.0 && best_comm != old_comm {
                for k in 0..n_layers {
                    partitions[k].move_node(v, best_comm)?;
                }
                total_diff += best_diff;
                // any neighbour outside the new community may now have a
                // better move available
                for k in 0..n_layers {
                    let graph = Arc::clone(partitions[k].graph());
                    for nb in graph.out_neighbours(v) {
                        maybe_enqueue(nb.node, best_comm, partitions, is_fixed, &mut queue, &mut in_queue);
                    }
                    if graph.is_directed() {
                        for nb in graph.in_neighbours(v) {
                            maybe_enqueue(nb.node, best_comm, partitions, is_fixed, &mut queue, &mut in_queue);
                        }
                    }
                }
            }
        }
        Ok(total_diff)
    }

    fn merge_nodes_internal(
        &mut self,
        partitions: &mut [VertexPartition],
        layer_weights: &[f64],
        is_fixed: Option<&[bool]>,
        consider: ConsiderPolicy,
        constrained: Option<&VertexPartition>,
    ) -> Result<f64, Error> {
        check_layers(partitions, layer_weights, is_fixed)?;
        let n = partitions[0].graph().vcount();
        let n_layers = partitions.len();
        let constrained_groups = constrained.map(group_by_community);
        let mut total_diff = 0.0;
        for v in utility::get_shuffled_vertex_order(n, &mut self.rng) {
            if fixed_at(is_fixed, v) {
                continue;
            }
            let old_comm = partitions[0].membership()[v];
            // a vertex that is no longer alone has been merged already;
            // moving it would split its community
            if partitions[0].count_at(old_comm) != 1 {
                continue;
            }
            let candidates = candidate_communities(
                &mut self.rng,
                v,
                partitions,
                layer_weights,
                consider,
                constrained_context(constrained, &constrained_groups),
            );
            let mut best_comm = old_comm;
            let mut best_diff = 0.0;
            for &comm in &candidates {
                if comm == old_comm {
                    continue;
                }
                if self.exceeds_max_comm_size(partitions, v, comm) {
                    continue;
                }
                let mut diff = 0.0;
                for k in 0..n_layers {
                    diff += layer_weights[k] * partitions[k].diff_move(v, comm)?;
                }
                if diff > best_diff {
                    best_diff = diff;
                    best_comm = comm;
                }
            }
            if best_diff > 0.0 && best_comm != old_comm {
                for k in 0..n_layers {
                    partitions[k].move_node(v, best_comm)?;
                }
                total_diff += best_diff;
            }
        }
        Ok(total_diff)
    }

    fn exceeds_max_comm_size(&self, partitions: &[VertexPartition], v: usize, comm: usize) -> bool {
        if self.max_comm_size == 0 {
            return false;
        }
        partitions
            .iter()
            .any(|p| p.size_at(comm) + p.graph().node_size(v) > self.max_comm_size)
    }
}

fn fixed_at(is_fixed: Option<&[bool]>, v: usize) -> bool {
    match is_fixed {
        Some(fixed) => fixed[v],
        None => false,
    }
}

fn maybe_enqueue(
    u: usize,
    new_comm: usize,
    partitions: &[VertexPartition],
    is_fixed: Option<&[bool]>,
    queue: &mut VecDeque<usize>,
    in_queue: &mut [bool],
) {
    if !in_queue[u] && !fixed_at(is_fixed, u) && partitions[0].membership()[u] != new_comm {
        queue.push_back(u);
        in_queue[u] = true;
    }
}

fn empty_candidate(partition: &VertexPartition) -> Option<usize> {
    match partition.first_empty_community() {
        Some(comm) => Some(comm),
        None => {
            let slots = partition.n_communities();
            match slots < partition.graph().vcount() {
                true => Some(slots),
                false => None,
            }
        }
    }
}

fn group_by_community(constrained: &VertexPartition) -> Vec<Vec<usize>> {
    let mut groups = vec![vec![]; constrained.n_communities()];
    for (v, &comm) in constrained.membership().iter().enumerate() {
        groups[comm].push(v);
    }
    groups
}

fn constrained_context<'a>(
    constrained: Option<&'a VertexPartition>,
    groups: &'a Option<Vec<Vec<usize>>>,
) -> Option<(&'a VertexPartition, &'a [Vec<usize>])> {
    match (constrained, groups) {
        (Some(partition), Some(groups)) => Some((partition, groups.as_slice())),
        _ => None,
    }
}

/// Enumerates the communities vertex `v` is evaluated against, following
/// the `consider` policy, across all layers. With a constraining partition,
/// only communities inside `v`'s constrained community qualify.
fn candidate_communities(
    rng: &mut ChaCha20Rng,
    v: usize,
    partitions: &[VertexPartition],
    layer_weights: &[f64],
    consider: ConsiderPolicy,
    constrained: Option<(&VertexPartition, &[Vec<usize>])>,
) -> Vec<usize> {
    let membership = partitions[0].membership();
    match consider {
        ConsiderPolicy::AllComms => match constrained {
            None => (0..partitions[0].n_communities())
                .filter(|&comm| partitions[0].count_at(comm) > 0)
                .collect(),
            Some((constraining, groups)) => {
                let mut comms = distinct_comms_in_group(membership, &groups[constraining.membership()[v]]);
                comms.sort_unstable();
                comms
            }
        },
        ConsiderPolicy::AllNeighComms => {
            let mut set = IntSet::default();
            set.insert(membership[v]);
            for partition in partitions {
                let graph = partition.graph();
                for nb in graph.out_neighbours(v) {
                    if allowed(constrained, v, nb.node) {
                        set.insert(membership[nb.node]);
                    }
                }
                if graph.is_directed() {
                    for nb in graph.in_neighbours(v) {
                        if allowed(constrained, v, nb.node) {
                            set.insert(membership[nb.node]);
                        }
                    }
                }
            }
            let mut comms: Vec<usize> = set.into_iter().collect();
            comms.sort_unstable();
            comms
        }
        ConsiderPolicy::RandComm => {
            let comms = match constrained {
                None => (0..partitions[0].n_communities())
                    .filter(|&comm| partitions[0].count_at(comm) > 0)
                    .collect::<Vec<usize>>(),
                Some((constraining, groups)) => {
                    let mut comms =
                        distinct_comms_in_group(membership, &groups[constraining.membership()[v]]);
                    comms.sort_unstable();
                    comms
                }
            };
            match comms.is_empty() {
                true => vec![membership[v]],
                false => vec![comms[rng.gen_range(0..comms.len())]],
            }
        }
        ConsiderPolicy::RandNeighComm => {
            let mut weight_map = IntMap::<usize, f64>::default();
            for (k, partition) in partitions.iter().enumerate() {
                let layer_weight = layer_weights[k].abs();
                if layer_weight == 0.0 {
                    continue;
                }
                let graph = partition.graph();
                for nb in graph.out_neighbours(v) {
                    if allowed(constrained, v, nb.node) {
                        *weight_map.entry(membership[nb.node]).or_insert(0.0) +=
                            layer_weight * nb.weight.abs();
                    }
                }
                if graph.is_directed() {
                    for nb in graph.in_neighbours(v) {
                        if allowed(constrained, v, nb.node) {
                            *weight_map.entry(membership[nb.node]).or_insert(0.0) +=
                                layer_weight * nb.weight.abs();
                        }
                    }
                }
            }
            let mut entries: Vec<(usize, f64)> = weight_map
                .into_iter()
                .filter(|&(_comm, weight)| weight > 0.0)
                .collect();
            entries.sort_unstable_by(|a, b| a.0.cmp(&b.0));
            if entries.is_empty() {
                return vec![membership[v]];
            }
            let weights: Vec<f64> = entries.iter().map(|&(_comm, weight)| weight).collect();
            match WeightedIndex::new(&weights) {
                Ok(dist) => vec![entries[dist.sample(rng)].0],
                Err(_) => vec![membership[v]],
            }
        }
    }
}

fn allowed(constrained: Option<(&VertexPartition, &[Vec<usize>])>, v: usize, u: usize) -> bool {
    match constrained {
        Some((constraining, _groups)) => {
            constraining.membership()[u] == constraining.membership()[v]
        }
        None => true,
    }
}

fn distinct_comms_in_group(membership: &[usize], group: &[usize]) -> Vec<usize> {
    let mut set = IntSet::default();
    for &u in group {
        set.insert(membership[u]);
    }
    set.into_iter().collect()
}

/// Renumbers communities like [renumber_layers](./fn.renumber_layers.html)
/// but keeps every fixed vertex on the community id it started with, so
/// that a fixed membership is fixed in value, not merely in grouping.
fn restore_fixed_labels(
    partitions: &mut [VertexPartition],
    fixed: &[bool],
    initial_membership: &[usize],
) -> Result<(), Error> {
    let renumbered = partitions[0].renumbered_membership();
    let n = renumbered.len();
    let slots = match renumbered.iter().max() {
        Some(&m) => m + 1,
        None => 0,
    };
    let mut relabel: Vec<Option<usize>> = vec![None; slots];
    let mut used = vec![false; n];
    for v in 0..n {
        if fixed[v] {
            relabel[renumbered[v]] = Some(initial_membership[v]);
            used[initial_membership[v]] = true;
        }
    }
    let mut next_free = 0;
    for slot in 0..slots {
        if relabel[slot].is_none() {
            while used[next_free] {
                next_free += 1;
            }
            relabel[slot] = Some(next_free);
            used[next_free] = true;
        }
    }
    let membership: Vec<usize> = renumbered
        .iter()
        .map(|&comm| relabel[comm].expect("every community was relabelled"))
        .collect();
    for layer in partitions.iter_mut() {
        layer.set_membership(&membership)?;
    }
    Ok(())
}

/// Renumbers every layer with the relabelling computed on the first layer,
/// so that shared membership stays shared.
fn renumber_layers(layers: &mut [VertexPartition]) -> Result<(), Error> {
    let renumbered = layers[0].renumbered_membership();
    for layer in layers.iter_mut() {
        layer.set_membership(&renumbered)?;
    }
    Ok(())
}

fn check_layers(
    partitions: &[VertexPartition],
    layer_weights: &[f64],
    is_fixed: Option<&[bool]>,
) -> Result<(), Error> {
    if partitions.is_empty() {
        return Err(Error {
            kind: ErrorKind::InvalidInput,
            message: "At least one partition is required.".to_string(),
        });
    }
    let n = partitions[0].graph().vcount();
    for partition in partitions.iter().skip(1) {
        if partition.graph().vcount() != n {
            return Err(Error {
                kind: ErrorKind::InvalidInput,
                message: "All layers must share the same vertex set.".to_string(),
            });
        }
        if partition.membership() != partitions[0].membership() {
            return Err(Error {
                kind: ErrorKind::InvalidInput,
                message: "All layers must start from an identical membership.".to_string(),
            });
        }
    }
    if layer_weights.len() != partitions.len() {
        return Err(Error {
            kind: ErrorKind::InvalidInput,
            message: format!(
                "{} layer weights were specified for {} layers.",
                layer_weights.len(),
                partitions.len()
            ),
        });
    }
    if let Some(fixed) = is_fixed {
        if fixed.len() != n {
            return Err(Error {
                kind: ErrorKind::InvalidInput,
                message: format!(
                    "is_membership_fixed has {} entries for a graph of {} vertexes.",
                    fixed.len(),
                    n
                ),
            });
        }
    }
    Ok(())
}
