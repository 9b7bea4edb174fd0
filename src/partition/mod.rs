use crate::graph::Graph;
use crate::{Error, ErrorKind};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

mod cpm;
mod modularity;
mod rb_configuration;
mod rber;
mod significance;
mod surprise;

/**
The quality function a [VertexPartition](./struct.VertexPartition.html)
maximises. Resolution parameters belong to the variants that have one, so a
resolution cannot be configured where the quality function does not define
it.

* `Modularity`: the classical Newman-Girvan quality function; positive edge
  weights only.
* `CPM`: the Constant Potts Model; the only variant that accepts negative
  edge weights.
* `RBConfiguration`: the Reichardt-Bornholdt Potts model with a
  configuration null model; equal to modularity up to normalisation when
  the resolution is 1.
* `RBER`: the Reichardt-Bornholdt Potts model with an Erdős–Rényi null
  model.
* `Surprise`: asymptotic Surprise.
* `Significance`: only defined for unweighted graphs.
*/
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum QualityFunction {
    Modularity,
    CPM { resolution: f64 },
    RBConfiguration { resolution: f64 },
    RBER { resolution: f64 },
    Surprise,
    Significance,
}

impl QualityFunction {
    /// The resolution parameter, for the variants that carry one.
    pub fn resolution(&self) -> Option<f64> {
        match self {
            QualityFunction::CPM { resolution }
            | QualityFunction::RBConfiguration { resolution }
            | QualityFunction::RBER { resolution } => Some(*resolution),
            _ => None,
        }
    }

    /// `true` for the variants with a linear resolution parameter.
    pub fn supports_resolution(&self) -> bool {
        self.resolution().is_some()
    }

    /// Returns the same variant with the resolution replaced.
    pub fn with_resolution(&self, resolution: f64) -> Result<QualityFunction, Error> {
        match self {
            QualityFunction::CPM { .. } => Ok(QualityFunction::CPM { resolution }),
            QualityFunction::RBConfiguration { .. } => {
                Ok(QualityFunction::RBConfiguration { resolution })
            }
            QualityFunction::RBER { .. } => Ok(QualityFunction::RBER { resolution }),
            _ => Err(Error {
                kind: ErrorKind::InvalidConfig,
                message: format!("{:?} has no resolution parameter.", self),
            }),
        }
    }
}

/**
A mutable partition of a graph's vertexes into communities, together with
the bookkeeping needed to evaluate a quality function incrementally.

For every community the partition tracks the internal edge weight, the
summed in- and out-strengths of its members, its total node size and its
vertex count. [move_node](#method.move_node) keeps these up to date in time
proportional to the degree of the moved vertex, and
[diff_move](#method.diff_move) evaluates the change in quality a move
*would* cause without performing it:

```
use leidenrs::{Graph, QualityFunction, VertexPartition};
use std::sync::Arc;

let graph = Arc::new(Graph::from_edges(3, false, &[(0, 1, 1.0), (1, 2, 1.0)]).unwrap());
let mut partition =
    VertexPartition::new(&graph, QualityFunction::CPM { resolution: 0.5 }).unwrap();
let diff = partition.diff_move(0, 1).unwrap();
let before = partition.quality();
partition.move_node(0, 1).unwrap();
assert!((partition.quality() - before - diff).abs() < 1e-12);
```

Communities that become empty keep their slot until
[renumber_communities](#method.renumber_communities) is called, so community
ids are stable within a sweep of moves.
*/
#[derive(Debug, Clone)]
pub struct VertexPartition {
    graph: Arc<Graph>,
    quality_function: QualityFunction,
    membership: Vec<usize>,
    total_weight_in: Vec<f64>,
    total_weight_from: Vec<f64>,
    total_weight_to: Vec<f64>,
    community_sizes: Vec<usize>,
    community_counts: Vec<usize>,
    total_weight_in_all: f64,
    total_possible_edges_in_all: f64,
    // per-move scratch: weight from the vertex under evaluation to and from
    // each touched community, cleared in O(|touched|)
    scratch_to: Vec<f64>,
    scratch_from: Vec<f64>,
    scratch_seen: Vec<bool>,
    scratch_touched: Vec<usize>,
    scratch_vertex: Option<usize>,
}

impl VertexPartition {
    /**
    Creates the singleton partition on `graph`: every vertex in its own
    community.

    # Arguments

    * `graph`: the graph to partition
    * `quality_function`: the quality function to maximise

    # Examples

    ```
    use leidenrs::{Graph, QualityFunction, VertexPartition};
    use std::sync::Arc;
    let graph = Arc::new(Graph::from_edges(4, false, &[(0, 1, 1.0)]).unwrap());
    let partition = VertexPartition::new(&graph, QualityFunction::Modularity).unwrap();
    assert_eq!(partition.membership(), &[0, 1, 2, 3]);
    ```
    */
    pub fn new(graph: &Arc<Graph>, quality_function: QualityFunction) -> Result<VertexPartition, Error> {
        let membership: Vec<usize> = (0..graph.vcount()).collect();
        VertexPartition::with_membership(graph, quality_function, &membership)
    }

    /**
    Creates a partition with an explicit initial membership. Membership
    values must lie in `[0, n)`; they need not be contiguous.
    */
    pub fn with_membership(
        graph: &Arc<Graph>,
        quality_function: QualityFunction,
        membership: &[usize],
    ) -> Result<VertexPartition, Error> {
        validate_quality_function(graph, &quality_function)?;
        validate_membership(graph, membership)?;
        Ok(VertexPartition::from_parts(
            Arc::clone(graph),
            quality_function,
            membership.to_vec(),
        ))
    }

    /// Builds a partition without re-validating edge weights. Aggregate
    /// graphs carry summed weights that would fail the public unweighted
    /// check for Significance, yet remain valid internally.
    pub(crate) fn from_parts(
        graph: Arc<Graph>,
        quality_function: QualityFunction,
        membership: Vec<usize>,
    ) -> VertexPartition {
        let mut partition = VertexPartition {
            graph,
            quality_function,
            membership,
            total_weight_in: vec![],
            total_weight_from: vec![],
            total_weight_to: vec![],
            community_sizes: vec![],
            community_counts: vec![],
            total_weight_in_all: 0.0,
            total_possible_edges_in_all: 0.0,
            scratch_to: vec![],
            scratch_from: vec![],
            scratch_seen: vec![],
            scratch_touched: vec![],
            scratch_vertex: None,
        };
        partition.init_admin();
        partition
    }

    /// The graph the partition is defined on.
    pub fn graph(&self) -> &Arc<Graph> {
        &self.graph
    }

    /// The quality function the partition is evaluated with.
    pub fn quality_function(&self) -> &QualityFunction {
        &self.quality_function
    }

    /// The community of every vertex.
    pub fn membership(&self) -> &[usize] {
        &self.membership
    }

    /// The number of community slots, including any that are currently
    /// empty. Dense and all non-empty directly after
    /// [renumber_communities](#method.renumber_communities).
    pub fn n_communities(&self) -> usize {
        self.community_sizes.len()
    }

    /// The number of communities that have at least one member.
    pub fn n_nonempty_communities(&self) -> usize {
        self.community_counts.iter().filter(|&&c| c > 0).count()
    }

    /// The total node size of community `comm`.
    pub fn community_size(&self, comm: usize) -> Result<usize, Error> {
        self.check_community(comm)?;
        Ok(self.community_sizes[comm])
    }

    /// The number of vertexes assigned to community `comm`.
    pub fn community_count(&self, comm: usize) -> Result<usize, Error> {
        self.check_community(comm)?;
        Ok(self.community_counts[comm])
    }

    /// The total weight of the edges with both endpoints in `comm`.
    pub fn total_weight_in_comm(&self, comm: usize) -> Result<f64, Error> {
        self.check_community(comm)?;
        Ok(self.total_weight_in[comm])
    }

    /// The summed out-strength of the members of `comm`. Includes edges
    /// internal to the community.
    pub fn total_weight_from_comm(&self, comm: usize) -> Result<f64, Error> {
        self.check_community(comm)?;
        Ok(self.total_weight_from[comm])
    }

    /// The summed in-strength of the members of `comm`. Includes edges
    /// internal to the community.
    pub fn total_weight_to_comm(&self, comm: usize) -> Result<f64, Error> {
        self.check_community(comm)?;
        Ok(self.total_weight_to[comm])
    }

    /// The total weight inside all communities; the sum of
    /// [total_weight_in_comm](#method.total_weight_in_comm) over all
    /// communities.
    pub fn total_weight_in_all_comms(&self) -> f64 {
        self.total_weight_in_all
    }

    /// The number of edges that could exist inside the current communities,
    /// summed over communities.
    pub fn total_possible_edges_in_all_comms(&self) -> f64 {
        self.total_possible_edges_in_all
    }

    /// The weight of the edges from vertex `v` to community `comm`,
    /// excluding any self-loop on `v`.
    pub fn weight_to_comm(&self, v: usize, comm: usize) -> Result<f64, Error> {
        self.graph.check_vertex(v)?;
        self.check_community(comm)?;
        Ok(self
            .graph
            .out_neighbours(v)
            .iter()
            .filter(|nb| self.membership[nb.node] == comm)
            .map(|nb| nb.weight)
            .sum())
    }

    /// The weight of the edges from community `comm` to vertex `v`,
    /// excluding any self-loop on `v`.
    pub fn weight_from_comm(&self, v: usize, comm: usize) -> Result<f64, Error> {
        self.graph.check_vertex(v)?;
        self.check_community(comm)?;
        Ok(self
            .graph
            .in_neighbours(v)
            .iter()
            .filter(|nb| self.membership[nb.node] == comm)
            .map(|nb| nb.weight)
            .sum())
    }

    /// The value bisectioning on a resolution parameter operates on: the
    /// total weight inside all communities. Two partitions with the same
    /// bisect value are optimal on the same side of a resolution plateau.
    pub fn bisect_value(&self) -> f64 {
        self.total_weight_in_all
    }

    /// The resolution parameter, for quality functions that carry one.
    pub fn resolution_parameter(&self) -> Option<f64> {
        self.quality_function.resolution()
    }

    /// Replaces the resolution parameter. Fails with `InvalidConfig` for
    /// quality functions without one.
    pub fn set_resolution_parameter(&mut self, resolution: f64) -> Result<(), Error> {
        self.quality_function = self.quality_function.with_resolution(resolution)?;
        Ok(())
    }

    /// The current value of the quality function.
    pub fn quality(&self) -> f64 {
        match self.quality_function {
            QualityFunction::Modularity => modularity::quality(self),
            QualityFunction::CPM { resolution } => cpm::quality(self, resolution),
            QualityFunction::RBConfiguration { resolution } => {
                rb_configuration::quality(self, resolution)
            }
            QualityFunction::RBER { resolution } => rber::quality(self, resolution),
            QualityFunction::Surprise => surprise::quality(self),
            QualityFunction::Significance => significance::quality(self),
        }
    }

    /// Evaluates the partition at a different resolution without changing
    /// the stored parameter. Fails with `InvalidConfig` for quality
    /// functions without a resolution parameter.
    pub fn quality_with_resolution(&self, resolution: f64) -> Result<f64, Error> {
        match self.quality_function.with_resolution(resolution)? {
            QualityFunction::CPM { resolution } => Ok(cpm::quality(self, resolution)),
            QualityFunction::RBConfiguration { resolution } => {
                Ok(rb_configuration::quality(self, resolution))
            }
            QualityFunction::RBER { resolution } => Ok(rber::quality(self, resolution)),
            _ => unreachable!(),
        }
    }

    /**
    The change in quality that [move_node](#method.move_node) with the same
    arguments would cause. Moving a vertex to its current community yields
    0. `new_comm` may be one past the highest community slot, denoting a
    new, empty community.
    */
    pub fn diff_move(&mut self, v: usize, new_comm: usize) -> Result<f64, Error> {
        self.graph.check_vertex(v)?;
        self.check_target_community(new_comm)?;
        let old_comm = self.membership[v];
        if new_comm == old_comm {
            return Ok(0.0);
        }
        self.ensure_scratch(v);
        Ok(match self.quality_function {
            QualityFunction::Modularity => modularity::diff_move(self, v, old_comm, new_comm),
            QualityFunction::CPM { resolution } => {
                cpm::diff_move(self, v, old_comm, new_comm, resolution)
            }
            QualityFunction::RBConfiguration { resolution } => {
                rb_configuration::diff_move(self, v, old_comm, new_comm, resolution)
            }
            QualityFunction::RBER { resolution } => {
                rber::diff_move(self, v, old_comm, new_comm, resolution)
            }
            QualityFunction::Surprise => surprise::diff_move(self, v, old_comm, new_comm),
            QualityFunction::Significance => significance::diff_move(self, v, old_comm, new_comm),
        })
    }

    /**
    Moves vertex `v` to community `new_comm`, updating all community
    statistics. `new_comm` may be one past the highest community slot, in
    which case a new community is created.
    */
    pub fn move_node(&mut self, v: usize, new_comm: usize) -> Result<(), Error> {
        self.graph.check_vertex(v)?;
        self.check_target_community(new_comm)?;
        let old_comm = self.membership[v];
        if new_comm == old_comm {
            return Ok(());
        }
        self.ensure_scratch(v);
        let (w_removed, w_added) = self.weight_in_deltas(old_comm, new_comm);
        if new_comm == self.community_sizes.len() {
            self.push_empty_slot();
        }
        let graph = Arc::clone(&self.graph);
        let sigma = graph.node_size(v);
        let pe_before = graph.possible_edges_of(self.community_sizes[old_comm])
            + graph.possible_edges_of(self.community_sizes[new_comm]);
        self.total_weight_in[old_comm] -= w_removed;
        self.total_weight_in[new_comm] += w_added;
        self.total_weight_in_all += w_added - w_removed;
        self.total_weight_from[old_comm] -= graph.strength_out(v);
        self.total_weight_from[new_comm] += graph.strength_out(v);
        self.total_weight_to[old_comm] -= graph.strength_in(v);
        self.total_weight_to[new_comm] += graph.strength_in(v);
        self.community_sizes[old_comm] -= sigma;
        self.community_sizes[new_comm] += sigma;
        self.community_counts[old_comm] -= 1;
        self.community_counts[new_comm] += 1;
        let pe_after = graph.possible_edges_of(self.community_sizes[old_comm])
            + graph.possible_edges_of(self.community_sizes[new_comm]);
        self.total_possible_edges_in_all += pe_after - pe_before;
        self.membership[v] = new_comm;
        self.scratch_vertex = None;
        debug_assert!(self.statistics_match_recomputation());
        Ok(())
    }

    /// Replaces the whole membership vector and recomputes all statistics.
    pub fn set_membership(&mut self, membership: &[usize]) -> Result<(), Error> {
        validate_membership(&self.graph, membership)?;
        self.membership = membership.to_vec();
        self.init_admin();
        Ok(())
    }

    /**
    Renumbers the communities by decreasing total node size, dropping empty
    slots. Equal sizes are ordered by their old community id, so the
    renumbering is deterministic, though not stable in the sorting sense.
    */
    pub fn renumber_communities(&mut self) {
        self.membership = self.renumbered_membership();
        self.init_admin();
    }

    /// The membership as it would be after
    /// [renumber_communities](#method.renumber_communities), leaving the
    /// partition untouched.
    pub(crate) fn renumbered_membership(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.community_sizes.len())
            .filter(|&c| self.community_counts[c] > 0)
            .collect();
        order.sort_unstable_by(|&a, &b| {
            self.community_sizes[b]
                .cmp(&self.community_sizes[a])
                .then(a.cmp(&b))
        });
        let mut relabel = vec![usize::MAX; self.community_sizes.len()];
        for (new_comm, &old_comm) in order.iter().enumerate() {
            relabel[old_comm] = new_comm;
        }
        self.membership.iter().map(|&c| relabel[c]).collect()
    }

    /**
    Aggregates the graph according to the current partition: every
    non-empty community becomes one vertex (ordered by decreasing size, as
    in [renumber_communities](#method.renumber_communities)) and the
    returned partition is the singleton partition on the aggregate graph.
    The quality of the returned partition equals the quality of this one.

    # Examples

    ```
    use leidenrs::{Graph, QualityFunction, VertexPartition};
    use std::sync::Arc;
    let graph = Arc::new(Graph::from_edges(4, false, &[(0, 1, 1.0), (2, 3, 1.0), (1, 2, 0.5)]).unwrap());
    let partition = VertexPartition::with_membership(
        &graph,
        QualityFunction::CPM { resolution: 0.1 },
        &[0, 0, 1, 1],
    )
    .unwrap();
    let aggregate = partition.aggregate_partition();
    assert_eq!(aggregate.graph().vcount(), 2);
    assert!((aggregate.quality() - partition.quality()).abs() < 1e-12);
    ```
    */
    pub fn aggregate_partition(&self) -> VertexPartition {
        let renumbered = self.renumbered_membership();
        let n_communities = self.n_nonempty_communities();
        let coarse_graph = self.graph.collapse(&renumbered, n_communities);
        VertexPartition::from_parts(
            Arc::new(coarse_graph),
            self.quality_function,
            (0..n_communities).collect(),
        )
    }

    /**
    Reads the membership back from a coarser partition: vertex `v` joins
    the community that its aggregate vertex belongs to in `coarse`. The
    aggregate vertex of `v` is `coarse_node[v]` when a map is given and the
    current membership value of `v` otherwise (the aggregate produced by
    [aggregate_partition](#method.aggregate_partition) after a renumber).
    */
    pub fn from_coarse_partition(
        &mut self,
        coarse: &VertexPartition,
        coarse_node: Option<&[usize]>,
    ) -> Result<(), Error> {
        let n = self.graph.vcount();
        if let Some(map) = coarse_node {
            if map.len() != n {
                return Err(Error {
                    kind: ErrorKind::InvalidInput,
                    message: format!(
                        "The coarse node map has {} entries for a graph of {} vertexes.",
                        map.len(),
                        n
                    ),
                });
            }
        }
        let mut new_membership = Vec::with_capacity(n);
        for v in 0..n {
            let coarse_v = match coarse_node {
                Some(map) => map[v],
                None => self.membership[v],
            };
            if coarse_v >= coarse.membership.len() {
                return Err(Error {
                    kind: ErrorKind::InvalidInput,
                    message: format!(
                        "Vertex {} maps to coarse vertex {}, beyond the coarse partition.",
                        v, coarse_v
                    ),
                });
            }
            new_membership.push(coarse.membership[coarse_v]);
        }
        self.membership = new_membership;
        self.init_admin();
        Ok(())
    }

    /**
    Compares the cached statistics against a recomputation from the
    membership vector. Drift indicates a bookkeeping bug: the cached
    statistics are replaced by the recomputed ones, so the caller can
    continue on a corrected partition, and `InvariantViolation` is
    returned. Debug builds run this comparison after every
    [move_node](#method.move_node).
    */
    pub fn check_statistics(&mut self) -> Result<(), Error> {
        if self.statistics_match_recomputation() {
            return Ok(());
        }
        self.init_admin();
        Err(Error {
            kind: ErrorKind::InvariantViolation,
            message: "Cached community statistics drifted from a recomputation; \
            the partition has been recomputed from its membership."
                .to_string(),
        })
    }

    fn statistics_match_recomputation(&self) -> bool {
        let reference = VertexPartition::from_parts(
            Arc::clone(&self.graph),
            self.quality_function,
            self.membership.clone(),
        );
        let close = |a: f64, b: f64| (a - b).abs() <= 1e-7 * (1.0 + a.abs() + b.abs());
        for comm in 0..self.community_sizes.len() {
            if self.community_sizes[comm] != reference.size_at(comm)
                || self.community_counts[comm] != reference.count_at(comm)
                || !close(self.total_weight_in[comm], reference.w_in_at(comm))
                || !close(self.total_weight_from[comm], reference.w_from_at(comm))
                || !close(self.total_weight_to[comm], reference.w_to_at(comm))
            {
                return false;
            }
        }
        close(self.total_weight_in_all, reference.total_weight_in_all)
            && close(
                self.total_possible_edges_in_all,
                reference.total_possible_edges_in_all,
            )
    }

    /// Recomputes every community statistic from the membership vector.
    fn init_admin(&mut self) {
        let graph = Arc::clone(&self.graph);
        let slots = match self.membership.iter().max() {
            Some(&m) => m + 1,
            None => 0,
        };
        self.total_weight_in = vec![0.0; slots];
        self.total_weight_from = vec![0.0; slots];
        self.total_weight_to = vec![0.0; slots];
        self.community_sizes = vec![0; slots];
        self.community_counts = vec![0; slots];
        for (v, &comm) in self.membership.iter().enumerate() {
            self.community_sizes[comm] += graph.node_size(v);
            self.community_counts[comm] += 1;
            self.total_weight_from[comm] += graph.strength_out(v);
            self.total_weight_to[comm] += graph.strength_in(v);
        }
        for edge in graph.edges() {
            if self.membership[edge.u] == self.membership[edge.v] {
                self.total_weight_in[self.membership[edge.u]] += edge.weight;
            }
        }
        self.total_weight_in_all = self.total_weight_in.iter().sum();
        self.total_possible_edges_in_all = self
            .community_sizes
            .iter()
            .map(|&s| graph.possible_edges_of(s))
            .sum();
        self.scratch_to = vec![0.0; slots + 1];
        self.scratch_from = vec![0.0; slots + 1];
        self.scratch_seen = vec![false; slots + 1];
        self.scratch_touched.clear();
        self.scratch_vertex = None;
    }

    /// Fills the per-move scratch with the weights from/to `v` for every
    /// community `v` has a neighbour in. Self-loops are excluded; they move
    /// with the vertex.
    pub(crate) fn ensure_scratch(&mut self, v: usize) {
        if self.scratch_vertex == Some(v) {
            return;
        }
        for &comm in &self.scratch_touched {
            self.scratch_to[comm] = 0.0;
            self.scratch_from[comm] = 0.0;
            self.scratch_seen[comm] = false;
        }
        self.scratch_touched.clear();
        let slots = self.community_sizes.len();
        if self.scratch_to.len() < slots + 1 {
            self.scratch_to.resize(slots + 1, 0.0);
            self.scratch_from.resize(slots + 1, 0.0);
            self.scratch_seen.resize(slots + 1, false);
        }
        let graph = Arc::clone(&self.graph);
        let directed = graph.is_directed();
        for nb in graph.out_neighbours(v) {
            let comm = self.membership[nb.node];
            if !self.scratch_seen[comm] {
                self.scratch_seen[comm] = true;
                self.scratch_touched.push(comm);
            }
            self.scratch_to[comm] += nb.weight;
            if !directed {
                self.scratch_from[comm] += nb.weight;
            }
        }
        if directed {
            for nb in graph.in_neighbours(v) {
                let comm = self.membership[nb.node];
                if !self.scratch_seen[comm] {
                    self.scratch_seen[comm] = true;
                    self.scratch_touched.push(comm);
                }
                self.scratch_from[comm] += nb.weight;
            }
        }
        self.scratch_vertex = Some(v);
    }

    /// Weight from the scratch vertex to `comm`; requires
    /// [ensure_scratch](#method.ensure_scratch) to have run.
    pub(crate) fn k_to(&self, comm: usize) -> f64 {
        match self.scratch_to.get(comm) {
            Some(&w) => w,
            None => 0.0,
        }
    }

    /// Weight from `comm` to the scratch vertex.
    pub(crate) fn k_from(&self, comm: usize) -> f64 {
        match self.scratch_from.get(comm) {
            Some(&w) => w,
            None => 0.0,
        }
    }

    /// The internal weight leaving the old community and entering the new
    /// one if the scratch vertex moved; the vertex's self-loop moves with
    /// it and appears in both.
    pub(crate) fn weight_in_deltas(&self, old_comm: usize, new_comm: usize) -> (f64, f64) {
        let v = self.scratch_vertex.expect("scratch must be filled");
        let self_weight = self.graph.self_weight(v);
        match self.graph.is_directed() {
            true => (
                self.k_to(old_comm) + self.k_from(old_comm) + self_weight,
                self.k_to(new_comm) + self.k_from(new_comm) + self_weight,
            ),
            false => (
                self.k_to(old_comm) + self_weight,
                self.k_to(new_comm) + self_weight,
            ),
        }
    }

    /// Community size tolerant of indexes one past the slots (a new, empty
    /// community).
    pub(crate) fn size_at(&self, comm: usize) -> usize {
        match self.community_sizes.get(comm) {
            Some(&s) => s,
            None => 0,
        }
    }

    pub(crate) fn count_at(&self, comm: usize) -> usize {
        match self.community_counts.get(comm) {
            Some(&c) => c,
            None => 0,
        }
    }

    pub(crate) fn w_in_at(&self, comm: usize) -> f64 {
        match self.total_weight_in.get(comm) {
            Some(&w) => w,
            None => 0.0,
        }
    }

    pub(crate) fn w_from_at(&self, comm: usize) -> f64 {
        match self.total_weight_from.get(comm) {
            Some(&w) => w,
            None => 0.0,
        }
    }

    pub(crate) fn w_to_at(&self, comm: usize) -> f64 {
        match self.total_weight_to.get(comm) {
            Some(&w) => w,
            None => 0.0,
        }
    }

    /// The lowest empty community slot, if any.
    pub(crate) fn first_empty_community(&self) -> Option<usize> {
        self.community_counts.iter().position(|&c| c == 0)
    }

    fn push_empty_slot(&mut self) {
        self.total_weight_in.push(0.0);
        self.total_weight_from.push(0.0);
        self.total_weight_to.push(0.0);
        self.community_sizes.push(0);
        self.community_counts.push(0);
        if self.scratch_to.len() < self.community_sizes.len() + 1 {
            self.scratch_to.push(0.0);
            self.scratch_from.push(0.0);
            self.scratch_seen.push(false);
        }
    }

    fn check_community(&self, comm: usize) -> Result<(), Error> {
        if comm >= self.community_sizes.len() {
            return Err(Error {
                kind: ErrorKind::InvalidInput,
                message: format!(
                    "Community id {} is out of range for a partition with {} communities.",
                    comm,
                    self.community_sizes.len()
                ),
            });
        }
        Ok(())
    }

    /// A move target may additionally be one past the highest slot, as long
    /// as that still leaves every community id below the vertex count.
    fn check_target_community(&self, comm: usize) -> Result<(), Error> {
        let slots = self.community_sizes.len();
        if comm > slots || (comm == slots && slots >= self.graph.vcount()) {
            return Err(Error {
                kind: ErrorKind::InvalidInput,
                message: format!(
                    "Community id {} is out of range for a partition with {} communities.",
                    comm, slots
                ),
            });
        }
        Ok(())
    }
}

/// The binary Kullback-Leibler divergence with the `0·ln 0 := 0`
/// convention. Degenerate densities that would produce a non-finite value
/// yield 0.
pub(crate) fn kl_divergence(q: f64, p: f64) -> f64 {
    let mut kl = 0.0;
    if q > 0.0 && p > 0.0 {
        kl += q * (q / p).ln();
    }
    if q < 1.0 && p < 1.0 {
        kl += (1.0 - q) * ((1.0 - q) / (1.0 - p)).ln();
    }
    match kl.is_finite() {
        true => kl,
        false => 0.0,
    }
}

fn validate_membership(graph: &Graph, membership: &[usize]) -> Result<(), Error> {
    if membership.len() != graph.vcount() {
        return Err(Error {
            kind: ErrorKind::InvalidInput,
            message: format!(
                "The membership has {} entries for a graph of {} vertexes.",
                membership.len(),
                graph.vcount()
            ),
        });
    }
    for (v, &comm) in membership.iter().enumerate() {
        if comm >= graph.vcount() {
            return Err(Error {
                kind: ErrorKind::InvalidInput,
                message: format!("Vertex {} has community id {}, outside [0, {}).", v, comm, graph.vcount()),
            });
        }
    }
    Ok(())
}

fn validate_quality_function(graph: &Graph, quality_function: &QualityFunction) -> Result<(), Error> {
    match quality_function {
        QualityFunction::CPM { .. } => Ok(()),
        QualityFunction::Significance => {
            match graph.edges().iter().all(|e| e.weight == 1.0) {
                true => Ok(()),
                false => Err(Error {
                    kind: ErrorKind::InvalidConfig,
                    message: "Significance is only defined for unweighted graphs.".to_string(),
                }),
            }
        }
        _ => match graph.edges().iter().all(|e| e.weight >= 0.0) {
            true => Ok(()),
            false => Err(Error {
                kind: ErrorKind::InvalidInput,
                message: format!(
                    "{:?} is only defined for non-negative edge weights.",
                    quality_function
                ),
            }),
        },
    }
}
