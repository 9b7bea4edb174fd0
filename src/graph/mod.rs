use crate::{Error, ErrorKind};

mod collapse;
mod creation;

/**
An edge between two vertexes, with a weight.

Parallel edges supplied at construction are coalesced by summing their
weights, so a `Graph` stores at most one `Edge` per vertex pair (per
direction for directed graphs).
*/
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub u: usize,
    pub v: usize,
    pub weight: f64,
}

/// A neighbouring vertex together with the weight of the connecting edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbour {
    pub node: usize,
    pub weight: f64,
}

/**
The `Graph` struct is an immutable, index-based view of a weighted graph:
vertexes are the integers `[0, n)` and every query the community-detection
machinery needs (neighbour lists, weighted strengths, self-loop weights,
totals) is computed once at construction.

Each vertex carries an integer `node_size` (1 by default). A size of 0 marks
a "ghost" vertex that does not contribute to community sizes; aggregated
graphs carry the summed sizes of their constituent vertexes.

# Example

```
use leidenrs::Graph;

let graph = Graph::from_edges(3, false, &[(0, 1, 1.0), (1, 2, 2.0)]).unwrap();
assert_eq!(graph.vcount(), 3);
assert_eq!(graph.ecount(), 2);
assert_eq!(graph.strength_out(1), 3.0);
```
*/
#[derive(Debug, Clone)]
pub struct Graph {
    n: usize,
    directed: bool,
    edges: Vec<Edge>,
    node_sizes: Vec<usize>,
    out_neighbours: Vec<Vec<Neighbour>>,
    in_neighbours: Vec<Vec<Neighbour>>,
    strengths_out: Vec<f64>,
    strengths_in: Vec<f64>,
    self_weights: Vec<f64>,
    total_weight: f64,
    total_node_size: usize,
    correct_self_loops: bool,
}

impl Graph {
    /// The number of vertexes in the graph.
    pub fn vcount(&self) -> usize {
        self.n
    }

    /// The number of (coalesced) edges in the graph.
    pub fn ecount(&self) -> usize {
        self.edges.len()
    }

    /// `true` if the graph is directed.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// All (coalesced) edges, self-loops included.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The `node_size` of vertex `v`.
    pub fn node_size(&self, v: usize) -> usize {
        self.node_sizes[v]
    }

    /// The `node_size` of every vertex.
    pub fn node_sizes(&self) -> &[usize] {
        &self.node_sizes
    }

    /// The sum of all `node_size`s.
    pub fn total_node_size(&self) -> usize {
        self.total_node_size
    }

    /// The sum of all edge weights. Undirected edges are counted once.
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /**
    The out-neighbours of `v`, excluding `v` itself; the weight of a
    self-loop is available from [self_weight](#method.self_weight). For an
    undirected graph these are simply the adjacent vertexes.
    */
    pub fn out_neighbours(&self, v: usize) -> &[Neighbour] {
        &self.out_neighbours[v]
    }

    /// The in-neighbours of `v`. Identical to the out-neighbours for an
    /// undirected graph.
    pub fn in_neighbours(&self, v: usize) -> &[Neighbour] {
        match self.directed {
            true => &self.in_neighbours[v],
            false => &self.out_neighbours[v],
        }
    }

    /**
    The weighted out-strength of `v`. A self-loop contributes its weight
    once to the out-strength and once to the in-strength of a directed
    graph, and twice to the strength of an undirected graph; this matches
    the collapsed graph an aggregation step produces, so quality functions
    evaluate identically across aggregation levels.
    */
    pub fn strength_out(&self, v: usize) -> f64 {
        self.strengths_out[v]
    }

    /// The weighted in-strength of `v`.
    pub fn strength_in(&self, v: usize) -> f64 {
        match self.directed {
            true => self.strengths_in[v],
            false => self.strengths_out[v],
        }
    }

    /// The weight of the self-loop on `v`, 0 if there is none.
    pub fn self_weight(&self, v: usize) -> f64 {
        self.self_weights[v]
    }

    /// `true` if any vertex carries a self-loop. When set, the possible-edge
    /// counts include the diagonal.
    pub fn has_correct_self_loops(&self) -> bool {
        self.correct_self_loops
    }

    /**
    The number of possible edges between `size` vertexes:
    `size*(size-1)/2` for an undirected graph and `size*(size-1)` for a
    directed one. When the graph corrects for self-loops the diagonal is
    included, giving `size*(size+1)/2` and `size*size` respectively.
    */
    pub fn possible_edges_of(&self, size: usize) -> f64 {
        let s = size as f64;
        match (self.directed, self.correct_self_loops) {
            (false, false) => s * (s - 1.0) / 2.0,
            (false, true) => s * (s + 1.0) / 2.0,
            (true, false) => s * (s - 1.0),
            (true, true) => s * s,
        }
    }

    /// The number of possible edges between all vertexes, counted over the
    /// total node size.
    pub fn possible_edges(&self) -> f64 {
        self.possible_edges_of(self.total_node_size)
    }

    /// The density of the graph: total weight over possible edges.
    pub fn density(&self) -> f64 {
        let possible = self.possible_edges();
        match possible > 0.0 {
            true => self.total_weight / possible,
            false => 0.0,
        }
    }

    pub(crate) fn check_vertex(&self, v: usize) -> Result<(), Error> {
        if v >= self.n {
            return Err(Error {
                kind: ErrorKind::InvalidInput,
                message: format!("Vertex index {} is out of range for a graph of {} vertexes.", v, self.n),
            });
        }
        Ok(())
    }
}
