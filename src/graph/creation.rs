use super::{Edge, Graph, Neighbour};
use crate::{Error, ErrorKind};
use itertools::Itertools;
use nohash::IntMap;

impl Graph {
    /**
    Creates a `Graph` from an edge list. Every vertex gets a `node_size`
    of 1.

    # Arguments

    * `n`: the number of vertexes; edge endpoints must lie in `[0, n)`
    * `directed`: `true` for a directed graph, `false` for an undirected one
    * `edges`: `(u, v, weight)` triples; parallel edges are coalesced by
      summing their weights and self-loops are permitted

    # Examples

    ```
    use leidenrs::Graph;
    let graph = Graph::from_edges(4, false, &[(0, 1, 1.0), (1, 2, 0.5)]).unwrap();
    assert_eq!(graph.total_weight(), 1.5);
    ```
    */
    pub fn from_edges(n: usize, directed: bool, edges: &[(usize, usize, f64)]) -> Result<Graph, Error> {
        Graph::from_edges_with_node_sizes(n, directed, edges, vec![1; n])
    }

    /**
    Creates a `Graph` from an edge list with explicit per-vertex
    `node_size`s. A size of 0 excludes the vertex from community sizes,
    which the slice-to-layer conversion uses to mask vertexes that do not
    belong to a layer's slice.

    # Arguments

    * `n`: the number of vertexes; edge endpoints must lie in `[0, n)`
    * `directed`: `true` for a directed graph, `false` for an undirected one
    * `edges`: `(u, v, weight)` triples; parallel edges are coalesced by
      summing their weights and self-loops are permitted
    * `node_sizes`: one size per vertex
    */
    pub fn from_edges_with_node_sizes(
        n: usize,
        directed: bool,
        edges: &[(usize, usize, f64)],
        node_sizes: Vec<usize>,
    ) -> Result<Graph, Error> {
        if node_sizes.len() != n {
            return Err(Error {
                kind: ErrorKind::InvalidInput,
                message: format!(
                    "{} node sizes were specified for a graph of {} vertexes.",
                    node_sizes.len(),
                    n
                ),
            });
        }
        for &(u, v, weight) in edges {
            if u >= n || v >= n {
                return Err(Error {
                    kind: ErrorKind::InvalidInput,
                    message: format!("The edge ({}, {}) is out of range for a graph of {} vertexes.", u, v, n),
                });
            }
            if !weight.is_finite() {
                return Err(Error {
                    kind: ErrorKind::InvalidInput,
                    message: format!("The edge ({}, {}) has a non-finite weight.", u, v),
                });
            }
        }
        let coalesced = coalesce_edges(directed, edges);
        let has_self_loops = coalesced.iter().any(|e| e.u == e.v);
        Ok(Graph::assemble(n, directed, coalesced, node_sizes, has_self_loops))
    }

    /// Builds the cached adjacency and strength tables from already
    /// validated, coalesced edges. The self-loop convention is passed in
    /// rather than re-detected so that collapsed graphs inherit it.
    pub(crate) fn assemble(
        n: usize,
        directed: bool,
        edges: Vec<Edge>,
        node_sizes: Vec<usize>,
        correct_self_loops: bool,
    ) -> Graph {
        let mut out_neighbours: Vec<Vec<Neighbour>> = vec![vec![]; n];
        let mut in_neighbours: Vec<Vec<Neighbour>> = match directed {
            true => vec![vec![]; n],
            false => vec![],
        };
        let mut strengths_out = vec![0.0; n];
        let mut strengths_in = vec![0.0; n];
        let mut self_weights = vec![0.0; n];
        let mut total_weight = 0.0;
        for edge in &edges {
            total_weight += edge.weight;
            if edge.u == edge.v {
                self_weights[edge.u] += edge.weight;
                match directed {
                    true => {
                        strengths_out[edge.u] += edge.weight;
                        strengths_in[edge.u] += edge.weight;
                    }
                    false => strengths_out[edge.u] += 2.0 * edge.weight,
                }
                continue;
            }
            out_neighbours[edge.u].push(Neighbour {
                node: edge.v,
                weight: edge.weight,
            });
            strengths_out[edge.u] += edge.weight;
            match directed {
                true => {
                    in_neighbours[edge.v].push(Neighbour {
                        node: edge.u,
                        weight: edge.weight,
                    });
                    strengths_in[edge.v] += edge.weight;
                }
                false => {
                    out_neighbours[edge.v].push(Neighbour {
                        node: edge.u,
                        weight: edge.weight,
                    });
                    strengths_out[edge.v] += edge.weight;
                }
            }
        }
        let total_node_size = node_sizes.iter().sum();
        Graph {
            n,
            directed,
            edges,
            node_sizes,
            out_neighbours,
            in_neighbours,
            strengths_out,
            strengths_in,
            self_weights,
            total_weight,
            total_node_size,
            correct_self_loops,
        }
    }
}

/// Coalesces parallel edges by summing their weights. For an undirected
/// graph the endpoints are normalised so that `(u, v)` and `(v, u)` land on
/// the same entry. The result is sorted so that adjacency lists, and with
/// them every tie-break downstream, are reproducible.
pub(crate) fn coalesce_edges(directed: bool, edges: &[(usize, usize, f64)]) -> Vec<Edge> {
    let mut weights = IntMap::<usize, IntMap<usize, f64>>::default();
    for &(mut u, mut v, weight) in edges {
        if !directed && u > v {
            (u, v) = (v, u);
        }
        *weights
            .entry(u)
            .or_insert_with(IntMap::default)
            .entry(v)
            .or_insert(0.0) += weight;
    }
    weights
        .into_iter()
        .flat_map(|(u, vw)| vw.into_iter().map(move |(v, weight)| Edge { u, v, weight }))
        .sorted_by_key(|e| (e.u, e.v))
        .collect()
}
