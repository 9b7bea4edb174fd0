use crate::{Error, ErrorKind, Graph};
use itertools::Itertools;

/**
Generates a "complete" graph: one where every vertex is connected to every
other vertex, with unit edge weights.

# Arguments

* `num_nodes`: The number of vertexes to generate.
* `directed`: `true` for a directed graph, `false` for an undirected graph

# Examples

```
use leidenrs::generators;
let graph = generators::classic::complete_graph(5, false);
assert_eq!(graph.ecount(), 10);
```
*/
pub fn complete_graph(num_nodes: usize, directed: bool) -> Graph {
    let edges: Vec<(usize, usize, f64)> = match directed {
        false => (0..num_nodes)
            .combinations(2)
            .map(|pair| (pair[0], pair[1], 1.0))
            .collect(),
        true => (0..num_nodes)
            .permutations(2)
            .map(|pair| (pair[0], pair[1], 1.0))
            .collect(),
    };
    Graph::from_edges(num_nodes, directed, &edges).unwrap()
}

/**
Generates a complete bipartite graph: vertexes `[0, n1)` form one side,
`[n1, n1 + n2)` the other, and every cross pair is connected with weight
`weight`.

# Examples

```
use leidenrs::generators;
let graph = generators::classic::complete_bipartite_graph(2, 3, 1.0);
assert_eq!(graph.ecount(), 6);
```
*/
pub fn complete_bipartite_graph(n1: usize, n2: usize, weight: f64) -> Graph {
    let edges: Vec<(usize, usize, f64)> = (0..n1)
        .cartesian_product(n1..n1 + n2)
        .map(|(u, v)| (u, v, weight))
        .collect();
    Graph::from_edges(n1 + n2, false, &edges).unwrap()
}

/// Generates an undirected path graph on `num_nodes` vertexes with unit
/// edge weights. A path is the simplest tree.
pub fn path_graph(num_nodes: usize) -> Graph {
    let edges: Vec<(usize, usize, f64)> = (1..num_nodes).map(|v| (v - 1, v, 1.0)).collect();
    Graph::from_edges(num_nodes, false, &edges).unwrap()
}

/**
Generates an undirected balanced tree of the given `height` in which every
non-leaf vertex has `branching_factor` children, with unit edge weights.
Vertex 0 is the root and the children of vertex `v` are the vertexes
`branching_factor * v + 1` through `branching_factor * v + branching_factor`.

# Arguments

* `branching_factor`: The number of children of each non-leaf vertex; must
be at least 1 (a branching factor of 1 gives a path).
* `height`: The number of edges on the path from the root to a leaf.

# Examples

```
use leidenrs::generators;
let graph = generators::classic::balanced_tree(2, 2).unwrap();
assert_eq!(graph.vcount(), 7);
assert_eq!(graph.ecount(), 6);
```
*/
pub fn balanced_tree(branching_factor: usize, height: u32) -> Result<Graph, Error> {
    if branching_factor == 0 {
        return Err(Error {
            kind: ErrorKind::InvalidInput,
            message: "`branching_factor` must be at least 1.".to_string(),
        });
    }
    let mut num_nodes: usize = 1;
    let mut level_size: usize = 1;
    for _level in 0..height {
        level_size *= branching_factor;
        num_nodes += level_size;
    }
    let mut edges: Vec<(usize, usize, f64)> = Vec::with_capacity(num_nodes - 1);
    for v in 0..num_nodes {
        for child in (branching_factor * v + 1)..=(branching_factor * v + branching_factor) {
            if child >= num_nodes {
                break;
            }
            edges.push((v, child, 1.0));
        }
    }
    Graph::from_edges(num_nodes, false, &edges)
}

/**
Builds the disjoint union of several graphs: the vertexes of graph `i` are
shifted past those of the graphs before it and no edges are added between
the parts.
*/
pub fn disjoint_union(graphs: &[Graph]) -> Result<Graph, Error> {
    if graphs.is_empty() {
        return Err(Error {
            kind: ErrorKind::InvalidInput,
            message: "At least one graph is required.".to_string(),
        });
    }
    let directed = graphs[0].is_directed();
    if graphs.iter().any(|g| g.is_directed() != directed) {
        return Err(Error {
            kind: ErrorKind::InvalidInput,
            message: "All graphs must agree on directedness.".to_string(),
        });
    }
    let mut edges = vec![];
    let mut node_sizes = vec![];
    let mut offset = 0;
    for graph in graphs {
        for edge in graph.edges() {
            edges.push((edge.u + offset, edge.v + offset, edge.weight));
        }
        node_sizes.extend_from_slice(graph.node_sizes());
        offset += graph.vcount();
    }
    Graph::from_edges_with_node_sizes(offset, directed, &edges, node_sizes)
}
