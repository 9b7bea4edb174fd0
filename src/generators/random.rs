use crate::utility;
use crate::{Error, ErrorKind, Graph};
use rand::Rng;

/**
Returns an Erdos-Renyi or binomial random graph with unit edge weights,
using the geometric skipping method, which runs in O(n + m) time.

# Arguments

* `num_nodes`: The number of vertexes to generate.
* `edge_probability`: The probability for edge creation.
* `directed`: If `true` generates a directed graph, otherwise it generates an undirected graph.
* `seed`: Seed for the random number generator; random if `None`.

# Examples

```
use leidenrs::generators;
let graph = generators::random::fast_gnp_random_graph(250, 0.25, false, Some(1));
assert!(graph.is_ok());
```
*/
pub fn fast_gnp_random_graph(
    num_nodes: usize,
    edge_probability: f64,
    directed: bool,
    seed: Option<u64>,
) -> Result<Graph, Error> {
    if edge_probability <= 0.0 || edge_probability >= 1.0 {
        return Err(Error {
            kind: ErrorKind::InvalidInput,
            message: format!(
                "`edge_probability` was {} but it must be between 0.0 and 1.0, non-inclusive.",
                edge_probability
            ),
        });
    }
    let mut rng = utility::get_rng(seed);
    let lp = (1.0 - edge_probability).ln();
    let mut edges: Vec<(usize, usize, f64)> = vec![];
    match directed {
        true => {
            let n = num_nodes as i64;
            let mut v: i64 = 0;
            let mut w: i64 = -1;
            while v < n {
                let lr = (1.0 - rng.gen::<f64>()).ln();
                w = w + 1 + (lr / lp) as i64;
                if v == w {
                    w += 1;
                }
                while v < n && n <= w {
                    w -= n;
                    v += 1;
                    if v == w {
                        w += 1;
                    }
                }
                if v < n {
                    edges.push((v as usize, w as usize, 1.0));
                }
            }
        }
        false => {
            let n = num_nodes as i64;
            let mut v: i64 = 1;
            let mut w: i64 = -1;
            while v < n {
                let lr = (1.0 - rng.gen::<f64>()).ln();
                w = w + 1 + (lr / lp) as i64;
                while w >= v && v < n {
                    w -= v;
                    v += 1;
                }
                if v < n {
                    edges.push((v as usize, w as usize, 1.0));
                }
            }
        }
    }
    Graph::from_edges(num_nodes, directed, &edges)
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_fast_gnp_random_graph_undirected() {
        let graph = fast_gnp_random_graph(100, 0.05, false, Some(42)).unwrap();
        assert_eq!(graph.vcount(), 100);
        // expected number of edges is 0.05 * 4950 = 247.5
        assert!(graph.ecount() > 150 && graph.ecount() < 360);
        assert!(graph.edges().iter().all(|e| e.u != e.v));
    }

    #[test]
    fn test_fast_gnp_random_graph_is_deterministic() {
        let graph1 = fast_gnp_random_graph(50, 0.1, false, Some(7)).unwrap();
        let graph2 = fast_gnp_random_graph(50, 0.1, false, Some(7)).unwrap();
        assert_eq!(graph1.edges(), graph2.edges());
    }

    #[test]
    fn test_fast_gnp_random_graph_rejects_bad_probability() {
        let result = fast_gnp_random_graph(10, 1.5, false, None);
        assert_eq!(result.unwrap_err().kind, ErrorKind::InvalidInput);
    }
}
