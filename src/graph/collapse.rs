use super::{Edge, Graph};
use itertools::Itertools;
use nohash::IntMap;

impl Graph {
    /**
    Collapses the graph according to a community assignment: one vertex per
    community, inter-community weights summed, intra-community weight
    accumulated as self-loops. The `node_size` of a collapsed vertex is the
    summed size of its members, so that a community of the collapsed graph
    has the same size as the union of the corresponding source communities.

    The membership must be dense in `[0, n_communities)`. Directedness and
    the self-loop convention carry over from the source graph; re-detecting
    self-loops here would change the possible-edge counts between
    aggregation levels and with them the value of size-based quality
    functions.
    */
    pub(crate) fn collapse(&self, membership: &[usize], n_communities: usize) -> Graph {
        let mut weights = IntMap::<usize, IntMap<usize, f64>>::default();
        for edge in &self.edges {
            let mut u_comm = membership[edge.u];
            let mut v_comm = membership[edge.v];
            if !self.directed && u_comm > v_comm {
                (u_comm, v_comm) = (v_comm, u_comm);
            }
            *weights
                .entry(u_comm)
                .or_insert_with(IntMap::default)
                .entry(v_comm)
                .or_insert(0.0) += edge.weight;
        }
        let edges: Vec<Edge> = weights
            .into_iter()
            .flat_map(|(u, vw)| vw.into_iter().map(move |(v, weight)| Edge { u, v, weight }))
            .sorted_by_key(|e| (e.u, e.v))
            .collect();
        let mut node_sizes = vec![0; n_communities];
        for (v, &comm) in membership.iter().enumerate() {
            node_sizes[comm] += self.node_sizes[v];
        }
        Graph::assemble(
            n_communities,
            self.directed,
            edges,
            node_sizes,
            self.correct_self_loops,
        )
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_collapse_undirected() {
        let graph = Graph::from_edges(
            5,
            false,
            &[
                (0, 1, 1.0),
                (0, 2, 1.0),
                (1, 2, 1.0),
                (2, 3, 0.5),
                (3, 4, 2.0),
            ],
        )
        .unwrap();
        let collapsed = graph.collapse(&[0, 0, 0, 1, 1], 2);
        assert_eq!(collapsed.vcount(), 2);
        assert_eq!(collapsed.self_weight(0), 3.0);
        assert_eq!(collapsed.self_weight(1), 2.0);
        assert_eq!(collapsed.out_neighbours(0), &[super::super::Neighbour { node: 1, weight: 0.5 }]);
        assert_eq!(collapsed.node_size(0), 3);
        assert_eq!(collapsed.node_size(1), 2);
        assert_eq!(collapsed.total_weight(), graph.total_weight());
        assert_eq!(collapsed.total_node_size(), graph.total_node_size());
    }

    #[test]
    fn test_collapse_inherits_self_loop_convention() {
        let graph = Graph::from_edges(4, false, &[(0, 1, 1.0), (2, 3, 1.0)]).unwrap();
        assert!(!graph.has_correct_self_loops());
        let collapsed = graph.collapse(&[0, 0, 1, 1], 2);
        assert!(!collapsed.has_correct_self_loops());
        assert_eq!(collapsed.possible_edges_of(2), 1.0);
    }

    #[test]
    fn test_collapse_directed() {
        let graph = Graph::from_edges(4, true, &[(0, 1, 1.0), (1, 0, 2.0), (1, 2, 1.0), (3, 2, 1.0)]).unwrap();
        let collapsed = graph.collapse(&[0, 0, 1, 1], 2);
        assert_eq!(collapsed.self_weight(0), 3.0);
        assert_eq!(collapsed.self_weight(1), 1.0);
        assert_eq!(collapsed.strength_out(0), 4.0);
        assert_eq!(collapsed.strength_in(1), 2.0);
    }
}
