use crate::graph::Graph;
use crate::layers::time_slices_to_layers;
use crate::optimiser::Optimiser;
use crate::partition::{QualityFunction, VertexPartition};
use crate::Error;
use std::sync::Arc;

/**
Detects communities with the default Leiden settings.

# Arguments

* `graph`: the graph for which to detect communities
* `quality_function`: the quality function to optimise
* `initial_membership`: starting point; singletons if `None`
* `n_iterations`: iterations of the Leiden algorithm; negative runs until
  an iteration brings no improvement
* `max_comm_size`: maximal total node size per community, 0 for unlimited
* `seed`: seed for the random number generator; random if `None`

# Examples

```
use leidenrs::{find_partition, generators, QualityFunction};
use std::sync::Arc;

let graph = Arc::new(generators::social::karate_club_graph());
let partition =
    find_partition(&graph, QualityFunction::Modularity, None, 2, 0, Some(42)).unwrap();
assert!(partition.quality() > 0.0);
```
*/
pub fn find_partition(
    graph: &Arc<Graph>,
    quality_function: QualityFunction,
    initial_membership: Option<&[usize]>,
    n_iterations: i32,
    max_comm_size: usize,
    seed: Option<u64>,
) -> Result<VertexPartition, Error> {
    let mut partition = match initial_membership {
        Some(membership) => VertexPartition::with_membership(graph, quality_function, membership)?,
        None => VertexPartition::new(graph, quality_function)?,
    };
    let mut optimiser = Optimiser::new();
    optimiser.max_comm_size = max_comm_size;
    if let Some(seed) = seed {
        optimiser.set_rng_seed(seed);
    }
    optimiser.optimise_partition(&mut partition, n_iterations, None)?;
    Ok(partition)
}

/**
Detects communities shared across several graphs over the same vertex set.
Only the edges may differ between the graphs; vertex `i` is taken to be the
same vertex in every layer. Returns the shared membership and the total
improvement; a partition belongs to a single graph, so no partition object
is returned.
*/
pub fn find_partition_multiplex(
    graphs: &[Arc<Graph>],
    quality_function: QualityFunction,
    n_iterations: i32,
    max_comm_size: usize,
    seed: Option<u64>,
) -> Result<(Vec<usize>, f64), Error> {
    let mut partitions = graphs
        .iter()
        .map(|graph| VertexPartition::new(graph, quality_function))
        .collect::<Result<Vec<VertexPartition>, Error>>()?;
    let mut optimiser = Optimiser::new();
    optimiser.max_comm_size = max_comm_size;
    if let Some(seed) = seed {
        optimiser.set_rng_seed(seed);
    }
    let improvement =
        optimiser.optimise_partition_multiplex(&mut partitions, None, n_iterations, None)?;
    Ok((partitions[0].membership().to_vec(), improvement))
}

/**
Detects communities across time slices. Consecutive slices are coupled
through vertexes carrying the same id in `slice_vertex_ids`, with weight
`interslice_weight`; the coupling layer is optimised under CPM at
resolution 0, which makes coupled vertexes prefer staying together at no
cost to the intraslice objective. Returns one membership per slice, plus
the total improvement.
*/
pub fn find_partition_temporal(
    slices: &[Graph],
    slice_vertex_ids: &[Vec<usize>],
    quality_function: QualityFunction,
    interslice_weight: f64,
    n_iterations: i32,
    max_comm_size: usize,
    seed: Option<u64>,
) -> Result<(Vec<Vec<usize>>, f64), Error> {
    let decomposition = time_slices_to_layers(slices, slice_vertex_ids, interslice_weight)?;
    let mut partitions = decomposition
        .layers
        .iter()
        .map(|layer| VertexPartition::new(layer, quality_function))
        .collect::<Result<Vec<VertexPartition>, Error>>()?;
    partitions.push(VertexPartition::new(
        &decomposition.interslice,
        QualityFunction::CPM { resolution: 0.0 },
    )?);
    let mut optimiser = Optimiser::new();
    optimiser.max_comm_size = max_comm_size;
    if let Some(seed) = seed {
        optimiser.set_rng_seed(seed);
    }
    let improvement =
        optimiser.optimise_partition_multiplex(&mut partitions, None, n_iterations, None)?;
    let memberships = decomposition.slice_memberships(partitions[0].membership());
    Ok((memberships, improvement))
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::generators;

    #[test]
    fn test_find_partition_respects_initial_membership_length() {
        let graph = Arc::new(Graph::from_edges(4, false, &[(0, 1, 1.0)]).unwrap());
        let result = find_partition(
            &graph,
            QualityFunction::Modularity,
            Some(&[0, 0]),
            2,
            0,
            Some(1),
        );
        assert_eq!(result.unwrap_err().kind, crate::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_find_partition_multiplex_single_layer() {
        let graph = Arc::new(generators::classic::complete_graph(5, false));
        let (membership, improvement) = find_partition_multiplex(
            &[Arc::clone(&graph)],
            QualityFunction::CPM { resolution: 0.5 },
            2,
            0,
            Some(42),
        )
        .unwrap();
        assert_eq!(membership, vec![0; 5]);
        assert!(improvement > 0.0);
    }

    #[test]
    fn test_find_partition_temporal_couples_slices() {
        let slice0 = Graph::from_edges(4, false, &[(0, 1, 1.0), (2, 3, 1.0)]).unwrap();
        let slice1 = Graph::from_edges(4, false, &[(0, 1, 1.0), (2, 3, 1.0)]).unwrap();
        let ids = vec![vec![0, 1, 2, 3], vec![0, 1, 2, 3]];
        let (memberships, _improvement) = find_partition_temporal(
            &[slice0, slice1],
            &ids,
            QualityFunction::CPM { resolution: 0.5 },
            1.0,
            2,
            0,
            Some(42),
        )
        .unwrap();
        assert_eq!(memberships.len(), 2);
        // the coupling keeps the same vertex in the same community over time
        assert_eq!(memberships[0], memberships[1]);
        assert_eq!(memberships[0][0], memberships[0][1]);
        assert_ne!(memberships[0][0], memberships[0][2]);
    }
}
