use crate::graph::Graph;
use crate::{Error, ErrorKind};
use nohash::IntMap;
use std::sync::Arc;

/**
The result of converting per-slice graphs into multiplex layers: one layer
graph per slice plus one interslice coupling layer, all defined on the
disjoint union of the slice vertex sets.

In a slice's layer only the vertexes belonging to that slice carry their
`node_size`; every other vertex has size 0 and therefore never contributes
to a community size in that layer. The interslice layer has `node_size` 0
everywhere, so the coupling influences the optimisation only through its
edge weights.
*/
#[derive(Debug)]
pub struct LayerDecomposition {
    pub layers: Vec<Arc<Graph>>,
    pub interslice: Arc<Graph>,
    /// Start of each slice's vertex span in the shared vertex set, plus the
    /// total as a final entry.
    pub slice_offsets: Vec<usize>,
}

impl LayerDecomposition {
    /// The number of vertexes in the shared vertex set.
    pub fn vcount(&self) -> usize {
        *self.slice_offsets.last().unwrap()
    }

    /// Splits a membership over the shared vertex set back into one
    /// membership per slice.
    pub fn slice_memberships(&self, membership: &[usize]) -> Vec<Vec<usize>> {
        self.slice_offsets
            .windows(2)
            .map(|span| membership[span[0]..span[1]].to_vec())
            .collect()
    }
}

/**
Converts per-slice graphs into multiplex layers, coupling vertexes of
connected slices that carry the same id.

# Arguments

* `slices`: one graph per slice, with its own vertex indexing
* `slice_vertex_ids`: for each slice, an id per vertex; ids must be unique
  within a slice, and equal ids in two coupled slices identify the same
  underlying vertex
* `couplings`: `(slice, slice, weight)` triples describing which slices are
  coupled and how strongly

# Examples

```
use leidenrs::{slices_to_layers, Graph};

let slice0 = Graph::from_edges(2, false, &[(0, 1, 1.0)]).unwrap();
let slice1 = Graph::from_edges(2, false, &[(0, 1, 1.0)]).unwrap();
let decomposition = slices_to_layers(
    &[slice0, slice1],
    &[vec![7, 8], vec![8, 9]],
    &[(0, 1, 0.5)],
)
.unwrap();
assert_eq!(decomposition.vcount(), 4);
// only the shared id 8 is coupled
assert_eq!(decomposition.interslice.ecount(), 1);
```
*/
pub fn slices_to_layers(
    slices: &[Graph],
    slice_vertex_ids: &[Vec<usize>],
    couplings: &[(usize, usize, f64)],
) -> Result<LayerDecomposition, Error> {
    if slices.is_empty() {
        return Err(Error {
            kind: ErrorKind::InvalidInput,
            message: "At least one slice is required.".to_string(),
        });
    }
    if slice_vertex_ids.len() != slices.len() {
        return Err(Error {
            kind: ErrorKind::InvalidInput,
            message: format!(
                "{} id lists were specified for {} slices.",
                slice_vertex_ids.len(),
                slices.len()
            ),
        });
    }
    let directed = slices[0].is_directed();
    if slices.iter().any(|s| s.is_directed() != directed) {
        return Err(Error {
            kind: ErrorKind::InvalidInput,
            message: "All slices must agree on directedness.".to_string(),
        });
    }
    let mut id_maps: Vec<IntMap<usize, usize>> = Vec::with_capacity(slices.len());
    let mut slice_offsets = vec![0];
    for (slice, ids) in slices.iter().zip(slice_vertex_ids) {
        if ids.len() != slice.vcount() {
            return Err(Error {
                kind: ErrorKind::InvalidInput,
                message: format!(
                    "{} vertex ids were specified for a slice of {} vertexes.",
                    ids.len(),
                    slice.vcount()
                ),
            });
        }
        let mut id_map = IntMap::default();
        for (v, &id) in ids.iter().enumerate() {
            if id_map.insert(id, v).is_some() {
                return Err(Error {
                    kind: ErrorKind::InvalidInput,
                    message: format!("Vertex id {} appears more than once in a slice.", id),
                });
            }
        }
        id_maps.push(id_map);
        slice_offsets.push(slice_offsets.last().unwrap() + slice.vcount());
    }
    let n = *slice_offsets.last().unwrap();
    for &(s, t, _weight) in couplings {
        if s >= slices.len() || t >= slices.len() {
            return Err(Error {
                kind: ErrorKind::InvalidInput,
                message: format!("The coupling ({}, {}) refers to a missing slice.", s, t),
            });
        }
    }
    // one intraslice layer per slice, on the union vertex set
    let mut layers = Vec::with_capacity(slices.len());
    for (s, slice) in slices.iter().enumerate() {
        let offset = slice_offsets[s];
        let edges: Vec<(usize, usize, f64)> = slice
            .edges()
            .iter()
            .map(|e| (e.u + offset, e.v + offset, e.weight))
            .collect();
        let mut node_sizes = vec![0; n];
        for v in 0..slice.vcount() {
            node_sizes[offset + v] = slice.node_size(v);
        }
        layers.push(Arc::new(Graph::from_edges_with_node_sizes(
            n, directed, &edges, node_sizes,
        )?));
    }
    // a single coupling layer linking equal ids in coupled slices
    let mut interslice_edges = vec![];
    for &(s, t, weight) in couplings {
        for (&id, &v) in id_maps[s].iter() {
            if let Some(&u) = id_maps[t].get(&id) {
                interslice_edges.push((slice_offsets[s] + v, slice_offsets[t] + u, weight));
            }
        }
    }
    let interslice = Arc::new(Graph::from_edges_with_node_sizes(
        n,
        false,
        &interslice_edges,
        vec![0; n],
    )?);
    Ok(LayerDecomposition {
        layers,
        interslice,
        slice_offsets,
    })
}

/**
Converts time slices to multiplex layers by coupling each slice to the next
with the given weight; see
[slices_to_layers](./fn.slices_to_layers.html).
*/
pub fn time_slices_to_layers(
    slices: &[Graph],
    slice_vertex_ids: &[Vec<usize>],
    interslice_weight: f64,
) -> Result<LayerDecomposition, Error> {
    let couplings: Vec<(usize, usize, f64)> = (1..slices.len())
        .map(|s| (s - 1, s, interslice_weight))
        .collect();
    slices_to_layers(slices, slice_vertex_ids, &couplings)
}

#[cfg(test)]
mod tests {

    use super::*;

    fn chain_slices() -> (Vec<Graph>, Vec<Vec<usize>>) {
        let slice0 = Graph::from_edges(3, false, &[(0, 1, 1.0), (1, 2, 1.0)]).unwrap();
        let slice1 = Graph::from_edges(3, false, &[(0, 1, 1.0), (1, 2, 1.0)]).unwrap();
        (vec![slice0, slice1], vec![vec![0, 1, 2], vec![0, 1, 2]])
    }

    #[test]
    fn test_time_slices_to_layers_masks_node_sizes() {
        let (slices, ids) = chain_slices();
        let decomposition = time_slices_to_layers(&slices, &ids, 1.0).unwrap();
        assert_eq!(decomposition.vcount(), 6);
        assert_eq!(decomposition.layers.len(), 2);
        assert_eq!(decomposition.layers[0].node_sizes(), &[1, 1, 1, 0, 0, 0]);
        assert_eq!(decomposition.layers[1].node_sizes(), &[0, 0, 0, 1, 1, 1]);
        assert_eq!(decomposition.interslice.node_sizes(), &[0; 6]);
        assert_eq!(decomposition.interslice.ecount(), 3);
        assert_eq!(decomposition.layers[0].ecount(), 2);
    }

    #[test]
    fn test_slices_to_layers_rejects_duplicate_ids() {
        let slice = Graph::from_edges(2, false, &[(0, 1, 1.0)]).unwrap();
        let result = slices_to_layers(&[slice], &[vec![3, 3]], &[]);
        assert_eq!(result.unwrap_err().kind, ErrorKind::InvalidInput);
    }

    #[test]
    fn test_slice_memberships_roundtrip() {
        let (slices, ids) = chain_slices();
        let decomposition = time_slices_to_layers(&slices, &ids, 1.0).unwrap();
        let memberships = decomposition.slice_memberships(&[0, 0, 1, 0, 1, 1]);
        assert_eq!(memberships, vec![vec![0, 0, 1], vec![0, 1, 1]]);
    }
}
