#[doc = include_str!("../README.md")]
#[macro_use]
extern crate doc_comment;
doc_comment!(include_str!("../README.md"));

mod error;
pub use error::{Error, ErrorKind};

mod functions;
pub use functions::{find_partition, find_partition_multiplex, find_partition_temporal};

pub mod generators;

mod graph;
pub use graph::{Edge, Graph, Neighbour};

mod layers;
pub use layers::{slices_to_layers, time_slices_to_layers, LayerDecomposition};

mod optimiser;
pub use optimiser::{ConsiderPolicy, Optimiser, OptimiseRoutine};

mod partition;
pub use partition::{QualityFunction, VertexPartition};

mod utility;
