//! A library for generating synthetic graphs that are used to benchmark
//! graph algorithms.
//!
//! A generated graph is a disjoint union of connected components. Each
//! component has one of four shapes: a simple path, a random labeled tree, a
//! complete bipartite graph or a simple cycle. Components are sampled one after
//! another and appended to a global edge list until a node budget or an edge
//! budget is reached. Besides the edge list, every generated graph carries an
//! auxiliary per-node mapping which is either a random permutation of the node
//! ids or the identity.
//!
//! Generation is deterministic: the same seed and the same configuration
//! always produce the same graph.
//!
//! # How to generate a graph
//!
//! ```
//! use component_gen::prelude::*;
//!
//! let generation = GeneratorBuilder::new()
//!     .max_num_nodes(20)
//!     .max_num_edges(50)
//!     .max_size(6)
//!     .seed(42)
//!     .build()
//!     .expect("valid configuration")
//!     .generate::<usize>()
//!     .expect("generation failed");
//!
//! let graph = generation.graph();
//!
//! assert!(graph.node_count() <= 20);
//! assert!(graph.edge_count() <= 50);
//! assert_eq!(graph.edges().len(), graph.edge_count());
//! assert_eq!(graph.mapping().len(), graph.node_count());
//! ```
//!
//! The generated graph can be written in a plain text format. The first line
//! contains the node and the edge count, followed by one line per edge and one
//! line per mapping pair. All node ids are 1-based.
//!
//! ```
//! use component_gen::prelude::*;
//!
//! let graph = GeneratedGraph::<u32>::new(
//!     3,
//!     2,
//!     vec![(1, 2), (2, 3)],
//!     vec![(1, 1), (2, 2), (3, 3)],
//! );
//!
//! let mut buf = Vec::new();
//! graph.write_to(&mut buf).expect("writing failed");
//!
//! assert_eq!(
//!     String::from_utf8(buf).unwrap(),
//!     "3 2\n1 2\n2 3\n1 1\n2 2\n3 3\n"
//! );
//! ```

pub mod assembler;
pub mod generator;
pub mod graph;
pub mod index;
pub mod input;
pub mod mapping;
pub mod prelude;
pub mod sampler;
pub mod shape;

pub use crate::generator::Generator;
pub use crate::generator::GeneratorBuilder;
pub use crate::graph::GeneratedGraph;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("error while reading or writing a graph file: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
    #[error("{message}")]
    InvalidConfig { message: String },
    #[error("sampled shape code {code} is not in 1..=4")]
    InvalidShapeCode { code: u8 },
    #[error("malformed graph file in line {line}: {message}")]
    Parse { line: usize, message: String },
}

impl Error {
    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        Error::InvalidConfig {
            message: message.into(),
        }
    }
}
