//! Edgeloom Core - Graph construction from line-oriented edge resources
//!
//! This crate parses textual edge lists into strongly-typed, ordered edge
//! lists and assembles them into immutable in-memory graphs, for any ordered
//! vertex and edge-attribute types.
//!
//! ```
//! use edgeloom_core::value::{from_str, text};
//! use edgeloom_core::{DuplicatePolicy, EdgeKind, EdgeListBuilder, GraphAssembler};
//!
//! let edges = EdgeListBuilder::new(EdgeKind::Undirected, text(), from_str::<i64>())
//!     .build(["A B 5", "B C 3"])
//!     .unwrap();
//! let graph = GraphAssembler::new(EdgeKind::Undirected, DuplicatePolicy::Reject)
//!     .assemble(&edges)
//!     .unwrap();
//!
//! assert_eq!(graph.vertices(), &["A", "B", "C"]);
//! assert_eq!(graph.degree(&"B".to_string()).unwrap(), 2);
//! ```

pub mod assembler;
pub mod edge;
pub mod edge_list;
pub mod error;
pub mod facade;
pub mod graph;
pub mod limits;
pub mod record;
pub mod resource;
pub mod value;

pub use assembler::{DuplicatePolicy, GraphAssembler, SelfLoopPolicy};
pub use edge::{Edge, EdgeKind, Link};
pub use edge_list::{EdgeListBuilder, OrderedEdgeList};
pub use error::{
    AssemblyError, BoxError, EdgeParseFailure, Error, LineFailure, RecordError,
    ResourceUnavailable, Result, TokenRole, UnknownVertex, ValueParseFailure,
};
pub use facade::GraphBuilder;
pub use graph::{EdgeId, Graph, GraphSummary, VertexSummary};
pub use record::{Delimiter, EdgeRecord, GrammarConfig, RecordParser};
pub use resource::{FileSystemLoader, InMemoryLoader, ResourceLoader};
pub use value::ValueParser;
