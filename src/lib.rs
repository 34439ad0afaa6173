//! relgraph: read-only graph views over a relational vertex/edge store
//!
//! A PostgreSQL (or Greenplum) database holding a `vertices` relation
//! and an `edges` relation is exposed as a graph satisfying the
//! conventional graph-library contract: membership, adjacency, edge
//! lookup, and directed/undirected/reversed views. Nothing is
//! materialized up front; every operation is a blocking round trip to
//! the store, and enumerations pair keys with on-demand lookups.
//!
//! The store is never written. The mutation half of the graph
//! contract is present but rejects every call with
//! [`GraphError::NotPermitted`].
//!
//! # Architecture
//!
//! - [`GraphConfig`]: the immutable handle (connection parameters,
//!   declared attribute columns, graph metadata) cloned across view
//!   derivations.
//! - [`Session`]: one shared, lazily-opened connection per view
//!   family, reference-counted by handle clones.
//! - [`sql`]: the fixed template table of parameterized statements.
//! - [`NodeDao`] / [`AdjDao`] / [`DirectedDao`]: point lookups,
//!   memoized counts, and key enumeration per query category.
//! - [`Graph`] / [`DiGraph`]: the facades; [`DiGraph::reverse`]
//!   relabels successor/predecessor roles without touching the store.
//!
//! # Quick Start
//!
//! ```no_run
//! use relgraph::{Graph, GraphConfig, ImmutableGraph, NodeKey};
//!
//! let config = GraphConfig::new("graph")
//!     .with_host("127.0.0.1")
//!     .with_user("gpadmin")
//!     .with_node_attrs(["weight"])
//!     .with_edge_attrs(["weight"]);
//! let graph = Graph::new(config);
//!
//! println!("{} vertices", graph.number_of_nodes()?);
//! if graph.has_edge(&NodeKey::from(1), &NodeKey::from(2))? {
//!     println!("1 -- 2: {:?}", graph.get_edge_data(&NodeKey::from(1), &NodeKey::from(2))?);
//! }
//! for entry in graph.adjacency()? {
//!     let (vertex, neighbors) = entry?;
//!     println!("{} has {} neighbors", vertex, neighbors.len());
//! }
//! # Ok::<(), relgraph::GraphError>(())
//! ```
//!
//! # Concurrency
//!
//! Single-threaded, synchronous, blocking. A view family shares one
//! connection and must not run overlapping statements; the handles are
//! `!Send`, so the compiler enforces this.

pub mod config;
pub mod dao;
pub mod error;
pub mod graph;
pub mod iter;
pub mod key;
pub mod session;
pub mod sql;
pub mod value;

pub use config::GraphConfig;
pub use dao::{AdjDao, DirectedDao, Direction, NodeDao};
pub use error::{GraphError, GraphResult};
pub use graph::{DiGraph, Graph, ImmutableGraph, Orientation};
pub use iter::{ItemIter, KeyIter, Lookup};
pub use key::NodeKey;
pub use session::Session;
pub use value::{AdjMap, AttrMap, AttrValue};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
