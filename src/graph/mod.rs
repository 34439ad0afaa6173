//! Read-only graph facades
//!
//! [`Graph`] and [`DiGraph`] compose DAOs over one shared session and
//! expose the conventional graph-library contract. The
//! [`ImmutableGraph`] trait carries the contract itself: the scalar
//! read operations each facade must provide, plus the full family of
//! mutation entry points, every one of which is rejected with
//! [`GraphError::NotPermitted`] before looking at its arguments and
//! without touching any state.

mod directed;
mod undirected;

pub use directed::{DiGraph, Orientation};
pub use undirected::Graph;

use crate::error::{GraphError, GraphResult};
use crate::key::NodeKey;
use crate::value::AttrMap;

/// The read-only graph interface contract.
///
/// The mutation family exists because callers of a conventional graph
/// interface expect it to be present; it is rejected uniformly here so
/// the failure happens at the offending call, not somewhere later.
pub trait ImmutableGraph {
    /// Number of vertices in the store.
    fn number_of_nodes(&self) -> GraphResult<u64>;

    /// Alias for [`number_of_nodes`](ImmutableGraph::number_of_nodes).
    fn order(&self) -> GraphResult<u64> {
        self.number_of_nodes()
    }

    /// Whether the vertex exists.
    fn has_node(&self, key: &NodeKey) -> GraphResult<bool>;

    /// Whether an edge connects `u` and `v`. Endpoint kinds are
    /// checked before any query is issued.
    fn has_edge(&self, u: &NodeKey, v: &NodeKey) -> GraphResult<bool>;

    /// The attribute mapping of the edge between `u` and `v`, or
    /// `None` when no such edge exists.
    fn get_edge_data(&self, u: &NodeKey, v: &NodeKey) -> GraphResult<Option<AttrMap>>;

    /// Number of edges in the store.
    fn number_of_edges(&self) -> GraphResult<u64>;

    /// Number of edges between two endpoints (0 or 1).
    fn number_of_edges_between(&self, u: &NodeKey, v: &NodeKey) -> GraphResult<u64> {
        Ok(u64::from(self.has_edge(u, v)?))
    }

    /// Edge count, or the sum of the named edge attribute when
    /// `weight` is given.
    fn size(&self, weight: Option<&str>) -> GraphResult<f64>;

    // The mutation family. Every entry point is rejected
    // unconditionally; no argument is validated first and no state is
    // touched.

    fn add_node(&self, _key: NodeKey, _attrs: AttrMap) -> GraphResult<()> {
        Err(GraphError::NotPermitted)
    }

    fn add_nodes_from(&self, _nodes: Vec<(NodeKey, AttrMap)>) -> GraphResult<()> {
        Err(GraphError::NotPermitted)
    }

    fn remove_node(&self, _key: &NodeKey) -> GraphResult<()> {
        Err(GraphError::NotPermitted)
    }

    fn remove_nodes_from(&self, _keys: &[NodeKey]) -> GraphResult<()> {
        Err(GraphError::NotPermitted)
    }

    fn add_edge(&self, _u: NodeKey, _v: NodeKey, _attrs: AttrMap) -> GraphResult<()> {
        Err(GraphError::NotPermitted)
    }

    fn add_edges_from(&self, _edges: Vec<(NodeKey, NodeKey, AttrMap)>) -> GraphResult<()> {
        Err(GraphError::NotPermitted)
    }

    fn add_weighted_edges_from(
        &self,
        _edges: Vec<(NodeKey, NodeKey, f64)>,
        _weight: &str,
    ) -> GraphResult<()> {
        Err(GraphError::NotPermitted)
    }

    fn remove_edge(&self, _u: &NodeKey, _v: &NodeKey) -> GraphResult<()> {
        Err(GraphError::NotPermitted)
    }

    fn remove_edges_from(&self, _edges: &[(NodeKey, NodeKey)]) -> GraphResult<()> {
        Err(GraphError::NotPermitted)
    }

    fn update(
        &self,
        _nodes: Vec<(NodeKey, AttrMap)>,
        _edges: Vec<(NodeKey, NodeKey, AttrMap)>,
    ) -> GraphResult<()> {
        Err(GraphError::NotPermitted)
    }

    fn clear(&self) -> GraphResult<()> {
        Err(GraphError::NotPermitted)
    }
}
