//! Undirected graph facade

use super::{DiGraph, ImmutableGraph};
use crate::config::GraphConfig;
use crate::dao::{AdjDao, NodeDao};
use crate::error::GraphResult;
use crate::iter::{ItemIter, KeyIter};
use crate::key::NodeKey;
use crate::session::Session;
use crate::sql;
use crate::value::{row_to_attrs, AdjMap, AttrMap};

/// Read-only undirected view of the store.
///
/// Edges are stored as directed pairs; this facade presents the union
/// of both orientations. Construction performs no I/O: the shared
/// connection opens on the first operation that needs it, and closes
/// when the facade is dropped.
pub struct Graph {
    config: GraphConfig,
    session: Session,
    node: NodeDao,
    adj: AdjDao,
}

impl Graph {
    /// A new undirected view over the configured store.
    pub fn new(config: GraphConfig) -> Self {
        let session = Session::new(&config);
        let node = NodeDao::new(session.clone(), config.node_attrs.clone());
        let adj = AdjDao::new(session.clone(), config.edge_attrs.clone());
        Graph {
            config,
            session,
            node,
            adj,
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Graph-level metadata carried by the configuration.
    pub fn metadata(&self) -> &AttrMap {
        &self.config.metadata
    }

    /// The session shared by this facade and its DAOs.
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn node_dao(&self) -> &NodeDao {
        &self.node
    }

    pub fn adj_dao(&self) -> &AdjDao {
        &self.adj
    }

    /// All vertex keys, ordered by id.
    pub fn nodes(&self) -> GraphResult<KeyIter> {
        self.node.keys()
    }

    /// The declared attribute mapping of one vertex.
    pub fn node_attrs(&self, key: &NodeKey) -> GraphResult<AttrMap> {
        self.node.get(key)
    }

    /// The adjacency mapping of one vertex; `NotFound` when the
    /// vertex does not exist, empty when it has no incident edges.
    pub fn neighbors(&self, key: &NodeKey) -> GraphResult<AdjMap> {
        self.adj.get(key)
    }

    /// Lazy `(vertex, adjacency)` pairs over the adjacency
    /// participants.
    pub fn adjacency(&self) -> GraphResult<ItemIter<'_, AdjDao>> {
        self.adj.iter_items()
    }

    /// A new view over the same store configuration.
    pub fn copy(&self) -> Graph {
        Graph::new(self.config.clone())
    }

    /// Undirected view of an undirected view is a copy.
    pub fn to_undirected(&self) -> Graph {
        self.copy()
    }

    /// Directed view over the same store configuration.
    pub fn to_directed(&self) -> DiGraph {
        DiGraph::new(self.config.clone())
    }
}

impl ImmutableGraph for Graph {
    fn number_of_nodes(&self) -> GraphResult<u64> {
        self.node.len()
    }

    fn has_node(&self, key: &NodeKey) -> GraphResult<bool> {
        self.node.contains(key)
    }

    fn has_edge(&self, u: &NodeKey, v: &NodeKey) -> GraphResult<bool> {
        u.ensure_same_kind(v)?;
        Ok(self.session.count(sql::EDGE_EXISTS, &[u, v])? >= 1)
    }

    fn get_edge_data(&self, u: &NodeKey, v: &NodeKey) -> GraphResult<Option<AttrMap>> {
        u.ensure_same_kind(v)?;
        let statement = sql::fill_attrs(sql::GET_EDGE, &self.config.edge_attrs);
        let rows = self.session.rows(&statement, &[u, v])?;
        match rows.first() {
            Some(row) => Ok(Some(row_to_attrs(&self.config.edge_attrs, row, 0)?)),
            None => Ok(None),
        }
    }

    fn number_of_edges(&self) -> GraphResult<u64> {
        self.session.count(sql::COUNT_EDGES, &[])
    }

    fn size(&self, weight: Option<&str>) -> GraphResult<f64> {
        match weight {
            None => Ok(self.number_of_edges()? as f64),
            Some(attr) => {
                // Interpolation is restricted to the declared list.
                if !self.config.edge_attrs.iter().any(|a| a == attr) {
                    return Err(crate::error::GraphError::NotFound(attr.to_string()));
                }
                let statement = sql::fill_attrs(sql::SUM_EDGE_ATTR, &[attr.to_string()]);
                self.session.scalar_f64(&statement, &[])
            }
        }
    }
}
