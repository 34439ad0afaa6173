//! Directed graph facade and its reversed view
//!
//! A reversed view swaps which DAO plays the successor and
//! predecessor roles; it re-reads nothing and rewrites nothing. The
//! role assignment is an explicit [`Orientation`] tag resolved when
//! the facade is constructed, so `reverse()` is a pure relabeling and
//! `reverse().reverse()` restores the original assignment.

use serde::{Deserialize, Serialize};

use super::{Graph, ImmutableGraph};
use crate::config::GraphConfig;
use crate::dao::{DirectedDao, Direction, NodeDao};
use crate::error::GraphResult;
use crate::iter::{ItemIter, KeyIter};
use crate::key::NodeKey;
use crate::session::Session;
use crate::sql;
use crate::value::{row_to_attrs, AdjMap, AttrMap};

/// Which way a [`DiGraph`]'s roles are bound relative to storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    /// Successors follow stored edge direction.
    Forward,
    /// Successors run against stored edge direction.
    Reversed,
}

impl Orientation {
    pub fn flipped(self) -> Orientation {
        match self {
            Orientation::Forward => Orientation::Reversed,
            Orientation::Reversed => Orientation::Forward,
        }
    }

    fn out_direction(self) -> Direction {
        match self {
            Orientation::Forward => Direction::Outgoing,
            Orientation::Reversed => Direction::Incoming,
        }
    }

    fn in_direction(self) -> Direction {
        self.out_direction().reversed()
    }
}

/// Read-only directed view of the store.
pub struct DiGraph {
    config: GraphConfig,
    session: Session,
    orientation: Orientation,
    node: NodeDao,
    succ: DirectedDao,
    pred: DirectedDao,
}

impl DiGraph {
    /// A new forward-oriented directed view.
    pub fn new(config: GraphConfig) -> Self {
        DiGraph::with_orientation(config, Orientation::Forward)
    }

    /// A directed view with an explicit role assignment.
    pub fn with_orientation(config: GraphConfig, orientation: Orientation) -> Self {
        let session = Session::new(&config);
        let node = NodeDao::new(session.clone(), config.node_attrs.clone());
        let succ = DirectedDao::new(
            session.clone(),
            config.edge_attrs.clone(),
            orientation.out_direction(),
        );
        let pred = DirectedDao::new(
            session.clone(),
            config.edge_attrs.clone(),
            orientation.in_direction(),
        );
        DiGraph {
            config,
            session,
            orientation,
            node,
            succ,
            pred,
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

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn node_dao(&self) -> &NodeDao {
        &self.node
    }

    /// The DAO bound to the successor role.
    pub fn succ_dao(&self) -> &DirectedDao {
        &self.succ
    }

    /// The DAO bound to the predecessor role.
    pub fn pred_dao(&self) -> &DirectedDao {
        &self.pred
    }

    /// All vertex keys, ordered by id.
    pub fn nodes(&self) -> GraphResult<KeyIter> {
        self.node.keys()
    }

    /// The declared attribute mapping of one vertex.
    pub fn node_attrs(&self, key: &NodeKey) -> GraphResult<AttrMap> {
        self.node.get(key)
    }

    /// Out-neighbors of a vertex in this view.
    pub fn successors(&self, key: &NodeKey) -> GraphResult<AdjMap> {
        self.succ.get(key)
    }

    /// In-neighbors of a vertex in this view.
    pub fn predecessors(&self, key: &NodeKey) -> GraphResult<AdjMap> {
        self.pred.get(key)
    }

    /// Alias for [`successors`](DiGraph::successors); the adjacency of
    /// a directed view is its successor role.
    pub fn neighbors(&self, key: &NodeKey) -> GraphResult<AdjMap> {
        self.successors(key)
    }

    /// Lazy `(vertex, successor adjacency)` pairs over all vertices.
    pub fn adjacency(&self) -> GraphResult<ItemIter<'_, DirectedDao>> {
        self.succ.iter_items()
    }

    /// A new view over the same configuration and orientation.
    pub fn copy(&self) -> DiGraph {
        DiGraph::with_orientation(self.config.clone(), self.orientation)
    }

    /// Directed view of a directed view is a copy.
    pub fn to_directed(&self) -> DiGraph {
        self.copy()
    }

    /// Undirected view over the same store configuration.
    pub fn to_undirected(&self) -> Graph {
        Graph::new(self.config.clone())
    }

    /// The reversed view: same store, successor and predecessor roles
    /// swapped. No data is copied and no query is issued.
    pub fn reverse(&self) -> DiGraph {
        DiGraph::with_orientation(self.config.clone(), self.orientation.flipped())
    }

    /// Orders an endpoint pair the way the stored edges run.
    fn oriented<'k>(&self, u: &'k NodeKey, v: &'k NodeKey) -> (&'k NodeKey, &'k NodeKey) {
        match self.orientation {
            Orientation::Forward => (u, v),
            Orientation::Reversed => (v, u),
        }
    }
}

impl ImmutableGraph for DiGraph {
    fn number_of_nodes(&self) -> GraphResult<u64> {
        self.node.len()
    }

    fn has_node(&self, key: &NodeKey) -> GraphResult<bool> {
        self.node.contains(key)
    }

    fn has_edge(&self, u: &NodeKey, v: &NodeKey) -> GraphResult<bool> {
        u.ensure_same_kind(v)?;
        let (src, dst) = self.oriented(u, v);
        Ok(self.session.count(sql::EDGE_EXISTS_DIRECTED, &[src, dst])? >= 1)
    }

    fn get_edge_data(&self, u: &NodeKey, v: &NodeKey) -> GraphResult<Option<AttrMap>> {
        u.ensure_same_kind(v)?;
        let (src, dst) = self.oriented(u, v);
        let statement = sql::fill_attrs(sql::GET_EDGE_DIRECTED, &self.config.edge_attrs);
        let rows = self.session.rows(&statement, &[src, dst])?;
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
                if !self.config.edge_attrs.iter().any(|a| a == attr) {
                    return Err(crate::error::GraphError::NotFound(attr.to_string()));
                }
                let statement = sql::fill_attrs(sql::SUM_EDGE_ATTR, &[attr.to_string()]);
                self.session.scalar_f64(&statement, &[])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;

    fn offline_digraph() -> DiGraph {
        DiGraph::new(GraphConfig::new("graph").with_host("127.0.0.1").with_port(1))
    }

    #[test]
    fn test_forward_role_assignment() {
        let g = offline_digraph();
        assert_eq!(g.orientation(), Orientation::Forward);
        assert_eq!(g.succ_dao().direction(), Direction::Outgoing);
        assert_eq!(g.pred_dao().direction(), Direction::Incoming);
    }

    #[test]
    fn test_reverse_swaps_role_bindings() {
        let g = offline_digraph();
        let rev = g.reverse();
        assert_eq!(rev.orientation(), Orientation::Reversed);
        assert_eq!(rev.succ_dao().direction(), Direction::Incoming);
        assert_eq!(rev.pred_dao().direction(), Direction::Outgoing);
    }

    #[test]
    fn test_reverse_round_trip_restores_roles() {
        let g = offline_digraph();
        let back = g.reverse().reverse();
        assert_eq!(back.orientation(), g.orientation());
        assert_eq!(back.succ_dao().direction(), g.succ_dao().direction());
        assert_eq!(back.pred_dao().direction(), g.pred_dao().direction());
    }

    #[test]
    fn test_reverse_issues_no_queries() {
        let g = offline_digraph();
        // The store is unreachable; reverse() would fail if it touched it.
        let rev = g.reverse();
        assert!(!rev.session().is_connected());
    }

    #[test]
    fn test_copy_keeps_orientation() {
        let rev = offline_digraph().reverse();
        assert_eq!(rev.copy().orientation(), Orientation::Reversed);
        assert_eq!(rev.to_directed().orientation(), Orientation::Reversed);
    }

    #[test]
    fn test_daos_share_the_facade_session() {
        let g = offline_digraph();
        // facade + node DAO + successor DAO + predecessor DAO
        assert_eq!(g.session().consumers(), 4);
    }

    #[test]
    fn test_mutations_are_rejected_on_directed_views() {
        let g = offline_digraph();
        assert!(matches!(
            g.add_edge(NodeKey::from(1), NodeKey::from(2), AttrMap::new()),
            Err(GraphError::NotPermitted)
        ));
        assert!(matches!(g.clear(), Err(GraphError::NotPermitted)));

        let rev = g.reverse();
        assert!(matches!(
            rev.remove_node(&NodeKey::from(1)),
            Err(GraphError::NotPermitted)
        ));
    }

    #[test]
    fn test_mismatched_endpoints_fail_before_any_query() {
        let g = offline_digraph();
        let err = g.has_edge(&NodeKey::from(1), &NodeKey::from("a")).unwrap_err();
        assert!(matches!(err, GraphError::TypeMismatch { .. }));
    }
}
