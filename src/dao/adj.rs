//! Undirected adjacency DAO
//!
//! The store's edges are directed pairs; the undirected view of a
//! vertex is the union of both orientations. Membership is decided by
//! a vertex existence check before the adjacency query so that an
//! existing vertex with no incident edges comes back as an empty
//! mapping rather than `NotFound`.

use super::DaoCore;
use crate::error::{GraphError, GraphResult};
use crate::iter::{ItemIter, KeyIter, Lookup};
use crate::key::NodeKey;
use crate::session::Session;
use crate::sql;
use crate::value::AdjMap;

/// Lookup and enumeration of undirected adjacency.
pub struct AdjDao {
    core: DaoCore,
}

impl AdjDao {
    pub(crate) fn new(session: Session, attrs: Vec<String>) -> Self {
        AdjDao {
            core: DaoCore::new(session, attrs),
        }
    }

    /// Whether the vertex exists.
    pub fn contains(&self, key: &NodeKey) -> GraphResult<bool> {
        self.core.contains(key)
    }

    /// Whether the vertex participates in at least one edge.
    pub fn has_edges(&self, key: &NodeKey) -> GraphResult<bool> {
        Ok(self.core.session().count(sql::ADJ_EXISTS, &[key])? >= 1)
    }

    /// Count of distinct vertices participating in at least one edge.
    /// Memoized after the first successful computation.
    pub fn len(&self) -> GraphResult<u64> {
        self.core.len_with(sql::COUNT_ADJ)
    }

    /// All adjacency participants, ordered by id.
    pub fn keys(&self) -> GraphResult<KeyIter> {
        self.core.keys_with(sql::ITER_ADJ)
    }

    /// The adjacency mapping of one vertex: neighbor key to that
    /// edge's attributes, union of both edge orientations.
    pub fn get(&self, key: &NodeKey) -> GraphResult<AdjMap> {
        if !self.contains(key)? {
            return Err(GraphError::not_found(key));
        }
        let statement = sql::fill_attrs(sql::ADJACENCY, self.core.attrs());
        let rows = self.core.session().rows(&statement, &[key])?;
        let mut adj = AdjMap::with_capacity(rows.len());
        for row in &rows {
            let neighbor: NodeKey = row.try_get(0)?;
            adj.insert(neighbor, self.core.row_attrs(row, 1)?);
        }
        Ok(adj)
    }

    /// Lazy `(vertex, adjacency)` pairs over the adjacency
    /// participants, looking each mapping up on demand.
    pub fn iter_items(&self) -> GraphResult<ItemIter<'_, AdjDao>> {
        Ok(ItemIter::new(self.keys()?, self))
    }

    /// Eager form of [`iter_items`](AdjDao::iter_items).
    pub fn items(&self) -> GraphResult<Vec<(NodeKey, AdjMap)>> {
        self.iter_items()?.collect()
    }
}

impl Lookup for AdjDao {
    type Value = AdjMap;

    fn get(&self, key: &NodeKey) -> GraphResult<AdjMap> {
        AdjDao::get(self, key)
    }
}
