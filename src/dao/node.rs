//! Vertex attribute DAO

use super::DaoCore;
use crate::error::{GraphError, GraphResult};
use crate::iter::{ItemIter, KeyIter, Lookup};
use crate::key::NodeKey;
use crate::session::Session;
use crate::sql;
use crate::value::AttrMap;

/// Lookup and enumeration of vertex attributes.
pub struct NodeDao {
    core: DaoCore,
}

impl NodeDao {
    pub(crate) fn new(session: Session, attrs: Vec<String>) -> Self {
        NodeDao {
            core: DaoCore::new(session, attrs),
        }
    }

    /// Whether the vertex exists.
    pub fn contains(&self, key: &NodeKey) -> GraphResult<bool> {
        self.core.contains(key)
    }

    /// Vertex count. Memoized after the first successful computation
    /// and stable for this DAO's lifetime even if the store changes.
    pub fn len(&self) -> GraphResult<u64> {
        self.core.len_with(sql::COUNT_NODES)
    }

    /// All vertex keys, ordered by id.
    pub fn keys(&self) -> GraphResult<KeyIter> {
        self.core.keys_with(sql::ITER_NODES)
    }

    /// The declared attribute mapping for one vertex, fetched fresh.
    pub fn get(&self, key: &NodeKey) -> GraphResult<AttrMap> {
        let statement = sql::fill_attrs(sql::GET_NODE, self.core.attrs());
        let rows = self.core.session().rows(&statement, &[key])?;
        match rows.first() {
            Some(row) => self.core.row_attrs(row, 0),
            None => Err(GraphError::not_found(key)),
        }
    }

    /// Lazy `(vertex, attributes)` pairs over all vertices.
    pub fn iter_items(&self) -> GraphResult<ItemIter<'_, NodeDao>> {
        Ok(ItemIter::new(self.keys()?, self))
    }

    /// Eager form of [`iter_items`](NodeDao::iter_items).
    pub fn items(&self) -> GraphResult<Vec<(NodeKey, AttrMap)>> {
        self.iter_items()?.collect()
    }
}

impl Lookup for NodeDao {
    type Value = AttrMap;

    fn get(&self, key: &NodeKey) -> GraphResult<AttrMap> {
        NodeDao::get(self, key)
    }
}
