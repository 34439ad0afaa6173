//! Directed adjacency DAO
//!
//! Successor and predecessor access share one shape; which role a
//! `DirectedDao` plays is a [`Direction`] tag bound at construction,
//! not a property of the type. A reversed graph view binds the same
//! two roles with swapped tags.

use serde::{Deserialize, Serialize};

use super::DaoCore;
use crate::error::{GraphError, GraphResult};
use crate::iter::{ItemIter, KeyIter, Lookup};
use crate::key::NodeKey;
use crate::session::Session;
use crate::sql;
use crate::value::AdjMap;

/// Which adjacency role a [`DirectedDao`] serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Out-neighbors: edges leaving the vertex, ordered by destination.
    Outgoing,
    /// In-neighbors: edges entering the vertex, ordered by source.
    Incoming,
}

impl Direction {
    pub fn reversed(self) -> Direction {
        match self {
            Direction::Outgoing => Direction::Incoming,
            Direction::Incoming => Direction::Outgoing,
        }
    }

    fn template(self) -> &'static str {
        match self {
            Direction::Outgoing => sql::SUCCESSORS,
            Direction::Incoming => sql::PREDECESSORS,
        }
    }
}

/// Lookup and enumeration of directed adjacency in one role.
pub struct DirectedDao {
    core: DaoCore,
    direction: Direction,
}

impl DirectedDao {
    pub(crate) fn new(session: Session, attrs: Vec<String>, direction: Direction) -> Self {
        DirectedDao {
            core: DaoCore::new(session, attrs),
            direction,
        }
    }

    /// The role this DAO was bound to at construction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether the vertex exists.
    pub fn contains(&self, key: &NodeKey) -> GraphResult<bool> {
        self.core.contains(key)
    }

    /// Vertex count. Memoized after the first successful computation.
    pub fn len(&self) -> GraphResult<u64> {
        self.core.len_with(sql::COUNT_NODES)
    }

    /// All vertex keys, ordered by id.
    pub fn keys(&self) -> GraphResult<KeyIter> {
        self.core.keys_with(sql::ITER_NODES)
    }

    /// The directed adjacency mapping of one vertex in this DAO's
    /// role. An existing vertex with no edges in this direction yields
    /// an empty mapping; a missing vertex is `NotFound`.
    pub fn get(&self, key: &NodeKey) -> GraphResult<AdjMap> {
        if !self.contains(key)? {
            return Err(GraphError::not_found(key));
        }
        let statement = sql::fill_attrs(self.direction.template(), self.core.attrs());
        let rows = self.core.session().rows(&statement, &[key])?;
        let mut adj = AdjMap::with_capacity(rows.len());
        for row in &rows {
            let neighbor: NodeKey = row.try_get(0)?;
            adj.insert(neighbor, self.core.row_attrs(row, 1)?);
        }
        Ok(adj)
    }

    /// Lazy `(vertex, adjacency)` pairs over all vertices.
    pub fn iter_items(&self) -> GraphResult<ItemIter<'_, DirectedDao>> {
        Ok(ItemIter::new(self.keys()?, self))
    }

    /// Eager form of [`iter_items`](DirectedDao::iter_items).
    pub fn items(&self) -> GraphResult<Vec<(NodeKey, AdjMap)>> {
        self.iter_items()?.collect()
    }
}

impl Lookup for DirectedDao {
    type Value = AdjMap;

    fn get(&self, key: &NodeKey) -> GraphResult<AdjMap> {
        DirectedDao::get(self, key)
    }
}
