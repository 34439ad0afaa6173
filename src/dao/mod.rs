//! Data access objects
//!
//! One DAO per category of graph query: vertex attributes
//! ([`NodeDao`]), undirected adjacency ([`AdjDao`]), and directed
//! adjacency in either role ([`DirectedDao`]). All DAOs belonging to
//! one graph view share its [`Session`] handle.
//!
//! Common contract: `contains` tests vertex existence, `len` counts
//! the DAO's key set (memoized after the first successful computation
//! and never invalidated; the store is treated as read-only, so the
//! documented staleness is accepted), `get` is a point lookup that is
//! `NotFound` for an absent key, and `keys` enumerates the DAO's key
//! set in deterministic order.

mod adj;
mod directed;
mod node;

pub use adj::AdjDao;
pub use directed::{DirectedDao, Direction};
pub use node::NodeDao;

use std::cell::Cell;

use postgres::Row;

use crate::error::GraphResult;
use crate::iter::KeyIter;
use crate::key::NodeKey;
use crate::session::Session;
use crate::sql;
use crate::value::{row_to_attrs, AttrMap};

/// Shared plumbing behind every DAO: the session handle, the declared
/// attribute list, and the memoized count.
pub(crate) struct DaoCore {
    session: Session,
    attrs: Vec<String>,
    cached_len: Cell<Option<u64>>,
}

impl DaoCore {
    pub(crate) fn new(session: Session, attrs: Vec<String>) -> Self {
        DaoCore {
            session,
            attrs,
            cached_len: Cell::new(None),
        }
    }

    pub(crate) fn session(&self) -> &Session {
        &self.session
    }

    pub(crate) fn attrs(&self) -> &[String] {
        &self.attrs
    }

    /// Vertex existence test shared by every DAO.
    pub(crate) fn contains(&self, key: &NodeKey) -> GraphResult<bool> {
        Ok(self.session.count(sql::NODE_EXISTS, &[key])? >= 1)
    }

    /// Memoized count over the given template. A failed count leaves
    /// the cached value untouched.
    pub(crate) fn len_with(&self, template: &str) -> GraphResult<u64> {
        if let Some(n) = self.cached_len.get() {
            return Ok(n);
        }
        let n = self.session.count(template, &[])?;
        self.cached_len.set(Some(n));
        Ok(n)
    }

    pub(crate) fn keys_with(&self, template: &str) -> GraphResult<KeyIter> {
        Ok(KeyIter::new(self.session.rows(template, &[])?))
    }

    /// Declared attributes zipped with row columns starting at `offset`.
    pub(crate) fn row_attrs(&self, row: &Row, offset: usize) -> GraphResult<AttrMap> {
        row_to_attrs(&self.attrs, row, offset)
    }
}
