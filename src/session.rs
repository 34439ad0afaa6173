//! Shared store session
//!
//! One graph view family shares a single blocking store connection.
//! `Session` is the explicit handle for that connection: facades and
//! DAOs each hold a clone, the clone count is the reference count, and
//! dropping the last clone closes the connection on every exit path.
//!
//! The connection opens lazily. Constructing a graph view performs no
//! I/O; a refused or unreachable store surfaces as
//! [`GraphError::Connectivity`](crate::error::GraphError) at the first
//! operation that actually needs the connection. Releasing a session
//! whose connection never opened is a no-op.
//!
//! Everything here is deliberately `!Send`: queries are synchronous
//! blocking round trips and the shared connection must not run
//! overlapping statements from different threads, so the handle is an
//! `Rc` over a `RefCell` and the single-threaded contract is enforced
//! by the compiler rather than by documentation.

use std::cell::RefCell;
use std::rc::Rc;

use postgres::types::ToSql;
use postgres::{Client, NoTls, Row};
use tracing::{debug, trace};

use crate::config::GraphConfig;
use crate::error::GraphResult;

/// Cheaply cloneable handle over one lazily-opened store connection.
#[derive(Clone)]
pub struct Session {
    inner: Rc<SessionInner>,
}

struct SessionInner {
    pg: postgres::Config,
    dbname: String,
    client: RefCell<Option<Client>>,
}

impl Session {
    pub(crate) fn new(config: &GraphConfig) -> Self {
        Session {
            inner: Rc::new(SessionInner {
                pg: config.pg_config(),
                dbname: config.dbname.clone(),
                client: RefCell::new(None),
            }),
        }
    }

    /// Number of live handles sharing this connection.
    pub fn consumers(&self) -> usize {
        Rc::strong_count(&self.inner)
    }

    /// Whether the underlying connection has been opened yet.
    pub fn is_connected(&self) -> bool {
        self.inner.client.borrow().is_some()
    }

    fn with_client<T>(
        &self,
        f: impl FnOnce(&mut Client) -> Result<T, postgres::Error>,
    ) -> GraphResult<T> {
        let mut slot = self.inner.client.borrow_mut();
        if let Some(client) = slot.as_mut() {
            return Ok(f(client)?);
        }
        debug!(database = %self.inner.dbname, "opening store connection");
        let client = slot.insert(self.inner.pg.connect(NoTls)?);
        Ok(f(client)?)
    }

    pub(crate) fn rows(
        &self,
        sql: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> GraphResult<Vec<Row>> {
        trace!(statement = sql, "executing store statement");
        self.with_client(|client| client.query(sql, params))
    }

    /// Runs a COUNT statement and returns its single value.
    pub(crate) fn count(&self, sql: &str, params: &[&(dyn ToSql + Sync)]) -> GraphResult<u64> {
        let rows = self.rows(sql, params)?;
        let n: i64 = match rows.first() {
            Some(row) => row.try_get(0)?,
            None => 0,
        };
        Ok(u64::try_from(n).unwrap_or(0))
    }

    /// Runs a SUM statement; NULL (no rows aggregated) comes back as 0.
    pub(crate) fn scalar_f64(
        &self,
        sql: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> GraphResult<f64> {
        let rows = self.rows(sql, params)?;
        let value: Option<f64> = match rows.first() {
            Some(row) => row.try_get(0)?,
            None => None,
        };
        Ok(value.unwrap_or(0.0))
    }
}

impl Drop for SessionInner {
    fn drop(&mut self) {
        if self.client.borrow().is_some() {
            debug!(database = %self.dbname, "closing store connection");
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("database", &self.inner.dbname)
            .field("connected", &self.is_connected())
            .field("consumers", &self.consumers())
            .finish()
    }
}
