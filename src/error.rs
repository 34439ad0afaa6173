//! Error types for read-only graph views

use thiserror::Error;

use crate::key::NodeKey;

/// Errors surfaced by graph views and their data access objects.
///
/// Transport failures are propagated unchanged as the `Connectivity`
/// source; nothing is retried and no partial recovery is attempted.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A point lookup named a vertex or edge that does not exist.
    ///
    /// Never produced for an existing vertex with an empty adjacency
    /// set; that case yields an empty mapping instead.
    #[error("key not found: {0}")]
    NotFound(String),

    /// A mutation entry point was called. The store is read-only and
    /// every mutation is rejected unconditionally.
    #[error("modifying graph is not permitted")]
    NotPermitted,

    /// Two edge endpoints of incompatible key kinds were compared.
    /// Checked before any edge query is issued.
    #[error("mismatched endpoint key types: {left} vs {right}")]
    TypeMismatch {
        left: &'static str,
        right: &'static str,
    },

    /// Connection or statement failure from the store transport.
    #[error("store connection error: {0}")]
    Connectivity(#[from] postgres::Error),
}

impl GraphError {
    pub(crate) fn not_found(key: &NodeKey) -> Self {
        GraphError::NotFound(key.to_string())
    }
}

pub type GraphResult<T> = Result<T, GraphError>;
