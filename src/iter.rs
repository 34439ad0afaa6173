//! Lazy iterators over query results
//!
//! `KeyIter` walks the buffered result set of one enumeration query,
//! translating one row per step; `ItemIter` pairs each key with an
//! on-demand lookup so enumerating a graph never materializes every
//! attribute or adjacency mapping at once.
//!
//! Both are finite, single-pass, and non-restartable: a fresh
//! enumeration re-issues its query and gets a fresh iterator. Because
//! a paused `KeyIter` owns its rows outright, lookups interleaved into
//! an active enumeration share the session connection safely.

use postgres::Row;

use crate::error::GraphResult;
use crate::key::NodeKey;

/// Point-lookup capability consumed by [`ItemIter`].
///
/// Implemented by every DAO; `Value` is the attribute mapping for node
/// lookups and the adjacency mapping for adjacency lookups.
pub trait Lookup {
    type Value;

    /// Fetches the value for one key, `NotFound` if the key is absent.
    fn get(&self, key: &NodeKey) -> GraphResult<Self::Value>;
}

/// Single-pass sequence of vertex keys from one executed query.
pub struct KeyIter {
    rows: std::vec::IntoIter<Row>,
}

impl KeyIter {
    pub(crate) fn new(rows: Vec<Row>) -> Self {
        KeyIter {
            rows: rows.into_iter(),
        }
    }
}

impl Iterator for KeyIter {
    type Item = GraphResult<NodeKey>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.rows.next()?;
        Some(row.try_get(0).map_err(Into::into))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rows.size_hint()
    }
}

/// Lazy `(key, value)` pairs: advances a [`KeyIter`] and looks each
/// key up in the source as it goes.
pub struct ItemIter<'a, D: Lookup> {
    keys: KeyIter,
    source: &'a D,
}

impl<'a, D: Lookup> ItemIter<'a, D> {
    pub(crate) fn new(keys: KeyIter, source: &'a D) -> Self {
        ItemIter { keys, source }
    }
}

impl<'a, D: Lookup> Iterator for ItemIter<'a, D> {
    type Item = GraphResult<(NodeKey, D::Value)>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.keys.next()? {
            Ok(key) => match self.source.get(&key) {
                Ok(value) => Some(Ok((key, value))),
                Err(e) => Some(Err(e)),
            },
            Err(e) => Some(Err(e)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::AttrMap;

    struct EmptyLookup;

    impl Lookup for EmptyLookup {
        type Value = AttrMap;

        fn get(&self, _key: &NodeKey) -> GraphResult<AttrMap> {
            Ok(AttrMap::new())
        }
    }

    #[test]
    fn test_key_iter_stays_exhausted() {
        let mut keys = KeyIter::new(Vec::new());
        assert!(keys.next().is_none());
        assert!(keys.next().is_none());
    }

    #[test]
    fn test_item_iter_ends_with_its_key_iterator() {
        let source = EmptyLookup;
        let mut items = ItemIter::new(KeyIter::new(Vec::new()), &source);
        assert!(items.next().is_none());
    }
}
