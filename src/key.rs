//! Vertex key type
//!
//! Vertex keys are opaque: the store may use integer or text `id`
//! columns, and a graph view handles both without declaring which one
//! up front. A key binds as a SQL parameter and reads back from the
//! `id`, `src_id`, and `dst_id` columns.

use std::fmt;

use bytes::BytesMut;
use postgres::types::{FromSql, IsNull, ToSql, Type};
use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

/// Opaque vertex key, either an integer or a text value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NodeKey {
    Int(i64),
    Text(String),
}

impl NodeKey {
    /// Name of the key kind, used in type mismatch errors.
    pub fn kind(&self) -> &'static str {
        match self {
            NodeKey::Int(_) => "integer",
            NodeKey::Text(_) => "text",
        }
    }

    /// Whether two keys hold the same kind of value.
    pub fn same_kind(&self, other: &NodeKey) -> bool {
        matches!(
            (self, other),
            (NodeKey::Int(_), NodeKey::Int(_)) | (NodeKey::Text(_), NodeKey::Text(_))
        )
    }

    /// Rejects endpoint pairs of different kinds before a query is issued.
    pub(crate) fn ensure_same_kind(&self, other: &NodeKey) -> GraphResult<()> {
        if self.same_kind(other) {
            Ok(())
        } else {
            Err(GraphError::TypeMismatch {
                left: self.kind(),
                right: other.kind(),
            })
        }
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKey::Int(n) => write!(f, "{}", n),
            NodeKey::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for NodeKey {
    fn from(n: i64) -> Self {
        NodeKey::Int(n)
    }
}

impl From<i32> for NodeKey {
    fn from(n: i32) -> Self {
        NodeKey::Int(n as i64)
    }
}

impl From<&str> for NodeKey {
    fn from(s: &str) -> Self {
        NodeKey::Text(s.to_string())
    }
}

impl From<String> for NodeKey {
    fn from(s: String) -> Self {
        NodeKey::Text(s)
    }
}

// Keys bind against whatever width the id column actually has. An
// integer key narrows to int2/int4 when the column demands it and
// errors on overflow instead of truncating.
impl ToSql for NodeKey {
    fn to_sql(
        &self,
        ty: &Type,
        out: &mut BytesMut,
    ) -> Result<IsNull, Box<dyn std::error::Error + Sync + Send>> {
        match self {
            NodeKey::Int(n) => {
                if *ty == Type::INT2 {
                    return i16::try_from(*n)?.to_sql(ty, out);
                }
                if *ty == Type::INT4 {
                    return i32::try_from(*n)?.to_sql(ty, out);
                }
                n.to_sql(ty, out)
            }
            NodeKey::Text(s) => s.to_sql(ty, out),
        }
    }

    fn accepts(ty: &Type) -> bool {
        *ty == Type::INT2
            || *ty == Type::INT4
            || *ty == Type::INT8
            || <String as ToSql>::accepts(ty)
    }

    fn to_sql_checked(
        &self,
        ty: &Type,
        out: &mut BytesMut,
    ) -> Result<IsNull, Box<dyn std::error::Error + Sync + Send>> {
        if !<NodeKey as ToSql>::accepts(ty) {
            return Err(format!("cannot bind vertex key to column of type {}", ty).into());
        }
        self.to_sql(ty, out)
    }
}

impl<'a> FromSql<'a> for NodeKey {
    fn from_sql(
        ty: &Type,
        raw: &'a [u8],
    ) -> Result<NodeKey, Box<dyn std::error::Error + Sync + Send>> {
        if *ty == Type::INT2 {
            return Ok(NodeKey::Int(i16::from_sql(ty, raw)? as i64));
        }
        if *ty == Type::INT4 {
            return Ok(NodeKey::Int(i32::from_sql(ty, raw)? as i64));
        }
        if *ty == Type::INT8 {
            return Ok(NodeKey::Int(i64::from_sql(ty, raw)?));
        }
        if <String as FromSql>::accepts(ty) {
            return Ok(NodeKey::Text(String::from_sql(ty, raw)?));
        }
        Err(format!("unsupported vertex key column type: {}", ty).into())
    }

    fn accepts(ty: &Type) -> bool {
        *ty == Type::INT2
            || *ty == Type::INT4
            || *ty == Type::INT8
            || <String as FromSql>::accepts(ty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(NodeKey::from(7i64), NodeKey::Int(7));
        assert_eq!(NodeKey::from(7i32), NodeKey::Int(7));
        assert_eq!(NodeKey::from("a"), NodeKey::Text("a".to_string()));
        assert_eq!(
            NodeKey::from("b".to_string()),
            NodeKey::Text("b".to_string())
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(NodeKey::from(35).to_string(), "35");
        assert_eq!(NodeKey::from("v1").to_string(), "v1");
    }

    #[test]
    fn test_kind() {
        assert_eq!(NodeKey::from(1).kind(), "integer");
        assert_eq!(NodeKey::from("x").kind(), "text");
    }

    #[test]
    fn test_same_kind() {
        assert!(NodeKey::from(1).same_kind(&NodeKey::from(2)));
        assert!(NodeKey::from("a").same_kind(&NodeKey::from("b")));
        assert!(!NodeKey::from(1).same_kind(&NodeKey::from("1")));
    }

    #[test]
    fn test_ensure_same_kind() {
        assert!(NodeKey::from(1).ensure_same_kind(&NodeKey::from(2)).is_ok());

        let err = NodeKey::from(1)
            .ensure_same_kind(&NodeKey::from("a"))
            .unwrap_err();
        assert!(matches!(
            err,
            GraphError::TypeMismatch {
                left: "integer",
                right: "text",
            }
        ));
    }

    #[test]
    fn test_sql_accepts() {
        assert!(<NodeKey as ToSql>::accepts(&Type::INT8));
        assert!(<NodeKey as ToSql>::accepts(&Type::INT4));
        assert!(<NodeKey as ToSql>::accepts(&Type::TEXT));
        assert!(<NodeKey as ToSql>::accepts(&Type::VARCHAR));
        assert!(!<NodeKey as ToSql>::accepts(&Type::BYTEA));

        assert!(<NodeKey as FromSql>::accepts(&Type::INT8));
        assert!(<NodeKey as FromSql>::accepts(&Type::TEXT));
        assert!(!<NodeKey as FromSql>::accepts(&Type::BYTEA));
    }
}
