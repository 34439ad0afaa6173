//! Attribute values and mappings
//!
//! Vertex and edge attributes are scalar columns declared at graph
//! construction time. A row is translated into a mapping fresh on
//! every access, with the mapping order equal to the declared
//! attribute list order.

use std::fmt;

use indexmap::IndexMap;
use postgres::types::{FromSql, Type};
use postgres::Row;
use serde::{Deserialize, Serialize};

use crate::error::GraphResult;
use crate::key::NodeKey;

/// Scalar attribute value read from a store column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttrValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Null,
}

impl AttrValue {
    pub fn is_null(&self) -> bool {
        matches!(self, AttrValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            AttrValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Numeric accessor; integers widen to float.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AttrValue::Integer(n) => Some(*n as f64),
            AttrValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            AttrValue::Text(_) => "Text",
            AttrValue::Integer(_) => "Integer",
            AttrValue::Float(_) => "Float",
            AttrValue::Boolean(_) => "Boolean",
            AttrValue::Null => "Null",
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Text(s) => write!(f, "\"{}\"", s),
            AttrValue::Integer(n) => write!(f, "{}", n),
            AttrValue::Float(x) => write!(f, "{}", x),
            AttrValue::Boolean(b) => write!(f, "{}", b),
            AttrValue::Null => write!(f, "null"),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Text(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Text(s)
    }
}

impl From<i64> for AttrValue {
    fn from(n: i64) -> Self {
        AttrValue::Integer(n)
    }
}

impl From<i32> for AttrValue {
    fn from(n: i32) -> Self {
        AttrValue::Integer(n as i64)
    }
}

impl From<f64> for AttrValue {
    fn from(f: f64) -> Self {
        AttrValue::Float(f)
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        AttrValue::Boolean(b)
    }
}

impl<'a> FromSql<'a> for AttrValue {
    fn from_sql(
        ty: &Type,
        raw: &'a [u8],
    ) -> Result<AttrValue, Box<dyn std::error::Error + Sync + Send>> {
        if *ty == Type::BOOL {
            return Ok(AttrValue::Boolean(bool::from_sql(ty, raw)?));
        }
        if *ty == Type::INT2 {
            return Ok(AttrValue::Integer(i16::from_sql(ty, raw)? as i64));
        }
        if *ty == Type::INT4 {
            return Ok(AttrValue::Integer(i32::from_sql(ty, raw)? as i64));
        }
        if *ty == Type::INT8 {
            return Ok(AttrValue::Integer(i64::from_sql(ty, raw)?));
        }
        if *ty == Type::FLOAT4 {
            return Ok(AttrValue::Float(f32::from_sql(ty, raw)? as f64));
        }
        if *ty == Type::FLOAT8 {
            return Ok(AttrValue::Float(f64::from_sql(ty, raw)?));
        }
        if <String as FromSql>::accepts(ty) {
            return Ok(AttrValue::Text(String::from_sql(ty, raw)?));
        }
        Err(format!("unsupported attribute column type: {}", ty).into())
    }

    fn from_sql_null(_ty: &Type) -> Result<AttrValue, Box<dyn std::error::Error + Sync + Send>> {
        Ok(AttrValue::Null)
    }

    fn accepts(ty: &Type) -> bool {
        *ty == Type::BOOL
            || *ty == Type::INT2
            || *ty == Type::INT4
            || *ty == Type::INT8
            || *ty == Type::FLOAT4
            || *ty == Type::FLOAT8
            || <String as FromSql>::accepts(ty)
    }
}

/// Attribute mapping in declared attribute order.
pub type AttrMap = IndexMap<String, AttrValue>;

/// Adjacency mapping from neighbor key to that edge's attributes.
pub type AdjMap = IndexMap<NodeKey, AttrMap>;

/// Zips the declared attribute names with row columns starting at
/// `offset`. The store schema is not validated up front, so a column
/// the declared list names but the relation lacks surfaces here as a
/// query failure.
pub(crate) fn row_to_attrs(names: &[String], row: &Row, offset: usize) -> GraphResult<AttrMap> {
    let mut attrs = AttrMap::with_capacity(names.len());
    for (i, name) in names.iter().enumerate() {
        attrs.insert(name.clone(), row.try_get(offset + i)?);
    }
    Ok(attrs)
}
