//! Primitive leaf values and flattened path entries

use serde::Serialize;
use serde_json::{Number, Value};

/// A primitive leaf value
///
/// Only these three kinds produce entries during flattening. Null, arrays,
/// and objects never appear as leaf values.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LeafValue {
    /// String leaf
    String(String),
    /// Numeric leaf (integer or float)
    Number(Number),
    /// Boolean leaf
    Bool(bool),
}

impl LeafValue {
    /// Convert from a JSON value
    ///
    /// Returns `None` for null, arrays, and objects.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(LeafValue::String(s.clone())),
            Value::Number(n) => Some(LeafValue::Number(n.clone())),
            Value::Bool(b) => Some(LeafValue::Bool(*b)),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Re-embed this leaf as a JSON value
    pub fn into_json(self) -> Value {
        match self {
            LeafValue::String(s) => Value::String(s),
            LeafValue::Number(n) => Value::Number(n),
            LeafValue::Bool(b) => Value::Bool(b),
        }
    }

    /// Get the string payload if this is a string leaf
    pub fn as_str(&self) -> Option<&str> {
        match self {
            LeafValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the numeric payload if this is a number leaf
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            LeafValue::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Get the boolean payload if this is a boolean leaf
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            LeafValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<&str> for LeafValue {
    fn from(s: &str) -> Self {
        LeafValue::String(s.to_string())
    }
}

impl From<String> for LeafValue {
    fn from(s: String) -> Self {
        LeafValue::String(s)
    }
}

impl From<bool> for LeafValue {
    fn from(b: bool) -> Self {
        LeafValue::Bool(b)
    }
}

impl From<i64> for LeafValue {
    fn from(n: i64) -> Self {
        LeafValue::Number(Number::from(n))
    }
}

impl From<u64> for LeafValue {
    fn from(n: u64) -> Self {
        LeafValue::Number(Number::from(n))
    }
}

impl From<Number> for LeafValue {
    fn from(n: Number) -> Self {
        LeafValue::Number(n)
    }
}

/// A flattened (jpath, value) pair
///
/// Entries are emitted in traversal order. The jpath is the dot-joined path
/// to the leaf; a primitive at the root has the empty-string jpath.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JPathEntry {
    /// Dot-joined path to the leaf
    pub jpath: String,
    /// Primitive value at that path
    pub value: LeafValue,
}

impl JPathEntry {
    /// Create a new entry
    pub fn new(jpath: String, value: LeafValue) -> Self {
        Self { jpath, value }
    }
}
