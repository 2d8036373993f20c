//! Node classification for the traversal

use crate::entry::LeafValue;
use serde_json::{Map, Value};

/// The kind of a node, decided once before branching
///
/// Every JSON value falls into exactly one of these. Null has no
/// classification of its own: it is neither a leaf nor a container, so it is
/// treated as unsupported and contributes nothing to the output.
pub(crate) enum NodeKind<'a> {
    /// Primitive leaf: may emit an entry
    Primitive(LeafValue),
    /// Ordered, integer-indexed container: recurse over leading elements
    Sequence(&'a [Value]),
    /// String-keyed container: recurse over keys in enumeration order
    KeyValue(&'a Map<String, Value>),
    /// No entry, no recursion
    Unsupported,
}

/// Classify a value into exactly one node kind
pub(crate) fn classify(value: &Value) -> NodeKind<'_> {
    match value {
        Value::Array(items) => NodeKind::Sequence(items),
        Value::Object(map) => NodeKind::KeyValue(map),
        Value::String(s) => NodeKind::Primitive(LeafValue::String(s.clone())),
        Value::Number(n) => NodeKind::Primitive(LeafValue::Number(n.clone())),
        Value::Bool(b) => NodeKind::Primitive(LeafValue::Bool(*b)),
        Value::Null => NodeKind::Unsupported,
    }
}
