//! Projection of flattened entries into a jpath-keyed mapping

use crate::flatten::get_jpaths;
use crate::options::FlattenOptions;
use serde_json::{Map, Value};

/// Flatten a JSON value into a mapping from jpath to primitive value
///
/// Runs the same traversal as [`get_jpaths`] and folds the ordered entries
/// into a map, first-to-last with last-write-wins. Jpaths are unique within
/// one traversal, so the fold order is inconsequential in practice; the map
/// preserves traversal order.
pub fn get_jpaths_as_object(value: &Value, options: &FlattenOptions) -> Map<String, Value> {
    let mut map = Map::new();
    for entry in get_jpaths(value, options) {
        map.insert(entry.jpath, entry.value.into_json());
    }
    map
}
