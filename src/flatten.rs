//! Depth-first flattening of JSON values into jpath entries

use crate::classify::{classify, NodeKind};
use crate::entry::JPathEntry;
use crate::options::FlattenOptions;
use serde_json::Value;

/// Flatten a JSON value into an ordered list of (jpath, primitive) entries
///
/// Walks `value` depth-first in document order, emitting one entry per
/// primitive leaf whose jpath passes the configured filters. Sequences are
/// truncated to the leading `max_array_elements` elements at every level, and
/// nodes deeper than `max_depth` are not visited (the root is depth 0).
/// Nulls and unclassifiable values contribute nothing.
///
/// The result is never an error: flattening is a pure, total function of its
/// inputs, and repeated calls yield identical ordered output.
pub fn get_jpaths(value: &Value, options: &FlattenOptions) -> Vec<JPathEntry> {
    let mut entries = Vec::new();
    traverse(value, String::new(), 0, options, &mut entries);
    entries
}

fn traverse(
    value: &Value,
    prefix: String,
    depth: usize,
    options: &FlattenOptions,
    entries: &mut Vec<JPathEntry>,
) {
    if depth > options.max_depth {
        return;
    }

    match classify(value) {
        NodeKind::Sequence(items) => {
            for (idx, item) in items.iter().take(options.max_array_elements).enumerate() {
                let child_prefix = join_step(&prefix, &idx.to_string());
                traverse(item, child_prefix, depth + 1, options, entries);
            }
        }
        NodeKind::KeyValue(map) => {
            for (key, child) in map {
                let child_prefix = join_step(&prefix, key);
                traverse(child, child_prefix, depth + 1, options, entries);
            }
        }
        NodeKind::Primitive(leaf) => {
            if options.allows(&prefix) {
                entries.push(JPathEntry::new(prefix, leaf));
            }
        }
        NodeKind::Unsupported => {}
    }
}

/// Join a traversal step onto a prefix
///
/// The step stands alone iff the prefix is empty, so a root-level key or
/// index is not preceded by a dot.
fn join_step(prefix: &str, step: &str) -> String {
    if prefix.is_empty() {
        step.to_string()
    } else {
        format!("{}.{}", prefix, step)
    }
}
