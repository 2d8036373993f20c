//! JFlat - Bounded flattening of JSON values into jpath/value pairs
//!
//! This crate walks an in-memory `serde_json::Value` tree and produces a flat,
//! ordered list of dot-joined path strings ("jpaths") mapped to their primitive
//! leaf values. The walk is bounded and filterable:
//!
//! - Depth caps (`max_depth`)
//! - Per-sequence element caps (`max_array_elements`)
//! - Regex allow-lists and deny-lists over the full jpath
//! - Deterministic depth-first, document-order traversal
//!
//! Only primitive leaves (strings, numbers, booleans) produce entries; nulls
//! and the containers themselves do not. Typical uses are logging, diffing,
//! redaction of sensitive fields, and telemetry sampling.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod classify;

pub mod entry;
pub mod error;
pub mod flatten;
pub mod options;
pub mod project;

// Re-export commonly used types
pub use entry::{JPathEntry, LeafValue};
pub use error::{FlattenError, Result};
pub use flatten::get_jpaths;
pub use options::FlattenOptions;
pub use project::get_jpaths_as_object;
