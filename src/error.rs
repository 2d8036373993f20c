//! Error types for jflat

use thiserror::Error;

/// Errors raised while building traversal options
///
/// Flattening itself is total over all JSON values and never fails; the only
/// fallible surface is compiling user-supplied filter patterns.
#[derive(Debug, Error)]
pub enum FlattenError {
    /// A filter pattern failed to compile as a regular expression.
    #[error("Invalid jpath filter pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The pattern string that failed to compile
        pattern: String,
        /// The underlying regex compilation error
        #[source]
        source: regex::Error,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, FlattenError>;
