//! Traversal configuration and jpath filtering

use crate::error::{FlattenError, Result};
use regex::Regex;

/// Configuration for a flattening traversal
///
/// All fields default independently; `FlattenOptions::default()` matches the
/// behavior most callers want for logging and telemetry views.
#[derive(Debug, Clone)]
pub struct FlattenOptions {
    /// Maximum number of sequence elements visited per level, taken from the
    /// front (default: 5). Zero means sequences contribute nothing.
    pub max_array_elements: usize,
    /// Maximum traversal depth, root = depth 0 (default: 3). A value at
    /// exactly this depth is still visited; its children are not. Zero means
    /// only the root is visited.
    pub max_depth: usize,
    /// Allow-list tested against the full leaf jpath. Empty means all jpaths
    /// are included.
    pub include_jpath_regexps: Vec<Regex>,
    /// Deny-list tested against the full leaf jpath. Takes precedence over
    /// the allow-list. Empty means no jpaths are excluded.
    pub exclude_jpath_regexps: Vec<Regex>,
}

impl Default for FlattenOptions {
    fn default() -> Self {
        Self {
            max_array_elements: 5,
            max_depth: 3,
            include_jpath_regexps: Vec::new(),
            exclude_jpath_regexps: Vec::new(),
        }
    }
}

impl FlattenOptions {
    /// Compile and set the allow-list from pattern strings
    pub fn with_include_patterns<I, S>(mut self, patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.include_jpath_regexps = compile_patterns(patterns)?;
        Ok(self)
    }

    /// Compile and set the deny-list from pattern strings
    pub fn with_exclude_patterns<I, S>(mut self, patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.exclude_jpath_regexps = compile_patterns(patterns)?;
        Ok(self)
    }

    /// Whether a leaf at `jpath` passes the include/exclude filters
    ///
    /// Tested only at leaf emission; container descent is never pruned by
    /// filters, since only leaf jpaths are matched.
    pub fn allows(&self, jpath: &str) -> bool {
        self.matches_include(jpath) && !self.matches_exclude(jpath)
    }

    fn matches_include(&self, jpath: &str) -> bool {
        if self.include_jpath_regexps.is_empty() {
            return true;
        }
        self.include_jpath_regexps.iter().any(|re| re.is_match(jpath))
    }

    fn matches_exclude(&self, jpath: &str) -> bool {
        if self.exclude_jpath_regexps.is_empty() {
            return false;
        }
        self.exclude_jpath_regexps.iter().any(|re| re.is_match(jpath))
    }
}

fn compile_patterns<I, S>(patterns: I) -> Result<Vec<Regex>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    patterns
        .into_iter()
        .map(|pattern| {
            let pattern = pattern.as_ref();
            Regex::new(pattern).map_err(|source| FlattenError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })
        })
        .collect()
}
