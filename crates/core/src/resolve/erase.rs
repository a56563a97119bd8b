//! Whole-content conflict-block eraser.
//!
//! [`BlockEraser`] matches each complete conflict block with a single lazy
//! pattern and replaces it with its ours segment. Incomplete marker triples
//! never match and are left byte-for-byte intact.

use regex_lite::Regex;

use crate::errors::ResolveError;

/// One complete conflict block: start marker line, ours segment, separator
/// line, theirs segment, end marker line with its trailing branch/commit
/// identifier. Lazy repetition bounds each match at the nearest sentinel so
/// adjacent blocks never merge into one oversized match.
const BLOCK_PATTERN: &str = r"(?s)<<<<<<< HEAD\n(.*?)\n=======\n.*?\n>>>>>>> [^\n]+";

/// Block-substitution resolution: keep ours, erase the rest of each block.
pub struct BlockEraser {
    block: Regex,
}

impl BlockEraser {
    /// Compile the conflict-block pattern.
    pub fn new() -> Result<Self, ResolveError> {
        let block =
            Regex::new(BLOCK_PATTERN).map_err(|e| ResolveError::InvalidPattern(e.to_string()))?;
        Ok(Self { block })
    }

    /// Replace every complete conflict block in `content` with its ours
    /// segment, discarding the separator, the theirs segment, and the end
    /// marker's trailing identifier. Matching is non-overlapping and
    /// leftmost-first; documents with no complete block come back unchanged.
    pub fn keep_ours(&self, content: &str) -> String {
        self.block.replace_all(content, "$1").into_owned()
    }
}
