//! Conflict-marker resolution strategies.
//!
//! Two independent, stateless strategies collapse each two-sided conflict
//! block down to its ours (HEAD) side: [`ScanFilter`] streams line by line,
//! while [`BlockEraser`] substitutes whole blocks. On well-formed input
//! they produce identical output.

pub mod erase;
pub mod scan;

pub use erase::BlockEraser;
pub use scan::ScanFilter;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Start-of-block sentinel prefix.
pub const START_MARKER: &str = "<<<<<<< HEAD";

/// Separator sentinel prefix between the ours and theirs segments.
pub const SEPARATOR_MARKER: &str = "=======";

/// End-of-block sentinel prefix.
pub const END_MARKER: &str = ">>>>>>>";

/// Which resolution strategy the sweep engine runs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Line-by-line state-tracking filter.
    Scan,
    /// Whole-content block substitution.
    Erase,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scan => write!(f, "scan"),
            Self::Erase => write!(f, "erase"),
        }
    }
}

impl FromStr for Strategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scan" => Ok(Self::Scan),
            "erase" => Ok(Self::Erase),
            other => Err(ConfigError::InvalidValue {
                field: "strategy".into(),
                detail: format!("unknown strategy '{}', use 'scan' or 'erase'", other),
            }),
        }
    }
}
