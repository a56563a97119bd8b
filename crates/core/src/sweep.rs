//! The read-transform-overwrite engine.
//!
//! [`Sweeper`] applies one resolution strategy to an injected list of file
//! paths, one file at a time: read the whole content, resolve it purely in
//! memory, then reacquire a handle and overwrite the same path. There is no
//! atomic rename and no partial-write protection; a failure aborts the run
//! immediately, leaving already-processed files transformed and later files
//! untouched.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::errors::{CoreError, SweepError};
use crate::resolve::{BlockEraser, ScanFilter, Strategy};

/// Summary of one sweep run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepReport {
    /// Files read, resolved, and written back.
    pub files_processed: usize,
    /// Files whose content actually differed after resolution.
    pub files_changed: usize,
}

/// Applies a resolution strategy to files in place.
pub struct Sweeper {
    strategy: Strategy,
    eraser: BlockEraser,
}

impl Sweeper {
    /// Create a sweeper for the given strategy.
    pub fn new(strategy: Strategy) -> Result<Self, CoreError> {
        let eraser = BlockEraser::new()?;
        Ok(Self { strategy, eraser })
    }

    /// The strategy this sweeper runs.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Resolve one document's content in memory.
    pub fn resolve_content(&self, content: &str) -> String {
        match self.strategy {
            Strategy::Scan => ScanFilter::keep_ours(content),
            Strategy::Erase => self.eraser.keep_ours(content),
        }
    }

    /// Sweep a single file: read, resolve, overwrite.
    ///
    /// The file is rewritten even when nothing changed, completing the
    /// read-transform-overwrite cycle. Returns whether the content differed.
    pub fn sweep_file(&self, path: &Path) -> Result<bool, SweepError> {
        let content = std::fs::read_to_string(path).map_err(|e| SweepError::ReadFailed {
            path: path.display().to_string(),
            source: e,
        })?;

        let resolved = self.resolve_content(&content);
        let changed = resolved != content;

        std::fs::write(path, &resolved).map_err(|e| SweepError::WriteFailed {
            path: path.display().to_string(),
            source: e,
        })?;

        debug!(path = %path.display(), changed, "file swept");
        Ok(changed)
    }

    /// Sweep every path in order, aborting on the first failure.
    ///
    /// No retries and no rollback: files processed before the failure stay
    /// transformed, the rest stay untouched.
    pub fn sweep_paths(&self, paths: &[PathBuf]) -> Result<SweepReport, SweepError> {
        info!(
            strategy = %self.strategy,
            count = paths.len(),
            "starting sweep"
        );

        let mut report = SweepReport {
            files_processed: 0,
            files_changed: 0,
        };

        for path in paths {
            let changed = self.sweep_file(path)?;
            report.files_processed += 1;
            if changed {
                report.files_changed += 1;
            }
        }

        info!(
            processed = report.files_processed,
            changed = report.files_changed,
            "sweep complete"
        );
        Ok(report)
    }
}
