//! Line-oriented conflict-marker filter.
//!
//! [`ScanFilter`] walks a document line by line, tracking whether the scan
//! is currently inside the ours or theirs segment of a conflict block. Ours
//! lines and unrelated lines pass through; theirs lines and all three
//! marker lines are dropped.

use tracing::debug;

use super::{END_MARKER, SEPARATOR_MARKER, START_MARKER};

/// Where the scan currently is relative to a conflict block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Not inside any conflict block.
    Outside,
    /// Between the start marker and the separator.
    Ours,
    /// Between the separator and the end marker.
    Theirs,
}

/// Stateless line-by-line resolution: keep ours, drop theirs and markers.
pub struct ScanFilter;

impl ScanFilter {
    /// Resolve every conflict block in `content`, keeping the ours side.
    ///
    /// Splits on `'\n'` rather than [`str::lines`] so a trailing newline
    /// survives the round-trip. A separator or end marker outside an active
    /// block is treated as ordinary content and kept. A document that ends
    /// mid-block is accepted silently: lines after an unmatched start
    /// marker are kept, lines after an unmatched separator are not.
    pub fn keep_ours(content: &str) -> String {
        let mut state = ScanState::Outside;
        let mut kept: Vec<&str> = Vec::new();

        for line in content.split('\n') {
            if line.starts_with(START_MARKER) {
                state = ScanState::Ours;
            } else if line.starts_with(SEPARATOR_MARKER) {
                if state == ScanState::Ours {
                    state = ScanState::Theirs;
                } else {
                    kept.push(line);
                }
            } else if line.starts_with(END_MARKER) {
                if state == ScanState::Theirs {
                    state = ScanState::Outside;
                } else {
                    kept.push(line);
                }
            } else if state != ScanState::Theirs {
                kept.push(line);
            }
        }

        if state != ScanState::Outside {
            debug!(?state, "document ended inside a conflict block");
        }

        kept.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_block_keeps_ours_lines() {
        let input = "a\n<<<<<<< HEAD\nb\n=======\nc\n>>>>>>> branch1\nd";
        assert_eq!(ScanFilter::keep_ours(input), "a\nb\nd");
    }

    #[test]
    fn test_no_markers_is_identity() {
        let input = "fn main() {\n    println!(\"hi\");\n}\n";
        assert_eq!(ScanFilter::keep_ours(input), input);
    }

    #[test]
    fn test_trailing_newline_preserved() {
        let input = "a\n<<<<<<< HEAD\nb\n=======\nc\n>>>>>>> x\nd\n";
        assert_eq!(ScanFilter::keep_ours(input), "a\nb\nd\n");
    }

    #[test]
    fn test_multiple_blocks_resolved_independently() {
        let input = "<<<<<<< HEAD\nL1\n=======\nR1\n>>>>>>> h1\nmid\n<<<<<<< HEAD\nL2\n=======\nR2\n>>>>>>> h2";
        assert_eq!(ScanFilter::keep_ours(input), "L1\nmid\nL2");
    }

    #[test]
    fn test_stray_separator_outside_block_is_kept() {
        let input = "a\n=======\nb";
        assert_eq!(ScanFilter::keep_ours(input), input);
    }

    #[test]
    fn test_stray_end_marker_outside_block_is_kept() {
        let input = "a\n>>>>>>> leftover\nb";
        assert_eq!(ScanFilter::keep_ours(input), input);
    }

    // Known edge case: an unterminated block is accepted silently rather
    // than reported. The start marker still disappears and the lines after
    // it are kept, since the scan never left the ours segment.
    #[test]
    fn test_unterminated_start_marker_keeps_following_lines() {
        let input = "a\n<<<<<<< HEAD\nb\nc";
        assert_eq!(ScanFilter::keep_ours(input), "a\nb\nc");
    }

    // Known edge case: a block that ends after the separator silently drops
    // everything from the separator to end-of-input.
    #[test]
    fn test_unterminated_block_drops_trailing_lines() {
        let input = "a\n<<<<<<< HEAD\nb\n=======\nc\nd";
        assert_eq!(ScanFilter::keep_ours(input), "a\nb");
    }

    #[test]
    fn test_idempotent_on_resolved_output() {
        let input = "a\n<<<<<<< HEAD\nb\n=======\nc\n>>>>>>> branch1\nd";
        let once = ScanFilter::keep_ours(input);
        assert_eq!(ScanFilter::keep_ours(&once), once);
    }

    #[test]
    fn test_marker_prefix_with_trailing_text_still_matches() {
        // Markers are matched by prefix; the end marker carries a branch
        // name and the separator may carry extra '=' characters.
        let input = "x\n<<<<<<< HEAD\nours\n========\ntheirs\n>>>>>>> feature/topic-1\ny";
        assert_eq!(ScanFilter::keep_ours(input), "x\nours\ny");
    }
}
