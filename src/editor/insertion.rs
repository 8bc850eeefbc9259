//! Pending insertion point for cursor-aware tag placement.
//!
//! When a text segment's inline field has focus, the editor remembers the
//! segment id and the caret offset within it as a single optional value.
//! Modeling both facts as one struct makes the "clear both together"
//! invariant structural: there is no state where an id is remembered
//! without an offset.

use super::segment::SegmentId;

/// Where the next picked tag should be inserted relative to a text segment.
///
/// The value is write-only until a palette pick consumes it. Focus loss does
/// NOT clear it; a stale point survives until the next pick reads it, which
/// matches the widget's original behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertionPoint {
    /// The text segment that last had focus.
    pub segment_id: SegmentId,
    /// Zero-based character offset of the caret within that segment.
    pub caret_offset: usize,
}

impl InsertionPoint {
    pub fn new(segment_id: SegmentId, caret_offset: usize) -> Self {
        Self {
            segment_id,
            caret_offset,
        }
    }

    /// Whether the picked tag goes before the target text segment.
    ///
    /// The tag goes before when the caret sits in the first half of the
    /// content: `caret <= len / 2` with real division, so a caret exactly at
    /// the midpoint of even-length content still inserts before. Evaluated
    /// as `2 * caret <= char_len` to stay in integer arithmetic.
    pub fn splits_before(&self, content: &str) -> bool {
        2 * self.caret_offset <= content.chars().count()
    }
}
