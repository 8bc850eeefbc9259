//! Core editor state and transitions for the tag strip.
//!
//! [`EditorState`] is the single explicit state record for the widget:
//! the ordered segment list, the trailing active input, the optional
//! pending insertion point, and the palette. Every user event maps to one
//! synchronous transition method here; rendering and event decoding live
//! elsewhere, so the whole behavioral contract is testable headless.

mod insertion;
mod segment;

pub use insertion::InsertionPoint;
pub use segment::{Segment, SegmentId, SegmentKind};

use tracing::debug;

use crate::palette::Palette;
use crate::widgets::LineInput;

/// Placeholder hint shown in the empty active input.
pub const INPUT_PLACEHOLDER: &str = "Type or select a tag...";

/// The tag editor's entire mutable state.
#[derive(Debug)]
pub struct EditorState {
    segments: Vec<Segment>,
    /// Trailing always-present free-text field. Not a segment.
    pub input: LineInput,
    pending: Option<InsertionPoint>,
    pub palette: Palette,
}

impl EditorState {
    pub fn new(palette: Palette) -> Self {
        Self {
            segments: Vec::new(),
            input: LineInput::with_placeholder(INPUT_PLACEHOLDER),
            pending: None,
            palette,
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn segment(&self, id: SegmentId) -> Option<&Segment> {
        self.segments.iter().find(|s| s.id() == id)
    }

    pub fn segment_index(&self, id: SegmentId) -> Option<usize> {
        self.segments.iter().position(|s| s.id() == id)
    }

    /// The pending insertion point, if a text segment's field was focused.
    pub fn pending(&self) -> Option<InsertionPoint> {
        self.pending
    }

    /// Record that a text segment's inline field gained focus.
    ///
    /// The caret offset at focus time is recorded with it; later caret
    /// movement flows in through [`EditorState::note_caret`]. Focusing the
    /// active input does not go through here and never clears the pending
    /// point (stale points are consumed, not expired).
    pub fn note_focus(&mut self, id: SegmentId, caret_offset: usize) {
        self.pending = Some(InsertionPoint::new(id, caret_offset));
    }

    /// Record caret movement inside the pending segment's field.
    ///
    /// Ignored when `id` is not the current pending target.
    pub fn note_caret(&mut self, id: SegmentId, caret_offset: usize) {
        if let Some(point) = &mut self.pending {
            if point.segment_id == id {
                point.caret_offset = caret_offset;
            }
        }
    }

    /// Apply a palette pick: insert a fresh tag segment into the strip.
    ///
    /// With a pending insertion point, the target text segment is replaced
    /// in place by tag+text or text+tag depending on which half of the
    /// content the caret sat in; a caret exactly at the midpoint inserts
    /// the tag before the text. A pending point whose target no longer
    /// exists is dropped silently and no tag appears.
    ///
    /// Without a pending point, a non-empty active input is first promoted
    /// to a text segment at the end of the strip, then the tag is appended.
    ///
    /// Returns false when `index` names no palette label.
    pub fn pick(&mut self, index: usize) -> bool {
        let Some(label) = self.palette.label(index) else {
            return false;
        };
        let tag = Segment::new_tag(label.to_string());

        if let Some(point) = self.pending.take() {
            let target = self
                .segments
                .iter()
                .position(|s| s.id() == point.segment_id && s.is_text());
            match target {
                Some(pos) => {
                    let text = self.segments.remove(pos);
                    debug!(
                        label = tag.text(),
                        caret = point.caret_offset,
                        before = point.splits_before(text.text()),
                        "tag picked at insertion point"
                    );
                    if point.splits_before(text.text()) {
                        self.segments.insert(pos, text);
                        self.segments.insert(pos, tag);
                    } else {
                        self.segments.insert(pos, tag);
                        self.segments.insert(pos, text);
                    }
                }
                None => {
                    // Target was deleted since focus; drop the pick.
                    debug!(label = tag.text(), "insertion target gone, pick dropped");
                }
            }
        } else {
            if !self.input.is_empty() {
                let promoted = Segment::new_text(self.input.take());
                debug!(content = promoted.text(), "active input promoted");
                self.segments.push(promoted);
            }
            debug!(label = tag.text(), "tag appended");
            self.segments.push(tag);
        }
        true
    }

    /// Replace a text segment's content in place; id and order unchanged.
    ///
    /// No-op for tags and unknown ids.
    pub fn replace_text(&mut self, id: SegmentId, text: String) {
        if let Some(segment) = self.segments.iter_mut().find(|s| s.id() == id) {
            segment.set_text(text);
        }
    }

    /// Remove the segment with the given id. Idempotent: removing an id
    /// that is no longer present is a no-op.
    pub fn delete_segment(&mut self, id: SegmentId) -> bool {
        let before = self.segments.len();
        self.segments.retain(|s| s.id() != id);
        let deleted = self.segments.len() < before;
        if deleted {
            debug!(%id, "segment deleted");
        }
        deleted
    }

    /// Backspace inside a text segment's field when its content is empty:
    /// the segment itself is deleted. Non-empty segments are untouched
    /// (their field handles ordinary character deletion).
    pub fn backspace_in_empty_segment(&mut self, id: SegmentId) -> bool {
        let empty_text = self
            .segment(id)
            .is_some_and(|s| s.is_text() && s.text().is_empty());
        if empty_text {
            self.delete_segment(id)
        } else {
            false
        }
    }

    /// Backspace in the active input.
    ///
    /// Non-empty input deletes a character as usual. Empty input deletes
    /// the strip's last segment iff it is a tag; a trailing text segment
    /// or an empty strip is left alone.
    pub fn input_backspace(&mut self) {
        if !self.input.is_empty() {
            self.input.backspace();
            return;
        }
        if self.segments.last().is_some_and(Segment::is_tag) {
            let tag = self.segments.pop();
            if let Some(tag) = tag {
                debug!(label = tag.text(), "trailing tag removed by backspace");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor() -> EditorState {
        EditorState::new(Palette::default())
    }

    /// Index of the "CSS" label in the default palette.
    const CSS: usize = 1;

    fn kinds(state: &EditorState) -> Vec<(SegmentKind, &str)> {
        state
            .segments()
            .iter()
            .map(|s| (s.kind(), s.text()))
            .collect()
    }

    #[test]
    fn test_pick_with_empty_input_appends_one_tag() {
        let mut state = editor();
        assert!(state.pick(CSS));
        assert_eq!(kinds(&state), vec![(SegmentKind::Tag, "CSS")]);
        assert!(state.input.is_empty());
    }

    #[test]
    fn test_pick_promotes_nonempty_input_first() {
        let mut state = editor();
        state.input.insert_str("hello");
        assert!(state.pick(CSS));
        assert_eq!(
            kinds(&state),
            vec![(SegmentKind::Text, "hello"), (SegmentKind::Tag, "CSS")]
        );
        assert!(state.input.is_empty(), "promotion clears the active input");
    }

    #[test]
    fn test_pick_with_caret_in_first_half_inserts_before() {
        let mut state = editor();
        state.input.insert_str("hello");
        state.pick(CSS); // [Text("hello"), Tag("CSS")]
        let text_id = state.segments()[0].id();

        state.note_focus(text_id, 0);
        state.note_caret(text_id, 2); // 2 <= 5/2
        state.pick(CSS);
        assert_eq!(
            kinds(&state),
            vec![
                (SegmentKind::Tag, "CSS"),
                (SegmentKind::Text, "hello"),
                (SegmentKind::Tag, "CSS"),
            ]
        );
    }

    #[test]
    fn test_pick_with_caret_in_second_half_inserts_after() {
        let mut state = editor();
        state.input.insert_str("hello");
        state.pick(CSS);
        let text_id = state.segments()[0].id();

        state.note_focus(text_id, 4); // 4 > 5/2
        state.pick(CSS);
        assert_eq!(
            kinds(&state),
            vec![
                (SegmentKind::Text, "hello"),
                (SegmentKind::Tag, "CSS"),
                (SegmentKind::Tag, "CSS"),
            ]
        );
    }

    #[test]
    fn test_exact_midpoint_inserts_before() {
        let mut state = editor();
        state.input.insert_str("abcd");
        state.pick(CSS);
        let text_id = state.segments()[0].id();

        state.note_focus(text_id, 2); // exactly len/2
        state.pick(CSS);
        assert_eq!(state.segments()[0].kind(), SegmentKind::Tag);
        assert_eq!(state.segments()[1].text(), "abcd");
    }

    #[test]
    fn test_pick_consumes_pending_point() {
        let mut state = editor();
        state.input.insert_str("hello");
        state.pick(CSS);
        let text_id = state.segments()[0].id();

        state.note_focus(text_id, 1);
        state.pick(CSS);
        assert!(state.pending().is_none(), "pick must clear the pending point");

        // Next pick falls through to the append path
        state.pick(CSS);
        assert!(state.segments().last().unwrap().is_tag());
        assert_eq!(state.segments().len(), 4);
    }

    #[test]
    fn test_pick_with_stale_target_is_silent_noop() {
        let mut state = editor();
        state.input.insert_str("hello");
        state.pick(CSS);
        let text_id = state.segments()[0].id();

        state.note_focus(text_id, 2);
        state.delete_segment(text_id);
        let before = state.segments().len();

        assert!(state.pick(CSS), "pick itself succeeds");
        assert_eq!(state.segments().len(), before, "no tag appears");
        assert!(state.pending().is_none(), "stale point is still cleared");
    }

    #[test]
    fn test_pick_with_pending_ignores_active_input() {
        // A pending point takes priority; the active input is not promoted.
        let mut state = editor();
        state.input.insert_str("hello");
        state.pick(CSS);
        let text_id = state.segments()[0].id();

        state.note_focus(text_id, 0);
        state.input.insert_str("stays");
        state.pick(CSS);
        assert_eq!(state.input.content(), "stays");
        assert_eq!(state.segments().len(), 3);
    }

    #[test]
    fn test_pick_out_of_range_label() {
        let mut state = editor();
        assert!(!state.pick(99));
        assert!(state.segments().is_empty());
    }

    #[test]
    fn test_replace_text_round_trip_preserves_id() {
        let mut state = editor();
        state.input.insert_str("draft");
        state.pick(CSS);
        let id = state.segments()[0].id();

        state.replace_text(id, "final".to_string());
        let segment = state.segment(id).unwrap();
        assert_eq!(segment.text(), "final");
        assert_eq!(segment.id(), id);
        assert_eq!(state.segment_index(id), Some(0), "order unchanged");
    }

    #[test]
    fn test_replace_text_on_tag_is_noop() {
        let mut state = editor();
        state.pick(CSS);
        let id = state.segments()[0].id();
        state.replace_text(id, "mutated".to_string());
        assert_eq!(state.segments()[0].text(), "CSS");
    }

    #[test]
    fn test_delete_segment_is_idempotent() {
        let mut state = editor();
        state.pick(0);
        state.pick(1);
        state.pick(2);
        let id = state.segments()[1].id();

        assert!(state.delete_segment(id));
        assert_eq!(kinds(&state).len(), 2);
        assert_eq!(state.segments()[0].text(), "HTML");
        assert_eq!(state.segments()[1].text(), "JavaScript");

        assert!(!state.delete_segment(id), "retry on a gone id is a no-op");
        assert_eq!(kinds(&state).len(), 2);
    }

    #[test]
    fn test_backspace_in_empty_segment_deletes_it() {
        let mut state = editor();
        state.input.insert_str("x");
        state.pick(CSS);
        let id = state.segments()[0].id();

        state.replace_text(id, String::new());
        assert!(state.backspace_in_empty_segment(id));
        assert_eq!(state.segments().len(), 1);
    }

    #[test]
    fn test_backspace_in_nonempty_segment_keeps_it() {
        let mut state = editor();
        state.input.insert_str("x");
        state.pick(CSS);
        let id = state.segments()[0].id();
        assert!(!state.backspace_in_empty_segment(id));
        assert_eq!(state.segments().len(), 2);
    }

    #[test]
    fn test_input_backspace_removes_trailing_tag() {
        let mut state = editor();
        state.pick(CSS);
        state.input_backspace();
        assert!(state.segments().is_empty());
    }

    #[test]
    fn test_input_backspace_spares_trailing_text() {
        let mut state = editor();
        state.input.insert_str("hello");
        state.pick(CSS);
        state.input_backspace(); // removes the tag
        state.input_backspace(); // trailing segment is now text: no effect
        assert_eq!(kinds(&state), vec![(SegmentKind::Text, "hello")]);
    }

    #[test]
    fn test_input_backspace_on_empty_strip_is_noop() {
        let mut state = editor();
        state.input_backspace();
        assert!(state.segments().is_empty());
    }

    #[test]
    fn test_input_backspace_edits_nonempty_input() {
        let mut state = editor();
        state.pick(CSS);
        state.input.insert_str("ab");
        state.input_backspace();
        assert_eq!(state.input.content(), "a");
        assert_eq!(state.segments().len(), 1, "tag stays while input non-empty");
    }

    #[test]
    fn test_note_caret_ignores_other_segments() {
        let mut state = editor();
        state.input.insert_str("one");
        state.pick(CSS);
        state.input.insert_str("two");
        state.pick(CSS);
        let first = state.segments()[0].id();
        let third = state.segments()[2].id();

        state.note_focus(first, 1);
        state.note_caret(third, 2);
        assert_eq!(state.pending().unwrap().segment_id, first);
        assert_eq!(state.pending().unwrap().caret_offset, 1);

        state.note_caret(first, 3);
        assert_eq!(state.pending().unwrap().caret_offset, 3);
    }

    #[test]
    fn test_pending_survives_until_consumed() {
        // Deleting the target does not clear the point; only a pick does.
        let mut state = editor();
        state.input.insert_str("hello");
        state.pick(CSS);
        let id = state.segments()[0].id();
        state.note_focus(id, 2);
        state.delete_segment(id);
        assert!(state.pending().is_some(), "stale point persists");
    }
}
