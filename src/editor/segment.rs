//! Segment model for the tag strip.
//!
//! The strip is an ordered list of [`Segment`]s, each either an immutable
//! [`SegmentKind::Tag`] chip picked from the palette or an editable
//! [`SegmentKind::Text`] run. The trailing active input is not a segment;
//! it lives in [`crate::editor::EditorState`] as ephemeral state.

use std::fmt;

use uuid::Uuid;

/// Stable identifier for a segment.
///
/// Generated at creation, unique for the life of the process, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SegmentId(Uuid);

impl SegmentId {
    /// Generate a fresh id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SegmentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Whether a segment is an opaque tag chip or an editable text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// Immutable, dismissible token chosen from the palette.
    Tag,
    /// Free-text run embedded between tags.
    Text,
}

/// One element of the ordered strip content.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    id: SegmentId,
    kind: SegmentKind,
    text: String,
}

impl Segment {
    /// Create a tag segment carrying a palette label.
    pub fn new_tag(label: impl Into<String>) -> Self {
        Self {
            id: SegmentId::new(),
            kind: SegmentKind::Tag,
            text: label.into(),
        }
    }

    /// Create an editable text segment. The content may be empty.
    pub fn new_text(content: impl Into<String>) -> Self {
        Self {
            id: SegmentId::new(),
            kind: SegmentKind::Text,
            text: content.into(),
        }
    }

    pub fn id(&self) -> SegmentId {
        self.id
    }

    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_tag(&self) -> bool {
        self.kind == SegmentKind::Tag
    }

    pub fn is_text(&self) -> bool {
        self.kind == SegmentKind::Text
    }

    /// Content length in characters (caret offsets are char-indexed).
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Replace the content of a text segment in place. Tags are immutable,
    /// so this is a no-op for them.
    pub(crate) fn set_text(&mut self, text: String) {
        if self.kind == SegmentKind::Text {
            self.text = text;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let a = Segment::new_tag("CSS");
        let b = Segment::new_tag("CSS");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_tag_text_is_immutable() {
        let mut tag = Segment::new_tag("React");
        tag.set_text("changed".to_string());
        assert_eq!(tag.text(), "React");
    }

    #[test]
    fn test_text_segment_is_editable() {
        let mut text = Segment::new_text("hello");
        let id = text.id();
        text.set_text("world".to_string());
        assert_eq!(text.text(), "world");
        assert_eq!(text.id(), id, "id must survive edits");
    }

    #[test]
    fn test_char_len_counts_chars_not_bytes() {
        let text = Segment::new_text("héllo");
        assert_eq!(text.char_len(), 5);
    }
}
