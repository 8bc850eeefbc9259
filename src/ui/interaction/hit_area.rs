//! Hit area registry for mouse interactions.
//!
//! Render code registers a clickable region for every interactive element
//! each frame; the event loop queries the registry to turn a mouse event
//! into a [`ClickAction`]. The last known cursor position is kept across
//! frames so hover feedback survives redraws.

use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::editor::SegmentId;

/// Action triggered by clicking a registered region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    /// Pick the palette label at this index.
    PickLabel(usize),
    /// Remove the segment with this id (chip delete control).
    DeleteSegment(SegmentId),
    /// Focus a text segment's inline field; the caret lands on the
    /// clicked column.
    FocusSegment(SegmentId),
    /// Focus the trailing active input.
    FocusActiveInput,
}

/// A clickable region with its action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitArea {
    pub rect: Rect,
    pub action: ClickAction,
    /// Style applied to the region while hovered, if any.
    pub hover_style: Option<Style>,
}

impl HitArea {
    /// Check if a point is within this hit area.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x + self.rect.width
            && y >= self.rect.y
            && y < self.rect.y + self.rect.height
    }
}

/// Per-frame registry of clickable regions.
///
/// Areas are cleared at the start of each render cycle and repopulated
/// while drawing; the cursor position persists so hover state can be
/// recomputed against the fresh areas. Later registrations win for
/// overlapping regions.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    areas: Vec<HitArea>,
    cursor: Option<(u16, u16)>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all registered areas. The cursor position is kept.
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    /// Register a clickable region.
    pub fn register(&mut self, rect: Rect, action: ClickAction, hover_style: Option<Style>) {
        self.areas.push(HitArea {
            rect,
            action,
            hover_style,
        });
    }

    /// Topmost hit area containing the point, if any.
    ///
    /// Areas are checked in reverse registration order so the last
    /// registered (topmost) area wins.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<&HitArea> {
        self.areas.iter().rev().find(|area| area.contains(x, y))
    }

    /// Record a mouse move. Returns true when the hovered area changed
    /// and a redraw is needed.
    pub fn update_hover(&mut self, x: u16, y: u16) -> bool {
        let before = self.hovered_area();
        self.cursor = Some((x, y));
        self.hovered_area() != before
    }

    /// The area currently under the cursor, if any.
    pub fn hovered_area(&self) -> Option<HitArea> {
        let (x, y) = self.cursor?;
        self.hit_test(x, y).copied()
    }

    /// Hover style for a rect if it is the currently hovered area.
    pub fn hover_style_for(&self, rect: Rect) -> Option<Style> {
        let area = self.hovered_area()?;
        if area.rect == rect {
            area.hover_style
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}
