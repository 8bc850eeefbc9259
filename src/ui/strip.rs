//! Flow layout and rendering for the segment strip.
//!
//! Segments are placed left to right at their measured widths and wrap to
//! the next row when the remaining width runs out, like inline content in
//! the original widget. The active input always comes last and takes the
//! full remaining width of its row.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use crate::app::{App, Focus};
use crate::editor::{Segment, SegmentId};
use crate::measure::TextMeasure;
use crate::ui::interaction::ClickAction;
use crate::ui::theme::{COLOR_CHIP_SELECTED_BG, COLOR_INPUT_TEXT};
use crate::widgets::TagChip;

/// Horizontal gap between strip items, in cells.
const ITEM_GAP: u16 = 1;

/// The active input never shrinks below this width before wrapping to a
/// fresh row.
pub const MIN_INPUT_WIDTH: u16 = 12;

/// One positioned segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripSlot {
    pub id: SegmentId,
    pub rect: Rect,
}

/// Result of the flow layout pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripLayout {
    pub slots: Vec<StripSlot>,
    pub input_rect: Rect,
    /// Rows the strip occupies, including the input's row.
    pub rows: u16,
}

impl StripLayout {
    /// Translate every rect by the given origin.
    pub fn shifted(mut self, dx: u16, dy: u16) -> Self {
        for slot in &mut self.slots {
            slot.rect.x += dx;
            slot.rect.y += dy;
        }
        self.input_rect.x += dx;
        self.input_rect.y += dy;
        self
    }
}

/// Width of one segment in the strip.
fn segment_width(segment: &Segment, measure: &dyn TextMeasure) -> u16 {
    if segment.is_tag() {
        TagChip::width(segment.text())
    } else {
        measure.width(segment.text())
    }
}

/// Lay out the strip into rows of the given width, origin at (0, 0).
pub fn layout_strip(
    segments: &[Segment],
    measure: &dyn TextMeasure,
    width: u16,
) -> StripLayout {
    let width = width.max(1);
    let mut slots = Vec::with_capacity(segments.len());
    let mut x: u16 = 0;
    let mut y: u16 = 0;

    for segment in segments {
        let w = segment_width(segment, measure).min(width);
        if x > 0 && x + w > width {
            x = 0;
            y += 1;
        }
        slots.push(StripSlot {
            id: segment.id(),
            rect: Rect::new(x, y, w, 1),
        });
        x += w + ITEM_GAP;
    }

    // The active input takes the rest of the row, or a fresh full row when
    // what is left is too narrow to type into.
    if x > 0 && width.saturating_sub(x) < MIN_INPUT_WIDTH {
        x = 0;
        y += 1;
    }
    let input_rect = Rect::new(x, y, width - x, 1);

    StripLayout {
        slots,
        input_rect,
        rows: y + 1,
    }
}

/// Draw the strip contents and register their hit areas.
///
/// `layout` must come from [`layout_strip`] over the same segments,
/// already shifted to `clip`'s origin. Rows that overflow `clip` (a
/// terminal too short for the strip) are skipped.
pub fn render_strip(app: &mut App, layout: &StripLayout, clip: Rect, buf: &mut Buffer) {
    let strip_focused = app.focus == Focus::Strip;
    let pending = app.editor.pending();
    let inside = |rect: Rect| rect.y >= clip.y && rect.y < clip.y + clip.height;

    for (index, slot) in layout.slots.iter().enumerate() {
        if !inside(slot.rect) {
            continue;
        }
        let segment = match app.editor.segment(slot.id) {
            Some(s) => s,
            None => continue,
        };
        let selected = strip_focused && app.strip_selected == Some(index);

        if segment.is_tag() {
            let delete_rect = TagChip::delete_rect(slot.rect);
            app.hit_registry.register(
                delete_rect,
                ClickAction::DeleteSegment(slot.id),
                Some(Style::default().bg(COLOR_CHIP_SELECTED_BG)),
            );
            let hovered = app.hit_registry.hover_style_for(delete_rect).is_some();
            TagChip::new(segment.text())
                .selected(selected || hovered)
                .render(slot.rect, buf);
        } else {
            render_text_field(segment, slot.rect, selected, pending, buf);
            app.hit_registry
                .register(slot.rect, ClickAction::FocusSegment(slot.id), None);
        }
    }

    if inside(layout.input_rect) {
        let input_focused = app.focus == Focus::ActiveInput;
        app.editor.input.render(layout.input_rect, buf, input_focused);
        app.hit_registry
            .register(layout.input_rect, ClickAction::FocusActiveInput, None);
    }
}

/// Inline editable field for a text segment.
///
/// The field is sized to its content by the width estimator, so no
/// horizontal scrolling applies; content starts one cell in. The caret is
/// drawn from the pending insertion point while this segment is the
/// selected one.
fn render_text_field(
    segment: &Segment,
    area: Rect,
    selected: bool,
    pending: Option<crate::editor::InsertionPoint>,
    buf: &mut Buffer,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let style = Style::default().fg(COLOR_INPUT_TEXT);
    let underline = Style::default()
        .fg(COLOR_INPUT_TEXT)
        .add_modifier(Modifier::UNDERLINED);

    // Underlined background marks the editable run, empty ones included
    for x in area.x..area.x + area.width {
        buf.set_string(x, area.y, " ", underline);
    }

    let visible = area.width.saturating_sub(1) as usize;
    let shown: String = segment.text().chars().take(visible).collect();
    if area.width > 1 {
        buf.set_string(area.x + 1, area.y, &shown, style.add_modifier(Modifier::UNDERLINED));
    }

    if selected {
        let caret = pending
            .filter(|p| p.segment_id == segment.id())
            .map(|p| p.caret_offset)
            .unwrap_or(0)
            .min(segment.char_len());
        let col = area.x + 1 + caret as u16;
        if col < area.x + area.width {
            let under = segment.text().chars().nth(caret).unwrap_or(' ');
            buf.set_string(
                col,
                area.y,
                under.to_string(),
                Style::default().add_modifier(Modifier::REVERSED),
            );
        }
    }
}

/// Caret offset for a click at absolute column `x` inside a text field.
pub fn caret_for_click(field: Rect, x: u16, char_len: usize) -> usize {
    let col = x.saturating_sub(field.x).saturating_sub(1) as usize;
    col.min(char_len)
}
