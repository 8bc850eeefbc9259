//! Width estimation for inline text fields.
//!
//! Text segments render as inline fields sized to their content. The
//! measurement is behind a capability trait so the strip layout is
//! testable without a terminal: production code measures display cells
//! with `unicode-width`, tests use a deterministic per-char fake.

use unicode_width::UnicodeWidthStr;

/// Fixed padding added to every measured field, in cells.
///
/// Keeps a little air around the content so the caret has room at the end
/// of the field (the terminal analog of the original widget's +4px).
pub const FIELD_PADDING: u16 = 2;

/// Measures the rendered width of inline field content in cells.
pub trait TextMeasure {
    /// Width needed to display `content`, including [`FIELD_PADDING`].
    ///
    /// Never less than `1 + FIELD_PADDING`: an empty field still renders a
    /// single-space placeholder cell so it remains a clickable target.
    fn width(&self, content: &str) -> u16;
}

/// Production measure backed by unicode display width.
#[derive(Debug, Clone, Copy, Default)]
pub struct CellMeasure;

impl TextMeasure for CellMeasure {
    fn width(&self, content: &str) -> u16 {
        let cells = UnicodeWidthStr::width(content).max(1);
        let cells = cells.min((u16::MAX - FIELD_PADDING) as usize) as u16;
        cells + FIELD_PADDING
    }
}

/// Deterministic measure for tests and benches: every char counts as a
/// fixed number of cells, with the same floor and padding as the
/// production impl.
#[derive(Debug, Clone, Copy)]
pub struct FixedMeasure(pub u16);

impl TextMeasure for FixedMeasure {
    fn width(&self, content: &str) -> u16 {
        let cells = (content.chars().count() as u16).saturating_mul(self.0).max(1);
        cells + FIELD_PADDING
    }
}
