//! Dismissible tag chip.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::theme::{COLOR_CHIP_BG, COLOR_CHIP_DELETE, COLOR_CHIP_FG, COLOR_CHIP_SELECTED_BG};

/// Cells occupied by a chip beyond its label: a leading space, a space
/// before the delete control, the control itself, and a trailing space.
const CHIP_CHROME: u16 = 4;

/// Renders a tag segment as ` label × ` with a delete control.
#[derive(Debug, Clone, Copy)]
pub struct TagChip<'a> {
    label: &'a str,
    /// Keyboard selection highlight
    selected: bool,
}

impl<'a> TagChip<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            selected: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Total cell width of a chip for this label.
    pub fn width(label: &str) -> u16 {
        UnicodeWidthStr::width(label) as u16 + CHIP_CHROME
    }

    /// The delete control's region within the chip's rendered rect.
    pub fn delete_rect(chip: Rect) -> Rect {
        Rect {
            x: chip.x + chip.width.saturating_sub(2),
            y: chip.y,
            width: 2.min(chip.width),
            height: chip.height,
        }
    }

    /// Draw the chip into `area`. The area is expected to be one row tall
    /// and `Self::width(label)` wide; narrower areas truncate the label.
    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let bg = if self.selected {
            COLOR_CHIP_SELECTED_BG
        } else {
            COLOR_CHIP_BG
        };
        let body = Style::default().fg(COLOR_CHIP_FG).bg(bg);

        // Paint the background across the whole chip first
        for x in area.x..area.x + area.width {
            buf.set_string(x, area.y, " ", body);
        }

        let label_width = area.width.saturating_sub(CHIP_CHROME) as usize;
        let label: String = self.label.chars().take(label_width.max(1)).collect();
        if area.width > 1 {
            buf.set_string(area.x + 1, area.y, &label, body);
        }
        if area.width >= 2 {
            buf.set_string(
                area.x + area.width - 2,
                area.y,
                "×",
                Style::default().fg(COLOR_CHIP_DELETE).bg(bg),
            );
        }
    }
}
