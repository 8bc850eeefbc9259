//! Palette row: one button per configured label.

use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Focus};
use crate::ui::interaction::ClickAction;
use crate::ui::theme::{
    COLOR_BUTTON_BG, COLOR_BUTTON_FG, COLOR_BUTTON_SELECTED_BG, COLOR_BUTTON_SELECTED_FG,
};

/// Gap between buttons, in cells.
const BUTTON_GAP: u16 = 1;

/// Width of one button: the label plus one space either side.
pub fn button_width(label: &str) -> u16 {
    UnicodeWidthStr::width(label) as u16 + 2
}

/// Draw the palette buttons and register their hit areas.
///
/// Buttons that would overflow the row are dropped rather than wrapped;
/// the palette is expected to stay short.
pub fn render_palette_bar(app: &mut App, area: Rect, buf: &mut Buffer) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let palette_focused = app.focus == Focus::Palette;
    let selected = app.editor.palette.selected();

    let mut x = area.x;
    for (index, label) in app.editor.palette.labels().iter().enumerate() {
        let w = button_width(label);
        if x + w > area.x + area.width {
            break;
        }
        let rect = Rect::new(x, area.y, w, 1);
        app.hit_registry.register(
            rect,
            ClickAction::PickLabel(index),
            Some(Style::default().bg(COLOR_BUTTON_SELECTED_BG)),
        );

        let highlighted =
            (palette_focused && index == selected) || app.hit_registry.hover_style_for(rect).is_some();
        let style = if highlighted {
            Style::default()
                .fg(COLOR_BUTTON_SELECTED_FG)
                .bg(COLOR_BUTTON_SELECTED_BG)
        } else {
            Style::default().fg(COLOR_BUTTON_FG).bg(COLOR_BUTTON_BG)
        };
        buf.set_string(rect.x, rect.y, format!(" {label} "), style);

        x += w + BUTTON_GAP;
    }
}
