//! UI rendering for the tag editor.
//!
//! One screen: a title line, the palette button row, the bordered segment
//! strip (chips, inline text fields, and the trailing active input), and a
//! key hint line at the bottom. The hit area registry is rebuilt on every
//! frame while drawing.

pub mod interaction;
pub mod palette_bar;
pub mod strip;
pub mod theme;

pub use interaction::{ClickAction, HitArea, HitAreaRegistry};

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Widget},
    Frame,
};

use crate::app::{App, Focus};
use theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_BORDER_FOCUSED, COLOR_PLACEHOLDER};

/// Render the whole UI for the current state.
pub fn render(frame: &mut Frame, app: &mut App) {
    app.hit_registry.clear();

    let area = frame.area();
    if area.width < 4 || area.height < 5 {
        return;
    }

    // The strip's flow layout decides how tall the strip box is, so run it
    // before splitting the screen.
    let inner_width = area.width.saturating_sub(2);
    let strip_layout =
        strip::layout_strip(app.editor.segments(), app.measure.as_ref(), inner_width);
    let strip_height = (strip_layout.rows + 2).min(area.height.saturating_sub(4));

    let [title_area, palette_area, _, strip_area, _, hints_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(strip_height),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    render_title(frame, title_area);

    let buf = frame.buffer_mut();
    palette_bar::render_palette_bar(app, palette_area, buf);

    let border_color = if app.focus == Focus::Strip {
        COLOR_BORDER_FOCUSED
    } else {
        COLOR_BORDER
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(" tags ");
    let inner = block.inner(strip_area);
    Widget::render(&block, strip_area, buf);

    let strip_layout = strip_layout.shifted(inner.x, inner.y);
    strip::render_strip(app, &strip_layout, inner, buf);

    render_hints(frame, hints_area);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let line = Line::styled(
        " tagstrip ",
        Style::default()
            .fg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(line, area);
}

fn render_hints(frame: &mut Frame, area: Rect) {
    let line = Line::styled(
        " Tab focus · ←/→ move · Enter pick · Backspace delete · Ctrl+C quit",
        Style::default().fg(COLOR_PLACEHOLDER),
    );
    frame.render_widget(line, area);
}
