//! Event handlers: key presses, clicks, and pastes.
//!
//! Every handler runs synchronously on the UI thread and only mutates the
//! app's own state; the caller redraws afterwards.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::editor::SegmentKind;
use crate::ui::interaction::{ClickAction, HitArea};
use crate::ui::strip;

use super::{App, Focus};

/// Handle a key event. Returns true when state changed and a redraw is
/// needed.
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }

    // Global bindings first
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.quit();
            return false;
        }
        KeyCode::Tab => {
            app.focus_next();
            return true;
        }
        KeyCode::BackTab => {
            app.focus_prev();
            return true;
        }
        KeyCode::Esc => {
            app.focus = Focus::ActiveInput;
            return true;
        }
        _ => {}
    }

    match app.focus {
        Focus::ActiveInput => handle_input_key(app, key),
        Focus::Palette => handle_palette_key(app, key),
        Focus::Strip => handle_strip_key(app, key),
    }
}

fn handle_input_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(c) if is_typed(key) => {
            app.editor.input.insert_char(c);
            true
        }
        KeyCode::Backspace => {
            app.editor.input_backspace();
            true
        }
        KeyCode::Delete => {
            app.editor.input.delete();
            true
        }
        KeyCode::Left => {
            app.editor.input.move_left();
            true
        }
        KeyCode::Right => {
            app.editor.input.move_right();
            true
        }
        KeyCode::Home => {
            app.editor.input.move_home();
            true
        }
        KeyCode::End => {
            app.editor.input.move_end();
            true
        }
        _ => false,
    }
}

fn handle_palette_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Left => {
            app.editor.palette.select_left();
            true
        }
        KeyCode::Right => {
            app.editor.palette.select_right();
            true
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            let index = app.editor.palette.selected();
            pick(app, index);
            true
        }
        _ => false,
    }
}

fn handle_strip_key(app: &mut App, key: KeyEvent) -> bool {
    let Some(index) = app.strip_selected else {
        // Empty strip: hand focus back to the input
        app.focus = Focus::ActiveInput;
        return true;
    };
    let Some(segment) = app.editor.segments().get(index) else {
        app.strip_selected = None;
        app.focus = Focus::ActiveInput;
        return true;
    };
    let id = segment.id();
    let kind = segment.kind();
    let char_len = segment.char_len();

    match kind {
        SegmentKind::Tag => match key.code {
            KeyCode::Left => {
                if index > 0 {
                    app.select_segment(index - 1, usize::MAX);
                }
                true
            }
            KeyCode::Right => {
                select_right_or_input(app, index);
                true
            }
            KeyCode::Backspace | KeyCode::Delete => {
                app.editor.delete_segment(id);
                reselect_after_removal(app, index);
                true
            }
            _ => false,
        },
        SegmentKind::Text => {
            let caret = app
                .editor
                .pending()
                .filter(|p| p.segment_id == id)
                .map(|p| p.caret_offset)
                .unwrap_or(0)
                .min(char_len);
            match key.code {
                KeyCode::Left => {
                    if caret > 0 {
                        app.editor.note_caret(id, caret - 1);
                    } else if index > 0 {
                        app.select_segment(index - 1, usize::MAX);
                    }
                    true
                }
                KeyCode::Right => {
                    if caret < char_len {
                        app.editor.note_caret(id, caret + 1);
                    } else {
                        select_right_or_input(app, index);
                    }
                    true
                }
                KeyCode::Home => {
                    app.editor.note_caret(id, 0);
                    true
                }
                KeyCode::End => {
                    app.editor.note_caret(id, char_len);
                    true
                }
                KeyCode::Char(c) if is_typed(key) => {
                    let text = insert_char_at(app.editor.segment(id).map(|s| s.text()).unwrap_or(""), caret, c);
                    app.editor.replace_text(id, text);
                    app.editor.note_caret(id, caret + 1);
                    true
                }
                KeyCode::Backspace => {
                    if char_len == 0 {
                        app.editor.backspace_in_empty_segment(id);
                        reselect_after_removal(app, index);
                    } else if caret > 0 {
                        let text =
                            remove_char_at(app.editor.segment(id).map(|s| s.text()).unwrap_or(""), caret - 1);
                        app.editor.replace_text(id, text);
                        app.editor.note_caret(id, caret - 1);
                    }
                    true
                }
                KeyCode::Delete => {
                    if caret < char_len {
                        let text =
                            remove_char_at(app.editor.segment(id).map(|s| s.text()).unwrap_or(""), caret);
                        app.editor.replace_text(id, text);
                    }
                    true
                }
                _ => false,
            }
        }
    }
}

/// Handle a click resolved by the hit registry.
pub fn handle_click(app: &mut App, area: HitArea, x: u16, _y: u16) {
    match area.action {
        ClickAction::PickLabel(index) => {
            app.editor.palette.set_selected(index);
            pick(app, index);
        }
        ClickAction::DeleteSegment(id) => {
            if let Some(index) = app.editor.segment_index(id) {
                app.editor.delete_segment(id);
                if app.focus == Focus::Strip {
                    reselect_after_removal(app, index);
                }
            }
        }
        ClickAction::FocusSegment(id) => {
            if let Some(index) = app.editor.segment_index(id) {
                let char_len = app.editor.segments()[index].char_len();
                app.focus = Focus::Strip;
                app.select_segment(index, strip::caret_for_click(area.rect, x, char_len));
            }
        }
        ClickAction::FocusActiveInput => {
            app.focus = Focus::ActiveInput;
            let column = x.saturating_sub(area.rect.x) as usize;
            app.editor.input.click(column);
        }
    }
}

/// Handle a bracketed paste into whichever field has focus.
pub fn handle_paste(app: &mut App, text: &str) -> bool {
    // Terminals may deliver CR line endings in pastes; this is a
    // single-line widget, so flatten to spaces.
    let text = text.replace(['\r', '\n'], " ");
    match app.focus {
        Focus::ActiveInput => {
            app.editor.input.insert_str(&text);
            true
        }
        Focus::Strip => {
            let Some(index) = app.strip_selected else {
                return false;
            };
            let Some(segment) = app.editor.segments().get(index) else {
                return false;
            };
            if !segment.is_text() {
                return false;
            }
            let id = segment.id();
            let caret = app
                .editor
                .pending()
                .filter(|p| p.segment_id == id)
                .map(|p| p.caret_offset)
                .unwrap_or(0)
                .min(segment.char_len());
            let mut content = segment.text().to_string();
            let at = byte_at(&content, caret);
            content.insert_str(at, &text);
            let pasted_chars = text.chars().count();
            app.editor.replace_text(id, content);
            app.editor.note_caret(id, caret + pasted_chars);
            true
        }
        Focus::Palette => false,
    }
}

/// A palette pick from any surface: run the insertion and return focus to
/// the active input.
fn pick(app: &mut App, index: usize) {
    app.editor.pick(index);
    app.focus = Focus::ActiveInput;
    app.strip_selected = None;
}

fn is_typed(key: KeyEvent) -> bool {
    !key.modifiers.contains(KeyModifiers::CONTROL) && !key.modifiers.contains(KeyModifiers::ALT)
}

/// Move selection one segment right, or onto the active input when the
/// selection is already at the end of the strip.
fn select_right_or_input(app: &mut App, index: usize) {
    if index + 1 < app.editor.segments().len() {
        app.select_segment(index + 1, 0);
    } else {
        app.focus = Focus::ActiveInput;
        app.editor.input.move_home();
    }
}

/// Fix the strip selection after the segment at `index` was removed.
fn reselect_after_removal(app: &mut App, index: usize) {
    let len = app.editor.segments().len();
    if len == 0 {
        app.strip_selected = None;
        app.focus = Focus::ActiveInput;
    } else {
        let index = index.min(len - 1);
        app.select_segment(index, usize::MAX);
    }
}

fn insert_char_at(text: &str, caret: usize, c: char) -> String {
    let mut out = text.to_string();
    out.insert(byte_at(text, caret), c);
    out
}

fn remove_char_at(text: &str, caret: usize) -> String {
    let mut out = text.to_string();
    let at = byte_at(text, caret);
    if at < out.len() {
        out.remove(at);
    }
    out
}

/// Byte offset of the `n`th character of `s` (or the end of `s`).
fn byte_at(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map(|(i, _)| i).unwrap_or(s.len())
}
