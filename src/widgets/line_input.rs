//! Single-line text input with caret handling and horizontal scrolling.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use crate::ui::theme::{COLOR_INPUT_TEXT, COLOR_PLACEHOLDER};

/// An editable single-line buffer with a char-indexed caret.
///
/// Used for the strip's trailing active input. All offsets are character
/// indices, never bytes, so multibyte content edits stay well-formed.
/// Rendering is borderless: the field draws its content inline and marks
/// the caret with an inverse-video cell when focused, scrolling
/// horizontally when the content exceeds the rendered width.
#[derive(Debug, Clone, Default)]
pub struct LineInput {
    /// Current content of the field
    content: String,
    /// Caret position as a character index into `content`
    caret: usize,
    /// First visible character when the content is wider than the field
    scroll: usize,
    /// Dim hint text shown while the field is empty
    placeholder: Option<String>,
}

impl LineInput {
    /// Create an empty input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty input with a placeholder hint.
    pub fn with_placeholder(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: Some(placeholder.into()),
            ..Self::default()
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Content length in characters.
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    /// Caret position as a character offset.
    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Byte offset matching the current caret.
    fn caret_byte(&self) -> usize {
        byte_at(&self.content, self.caret)
    }

    /// Insert a character at the caret and advance past it.
    pub fn insert_char(&mut self, c: char) {
        let at = self.caret_byte();
        self.content.insert(at, c);
        self.caret += 1;
    }

    /// Insert a string at the caret (bracketed paste path).
    pub fn insert_str(&mut self, s: &str) {
        let at = self.caret_byte();
        self.content.insert_str(at, s);
        self.caret += s.chars().count();
    }

    /// Delete the character before the caret.
    pub fn backspace(&mut self) {
        if self.caret > 0 {
            self.caret -= 1;
            let at = self.caret_byte();
            self.content.remove(at);
        }
    }

    /// Delete the character under the caret.
    pub fn delete(&mut self) {
        if self.caret < self.char_len() {
            let at = self.caret_byte();
            self.content.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.caret = self.caret.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.caret < self.char_len() {
            self.caret += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.caret = 0;
    }

    pub fn move_end(&mut self) {
        self.caret = self.char_len();
    }

    /// Place the caret at a character offset, clamped to the content.
    pub fn set_caret(&mut self, offset: usize) {
        self.caret = offset.min(self.char_len());
    }

    /// Place the caret from a clicked column, accounting for the current
    /// scroll offset.
    pub fn click(&mut self, column: usize) {
        self.set_caret(self.scroll + column);
    }

    /// Take the content out, leaving the input empty with the caret reset.
    pub fn take(&mut self) -> String {
        self.caret = 0;
        self.scroll = 0;
        std::mem::take(&mut self.content)
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.caret = 0;
        self.scroll = 0;
    }

    /// Scroll offset keeping the caret inside `visible` columns.
    fn scrolled_to(&self, visible: usize) -> usize {
        if visible == 0 {
            return self.scroll;
        }
        let mut scroll = self.scroll;
        if self.caret < scroll {
            scroll = self.caret;
        }
        // Leave one column for the caret cell itself
        if self.caret >= scroll + visible {
            scroll = self.caret - visible + 1;
        }
        scroll
    }

    /// Render the field into `area`, drawing the caret when `focused`.
    pub fn render(&mut self, area: Rect, buf: &mut Buffer, focused: bool) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let visible = area.width as usize;

        if self.content.is_empty() {
            if let Some(hint) = &self.placeholder {
                let hint: String = hint.chars().take(visible).collect();
                buf.set_string(
                    area.x,
                    area.y,
                    hint,
                    Style::default().fg(COLOR_PLACEHOLDER),
                );
            }
            if focused {
                buf.set_string(
                    area.x,
                    area.y,
                    self.placeholder
                        .as_deref()
                        .and_then(|h| h.chars().next())
                        .unwrap_or(' ')
                        .to_string(),
                    Style::default().add_modifier(Modifier::REVERSED),
                );
            }
            return;
        }

        self.scroll = self.scrolled_to(visible);
        let shown: String = self.content.chars().skip(self.scroll).take(visible).collect();
        buf.set_string(area.x, area.y, &shown, Style::default().fg(COLOR_INPUT_TEXT));

        if focused && self.caret >= self.scroll {
            let col = (self.caret - self.scroll) as u16;
            if col < area.width {
                let under = self.content.chars().nth(self.caret).unwrap_or(' ');
                buf.set_string(
                    area.x + col,
                    area.y,
                    under.to_string(),
                    Style::default().add_modifier(Modifier::REVERSED),
                );
            }
        }
    }
}

/// Byte offset of the `n`th character of `s` (or the end of `s`).
fn byte_at(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map(|(i, _)| i).unwrap_or(s.len())
}
