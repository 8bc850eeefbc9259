//! Application state for the TUI.
//!
//! [`App`] wires the headless [`EditorState`] to the terminal: keyboard
//! focus, the strip selection cursor, the mouse hit registry, and the
//! width estimator used by the strip layout.

mod handlers;

pub use handlers::{handle_click, handle_key, handle_paste};

use crate::editor::EditorState;
use crate::measure::{CellMeasure, TextMeasure};
use crate::palette::Palette;
use crate::ui::HitAreaRegistry;

/// Which UI component has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The trailing free-text field (the default).
    #[default]
    ActiveInput,
    /// The palette button row.
    Palette,
    /// The segment strip (chips and inline fields).
    Strip,
}

/// Top-level application state.
pub struct App {
    pub editor: EditorState,
    pub focus: Focus,
    /// Index of the keyboard-selected segment while the strip has focus.
    pub strip_selected: Option<usize>,
    pub hit_registry: HitAreaRegistry,
    /// Width estimator for inline text fields.
    pub measure: Box<dyn TextMeasure>,
    pub should_quit: bool,
}

impl App {
    pub fn new(palette: Palette) -> Self {
        Self::with_measure(palette, Box::new(CellMeasure))
    }

    /// Build an app with a custom width estimator (tests use a fixed one).
    pub fn with_measure(palette: Palette, measure: Box<dyn TextMeasure>) -> Self {
        Self {
            editor: EditorState::new(palette),
            focus: Focus::ActiveInput,
            strip_selected: None,
            hit_registry: HitAreaRegistry::new(),
            measure,
            should_quit: false,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Cycle focus forward: active input, palette, strip.
    ///
    /// The strip is skipped while it has no segments.
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            Focus::ActiveInput => Focus::Palette,
            Focus::Palette => {
                if self.editor.segments().is_empty() {
                    Focus::ActiveInput
                } else {
                    self.enter_strip_at(self.editor.segments().len() - 1);
                    Focus::Strip
                }
            }
            Focus::Strip => Focus::ActiveInput,
        };
    }

    /// Cycle focus backward.
    pub fn focus_prev(&mut self) {
        self.focus = match self.focus {
            Focus::ActiveInput => {
                if self.editor.segments().is_empty() {
                    Focus::Palette
                } else {
                    self.enter_strip_at(self.editor.segments().len() - 1);
                    Focus::Strip
                }
            }
            Focus::Palette => Focus::ActiveInput,
            Focus::Strip => Focus::Palette,
        };
    }

    /// Select a strip segment by index. Selecting a text segment records
    /// it as the pending insertion target with the caret at `caret`.
    pub(crate) fn select_segment(&mut self, index: usize, caret: usize) {
        let Some(segment) = self.editor.segments().get(index) else {
            return;
        };
        self.strip_selected = Some(index);
        if segment.is_text() {
            let id = segment.id();
            let caret = caret.min(segment.char_len());
            self.editor.note_focus(id, caret);
        }
    }

    fn enter_strip_at(&mut self, index: usize) {
        let caret = self
            .editor
            .segments()
            .get(index)
            .map(|s| s.char_len())
            .unwrap_or(0);
        self.select_segment(index, caret);
    }
}
