//! Shared helpers for integration tests.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tagstrip::app::{handle_key, App};
use tagstrip::measure::FixedMeasure;
use tagstrip::palette::Palette;

/// App with the default palette and a deterministic 1-cell-per-char
/// width estimator.
pub fn test_app() -> App {
    App::with_measure(Palette::default(), Box::new(FixedMeasure(1)))
}

pub fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

pub fn type_str(app: &mut App, s: &str) {
    for c in s.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Segment texts in strip order.
pub fn texts(app: &App) -> Vec<String> {
    app.editor
        .segments()
        .iter()
        .map(|s| s.text().to_string())
        .collect()
}
