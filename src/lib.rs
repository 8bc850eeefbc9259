//! tagstrip - a terminal tag-input editor
//!
//! A single-widget TUI: type free text, pick predefined tags from a
//! palette, edit and delete them inline, and have new tags split the
//! surrounding text at the caret. The editor core is headless and fully
//! testable without a terminal.

pub mod app;
pub mod editor;
pub mod logging;
pub mod measure;
pub mod palette;
pub mod prelude;
pub mod terminal;
pub mod ui;
pub mod widgets;
