//! Reusable widgets for the tag editor.

pub mod chip;
pub mod line_input;

pub use chip::TagChip;
pub use line_input::LineInput;
