//! Prelude module for convenient imports.
//!
//! ```ignore
//! use tagstrip::prelude::*;
//! ```

// Core application types
pub use crate::app::{handle_click, handle_key, handle_paste, App, Focus};

// Editor state and segment model
pub use crate::editor::{EditorState, InsertionPoint, Segment, SegmentId, SegmentKind};

// Palette configuration
pub use crate::palette::{Palette, PaletteError, DEFAULT_LABELS};

// Width estimation
pub use crate::measure::{CellMeasure, FixedMeasure, TextMeasure};

// UI types
pub use crate::ui::{render, ClickAction, HitArea, HitAreaRegistry};

// Widget types
pub use crate::widgets::{LineInput, TagChip};
