//! Color theme constants for the tagstrip UI
//!
//! Defines the minimal dark color palette used throughout the widget.

use ratatui::style::Color;

// ============================================================================
// Minimal Dark Color Theme
// ============================================================================

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Border color while the strip has keyboard focus
pub const COLOR_BORDER_FOCUSED: Color = Color::Cyan;

/// Accent color - white for highlights and the title
pub const COLOR_ACCENT: Color = Color::White;

/// Plain input text
pub const COLOR_INPUT_TEXT: Color = Color::White;

/// Placeholder and hint text
pub const COLOR_PLACEHOLDER: Color = Color::DarkGray;

// ============================================================================
// Palette Buttons
// ============================================================================

/// Palette button background
pub const COLOR_BUTTON_BG: Color = Color::Rgb(40, 40, 52);

/// Palette button label
pub const COLOR_BUTTON_FG: Color = Color::Gray;

/// Keyboard-selected palette button background
pub const COLOR_BUTTON_SELECTED_BG: Color = Color::Rgb(70, 70, 90);

/// Keyboard-selected palette button label
pub const COLOR_BUTTON_SELECTED_FG: Color = Color::White;

// ============================================================================
// Tag Chips
// ============================================================================

/// Chip background
pub const COLOR_CHIP_BG: Color = Color::Rgb(30, 45, 60);

/// Chip label
pub const COLOR_CHIP_FG: Color = Color::Rgb(140, 200, 255);

/// Chip delete control
pub const COLOR_CHIP_DELETE: Color = Color::Rgb(200, 110, 110);

/// Strip selection highlight (keyboard focus on a chip)
pub const COLOR_CHIP_SELECTED_BG: Color = Color::Rgb(55, 80, 105);
