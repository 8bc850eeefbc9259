//! Palette of selectable tag labels.
//!
//! The palette is a fixed, ordered list of label strings supplied at
//! startup and read-only afterwards. Picks reference labels by index so
//! a picked label is always one of the configured strings.

use thiserror::Error;

/// Labels used when none are given on the command line.
pub const DEFAULT_LABELS: [&str; 6] = [
    "HTML",
    "CSS",
    "JavaScript",
    "React",
    "Next.js",
    "Tailwind",
];

/// Palette configuration errors, reported once at startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaletteError {
    #[error("palette needs at least one label")]
    Empty,
    #[error("palette label {index} is blank")]
    Blank { index: usize },
    #[error("duplicate palette label: {label}")]
    Duplicate { label: String },
}

/// Fixed label list plus the keyboard selection cursor.
#[derive(Debug, Clone)]
pub struct Palette {
    labels: Vec<String>,
    selected: usize,
}

impl Palette {
    /// Validate and build a palette from the given labels.
    pub fn new(labels: Vec<String>) -> Result<Self, PaletteError> {
        if labels.is_empty() {
            return Err(PaletteError::Empty);
        }
        for (index, label) in labels.iter().enumerate() {
            if label.trim().is_empty() {
                return Err(PaletteError::Blank { index });
            }
            if labels[..index].contains(label) {
                return Err(PaletteError::Duplicate {
                    label: label.clone(),
                });
            }
        }
        Ok(Self {
            labels,
            selected: 0,
        })
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Index of the keyboard-selected label.
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn set_selected(&mut self, index: usize) {
        if index < self.labels.len() {
            self.selected = index;
        }
    }

    /// Move the selection left, wrapping to the last label.
    pub fn select_left(&mut self) {
        self.selected = if self.selected == 0 {
            self.labels.len() - 1
        } else {
            self.selected - 1
        };
    }

    /// Move the selection right, wrapping to the first label.
    pub fn select_right(&mut self) {
        self.selected = (self.selected + 1) % self.labels.len();
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            labels: DEFAULT_LABELS.iter().map(|s| s.to_string()).collect(),
            selected: 0,
        }
    }
}
