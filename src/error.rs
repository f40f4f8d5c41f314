//! Errors reported by the picker.

use thiserror::Error;

use crate::color::Notation;

/// Everything that can go wrong while driving a picker. Numeric
/// conversions never fail; out-of-range input is clamped instead.
#[derive(Debug, Error)]
pub enum ColorError {
    /// The text is not a 6-digit hex color code.
    #[error("invalid hex color code: {0:?}")]
    InvalidHex(String),

    /// A keystroke named a component the notation does not have.
    #[error("{notation} has no component '{key}'")]
    UnknownComponent {
        /// The notation that was edited.
        notation: Notation,
        /// The unknown component key.
        key: String,
    },

    /// The clipboard collaborator could not take the text.
    #[error("clipboard write failed: {0}")]
    Clipboard(String),

    /// A configuration could not be read or written.
    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),
}
