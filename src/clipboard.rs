//! The clipboard collaborator.

use std::{convert::Infallible, fmt};

/// Something that takes text for the system clipboard. Whether the write
/// worked is reported to the user but never changes the color.
pub trait Clipboard {
    /// Why a write failed.
    type Error: fmt::Display;

    /// Put `text` on the clipboard.
    fn write_text(&mut self, text: &str) -> Result<(), Self::Error>;
}

/// A clipboard that keeps the last text in memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryClipboard {
    text: Option<String>,
}

impl MemoryClipboard {
    /// The last text written, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    type Error = Infallible;

    fn write_text(&mut self, text: &str) -> Result<(), Self::Error> {
        self.text = Some(text.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_clipboard_keeps_last_text() {
        let mut clipboard = MemoryClipboard::default();
        assert_eq!(clipboard.text(), None);
        clipboard.write_text("#00FF40").unwrap();
        clipboard.write_text("0, 255, 64").unwrap();
        assert_eq!(clipboard.text(), Some("0, 255, 64"));
    }
}
