//! Per-notation text buffers.
//!
//! A buffer holds what the user is typing, which is free text and not
//! necessarily numeric or in range, separately from the committed color.
//! Each buffer is a two state machine:
//!
//! - [`BufferState::Idle`]: the texts mirror the canonical color and are
//!   refreshed from every [`Change`] that someone else caused.
//! - [`BufferState::Editing`]: the texts hold keystrokes and are left alone
//!   by incoming changes until the buffer commits or reverts.

use std::marker::PhantomData;

use crate::{
    color::{Component, HasNotation, Notation},
    convert::is_valid_hex,
    error::ColorError,
    math::parse_int,
    models::{Model, Rgb},
    state::{Change, Origin},
    ToRgb,
};

/// Whether a buffer mirrors the canonical color or holds user input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BufferState {
    /// Mirrors the canonical color.
    #[default]
    Idle,
    /// Holds keystrokes that have not been committed.
    Editing,
}

/// The text buffer of one numeric input group (RGB, CMYK, HSV or HSL).
#[derive(Clone, Debug)]
pub struct EditBuffer<M> {
    texts: Vec<String>,
    state: BufferState,
    _model: PhantomData<M>,
}

impl<M> EditBuffer<M>
where
    M: Model + HasNotation + From<Rgb> + ToRgb,
{
    /// Create an idle buffer showing `rgb`.
    pub fn new(rgb: Rgb) -> Self {
        Self {
            texts: M::from(rgb).to_field_texts(),
            state: BufferState::Idle,
            _model: PhantomData,
        }
    }

    /// The current state of the buffer.
    pub fn state(&self) -> BufferState {
        self.state
    }

    /// Whether the buffer holds uncommitted input.
    pub fn is_editing(&self) -> bool {
        self.state == BufferState::Editing
    }

    /// The text of the component with the given key.
    pub fn text(&self, key: &str) -> Option<&str> {
        M::index_of(key).map(|i| self.texts[i].as_str())
    }

    /// The texts of all components, in the model's key order.
    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    /// Store raw text for one component. Nothing is validated and the color
    /// is not touched.
    pub fn on_keystroke(&mut self, key: &str, text: impl Into<String>) -> Result<(), ColorError> {
        let Some(index) = M::index_of(key) else {
            return Err(ColorError::UnknownComponent {
                notation: M::NOTATION,
                key: key.to_owned(),
            });
        };

        self.texts[index] = text.into();
        self.state = BufferState::Editing;
        log::trace!("{} {key} = {:?}", M::NOTATION, self.texts[index]);

        Ok(())
    }

    /// Confirm the typed values (focus loss). Every text is parsed as an
    /// integer (0 when that fails), the tuple is clamped, the clamped values
    /// are written back and the color to commit is returned.
    ///
    /// Returns `None` when there is nothing to commit.
    pub fn on_commit_trigger(&mut self) -> Option<Rgb> {
        if self.state == BufferState::Idle {
            return None;
        }

        let values = self
            .texts
            .iter()
            .map(|text| parse_int(text) as Component)
            .collect::<Vec<_>>();
        let model = M::clamped(&values);

        self.texts = model.to_field_texts();
        self.state = BufferState::Idle;

        Some(model.to_rgb())
    }

    /// Drop any input and show `rgb` again.
    pub fn revert(&mut self, rgb: Rgb) {
        self.texts = M::from(rgb).to_field_texts();
        self.state = BufferState::Idle;
    }

    /// Refresh from a committed change. Changes this buffer caused and
    /// changes arriving while it is editing are ignored. Returns whether the
    /// texts were refreshed.
    pub fn sync(&mut self, change: &Change) -> bool {
        if change.origin == Origin::Buffer(M::NOTATION) || self.is_editing() {
            log::trace!("{} keeps its texts for {:?}", M::NOTATION, change.origin);
            return false;
        }

        self.texts = M::from(change.snapshot.rgb).to_field_texts();
        true
    }
}

/// The text buffer of the hex input. Unlike the numeric groups it commits as
/// soon as the text is a complete, valid code.
#[derive(Clone, Debug)]
pub struct HexBuffer {
    text: String,
    state: BufferState,
    live: bool,
}

impl HexBuffer {
    /// Create an idle buffer showing `rgb`. With `live` set, every keystroke
    /// that forms a valid code commits; otherwise only focus loss does.
    pub fn new(rgb: Rgb, live: bool) -> Self {
        Self {
            text: rgb.to_hex(),
            state: BufferState::Idle,
            live,
        }
    }

    /// The current state of the buffer.
    pub fn state(&self) -> BufferState {
        self.state
    }

    /// Whether the buffer holds uncommitted input.
    pub fn is_editing(&self) -> bool {
        self.state == BufferState::Editing
    }

    /// The text shown in the field.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Store the field's new text. Returns the color to commit when live
    /// commits are on and the text is a valid code, which is then shown in
    /// canonical form. Partial or invalid text leaves the color alone.
    pub fn on_keystroke(&mut self, text: impl Into<String>) -> Option<Rgb> {
        self.text = text.into();
        self.state = BufferState::Editing;
        log::trace!("HEX = {:?}", self.text);

        if !self.live {
            return None;
        }
        self.take_valid()
    }

    /// Confirm the text (focus loss). A valid code is committed and shown in
    /// canonical form; invalid text stays in the field, still editing.
    pub fn on_commit_trigger(&mut self) -> Option<Rgb> {
        if self.state == BufferState::Idle {
            return None;
        }

        self.take_valid()
    }

    /// Drop any input and show `rgb` again.
    pub fn revert(&mut self, rgb: Rgb) {
        self.text = rgb.to_hex();
        self.state = BufferState::Idle;
    }

    /// Refresh from a committed change, following the same rules as
    /// [`EditBuffer::sync`].
    pub fn sync(&mut self, change: &Change) -> bool {
        if change.origin == Origin::Buffer(Notation::Hex) || self.is_editing() {
            log::trace!("HEX keeps its text for {:?}", change.origin);
            return false;
        }

        self.text.clone_from(&change.snapshot.hex);
        true
    }

    fn take_valid(&mut self) -> Option<Rgb> {
        if !is_valid_hex(&self.text) {
            return None;
        }

        let rgb = Rgb::from_hex(&self.text)?;
        self.text = rgb.to_hex();
        self.state = BufferState::Idle;
        Some(rgb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{Cmyk, Hsv},
        state::Snapshot,
    };

    fn change(rgb: Rgb, origin: Origin) -> Change {
        Change {
            origin,
            snapshot: Snapshot::new(rgb),
        }
    }

    const GREEN: Rgb = Rgb::new(0, 255, 64);

    #[test]
    fn starts_idle_and_mirrors() {
        let buffer = EditBuffer::<Hsv>::new(GREEN);
        assert_eq!(buffer.state(), BufferState::Idle);
        assert_eq!(buffer.texts(), &["135", "100", "100"]);
        assert_eq!(buffer.text("h"), Some("135"));
        assert_eq!(buffer.text("q"), None);
    }

    #[test]
    fn keystrokes_are_free_text() {
        let mut buffer = EditBuffer::<Rgb>::new(GREEN);
        buffer.on_keystroke("r", "1").unwrap();
        buffer.on_keystroke("r", "12x").unwrap();
        assert!(buffer.is_editing());
        assert_eq!(buffer.text("r"), Some("12x"));

        let err = buffer.on_keystroke("k", "3").unwrap_err();
        assert!(matches!(
            err,
            ColorError::UnknownComponent { notation: Notation::Rgb, ref key } if key == "k"
        ));
    }

    #[test]
    fn commit_parses_clamps_and_writes_back() {
        let mut buffer = EditBuffer::<Rgb>::new(GREEN);
        buffer.on_keystroke("r", "999").unwrap();
        buffer.on_keystroke("g", "").unwrap();
        buffer.on_keystroke("b", "-4").unwrap();

        assert_eq!(buffer.on_commit_trigger(), Some(Rgb::new(255, 0, 0)));
        assert_eq!(buffer.texts(), &["255", "0", "0"]);
        assert_eq!(buffer.state(), BufferState::Idle);
    }

    #[test]
    fn commit_converts_derived_notations() {
        let mut buffer = EditBuffer::<Hsv>::new(GREEN);
        buffer.on_keystroke("h", "360").unwrap();
        buffer.on_keystroke("s", "abc").unwrap();
        assert_eq!(buffer.on_commit_trigger(), Some(Rgb::new(255, 255, 255)));
        assert_eq!(buffer.texts(), &["360", "0", "100"]);

        let mut buffer = EditBuffer::<Cmyk>::new(GREEN);
        buffer.on_keystroke("k", "100").unwrap();
        assert_eq!(buffer.on_commit_trigger(), Some(Rgb::new(0, 0, 0)));
        assert_eq!(buffer.texts(), &["100", "0", "75", "100"]);
    }

    #[test]
    fn idle_commit_is_a_no_op() {
        let mut buffer = EditBuffer::<Cmyk>::new(GREEN);
        assert_eq!(buffer.on_commit_trigger(), None);
    }

    #[test]
    fn sync_skips_own_echo_and_editing() {
        let mut buffer = EditBuffer::<Hsv>::new(GREEN);
        buffer.on_keystroke("h", "360").unwrap();
        let committed = buffer.on_commit_trigger().unwrap();

        // The echo would show a hue of 0 instead of the 360 that was typed.
        assert!(!buffer.sync(&change(committed, Origin::Buffer(Notation::Hsv))));
        assert_eq!(buffer.text("h"), Some("360"));

        buffer.on_keystroke("v", "5").unwrap();
        assert!(!buffer.sync(&change(GREEN, Origin::Palette)));
        assert_eq!(buffer.text("v"), Some("5"));

        buffer.revert(GREEN);
        assert!(buffer.sync(&change(Rgb::new(255, 0, 0), Origin::Palette)));
        assert_eq!(buffer.texts(), &["0", "100", "100"]);
    }

    #[test]
    fn hex_commits_live_on_valid_codes() {
        let mut buffer = HexBuffer::new(GREEN, true);
        assert_eq!(buffer.on_keystroke("#12"), None);
        assert!(buffer.is_editing());
        assert_eq!(buffer.on_keystroke("123456"), None);
        assert_eq!(buffer.on_keystroke("#12345g"), None);
        assert_eq!(buffer.on_keystroke("#ab12ef"), Some(Rgb::new(0xAB, 0x12, 0xEF)));
        assert_eq!(buffer.state(), BufferState::Idle);
        assert_eq!(buffer.text(), "#AB12EF");

        assert!(!buffer.sync(&change(Rgb::new(0xAB, 0x12, 0xEF), Origin::Buffer(Notation::Hex))));
        assert_eq!(buffer.text(), "#AB12EF");
        assert!(buffer.sync(&change(GREEN, Origin::Slider)));
        assert_eq!(buffer.text(), "#00FF40");
    }

    #[test]
    fn hex_blur_keeps_invalid_text() {
        let mut buffer = HexBuffer::new(GREEN, true);
        buffer.on_keystroke("#00FF4");
        assert_eq!(buffer.on_commit_trigger(), None);
        assert_eq!(buffer.text(), "#00FF4");
        assert!(buffer.is_editing());

        buffer.revert(GREEN);
        assert_eq!(buffer.text(), "#00FF40");
        assert_eq!(buffer.state(), BufferState::Idle);
    }

    #[test]
    fn hex_without_live_commits_on_blur() {
        let mut buffer = HexBuffer::new(GREEN, false);
        assert_eq!(buffer.on_keystroke("#0000ff"), None);
        assert_eq!(buffer.on_commit_trigger(), Some(Rgb::new(0, 0, 255)));
        assert_eq!(buffer.text(), "#0000FF");
        assert_eq!(buffer.on_commit_trigger(), None);
    }
}
