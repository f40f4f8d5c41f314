//! The picker ties every input surface to one [`ColorState`].
//!
//! Input arrives as [`Event`] messages. Each event is handled to completion:
//! at most one commit goes into the state, and the resulting [`Change`] is
//! handed to every buffer, the sliders and the registered observers before
//! the next event is looked at. Buffers use the change's origin to skip the
//! echo of their own commits, so no timing tricks are needed.

use crate::{
    buffer::{BufferState, EditBuffer, HexBuffer},
    clipboard::Clipboard,
    color::{Notation, Notations},
    config::PickerConfig,
    error::ColorError,
    math::{Point, Size},
    models::{Cmyk, Hsl, Hsv, Model, Rgb},
    palette::Palette,
    sliders::Sliders,
    state::{Change, ColorState, Observer, Origin, Snapshot},
};

/// Everything an input surface can report.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Text typed into one component of an input group. For
    /// [`Notation::Hex`] the key is ignored and the text is the whole code.
    Keystroke {
        /// The input group.
        notation: Notation,
        /// The component key, e.g. `"r"` or `"h"`.
        key: String,
        /// The full text of the field.
        text: String,
    },
    /// An input group lost focus.
    Blur(Notation),
    /// Input in a group was abandoned.
    Revert(Notation),
    /// The palette reported a color.
    PalettePick(Rgb),
    /// The palette was clicked at a point on its canvas.
    PaletteClick(Point),
    /// The palette canvas changed size.
    PaletteResized(Size),
    /// The hue slider moved.
    HueChanged(i32),
    /// The saturation slider moved.
    SaturationChanged(i32),
    /// The lightness slider moved.
    LightnessChanged(i32),
    /// The host set the color.
    SetColor(Rgb),
}

impl Event {
    /// Shorthand for a [`Event::Keystroke`].
    pub fn keystroke(notation: Notation, key: &str, text: &str) -> Self {
        Event::Keystroke {
            notation,
            key: key.to_owned(),
            text: text.to_owned(),
        }
    }
}

/// The outcome of one commit.
#[derive(Clone, Debug, PartialEq)]
pub struct Update {
    /// The committed change, as observers saw it.
    pub change: Change,
    /// The buffers that refreshed their texts from it.
    pub resynced: Notations,
}

/// An interactive color picker without any rendering.
#[derive(Debug)]
pub struct ColorPicker {
    state: ColorState,
    hex: HexBuffer,
    rgb: EditBuffer<Rgb>,
    cmyk: EditBuffer<Cmyk>,
    hsv: EditBuffer<Hsv>,
    hsl: EditBuffer<Hsl>,
    sliders: Sliders,
    palette: Palette,
}

impl Default for ColorPicker {
    fn default() -> Self {
        Self::new(&PickerConfig::default())
    }
}

impl ColorPicker {
    /// Create a picker showing the configured initial color.
    pub fn new(config: &PickerConfig) -> Self {
        let rgb = config.initial_color;
        Self {
            state: ColorState::new(rgb),
            hex: HexBuffer::new(rgb, config.live_hex),
            rgb: EditBuffer::new(rgb),
            cmyk: EditBuffer::new(rgb),
            hsv: EditBuffer::new(rgb),
            hsl: EditBuffer::new(rgb),
            sliders: Sliders::new(rgb),
            palette: Palette::new(config.palette_size()),
        }
    }

    /// Register an observer for every future commit.
    pub fn subscribe<O: Observer + 'static>(&mut self, observer: O) {
        self.state.subscribe(observer);
    }

    /// The canonical color.
    pub fn rgb(&self) -> Rgb {
        self.state.rgb()
    }

    /// The canonical color in every notation.
    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    /// The texts an input group shows, in key order. The hex group has a
    /// single text.
    pub fn texts(&self, notation: Notation) -> Vec<String> {
        match notation {
            Notation::Hex => vec![self.hex.text().to_owned()],
            Notation::Rgb => self.rgb.texts().to_vec(),
            Notation::Cmyk => self.cmyk.texts().to_vec(),
            Notation::Hsv => self.hsv.texts().to_vec(),
            Notation::Hsl => self.hsl.texts().to_vec(),
        }
    }

    /// The text of one component of an input group.
    pub fn text(&self, notation: Notation, key: &str) -> Option<&str> {
        match notation {
            Notation::Hex => Some(self.hex.text()),
            Notation::Rgb => self.rgb.text(key),
            Notation::Cmyk => self.cmyk.text(key),
            Notation::Hsv => self.hsv.text(key),
            Notation::Hsl => self.hsl.text(key),
        }
    }

    /// The state of an input group's buffer.
    pub fn buffer_state(&self, notation: Notation) -> BufferState {
        match notation {
            Notation::Hex => self.hex.state(),
            Notation::Rgb => self.rgb.state(),
            Notation::Cmyk => self.cmyk.state(),
            Notation::Hsv => self.hsv.state(),
            Notation::Hsl => self.hsl.state(),
        }
    }

    /// The input group holding uncommitted input, if any.
    pub fn editing(&self) -> Option<Notation> {
        Notation::ALL
            .into_iter()
            .find(|&n| self.buffer_state(n) == BufferState::Editing)
    }

    /// The slider positions.
    pub fn sliders(&self) -> &Sliders {
        &self.sliders
    }

    /// The palette geometry.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Where the palette's selection indicator for the current color sits.
    pub fn indicator(&self) -> Point {
        self.palette.indicator(self.state.rgb())
    }

    /// Handle one event and return the commits it caused, in order. Most
    /// events cause none or one; typing into a group while another one is
    /// editing first commits the other one.
    pub fn handle(&mut self, event: Event) -> Result<Vec<Update>, ColorError> {
        let mut updates = vec![];

        match event {
            Event::Keystroke {
                notation,
                key,
                text,
            } => {
                self.check_key(notation, &key)?;
                updates.extend(self.close_others(notation));

                let live = match notation {
                    Notation::Hex => self.hex.on_keystroke(text),
                    Notation::Rgb => self.rgb.on_keystroke(&key, text).map(|_| None)?,
                    Notation::Cmyk => self.cmyk.on_keystroke(&key, text).map(|_| None)?,
                    Notation::Hsv => self.hsv.on_keystroke(&key, text).map(|_| None)?,
                    Notation::Hsl => self.hsl.on_keystroke(&key, text).map(|_| None)?,
                };
                if let Some(rgb) = live {
                    updates.push(self.commit(rgb, Origin::Buffer(Notation::Hex)));
                }
            }
            Event::Blur(notation) => updates.extend(self.blur(notation)),
            Event::Revert(notation) => self.revert(notation),
            Event::PalettePick(rgb) => updates.push(self.commit(rgb, Origin::Palette)),
            Event::PaletteClick(point) => {
                let rgb = self.palette.sample(self.sliders.hue(), point);
                updates.push(self.commit(rgb, Origin::Palette));
            }
            Event::PaletteResized(size) => self.palette.resize(size),
            Event::HueChanged(hue) => {
                self.sliders.set_hue(hue);
                updates.push(self.commit_sliders());
            }
            Event::SaturationChanged(saturation) => {
                self.sliders.set_saturation(saturation);
                updates.push(self.commit_sliders());
            }
            Event::LightnessChanged(lightness) => {
                self.sliders.set_lightness(lightness);
                updates.push(self.commit_sliders());
            }
            Event::SetColor(rgb) => updates.push(self.commit(rgb, Origin::Host)),
        }

        Ok(updates)
    }

    /// Put the current color, formatted for `notation`, on the clipboard and
    /// return the text that was written.
    pub fn copy<C: Clipboard>(
        &self,
        notation: Notation,
        clipboard: &mut C,
    ) -> Result<String, ColorError> {
        let text = self.state.snapshot().format(notation);
        clipboard.write_text(&text).map_err(|err| {
            log::warn!("could not copy {text:?}: {err}");
            ColorError::Clipboard(err.to_string())
        })?;
        Ok(text)
    }

    fn check_key(&self, notation: Notation, key: &str) -> Result<(), ColorError> {
        let known = match notation {
            Notation::Hex => true,
            Notation::Rgb => Rgb::index_of(key).is_some(),
            Notation::Cmyk => Cmyk::index_of(key).is_some(),
            Notation::Hsv => Hsv::index_of(key).is_some(),
            Notation::Hsl => Hsl::index_of(key).is_some(),
        };

        if known {
            Ok(())
        } else {
            log::warn!("{notation} has no component {key:?}");
            Err(ColorError::UnknownComponent {
                notation,
                key: key.to_owned(),
            })
        }
    }

    /// Commit any other group that is editing, as if it lost focus. A group
    /// that cannot commit, like a hex field holding an invalid code, is
    /// reverted so only one group is ever open.
    fn close_others(&mut self, notation: Notation) -> Vec<Update> {
        let open = Notation::ALL
            .into_iter()
            .filter(|&n| n != notation && self.buffer_state(n) == BufferState::Editing)
            .collect::<Vec<_>>();

        let mut updates = vec![];
        for other in open {
            match self.blur(other) {
                Some(update) => updates.push(update),
                None => {
                    log::trace!("{other} dropped its input");
                    self.revert(other);
                }
            }
        }
        updates
    }

    fn revert(&mut self, notation: Notation) {
        let rgb = self.state.rgb();
        match notation {
            Notation::Hex => self.hex.revert(rgb),
            Notation::Rgb => self.rgb.revert(rgb),
            Notation::Cmyk => self.cmyk.revert(rgb),
            Notation::Hsv => self.hsv.revert(rgb),
            Notation::Hsl => self.hsl.revert(rgb),
        }
    }

    fn blur(&mut self, notation: Notation) -> Option<Update> {
        let rgb = match notation {
            Notation::Hex => self.hex.on_commit_trigger(),
            Notation::Rgb => self.rgb.on_commit_trigger(),
            Notation::Cmyk => self.cmyk.on_commit_trigger(),
            Notation::Hsv => self.hsv.on_commit_trigger(),
            Notation::Hsl => self.hsl.on_commit_trigger(),
        }?;
        Some(self.commit(rgb, Origin::Buffer(notation)))
    }

    fn commit_sliders(&mut self) -> Update {
        let change = self.state.select_from_hsl(self.sliders.hsl(), Origin::Slider);
        self.propagate(change)
    }

    fn commit(&mut self, rgb: Rgb, origin: Origin) -> Update {
        let change = self.state.commit(rgb, origin);
        self.propagate(change)
    }

    fn propagate(&mut self, change: Change) -> Update {
        let mut resynced = Notations::empty();
        for (notation, synced) in [
            (Notation::Hex, self.hex.sync(&change)),
            (Notation::Rgb, self.rgb.sync(&change)),
            (Notation::Cmyk, self.cmyk.sync(&change)),
            (Notation::Hsv, self.hsv.sync(&change)),
            (Notation::Hsl, self.hsl.sync(&change)),
        ] {
            if synced {
                resynced |= notation.into();
            }
        }

        // Sliders keep the positions that produced their own commit.
        if change.origin != Origin::Slider {
            self.sliders.follow(change.snapshot.rgb);
        }

        Update { change, resynced }
    }
}
