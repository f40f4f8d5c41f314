//! The single source of truth for the current color.
//!
//! [`ColorState`] stores the canonical [`Rgb`] and nothing else. Every commit
//! replaces it wholesale and hands observers a [`Change`]: the full derived
//! bundle plus an [`Origin`] tag naming who caused it, so a receiver can
//! recognise the echo of its own edit.

use std::fmt;

use crate::{
    color::Notation,
    models::{Cmyk, Hsl, Hsv, Model, Rgb},
    ToRgb,
};

/// The input surface that caused a change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    /// A text input group committed.
    Buffer(Notation),
    /// The hue, saturation or lightness slider moved.
    Slider,
    /// A point on the palette was picked.
    Palette,
    /// The host set the color programmatically.
    Host,
}

/// Every representation of one canonical color.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    /// The canonical color.
    pub rgb: Rgb,
    /// `#RRGGBB`.
    pub hex: String,
    /// Unrounded CMYK percentages.
    pub cmyk: Cmyk,
    /// Unrounded HSV.
    pub hsv: Hsv,
    /// Unrounded HSL.
    pub hsl: Hsl,
}

impl Snapshot {
    /// Derive every representation from `rgb`.
    pub fn new(rgb: Rgb) -> Self {
        Self {
            rgb,
            hex: rgb.to_hex(),
            cmyk: rgb.to_cmyk(),
            hsv: rgb.to_hsv(),
            hsl: rgb.to_hsl(),
        }
    }

    /// The text shown for `notation`: the hex code, or the rounded
    /// components separated by `", "`.
    pub fn format(&self, notation: Notation) -> String {
        match notation {
            Notation::Hex => self.hex.clone(),
            Notation::Rgb => self.rgb.to_field_texts().join(", "),
            Notation::Cmyk => self.cmyk.to_field_texts().join(", "),
            Notation::Hsv => self.hsv.to_field_texts().join(", "),
            Notation::Hsl => self.hsl.to_field_texts().join(", "),
        }
    }
}

/// A committed color together with what caused it.
#[derive(Clone, Debug, PartialEq)]
pub struct Change {
    /// Who committed.
    pub origin: Origin,
    /// The new color in every notation.
    pub snapshot: Snapshot,
}

/// Receives every committed change, e.g. a host view theming itself with the
/// hex code or a display surface redrawing.
pub trait Observer {
    /// Called once per commit with the full bundle.
    fn color_changed(&mut self, change: &Change);
}

impl<F: FnMut(&Change)> Observer for F {
    fn color_changed(&mut self, change: &Change) {
        self(change)
    }
}

/// Owns the canonical color. It is only mutated through [`commit`].
///
/// [`commit`]: ColorState::commit
pub struct ColorState {
    rgb: Rgb,
    observers: Vec<Box<dyn Observer>>,
}

impl ColorState {
    /// Create a state holding `rgb`.
    pub fn new(rgb: Rgb) -> Self {
        Self {
            rgb,
            observers: vec![],
        }
    }

    /// The canonical color.
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// Derive the full bundle for the canonical color.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.rgb)
    }

    /// Register an observer for all future commits.
    pub fn subscribe<O: Observer + 'static>(&mut self, observer: O) {
        self.observers.push(Box::new(observer));
    }

    /// Replace the canonical color and notify every observer. The channels
    /// are taken as they are; callers clamp before committing.
    pub fn commit(&mut self, rgb: Rgb, origin: Origin) -> Change {
        self.rgb = rgb;

        let change = Change {
            origin,
            snapshot: Snapshot::new(rgb),
        };
        log::debug!("commit {} from {:?}", change.snapshot.hex, origin);

        for observer in self.observers.iter_mut() {
            observer.color_changed(&change);
        }

        change
    }

    /// Commit the color with the given hue, saturation and lightness.
    pub fn select_from_hsl(&mut self, hsl: Hsl, origin: Origin) -> Change {
        self.commit(hsl.to_rgb(), origin)
    }
}

impl fmt::Debug for ColorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorState")
            .field("rgb", &self.rgb)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    #[test]
    fn snapshot_derives_everything() {
        let snapshot = Snapshot::new(Rgb::new(0, 255, 64));
        assert_eq!(snapshot.hex, "#00FF40");
        assert_eq!(snapshot.cmyk, Rgb::new(0, 255, 64).to_cmyk());
        assert_eq!(snapshot.format(Notation::Hex), "#00FF40");
        assert_eq!(snapshot.format(Notation::Rgb), "0, 255, 64");
        assert_eq!(snapshot.format(Notation::Cmyk), "100, 0, 75, 0");
        assert_eq!(snapshot.format(Notation::Hsv), "135, 100, 100");
        assert_eq!(snapshot.format(Notation::Hsl), "135, 100, 50");
    }

    #[test]
    fn commit_replaces_and_notifies() {
        let seen = Rc::new(RefCell::new(vec![]));

        let mut state = ColorState::new(Rgb::new(0, 255, 64));
        let sink = Rc::clone(&seen);
        state.subscribe(move |change: &Change| {
            sink.borrow_mut()
                .push((change.origin, change.snapshot.hex.clone()));
        });

        let change = state.commit(Rgb::new(12, 255, 64), Origin::Buffer(Notation::Rgb));
        assert_eq!(state.rgb(), Rgb::new(12, 255, 64));
        assert_eq!(change.snapshot, state.snapshot());

        state.select_from_hsl(Hsl::new(0.0, 100.0, 50.0), Origin::Slider);
        assert_eq!(state.rgb(), Rgb::new(255, 0, 0));

        assert_eq!(
            *seen.borrow(),
            vec![
                (Origin::Buffer(Notation::Rgb), "#0CFF40".to_owned()),
                (Origin::Slider, "#FF0000".to_owned()),
            ]
        );
    }
}
