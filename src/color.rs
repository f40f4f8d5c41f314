//! Scalar type and the set of notations a color can be edited in.

use std::fmt;

use bitflags::bitflags;

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all real-valued components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all real-valued components are stored as.
pub type Component = f64;

/// The notations the picker shows and accepts input in. Each one owns a
/// single input group (and edit buffer).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Notation {
    /// `#RRGGBB`.
    Hex = 0,
    /// 8-bit red, green and blue channels. The canonical notation.
    Rgb = 1,
    /// Cyan, magenta, yellow and key percentages. Derived and display only,
    /// the round trip through CMYK is lossy.
    Cmyk = 2,
    /// Hue in degrees, saturation and value percentages.
    Hsv = 3,
    /// Hue in degrees, saturation and lightness percentages.
    Hsl = 4,
}

impl Notation {
    /// All notations, in the order the picker lays them out.
    pub const ALL: [Notation; 5] = [
        Notation::Hex,
        Notation::Rgb,
        Notation::Cmyk,
        Notation::Hsv,
        Notation::Hsl,
    ];

    /// The display name of the notation.
    pub fn name(&self) -> &'static str {
        match self {
            Notation::Hex => "HEX",
            Notation::Rgb => "RGB",
            Notation::Cmyk => "CMYK",
            Notation::Hsv => "HSV",
            Notation::Hsl => "HSL",
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// A set of [`Notation`]s, e.g. the buffers refreshed by a commit.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Notations : u8 {
        /// [`Notation::Hex`]
        const HEX = 1 << 0;
        /// [`Notation::Rgb`]
        const RGB = 1 << 1;
        /// [`Notation::Cmyk`]
        const CMYK = 1 << 2;
        /// [`Notation::Hsv`]
        const HSV = 1 << 3;
        /// [`Notation::Hsl`]
        const HSL = 1 << 4;
    }
}

impl From<Notation> for Notations {
    fn from(value: Notation) -> Self {
        Notations::from_bits_truncate(1 << value as u8)
    }
}

/// Implemented by every model to tie it to its [`Notation`].
pub trait HasNotation {
    /// The notation this model is edited in.
    const NOTATION: Notation;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notation_bits_line_up_with_flags() {
        assert_eq!(Notations::from(Notation::Hex), Notations::HEX);
        assert_eq!(Notations::from(Notation::Rgb), Notations::RGB);
        assert_eq!(Notations::from(Notation::Cmyk), Notations::CMYK);
        assert_eq!(Notations::from(Notation::Hsv), Notations::HSV);
        assert_eq!(Notations::from(Notation::Hsl), Notations::HSL);

        let all = Notation::ALL
            .iter()
            .fold(Notations::empty(), |acc, n| acc | (*n).into());
        assert_eq!(all, Notations::all());
    }

    #[test]
    fn names() {
        assert_eq!(Notation::Cmyk.to_string(), "CMYK");
        assert_eq!(Notation::Hex.name(), "HEX");
    }
}
