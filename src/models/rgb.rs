//! Model a color with 8-bit red, green and blue channels.

use crate::{
    color::{Component, HasNotation, Notation},
    error::ColorError,
    math::round_clamp,
    models::Model,
};

/// A color specified with 8-bit sRGB channels. This is the only canonical
/// representation, every other notation is derived from it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    /// The red channel.
    pub red: u8,
    /// The green channel.
    pub green: u8,
    /// The blue channel.
    pub blue: u8,
}

impl Rgb {
    /// Create a new color from its channels.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Return the channels as an array.
    pub fn to_array(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

impl HasNotation for Rgb {
    const NOTATION: Notation = Notation::Rgb;
}

impl Model for Rgb {
    const KEYS: &'static [&'static str] = &["r", "g", "b"];
    const LABELS: &'static [&'static str] = &["Red", "Green", "Blue"];
    const RANGES: &'static [(Component, Component)] = &[(0.0, 255.0), (0.0, 255.0), (0.0, 255.0)];

    fn components(&self) -> Vec<Component> {
        self.to_array().iter().map(|&c| Component::from(c)).collect()
    }

    fn from_components(values: &[Component]) -> Self {
        let channel = |i: usize| {
            round_clamp(values.get(i).copied().unwrap_or(0.0), 0.0, 255.0) as u8
        };
        Self::new(channel(0), channel(1), channel(2))
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl TryFrom<String> for Rgb {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_hex()
    }
}
