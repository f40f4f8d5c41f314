//! Model a color with the HSL notation.

use std::fmt;

use crate::color::{Component, HasNotation, Notation};

tincture_macros::gen_model! {
    /// A color specified with hue, saturation and lightness.
    pub struct Hsl {
        /// The hue in degrees.
        #[component(key = "h", max = 360)]
        hue: Component,
        /// The saturation in percent.
        #[component(key = "s", max = 100)]
        saturation: Component,
        /// The lightness in percent.
        #[component(key = "l", max = 100)]
        lightness: Component,
    }
}

impl HasNotation for Hsl {
    const NOTATION: Notation = Notation::Hsl;
}

/// Formats as a CSS color, e.g. `hsl(135, 100%, 50%)`.
impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue.round(),
            self.saturation.round(),
            self.lightness.round()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Model;

    #[test]
    fn generated_model() {
        assert_eq!(Hsl::KEYS, &["h", "s", "l"]);
        assert_eq!(Hsl::LABELS, &["Hue", "Saturation", "Lightness"]);
        assert_eq!(Hsl::from_components(&[1.0, 2.0]), Hsl::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn css() {
        assert_eq!(Hsl::new(135.0, 100.0, 50.0).to_string(), "hsl(135, 100%, 50%)");
        assert_eq!(Hsl::new(134.6, 99.9, 0.2).to_string(), "hsl(135, 100%, 0%)");
    }
}
