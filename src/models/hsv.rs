//! Model a color with the HSV notation.

use crate::color::{Component, HasNotation, Notation};

tincture_macros::gen_model! {
    /// A color specified with hue, saturation and value.
    pub struct Hsv {
        /// The hue in degrees.
        #[component(key = "h", max = 360)]
        hue: Component,
        /// The saturation in percent.
        #[component(key = "s", max = 100)]
        saturation: Component,
        /// The value (brightness) in percent.
        #[component(key = "v", max = 100)]
        value: Component,
    }
}

impl HasNotation for Hsv {
    const NOTATION: Notation = Notation::Hsv;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Model;

    #[test]
    fn generated_model() {
        assert_eq!(Hsv::KEYS, &["h", "s", "v"]);
        assert_eq!(Hsv::LABELS, &["Hue", "Saturation", "Value"]);
        assert_eq!(Hsv::RANGES[0], (0.0, 360.0));

        let hsv = Hsv::new(120.0, 50.0, 25.0);
        assert_eq!(hsv.to_array(), [120.0, 50.0, 25.0]);
        assert_eq!(Hsv::from([120.0, 50.0, 25.0]), hsv);
    }

    #[test]
    fn clamped() {
        let hsv = Hsv::clamped(&[400.0, -3.0, 49.5]);
        assert_eq!(hsv, Hsv::new(360.0, 0.0, 50.0));
    }
}
