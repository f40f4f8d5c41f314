//! Hue, saturation and lightness slider positions.

use crate::{
    color::Component,
    models::{Hsl, Rgb},
};

/// The three slider positions plus the saturation of the last color picked
/// outside the sliders, which tints the saturation track.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sliders {
    hue: Component,
    saturation: Component,
    lightness: Component,
    base_saturation: Component,
}

impl Sliders {
    /// Position the sliders on `rgb`.
    pub fn new(rgb: Rgb) -> Self {
        let mut sliders = Self {
            hue: 0.0,
            saturation: 0.0,
            lightness: 0.0,
            base_saturation: 0.0,
        };
        sliders.follow(rgb);
        sliders
    }

    /// Move every slider to `rgb`, which was picked somewhere else.
    pub fn follow(&mut self, rgb: Rgb) {
        let hsl = rgb.to_hsl();
        self.hue = hsl.hue;
        self.saturation = hsl.saturation;
        self.lightness = hsl.lightness;
        self.base_saturation = hsl.saturation;
    }

    /// Hue position in degrees.
    pub fn hue(&self) -> Component {
        self.hue
    }

    /// Saturation position in percent.
    pub fn saturation(&self) -> Component {
        self.saturation
    }

    /// Lightness position in percent.
    pub fn lightness(&self) -> Component {
        self.lightness
    }

    /// Saturation of the last color picked outside the sliders.
    pub fn base_saturation(&self) -> Component {
        self.base_saturation
    }

    /// The color under the sliders.
    pub fn hsl(&self) -> Hsl {
        Hsl::new(self.hue, self.saturation, self.lightness)
    }

    /// Move the hue slider, clipped to `[0, 360]`.
    pub fn set_hue(&mut self, hue: i32) {
        self.hue = hue.clamp(0, 360) as Component;
    }

    /// Move the saturation slider, clipped to `[0, 100]`.
    pub fn set_saturation(&mut self, saturation: i32) {
        self.saturation = saturation.clamp(0, 100) as Component;
    }

    /// Move the lightness slider, clipped to `[0, 100]`.
    pub fn set_lightness(&mut self, lightness: i32) {
        self.lightness = lightness.clamp(0, 100) as Component;
    }

    /// Endpoints of the saturation track: gray to the base saturation.
    pub fn saturation_track(&self) -> [Hsl; 2] {
        [
            Hsl::new(self.hue, 0.0, 50.0),
            Hsl::new(self.hue, self.base_saturation, 50.0),
        ]
    }

    /// Stops of the lightness track: black, the full color and white.
    pub fn lightness_track(&self) -> [Hsl; 3] {
        [0.0, 50.0, 100.0].map(|lightness| Hsl::new(self.hue, self.saturation, lightness))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn follows_picked_colors() {
        let mut sliders = Sliders::new(Rgb::new(0, 255, 64));
        assert_component_eq!(sliders.hue(), 64.0 / 255.0 / 6.0 * 360.0 + 120.0);
        assert_eq!(sliders.saturation(), 100.0);
        assert_eq!(sliders.lightness(), 50.0);
        assert_eq!(sliders.base_saturation(), 100.0);

        sliders.follow(Rgb::new(128, 128, 128));
        assert_eq!(sliders.hue(), 0.0);
        assert_eq!(sliders.base_saturation(), 0.0);
    }

    #[test]
    fn positions_are_clipped() {
        let mut sliders = Sliders::new(Rgb::new(255, 0, 0));
        sliders.set_hue(400);
        sliders.set_saturation(-5);
        sliders.set_lightness(101);
        assert_eq!(sliders.hsl(), Hsl::new(360.0, 0.0, 100.0));
        // Moving a slider leaves the base saturation alone.
        assert_eq!(sliders.base_saturation(), 100.0);
    }

    #[test]
    fn tracks() {
        let mut sliders = Sliders::new(Rgb::new(255, 0, 0));
        sliders.set_hue(135);
        sliders.set_saturation(40);

        let [gray, full] = sliders.saturation_track();
        assert_eq!(gray.to_string(), "hsl(135, 0%, 50%)");
        assert_eq!(full.to_string(), "hsl(135, 100%, 50%)");

        let stops = sliders.lightness_track().map(|hsl| hsl.to_string());
        assert_eq!(
            stops,
            ["hsl(135, 40%, 0%)", "hsl(135, 40%, 50%)", "hsl(135, 40%, 100%)"]
        );
    }
}
