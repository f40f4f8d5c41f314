//! Geometry of the 2D saturation/value palette.
//!
//! The palette paints a horizontal gradient from white to the pure hue and
//! darkens it toward black from top to bottom. That makes x the HSV
//! saturation and y the inverted HSV value.

use crate::{
    color::Component,
    math::{lerp, to_channel, Point, Size},
    models::Rgb,
};

/// A palette canvas of a given size, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    size: Size,
}

impl Palette {
    /// Create a palette covering `size`.
    pub fn new(size: Size) -> Self {
        Self { size }
    }

    /// The size of the canvas.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Follow a resized canvas.
    pub fn resize(&mut self, size: Size) {
        self.size = size;
    }

    /// The color painted at `point` when the palette shows `hue`. Points
    /// outside the canvas are clipped to its edges.
    pub fn sample(&self, hue: Component, point: Point) -> Rgb {
        let x = fraction(point.x, self.size.width);
        let y = fraction(point.y, self.size.height);

        let pure = crate::hsl_to_rgb(hue, 100.0, 50.0);
        let shade = |c: u8| {
            let whitened = lerp(1.0, Component::from(c) / 255.0, x);
            to_channel(whitened * (1.0 - y))
        };

        Rgb::new(shade(pure.red), shade(pure.green), shade(pure.blue))
    }

    /// Where the selection indicator for `rgb` sits.
    pub fn indicator(&self, rgb: Rgb) -> Point {
        let hsv = rgb.to_hsv();
        Point::new(
            hsv.saturation / 100.0 * self.size.width,
            (100.0 - hsv.value) / 100.0 * self.size.height,
        )
    }
}

fn fraction(offset: Component, extent: Component) -> Component {
    if extent > 0.0 {
        (offset / extent).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hsv_to_rgb;

    fn palette() -> Palette {
        Palette::new(Size::new(300.0, 120.0))
    }

    #[test]
    fn corners() {
        let palette = palette();
        assert_eq!(palette.sample(135.0, Point::new(0.0, 0.0)), Rgb::new(255, 255, 255));
        assert_eq!(palette.sample(0.0, Point::new(300.0, 0.0)), Rgb::new(255, 0, 0));
        assert_eq!(palette.sample(240.0, Point::new(150.0, 120.0)), Rgb::new(0, 0, 0));
        assert_eq!(palette.sample(0.0, Point::new(150.0, 0.0)), Rgb::new(255, 128, 128));
    }

    #[test]
    fn outside_points_are_clipped() {
        let palette = palette();
        assert_eq!(
            palette.sample(0.0, Point::new(900.0, -40.0)),
            palette.sample(0.0, Point::new(300.0, 0.0))
        );
        let empty = Palette::new(Size::new(0.0, 0.0));
        assert_eq!(empty.sample(0.0, Point::new(10.0, 10.0)), Rgb::new(255, 255, 255));
    }

    #[test]
    fn samples_are_hsv() {
        let palette = palette();
        for hue in [0.0, 45.0, 135.0, 200.0, 333.0] {
            for (x, y) in [(30.0, 12.0), (150.0, 60.0), (270.0, 100.0)] {
                let sampled = palette.sample(hue, Point::new(x, y));
                let expected = hsv_to_rgb(hue, x / 300.0 * 100.0, (1.0 - y / 120.0) * 100.0);
                for (a, b) in sampled.to_array().iter().zip(expected.to_array()) {
                    assert!(a.abs_diff(b) <= 1, "{hue} {x} {y}: {sampled:?} {expected:?}");
                }
            }
        }
    }

    #[test]
    fn indicator_tracks_saturation_and_value() {
        let palette = palette();
        assert_eq!(palette.indicator(Rgb::new(255, 0, 0)), Point::new(300.0, 0.0));
        assert_eq!(palette.indicator(Rgb::new(255, 255, 255)), Point::new(0.0, 0.0));
        assert_eq!(palette.indicator(Rgb::new(0, 0, 0)), Point::new(0.0, 120.0));
    }
}
