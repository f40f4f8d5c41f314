//! Conversions between the canonical [`Rgb`] and every derived notation.
//!
//! All ratio and hue math happens in floating point. Derived components are
//! returned unrounded; rounding (ties away from zero) only happens where a
//! value becomes an 8-bit channel, or when it is clamped for display.
//!
//! ```rust
//! use tincture::{Rgb, ToRgb};
//! let green = Rgb::new(0, 255, 64);
//! assert_eq!(green.to_hex(), "#00FF40");
//! assert_eq!(green.to_hsl().to_rgb(), green);
//! ```

use std::str::FromStr;

use crate::{
    color::Component,
    error::ColorError,
    models::{Cmyk, Hsl, Hsv, Model, Rgb},
};

/// Implemented by every model that can be turned back into the canonical
/// 8-bit color.
pub trait ToRgb {
    /// Convert to 8-bit RGB, rounding each channel to the nearest integer.
    fn to_rgb(&self) -> Rgb;
}

impl Rgb {
    /// Format as `#RRGGBB` with uppercase digits.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }

    /// Parse 6 hex digits, case-insensitive, with an optional leading `#`.
    /// This is the lenient grammar; see [`is_valid_hex`] for the strict one.
    pub fn from_hex(hex: &str) -> Option<Self> {
        util::parse_hex(hex).map(Self::from)
    }

    /// Convert to the HSV notation.
    pub fn to_hsv(&self) -> Hsv {
        util::rgb_to_hsv(util::normalize(self)).into()
    }

    /// Convert to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        util::rgb_to_hsl(util::normalize(self)).into()
    }

    /// Convert to the CMYK notation.
    pub fn to_cmyk(&self) -> Cmyk {
        util::rgb_to_cmyk(util::normalize(self)).into()
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s).ok_or_else(|| ColorError::InvalidHex(s.to_owned()))
    }
}

impl ToRgb for Rgb {
    fn to_rgb(&self) -> Rgb {
        *self
    }
}

impl ToRgb for Hsv {
    fn to_rgb(&self) -> Rgb {
        util::hsv_to_rgb(self.to_array())
    }
}

impl ToRgb for Hsl {
    fn to_rgb(&self) -> Rgb {
        util::hsl_to_rgb(self.to_array())
    }
}

impl ToRgb for Cmyk {
    fn to_rgb(&self) -> Rgb {
        util::cmyk_to_rgb(self.to_array())
    }
}

impl From<Rgb> for Hsv {
    fn from(value: Rgb) -> Self {
        value.to_hsv()
    }
}

impl From<Rgb> for Hsl {
    fn from(value: Rgb) -> Self {
        value.to_hsl()
    }
}

impl From<Rgb> for Cmyk {
    fn from(value: Rgb) -> Self {
        value.to_cmyk()
    }
}

/// Format the channels as `#RRGGBB`.
pub fn rgb_to_hex(red: u8, green: u8, blue: u8) -> String {
    Rgb::new(red, green, blue).to_hex()
}

/// Parse `#?[0-9A-Fa-f]{6}`. Returns `None` for anything else.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    Rgb::from_hex(hex)
}

/// Strictly check for `#` followed by exactly 6 hex digits.
///
/// This is stricter than [`hex_to_rgb`], which also takes codes without the
/// `#`. The strict form is what a hex field must show before it commits; the
/// lenient form is for parsing codes from anywhere else.
pub fn is_valid_hex(hex: &str) -> bool {
    hex.starts_with('#') && util::parse_hex(hex).is_some()
}

/// Convert 8-bit channels to HSV.
pub fn rgb_to_hsv(red: u8, green: u8, blue: u8) -> Hsv {
    Rgb::new(red, green, blue).to_hsv()
}

/// Convert HSV to 8-bit channels. The hue wraps, so 360 and 0 are the same.
pub fn hsv_to_rgb(hue: Component, saturation: Component, value: Component) -> Rgb {
    Hsv::new(hue, saturation, value).to_rgb()
}

/// Convert 8-bit channels to HSL.
pub fn rgb_to_hsl(red: u8, green: u8, blue: u8) -> Hsl {
    Rgb::new(red, green, blue).to_hsl()
}

/// Convert HSL to 8-bit channels. The hue wraps, so 360 and 0 are the same.
pub fn hsl_to_rgb(hue: Component, saturation: Component, lightness: Component) -> Rgb {
    Hsl::new(hue, saturation, lightness).to_rgb()
}

/// Convert 8-bit channels to CMYK percentages. Pure black is
/// `(0, 0, 0, 100)`.
pub fn rgb_to_cmyk(red: u8, green: u8, blue: u8) -> Cmyk {
    Rgb::new(red, green, blue).to_cmyk()
}

/// Convert CMYK percentages to 8-bit channels.
pub fn cmyk_to_rgb(cyan: Component, magenta: Component, yellow: Component, key: Component) -> Rgb {
    Cmyk::new(cyan, magenta, yellow, key).to_rgb()
}

/// Round and clip to `[0, 255]`.
pub fn clamp_rgb(red: Component, green: Component, blue: Component) -> Rgb {
    Rgb::clamped(&[red, green, blue])
}

/// Round and clip the hue to `[0, 360]` and the rest to `[0, 100]`.
pub fn clamp_hsv(hue: Component, saturation: Component, value: Component) -> Hsv {
    Hsv::clamped(&[hue, saturation, value])
}

/// Round and clip the hue to `[0, 360]` and the rest to `[0, 100]`.
pub fn clamp_hsl(hue: Component, saturation: Component, lightness: Component) -> Hsl {
    Hsl::clamped(&[hue, saturation, lightness])
}

/// Round and clip every component to `[0, 100]`.
pub fn clamp_cmyk(cyan: Component, magenta: Component, yellow: Component, key: Component) -> Cmyk {
    Cmyk::clamped(&[cyan, magenta, yellow, key])
}

mod util {
    use crate::{
        color::Component,
        math::to_channel,
        models::Rgb,
    };

    /// Scale the 8-bit channels to the unit range.
    pub fn normalize(rgb: &Rgb) -> [Component; 3] {
        rgb.to_array().map(|c| Component::from(c) / 255.0)
    }

    pub fn parse_hex(hex: &str) -> Option<[u8; 3]> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some([channel(0)?, channel(2)?, channel(4)?])
    }

    /// Calculate the hue in degrees from unit RGB components and return it
    /// along with the min and max components. Achromatic colors have a hue
    /// of 0. When several channels share the max, red wins over green and
    /// green over blue.
    fn hue_with_min_max(from: [Component; 3]) -> (Component, Component, Component) {
        let [red, green, blue] = from;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let delta = max - min;

        if delta == 0.0 {
            return (0.0, min, max);
        }

        let sector = if max == red {
            (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
        } else if max == green {
            (blue - red) / delta + 2.0
        } else {
            (red - green) / delta + 4.0
        };

        (sector / 6.0 * 360.0, min, max)
    }

    pub fn rgb_to_hsv(from: [Component; 3]) -> [Component; 3] {
        let (hue, min, max) = hue_with_min_max(from);

        let saturation = if max == 0.0 { 0.0 } else { (max - min) / max };

        [hue, saturation * 100.0, max * 100.0]
    }

    pub fn rgb_to_hsl(from: [Component; 3]) -> [Component; 3] {
        let (hue, min, max) = hue_with_min_max(from);

        let lightness = (max + min) / 2.0;
        let delta = max - min;

        let saturation = if delta == 0.0 {
            0.0
        } else if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        [hue, saturation * 100.0, lightness * 100.0]
    }

    /// Place `chroma` and the intermediate component in the sector of the
    /// hue wheel and lift everything by `m`.
    fn from_sector(hue: Component, chroma: Component, m: Component) -> Rgb {
        let sector = hue.rem_euclid(360.0) / 60.0;
        let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());

        let (red, green, blue) = if sector < 1.0 {
            (chroma, x, 0.0)
        } else if sector < 2.0 {
            (x, chroma, 0.0)
        } else if sector < 3.0 {
            (0.0, chroma, x)
        } else if sector < 4.0 {
            (0.0, x, chroma)
        } else if sector < 5.0 {
            (x, 0.0, chroma)
        } else {
            (chroma, 0.0, x)
        };

        Rgb::new(to_channel(red + m), to_channel(green + m), to_channel(blue + m))
    }

    pub fn hsv_to_rgb(from: [Component; 3]) -> Rgb {
        let [hue, saturation, value] = from;
        let (saturation, value) = (saturation / 100.0, value / 100.0);

        let chroma = value * saturation;
        from_sector(hue, chroma, value - chroma)
    }

    pub fn hsl_to_rgb(from: [Component; 3]) -> Rgb {
        let [hue, saturation, lightness] = from;
        let (saturation, lightness) = (saturation / 100.0, lightness / 100.0);

        let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        from_sector(hue, chroma, lightness - chroma / 2.0)
    }

    pub fn rgb_to_cmyk(from: [Component; 3]) -> [Component; 4] {
        let [cyan, magenta, yellow] = from.map(|c| 1.0 - c);
        let key = cyan.min(magenta).min(yellow);

        // Pure black, the division below would be by zero.
        if key == 1.0 {
            return [0.0, 0.0, 0.0, 100.0];
        }

        let [cyan, magenta, yellow] = [cyan, magenta, yellow].map(|c| (c - key) / (1.0 - key) * 100.0);
        [cyan, magenta, yellow, key * 100.0]
    }

    pub fn cmyk_to_rgb(from: [Component; 4]) -> Rgb {
        let [cyan, magenta, yellow, key] = from.map(|c| c / 100.0);
        let ink = |c: Component| to_channel((1.0 - c) * (1.0 - key));
        Rgb::new(ink(cyan), ink(magenta), ink(yellow))
    }
}
