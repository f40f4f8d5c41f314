//! Picker configuration, exported and imported as JSON.

use serde::{Deserialize, Serialize};

use crate::{color::Component, error::ColorError, math::Size, models::Rgb};

/// Settings a picker is created with.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// The color shown before anything is picked, as `#RRGGBB`.
    pub initial_color: Rgb,
    /// Commit the hex field on every keystroke that forms a valid code.
    /// When off the hex field commits on focus loss only.
    pub live_hex: bool,
    /// Width of the palette canvas in pixels.
    pub palette_width: Component,
    /// Height of the palette canvas in pixels.
    pub palette_height: Component,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            initial_color: Rgb::new(0x00, 0xFF, 0x40),
            live_hex: true,
            palette_width: 300.0,
            palette_height: 120.0,
        }
    }
}

impl PickerConfig {
    /// Read a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ColorError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write the configuration as pretty printed JSON.
    pub fn to_json(&self) -> Result<String, ColorError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The palette canvas size.
    pub fn palette_size(&self) -> Size {
        Size::new(self.palette_width, self.palette_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = PickerConfig::default();
        assert_eq!(config.initial_color.to_hex(), "#00FF40");
        assert!(config.live_hex);
        assert_eq!(config.palette_size(), Size::new(300.0, 120.0));
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let config = PickerConfig::from_json(r##"{ "initial_color": "#336699" }"##).unwrap();
        assert_eq!(config.initial_color, Rgb::new(0x33, 0x66, 0x99));
        assert!(config.live_hex);
        assert_eq!(config.palette_height, 120.0);
    }

    #[test]
    fn round_trips_through_json() {
        let config = PickerConfig {
            initial_color: Rgb::new(1, 2, 3),
            live_hex: false,
            palette_width: 640.0,
            palette_height: 240.0,
        };
        let json = config.to_json().unwrap();
        assert!(json.contains("\"#010203\""));
        assert_eq!(PickerConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn bad_json_is_a_config_error() {
        assert!(matches!(
            PickerConfig::from_json(r##"{ "initial_color": "#12" }"##),
            Err(ColorError::Config(_))
        ));
        assert!(matches!(PickerConfig::from_json("["), Err(ColorError::Config(_))));
    }
}
