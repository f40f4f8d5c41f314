//! tincture is the conversion and synchronization engine of an interactive
//! color picker.
//!
//! One canonical 8-bit [`Rgb`] color lives in a [`ColorState`]. The HEX, RGB,
//! CMYK, HSV and HSL input groups each keep their own text buffer, commit
//! into the state and resynchronize from every [`Change`] it publishes. The
//! [`ColorPicker`] wires the buffers, the HSL [`Sliders`] and the
//! saturation/value [`Palette`] together; rendering is left to the host.
//!
//! ```rust
//! use tincture::{ColorPicker, Event, Notation};
//!
//! let mut picker = ColorPicker::default();
//! picker.handle(Event::keystroke(Notation::Rgb, "r", "12")).unwrap();
//! picker.handle(Event::Blur(Notation::Rgb)).unwrap();
//! assert_eq!(picker.texts(Notation::Hex), vec!["#0CFF40"]);
//! ```

#![deny(missing_docs)]

mod buffer;
mod clipboard;
mod color;
mod config;
mod convert;
mod error;
mod math;
mod models;
mod palette;
mod picker;
mod sliders;
mod state;

pub use buffer::{BufferState, EditBuffer, HexBuffer};
pub use clipboard::{Clipboard, MemoryClipboard};
pub use color::{Component, HasNotation, Notation, Notations};
pub use config::PickerConfig;
pub use convert::{
    clamp_cmyk, clamp_hsl, clamp_hsv, clamp_rgb, cmyk_to_rgb, hex_to_rgb, hsl_to_rgb, hsv_to_rgb,
    is_valid_hex, rgb_to_cmyk, rgb_to_hex, rgb_to_hsl, rgb_to_hsv, ToRgb,
};
pub use error::ColorError;
pub use math::{Point, Size};
pub use models::{Cmyk, Hsl, Hsv, Model, Rgb};
pub use palette::Palette;
pub use picker::{ColorPicker, Event, Update};
pub use sliders::Sliders;
pub use state::{Change, ColorState, Observer, Origin, Snapshot};
