//! Math utility functions.

use euclid::default::{Point2D, Size2D};
use num_traits::Float;

use crate::Component;

/// A position on a 2D surface, in pixels.
pub type Point = Point2D<Component>;

/// The extent of a 2D surface, in pixels.
pub type Size = Size2D<Component>;

/// Linearly interpolate from `a` to `b` using `t` as the progress between them.
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Round to the nearest integer, ties away from zero, then clip to
/// `[min, max]`. NaN ends up at `min`.
pub fn round_clamp<T: Float>(value: T, min: T, max: T) -> T {
    value.round().max(min).min(max)
}

/// Scale a channel in the unit range to an 8-bit value.
pub fn to_channel(value: Component) -> u8 {
    round_clamp(value * 255.0, 0.0, 255.0) as u8
}

/// Parse the integer at the start of `text`, the way a permissive number
/// field does: leading whitespace and a sign are accepted, parsing stops at
/// the first non-digit, and anything without digits is 0.
pub fn parse_int(text: &str) -> i64 {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0_i64, |acc, d| {
            acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
        });

    if negative {
        -value
    } else {
        value
    }
}
