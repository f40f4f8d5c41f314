//! Each notation is modeled with its own type. [`Rgb`] holds the canonical
//! 8-bit channels, the rest are real-valued and derived from it.

use std::fmt;

use crate::{color::Component, math::round_clamp};

mod cmyk;
mod hsl;
mod hsv;
mod rgb;

pub use cmyk::Cmyk;
pub use hsl::Hsl;
pub use hsv::Hsv;
pub use rgb::Rgb;

/// The shape of a color model: its named components and their ranges.
/// Implemented by `gen_model!` for the derived notations.
pub trait Model: Copy + fmt::Debug + PartialEq {
    /// Short component keys used by input fields, e.g. `["h", "s", "v"]`.
    const KEYS: &'static [&'static str];
    /// Human readable component names, in the same order as the keys.
    const LABELS: &'static [&'static str];
    /// Inclusive `(min, max)` range of every component.
    const RANGES: &'static [(Component, Component)];

    /// Return the components in declaration order.
    fn components(&self) -> Vec<Component>;

    /// Build a model from components in declaration order. Missing
    /// components are 0.
    fn from_components(values: &[Component]) -> Self;

    /// Round each value to the nearest integer and clip it to the range of
    /// its component.
    fn clamped(values: &[Component]) -> Self {
        let values = Self::RANGES
            .iter()
            .enumerate()
            .map(|(i, &(min, max))| round_clamp(values.get(i).copied().unwrap_or(0.0), min, max))
            .collect::<Vec<_>>();
        Self::from_components(&values)
    }

    /// The components as the integer strings an input field shows: rounded
    /// and clipped to their ranges.
    fn to_field_texts(&self) -> Vec<String> {
        Self::clamped(&self.components())
            .components()
            .iter()
            .map(|&v| (v as i64).to_string())
            .collect()
    }

    /// Position of the component with the given key.
    fn index_of(key: &str) -> Option<usize> {
        Self::KEYS.iter().position(|k| *k == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_labels_and_ranges_agree() {
        fn check<M: Model>() {
            assert_eq!(M::KEYS.len(), M::LABELS.len());
            assert_eq!(M::KEYS.len(), M::RANGES.len());
        }
        check::<Rgb>();
        check::<Cmyk>();
        check::<Hsv>();
        check::<Hsl>();
    }

    #[test]
    fn index_of() {
        assert_eq!(Hsv::index_of("h"), Some(0));
        assert_eq!(Cmyk::index_of("k"), Some(3));
        assert_eq!(Rgb::index_of("x"), None);
    }

    #[test]
    fn field_texts_are_rounded_integers() {
        assert_eq!(
            Cmyk::new(0.0, 49.5, 85.714286, 17.647059).to_field_texts(),
            vec!["0", "50", "86", "18"]
        );
        assert_eq!(Rgb::new(0, 255, 64).to_field_texts(), vec!["0", "255", "64"]);
        assert_eq!(Hsv::new(359.7, 0.0, 100.0).to_field_texts(), vec!["360", "0", "100"]);
    }
}
