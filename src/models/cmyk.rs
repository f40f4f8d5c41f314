//! Model a color with the CMYK notation.
//!
//! CMYK is derived for display and input only. Black generation makes the
//! RGB to CMYK transform a projection, so converting back does not always
//! reproduce the original channels and a CMYK value is never stored as the
//! canonical color.

use crate::color::{Component, HasNotation, Notation};

tincture_macros::gen_model! {
    /// A color specified with cyan, magenta, yellow and key (black)
    /// percentages.
    pub struct Cmyk {
        /// The cyan component in percent.
        #[component(key = "c", max = 100)]
        cyan: Component,
        /// The magenta component in percent.
        #[component(key = "m", max = 100)]
        magenta: Component,
        /// The yellow component in percent.
        #[component(key = "y", max = 100)]
        yellow: Component,
        /// The key (black) component in percent.
        #[component(key = "k", max = 100)]
        key: Component,
    }
}

impl HasNotation for Cmyk {
    const NOTATION: Notation = Notation::Cmyk;
}
