//! Theme derivation from an extracted palette
//!
//! Maps the three highest-ranked palette entries onto the dashboard's
//! theme slots and derives the darker background gradient pair from
//! them. A degraded palette maps to the fixed fallback theme wholesale;
//! the fallback gradient values are pinned constants, not scaled
//! derivations of the fallback primaries.

use crate::color::conversion::{rgb_to_hex, scale_rgb};
use crate::color::palette::PaletteResult;
use crate::constants::theming;
use serde::{Deserialize, Serialize};

/// The five theme colors consumed by the presentation layer
///
/// All values are lowercase 7-character hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub bg_gradient_start: String,
    pub bg_gradient_end: String,
}

impl ThemeColors {
    /// The fixed fallback theme
    pub fn fallback() -> Self {
        Self {
            primary: theming::fallback::PRIMARY.to_string(),
            secondary: theming::fallback::SECONDARY.to_string(),
            accent: theming::fallback::ACCENT.to_string(),
            bg_gradient_start: theming::fallback::BG_GRADIENT_START.to_string(),
            bg_gradient_end: theming::fallback::BG_GRADIENT_END.to_string(),
        }
    }
}

/// Derive the theme colors from a ranked palette
///
/// Entry 0 becomes primary, entry 1 secondary, entry 2 accent. The
/// background gradient is a darker pair: primary scaled by 0.3 and
/// secondary scaled by 0.4. A fallback-marked palette, or one with
/// fewer than three entries, yields exactly the fallback theme.
pub fn derive_theme(palette: &PaletteResult) -> ThemeColors {
    if palette.is_fallback() || palette.colors().len() < 3 {
        return ThemeColors::fallback();
    }

    let primary = palette.colors()[0];
    let secondary = palette.colors()[1];
    let accent = palette.colors()[2];

    ThemeColors {
        primary: rgb_to_hex(primary),
        secondary: rgb_to_hex(secondary),
        accent: rgb_to_hex(accent),
        bg_gradient_start: rgb_to_hex(scale_rgb(primary, theming::GRADIENT_START_FACTOR)),
        bg_gradient_end: rgb_to_hex(scale_rgb(secondary, theming::GRADIENT_END_FACTOR)),
    }
}
