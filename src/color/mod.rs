//! Color extraction and theming module
//!
//! This module handles pixel filtering, palette extraction by quantized
//! bucket frequency, and derivation of the dashboard theme colors.

pub mod conversion;
pub mod palette;
pub mod quantize;
pub mod theme;

pub use conversion::Rgb;
pub use palette::{PaletteExtractor, PaletteResult};
pub use theme::{derive_theme, ThemeColors};
