//! Color representation and conversion utilities
//!
//! Provides the primitives shared by the extraction pipeline:
//! - RGB triple type used for palette entries
//! - Luma-weighted brightness measure
//! - Hex color representation (lowercase, `#rrggbb`)
//! - Channel scaling with gamut clamping

use crate::constants::sampling;
use crate::error::{DashboardError, Result};
use palette::Srgb;
use serde::{Deserialize, Serialize};

/// An RGB triple with byte channels, as resolved from a quantized bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

/// Luma-weighted brightness of an RGB triple in per-mille units
///
/// Exact integer form of `0.299r + 0.587g + 0.114b`, scaled by 1000.
/// The pixel filter compares against this form directly so the
/// exclusive band thresholds carry no float rounding.
pub fn brightness_milli(r: u8, g: u8, b: u8) -> u32 {
    sampling::LUMA_RED_MILLI * r as u32
        + sampling::LUMA_GREEN_MILLI * g as u32
        + sampling::LUMA_BLUE_MILLI * b as u32
}

/// Luma-weighted brightness of an RGB triple
///
/// Uses the BT.601 weights `0.299r + 0.587g + 0.114b`, the measure the
/// pipeline uses to exclude near-black and near-white pixels from
/// palette consideration.
pub fn brightness(r: u8, g: u8, b: u8) -> f32 {
    brightness_milli(r, g, b) as f32 / 1000.0
}

/// Convert an RGB triple to a lowercase hex color string
///
/// # Returns
///
/// 7-character hex string (e.g. "#a78bfa")
pub fn rgb_to_hex(color: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}

/// Parse a hex color string to an RGB triple
///
/// Accepts the leading `#` as optional.
///
/// # Errors
///
/// Returns `ProcessingError` if the string is not 6 hex digits
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return Err(DashboardError::processing(format!(
            "Invalid hex color: expected 6 characters, got {}",
            hex.len()
        )));
    }

    let r = u8::from_str_radix(&hex[0..2], 16)
        .map_err(|e| DashboardError::processing(format!("Invalid red value: {}", e)))?;
    let g = u8::from_str_radix(&hex[2..4], 16)
        .map_err(|e| DashboardError::processing(format!("Invalid green value: {}", e)))?;
    let b = u8::from_str_radix(&hex[4..6], 16)
        .map_err(|e| DashboardError::processing(format!("Invalid blue value: {}", e)))?;

    Ok(Rgb { r, g, b })
}

/// Scale an RGB triple by a brightness factor, clamping to valid gamut
///
/// Each channel is multiplied, rounded, and clamped to [0, 255]. The
/// clamp makes the operation total over any factor, including factors
/// above 1.0 or below 0.0.
pub fn scale_rgb(color: Rgb, factor: f32) -> Rgb {
    let scaled = Srgb::new(
        (color.r as f32 / 255.0) * factor,
        (color.g as f32 / 255.0) * factor,
        (color.b as f32 / 255.0) * factor,
    );
    let clamped = Srgb::new(
        scaled.red.clamp(0.0, 1.0),
        scaled.green.clamp(0.0, 1.0),
        scaled.blue.clamp(0.0, 1.0),
    );
    Rgb {
        r: (clamped.red * 255.0).round() as u8,
        g: (clamped.green * 255.0).round() as u8,
        b: (clamped.blue * 255.0).round() as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brightness_extremes() {
        assert_eq!(brightness_milli(0, 0, 0), 0);
        assert_eq!(brightness_milli(255, 255, 255), 255_000);
        assert!((brightness(255, 255, 255) - 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_brightness_is_exact_on_gray_levels() {
        // Gray levels make brightness equal the channel value.
        assert_eq!(brightness_milli(30, 30, 30), 30_000);
        assert_eq!(brightness_milli(240, 240, 240), 240_000);
    }

    #[test]
    fn test_brightness_weights_green_heaviest() {
        let red = brightness(255, 0, 0);
        let green = brightness(0, 255, 0);
        let blue = brightness(0, 0, 255);
        assert!(green > red);
        assert!(red > blue);
    }

    #[test]
    fn test_rgb_to_hex() {
        assert_eq!(rgb_to_hex(Rgb::new(255, 0, 0)), "#ff0000");
        assert_eq!(rgb_to_hex(Rgb::new(167, 139, 250)), "#a78bfa");
        assert_eq!(rgb_to_hex(Rgb::new(0, 0, 0)), "#000000");
    }

    #[test]
    fn test_hex_length_is_always_seven() {
        for color in [Rgb::new(0, 0, 0), Rgb::new(1, 2, 3), Rgb::new(255, 255, 255)] {
            assert_eq!(rgb_to_hex(color).len(), 7);
        }
    }

    #[test]
    fn test_hex_to_rgb_roundtrip() {
        let color = Rgb::new(30, 27, 75);
        assert_eq!(hex_to_rgb(&rgb_to_hex(color)).unwrap(), color);

        // Leading # is optional
        assert_eq!(hex_to_rgb("a78bfa").unwrap(), Rgb::new(167, 139, 250));
    }

    #[test]
    fn test_hex_to_rgb_invalid() {
        assert!(hex_to_rgb("#ff").is_err());
        assert!(hex_to_rgb("#gggggg").is_err());
        assert!(hex_to_rgb("").is_err());
    }

    #[test]
    fn test_scale_rgb_darkens() {
        let scaled = scale_rgb(Rgb::new(200, 100, 50), 0.5);
        assert_eq!(scaled, Rgb::new(100, 50, 25));
    }

    #[test]
    fn test_scale_rgb_clamps_above() {
        let scaled = scale_rgb(Rgb::new(200, 200, 200), 10.0);
        assert_eq!(scaled, Rgb::new(255, 255, 255));
    }

    #[test]
    fn test_scale_rgb_clamps_below() {
        let scaled = scale_rgb(Rgb::new(200, 200, 200), -1.0);
        assert_eq!(scaled, Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_scale_rgb_never_leaves_gamut() {
        // Channels are u8 by construction; exercise a spread of factors to
        // check the clamp is total.
        for factor in [-2.0_f32, 0.0, 0.3, 0.4, 1.0, 1.7, 100.0] {
            let _ = scale_rgb(Rgb::new(0, 128, 255), factor);
        }
    }
}
