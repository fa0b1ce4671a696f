//! Dominant palette extraction
//!
//! Implements the full sampling pipeline over a decoded image:
//! - Downscale to 0.1x dimensions (nearest-neighbour sampling)
//! - Filter out transparent, near-black, and near-white pixels
//! - Quantize survivors into 10-unit color buckets
//! - Rank buckets by descending frequency, keep the top 10
//!
//! The extractor never fails: an image with too few distinct surviving
//! colors degrades to a fixed fallback palette. A plausible generic
//! theme beats a visible failure for a cosmetic feature.

use crate::color::conversion::Rgb;
use crate::color::quantize::{accumulate_buckets, PixelSample};
use crate::constants::{palette, sampling, theming};
use image::imageops::{self, FilterType};
use image::RgbaImage;
use tracing::{debug, warn};

/// Ranked palette produced by extraction
///
/// Entries are ordered by descending bucket frequency; ties break on
/// ascending RGB key so the ordering is reproducible. When the degrade
/// policy substituted the predetermined palette, `fallback` is set and
/// theme derivation maps the result to the fixed fallback theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteResult {
    colors: Vec<Rgb>,
    fallback: bool,
}

impl PaletteResult {
    /// Palette entries, most frequent first
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Whether the degrade policy replaced the extracted colors
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    /// The predetermined fallback palette
    pub fn fallback_palette() -> Self {
        Self {
            colors: theming::fallback::PALETTE.iter().map(|&c| Rgb::from(c)).collect(),
            fallback: true,
        }
    }

    #[cfg(test)]
    pub(crate) fn from_colors(colors: Vec<Rgb>) -> Self {
        Self { colors, fallback: false }
    }
}

/// Palette extractor with tunable sampling parameters
pub struct PaletteExtractor {
    downscale_factor: f32,
    max_palette_size: usize,
    min_distinct_colors: usize,
}

impl Default for PaletteExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PaletteExtractor {
    /// Create an extractor with the standard pipeline parameters
    pub fn new() -> Self {
        Self {
            downscale_factor: sampling::DOWNSCALE_FACTOR,
            max_palette_size: palette::MAX_PALETTE_SIZE,
            min_distinct_colors: palette::MIN_DISTINCT_COLORS,
        }
    }

    /// Create an extractor with custom parameters
    pub fn with_params(
        downscale_factor: f32,
        max_palette_size: usize,
        min_distinct_colors: usize,
    ) -> Self {
        Self {
            downscale_factor,
            max_palette_size,
            min_distinct_colors,
        }
    }

    /// Extract the dominant palette from a decoded image
    ///
    /// # Arguments
    ///
    /// * `image` - RGBA pixel buffer to sample
    ///
    /// # Returns
    ///
    /// A ranked `PaletteResult`; the fixed fallback palette when fewer
    /// than 3 distinct buckets survive filtering
    pub fn extract_palette(&self, image: &RgbaImage) -> PaletteResult {
        let sampled = self.downscale(image);
        debug!(
            source_w = image.width(),
            source_h = image.height(),
            sampled_w = sampled.width(),
            sampled_h = sampled.height(),
            "downscaled image for sampling"
        );

        let pixels = sampled
            .pixels()
            .map(|p| PixelSample::new(p[0], p[1], p[2], p[3]));
        let buckets = accumulate_buckets(pixels);
        debug!(distinct_buckets = buckets.len(), "accumulated color buckets");

        if buckets.len() < self.min_distinct_colors {
            warn!(
                distinct_buckets = buckets.len(),
                required = self.min_distinct_colors,
                "too few distinct colors survived filtering; using fallback palette"
            );
            return PaletteResult::fallback_palette();
        }

        let mut ranked: Vec<(Rgb, u32)> = buckets.into_iter().collect();
        ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked.truncate(self.max_palette_size);

        PaletteResult {
            colors: ranked.into_iter().map(|(color, _)| color).collect(),
            fallback: false,
        }
    }

    /// Downscale to the sampling resolution
    ///
    /// Dimensions are floored by the downscale factor with a 1x1 lower
    /// bound, so tiny images still yield at least one sample. Nearest
    /// filtering keeps every sampled value an actual source pixel.
    fn downscale(&self, image: &RgbaImage) -> RgbaImage {
        let width = ((image.width() as f32 * self.downscale_factor) as u32).max(1);
        let height = ((image.height() as f32 * self.downscale_factor) as u32).max(1);

        if width == image.width() && height == image.height() {
            return image.clone();
        }
        imageops::resize(image, width, height, FilterType::Nearest)
    }
}
