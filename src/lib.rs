//! # tabcanvas
//!
//! A Rust crate for the two data pipelines behind a customizable
//! new-tab dashboard:
//!
//! - Deriving a display theme from an image by dominant-color
//!   extraction (quantized bucket frequency ranking over sampled
//!   pixels)
//! - Contribution analytics: calendar-year totals, rolling 365-day
//!   totals, and the current activity streak
//!
//! Both pipelines are stateless; theme application is a pure function
//! producing a new style snapshot.
//!
//! ## Example
//!
//! ```rust,no_run
//! use tabcanvas::{extract_theme, StyleSnapshot};
//! use std::path::Path;
//!
//! let result = extract_theme(Path::new("wallpaper.jpg"))?;
//! let snapshot = StyleSnapshot::new().apply_theme(&result.colors);
//! println!("primary: {}", result.colors.primary);
//! # Ok::<(), tabcanvas::DashboardError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod analytics;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod image_loader;
pub mod style;

pub use analytics::{
    compute_streak, parse_contributions, rolling_total, total_for_year, ContributionDay,
    RawContributionDay,
};
pub use color::{derive_theme, PaletteExtractor, PaletteResult, Rgb, ThemeColors};
pub use config::{AnalyticsConfig, DashboardConfig, ExtractionConfig};
pub use error::{DashboardError, Result};
pub use style::StyleSnapshot;

/// Complete theme extraction result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeResult {
    /// The five derived theme colors as hex strings
    pub colors: ThemeColors,
    /// Ranked palette entries the theme was derived from
    pub palette: Vec<Rgb>,
    /// Whether the degrade policy substituted the fallback theme
    pub degraded: bool,
}

/// Extract a dashboard theme from an image file
///
/// This is the main entry point for the color pipeline. It loads the
/// image, samples its pixels, and derives the theme colors.
///
/// # Arguments
///
/// * `image_path` - Path to the image file
///
/// # Errors
///
/// Returns `DashboardError` if:
/// - Image cannot be loaded or is an invalid format
/// - The decoded image exposes no addressable pixel buffer
///
/// Too few distinct colors is not an error; the result carries the
/// fallback theme with `degraded` set.
pub fn extract_theme(image_path: &Path) -> Result<ThemeResult> {
    let image = image_loader::load_image(image_path)?;
    Ok(extract_theme_from_image(&image))
}

/// Extract a dashboard theme from an image fetched by URL
///
/// The single awaited operation is the fetch-and-decode; it resolves or
/// rejects exactly once.
///
/// # Errors
///
/// Same contract as [`extract_theme`], with network failures reported
/// as `ImageLoadError`.
pub async fn extract_theme_from_url(url: &str) -> Result<ThemeResult> {
    let image = image_loader::fetch_image(url).await?;
    Ok(extract_theme_from_image(&image))
}

/// Extract a dashboard theme from an already-decoded pixel buffer
pub fn extract_theme_from_image(image: &image::RgbaImage) -> ThemeResult {
    let palette = PaletteExtractor::new().extract_palette(image);
    let colors = derive_theme(&palette);
    ThemeResult {
        degraded: palette.is_fallback(),
        palette: palette.colors().to_vec(),
        colors,
    }
}
