//! Configuration structures for the tabcanvas pipelines.
//!
//! This module defines the tunable parameters for palette extraction
//! and contribution analytics, organized into logical groups.
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed
//! programmatically:
//!
//! ```no_run
//! use tabcanvas::DashboardConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = DashboardConfig::from_json_file(Path::new("config.json"))?;
//!
//! // Or use defaults
//! let config = DashboardConfig::default();
//! # Ok::<(), tabcanvas::DashboardError>(())
//! ```

use crate::constants::{analytics, palette, sampling};
use crate::error::{DashboardError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete configuration for the theming and analytics pipelines.
///
/// Can be serialized to/from JSON for reproducible setups.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Palette extraction configuration
    #[serde(default)]
    pub extraction: ExtractionConfig,

    /// Contribution analytics configuration
    #[serde(default)]
    pub analytics: AnalyticsConfig,
}

/// Palette extraction parameters.
///
/// Controls the sampling resolution and palette sizing. The pixel
/// filter thresholds (alpha, brightness band) are pipeline invariants
/// and are not configurable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Downscale factor applied to both dimensions before sampling (0.0-1.0)
    pub downscale_factor: f32,

    /// Maximum number of palette entries returned
    pub max_palette_size: usize,

    /// Minimum distinct buckets before the fallback theme is used
    pub min_distinct_colors: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            downscale_factor: sampling::DOWNSCALE_FACTOR,
            max_palette_size: palette::MAX_PALETTE_SIZE,
            min_distinct_colors: palette::MIN_DISTINCT_COLORS,
        }
    }
}

/// Contribution analytics parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Number of trailing entries summed by the rolling total
    pub rolling_window_days: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            rolling_window_days: analytics::ROLLING_WINDOW_DAYS,
        }
    }
}

impl DashboardConfig {
    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DashboardError::processing(format!("Failed to read config {}: {}", path.display(), e))
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            DashboardError::processing(format!("Failed to parse config {}: {}", path.display(), e))
        })?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| DashboardError::processing(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, json).map_err(|e| {
            DashboardError::processing(format!("Failed to write config {}: {}", path.display(), e))
        })?;
        Ok(())
    }
}
