//! Constants and reference values for theming and analytics
//!
//! This module contains the compile-time parameters of the color
//! extraction pipeline and the contribution analytics windows.

/// Pixel sampling and filtering parameters
pub mod sampling {
    /// Downscale factor applied to both dimensions before sampling
    pub const DOWNSCALE_FACTOR: f32 = 0.1;

    /// Minimum alpha for a pixel to be considered opaque enough to sample
    pub const MIN_ALPHA: u8 = 128;

    /// Brightness below which a pixel is rejected as near-black (exclusive),
    /// in per-mille units
    pub const MIN_BRIGHTNESS_MILLI: u32 = 30_000;

    /// Brightness above which a pixel is rejected as near-white (exclusive),
    /// in per-mille units
    pub const MAX_BRIGHTNESS_MILLI: u32 = 240_000;

    /// ITU-R BT.601 luma weights in per-mille units
    ///
    /// Integer weights keep the exclusive band thresholds exact: a gray
    /// level of 30 computes to precisely 30_000, never a rounding hair
    /// above it.
    pub const LUMA_RED_MILLI: u32 = 299;
    pub const LUMA_GREEN_MILLI: u32 = 587;
    pub const LUMA_BLUE_MILLI: u32 = 114;
}

/// Palette construction parameters
pub mod palette {
    /// Channel quantization step; colors are bucketed per 10-unit cell
    pub const QUANT_STEP: u8 = 10;

    /// Maximum number of palette entries returned
    pub const MAX_PALETTE_SIZE: usize = 10;

    /// Minimum distinct buckets required before the fallback theme is used
    pub const MIN_DISTINCT_COLORS: usize = 3;
}

/// Theme derivation parameters
pub mod theming {
    /// Brightness scale applied to the primary color for the gradient start
    pub const GRADIENT_START_FACTOR: f32 = 0.3;

    /// Brightness scale applied to the secondary color for the gradient end
    pub const GRADIENT_END_FACTOR: f32 = 0.4;

    /// Fallback theme emitted when too few distinct colors survive filtering
    pub mod fallback {
        pub const PRIMARY: &str = "#a78bfa";
        pub const SECONDARY: &str = "#818cf8";
        pub const ACCENT: &str = "#c084fc";
        pub const BG_GRADIENT_START: &str = "#1e1b4b";
        pub const BG_GRADIENT_END: &str = "#312e81";

        /// Fallback palette entries matching the fallback primaries
        pub const PALETTE: [(u8, u8, u8); 3] =
            [(167, 139, 250), (129, 140, 248), (192, 132, 252)];
    }
}

/// Contribution analytics windows
pub mod analytics {
    /// Number of trailing entries summed by the rolling total
    pub const ROLLING_WINDOW_DAYS: usize = 365;
}

/// Named style variables written by theme application
pub mod style_vars {
    pub const PRIMARY: &str = "--primary-color";
    pub const SECONDARY: &str = "--secondary-color";
    pub const ACCENT: &str = "--accent-color";
    pub const BG_GRADIENT_START: &str = "--bg-gradient-start";
    pub const BG_GRADIENT_END: &str = "--bg-gradient-end";
}
