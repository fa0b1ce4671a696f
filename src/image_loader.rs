//! Unified image loading for the color extraction pipeline
//!
//! This module provides the entry points for turning an image source
//! (file path, in-memory bytes, or URL) into an addressable RGBA pixel
//! buffer for sampling.
//!
//! ## Supported Formats
//!
//! Via the `image` crate: JPEG, PNG, GIF, WebP, TIFF, BMP, ICO, TGA,
//! QOI, and the other formats the crate decodes.
//!
//! ## Design
//!
//! All sources converge on RGBA8: the sampling pipeline addresses raw
//! byte channels including alpha, so the decode result is normalized
//! once here. URL loading is the pipeline's single suspension point; it
//! resolves or rejects exactly once and carries no cancellation beyond
//! dropping the future.

use crate::error::{DashboardError, Result};
use image::{DynamicImage, ImageReader, RgbaImage};
use std::io::Cursor;
use std::path::Path;
use tracing::debug;

/// Supported image formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Gif,
    WebP,
    Tiff,
    Bmp,
    Ico,
    Tga,
    Qoi,
}

impl ImageFormat {
    /// Detect format from file extension
    pub fn from_extension(path: &Path) -> Option<ImageFormat> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "png" => Some(ImageFormat::Png),
            "gif" => Some(ImageFormat::Gif),
            "webp" => Some(ImageFormat::WebP),
            "tiff" | "tif" => Some(ImageFormat::Tiff),
            "bmp" => Some(ImageFormat::Bmp),
            "ico" => Some(ImageFormat::Ico),
            "tga" => Some(ImageFormat::Tga),
            "qoi" => Some(ImageFormat::Qoi),
            _ => None,
        }
    }
}

/// Get list of all supported file extensions
pub fn supported_extensions() -> &'static [&'static str] {
    &[
        "jpg", "jpeg", "png", "gif", "webp", "tiff", "tif", "bmp", "ico", "tga", "qoi",
    ]
}

/// Check if a file extension is supported
pub fn is_supported_extension(ext: &str) -> bool {
    let ext_lower = ext.to_lowercase();
    supported_extensions().contains(&ext_lower.as_str())
}

/// Load an image from disk into an RGBA pixel buffer
///
/// # Errors
///
/// Returns `ImageLoadError` if the file cannot be opened or decoded,
/// and `RenderContextUnavailable` if the decoded buffer has no
/// addressable pixels.
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    let reader = ImageReader::open(path).map_err(|e| {
        DashboardError::image_load(format!("Failed to open image file: {}", path.display()), e)
    })?;

    let img = reader.with_guessed_format().map_err(|e| {
        DashboardError::image_load(format!("Failed to probe image format: {}", path.display()), e)
    })?;

    let decoded: DynamicImage = img.decode().map_err(|e| {
        DashboardError::image_load(format!("Failed to decode image: {}", path.display()), e)
    })?;

    into_pixel_buffer(decoded)
}

/// Load an image from an in-memory byte source
///
/// # Errors
///
/// Same contract as [`load_image`].
pub fn load_image_from_bytes(bytes: &[u8]) -> Result<RgbaImage> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DashboardError::image_load("Failed to probe image format", e))?;

    let decoded = reader
        .decode()
        .map_err(|e| DashboardError::image_load("Failed to decode image bytes", e))?;

    into_pixel_buffer(decoded)
}

/// Fetch an image over HTTP and decode it
///
/// This is the extractor's one suspension point: the future resolves or
/// rejects exactly once. There is no retry and no abort; a caller
/// wanting cancellation discards the pending future and issues a fresh
/// call.
///
/// # Errors
///
/// Network failures, non-success HTTP statuses, and decode failures are
/// all `ImageLoadError`.
pub async fn fetch_image(url: &str) -> Result<RgbaImage> {
    debug!(url, "fetching image");
    let response = reqwest::get(url)
        .await
        .map_err(|e| DashboardError::image_load(format!("Request failed: {}", url), e))?;

    let response = response.error_for_status().map_err(|e| {
        DashboardError::image_load(format!("Request returned error status: {}", url), e)
    })?;

    let bytes = response
        .bytes()
        .await
        .map_err(|e| DashboardError::image_load(format!("Failed to read body: {}", url), e))?;

    load_image_from_bytes(&bytes)
}

/// Normalize a decoded image to the RGBA sampling buffer
fn into_pixel_buffer(decoded: DynamicImage) -> Result<RgbaImage> {
    let buffer = decoded.into_rgba8();
    if buffer.width() == 0 || buffer.height() == 0 {
        return Err(DashboardError::render_context(
            "decoded image has a zero dimension",
        ));
    }
    debug!(
        width = buffer.width(),
        height = buffer.height(),
        "decoded image into pixel buffer"
    );
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection() {
        assert_eq!(
            ImageFormat::from_extension(Path::new("wallpaper.jpg")),
            Some(ImageFormat::Jpeg)
        );
        assert_eq!(
            ImageFormat::from_extension(Path::new("wallpaper.JPEG")),
            Some(ImageFormat::Jpeg)
        );
        assert_eq!(
            ImageFormat::from_extension(Path::new("wallpaper.png")),
            Some(ImageFormat::Png)
        );
        assert_eq!(
            ImageFormat::from_extension(Path::new("wallpaper.webp")),
            Some(ImageFormat::WebP)
        );
        assert_eq!(ImageFormat::from_extension(Path::new("wallpaper.xyz")), None);
        assert_eq!(ImageFormat::from_extension(Path::new("noextension")), None);
    }

    #[test]
    fn test_supported_extensions() {
        assert!(is_supported_extension("jpg"));
        assert!(is_supported_extension("JPEG"));
        assert!(is_supported_extension("png"));
        assert!(!is_supported_extension("heic"));
        assert!(!is_supported_extension("doc"));
    }

    #[test]
    fn test_load_missing_file_is_image_load_error() {
        let result = load_image(Path::new("nonexistent_wallpaper.png"));
        assert!(matches!(
            result,
            Err(DashboardError::ImageLoadError { .. })
        ));
    }

    #[test]
    fn test_load_invalid_bytes_is_image_load_error() {
        let result = load_image_from_bytes(b"definitely not an image");
        assert!(matches!(
            result,
            Err(DashboardError::ImageLoadError { .. })
        ));
    }

    #[test]
    fn test_load_valid_bytes_roundtrip() {
        // Encode a small PNG in memory, then load it back.
        let source = image::RgbaImage::from_pixel(4, 4, image::Rgba([10, 20, 30, 255]));
        let mut bytes = Vec::new();
        source
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();

        let loaded = load_image_from_bytes(&bytes).unwrap();
        assert_eq!(loaded.dimensions(), (4, 4));
        assert_eq!(loaded.get_pixel(0, 0).0, [10, 20, 30, 255]);
    }
}
