//! Error types for the tabcanvas library

use thiserror::Error;

/// Result type alias for tabcanvas operations
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Error taxonomy for the theming and analytics pipelines
///
/// Every variant is terminal for the invocation that raised it; nothing
/// is retried internally. Note that an image yielding too few distinct
/// colors is NOT an error: the palette extractor degrades to a fixed
/// fallback theme instead.
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Image could not be fetched, opened, or decoded
    #[error("Failed to load image: {message}")]
    ImageLoadError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Decoded image exposes no addressable pixel buffer
    #[error("Pixel buffer unavailable: {reason}")]
    RenderContextUnavailable { reason: String },

    /// Contribution sequence was empty
    #[error("No contribution data available")]
    EmptyContributionData,

    /// A contribution record failed boundary validation
    #[error("Invalid contribution record: {message}")]
    InvalidContributionRecord { message: String },

    /// Reference date predates the first recorded contribution day
    #[error("Reference date {reference} is before the first recorded day {first}")]
    ReferenceDateOutOfRange { reference: String, first: String },

    /// Generic processing error (config I/O, serialization)
    #[error("Processing error: {message}")]
    ProcessingError { message: String },
}

impl DashboardError {
    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoadError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an image load error without an underlying source
    pub fn image_load_msg(message: impl Into<String>) -> Self {
        Self::ImageLoadError {
            message: message.into(),
            source: None,
        }
    }

    /// Create a render context error
    pub fn render_context(reason: impl Into<String>) -> Self {
        Self::RenderContextUnavailable {
            reason: reason.into(),
        }
    }

    /// Create an invalid contribution record error
    pub fn invalid_record(message: impl Into<String>) -> Self {
        Self::InvalidContributionRecord {
            message: message.into(),
        }
    }

    /// Create a generic processing error
    pub fn processing(message: impl Into<String>) -> Self {
        Self::ProcessingError {
            message: message.into(),
        }
    }

    /// Check if this error indicates a recoverable condition
    ///
    /// Recoverable here means the caller can fall back to a default theme
    /// or skip the widget and retry later with fresh inputs.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            DashboardError::ImageLoadError { .. }
                | DashboardError::EmptyContributionData
                | DashboardError::ReferenceDateOutOfRange { .. }
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            DashboardError::ImageLoadError { .. } => {
                "Could not load the background image. Check the file or URL and try again."
                    .to_string()
            }
            DashboardError::RenderContextUnavailable { .. } => {
                "The image could not be read for color extraction. A default theme will be used."
                    .to_string()
            }
            DashboardError::EmptyContributionData => {
                "No contribution history is available yet.".to_string()
            }
            DashboardError::InvalidContributionRecord { .. } => {
                "The contribution data was malformed and could not be displayed.".to_string()
            }
            DashboardError::ReferenceDateOutOfRange { .. } => {
                "No contribution data exists for the requested date.".to_string()
            }
            _ => "The dashboard widget failed to update. Please try again.".to_string(),
        }
    }
}
