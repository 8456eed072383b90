//! Error types for the synthesis core.

use thiserror::Error;

/// Result type for synthesis operations.
pub type SynthResult<T> = Result<T, SynthError>;

/// Errors that can occur during speech rendering.
///
/// `InvalidText` and `InvalidLanguage` are caller-correctable and are
/// detected before any synthesis work begins. `Synthesis` signals an
/// unexpected internal failure of the numeric pipeline; no partial output
/// accompanies it.
#[derive(Debug, Error)]
pub enum SynthError {
    /// Text is missing, empty, or exceeds the length limit.
    #[error("invalid text: {reason}")]
    InvalidText {
        /// Why the text was rejected.
        reason: String,
    },

    /// Unsupported language tag.
    #[error("invalid language: {tag:?} (supported: \"en\", \"zh\")")]
    InvalidLanguage {
        /// The rejected language tag.
        tag: String,
    },

    /// Internal synthesis error.
    #[error("synthesis error: {message}")]
    Synthesis {
        /// Error message.
        message: String,
    },
}

impl SynthError {
    /// Creates an invalid text error.
    pub fn invalid_text(reason: impl Into<String>) -> Self {
        Self::InvalidText {
            reason: reason.into(),
        }
    }

    /// Creates an invalid language error.
    pub fn invalid_language(tag: impl Into<String>) -> Self {
        Self::InvalidLanguage { tag: tag.into() }
    }

    /// Creates a synthesis error.
    pub fn synthesis(message: impl Into<String>) -> Self {
        Self::Synthesis {
            message: message.into(),
        }
    }

    /// Returns true if the error is caller-correctable (a 4xx-class
    /// condition at an HTTP boundary, as opposed to 5xx).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            SynthError::InvalidText { .. } | SynthError::InvalidLanguage { .. }
        )
    }
}
