//! Unified error types for Tableau.
//!
//! Collaborator failures (scene container, source registry, leaf content
//! serializers) are carried unmodified to the caller. Unrecognized kinds only
//! become errors when the caller opts into rejecting them.

use thiserror::Error;

/// All Tableau errors.
#[derive(Debug, Error)]
pub enum Error {
    /// The scene container failed (create, add, enumerate)
    #[error("scene error: {0}")]
    Scene(String),

    /// The source registry failed
    #[error("source registry error: {0}")]
    Registry(String),

    /// A leaf content serializer failed
    #[error("{kind} content error: {message}")]
    Content {
        /// Content kind the failing serializer handles
        kind: &'static str,
        /// Failure description
        message: String,
    },

    /// An item's raw kind has no leaf serializer
    #[error("unrecognized source kind: {0}")]
    UnrecognizedKind(String),

    /// A slot's content matches none of the known kinds
    #[error("unrecognized content in slot {name:?}")]
    UnrecognizedContent {
        /// Name of the slot
        name: String,
    },

    /// Render resolution with a zero dimension
    #[error("invalid resolution {width}x{height}")]
    InvalidResolution {
        /// Width in pixels
        width: u32,
        /// Height in pixels
        height: u32,
    },

    /// An item's position or scale is NaN or infinite
    #[error("non-finite transform on item {name:?}")]
    NonFiniteTransform {
        /// Name of the item
        name: String,
    },

    /// A stored file name points outside the assets directory
    #[error("asset path escapes the assets directory: {0}")]
    InvalidAssetPath(String),

    /// Collection written by a newer schema than this build understands
    #[error("unsupported schema version {found} (newest supported: {supported})")]
    UnsupportedSchemaVersion {
        /// Version found in the document
        found: u32,
        /// Newest version this build reads
        supported: u32,
    },

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type for Tableau operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build a content error for the given kind
    pub fn content(kind: &'static str, message: impl Into<String>) -> Self {
        Error::Content {
            kind,
            message: message.into(),
        }
    }

    /// Check if this error came from an external collaborator.
    ///
    /// These errors abort a save or load pass.
    pub fn is_collaborator_failure(&self) -> bool {
        matches!(
            self,
            Error::Scene(_) | Error::Registry(_) | Error::Content { .. }
        )
    }

    /// Check if this error reports an unrecognized kind or content.
    pub fn is_unrecognized(&self) -> bool {
        matches!(
            self,
            Error::UnrecognizedKind(_) | Error::UnrecognizedContent { .. }
        )
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
