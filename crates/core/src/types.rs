//! Core types for scene persistence
//!
//! This module defines the fundamental types used throughout the system:
//! - [`SourceKind`]: which of the four persisted content kinds a source is
//! - [`SourceId`]: unique identifier of a backing source
//! - [`SourceHandle`]: an already-open source as reported by a registry
//! - [`Resolution`]: a non-zero render resolution
//! - [`Transform`]: absolute position and scale of a scene item

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Settings object of a backing source.
///
/// Leaf content serializers read and write their raw fields here.
pub type Settings = serde_json::Map<String, serde_json::Value>;

/// The four content kinds the persistence layer understands
///
/// Any other raw kind reported by a scene item is unrecognized and is
/// handled by the serializer's unknown-kind policy.
///
/// ## Invariant
///
/// This enum MUST have exactly 4 variants, one per leaf content serializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Still image loaded from a file
    Image,
    /// Text overlay
    Text,
    /// Hardware capture device (webcam-like)
    Webcam,
    /// File or stream video
    Video,
}

impl SourceKind {
    /// All source kinds (for iteration)
    pub const ALL: [SourceKind; 4] = [
        SourceKind::Image,
        SourceKind::Text,
        SourceKind::Webcam,
        SourceKind::Video,
    ];

    /// Raw kind identifier as reported by the scene container
    pub const fn id(&self) -> &'static str {
        match self {
            SourceKind::Image => "image_source",
            SourceKind::Text => "text_gdiplus",
            SourceKind::Webcam => "dshow_input",
            SourceKind::Video => "ffmpeg_source",
        }
    }

    /// Parse from a raw kind identifier
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "image_source" => Some(SourceKind::Image),
            "text_gdiplus" => Some(SourceKind::Text),
            "dshow_input" => Some(SourceKind::Webcam),
            "ffmpeg_source" => Some(SourceKind::Video),
            _ => None,
        }
    }

    /// Human-readable display name
    pub const fn name(&self) -> &'static str {
        match self {
            SourceKind::Image => "Image",
            SourceKind::Text => "Text",
            SourceKind::Webcam => "Webcam",
            SourceKind::Video => "Video",
        }
    }

    /// Whether sources of this kind bind a hardware device
    ///
    /// Hardware-backed sources are reused on load instead of duplicated.
    pub const fn is_hardware_capture(&self) -> bool {
        matches!(self, SourceKind::Webcam)
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Unique identifier of a backing content source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceId(Uuid);

impl SourceId {
    /// Create a new random SourceId using UUID v4
    pub fn new() -> Self {
        SourceId(Uuid::new_v4())
    }

    /// Create SourceId from raw bytes
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        SourceId(Uuid::from_bytes(bytes))
    }

    /// Get raw bytes representation
    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }
}

impl Default for SourceId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An already-open source, as reported by a [`SourceRegistry`](crate::SourceRegistry)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceHandle {
    /// Source identity
    pub id: SourceId,
    /// Source name
    pub name: String,
    /// Source kind
    pub kind: SourceKind,
}

impl SourceHandle {
    /// Create a handle for a source
    pub fn new(id: SourceId, name: impl Into<String>, kind: SourceKind) -> Self {
        SourceHandle {
            id,
            name: name.into(),
            kind,
        }
    }
}

/// Render resolution in pixels
///
/// Both dimensions are non-zero, so dividing by them is always defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawResolution")]
pub struct Resolution {
    width: u32,
    height: u32,
}

#[derive(Deserialize)]
struct RawResolution {
    width: u32,
    height: u32,
}

impl TryFrom<RawResolution> for Resolution {
    type Error = Error;

    fn try_from(raw: RawResolution) -> Result<Self> {
        Resolution::new(raw.width, raw.height)
    }
}

impl Resolution {
    /// 1920×1080, the reference resolution scale values are compared at
    pub const FULL_HD: Resolution = Resolution {
        width: 1920,
        height: 1080,
    };

    /// Create a resolution, rejecting zero dimensions
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidResolution { width, height });
        }
        Ok(Resolution { width, height })
    }

    /// Width in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Express an absolute transform as fractions of this resolution
    pub fn normalize(&self, transform: Transform) -> Transform {
        let (w, h) = (f64::from(self.width), f64::from(self.height));
        Transform {
            x: transform.x / w,
            y: transform.y / h,
            scale_x: transform.scale_x / w,
            scale_y: transform.scale_y / h,
        }
    }

    /// Turn fractions of this resolution back into an absolute transform
    pub fn denormalize(&self, transform: Transform) -> Transform {
        let (w, h) = (f64::from(self.width), f64::from(self.height));
        Transform {
            x: transform.x * w,
            y: transform.y * h,
            scale_x: transform.scale_x * w,
            scale_y: transform.scale_y * h,
        }
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Resolution::FULL_HD
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Position and scale of a scene item
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Transform {
    /// Horizontal position
    pub x: f64,
    /// Vertical position
    pub y: f64,
    /// Horizontal scale
    pub scale_x: f64,
    /// Vertical scale
    pub scale_y: f64,
}

impl Transform {
    /// Create a transform
    pub const fn new(x: f64, y: f64, scale_x: f64, scale_y: f64) -> Self {
        Transform {
            x,
            y,
            scale_x,
            scale_y,
        }
    }

    /// Whether every component is a finite number
    ///
    /// NaN and infinities have no JSON representation.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.scale_x.is_finite() && self.scale_y.is_finite()
    }
}

// ============================================================================
// Tests
// ============================================================================
