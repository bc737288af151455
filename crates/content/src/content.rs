//! The content sum type
//!
//! On the wire the variant is named by an explicit `kind` field:
//!
//! ```json
//! {"kind": "image", "filename": "logo.png"}
//! ```
//!
//! A `kind` this build does not know decodes to [`Content::Unrecognized`]
//! instead of failing the whole document.

use serde::{Deserialize, Serialize};

use tableau_core::{Result, SceneItem, SourceKind};

use crate::image::ImageContent;
use crate::schema::{ContentSchema, LoadArgs, SaveArgs};
use crate::text::TextContent;
use crate::video::VideoContent;
use crate::webcam::WebcamContent;

/// Content of one slot: exactly one of the four persisted kinds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Content {
    /// Still image
    Image(ImageContent),
    /// Text overlay
    Text(TextContent),
    /// Hardware capture device
    Webcam(WebcamContent),
    /// File video
    Video(VideoContent),
    /// Any `kind` not listed above
    #[serde(other)]
    Unrecognized,
}

impl Content {
    /// Source kind of this content, `None` when unrecognized
    pub fn kind(&self) -> Option<SourceKind> {
        match self {
            Content::Image(_) => Some(SourceKind::Image),
            Content::Text(_) => Some(SourceKind::Text),
            Content::Webcam(_) => Some(SourceKind::Webcam),
            Content::Video(_) => Some(SourceKind::Video),
            Content::Unrecognized => None,
        }
    }

    /// Save an item's content with the leaf serializer for `kind`
    pub fn save<I: SceneItem + ?Sized>(kind: SourceKind, args: SaveArgs<'_, I>) -> Result<Self> {
        match kind {
            SourceKind::Image => ImageContent::save(args).map(Content::Image),
            SourceKind::Text => TextContent::save(args).map(Content::Text),
            SourceKind::Webcam => WebcamContent::save(args).map(Content::Webcam),
            SourceKind::Video => VideoContent::save(args).map(Content::Video),
        }
    }

    /// Apply this content with the matching leaf serializer
    ///
    /// Unrecognized content is a no-op.
    pub fn load<I: SceneItem + ?Sized>(&self, args: LoadArgs<'_, I>) -> Result<()> {
        match self {
            Content::Image(content) => content.load(args),
            Content::Text(content) => content.load(args),
            Content::Webcam(content) => content.load(args),
            Content::Video(content) => content.load(args),
            Content::Unrecognized => Ok(()),
        }
    }
}

impl From<ImageContent> for Content {
    fn from(content: ImageContent) -> Self {
        Content::Image(content)
    }
}

impl From<TextContent> for Content {
    fn from(content: TextContent) -> Self {
        Content::Text(content)
    }
}

impl From<WebcamContent> for Content {
    fn from(content: WebcamContent) -> Self {
        Content::Webcam(content)
    }
}

impl From<VideoContent> for Content {
    fn from(content: VideoContent) -> Self {
        Content::Video(content)
    }
}
