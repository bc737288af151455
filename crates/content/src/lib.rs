//! Leaf content serializers for Tableau
//!
//! Each persisted content kind has a schema type that knows how to save its
//! raw fields from a scene item's backing source and load them back:
//!
//! | Schema | Source kind | Settings keys |
//! |--------|-------------|---------------|
//! | [`ImageContent`] | `image_source` | `file` |
//! | [`TextContent`] | `text_gdiplus` | `text`, `font`, `color` |
//! | [`WebcamContent`] | `dshow_input` | `video_device_id`, `resolution`, `res_type` |
//! | [`VideoContent`] | `ffmpeg_source` | `local_file`, `is_local_file`, `looping`, `hw_decode` |
//!
//! [`Content`] is the sum type over the four schemas, tagged by an explicit
//! `kind` field on the wire.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod assets;
mod content;
mod image;
mod schema;
mod text;
mod video;
mod webcam;

pub use content::Content;
pub use image::ImageContent;
pub use schema::{ContentSchema, LoadArgs, SaveArgs};
pub use text::{Font, TextContent};
pub use video::VideoContent;
pub use webcam::{CaptureResolution, WebcamContent};
