//! Collaborator traits
//!
//! The persistence layer never owns a scene. It reads and mutates one through
//! these traits:
//!
//! | Trait | Role |
//! |-------|------|
//! | [`SceneItem`] | One positioned, scaled reference to a backing source |
//! | [`SceneContainer`] | Ordered item collection with create/add |
//! | [`SourceRegistry`] | Lookup of already-open sources |
//! | [`RenderResolution`] | Current render resolution |
//!
//! Implementations report their own failures through [`Error::Scene`] and
//! [`Error::Registry`](crate::Error::Registry).
//!
//! [`Error::Scene`]: crate::Error::Scene

use crate::error::Result;
use crate::types::{Resolution, Settings, SourceHandle, SourceId, SourceKind, Transform};

/// A positioned, scaled reference to a content source within a scene
pub trait SceneItem {
    /// Item name
    fn name(&self) -> &str;

    /// Raw kind identifier of the backing source (e.g. `image_source`)
    ///
    /// Kinds outside [`SourceKind`] are legal and simply not persisted.
    fn kind_id(&self) -> &str;

    /// Identity of the backing source
    fn source_id(&self) -> SourceId;

    /// Absolute position and scale
    fn transform(&self) -> Transform;

    /// Set absolute position and scale
    fn set_transform(&mut self, transform: Transform);

    /// Settings of the backing source
    fn settings(&self) -> &Settings;

    /// Merge `patch` into the backing source's settings
    ///
    /// Keys present in `patch` overwrite existing keys; other keys are kept.
    fn update_settings(&mut self, patch: Settings);
}

/// Ordered collection of scene items
///
/// The native order is front-to-back: index 0 is the topmost item. New items
/// are placed on top, so adding `C`, `B`, `A` in that order yields `[A, B, C]`.
pub trait SceneContainer {
    /// Item type held by this container
    type Item: SceneItem;

    /// Items in native (front-to-back) order
    fn ordered_items(&self) -> Result<Vec<&Self::Item>>;

    /// Create a new source of `kind` named `name` and add an item for it
    fn create_and_add_item(&mut self, name: &str, kind: SourceKind) -> Result<&mut Self::Item>;

    /// Add an item backed by an already-open source
    fn add_existing_source(&mut self, source: &SourceHandle) -> Result<&mut Self::Item>;
}

/// Lookup of sources that are already open
pub trait SourceRegistry {
    /// First open source of `kind`, if any
    fn find_first_by_kind(&self, kind: SourceKind) -> Result<Option<SourceHandle>>;
}

/// Provider of the current render resolution
pub trait RenderResolution {
    /// Resolution active right now
    fn render_resolution(&self) -> Resolution;
}

impl RenderResolution for Resolution {
    fn render_resolution(&self) -> Resolution {
        *self
    }
}
