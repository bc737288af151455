//! # Tableau
//!
//! Resolution-independent persistence for ordered scenes of visual items.
//!
//! A scene is an ordered stack of items, each placed at an absolute position
//! and scale and backed by a content source (image, text, webcam, video).
//! Tableau turns such a scene into a versioned [`SlotCollection`] whose
//! coordinates are fractions of the render resolution, and rebuilds a scene
//! from it.
//!
//! ## Quick Start
//!
//! ```ignore
//! use tableau::prelude::*;
//!
//! let serializer = SlotSerializer::default();
//! let resolution = Resolution::new(1920, 1080)?;
//!
//! // Save
//! let ctx = SaveContext::new(assets_dir, &resolution);
//! let (collection, _report) = serializer.save_scene(&scene, &ctx)?;
//! let json = collection.to_json_pretty()?;
//!
//! // Load
//! let collection = SlotCollection::from_json(&json)?;
//! let mut ctx = LoadContext::new(assets_dir, &mut new_scene, &open_sources, &resolution);
//! serializer.load_scene(&collection, &mut ctx)?;
//! ```
//!
//! ## Crates
//!
//! - `tableau-core` - types, errors, collaborator traits, in-memory collaborators
//! - `tableau-content` - leaf content serializers
//! - `tableau-slots` - slot types and the slot serializer

#![warn(missing_docs)]

pub mod prelude;

pub use tableau_core::memory;

// Re-export main entry points
pub use tableau_core::{Error, Result};
pub use tableau_slots::{
    LoadContext, LoadOutcome, LoadReport, SaveContext, SaveReport, Slot, SlotCollection,
    SlotOptions, SlotSerializer, UnknownKindPolicy,
};

// Re-export content types
pub use tableau_content::{
    CaptureResolution, Content, Font, ImageContent, TextContent, VideoContent, WebcamContent,
};

// Re-export core types
pub use tableau_core::{
    RenderResolution, Resolution, SceneContainer, SceneItem, Settings, SourceHandle, SourceId,
    SourceKind, SourceRegistry, Transform,
};
