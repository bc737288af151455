//! Convenient imports for Tableau.
//!
//! ```ignore
//! use tableau::prelude::*;
//! ```

// Serializer and contexts
pub use tableau_slots::{LoadContext, SaveContext, SlotOptions, SlotSerializer, UnknownKindPolicy};

// Persisted shapes
pub use tableau_slots::{Slot, SlotCollection};
pub use tableau_content::Content;

// Error handling
pub use tableau_core::{Error, Result};

// Collaborator traits and core types
pub use tableau_core::{
    RenderResolution, Resolution, SceneContainer, SceneItem, SourceKind, SourceRegistry, Transform,
};

// Re-export serde_json for convenience
pub use serde_json::json;
