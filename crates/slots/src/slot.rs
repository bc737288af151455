//! Persisted slot types
//!
//! ```json
//! {
//!   "schemaVersion": 1,
//!   "slots": [
//!     {"name": "logo", "x": 0.052, "y": 0.046, "scaleX": 0.104, "scaleY": 0.185,
//!      "content": {"kind": "image", "filename": "logo.png"}}
//!   ]
//! }
//! ```
//!
//! Position and scale are fractions of the render resolution active when the
//! slot was saved.

use serde::{Deserialize, Serialize};

use tableau_content::Content;
use tableau_core::{Error, Result, Transform};

/// Serialized form of one scene item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    /// Item name
    pub name: String,
    /// Horizontal position, fraction of render width
    pub x: f64,
    /// Vertical position, fraction of render height
    pub y: f64,
    /// Horizontal scale, fraction of render width
    pub scale_x: f64,
    /// Vertical scale, fraction of render height
    pub scale_y: f64,
    /// Kind-specific content
    pub content: Content,
}

impl Slot {
    /// Build a slot from a normalized transform
    pub fn new(name: impl Into<String>, normalized: Transform, content: Content) -> Self {
        Slot {
            name: name.into(),
            x: normalized.x,
            y: normalized.y,
            scale_x: normalized.scale_x,
            scale_y: normalized.scale_y,
            content,
        }
    }

    /// Stored position and scale as a normalized transform
    pub fn normalized_transform(&self) -> Transform {
        Transform::new(self.x, self.y, self.scale_x, self.scale_y)
    }
}

/// Serialized form of a scene: slots in stored order plus a schema version
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotCollection {
    /// Schema the slots were written with
    pub schema_version: u32,
    /// Slots, back-to-front
    pub slots: Vec<Slot>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Header {
    schema_version: u32,
}

impl Default for SlotCollection {
    fn default() -> Self {
        SlotCollection::new(Vec::new())
    }
}

impl SlotCollection {
    /// Schema version written by this build
    pub const SCHEMA_VERSION: u32 = 1;

    /// Create a collection at the current schema version
    pub fn new(slots: Vec<Slot>) -> Self {
        SlotCollection {
            schema_version: Self::SCHEMA_VERSION,
            slots,
        }
    }

    /// Number of slots
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether there are no slots
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterate slots in stored order
    pub fn iter(&self) -> std::slice::Iter<'_, Slot> {
        self.slots.iter()
    }

    /// Fail if the collection was written by a newer schema
    ///
    /// Older versions are accepted as-is; upgrading them is the migration
    /// layer's job.
    pub fn check_version(&self) -> Result<()> {
        check_version(self.schema_version)
    }

    /// Encode as compact JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Encode as indented JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode from JSON, rejecting newer schema versions
    ///
    /// The version is checked before the slots are decoded, so a newer
    /// document reports [`Error::UnsupportedSchemaVersion`] even when its
    /// slot shape no longer parses.
    pub fn from_json(json: &str) -> Result<Self> {
        let header: Header = serde_json::from_str(json)?;
        check_version(header.schema_version)?;
        Ok(serde_json::from_str(json)?)
    }
}

impl<'a> IntoIterator for &'a SlotCollection {
    type Item = &'a Slot;
    type IntoIter = std::slice::Iter<'a, Slot>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}

fn check_version(found: u32) -> Result<()> {
    if found > SlotCollection::SCHEMA_VERSION {
        return Err(Error::UnsupportedSchemaVersion {
            found,
            supported: SlotCollection::SCHEMA_VERSION,
        });
    }
    Ok(())
}
