//! Serializer options

use serde::{Deserialize, Serialize};
use tableau_core::Resolution;

/// What to do with items or slots whose kind has no leaf serializer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownKindPolicy {
    /// Leave them out and log a warning
    #[default]
    Skip,
    /// Fail the pass with an unrecognized-kind error
    Reject,
}

/// Slot serializer options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotOptions {
    /// Resolution scale values are compared at across documents
    pub reference_resolution: Resolution,
    /// Handling of unrecognized kinds, on save and on load
    pub unknown_kinds: UnknownKindPolicy,
    /// Attach capture slots to an already-open capture device when one exists
    pub reuse_capture_devices: bool,
}

impl Default for SlotOptions {
    fn default() -> Self {
        SlotOptions {
            reference_resolution: Resolution::FULL_HD,
            unknown_kinds: UnknownKindPolicy::Skip,
            reuse_capture_devices: true,
        }
    }
}

impl SlotOptions {
    /// Strict options - fail on any unrecognized kind
    pub fn strict() -> Self {
        SlotOptions {
            unknown_kinds: UnknownKindPolicy::Reject,
            ..Default::default()
        }
    }

    /// Lenient options - drop unrecognized kinds (the default)
    pub fn lenient() -> Self {
        SlotOptions::default()
    }
}
