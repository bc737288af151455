//! Slot serialization for Tableau
//!
//! Converts an ordered scene into a [`SlotCollection`] and back:
//!
//! - **Save** walks the scene back-to-front, normalizes each item's position
//!   and scale by the current render resolution, and asks the leaf serializer
//!   for the item's kind to capture its content.
//! - **Load** walks the slots in stored order, creates one item per slot (or
//!   reuses an already-open capture device), scales the stored fractions by
//!   the render resolution active at load time, and lets the leaf serializer
//!   configure the item.
//!
//! ## Usage
//!
//! ```ignore
//! let serializer = SlotSerializer::default();
//!
//! let save_ctx = SaveContext::new(assets, &resolution);
//! let (collection, report) = serializer.save_scene(&scene, &save_ctx)?;
//! let json = collection.to_json_pretty()?;
//!
//! let collection = SlotCollection::from_json(&json)?;
//! let mut load_ctx = LoadContext::new(assets, &mut fresh_scene, &sources, &resolution);
//! serializer.load_scene(&collection, &mut load_ctx)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod context;
mod options;
mod report;
mod serializer;
mod slot;

pub use context::{LoadContext, SaveContext};
pub use options::{SlotOptions, UnknownKindPolicy};
pub use report::{LoadOutcome, LoadReport, SaveReport};
pub use serializer::SlotSerializer;
pub use slot::{Slot, SlotCollection};
