//! Slot serializer
//!
//! ## Ordering
//!
//! Scene containers list items front-to-back and place newly added items on
//! top. A save pass therefore writes slots back-to-front (the reverse of the
//! native order), and a load pass adds them in stored order. The last slot
//! loaded ends up on top, which restores the original stacking.
//!
//! ## Normalization
//!
//! Stored positions and scales are fractions of the render resolution at save
//! time and are multiplied by the render resolution at load time. Layouts are
//! proportional across resolutions, not pixel-identical. Callers comparing
//! scale values across documents use [`SlotSerializer::normalized_scale`] and
//! [`SlotSerializer::denormalized_scale`].
//!
//! ## Capture devices
//!
//! A capture slot attaches to the first already-open capture source when one
//! exists, instead of binding the device a second time. The webcam leaf is
//! told whether it attached (`existing = true`) so it leaves the device's
//! configuration alone.

use std::time::Instant;

use tracing::{debug, info, warn};

use tableau_content::{Content, LoadArgs, SaveArgs};
use tableau_core::{
    Error, Resolution, Result, SceneContainer, SceneItem, SourceKind, SourceRegistry,
};

use crate::context::{LoadContext, SaveContext};
use crate::options::{SlotOptions, UnknownKindPolicy};
use crate::report::{LoadOutcome, LoadReport, SaveReport};
use crate::slot::{Slot, SlotCollection};

/// Converts scene items to slots and slots back to scene items
#[derive(Debug, Clone, Default)]
pub struct SlotSerializer {
    options: SlotOptions,
}

impl SlotSerializer {
    /// Create a serializer with the given options
    pub fn new(options: SlotOptions) -> Self {
        SlotSerializer { options }
    }

    /// Options in effect
    pub fn options(&self) -> &SlotOptions {
        &self.options
    }

    // ========================================================================
    // Save
    // ========================================================================

    /// Save one item
    ///
    /// Returns `Ok(None)` when the item's kind has no leaf serializer and the
    /// unknown-kind policy is [`UnknownKindPolicy::Skip`]. A NaN or infinite
    /// position or scale fails with [`Error::NonFiniteTransform`].
    pub fn save<I: SceneItem + ?Sized>(&self, item: &I, ctx: &SaveContext<'_>) -> Result<Option<Slot>> {
        let kind = match SourceKind::from_id(item.kind_id()) {
            Some(kind) => kind,
            None => return self.unrecognized_kind(item),
        };

        let normalized = ctx.resolution.normalize(item.transform());
        if !normalized.is_finite() {
            return Err(Error::NonFiniteTransform {
                name: item.name().to_string(),
            });
        }
        let content = Content::save(kind, SaveArgs::new(item, ctx.assets_path))?;

        debug!("Saved {} slot {:?}", kind, item.name());
        Ok(Some(Slot::new(item.name(), normalized, content)))
    }

    /// Save a whole scene, back-to-front
    pub fn save_scene<S: SceneContainer>(
        &self,
        scene: &S,
        ctx: &SaveContext<'_>,
    ) -> Result<(SlotCollection, SaveReport)> {
        let start = Instant::now();
        let mut report = SaveReport::default();
        let mut slots = Vec::new();

        for item in scene.ordered_items()?.into_iter().rev() {
            match self.save(item, ctx)? {
                Some(slot) => slots.push(slot),
                None => report.dropped += 1,
            }
        }

        report.saved = slots.len();
        report.elapsed_micros = start.elapsed().as_micros() as u64;
        info!("{} (resolution {})", report.summary(), ctx.resolution);

        Ok((SlotCollection::new(slots), report))
    }

    fn unrecognized_kind<I: SceneItem + ?Sized>(&self, item: &I) -> Result<Option<Slot>> {
        match self.options.unknown_kinds {
            UnknownKindPolicy::Skip => {
                warn!(
                    "Dropping item {:?}: source kind {:?} is not persisted",
                    item.name(),
                    item.kind_id()
                );
                Ok(None)
            }
            UnknownKindPolicy::Reject => Err(Error::UnrecognizedKind(item.kind_id().to_string())),
        }
    }

    // ========================================================================
    // Load
    // ========================================================================

    /// Load one slot into the context's scene
    ///
    /// Errors from the scene, the registry or the leaf serializer are returned
    /// as-is; an item created before the failure stays in the scene.
    pub fn load<S, R>(&self, slot: &Slot, ctx: &mut LoadContext<'_, S, R>) -> Result<LoadOutcome>
    where
        S: SceneContainer,
        R: SourceRegistry + ?Sized,
    {
        let kind = match slot.content.kind() {
            Some(kind) => kind,
            None => return self.unrecognized_content(slot),
        };

        let reuse = if kind.is_hardware_capture() && self.options.reuse_capture_devices {
            ctx.sources.find_first_by_kind(kind)?
        } else {
            None
        };

        let existing = reuse.is_some();
        let item = match &reuse {
            Some(handle) => ctx.scene.add_existing_source(handle)?,
            None => ctx.scene.create_and_add_item(&slot.name, kind)?,
        };

        Self::adjust_position_and_scale(item, slot, ctx.resolution);
        slot.content
            .load(LoadArgs::with_existing(item, ctx.assets_path, existing))?;

        if existing {
            debug!("Loaded {} slot {:?} onto an open device", kind, slot.name);
            Ok(LoadOutcome::Reused)
        } else {
            debug!("Loaded {} slot {:?}", kind, slot.name);
            Ok(LoadOutcome::Created)
        }
    }

    /// Load a whole collection in stored order
    ///
    /// Stops at the first failing slot.
    pub fn load_scene<S, R>(
        &self,
        collection: &SlotCollection,
        ctx: &mut LoadContext<'_, S, R>,
    ) -> Result<LoadReport>
    where
        S: SceneContainer,
        R: SourceRegistry + ?Sized,
    {
        collection.check_version()?;

        let start = Instant::now();
        let mut report = LoadReport::default();

        for slot in collection {
            report.record(self.load(slot, ctx)?);
        }

        report.elapsed_micros = start.elapsed().as_micros() as u64;
        info!("{} (resolution {})", report.summary(), ctx.resolution);

        Ok(report)
    }

    fn unrecognized_content(&self, slot: &Slot) -> Result<LoadOutcome> {
        match self.options.unknown_kinds {
            UnknownKindPolicy::Skip => {
                warn!("Skipping slot {:?}: content kind is not recognized", slot.name);
                Ok(LoadOutcome::Skipped)
            }
            UnknownKindPolicy::Reject => Err(Error::UnrecognizedContent {
                name: slot.name.clone(),
            }),
        }
    }

    /// Place `item` at the slot's position and scale for `resolution`
    pub fn adjust_position_and_scale<I: SceneItem + ?Sized>(
        item: &mut I,
        slot: &Slot,
        resolution: Resolution,
    ) {
        item.set_transform(resolution.denormalize(slot.normalized_transform()));
    }

    // ========================================================================
    // Scale helpers
    // ========================================================================

    /// Express `scale` relative to the reference resolution width
    pub fn normalized_scale(&self, scale: f64, resolution: Resolution) -> f64 {
        scale * self.reference_ratio(resolution)
    }

    /// Inverse of [`normalized_scale`](Self::normalized_scale)
    pub fn denormalized_scale(&self, scale: f64, resolution: Resolution) -> f64 {
        scale / self.reference_ratio(resolution)
    }

    fn reference_ratio(&self, resolution: Resolution) -> f64 {
        f64::from(self.options.reference_resolution.width()) / f64::from(resolution.width())
    }
}
