//! Explicit save/load contexts
//!
//! Everything a pass needs travels in these structs; the serializer looks up
//! no services of its own. The render resolution is sampled from its provider
//! when the context is built.

use std::path::Path;

use tableau_core::{RenderResolution, Resolution};

/// Inputs to a save pass
#[derive(Debug, Clone, Copy)]
pub struct SaveContext<'a> {
    /// Directory asset files are stored relative to
    pub assets_path: &'a Path,
    /// Render resolution at save time
    pub resolution: Resolution,
}

impl<'a> SaveContext<'a> {
    /// Build a save context, sampling the current render resolution
    pub fn new<P: RenderResolution + ?Sized>(assets_path: &'a Path, provider: &P) -> Self {
        SaveContext {
            assets_path,
            resolution: provider.render_resolution(),
        }
    }
}

/// Inputs to a load pass
#[derive(Debug)]
pub struct LoadContext<'a, S, R: ?Sized> {
    /// Directory asset-relative names are resolved against
    pub assets_path: &'a Path,
    /// Scene receiving the loaded items
    pub scene: &'a mut S,
    /// Registry of already-open sources
    pub sources: &'a R,
    /// Render resolution at load time
    pub resolution: Resolution,
}

impl<'a, S, R: ?Sized> LoadContext<'a, S, R> {
    /// Build a load context, sampling the current render resolution
    pub fn new<P: RenderResolution + ?Sized>(
        assets_path: &'a Path,
        scene: &'a mut S,
        sources: &'a R,
        provider: &P,
    ) -> Self {
        LoadContext {
            assets_path,
            scene,
            sources,
            resolution: provider.render_resolution(),
        }
    }
}
