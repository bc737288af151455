//! The leaf serializer contract

use std::path::Path;

use tableau_core::{Result, SceneItem, SourceKind};

/// Arguments to [`ContentSchema::save`]
#[derive(Debug)]
pub struct SaveArgs<'a, I: ?Sized> {
    /// Item whose backing source is saved
    pub scene_item: &'a I,
    /// Directory asset files are stored relative to
    pub assets_path: &'a Path,
}

impl<'a, I: ?Sized> SaveArgs<'a, I> {
    /// Bundle save arguments
    pub fn new(scene_item: &'a I, assets_path: &'a Path) -> Self {
        SaveArgs {
            scene_item,
            assets_path,
        }
    }
}

/// Arguments to [`ContentSchema::load`]
#[derive(Debug)]
pub struct LoadArgs<'a, I: ?Sized> {
    /// Item whose backing source is configured
    pub scene_item: &'a mut I,
    /// Directory asset-relative names are resolved against
    pub assets_path: &'a Path,
    /// Whether the backing source existed before this load
    ///
    /// Only hardware capture sources are ever reused, so only the webcam
    /// schema looks at this flag.
    pub existing: bool,
}

impl<'a, I: ?Sized> LoadArgs<'a, I> {
    /// Bundle load arguments for a freshly created source
    pub fn fresh(scene_item: &'a mut I, assets_path: &'a Path) -> Self {
        LoadArgs {
            scene_item,
            assets_path,
            existing: false,
        }
    }

    /// Bundle load arguments for a source that may already exist
    pub fn with_existing(scene_item: &'a mut I, assets_path: &'a Path, existing: bool) -> Self {
        LoadArgs {
            scene_item,
            assets_path,
            existing,
        }
    }
}

/// Save/load capability shared by the four content schemas
///
/// `save` reads the backing source's settings into the schema; `load` writes
/// the schema back into the settings of the given item, in place.
pub trait ContentSchema: Sized {
    /// Source kind this schema persists
    const KIND: SourceKind;

    /// Capture the item's content
    fn save<I: SceneItem + ?Sized>(args: SaveArgs<'_, I>) -> Result<Self>;

    /// Apply this content to the item's backing source
    fn load<I: SceneItem + ?Sized>(&self, args: LoadArgs<'_, I>) -> Result<()>;
}
