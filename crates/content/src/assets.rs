//! Asset path helpers
//!
//! File-backed content stores file names relative to the assets directory so
//! a saved document can move together with its assets. These helpers only
//! manipulate paths; they never touch the file system.

use std::path::{Component, Path};

use tableau_core::{Error, Result};

/// Express `file` relative to `assets_path` when it lives under it
///
/// Relative names are joined with `/` regardless of platform. Files outside
/// the assets directory are returned unchanged.
pub fn to_asset_relative(file: &str, assets_path: &Path) -> String {
    let path = Path::new(file);
    match path.strip_prefix(assets_path) {
        Ok(relative)
            if !relative.as_os_str().is_empty()
                && !assets_path.as_os_str().is_empty()
                && !relative.components().any(|c| matches!(c, Component::ParentDir)) =>
        {
            relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/")
        }
        _ => file.to_string(),
    }
}

/// Resolve a stored file name against `assets_path`
///
/// Absolute names are returned unchanged; relative names are taken as
/// asset-relative and may not climb out of the assets directory.
pub fn resolve(filename: &str, assets_path: &Path) -> Result<String> {
    let path = Path::new(filename);
    if path.is_absolute() {
        return Ok(filename.to_string());
    }
    if path.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(Error::InvalidAssetPath(filename.to_string()));
    }
    if assets_path.as_os_str().is_empty() {
        return Ok(filename.to_string());
    }
    Ok(assets_path.join(path).to_string_lossy().into_owned())
}
