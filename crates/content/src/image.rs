//! Image content

use serde::{Deserialize, Serialize};
use serde_json::Value;

use tableau_core::{Result, SceneItem, Settings, SourceKind};

use crate::assets;
use crate::schema::{ContentSchema, LoadArgs, SaveArgs};

const FILE: &str = "file";

/// Still image loaded from a file
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ImageContent {
    /// Image file, relative to the assets directory when it lives there
    ///
    /// `None` for a source that has no file chosen yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl ContentSchema for ImageContent {
    const KIND: SourceKind = SourceKind::Image;

    fn save<I: SceneItem + ?Sized>(args: SaveArgs<'_, I>) -> Result<Self> {
        let filename = args
            .scene_item
            .settings()
            .get(FILE)
            .and_then(Value::as_str)
            .filter(|file| !file.is_empty())
            .map(|file| assets::to_asset_relative(file, args.assets_path));

        Ok(ImageContent { filename })
    }

    fn load<I: SceneItem + ?Sized>(&self, args: LoadArgs<'_, I>) -> Result<()> {
        let filename = match &self.filename {
            Some(filename) => filename,
            None => return Ok(()),
        };

        let mut patch = Settings::new();
        patch.insert(
            FILE.to_string(),
            Value::String(assets::resolve(filename, args.assets_path)?),
        );
        args.scene_item.update_settings(patch);
        Ok(())
    }
}
