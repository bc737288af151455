//! File/stream video content

use serde::{Deserialize, Serialize};
use serde_json::Value;

use tableau_core::{Result, SceneItem, Settings, SourceKind};

use crate::assets;
use crate::schema::{ContentSchema, LoadArgs, SaveArgs};

const LOCAL_FILE: &str = "local_file";
const IS_LOCAL_FILE: &str = "is_local_file";
const LOOPING: &str = "looping";
const HW_DECODE: &str = "hw_decode";

/// Video played from a file
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VideoContent {
    /// Video file, relative to the assets directory when it lives there
    ///
    /// `None` for a source that has no file chosen yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Restart playback when the end is reached
    #[serde(default)]
    pub looping: bool,
    /// Use hardware decoding when available
    #[serde(default)]
    pub hw_decode: bool,
}

impl ContentSchema for VideoContent {
    const KIND: SourceKind = SourceKind::Video;

    fn save<I: SceneItem + ?Sized>(args: SaveArgs<'_, I>) -> Result<Self> {
        let settings = args.scene_item.settings();

        let filename = settings
            .get(LOCAL_FILE)
            .and_then(Value::as_str)
            .filter(|file| !file.is_empty())
            .map(|file| assets::to_asset_relative(file, args.assets_path));

        let flag = |key: &str| settings.get(key).and_then(Value::as_bool).unwrap_or(false);

        Ok(VideoContent {
            filename,
            looping: flag(LOOPING),
            hw_decode: flag(HW_DECODE),
        })
    }

    fn load<I: SceneItem + ?Sized>(&self, args: LoadArgs<'_, I>) -> Result<()> {
        let mut patch = Settings::new();
        patch.insert(IS_LOCAL_FILE.to_string(), Value::Bool(true));
        if let Some(filename) = &self.filename {
            patch.insert(
                LOCAL_FILE.to_string(),
                Value::String(assets::resolve(filename, args.assets_path)?),
            );
        }
        patch.insert(LOOPING.to_string(), Value::Bool(self.looping));
        patch.insert(HW_DECODE.to_string(), Value::Bool(self.hw_decode));
        args.scene_item.update_settings(patch);
        Ok(())
    }
}
