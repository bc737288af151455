//! Text overlay content

use serde::{Deserialize, Serialize};
use serde_json::Value;

use tableau_core::{Error, Result, SceneItem, Settings, SourceKind};

use crate::schema::{ContentSchema, LoadArgs, SaveArgs};

const TEXT: &str = "text";
const FONT: &str = "font";
const COLOR: &str = "color";

/// Font of a text overlay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Font {
    /// Font family
    pub face: String,
    /// Point size
    pub size: u32,
    /// Style name (e.g. "Bold")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

/// Text overlay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextContent {
    /// Displayed text
    pub text: String,
    /// Font, when the source sets one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    /// Packed color, when the source sets one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
}

impl ContentSchema for TextContent {
    const KIND: SourceKind = SourceKind::Text;

    fn save<I: SceneItem + ?Sized>(args: SaveArgs<'_, I>) -> Result<Self> {
        let settings = args.scene_item.settings();

        let text = settings
            .get(TEXT)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let font = match settings.get(FONT) {
            Some(value) => Some(serde_json::from_value::<Font>(value.clone()).map_err(|e| {
                Error::content(Self::KIND.id(), format!("malformed font: {}", e))
            })?),
            None => None,
        };

        let color = match settings.get(COLOR) {
            Some(value) => Some(
                value
                    .as_u64()
                    .and_then(|c| u32::try_from(c).ok())
                    .ok_or_else(|| {
                        Error::content(Self::KIND.id(), format!("malformed color: {}", value))
                    })?,
            ),
            None => None,
        };

        Ok(TextContent { text, font, color })
    }

    fn load<I: SceneItem + ?Sized>(&self, args: LoadArgs<'_, I>) -> Result<()> {
        let mut patch = Settings::new();
        patch.insert(TEXT.to_string(), Value::String(self.text.clone()));
        if let Some(font) = &self.font {
            patch.insert(FONT.to_string(), serde_json::to_value(font)?);
        }
        if let Some(color) = self.color {
            patch.insert(COLOR.to_string(), Value::from(color));
        }
        args.scene_item.update_settings(patch);
        Ok(())
    }
}
