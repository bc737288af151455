//! Hardware capture (webcam) content
//!
//! A capture device can only be bound once, so on load the serializer may
//! attach to a device that was already open. In that case the device keeps
//! its current configuration and nothing from the document is applied.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use tableau_core::{Error, Result, SceneItem, Settings, SourceKind};

use crate::schema::{ContentSchema, LoadArgs, SaveArgs};

const DEVICE_ID: &str = "video_device_id";
const RESOLUTION: &str = "resolution";
const RES_TYPE: &str = "res_type";

/// `res_type` value selecting a custom resolution
const RES_TYPE_CUSTOM: u64 = 1;

/// Capture resolution in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureResolution {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl CaptureResolution {
    /// Parse the `"WxH"` form used in device settings
    pub fn parse(s: &str) -> Option<Self> {
        let (w, h) = s.split_once('x')?;
        Some(CaptureResolution {
            width: w.trim().parse().ok()?,
            height: h.trim().parse().ok()?,
        })
    }
}

impl std::fmt::Display for CaptureResolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Hardware capture device
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WebcamContent {
    /// Device identifier, when one was selected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    /// Custom capture resolution, when one was set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<CaptureResolution>,
}

impl ContentSchema for WebcamContent {
    const KIND: SourceKind = SourceKind::Webcam;

    fn save<I: SceneItem + ?Sized>(args: SaveArgs<'_, I>) -> Result<Self> {
        let settings = args.scene_item.settings();

        let device_id = settings
            .get(DEVICE_ID)
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
            .map(str::to_string);

        let resolution = match settings.get(RESOLUTION).and_then(Value::as_str) {
            Some(raw) => Some(CaptureResolution::parse(raw).ok_or_else(|| {
                Error::content(Self::KIND.id(), format!("malformed resolution {:?}", raw))
            })?),
            None => None,
        };

        Ok(WebcamContent {
            device_id,
            resolution,
        })
    }

    fn load<I: SceneItem + ?Sized>(&self, args: LoadArgs<'_, I>) -> Result<()> {
        if args.existing {
            debug!(
                "Attached to existing capture device {:?}, keeping its configuration",
                args.scene_item.name()
            );
            return Ok(());
        }

        let mut patch = Settings::new();
        if let Some(device_id) = &self.device_id {
            patch.insert(DEVICE_ID.to_string(), Value::String(device_id.clone()));
        }
        if let Some(resolution) = self.resolution {
            patch.insert(RES_TYPE.to_string(), Value::from(RES_TYPE_CUSTOM));
            patch.insert(RESOLUTION.to_string(), Value::String(resolution.to_string()));
        }
        args.scene_item.update_settings(patch);
        Ok(())
    }
}
