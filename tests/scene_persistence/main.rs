//! Scene Persistence Test Suite
//!
//! End-to-end tests that save in-memory scenes to slot collections (and JSON)
//! and load them back into fresh scenes.
//!
//! ## Modules
//!
//! - `round_trip`: save then load reproduces names, kinds, placement, content
//! - `ordering`: stacking order survives the reversed save order
//! - `capture_reuse`: capture slots attach to already-open devices
//! - `resolution`: placement is proportional across render resolutions
//! - `unknown_kinds`: unrecognized kinds are dropped or rejected
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test scene_persistence
//! cargo test --test scene_persistence capture_reuse::
//! ```

use std::path::Path;

use tableau::memory::{MemoryItem, MemoryScene, MemorySources};
use tableau::prelude::*;
use tableau::{LoadReport, SaveReport};

pub mod capture_reuse;
pub mod resolution;
pub mod unknown_kinds;

// =============================================================================
// SHARED TEST UTILITIES
// =============================================================================

/// Assets directory used by every test
pub const ASSETS: &str = "/projects/show/assets";

/// Assets directory as a path
pub fn assets() -> &'static Path {
    Path::new(ASSETS)
}

/// Install a test log writer (idempotent)
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// 1920x1080
pub fn full_hd() -> Resolution {
    Resolution::FULL_HD
}

/// Build a resolution from known-good dimensions
pub fn res(width: u32, height: u32) -> Resolution {
    Resolution::new(width, height).expect("non-zero test resolution")
}

/// One item of each persisted kind, front-to-back: title, cam, intro, logo
pub fn sample_scene() -> MemoryScene {
    let mut scene = MemoryScene::new();
    scene
        .add_item(
            MemoryItem::of_kind("logo", SourceKind::Image)
                .with_transform(Transform::new(100.0, 50.0, 200.0, 200.0))
                .with_setting("file", json!("/projects/show/assets/logo.png")),
        )
        .unwrap();
    scene
        .add_item(
            MemoryItem::of_kind("intro", SourceKind::Video)
                .with_transform(Transform::new(0.0, 0.0, 1920.0, 1080.0))
                .with_setting("local_file", json!("/projects/show/assets/clips/intro.mp4"))
                .with_setting("looping", json!(true)),
        )
        .unwrap();
    scene
        .add_item(
            MemoryItem::of_kind("cam", SourceKind::Webcam)
                .with_transform(Transform::new(1440.0, 810.0, 480.0, 270.0))
                .with_setting("video_device_id", json!("usb:046d:085b"))
                .with_setting("resolution", json!("1280x720")),
        )
        .unwrap();
    scene
        .add_item(
            MemoryItem::of_kind("title", SourceKind::Text)
                .with_transform(Transform::new(960.0, 40.0, 1.0, 1.0))
                .with_setting("text", json!("Starting soon"))
                .with_setting("font", json!({"face": "Inter", "size": 64}))
                .with_setting("color", json!(4294967295u64)),
        )
        .unwrap();
    scene
}

/// Save `scene` at `resolution` with default options
pub fn save(scene: &MemoryScene, resolution: Resolution) -> (SlotCollection, SaveReport) {
    SlotSerializer::default()
        .save_scene(scene, &SaveContext::new(assets(), &resolution))
        .expect("save scene")
}

/// Load `collection` into a fresh scene at `resolution` with default options
pub fn load_fresh(
    collection: &SlotCollection,
    sources: &MemorySources,
    resolution: Resolution,
) -> (MemoryScene, LoadReport) {
    let mut scene = MemoryScene::new();
    let report = {
        let mut ctx = LoadContext::new(assets(), &mut scene, sources, &resolution);
        SlotSerializer::default()
            .load_scene(collection, &mut ctx)
            .expect("load scene")
    };
    (scene, report)
}

/// Assert two transforms match within floating-point tolerance
pub fn assert_transform_close(actual: Transform, expected: Transform) {
    let close = |a: f64, b: f64| (a - b).abs() <= 1e-9 * b.abs().max(1.0);
    assert!(
        close(actual.x, expected.x)
            && close(actual.y, expected.y)
            && close(actual.scale_x, expected.scale_x)
            && close(actual.scale_y, expected.scale_y),
        "transform {:?} != {:?}",
        actual,
        expected
    );
}
