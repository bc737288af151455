//! Capture device reuse tests
//!
//! A capture slot attaches to the first already-open capture source instead of
//! binding the device twice. Other kinds always get a fresh source.

use crate::*;

fn cam_scene() -> MemoryScene {
    let mut scene = MemoryScene::new();
    scene
        .add_item(
            MemoryItem::of_kind("Saved Cam", SourceKind::Webcam)
                .with_transform(Transform::new(1440.0, 810.0, 480.0, 270.0))
                .with_setting("video_device_id", json!("usb:saved"))
                .with_setting("resolution", json!("640x480")),
        )
        .unwrap();
    scene
}

#[test]
fn open_device_is_reused_with_existing_flag() {
    let (collection, _) = save(&cam_scene(), full_hd());

    let mut sources = MemorySources::new();
    let open = sources.open("Desk Cam", SourceKind::Webcam);

    let (loaded, report) = load_fresh(&collection, &sources, full_hd());

    assert_eq!(report.reused, 1);
    assert_eq!(report.created, 0);

    let item = &loaded.items()[0];
    assert_eq!(item.source_id(), open.id);
    assert_eq!(item.name(), "Desk Cam");
    // The document's device configuration was not applied
    assert!(item.settings().get("video_device_id").is_none());
    assert!(item.settings().get("resolution").is_none());
    // Placement still comes from the slot
    assert_transform_close(item.transform(), Transform::new(1440.0, 810.0, 480.0, 270.0));
}

#[test]
fn missing_device_is_created_fresh() {
    let (collection, _) = save(&cam_scene(), full_hd());

    let (loaded, report) = load_fresh(&collection, &MemorySources::new(), full_hd());

    assert_eq!(report.created, 1);
    assert_eq!(report.reused, 0);

    let item = loaded.get("Saved Cam").unwrap();
    assert_eq!(item.settings()["video_device_id"], json!("usb:saved"));
    assert_eq!(item.settings()["resolution"], json!("640x480"));
}

#[test]
fn first_open_device_wins() {
    let (collection, _) = save(&cam_scene(), full_hd());

    let mut sources = MemorySources::new();
    let first = sources.open("Cam 1", SourceKind::Webcam);
    sources.open("Cam 2", SourceKind::Webcam);

    let (loaded, _) = load_fresh(&collection, &sources, full_hd());
    assert_eq!(loaded.items()[0].source_id(), first.id);
}

#[test]
fn two_capture_slots_share_one_open_device() {
    let mut scene = cam_scene();
    scene
        .add_item(MemoryItem::of_kind("Second Cam", SourceKind::Webcam))
        .unwrap();
    let (collection, _) = save(&scene, full_hd());

    let mut sources = MemorySources::new();
    let open = sources.open("Desk Cam", SourceKind::Webcam);

    let (loaded, report) = load_fresh(&collection, &sources, full_hd());
    assert_eq!(report.reused, 2);
    assert!(loaded.items().iter().all(|i| i.source_id() == open.id));
}

#[test]
fn non_capture_kinds_never_reuse() {
    let mut sources = MemorySources::new();
    for kind in [SourceKind::Image, SourceKind::Text, SourceKind::Video] {
        sources.open(format!("open {}", kind), kind);
    }

    let (collection, _) = save(&sample_scene(), full_hd());
    let (_, report) = load_fresh(&collection, &sources, full_hd());

    // No capture source is open, so the webcam slot is created as well
    assert_eq!(report.created, 4);
    assert_eq!(report.reused, 0);
}

#[test]
fn reuse_can_be_disabled() {
    let (collection, _) = save(&cam_scene(), full_hd());

    let mut sources = MemorySources::new();
    let open = sources.open("Desk Cam", SourceKind::Webcam);

    let serializer = SlotSerializer::new(SlotOptions {
        reuse_capture_devices: false,
        ..Default::default()
    });
    let mut scene = MemoryScene::new();
    let resolution = full_hd();
    let report = {
        let mut ctx = LoadContext::new(assets(), &mut scene, &sources, &resolution);
        serializer.load_scene(&collection, &mut ctx).unwrap()
    };

    assert_eq!(report.created, 1);
    assert_ne!(scene.items()[0].source_id(), open.id);
    assert_eq!(scene.items()[0].settings()["video_device_id"], json!("usb:saved"));
}
