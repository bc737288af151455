//! Resolution tests
//!
//! Slots store placement as fractions of the render resolution, so a layout
//! saved at one resolution loads proportionally at another.

use crate::*;

fn corner_badge() -> MemoryScene {
    let mut scene = MemoryScene::new();
    scene
        .add_item(
            MemoryItem::of_kind("badge", SourceKind::Image)
                .with_transform(Transform::new(1100.0, 600.0, 160.0, 90.0))
                .with_setting("file", json!("/projects/show/assets/badge.png")),
        )
        .unwrap();
    scene
}

#[test]
fn doubling_resolution_doubles_placement() {
    let (collection, _) = save(&corner_badge(), res(1280, 720));
    let (loaded, _) = load_fresh(&collection, &MemorySources::new(), res(2560, 1440));

    assert_transform_close(
        loaded.get("badge").unwrap().transform(),
        Transform::new(2200.0, 1200.0, 320.0, 180.0),
    );
}

#[test]
fn hd_layout_scales_up_to_full_hd() {
    let (collection, _) = save(&corner_badge(), res(1280, 720));
    let (loaded, _) = load_fresh(&collection, &MemorySources::new(), full_hd());

    assert_transform_close(
        loaded.get("badge").unwrap().transform(),
        Transform::new(1650.0, 900.0, 240.0, 135.0),
    );
}

#[test]
fn aspect_change_scales_axes_independently() {
    let (collection, _) = save(&corner_badge(), res(1280, 720));
    // Same width, taller canvas
    let (loaded, _) = load_fresh(&collection, &MemorySources::new(), res(1280, 1024));

    let t = loaded.get("badge").unwrap().transform();
    assert_transform_close(t, Transform::new(1100.0, 600.0 * 1024.0 / 720.0, 160.0, 90.0 * 1024.0 / 720.0));
}

#[test]
fn stored_values_do_not_depend_on_save_resolution() {
    let at_720 = {
        let mut scene = MemoryScene::new();
        scene
            .add_item(
                MemoryItem::of_kind("t", SourceKind::Text)
                    .with_transform(Transform::new(640.0, 360.0, 320.0, 180.0)),
            )
            .unwrap();
        save(&scene, res(1280, 720)).0
    };
    let at_1080 = {
        let mut scene = MemoryScene::new();
        scene
            .add_item(
                MemoryItem::of_kind("t", SourceKind::Text)
                    .with_transform(Transform::new(960.0, 540.0, 480.0, 270.0)),
            )
            .unwrap();
        save(&scene, full_hd()).0
    };

    let a = at_720.iter().next().unwrap().normalized_transform();
    let b = at_1080.iter().next().unwrap().normalized_transform();
    assert_transform_close(a, b);
    assert_transform_close(a, Transform::new(0.5, 0.5, 0.25, 0.25));
}

#[test]
fn render_resolution_provider_is_read_at_save_time() {
    struct Canvas {
        width: u32,
        height: u32,
    }

    impl RenderResolution for Canvas {
        fn render_resolution(&self) -> Resolution {
            res(self.width, self.height)
        }
    }

    let canvas = Canvas {
        width: 2560,
        height: 1440,
    };
    let (collection, _) = SlotSerializer::default()
        .save_scene(&corner_badge(), &SaveContext::new(assets(), &canvas))
        .unwrap();

    let slot = collection.iter().next().unwrap();
    assert!((slot.x - 1100.0 / 2560.0).abs() < 1e-12);
    assert!((slot.scale_y - 90.0 / 1440.0).abs() < 1e-12);
}

#[test]
fn scale_helpers_compare_across_resolutions() {
    let serializer = SlotSerializer::default();

    // A 1.0 scale at 1280 wide covers as much of the frame as 1.5 at 1920
    assert_eq!(serializer.normalized_scale(1.0, res(1280, 720)), 1.5);
    assert_eq!(serializer.normalized_scale(1.5, full_hd()), 1.5);
    assert_eq!(serializer.denormalized_scale(1.5, res(3840, 2160)), 3.0);
}
