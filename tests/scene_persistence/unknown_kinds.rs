//! Unknown kind tests
//!
//! Items whose source kind has no serializer are dropped on save by default.
//! Slots whose content kind this build does not know are skipped on load.
//! The strict options turn both into errors.

use crate::*;

fn scene_with_browser() -> MemoryScene {
    let mut scene = sample_scene();
    scene
        .add_item(
            MemoryItem::new("chat", "browser_source")
                .with_setting("url", json!("https://example.com/chat")),
        )
        .unwrap();
    scene
}

const FOREIGN_DOCUMENT: &str = r#"{
    "schemaVersion": 1,
    "slots": [
        {"name": "bg", "x": 0.0, "y": 0.0, "scaleX": 1.0, "scaleY": 1.0,
         "content": {"kind": "image", "filename": "bg.png"}},
        {"name": "chat", "x": 0.7, "y": 0.1, "scaleX": 0.2, "scaleY": 0.8,
         "content": {"kind": "browser", "url": "https://example.com/chat"}},
        {"name": "title", "x": 0.5, "y": 0.05, "scaleX": 0.001, "scaleY": 0.001,
         "content": {"kind": "text", "text": "Live"}}
    ]
}"#;

#[test]
fn unknown_item_is_dropped_on_save() {
    init_tracing();
    let (collection, report) = save(&scene_with_browser(), full_hd());

    assert_eq!(report.saved, 4);
    assert_eq!(report.dropped, 1);
    assert!(report.has_issues());
    assert!(collection.iter().all(|slot| slot.name != "chat"));
}

#[test]
fn unknown_item_is_rejected_when_strict() {
    let resolution = full_hd();
    let err = SlotSerializer::new(SlotOptions::strict())
        .save_scene(&scene_with_browser(), &SaveContext::new(assets(), &resolution))
        .unwrap_err();

    assert!(err.is_unrecognized());
    assert!(matches!(err, Error::UnrecognizedKind(ref kind) if kind == "browser_source"));
}

#[test]
fn unknown_content_decodes_and_is_skipped_on_load() {
    init_tracing();
    let collection = SlotCollection::from_json(FOREIGN_DOCUMENT).unwrap();
    assert_eq!(collection.len(), 3);
    assert_eq!(collection.slots[1].content, Content::Unrecognized);

    let (loaded, report) = load_fresh(&collection, &MemorySources::new(), full_hd());

    assert_eq!(report.created, 2);
    assert_eq!(report.skipped, 1);
    assert!(report.has_issues());
    assert_eq!(loaded.names(), vec!["title", "bg"]);
}

#[test]
fn unknown_content_is_rejected_when_strict() {
    let collection = SlotCollection::from_json(FOREIGN_DOCUMENT).unwrap();

    let mut scene = MemoryScene::new();
    let sources = MemorySources::new();
    let resolution = full_hd();
    let err = {
        let mut ctx = LoadContext::new(assets(), &mut scene, &sources, &resolution);
        SlotSerializer::new(SlotOptions::strict())
            .load_scene(&collection, &mut ctx)
            .unwrap_err()
    };

    assert!(matches!(err, Error::UnrecognizedContent { ref name } if name == "chat"));
    // Slots before the failing one stay loaded
    assert_eq!(scene.names(), vec!["bg"]);
}

#[test]
fn newer_schema_is_rejected_before_slots_are_read() {
    let json = r#"{"schemaVersion": 99, "slots": [{"layout": "from the future"}]}"#;

    let err = SlotCollection::from_json(json).unwrap_err();
    assert!(matches!(
        err,
        Error::UnsupportedSchemaVersion { found: 99, .. }
    ));
}

#[test]
fn malformed_document_is_a_serialization_error() {
    let err = SlotCollection::from_json("{\"schemaVersion\": 1, \"slots\": 3}").unwrap_err();
    assert!(matches!(err, Error::Serialization(_)));
}
