//! In-memory collaborators
//!
//! [`MemoryScene`] and [`MemorySources`] implement the collaborator traits
//! over plain vectors. They back the test suites and benchmarks, and serve as
//! a reference for the ordering contract: new items go on top.

use crate::error::{Error, Result};
use crate::scene::{SceneContainer, SceneItem, SourceRegistry};
use crate::types::{Settings, SourceHandle, SourceId, SourceKind, Transform};

/// A scene item held by [`MemoryScene`]
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryItem {
    name: String,
    kind_id: String,
    source_id: SourceId,
    transform: Transform,
    settings: Settings,
}

impl MemoryItem {
    /// Create an item with a fresh source, identity transform and no settings
    pub fn new(name: impl Into<String>, kind_id: impl Into<String>) -> Self {
        MemoryItem {
            name: name.into(),
            kind_id: kind_id.into(),
            source_id: SourceId::new(),
            transform: Transform::new(0.0, 0.0, 1.0, 1.0),
            settings: Settings::new(),
        }
    }

    /// Create an item of a known kind
    pub fn of_kind(name: impl Into<String>, kind: SourceKind) -> Self {
        Self::new(name, kind.id())
    }

    /// Set the transform
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Set one settings key
    pub fn with_setting(mut self, key: &str, value: serde_json::Value) -> Self {
        self.settings.insert(key.to_string(), value);
        self
    }
}

impl SceneItem for MemoryItem {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind_id(&self) -> &str {
        &self.kind_id
    }

    fn source_id(&self) -> SourceId {
        self.source_id
    }

    fn transform(&self) -> Transform {
        self.transform
    }

    fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    fn settings(&self) -> &Settings {
        &self.settings
    }

    fn update_settings(&mut self, patch: Settings) {
        self.settings.extend(patch);
    }
}

/// Scene container over a vector, front-to-back
#[derive(Debug, Clone, Default)]
pub struct MemoryScene {
    items: Vec<MemoryItem>,
    max_items: Option<usize>,
}

impl MemoryScene {
    /// Create an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scene that refuses to hold more than `max_items` items
    pub fn with_max_items(max_items: usize) -> Self {
        MemoryScene {
            items: Vec::new(),
            max_items: Some(max_items),
        }
    }

    /// Place an item on top of the scene
    pub fn add_item(&mut self, item: MemoryItem) -> Result<&mut MemoryItem> {
        if let Some(max) = self.max_items {
            if self.items.len() >= max {
                return Err(Error::Scene(format!(
                    "scene is full ({} items)",
                    max
                )));
            }
        }
        self.items.insert(0, item);
        Ok(&mut self.items[0])
    }

    /// Items in native order
    pub fn items(&self) -> &[MemoryItem] {
        &self.items
    }

    /// Item names in native order
    pub fn names(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.name()).collect()
    }

    /// Find an item by name
    pub fn get(&self, name: &str) -> Option<&MemoryItem> {
        self.items.iter().find(|item| item.name() == name)
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the scene has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl SceneContainer for MemoryScene {
    type Item = MemoryItem;

    fn ordered_items(&self) -> Result<Vec<&MemoryItem>> {
        Ok(self.items.iter().collect())
    }

    fn create_and_add_item(&mut self, name: &str, kind: SourceKind) -> Result<&mut MemoryItem> {
        self.add_item(MemoryItem::of_kind(name, kind))
    }

    fn add_existing_source(&mut self, source: &SourceHandle) -> Result<&mut MemoryItem> {
        let mut item = MemoryItem::of_kind(source.name.clone(), source.kind);
        item.source_id = source.id;
        self.add_item(item)
    }
}

/// Registry of open sources, in the order they were opened
#[derive(Debug, Clone, Default)]
pub struct MemorySources {
    sources: Vec<SourceHandle>,
}

impl MemorySources {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new source and return its handle
    pub fn open(&mut self, name: impl Into<String>, kind: SourceKind) -> SourceHandle {
        let handle = SourceHandle::new(SourceId::new(), name, kind);
        self.sources.push(handle.clone());
        handle
    }

    /// Open sources in opening order
    pub fn sources(&self) -> &[SourceHandle] {
        &self.sources
    }
}

impl SourceRegistry for MemorySources {
    fn find_first_by_kind(&self, kind: SourceKind) -> Result<Option<SourceHandle>> {
        Ok(self.sources.iter().find(|s| s.kind == kind).cloned())
    }
}
