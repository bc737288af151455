//! Core types for Tableau scene persistence
//!
//! This crate defines what every other Tableau crate agrees on:
//! - [`SourceKind`]: the four content kinds the persistence layer understands
//! - [`SourceId`] / [`SourceHandle`]: identity of a backing content source
//! - [`Resolution`] / [`Transform`]: render resolution and item placement
//! - [`Error`] / [`Result`]: the error type shared by all crates
//! - [`scene`]: collaborator traits (container, registry, resolution provider)
//! - [`memory`]: in-memory collaborators for tests and benchmarks

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod memory;
pub mod scene;
pub mod types;

pub use error::{Error, Result};
pub use scene::{RenderResolution, SceneContainer, SceneItem, SourceRegistry};
pub use types::{Resolution, Settings, SourceHandle, SourceId, SourceKind, Transform};
