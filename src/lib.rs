//! psd2ui converts a layered, PSD-style document into a positioned tree of UI widgets.
//!
//! The input is a flat, bottom-to-top list of layers annotated with section markers and
//! optional rich text; the output is a scene-node tree of images, labels, multi-state
//! buttons and toggles, plus one persisted RGBA sprite per distinct layer name.
//!
//! # Pipeline overview
//!
//! 1. **Reconstruct**: `Document` -> `Vec<PathedLayer>` (folder paths from section markers)
//! 2. **Classify**: `Vec<PathedLayer>` -> `Vec<WidgetDescriptor>` (pattern-driven grouping)
//! 3. **Assemble**: `Vec<WidgetDescriptor>` -> scene nodes (idempotent upsert by name)
//!
//! Sprites are decoded and persisted on demand during classification through
//! [`SpriteCache`], which deduplicates by layer name across the whole document and
//! adopts assets persisted by earlier runs when they are large enough.
//!
//! Key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: identical documents and parameters produce identical widget
//!   lists, sprite names and scene mutations.
//! - **Host-agnostic**: persistence and the node tree sit behind the [`SpriteStore`]
//!   and [`SceneHost`] traits; in-memory implementations ship for tests and previews.

#![forbid(unsafe_code)]

mod assets;
mod classify;
mod document;
mod foundation;
mod pipeline;
mod scene;

pub use assets::cache::SpriteCache;
pub use assets::decode::{decode_layer, interleave_rgba};
pub use assets::export::{ExportEntry, ExportPlan};
pub use assets::store::{FsSpriteStore, MemorySpriteStore, RasterImage, SpriteHandle, SpriteStore};
pub use classify::classifier::classify;
pub use classify::params::{
    ButtonPatterns, CompiledButtonPatterns, CompiledPatterns, CompiledTogglePatterns,
    ConvertParams, TogglePatterns,
};
pub use classify::widget::{WidgetDescriptor, WidgetKind};
pub use document::hierarchy::{PathedLayer, reconstruct_paths};
pub use document::model::{ChannelSet, Document, Layer, RichText, SectionMarker, TextAlign};
pub use foundation::error::{ConvertError, ConvertResult};
pub use foundation::geom::{
    Canvas, Point, Rect, Size, Vec2, is_degenerate, scene_position, truncated_extent,
};
pub use pipeline::convert::{ConvertStats, convert_document};
pub use scene::assembler::{AssembleStats, assemble};
pub use scene::host::{MemoryNodeId, MemoryScene, NodeComponent, SceneHost};
