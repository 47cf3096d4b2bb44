use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use anyhow::Context;

use crate::foundation::error::{ConvertError, ConvertResult};

#[derive(Clone, Debug, PartialEq, Eq)]
/// Decoded straight-alpha RGBA8 pixels for one layer.
///
/// Scratch data: produced by the channel decoder, consumed by a store `save`,
/// never retained across a conversion run.
pub struct RasterImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major straight RGBA8.
    pub rgba8: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
/// Reference to one persisted sprite asset.
///
/// Handles are cheap name-plus-bounds records; pixel data stays in the store.
pub struct SpriteHandle {
    /// Asset name, equal to the source layer name.
    pub name: String,
    /// Stored width in pixels.
    pub width: u32,
    /// Stored height in pixels.
    pub height: u32,
}

impl SpriteHandle {
    /// Whether the stored bounds cover `width x height` in both dimensions.
    pub fn covers(&self, width: u32, height: u32) -> bool {
        self.width >= width && self.height >= height
    }
}

/// Durable sprite storage keyed by asset name.
///
/// The store is the only state shared across conversion runs. `save` always
/// overwrites; the cache layer decides when overwriting is warranted.
pub trait SpriteStore {
    /// Whether an asset with this name is already persisted.
    fn exists(&self, name: &str) -> bool;

    /// Look up a persisted asset's bounds without decoding its pixels.
    fn load(&self, name: &str) -> ConvertResult<Option<SpriteHandle>>;

    /// Persist pixels under `name`, replacing any previous asset.
    fn save(&mut self, name: &str, image: &RasterImage) -> ConvertResult<SpriteHandle>;
}

#[derive(Clone, Debug)]
/// Filesystem-backed sprite store writing one PNG per asset.
///
/// Assets live at `{folder}/{name}.png`. The folder is created on first save.
pub struct FsSpriteStore {
    folder: PathBuf,
}

impl FsSpriteStore {
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
        }
    }

    /// Folder all sprites are written under.
    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// Durable path for a named sprite.
    pub fn sprite_path(&self, name: &str) -> PathBuf {
        self.folder.join(format!("{name}.png"))
    }
}

impl SpriteStore for FsSpriteStore {
    fn exists(&self, name: &str) -> bool {
        self.sprite_path(name).is_file()
    }

    fn load(&self, name: &str) -> ConvertResult<Option<SpriteHandle>> {
        let path = self.sprite_path(name);
        if !path.is_file() {
            return Ok(None);
        }
        let (width, height) = image::image_dimensions(&path).map_err(|e| {
            ConvertError::storage(format!("probe sprite '{}': {e}", path.display()))
        })?;
        Ok(Some(SpriteHandle {
            name: name.to_string(),
            width,
            height,
        }))
    }

    fn save(&mut self, name: &str, image: &RasterImage) -> ConvertResult<SpriteHandle> {
        std::fs::create_dir_all(&self.folder)
            .with_context(|| format!("create sprite folder '{}'", self.folder.display()))?;
        let path = self.sprite_path(name);
        image::save_buffer_with_format(
            &path,
            &image.rgba8,
            image.width,
            image.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(|e| ConvertError::storage(format!("write sprite '{}': {e}", path.display())))?;
        Ok(SpriteHandle {
            name: name.to_string(),
            width: image.width,
            height: image.height,
        })
    }
}

#[derive(Clone, Debug, Default)]
/// In-memory sprite store for tests, previews and dry runs.
pub struct MemorySpriteStore {
    sprites: HashMap<String, RasterImage>,
    save_counts: HashMap<String, usize>,
}

impl MemorySpriteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an asset as if a previous run had persisted it.
    pub fn preload(&mut self, name: impl Into<String>, image: RasterImage) {
        self.sprites.insert(name.into(), image);
    }

    /// Pixels currently stored under `name`.
    pub fn get(&self, name: &str) -> Option<&RasterImage> {
        self.sprites.get(name)
    }

    /// How many times `save` ran for `name` (preloads not counted).
    pub fn save_count(&self, name: &str) -> usize {
        self.save_counts.get(name).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

impl SpriteStore for MemorySpriteStore {
    fn exists(&self, name: &str) -> bool {
        self.sprites.contains_key(name)
    }

    fn load(&self, name: &str) -> ConvertResult<Option<SpriteHandle>> {
        Ok(self.sprites.get(name).map(|image| SpriteHandle {
            name: name.to_string(),
            width: image.width,
            height: image.height,
        }))
    }

    fn save(&mut self, name: &str, image: &RasterImage) -> ConvertResult<SpriteHandle> {
        self.sprites.insert(name.to_string(), image.clone());
        *self.save_counts.entry(name.to_string()).or_insert(0) += 1;
        Ok(SpriteHandle {
            name: name.to_string(),
            width: image.width,
            height: image.height,
        })
    }
}
