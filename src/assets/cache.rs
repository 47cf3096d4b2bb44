use std::collections::HashMap;

use crate::{
    assets::{
        decode::decode_layer,
        store::{SpriteHandle, SpriteStore},
    },
    document::model::Layer,
    foundation::{error::ConvertResult, geom::truncated_extent},
};

/// Per-run sprite resolver deduplicating assets by layer name.
///
/// The cache sits between the classifier and a [`SpriteStore`]: each distinct
/// layer name resolves to at most one live handle, upgraded in place whenever
/// a later layer needs larger bounds than the stored asset provides. Assets
/// persisted by earlier runs are adopted without re-decoding when their bounds
/// already cover the requesting layer.
pub struct SpriteCache<'s, S: SpriteStore> {
    store: &'s mut S,
    entries: HashMap<String, SpriteHandle>,
    saved: usize,
}

impl<'s, S: SpriteStore> SpriteCache<'s, S> {
    pub fn new(store: &'s mut S) -> Self {
        Self {
            store,
            entries: HashMap::new(),
            saved: 0,
        }
    }

    /// Number of store saves performed through this cache.
    pub fn saved(&self) -> usize {
        self.saved
    }

    /// Resolve a layer to its sprite handle, decoding and persisting on demand.
    ///
    /// `Ok(None)` marks an unresolvable asset: the widget gets a null graphic.
    /// Store failures are hard errors.
    pub fn resolve(&mut self, layer: &Layer) -> ConvertResult<Option<SpriteHandle>> {
        let (width, height) = truncated_extent(layer.rect);

        let known = match self.entries.get(&layer.name) {
            Some(entry) => Some(entry.clone()),
            None => {
                let durable = self.store.load(&layer.name)?;
                if let Some(handle) = &durable {
                    self.entries.insert(layer.name.clone(), handle.clone());
                }
                durable
            }
        };

        if let Some(handle) = &known
            && handle.covers(width, height)
        {
            return Ok(Some(handle.clone()));
        }

        // Stored asset missing or smaller in at least one dimension.
        match decode_layer(layer) {
            Some(image) => {
                let handle = self.store.save(&layer.name, &image)?;
                self.saved += 1;
                self.entries.insert(layer.name.clone(), handle.clone());
                Ok(Some(handle))
            }
            None => {
                if known.is_none() {
                    tracing::warn!(
                        layer = %layer.name,
                        "layer not decodable, widget gets a null graphic"
                    );
                }
                Ok(known)
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/cache.rs"]
mod tests;
