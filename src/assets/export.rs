use crate::{
    assets::{decode::decode_layer, store::SpriteStore},
    document::model::{Document, Layer},
    foundation::{error::ConvertResult, geom::is_degenerate},
};

#[derive(Debug)]
/// One exportable raster layer with its persistence state.
pub struct ExportEntry<'a> {
    /// The source layer backing this asset.
    pub layer: &'a Layer,
    /// Whether the durable store already holds an asset with this name.
    pub exists: bool,
    /// Whether `commit` should (re)write this asset. Defaults to `true` only
    /// for assets missing from the store.
    pub overwrite: bool,
}

#[derive(Debug)]
/// Bulk-save plan for a document's raster layers.
///
/// The plan enumerates each distinct exportable layer once so hosts can review
/// and adjust overwrite flags before committing.
pub struct ExportPlan<'a> {
    entries: Vec<ExportEntry<'a>>,
}

impl<'a> ExportPlan<'a> {
    /// Enumerate the document's exportable layers, sorted by name.
    ///
    /// Markers, text layers, invisible layers, degenerate extents and layers
    /// without channel data are skipped. Duplicate names collapse to the
    /// first occurrence in layer order.
    pub fn build<S: SpriteStore>(doc: &'a Document, store: &S) -> Self {
        let mut entries: Vec<ExportEntry<'a>> = Vec::new();
        for layer in &doc.layers {
            if layer.section.is_some()
                || layer.text.is_some()
                || !layer.visible
                || layer.channels.is_none()
                || is_degenerate(layer.rect)
            {
                continue;
            }
            if entries.iter().any(|e| e.layer.name == layer.name) {
                continue;
            }
            let exists = store.exists(&layer.name);
            entries.push(ExportEntry {
                layer,
                exists,
                overwrite: !exists,
            });
        }
        entries.sort_by(|a, b| a.layer.name.cmp(&b.layer.name));
        Self { entries }
    }

    pub fn entries(&self) -> &[ExportEntry<'a>] {
        &self.entries
    }

    pub fn entries_mut(&mut self) -> &mut [ExportEntry<'a>] {
        &mut self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Set the overwrite flag for a named entry.
    ///
    /// Returns `false` when the plan holds no entry with that name.
    pub fn set_overwrite(&mut self, name: &str, overwrite: bool) -> bool {
        match self.entries.iter_mut().find(|e| e.layer.name == name) {
            Some(entry) => {
                entry.overwrite = overwrite;
                true
            }
            None => false,
        }
    }

    /// Decode and save every entry flagged for overwrite.
    ///
    /// Returns the number of assets written. Entries whose pixels fail to
    /// decode are skipped without failing the commit.
    #[tracing::instrument(skip(self, store))]
    pub fn commit<S: SpriteStore>(&self, store: &mut S) -> ConvertResult<usize> {
        let mut written = 0;
        for entry in &self.entries {
            if !entry.overwrite {
                continue;
            }
            let Some(image) = decode_layer(entry.layer) else {
                tracing::warn!(layer = %entry.layer.name, "export entry not decodable, skipped");
                continue;
            };
            store.save(&entry.layer.name, &image)?;
            written += 1;
        }
        Ok(written)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/export.rs"]
mod tests;
