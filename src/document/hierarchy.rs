use crate::{
    document::model::{Layer, SectionMarker},
    foundation::{
        error::{ConvertError, ConvertResult},
        geom::is_degenerate,
    },
};

/// A content leaf bound to its reconstructed folder path.
#[derive(Clone, Debug)]
pub struct PathedLayer<'a> {
    /// The source leaf layer.
    pub layer: &'a Layer,
    /// `/`-joined ancestor folder names, outermost first; empty at the document root.
    pub path: String,
}

/// Rebuild folder paths for every surviving content leaf.
///
/// Layers are stored bottom-to-top, so the pass walks them reversed (visual
/// top-to-bottom): `Layer`, `OpenFolder` and `ClosedFolder` markers open a
/// folder scope named after the marker layer, `Divider` closes the innermost
/// scope. A divider with no open scope is a fatal document error.
///
/// Content leaves whose int-truncated extent is zero in either dimension are
/// dropped here, before classification ever sees them. The returned list is in
/// original bottom-to-top order.
pub fn reconstruct_paths(layers: &[Layer]) -> ConvertResult<Vec<PathedLayer<'_>>> {
    let mut stack: Vec<&str> = Vec::new();
    let mut pathed = Vec::new();

    for layer in layers.iter().rev() {
        match layer.section {
            Some(
                SectionMarker::Layer | SectionMarker::OpenFolder | SectionMarker::ClosedFolder,
            ) => {
                stack.push(layer.name.as_str());
            }
            Some(SectionMarker::Divider) => {
                if stack.pop().is_none() {
                    return Err(ConvertError::document(format!(
                        "section divider at layer '{}' closes no open folder",
                        layer.name
                    )));
                }
            }
            None => {
                if is_degenerate(layer.rect) {
                    continue;
                }
                pathed.push(PathedLayer {
                    layer,
                    path: stack.join("/"),
                });
            }
        }
    }

    pathed.reverse();
    Ok(pathed)
}

#[cfg(test)]
#[path = "../../tests/unit/document/hierarchy.rs"]
mod tests;
