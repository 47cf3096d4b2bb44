use crate::{
    classify::widget::WidgetDescriptor,
    foundation::{
        error::ConvertResult,
        geom::{Canvas, scene_position},
    },
    scene::host::SceneHost,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Node-level outcome counters for one assembly pass.
pub struct AssembleStats {
    /// Nodes created this pass: ancestors, leaves and drift replacements.
    pub nodes_created: u64,
    /// Existing nodes reused unchanged.
    pub nodes_reused: u64,
}

/// Materialize widget descriptors into the host scene graph.
///
/// Each descriptor path is walked from the root, finding or creating one node
/// per segment; the leaf is then found or created, positioned at the mapped
/// canvas-center coordinates, and handed the widget payload. An existing leaf
/// whose local position no longer matches the computed one is abandoned and
/// replaced by a fresh same-named sibling; nodes are never deleted.
///
/// Re-running an unchanged conversion reuses every node, leaving the stats
/// with zero creations.
pub fn assemble<H: SceneHost>(
    scene: &mut H,
    canvas: Canvas,
    widgets: &[WidgetDescriptor],
) -> ConvertResult<AssembleStats> {
    let mut stats = AssembleStats::default();

    for widget in widgets {
        let mut parent = scene.root();
        for segment in widget.path.split('/').filter(|s| !s.is_empty()) {
            parent = match scene.find_child(parent, segment) {
                Some(node) => {
                    stats.nodes_reused += 1;
                    node
                }
                None => {
                    stats.nodes_created += 1;
                    scene.create_child(parent, segment)?
                }
            };
        }

        let position = scene_position(canvas, widget.rect);
        let leaf = match scene.find_child(parent, &widget.name) {
            Some(node) if scene.local_position(node) == position => {
                stats.nodes_reused += 1;
                node
            }
            // Missing, or present at a drifted position. A drifted node is
            // abandoned in place and a fresh sibling takes over.
            _ => {
                stats.nodes_created += 1;
                let node = scene.create_child(parent, &widget.name)?;
                scene.set_local_position(node, position)?;
                node
            }
        };
        scene.attach_widget(leaf, widget)?;
    }

    Ok(stats)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/assembler.rs"]
mod tests;
