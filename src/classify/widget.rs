use crate::{assets::store::SpriteHandle, document::model::RichText, foundation::geom::Rect};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One classified widget, ready for scene assembly.
pub struct WidgetDescriptor {
    /// Node name: the layer name for leaves, the folder name for composites.
    pub name: String,
    /// Ancestor path the node is anchored under (`/`-joined, outermost first).
    pub path: String,
    /// Anchor rectangle in document space. Always non-degenerate: layers that
    /// truncate to a zero extent never reach classification.
    pub rect: Rect,
    /// Widget payload.
    pub kind: WidgetKind,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Closed union of widget payloads.
///
/// Any handle may be `None` when its source layer could not be decoded; hosts
/// render a null graphic in that case.
pub enum WidgetKind {
    /// Plain sprite graphic.
    Image { sprite: Option<SpriteHandle> },
    /// Text label.
    Text {
        rich: RichText,
        /// Font name supplied by configuration.
        font: String,
    },
    /// Multi-state button assembled from role-named siblings.
    Button {
        normal: Option<SpriteHandle>,
        pressed: Option<SpriteHandle>,
        highlighted: Option<SpriteHandle>,
        disabled: Option<SpriteHandle>,
    },
    /// Two-part toggle assembled from role-named siblings.
    Toggle {
        background: Option<SpriteHandle>,
        checkmark: Option<SpriteHandle>,
    },
}
