use crate::{
    assets::store::SpriteHandle,
    classify::widget::{WidgetDescriptor, WidgetKind},
    document::model::RichText,
    foundation::{
        error::{ConvertError, ConvertResult},
        geom::Point,
    },
};

/// Mutable view of a host scene graph.
///
/// The assembler drives conversions through this trait: it finds or creates
/// nodes by name, positions them, and attaches widget payloads. Hosts map the
/// calls onto their own scene objects; [`MemoryScene`] is the in-process
/// implementation used by tests and dry runs.
///
/// The assembler never deletes nodes, so no removal API exists.
pub trait SceneHost {
    /// Node identity, valid for the lifetime of the host value.
    type NodeId: Copy + Eq + std::fmt::Debug;

    /// Root node conversions are anchored under.
    fn root(&self) -> Self::NodeId;

    /// First child of `parent` with exactly this name, if any.
    fn find_child(&self, parent: Self::NodeId, name: &str) -> Option<Self::NodeId>;

    /// Create a child of `parent` with the host's neutral default transform.
    fn create_child(&mut self, parent: Self::NodeId, name: &str) -> ConvertResult<Self::NodeId>;

    /// Current local position of a node.
    fn local_position(&self, node: Self::NodeId) -> Point;

    /// Move a node to a new local position.
    fn set_local_position(&mut self, node: Self::NodeId, position: Point) -> ConvertResult<()>;

    /// Attach a widget payload to a placed node.
    fn attach_widget(
        &mut self,
        node: Self::NodeId,
        widget: &WidgetDescriptor,
    ) -> ConvertResult<()>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Identifier of a [`MemoryScene`] node.
///
/// Ids index an arena that never shrinks; every issued id stays valid.
pub struct MemoryNodeId(usize);

#[derive(Clone, Debug, PartialEq)]
/// Widget payload recorded on a memory scene node.
pub enum NodeComponent {
    /// Sprite graphic.
    Image { sprite: Option<SpriteHandle> },
    /// Text label.
    Label { rich: RichText, font: String },
    /// Multi-state button graphics.
    Button {
        normal: Option<SpriteHandle>,
        pressed: Option<SpriteHandle>,
        highlighted: Option<SpriteHandle>,
        disabled: Option<SpriteHandle>,
    },
    /// Toggle graphics; the checkmark also gets its own child node.
    Toggle {
        background: Option<SpriteHandle>,
        checkmark: Option<SpriteHandle>,
    },
}

#[derive(Clone, Debug)]
struct MemoryNode {
    name: String,
    parent: Option<MemoryNodeId>,
    children: Vec<MemoryNodeId>,
    position: Point,
    component: Option<NodeComponent>,
}

#[derive(Clone, Debug)]
/// Arena-backed in-process scene graph.
///
/// Ships with a single root named [`MemoryScene::ROOT_NAME`], matching the
/// canvas object conversions are anchored under in real hosts.
pub struct MemoryScene {
    nodes: Vec<MemoryNode>,
}

impl MemoryScene {
    /// Name of the prebuilt root node.
    pub const ROOT_NAME: &'static str = "Canvas";

    pub fn new() -> Self {
        Self {
            nodes: vec![MemoryNode {
                name: Self::ROOT_NAME.to_string(),
                parent: None,
                children: Vec::new(),
                position: Point::ZERO,
                component: None,
            }],
        }
    }

    /// Total node count, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Name of a node.
    pub fn name(&self, node: MemoryNodeId) -> &str {
        &self.nodes[node.0].name
    }

    /// Parent of a node; `None` for the root.
    pub fn parent(&self, node: MemoryNodeId) -> Option<MemoryNodeId> {
        self.nodes[node.0].parent
    }

    /// Children of a node in creation order.
    pub fn children(&self, node: MemoryNodeId) -> &[MemoryNodeId] {
        &self.nodes[node.0].children
    }

    /// Widget payload attached to a node, if any.
    pub fn component(&self, node: MemoryNodeId) -> Option<&NodeComponent> {
        self.nodes[node.0].component.as_ref()
    }

    /// Walk `/`-separated segments from the root, binding to the first name
    /// match at each level.
    pub fn find_path(&self, path: &str) -> Option<MemoryNodeId> {
        let mut node = self.root();
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            node = self.find_child(node, segment)?;
        }
        Some(node)
    }

    fn node_mut(&mut self, node: MemoryNodeId) -> ConvertResult<&mut MemoryNode> {
        let index = node.0;
        self.nodes
            .get_mut(index)
            .ok_or_else(|| ConvertError::scene(format!("unknown scene node id {index}")))
    }
}

impl Default for MemoryScene {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneHost for MemoryScene {
    type NodeId = MemoryNodeId;

    fn root(&self) -> MemoryNodeId {
        MemoryNodeId(0)
    }

    fn find_child(&self, parent: MemoryNodeId, name: &str) -> Option<MemoryNodeId> {
        self.nodes[parent.0]
            .children
            .iter()
            .copied()
            .find(|&child| self.nodes[child.0].name == name)
    }

    fn create_child(&mut self, parent: MemoryNodeId, name: &str) -> ConvertResult<MemoryNodeId> {
        let id = MemoryNodeId(self.nodes.len());
        self.nodes.push(MemoryNode {
            name: name.to_string(),
            parent: Some(parent),
            children: Vec::new(),
            position: Point::ZERO,
            component: None,
        });
        self.node_mut(parent)?.children.push(id);
        Ok(id)
    }

    fn local_position(&self, node: MemoryNodeId) -> Point {
        self.nodes[node.0].position
    }

    fn set_local_position(&mut self, node: MemoryNodeId, position: Point) -> ConvertResult<()> {
        self.node_mut(node)?.position = position;
        Ok(())
    }

    fn attach_widget(
        &mut self,
        node: MemoryNodeId,
        widget: &WidgetDescriptor,
    ) -> ConvertResult<()> {
        let component = match &widget.kind {
            WidgetKind::Image { sprite } => NodeComponent::Image {
                sprite: sprite.clone(),
            },
            WidgetKind::Text { rich, font } => NodeComponent::Label {
                rich: rich.clone(),
                font: font.clone(),
            },
            WidgetKind::Button {
                normal,
                pressed,
                highlighted,
                disabled,
            } => NodeComponent::Button {
                normal: normal.clone(),
                pressed: pressed.clone(),
                highlighted: highlighted.clone(),
                disabled: disabled.clone(),
            },
            WidgetKind::Toggle {
                background,
                checkmark,
            } => {
                // The checkmark graphic lives on its own child node.
                if let Some(mark) = checkmark
                    && self.find_child(node, &mark.name).is_none()
                {
                    self.create_child(node, &mark.name)?;
                }
                NodeComponent::Toggle {
                    background: background.clone(),
                    checkmark: checkmark.clone(),
                }
            }
        };
        self.node_mut(node)?.component = Some(component);
        Ok(())
    }
}
