use super::*;
use crate::{
    assets::store::SpriteHandle,
    classify::widget::WidgetKind,
    foundation::geom::{Point, Rect},
    scene::host::{MemoryScene, NodeComponent},
};

fn canvas() -> Canvas {
    Canvas {
        width: 200,
        height: 100,
    }
}

fn handle(name: &str) -> Option<SpriteHandle> {
    Some(SpriteHandle {
        name: name.to_string(),
        width: 4,
        height: 4,
    })
}

fn image_widget(name: &str, path: &str, rect: Rect) -> WidgetDescriptor {
    WidgetDescriptor {
        name: name.to_string(),
        path: path.to_string(),
        rect,
        kind: WidgetKind::Image {
            sprite: handle(name),
        },
    }
}

#[test]
fn document_center_maps_to_scene_origin() {
    let mut scene = MemoryScene::new();
    // Rect centered at (100, 50), the canvas midpoint.
    let widgets = vec![image_widget(
        "icon",
        "",
        Rect::from_origin_size((90.0, 40.0), (20.0, 20.0)),
    )];

    assemble(&mut scene, canvas(), &widgets).unwrap();

    let icon = scene.find_path("icon").unwrap();
    assert_eq!(scene.local_position(icon), Point::new(0.0, 0.0));
}

#[test]
fn missing_ancestors_are_created() {
    let mut scene = MemoryScene::new();
    let widgets = vec![image_widget(
        "icon",
        "window/panel",
        Rect::from_origin_size((0.0, 0.0), (10.0, 10.0)),
    )];

    let stats = assemble(&mut scene, canvas(), &widgets).unwrap();

    assert_eq!(stats.nodes_created, 3);
    assert_eq!(stats.nodes_reused, 0);
    let icon = scene.find_path("window/panel/icon").unwrap();
    assert_eq!(scene.name(icon), "icon");
    // Ancestors keep the neutral transform.
    let panel = scene.find_path("window/panel").unwrap();
    assert_eq!(scene.local_position(panel), Point::ZERO);
}

#[test]
fn second_run_reuses_every_node() {
    let mut scene = MemoryScene::new();
    let widgets = vec![image_widget(
        "icon",
        "window/panel",
        Rect::from_origin_size((0.0, 0.0), (10.0, 10.0)),
    )];

    assemble(&mut scene, canvas(), &widgets).unwrap();
    let count_after_first = scene.node_count();
    let stats = assemble(&mut scene, canvas(), &widgets).unwrap();

    assert_eq!(stats.nodes_created, 0);
    assert_eq!(stats.nodes_reused, 3);
    assert_eq!(scene.node_count(), count_after_first);
}

#[test]
fn drifted_leaf_is_replaced_by_a_fresh_sibling() {
    let mut scene = MemoryScene::new();
    let widgets = vec![image_widget(
        "icon",
        "hud",
        Rect::from_origin_size((90.0, 40.0), (20.0, 20.0)),
    )];

    assemble(&mut scene, canvas(), &widgets).unwrap();
    let icon = scene.find_path("hud/icon").unwrap();
    scene.set_local_position(icon, Point::new(5.0, 5.0)).unwrap();

    assemble(&mut scene, canvas(), &widgets).unwrap();

    let hud = scene.find_path("hud").unwrap();
    let children = scene.children(hud).to_vec();
    assert_eq!(children.len(), 2);
    // The drifted node is abandoned where the user moved it; the replacement
    // sits at the computed position.
    assert_eq!(scene.local_position(children[0]), Point::new(5.0, 5.0));
    assert_eq!(scene.local_position(children[1]), Point::new(0.0, 0.0));

    // The first name match is still the drifted node, so every further run
    // adds one more sibling.
    assemble(&mut scene, canvas(), &widgets).unwrap();
    assert_eq!(scene.children(hud).len(), 3);
}

#[test]
fn attach_records_widget_payload() {
    let mut scene = MemoryScene::new();
    let widgets = vec![image_widget(
        "icon",
        "",
        Rect::from_origin_size((0.0, 0.0), (10.0, 10.0)),
    )];

    assemble(&mut scene, canvas(), &widgets).unwrap();

    let icon = scene.find_path("icon").unwrap();
    match scene.component(icon).unwrap() {
        NodeComponent::Image { sprite } => {
            assert_eq!(sprite.as_ref().unwrap().name, "icon");
        }
        other => panic!("expected an image component, got {other:?}"),
    }
}

#[test]
fn toggle_checkmark_child_is_created_once() {
    let mut scene = MemoryScene::new();
    let widgets = vec![WidgetDescriptor {
        name: "toggle_sound".to_string(),
        path: String::new(),
        rect: Rect::from_origin_size((0.0, 0.0), (24.0, 24.0)),
        kind: WidgetKind::Toggle {
            background: handle("sound_toggle_background"),
            checkmark: handle("sound_toggle_checkmark"),
        },
    }];

    assemble(&mut scene, canvas(), &widgets).unwrap();
    assemble(&mut scene, canvas(), &widgets).unwrap();

    let toggle = scene.find_path("toggle_sound").unwrap();
    let children = scene.children(toggle);
    assert_eq!(children.len(), 1);
    assert_eq!(scene.name(children[0]), "sound_toggle_checkmark");
}
