use super::*;
use crate::{document::model::ChannelSet, foundation::geom::Rect};

fn leaf(name: &str, w: f64, h: f64) -> Layer {
    Layer::raster(
        name,
        Rect::from_origin_size((0.0, 0.0), (w, h)),
        ChannelSet::default(),
    )
}

fn folder(name: &str) -> Layer {
    Layer::marker(name, SectionMarker::OpenFolder)
}

fn divider() -> Layer {
    Layer::marker("</Layer group>", SectionMarker::Divider)
}

#[test]
fn folder_scope_covers_its_leaves() {
    // Bottom-to-top: icon sits outside the panel folder, bg inside it.
    let layers = vec![
        leaf("icon", 10.0, 10.0),
        divider(),
        leaf("bg", 20.0, 20.0),
        folder("panel"),
    ];

    let pathed = reconstruct_paths(&layers).unwrap();
    let got: Vec<(&str, &str)> = pathed
        .iter()
        .map(|p| (p.layer.name.as_str(), p.path.as_str()))
        .collect();
    assert_eq!(got, vec![("icon", ""), ("bg", "panel")]);
}

#[test]
fn nested_folders_join_outermost_first() {
    let layers = vec![
        divider(),
        divider(),
        leaf("x", 4.0, 4.0),
        folder("b"),
        leaf("y", 4.0, 4.0),
        folder("a"),
    ];

    let pathed = reconstruct_paths(&layers).unwrap();
    let got: Vec<(&str, &str)> = pathed
        .iter()
        .map(|p| (p.layer.name.as_str(), p.path.as_str()))
        .collect();
    assert_eq!(got, vec![("x", "a/b"), ("y", "a")]);
}

#[test]
fn closed_and_plain_markers_open_scopes_too() {
    let layers = vec![
        divider(),
        leaf("inner", 2.0, 2.0),
        Layer::marker("closed", SectionMarker::ClosedFolder),
        divider(),
        leaf("other", 2.0, 2.0),
        Layer::marker("plain", SectionMarker::Layer),
    ];

    let pathed = reconstruct_paths(&layers).unwrap();
    let got: Vec<&str> = pathed.iter().map(|p| p.path.as_str()).collect();
    assert_eq!(got, vec!["closed", "plain"]);
}

#[test]
fn bottom_to_top_order_is_preserved() {
    let layers = vec![
        leaf("first", 1.0, 1.0),
        leaf("second", 1.0, 1.0),
        leaf("third", 1.0, 1.0),
    ];

    let pathed = reconstruct_paths(&layers).unwrap();
    let names: Vec<&str> = pathed.iter().map(|p| p.layer.name.as_str()).collect();
    assert_eq!(names, vec!["first", "second", "third"]);
}

#[test]
fn zero_area_leaves_are_dropped() {
    let layers = vec![
        leaf("wide_but_flat", 12.0, 0.0),
        leaf("kept", 3.0, 3.0),
        // 0.4 px truncates to zero width.
        leaf("sub_pixel", 0.4, 12.0),
    ];

    let pathed = reconstruct_paths(&layers).unwrap();
    let names: Vec<&str> = pathed.iter().map(|p| p.layer.name.as_str()).collect();
    assert_eq!(names, vec!["kept"]);
}

#[test]
fn text_leaves_survive_with_paths() {
    let layers = vec![
        divider(),
        Layer::text(
            "title",
            Rect::from_origin_size((5.0, 5.0), (60.0, 14.0)),
            crate::document::model::RichText::new("Hello", 14.0),
        ),
        folder("hud"),
    ];

    let pathed = reconstruct_paths(&layers).unwrap();
    assert_eq!(pathed.len(), 1);
    assert_eq!(pathed[0].path, "hud");
    assert!(pathed[0].layer.text.is_some());
}

#[test]
fn divider_without_open_folder_is_fatal() {
    let layers = vec![leaf("a", 1.0, 1.0), divider()];

    let err = reconstruct_paths(&layers).unwrap_err();
    assert!(matches!(err, ConvertError::Document(_)));
    assert!(err.to_string().contains("closes no open folder"));
}

#[test]
fn unclosed_folder_at_end_is_tolerated() {
    // The pass only rejects extra dividers; a dangling folder scope simply
    // ends with the document.
    let layers = vec![leaf("inner", 2.0, 2.0), folder("dangling")];

    let pathed = reconstruct_paths(&layers).unwrap();
    assert_eq!(pathed[0].path, "dangling");
}
