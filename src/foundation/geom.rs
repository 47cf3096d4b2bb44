//! Geometry vocabulary and the document-to-scene coordinate mapping.

pub use kurbo::{Point, Rect, Size, Vec2};

/// Output canvas dimensions in document pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

/// Map a document-space rectangle's center into scene space.
///
/// Document space puts the origin at the top-left corner with y growing downward.
/// Scene space puts the origin at the canvas center with y growing upward.
pub fn scene_position(canvas: Canvas, rect: Rect) -> Point {
    let center = rect.center();
    Point::new(
        center.x - f64::from(canvas.width) / 2.0,
        f64::from(canvas.height) / 2.0 - center.y,
    )
}

/// Width and height of a rectangle truncated to whole document pixels.
pub fn truncated_extent(rect: Rect) -> (u32, u32) {
    (rect.width().max(0.0) as u32, rect.height().max(0.0) as u32)
}

/// Whether a rectangle spans less than one whole pixel in either dimension.
///
/// Degenerate layers never produce widgets or sprites.
pub fn is_degenerate(rect: Rect) -> bool {
    let (w, h) = truncated_extent(rect);
    w == 0 || h == 0
}
