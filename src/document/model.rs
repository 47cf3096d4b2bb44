use crate::foundation::{
    error::{ConvertError, ConvertResult},
    geom::{Canvas, Rect},
};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// A fully parsed layered document.
///
/// This is the converter's only input: a pure data model that hosts build from
/// whatever parser they use. Layers are stored in file order, which is
/// **bottom-to-top** in visual stacking terms; the hierarchy pass consumes them
/// reversed.
pub struct Document {
    /// Output canvas dimensions in document pixels.
    pub canvas: Canvas,
    /// Flat layer list, bottom-to-top.
    pub layers: Vec<Layer>,
}

impl Document {
    pub fn new(canvas: Canvas, layers: Vec<Layer>) -> Self {
        Self { canvas, layers }
    }

    /// Check structural invariants that hold independently of any conversion run.
    pub fn validate(&self) -> ConvertResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(ConvertError::document(format!(
                "canvas extent must be positive, got {}x{}",
                self.canvas.width, self.canvas.height
            )));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// One layer of the input document.
///
/// A layer is either a content leaf (raster pixels or rich text) or a section
/// marker driving folder reconstruction. Layers are immutable inputs; the
/// converter never writes them back.
pub struct Layer {
    /// Layer name as authored in the source document.
    pub name: String,
    /// Bounding rectangle in document pixel space (origin top-left, y down).
    pub rect: Rect,
    /// Authored visibility flag. Invisible leaves classify normally but their
    /// pixels are never decoded.
    #[serde(default = "default_visible")]
    pub visible: bool,
    /// Per-channel pixel data; absent on markers and text layers.
    #[serde(default)]
    pub channels: Option<ChannelSet>,
    /// Section marker role, when this layer is a grouping marker.
    #[serde(default)]
    pub section: Option<SectionMarker>,
    /// Rich-text payload, when this layer is a text layer.
    #[serde(default)]
    pub text: Option<RichText>,
}

fn default_visible() -> bool {
    true
}

impl Layer {
    /// Raster content leaf with per-channel pixel data.
    pub fn raster(name: impl Into<String>, rect: Rect, channels: ChannelSet) -> Self {
        Self {
            name: name.into(),
            rect,
            visible: true,
            channels: Some(channels),
            section: None,
            text: None,
        }
    }

    /// Text content leaf carrying a rich-text payload.
    pub fn text(name: impl Into<String>, rect: Rect, text: RichText) -> Self {
        Self {
            name: name.into(),
            rect,
            visible: true,
            channels: None,
            section: None,
            text: Some(text),
        }
    }

    /// Non-visual section marker.
    pub fn marker(name: impl Into<String>, kind: SectionMarker) -> Self {
        Self {
            name: name.into(),
            rect: Rect::ZERO,
            visible: true,
            channels: None,
            section: Some(kind),
            text: None,
        }
    }

    /// Same layer with the visibility flag cleared.
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Section marker roles, as stored in PSD-style section dividers.
///
/// `Layer`, `OpenFolder` and `ClosedFolder` open a folder scope named after the
/// marker layer; `Divider` closes the innermost open scope.
pub enum SectionMarker {
    /// Folder start recorded with a plain layer marker.
    Layer,
    /// Folder start shown expanded in the source editor.
    OpenFolder,
    /// Folder start shown collapsed in the source editor.
    ClosedFolder,
    /// Folder end.
    Divider,
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
/// Per-channel pixel planes for one raster layer.
///
/// Each plane stores `width * height` bytes in row-major order with row 0 at
/// the visual top. Alpha is optional; absent alpha means fully opaque.
pub struct ChannelSet {
    pub red: Vec<u8>,
    pub green: Vec<u8>,
    pub blue: Vec<u8>,
    #[serde(default)]
    pub alpha: Option<Vec<u8>>,
}

impl ChannelSet {
    /// Channel planes for an opaque layer.
    pub fn rgb(red: Vec<u8>, green: Vec<u8>, blue: Vec<u8>) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: None,
        }
    }

    /// Channel planes with an explicit alpha plane.
    pub fn rgba(red: Vec<u8>, green: Vec<u8>, blue: Vec<u8>, alpha: Vec<u8>) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: Some(alpha),
        }
    }

    /// Solid single-color fill covering `width * height` pixels.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            red: vec![rgba[0]; len],
            green: vec![rgba[1]; len],
            blue: vec![rgba[2]; len],
            alpha: Some(vec![rgba[3]; len]),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Rich-text payload carried by text layers.
pub struct RichText {
    /// UTF-8 text content.
    pub text: String,
    /// Font size in document pixels.
    pub size_px: f32,
    /// Fill color as straight-alpha RGBA8.
    #[serde(default = "default_text_color")]
    pub color_rgba8: [u8; 4],
    /// Paragraph alignment.
    #[serde(default)]
    pub align: TextAlign,
}

fn default_text_color() -> [u8; 4] {
    [255, 255, 255, 255]
}

impl RichText {
    pub fn new(text: impl Into<String>, size_px: f32) -> Self {
        Self {
            text: text.into(),
            size_px,
            color_rgba8: default_text_color(),
            align: TextAlign::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Paragraph alignment for text layers.
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}
