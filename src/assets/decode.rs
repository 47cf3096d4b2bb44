use crate::{
    assets::store::RasterImage,
    document::model::Layer,
    foundation::geom::truncated_extent,
};

/// Interleave per-channel planes into straight-alpha RGBA8.
///
/// Input planes store row 0 at the visual top; the output is vertically
/// flipped, so input row 0 becomes the output's last row. Absent alpha means
/// fully opaque. Each plane must hold exactly `width * height` bytes; callers
/// validate lengths before calling.
pub fn interleave_rgba(
    width: u32,
    height: u32,
    red: &[u8],
    green: &[u8],
    blue: &[u8],
    alpha: Option<&[u8]>,
) -> Vec<u8> {
    let w = width as usize;
    let h = height as usize;
    let len = w * h;
    debug_assert_eq!(red.len(), len);
    debug_assert_eq!(green.len(), len);
    debug_assert_eq!(blue.len(), len);
    if let Some(a) = alpha {
        debug_assert_eq!(a.len(), len);
    }

    let mut rgba = vec![0u8; len * 4];
    for src_row in 0..h {
        let dst_row = h - 1 - src_row;
        let src_base = src_row * w;
        let dst_bytes = &mut rgba[dst_row * w * 4..(dst_row + 1) * w * 4];
        for (col, px) in dst_bytes.chunks_exact_mut(4).enumerate() {
            let i = src_base + col;
            px[0] = red[i];
            px[1] = green[i];
            px[2] = blue[i];
            px[3] = alpha.map_or(255, |a| a[i]);
        }
    }
    rgba
}

/// Decode one layer's channel planes into a raster image.
///
/// Returns `None` rather than an error for every unresolvable case: invisible
/// layers, degenerate extents, missing channel data, and channel planes whose
/// length does not match the truncated extent. Widgets built from such layers
/// get a null graphic.
pub fn decode_layer(layer: &Layer) -> Option<RasterImage> {
    if !layer.visible {
        return None;
    }
    let (width, height) = truncated_extent(layer.rect);
    if width == 0 || height == 0 {
        return None;
    }
    let channels = layer.channels.as_ref()?;

    let expected = (width as usize) * (height as usize);
    let lengths_ok = channels.red.len() == expected
        && channels.green.len() == expected
        && channels.blue.len() == expected
        && channels.alpha.as_ref().is_none_or(|a| a.len() == expected);
    if !lengths_ok {
        return None;
    }

    let rgba8 = interleave_rgba(
        width,
        height,
        &channels.red,
        &channels.green,
        &channels.blue,
        channels.alpha.as_deref(),
    );
    Some(RasterImage {
        width,
        height,
        rgba8,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
