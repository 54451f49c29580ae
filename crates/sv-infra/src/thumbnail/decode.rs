use anyhow::{Context, Result};
use image::{imageops::FilterType, GenericImageView};
use sv_core::Thumbnail;

/// Decode image bytes into an RGBA thumbnail, downscaling so that neither
/// edge exceeds `max_edge`. A `max_edge` of 0 keeps the original size.
pub(super) fn decode_thumbnail(image_bytes: &[u8], max_edge: u32) -> Result<Thumbnail> {
    let decoded = image::load_from_memory(image_bytes).context("decode thumbnail bytes")?;
    let (original_width, original_height) = decoded.dimensions();
    let (target_width, target_height) =
        calculate_target_size(original_width, original_height, max_edge);

    let resized = if target_width == original_width && target_height == original_height {
        decoded
    } else {
        image::DynamicImage::ImageRgba8(image::imageops::resize(
            &decoded,
            target_width,
            target_height,
            FilterType::Triangle,
        ))
    };

    let rgba = resized.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(Thumbnail::new(width, height, rgba.into_raw()))
}

fn calculate_target_size(width: u32, height: u32, max_edge: u32) -> (u32, u32) {
    if max_edge == 0 || (width <= max_edge && height <= max_edge) {
        return (width, height);
    }

    if width >= height {
        let scaled_height = ((height as f64) * (max_edge as f64) / (width as f64)).round() as u32;
        (max_edge, scaled_height.max(1))
    } else {
        let scaled_width = ((width as f64) * (max_edge as f64) / (height as f64)).round() as u32;
        (scaled_width.max(1), max_edge)
    }
}
