//! Codec boundary: decode image files into [`PixelBuffer`]s and encode them
//! back, via the `image` crate.
//!
//! Decoded buffers are always 8-bit interleaved with alpha as the last
//! channel when present.
use super::PixelBuffer;
use crate::error::{Error, Result};
use image::{DynamicImage, GrayAlphaImage, GrayImage, RgbImage, RgbaImage};
use std::fs;
use std::path::Path;

/// Decode the image at `path` into an interleaved 8-bit buffer.
///
/// Luma, luma+alpha, RGB and RGBA sources map to 1, 2, 3 and 4 channels;
/// deeper bit depths are converted down to 8 bits per channel.
pub fn load_image(path: &Path) -> Result<PixelBuffer> {
    let img = image::open(path).map_err(|e| codec_error(path, e))?;
    let (w, h) = (img.width() as usize, img.height() as usize);
    let (channels, data) = match img {
        DynamicImage::ImageLuma8(i) => (1, i.into_raw()),
        DynamicImage::ImageLumaA8(i) => (2, i.into_raw()),
        DynamicImage::ImageRgb8(i) => (3, i.into_raw()),
        DynamicImage::ImageRgba8(i) => (4, i.into_raw()),
        other if other.color().has_alpha() => (4, other.into_rgba8().into_raw()),
        other => (3, other.into_rgb8().into_raw()),
    };
    PixelBuffer::from_raw(w, h, channels, data)
}

/// Encode `buffer` to `path`, creating parent directories as needed.
///
/// Only 1-, 2-, 3- and 4-channel buffers have a codec representation; any
/// other channel count fails with [`Error::Format`].
pub fn save_image(buffer: &PixelBuffer, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let w = buffer.width() as u32;
    let h = buffer.height() as u32;
    let data = buffer.as_slice().to_vec();
    let img = match buffer.channels() {
        1 => GrayImage::from_raw(w, h, data).map(DynamicImage::ImageLuma8),
        2 => GrayAlphaImage::from_raw(w, h, data).map(DynamicImage::ImageLumaA8),
        3 => RgbImage::from_raw(w, h, data).map(DynamicImage::ImageRgb8),
        4 => RgbaImage::from_raw(w, h, data).map(DynamicImage::ImageRgba8),
        n => {
            return Err(Error::Format(format!(
                "cannot encode a {n}-channel buffer to {}",
                path.display()
            )))
        }
    }
    .ok_or_else(|| {
        Error::Format(format!(
            "buffer does not match its declared dimensions for {}",
            path.display()
        ))
    })?;
    img.save(path).map_err(|e| codec_error(path, e))
}

fn codec_error(path: &Path, err: image::ImageError) -> Error {
    match err {
        image::ImageError::IoError(e) => Error::Io(format!("{}: {e}", path.display())),
        other => Error::Format(format!("{}: {other}", path.display())),
    }
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Io(format!("failed to create {}: {e}", parent.display())))?;
        }
    }
    Ok(())
}
