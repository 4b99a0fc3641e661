//! Convenience helpers for loading and saving images via the `image` crate.
//!
//! Available when the `image-io` feature is enabled.

use crate::image::{ColorView, OwnedColorImage, OwnedImage};
use crate::util::{EdgeFxError, EdgeFxResult};
use std::path::Path;

/// Creates a borrowed color view from an RGB image buffer.
pub fn color_view_from_rgb_image(img: &image::RgbImage) -> EdgeFxResult<ColorView<'_, u8>> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    ColorView::from_slice(img.as_raw(), width, height)
}

/// Creates an owned RGB image from a dynamic image, dropping any alpha channel.
pub fn owned_from_dynamic_image(img: &image::DynamicImage) -> EdgeFxResult<OwnedColorImage> {
    let rgb = img.to_rgb8();
    let width = rgb.width() as usize;
    let height = rgb.height() as usize;
    OwnedColorImage::new(rgb.into_raw(), width, height)
}

/// Loads an image from disk and converts it to an owned RGB image.
pub fn load_rgb_image<P: AsRef<Path>>(path: P) -> EdgeFxResult<OwnedColorImage> {
    let img = image::open(path).map_err(|err| EdgeFxError::ImageIo {
        reason: err.to_string(),
    })?;
    owned_from_dynamic_image(&img)
}

/// Copies a filter result into an `image::GrayImage`.
pub fn to_gray_image(img: &OwnedImage<u8>) -> EdgeFxResult<image::GrayImage> {
    let width = u32::try_from(img.width()).map_err(|_| EdgeFxError::InvalidDimensions {
        width: img.width(),
        height: img.height(),
    })?;
    let height = u32::try_from(img.height()).map_err(|_| EdgeFxError::InvalidDimensions {
        width: img.width(),
        height: img.height(),
    })?;
    image::GrayImage::from_raw(width, height, img.data().to_vec()).ok_or(
        EdgeFxError::BufferSizeMismatch {
            expected: img.width() * img.height(),
            got: img.data().len(),
        },
    )
}

/// Encodes a filter result to disk; the format follows the file extension.
pub fn save_gray_image<P: AsRef<Path>>(path: P, img: &OwnedImage<u8>) -> EdgeFxResult<()> {
    to_gray_image(img)?
        .save(path)
        .map_err(|err| EdgeFxError::ImageIo {
            reason: err.to_string(),
        })
}
