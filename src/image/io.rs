//! Convenience helpers for loading images via the `image` crate.
//!
//! Available when the `image-io` feature is enabled. Inputs are converted to
//! interleaved RGB8, the layout the matcher consumes.

use crate::image::OwnedImage;
use crate::util::{NeedleMatchError, NeedleMatchResult};
use std::path::Path;

/// Creates an owned image from an RGB8 image buffer.
pub fn owned_from_rgb_image(img: &image::RgbImage) -> NeedleMatchResult<OwnedImage> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    OwnedImage::new(img.as_raw().clone(), width, height, 3)
}

/// Creates an owned RGB image from a dynamic image.
pub fn owned_from_dynamic_image(img: &image::DynamicImage) -> NeedleMatchResult<OwnedImage> {
    let rgb = img.to_rgb8();
    owned_from_rgb_image(&rgb)
}

/// Loads an image from disk and converts it to an owned RGB image.
pub fn load_rgb_image<P: AsRef<Path>>(path: P) -> NeedleMatchResult<OwnedImage> {
    let img = image::open(path).map_err(|err| NeedleMatchError::ImageIo {
        reason: err.to_string(),
    })?;
    owned_from_dynamic_image(&img)
}
