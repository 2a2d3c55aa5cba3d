//! Converting finished frames into images.

use std::path::Path;

use image::{Rgb, RgbImage};

use crate::render::FrameBuffer;

/// Copies the frame's color grid into an RGB image of the same size.
pub fn to_image(frame: &FrameBuffer) -> RgbImage {
    let width = frame.width();
    RgbImage::from_fn(width, frame.height(), |x, y| {
        let c = frame.colors()[(y * width + x) as usize];
        Rgb([c.r, c.g, c.b])
    })
}

/// Saves the frame to `path`; the format follows the file extension.
pub fn save_png<P: AsRef<Path>>(frame: &FrameBuffer, path: P) -> Result<(), image::ImageError> {
    let path = path.as_ref();
    to_image(frame).save(path)?;
    log::info!(
        "wrote {}x{} frame to {}",
        frame.width(),
        frame.height(),
        path.display()
    );
    Ok(())
}
