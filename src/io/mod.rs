//! Decoding images into grids and encoding grids back into images.
//!
//! The intensity convention is fixed here, once: [`load_gray`] produces
//! values in `[0, 1]` and [`save_gray`] clamps into `[0, 1]` before
//! quantizing to 8 bits. Clamping on save is what absorbs interpolation and
//! detail-gain overshoot.

use image::{GrayImage, Luma};
use log::debug;

use crate::{Error, Grid, Result};

pub mod cli;

/// Loads the specified file as a grayscale [`Grid`].
///
/// Color images are converted to luma; 8- and 16-bit inputs both end up as
/// `[0, 1]` floats.
pub fn load_gray(name: &str) -> Result<Grid> {
    let img = image::io::Reader::open(name)?.decode()?;
    let gray = img.to_luma32f();
    let (width, height) = (gray.width() as usize, gray.height() as usize);
    if width == 0 || height == 0 {
        return Err(Error::EmptyGrid);
    }
    debug!("loaded {} as {}x{} grayscale", name, width, height);
    Ok(Grid::from_fn(height, width, |r, c| {
        gray.get_pixel(c as u32, r as u32)[0].clamp(0.0, 1.0)
    }))
}

/// Quantizes a `[0, 1]` intensity to 8 bits, clamping anything outside.
fn to_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Saves `grid` to the specified file, format chosen by extension.
pub fn save_gray(grid: &Grid, name: &str) -> Result {
    crate::check_non_empty(grid)?;
    let (rows, cols) = grid.shape();
    let img = GrayImage::from_fn(cols as u32, rows as u32, |x, y| {
        Luma([to_u8(grid[(y as usize, x as usize)])])
    });
    debug!("saving {}x{} grid to {}", rows, cols, name);
    Ok(img.save(name)?)
}

// ----------------------------------------------------------------------------
