//! Rescaling and rectangular extraction of grids.

use std::str::FromStr;

use crate::{check_non_empty, interpolate, Error, Grid, Result};

/// Fails with [`Error::NonPositiveParameter`] unless `value > 0`.
///
/// NaN also fails: a NaN scale would silently produce a zero-sized grid.
fn check_positive(name: &'static str, value: f32) -> Result {
    if !(value > 0.0) {
        return Err(Error::NonPositiveParameter { name, value });
    }
    Ok(())
}

/// Output dimensions for rescaling by `scale`: `floor(dim * scale)` per axis.
fn scaled_shape(grid: &Grid, scale: f32) -> (usize, usize) {
    let (rows, cols) = grid.shape();
    ((rows as f32 * scale) as usize, (cols as f32 * scale) as usize)
}

/// Enlarges (or shrinks) `grid` by `scale` using bicubic interpolation.
///
/// Every destination pixel `(row, col)` samples the source at the continuous
/// coordinate `(col / scale, row / scale)`. Output values are not rounded or
/// clamped; values outside the source range can occur near strong edges and
/// are the saver's problem.
pub fn upsample_bicubic(grid: &Grid, scale: f32) -> Result<Grid> {
    check_positive("scale factor", scale)?;
    check_non_empty(grid)?;
    let (new_rows, new_cols) = scaled_shape(grid, scale);
    Ok(Grid::from_fn(new_rows, new_cols, |r, c| {
        interpolate::sample(grid, c as f32 / scale, r as f32 / scale)
    }))
}

/// Rescales `grid` by `scale` using nearest-neighbor lookup.
///
/// Cheaper and blockier than [`upsample_bicubic`]; same output geometry.
pub fn scale_nearest(grid: &Grid, scale: f32) -> Result<Grid> {
    check_positive("scale factor", scale)?;
    check_non_empty(grid)?;
    let (rows, cols) = grid.shape();
    let (new_rows, new_cols) = scaled_shape(grid, scale);
    Ok(Grid::from_fn(new_rows, new_cols, |r, c| {
        let src_r = ((r as f32 / scale) as usize).min(rows - 1);
        let src_c = ((c as f32 / scale) as usize).min(cols - 1);
        grid[(src_r, src_c)]
    }))
}

// ----------------------------------------------------------------------------

/// A rectangular region of a grid, in row/column bounds.
///
/// `bottom` and `right` are exclusive. This is the hand-off format for
/// anything that selects part of an image (interactively or otherwise):
/// the selection happens elsewhere, the core only sees the rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub top: usize,
    pub left: usize,
    pub bottom: usize,
    pub right: usize,
}

impl FromStr for Region {
    type Err = Error;

    /// Parses `"top,left,bottom,right"` with no spaces.
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<_> = s.splitn(4, ',').collect();
        if parts.len() != 4 {
            return Err(Error::InvalidRegion(
                "expected top,left,bottom,right with no spaces",
            ));
        }
        let mut bounds = [0; 4];
        for (bound, part) in bounds.iter_mut().zip(&parts) {
            *bound = part
                .parse()
                .map_err(|_| Error::InvalidRegion("bounds must be non-negative integers"))?;
        }
        let [top, left, bottom, right] = bounds;
        Ok(Region { top, left, bottom, right })
    }
}

/// Copies the samples of `region` out of `grid`.
pub fn crop(grid: &Grid, region: &Region) -> Result<Grid> {
    check_non_empty(grid)?;
    let (rows, cols) = grid.shape();
    if region.top >= region.bottom || region.left >= region.right {
        return Err(Error::InvalidRegion("region is empty or inverted"));
    }
    if region.bottom > rows || region.right > cols {
        return Err(Error::InvalidRegion("region extends past the grid"));
    }
    let shape = (region.bottom - region.top, region.right - region.left);
    Ok(grid.view((region.top, region.left), shape).into_owned())
}

/// Removes the last row and/or column as needed to make both dimensions even.
///
/// The wavelet transform rejects odd dimensions, so callers that take
/// arbitrary images crop first. A grid with fewer than two rows or columns
/// becomes empty.
pub fn crop_to_even(grid: &Grid) -> Grid {
    let (rows, cols) = grid.shape();
    grid.view((0, 0), (rows & !1, cols & !1)).into_owned()
}

// ----------------------------------------------------------------------------
