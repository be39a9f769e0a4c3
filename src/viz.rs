//! Helpers for turning grids into something inspectable.
//!
//! Coefficient grids are not displayable as-is: their range is data
//! dependent and the detail bands hover around zero. [`normalize`] maps a
//! grid affinely onto `[0, 1]`; [`pseudo_color`] renders low-to-high
//! intensity as a red-to-green hue ramp, which makes faint structure easier
//! to see than gray levels.

use image::{Rgb, RgbImage};

use crate::{check_non_empty, Grid, Result};

fn min_max(grid: &Grid) -> (f32, f32) {
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for &v in grid.iter() {
        min = min.min(v);
        max = max.max(v);
    }
    (min, max)
}

/// Maps `grid` affinely so its minimum becomes 0.0 and its maximum 1.0.
///
/// A constant grid maps to all zeros.
pub fn normalize(grid: &Grid) -> Grid {
    let (min, max) = min_max(grid);
    let range = max - min;
    if range <= 0.0 {
        return Grid::zeros(grid.nrows(), grid.ncols());
    }
    grid.map(|v| (v - min) / range)
}

/// Hue in degrees to RGB at full saturation and value.
fn hue_to_rgb(hue: f32) -> (f32, f32, f32) {
    let h = (hue / 60.0).rem_euclid(6.0);
    let x = 1.0 - (h % 2.0 - 1.0).abs();
    match h as u32 {
        0 => (1.0, x, 0.0),
        1 => (x, 1.0, 0.0),
        2 => (0.0, 1.0, x),
        3 => (0.0, x, 1.0),
        4 => (x, 0.0, 1.0),
        _ => (1.0, 0.0, x),
    }
}

/// Renders `grid` as a false-color image: the minimum intensity maps to red
/// (hue 0), the maximum to green (hue 120).
pub fn pseudo_color(grid: &Grid) -> Result<RgbImage> {
    check_non_empty(grid)?;
    let (min, max) = min_max(grid);
    let range = if max > min { max - min } else { 1.0 };
    let (rows, cols) = grid.shape();
    Ok(RgbImage::from_fn(cols as u32, rows as u32, |x, y| {
        let v = (grid[(y as usize, x as usize)] - min) / range;
        let (r, g, b) = hue_to_rgb(v * 120.0);
        Rgb([(r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8])
    }))
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_spans_unit_interval() {
        let grid = Grid::from_row_slice(2, 2, &[-4.0, 0.0, 2.0, 4.0]);
        let n = normalize(&grid);
        assert_eq!(n[(0, 0)], 0.0);
        assert_eq!(n[(1, 1)], 1.0);
        assert!((n[(0, 1)] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn normalize_constant_grid() {
        let grid = Grid::from_element(3, 3, 0.7);
        assert!(normalize(&grid).iter().all(|&v| v == 0.0));
    }

    #[test]
    fn hue_ramp_endpoints() {
        assert_eq!(hue_to_rgb(0.0), (1.0, 0.0, 0.0));
        assert_eq!(hue_to_rgb(120.0), (0.0, 1.0, 0.0));
    }

    #[test]
    fn pseudo_color_extremes() {
        let grid = Grid::from_row_slice(1, 2, &[0.0, 1.0]);
        let img = pseudo_color(&grid).unwrap();
        assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0]);
        assert_eq!(img.get_pixel(1, 0).0, [0, 255, 0]);
    }
}
