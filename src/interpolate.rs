//! Bicubic interpolation of a grid at continuous coordinates.
//!
//! The grid is treated as samples of a continuous intensity surface.
//! Out-of-range sample indices are replaced by the nearest valid index
//! (replicate-edge policy), so coordinates outside the grid are legal inputs
//! and interpolate to border values.

use crate::{check_non_empty, Grid, Result};

/// Cubic convolution through four consecutive samples.
///
/// `t` is the fractional position between `p[1]` and `p[2]`. The polynomial
/// is exact at the ends: `t = 0` returns `p[1]` and `t = 1` returns `p[2]`.
fn cubic(p: [f32; 4], t: f32) -> f32 {
    p[1] + 0.5
        * t
        * (p[2] - p[0]
            + t * (2.0 * p[0] - 5.0 * p[1] + 4.0 * p[2] - p[3]
                + t * (3.0 * (p[1] - p[2]) + p[3] - p[0])))
}

/// Clamps a possibly out-of-range index into `[0, len)`.
fn clamp_index(i: i64, len: usize) -> usize {
    i.clamp(0, len as i64 - 1) as usize
}

/// Interpolates `grid` at the continuous coordinate `(x, y)`, where `x`
/// addresses columns and `y` addresses rows.
///
/// Gathers the 4x4 neighborhood around `(x, y)`, interpolates each of the
/// four rows along x, then interpolates those four values along y. Sixteen
/// samples and five cubic evaluations per call.
pub fn bicubic(grid: &Grid, x: f32, y: f32) -> Result<f32> {
    check_non_empty(grid)?;
    Ok(sample(grid, x, y))
}

/// `bicubic` without the emptiness check, for callers that validate once and
/// then evaluate per pixel.
pub(crate) fn sample(grid: &Grid, x: f32, y: f32) -> f32 {
    let (rows, cols) = grid.shape();
    let xi = x.floor();
    let yi = y.floor();
    let fx = x - xi;
    let fy = y - yi;

    let mut column = [0.0; 4];
    for (j, value) in column.iter_mut().enumerate() {
        let row = clamp_index(yi as i64 + j as i64 - 1, rows);
        let mut p = [0.0; 4];
        for (i, sample) in p.iter_mut().enumerate() {
            let col = clamp_index(xi as i64 + i as i64 - 1, cols);
            *sample = grid[(row, col)];
        }
        *value = cubic(p, fx);
    }
    cubic(column, fy)
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn cubic_exact_at_ends() {
        let p = [3.0, 7.0, -2.0, 5.0];
        assert_eq!(cubic(p, 0.0), 7.0);
        assert_eq!(cubic(p, 1.0), -2.0);
    }

    #[test]
    fn cubic_linear_data() {
        // A cubic through collinear points reproduces the line.
        let p = [1.0, 2.0, 3.0, 4.0];
        assert!((cubic(p, 0.5) - 2.5).abs() < 1e-6);
        assert!((cubic(p, 0.25) - 2.25).abs() < 1e-6);
    }

    #[test]
    fn exact_at_integer_coordinates() {
        let grid = Grid::from_fn(5, 6, |r, c| (r * 6 + c) as f32);
        for r in 0..5 {
            for c in 0..6 {
                let v = bicubic(&grid, c as f32, r as f32).unwrap();
                assert!(
                    (v - grid[(r, c)]).abs() < 1e-5,
                    "mismatch at ({}, {}): {} vs {}",
                    r,
                    c,
                    v,
                    grid[(r, c)]
                );
            }
        }
    }

    #[test]
    fn clamps_to_border() {
        // Distinct values on every border so a wrong clamp is visible.
        let grid = Grid::from_fn(4, 4, |r, c| (10 * r + c) as f32);
        let top_left = bicubic(&grid, 0.0, 0.0).unwrap();
        assert_eq!(bicubic(&grid, -5.0, 0.0).unwrap(), top_left);
        assert_eq!(bicubic(&grid, 0.0, -5.0).unwrap(), top_left);
        let bottom_right = bicubic(&grid, 3.0, 3.0).unwrap();
        assert_eq!(bicubic(&grid, 9.0, 3.0).unwrap(), bottom_right);
        assert_eq!(bicubic(&grid, 3.0, 9.0).unwrap(), bottom_right);
    }

    #[test]
    fn empty_grid_rejected() {
        let grid = Grid::zeros(0, 4);
        assert!(matches!(bicubic(&grid, 0.0, 0.0), Err(Error::EmptyGrid)));
    }
}
