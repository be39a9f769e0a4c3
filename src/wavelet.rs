//! Separable 2D Haar wavelet transform, forward and inverse, plus a gain
//! step on the detail sub-bands.
//!
//! The orthonormal Haar basis is used: each pair of samples becomes a sum
//! and a difference, both scaled by `1/sqrt(2)`, so energy is preserved and
//! the inverse undoes the forward exactly up to floating-point rounding.
//!
//! A transformed grid with even dimensions splits into four quadrants:
//!
//! ```text
//! +----+----+
//! | LL | LH |     LL approximation, LH horizontal detail,
//! +----+----+     HL vertical detail, HH diagonal detail.
//! | HL | HH |
//! +----+----+
//! ```
//!
//! The decomposition is single-level: it is applied exactly once, never
//! recursively into the LL band. Odd dimensions are rejected rather than
//! padded; see [`crate::resample::crop_to_even`].

use std::f32::consts::SQRT_2;

use crate::{check_non_empty, Error, Grid, Result};

/// Fails with [`Error::InvalidDimension`] unless both dimensions are even.
fn check_even(grid: &Grid) -> Result {
    let (rows, cols) = grid.shape();
    if rows % 2 != 0 || cols % 2 != 0 {
        return Err(Error::InvalidDimension { rows, cols });
    }
    Ok(())
}

// ----------------------------------------------------------------------------
// 1D butterflies. Callers guarantee even length.

/// One forward Haar pass: `[s0, s1, s2, s3, ...]` becomes
/// `[approximations..., details...]`.
fn forward_1d(signal: &[f32]) -> Vec<f32> {
    let half = signal.len() / 2;
    let mut out = vec![0.0; signal.len()];
    for i in 0..half {
        out[i] = (signal[2 * i] + signal[2 * i + 1]) / SQRT_2;
        out[half + i] = (signal[2 * i] - signal[2 * i + 1]) / SQRT_2;
    }
    out
}

/// Undoes [`forward_1d`].
fn inverse_1d(coeffs: &[f32]) -> Vec<f32> {
    let half = coeffs.len() / 2;
    let mut out = vec![0.0; coeffs.len()];
    for i in 0..half {
        out[2 * i] = (coeffs[i] + coeffs[half + i]) / SQRT_2;
        out[2 * i + 1] = (coeffs[i] - coeffs[half + i]) / SQRT_2;
    }
    out
}

// ----------------------------------------------------------------------------
// 2D separable passes.

fn transform_rows(grid: &mut Grid, pass: fn(&[f32]) -> Vec<f32>) {
    for r in 0..grid.nrows() {
        let row: Vec<f32> = grid.row(r).iter().copied().collect();
        grid.row_mut(r).copy_from_slice(&pass(&row));
    }
}

fn transform_columns(grid: &mut Grid, pass: fn(&[f32]) -> Vec<f32>) {
    for c in 0..grid.ncols() {
        let column: Vec<f32> = grid.column(c).iter().copied().collect();
        grid.column_mut(c).copy_from_slice(&pass(&column));
    }
}

/// Forward 2D Haar transform: every row, then every column.
///
/// Requires even dimensions in both axes.
pub fn haar_2d(grid: &Grid) -> Result<Grid> {
    check_non_empty(grid)?;
    check_even(grid)?;
    let mut coeffs = grid.clone();
    transform_rows(&mut coeffs, forward_1d);
    transform_columns(&mut coeffs, forward_1d);
    Ok(coeffs)
}

/// Inverse 2D Haar transform: every column, then every row.
///
/// The reverse of the forward pass order, which is what makes the separable
/// transform algebraically invertible.
pub fn inverse_haar_2d(coeffs: &Grid) -> Result<Grid> {
    check_non_empty(coeffs)?;
    check_even(coeffs)?;
    let mut grid = coeffs.clone();
    transform_columns(&mut grid, inverse_1d);
    transform_rows(&mut grid, inverse_1d);
    Ok(grid)
}

/// Forward transform immediately followed by the inverse, with nothing in
/// between.
///
/// An identity up to floating-point rounding. The original workflow exposed
/// this as a processing step in its own right, so it is kept callable.
pub fn round_trip(grid: &Grid) -> Result<Grid> {
    inverse_haar_2d(&haar_2d(grid)?)
}

// ----------------------------------------------------------------------------
// Sub-bands.

/// Identifies a quadrant of a once-transformed grid.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum Subband {
    /// Approximation (top-left).
    LL,
    /// Horizontal detail (top-right).
    LH,
    /// Vertical detail (bottom-left).
    HL,
    /// Diagonal detail (bottom-right).
    HH,
}

impl Subband {
    pub const DETAIL: [Self; 3] = [Subband::LH, Subband::HL, Subband::HH];

    /// Top-left corner of this quadrant in a grid of shape `(rows, cols)`.
    ///
    /// The four quadrants tile the grid exactly when both dimensions are
    /// even: boundaries sit at `rows / 2` and `cols / 2`.
    pub fn offset(self, rows: usize, cols: usize) -> (usize, usize) {
        match self {
            Subband::LL => (0, 0),
            Subband::LH => (0, cols / 2),
            Subband::HL => (rows / 2, 0),
            Subband::HH => (rows / 2, cols / 2),
        }
    }
}

/// Multiplies the three detail quadrants of `coeffs` by `gain`, leaving the
/// approximation untouched, and returns the result as a new grid.
///
/// `gain > 1` emphasizes edges after the inverse transform, `gain < 1`
/// softens them. Meant to be applied once, between one forward and one
/// inverse transform.
pub fn enhance_detail_bands(coeffs: &Grid, gain: f32) -> Result<Grid> {
    if !(gain > 0.0) {
        return Err(Error::NonPositiveParameter { name: "gain factor", value: gain });
    }
    check_non_empty(coeffs)?;
    check_even(coeffs)?;
    let (rows, cols) = coeffs.shape();
    let mut out = coeffs.clone();
    for band in Subband::DETAIL {
        let mut quadrant = out.view_mut(band.offset(rows, cols), (rows / 2, cols / 2));
        for value in quadrant.iter_mut() {
            *value *= gain;
        }
    }
    Ok(out)
}

// ----------------------------------------------------------------------------
