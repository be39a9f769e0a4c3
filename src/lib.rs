//! Resampling and single-level Haar decomposition of grayscale scan images.
//!
//! The numeric core operates on a [`Grid`] of normalized intensities and is
//! made of pure functions: nothing in this crate keeps cross-call state, and
//! no function mutates a caller's buffer. Loading and saving images, and
//! rendering grids for inspection, live in [`io`] and [`viz`].

use thiserror::Error;

/// Errors reported by the numeric core and the I/O layer.
#[derive(Debug, Error)]
pub enum Error {
    /// A grid with zero rows or zero columns was passed where samples are
    /// required.
    #[error("grid has zero rows or columns")]
    EmptyGrid,

    /// An odd row or column count was passed to a wavelet operation.
    #[error("wavelet operations require even dimensions, got {rows}x{cols}")]
    InvalidDimension { rows: usize, cols: usize },

    /// A scale or gain factor was zero, negative, or NaN.
    #[error("{name} must be positive, got {value}")]
    NonPositiveParameter { name: &'static str, value: f32 },

    /// A crop rectangle does not describe a region inside the grid.
    #[error("invalid region: {0}")]
    InvalidRegion(&'static str),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

// ----------------------------------------------------------------------------

/// A general `Result` type.
pub type Result<T = ()> = std::result::Result<T, Error>;

// ----------------------------------------------------------------------------

/// A rectangular array of real-valued intensity samples, indexed
/// `(row, column)` with `(0, 0)` at the top left.
///
/// The loader in [`io`] produces values in `[0, 1]`; the core functions make
/// no assumption beyond "real-valued", so transform coefficients and
/// overshooting interpolation results are representable. The saver clamps
/// back to `[0, 1]` before quantizing.
pub type Grid = nalgebra::DMatrix<f32>;

/// Fails with [`Error::EmptyGrid`] unless `grid` contains at least one sample.
pub(crate) fn check_non_empty(grid: &Grid) -> Result {
    if grid.nrows() == 0 || grid.ncols() == 0 {
        return Err(Error::EmptyGrid);
    }
    Ok(())
}

// ----------------------------------------------------------------------------

pub mod io;

pub mod interpolate;
pub use interpolate::bicubic;

pub mod resample;
pub use resample::{upsample_bicubic, Region};

pub mod wavelet;
pub use wavelet::{enhance_detail_bands, haar_2d, inverse_haar_2d, Subband};

pub mod viz;
