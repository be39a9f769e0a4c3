use std::path::{Path};
use clap::{Parser};

use crate::{Error, Result};

/// Strip the directory and file extension from a file path.
fn file_stem(path: &str) -> Result<&str> {
    Path::new(path)
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| Error::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "input path has no usable file stem",
        )))
}

/// Constructs a default output path from `in_path` and `program_name`.
///
/// - in_path - the input path.
/// - program_name - the name of the program.
pub fn default_out_path(in_path: &str, program_name: &str) -> Result<String> {
    let mut out_path = std::env::temp_dir();
    out_path.push(format!("{}-{}.png", file_stem(in_path)?, program_name));
    Ok(out_path.to_str().expect("temp dir is valid unicode").to_owned())
}

// ----------------------------------------------------------------------------

#[derive(Debug, Parser)]
#[command(about = "Process a grayscale scan image.")]
#[command(author, version, long_about = None)]
pub struct InOut {
    /// Input path.
    pub in_path: String,

    /// Output path.
    #[arg(short, long)]
    pub out_path: Option<String>,

    /// Upsampling ratio.
    #[arg(short, long)]
    pub scale: Option<f32>,

    /// Gain applied to the detail sub-bands.
    #[arg(short, long)]
    pub gain: Option<f32>,
}

impl InOut {
    /// Returns `out_path` or `default_out_path(program_name)`.
    pub fn out_path(&self, program_name: &str) -> Result<String> {
        self.out_path.clone().map_or_else(|| default_out_path(&self.in_path, program_name), Ok)
    }

    /// Returns the `scale` or the specified default value.
    pub fn scale(&self, default_scale: f32) -> f32 {
        self.scale.unwrap_or(default_scale)
    }

    /// Returns the `gain` or the specified default value.
    pub fn gain(&self, default_gain: f32) -> f32 {
        self.gain.unwrap_or(default_gain)
    }
}
