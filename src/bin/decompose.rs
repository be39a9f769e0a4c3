use clap::{Parser};
use log::{info};
use scanwave::io::{cli, load_gray};
use scanwave::resample::{crop_to_even};
use scanwave::viz::{normalize, pseudo_color};
use scanwave::wavelet::{haar_2d};

fn main() -> scanwave::Result {
    env_logger::init();
    let args = cli::InOut::parse();
    let grid = crop_to_even(&load_gray(&args.in_path)?);
    let coeffs = haar_2d(&grid)?;
    info!("decomposed {}x{} into sub-band quadrants", grid.nrows(), grid.ncols());
    let rendered = pseudo_color(&normalize(&coeffs))?;
    Ok(rendered.save(args.out_path("decompose")?)?)
}
