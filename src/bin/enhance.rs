use clap::{Parser};
use log::{info};
use scanwave::io::{cli, load_gray, save_gray};
use scanwave::resample::{crop_to_even};
use scanwave::wavelet::{enhance_detail_bands, haar_2d, inverse_haar_2d};

fn main() -> scanwave::Result {
    env_logger::init();
    let args = cli::InOut::parse();
    let grid = crop_to_even(&load_gray(&args.in_path)?);
    let gain = args.gain(1.5);
    let coeffs = haar_2d(&grid)?;
    let enhanced = enhance_detail_bands(&coeffs, gain)?;
    let reconstructed = inverse_haar_2d(&enhanced)?;
    info!("enhanced detail bands of {}x{} with gain {}", grid.nrows(), grid.ncols(), gain);
    save_gray(&reconstructed, &args.out_path("enhance")?)
}
