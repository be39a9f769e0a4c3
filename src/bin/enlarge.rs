use clap::{Parser};
use log::{info};
use scanwave::io::{cli, load_gray, save_gray};
use scanwave::resample::{upsample_bicubic};

fn main() -> scanwave::Result {
    env_logger::init();
    let args = cli::InOut::parse();
    let grid = load_gray(&args.in_path)?;
    let scale = args.scale(2.0);
    let enlarged = upsample_bicubic(&grid, scale)?;
    info!(
        "upsampled {}x{} by {} to {}x{}",
        grid.nrows(), grid.ncols(), scale, enlarged.nrows(), enlarged.ncols(),
    );
    save_gray(&enlarged, &args.out_path("enlarge")?)
}
