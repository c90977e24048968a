use pixel_convolve::image::io::{load_image, save_image};
use pixel_convolve::{convolve, Kernel};
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        let program = args.first().map(String::as_str).unwrap_or("convolve");
        return Err(format!("USAGE: {program} <source_image> <dest_image>"));
    }

    let source = load_image(Path::new(&args[1])).map_err(|e| e.to_string())?;
    let blurred = convolve(&source, &Kernel::gaussian_3x3()).map_err(|e| e.to_string())?;
    save_image(&blurred, Path::new(&args[2])).map_err(|e| e.to_string())
}
