//! Config-driven filter tool: reads a JSON config naming the input image,
//! the output path, and the kernel (preset or explicit rows), then runs the
//! convolution.
use pixel_convolve::config::load_config;
use pixel_convolve::convolve;
use pixel_convolve::image::io::{load_image, save_image};
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
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;
    let kernel = config.kernel.build()?;

    let source = load_image(&config.input).map_err(|e| e.to_string())?;
    let filtered = convolve(&source, &kernel).map_err(|e| e.to_string())?;
    save_image(&filtered, &config.output).map_err(|e| e.to_string())
}

fn usage() -> String {
    "USAGE: convolve_tool <config.json>".to_string()
}
