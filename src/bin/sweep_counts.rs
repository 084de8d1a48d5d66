//! Print the threshold → object count table for an image without rendering.
//!
//! Usage: sweep_counts <image> [config.json]

use lipid_lens::config::{load_config, AnalyzerConfig};
use lipid_lens::diagnostics::{InputDescriptor, SweepReport, TimingBreakdown};
use lipid_lens::image::io::load_image;
use lipid_lens::sweep::ThresholdSweep;
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
    let mut args = env::args().skip(1);
    let image_path = args.next().ok_or_else(usage)?;
    let config = match args.next() {
        Some(path) => load_config(Path::new(&path)).map_err(|e| e.to_string())?,
        None => AnalyzerConfig::default(),
    };

    let sweep = ThresholdSweep::new(config.sweep).map_err(|e| e.to_string())?;
    let decoded = load_image(Path::new(&image_path)).map_err(|e| e.to_string())?;
    let gray = decoded.to_grayscale();
    let result = sweep.run(gray.as_view()).map_err(|e| e.to_string())?;

    let input = InputDescriptor::from_gray(
        gray.as_view(),
        Some(format!("{:?}", decoded.format)),
        decoded.is_color(),
    );
    let report = SweepReport::new(input, &result, TimingBreakdown::sweep_only(result.elapsed_ms));
    print!("{}", report.count_table());
    Ok(())
}

fn usage() -> String {
    "Usage: sweep_counts <image> [config.json]".to_string()
}
