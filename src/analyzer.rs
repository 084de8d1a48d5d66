//! Request-scoped analysis pipeline.
//!
//! One call takes the raw upload through decoding, grayscale conversion, the
//! threshold sweep and page rendering. Everything the request produces is
//! returned in [`Analysis`]; nothing is kept between calls.
use crate::config::AnalyzerConfig;
use crate::diagnostics::{InputDescriptor, Stage, SweepReport, TimingBreakdown};
use crate::error::Result;
use crate::image::io::{
    decode_image, ensure_not_empty, save_gray_png, save_rgb_png, write_json_file,
};
use crate::image::{DecodedImage, GrayImageU8};
use crate::render::render_pages;
use crate::sweep::{SweepResult, ThresholdSweep};
use image::{DynamicImage, RgbImage};
use log::info;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Everything produced for one input image.
#[derive(Debug)]
pub struct Analysis {
    /// The decoded input, kept for the preview.
    pub original: DynamicImage,
    pub gray: GrayImageU8,
    pub sweep: SweepResult,
    /// Rendered pages of up to twelve panels each, in sweep order.
    pub pages: Vec<RgbImage>,
    pub report: SweepReport,
}

/// Decode `bytes` and run the full sweep-and-render cycle.
///
/// The configuration is validated before any decoding work. A decode failure
/// returns an error and produces no pages.
pub fn analyze_bytes(bytes: &[u8], config: &AnalyzerConfig) -> Result<Analysis> {
    config.validate()?;
    let start = Instant::now();
    let decoded = decode_image(bytes)?;
    let decode_ms = start.elapsed().as_secs_f64() * 1000.0;
    run(decoded, config, start, decode_ms)
}

/// Run the pipeline on an already decoded image.
pub fn analyze_decoded(decoded: DecodedImage, config: &AnalyzerConfig) -> Result<Analysis> {
    config.validate()?;
    ensure_not_empty(decoded.width(), decoded.height())?;
    run(decoded, config, Instant::now(), 0.0)
}

/// Run the pipeline on a grayscale buffer, skipping decoding entirely.
pub fn analyze_gray(gray: GrayImageU8, config: &AnalyzerConfig) -> Result<Analysis> {
    config.validate()?;
    let start = Instant::now();
    let preview = gray.to_gray_image();
    ensure_not_empty(preview.width(), preview.height())?;
    let original = DynamicImage::ImageLuma8(preview);
    let input = InputDescriptor::from_gray(gray.as_view(), None, false);
    finish(original, gray, input, config, start, TimingBreakdown::default())
}

fn run(
    decoded: DecodedImage,
    config: &AnalyzerConfig,
    start: Instant,
    decode_ms: f64,
) -> Result<Analysis> {
    let gray_start = Instant::now();
    let gray = decoded.to_grayscale();
    let gray_ms = gray_start.elapsed().as_secs_f64() * 1000.0;

    let mut timings = TimingBreakdown::default();
    if decode_ms > 0.0 {
        timings.record(Stage::Decode, decode_ms);
    }
    timings.record(Stage::Grayscale, gray_ms);

    let input = InputDescriptor::from_gray(
        gray.as_view(),
        Some(format!("{:?}", decoded.format)),
        decoded.is_color(),
    );
    finish(decoded.image, gray, input, config, start, timings)
}

fn finish(
    original: DynamicImage,
    gray: GrayImageU8,
    input: InputDescriptor,
    config: &AnalyzerConfig,
    start: Instant,
    mut timings: TimingBreakdown,
) -> Result<Analysis> {
    let sweep = ThresholdSweep::new(config.sweep.clone())?.run(gray.as_view())?;
    timings.record(Stage::Sweep, sweep.elapsed_ms);

    let render_start = Instant::now();
    let pages = render_pages(&sweep.results, &config.render);
    timings.record(Stage::Render, render_start.elapsed().as_secs_f64() * 1000.0);
    timings.total_ms = start.elapsed().as_secs_f64() * 1000.0;

    let report = SweepReport::new(input, &sweep, timings);
    info!(
        "analysis {}x{} thresholds={} pages={} total_ms={:.3}",
        gray.width(),
        gray.height(),
        sweep.results.len(),
        pages.len(),
        report.timings.total_ms
    );
    Ok(Analysis {
        original,
        gray,
        sweep,
        pages,
        report,
    })
}

impl Analysis {
    /// Write `original.png`, `gray.png`, `page_NN.png` and `sweep.json` under `dir`.
    ///
    /// Returns the written paths in that order.
    pub fn write_to_dir(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(self.pages.len() + 3);

        let original = dir.join("original.png");
        save_rgb_png(&self.original.to_rgb8(), &original)?;
        written.push(original);

        let gray = dir.join("gray.png");
        save_gray_png(&self.gray.to_gray_image(), &gray)?;
        written.push(gray);

        for (i, page) in self.pages.iter().enumerate() {
            let path = dir.join(page_file_name(i));
            save_rgb_png(page, &path)?;
            written.push(path);
        }

        let report = dir.join("sweep.json");
        write_json_file(&report, &self.report)?;
        written.push(report);
        Ok(written)
    }
}

/// One-based, zero-padded page file name.
pub fn page_file_name(index: usize) -> String {
    format!("page_{:02}.png", index + 1)
}
