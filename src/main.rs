//! lipid_lens CLI: sweep intensity thresholds over a droplet image and
//! write the captioned mask pages.

use clap::{Parser, ValueEnum};
use lipid_lens::analyzer::analyze_bytes;
use lipid_lens::config::{load_config, AnalyzerConfig};
use lipid_lens::diagnostics::Stage;
use lipid_lens::sweep::{Connectivity, Polarity};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lipid_lens")]
#[command(about = "Count lipid droplets across a sweep of intensity thresholds")]
#[command(version)]
struct Cli {
    /// Input image (JPEG, PNG or TIFF).
    #[arg(long)]
    image: PathBuf,

    /// Directory receiving original.png, gray.png, page_NN.png and sweep.json.
    #[arg(long)]
    out: PathBuf,

    /// JSON configuration file; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// First threshold of the sweep.
    #[arg(long)]
    lower: Option<f64>,

    /// Last threshold of the sweep.
    #[arg(long)]
    upper: Option<f64>,

    /// Number of evenly spaced thresholds.
    #[arg(long)]
    samples: Option<usize>,

    /// Foreground regions smaller than this many pixels are dropped.
    #[arg(long)]
    min_area: Option<usize>,

    /// Radius of the disk used for morphological closing.
    #[arg(long)]
    closing_radius: Option<u8>,

    /// Whether droplets are brighter or darker than the background.
    #[arg(long, value_enum)]
    polarity: Option<PolarityArg>,

    /// Pixel adjacency for noise filtering and labeling.
    #[arg(long, value_enum)]
    connectivity: Option<ConnectivityArg>,

    /// Thumbnail box size per panel, in pixels.
    #[arg(long)]
    panel_size: Option<u32>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PolarityArg {
    BrightOnDark,
    DarkOnBright,
}

impl From<PolarityArg> for Polarity {
    fn from(p: PolarityArg) -> Self {
        match p {
            PolarityArg::BrightOnDark => Polarity::BrightOnDark,
            PolarityArg::DarkOnBright => Polarity::DarkOnBright,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ConnectivityArg {
    Four,
    Eight,
}

impl From<ConnectivityArg> for Connectivity {
    fn from(c: ConnectivityArg) -> Self {
        match c {
            ConnectivityArg::Four => Connectivity::Four,
            ConnectivityArg::Eight => Connectivity::Eight,
        }
    }
}

impl Cli {
    fn resolve_config(&self) -> Result<AnalyzerConfig, String> {
        let mut config = match &self.config {
            Some(path) => load_config(path).map_err(|e| e.to_string())?,
            None => AnalyzerConfig::default(),
        };
        let sweep = &mut config.sweep;
        if let Some(v) = self.lower {
            sweep.lower = v;
        }
        if let Some(v) = self.upper {
            sweep.upper = v;
        }
        if let Some(v) = self.samples {
            sweep.samples = v;
        }
        if let Some(v) = self.min_area {
            sweep.min_object_area = v;
        }
        if let Some(v) = self.closing_radius {
            sweep.closing_radius = v;
        }
        if let Some(v) = self.polarity {
            sweep.polarity = v.into();
        }
        if let Some(v) = self.connectivity {
            sweep.connectivity = v.into();
        }
        if let Some(v) = self.panel_size {
            config.render.panel_size = v;
        }
        Ok(config)
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    config.validate().map_err(|e| e.to_string())?;

    log::info!("Loading image: {}", cli.image.display());
    let bytes =
        fs::read(&cli.image).map_err(|e| format!("Failed to read {}: {e}", cli.image.display()))?;
    let analysis = analyze_bytes(&bytes, &config).map_err(|e| e.to_string())?;

    let written = analysis
        .write_to_dir(&cli.out)
        .map_err(|e| e.to_string())?;

    print!("{}", analysis.report.count_table());
    let timings = &analysis.report.timings;
    println!(
        "\n{} pages written to {} ({} files); sweep {:.1} ms, render {:.1} ms",
        analysis.pages.len(),
        cli.out.display(),
        written.len(),
        timings.stage_ms(Stage::Sweep).unwrap_or_default(),
        timings.stage_ms(Stage::Render).unwrap_or_default()
    );
    Ok(())
}
