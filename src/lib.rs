#![doc = include_str!("../README.md")]

// Public modules
pub mod analyzer;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod render;
pub mod sweep;

// --- High-level re-exports -------------------------------------------------

// Request pipeline + its output.
pub use crate::analyzer::{analyze_bytes, analyze_decoded, analyze_gray, Analysis};
pub use crate::config::AnalyzerConfig;
pub use crate::error::{LensError, Result};

// Sweep entry points.
pub use crate::sweep::{SweepParams, SweepResult, ThresholdResult, ThresholdSweep};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use lipid_lens::prelude::*;
///
/// # fn main() -> lipid_lens::Result<()> {
/// let (w, h) = (64usize, 48usize);
/// let gray = GrayImageU8::new(w, h, vec![0u8; w * h])?;
///
/// let sweep = ThresholdSweep::new(SweepParams::default())?;
/// let result = sweep.run(gray.as_view())?;
/// for r in &result.results {
///     println!("threshold={:.0} count={}", r.threshold, r.count);
/// }
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{GrayImageU8, ImageU8};
    pub use crate::{analyze_bytes, AnalyzerConfig, SweepParams, ThresholdSweep};
}
