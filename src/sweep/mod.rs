//! Threshold sweep over a grayscale image.
//!
//! Overview
//! - [`thresholds`] generates an evenly spaced, ascending set of candidate
//!   thresholds including both bounds.
//! - For every threshold the engine binarizes the image ([`binarize`]), drops
//!   foreground regions below the minimum area and closes small gaps with a
//!   disk structuring element ([`cleanup`]), then counts connected components
//!   ([`label`]).
//! - Thresholds are evaluated independently. With the `parallel` feature the
//!   evaluation fans out over rayon; results always come back in ascending
//!   threshold order.
//!
//! Modules
//! - [`params`] – sweep configuration and validation.
//! - [`engine`] – [`ThresholdSweep`] and the per-threshold result types.

pub mod binarize;
pub mod cleanup;
pub mod engine;
pub mod label;
pub mod params;
pub mod thresholds;

pub use binarize::binarize;
pub use cleanup::{close_mask, remove_small_objects};
pub use engine::{evaluate_threshold, SweepResult, ThresholdResult, ThresholdSweep};
pub use label::{count_objects, label_components, LabelMap};
pub use params::{Connectivity, Polarity, SweepParams};
pub use thresholds::threshold_values;
