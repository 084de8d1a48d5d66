//! Sweep engine evaluating every threshold independently.
use super::{binarize, close_mask, count_objects, remove_small_objects, SweepParams};
use crate::error::Result;
use crate::image::io::ensure_not_empty;
use crate::image::{BinaryMask, ImageU8};
use log::debug;
use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Cleaned mask and object count for one threshold.
#[derive(Clone, Debug, PartialEq)]
pub struct ThresholdResult {
    /// Position of the threshold in the sweep.
    pub index: usize,
    pub threshold: f64,
    pub mask: BinaryMask,
    pub count: usize,
}

/// Outcome of a full sweep, ordered by ascending threshold.
#[derive(Clone, Debug)]
pub struct SweepResult {
    pub params: SweepParams,
    pub results: Vec<ThresholdResult>,
    pub elapsed_ms: f64,
}

impl SweepResult {
    pub fn counts(&self) -> Vec<usize> {
        self.results.iter().map(|r| r.count).collect()
    }

    pub fn thresholds(&self) -> Vec<f64> {
        self.results.iter().map(|r| r.threshold).collect()
    }
}

/// Binarize, clean up and count objects at a single threshold.
pub fn evaluate_threshold(
    gray: ImageU8<'_>,
    index: usize,
    threshold: f64,
    params: &SweepParams,
) -> ThresholdResult {
    let raw = binarize(gray, threshold, params.polarity);
    let filtered = remove_small_objects(&raw, params.min_object_area, params.connectivity);
    let mask = close_mask(&filtered, params.closing_radius);
    let count = count_objects(&mask, params.connectivity);
    debug!(
        "ThresholdSweep threshold={:.2} raw_fg={} kept_fg={} count={}",
        threshold,
        raw.foreground_count(),
        mask.foreground_count(),
        count
    );
    ThresholdResult {
        index,
        threshold,
        mask,
        count,
    }
}

/// Validated sweep configuration ready to run against images.
#[derive(Clone, Debug)]
pub struct ThresholdSweep {
    params: SweepParams,
}

impl ThresholdSweep {
    pub fn new(params: SweepParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &SweepParams {
        &self.params
    }

    /// Evaluate every threshold against `gray`.
    ///
    /// Fails with `EmptyImage` before any threshold runs if `gray` has no pixels.
    pub fn run(&self, gray: ImageU8<'_>) -> Result<SweepResult> {
        ensure_not_empty(
            u32::try_from(gray.w).unwrap_or(u32::MAX),
            u32::try_from(gray.h).unwrap_or(u32::MAX),
        )?;
        let start = Instant::now();
        let thresholds = self.params.thresholds();
        let params = &self.params;

        #[cfg(feature = "parallel")]
        let results: Vec<ThresholdResult> = thresholds
            .par_iter()
            .enumerate()
            .map(|(i, &t)| evaluate_threshold(gray, i, t, params))
            .collect();
        #[cfg(not(feature = "parallel"))]
        let results: Vec<ThresholdResult> = thresholds
            .iter()
            .enumerate()
            .map(|(i, &t)| evaluate_threshold(gray, i, t, params))
            .collect();

        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "ThresholdSweep::run {}x{} thresholds={} elapsed_ms={:.3}",
            gray.w,
            gray.h,
            results.len(),
            elapsed_ms
        );
        Ok(SweepResult {
            params: self.params.clone(),
            results,
            elapsed_ms,
        })
    }
}
