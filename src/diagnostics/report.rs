use super::TimingBreakdown;
use crate::image::ImageU8;
use crate::render::{page_count, PageLayout, PAGE_SIZE};
use crate::sweep::{SweepParams, SweepResult};
use serde::Serialize;

/// Serializable summary of one analysis request.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepReport {
    pub input: InputDescriptor,
    pub params: SweepParams,
    pub samples: Vec<ThresholdSample>,
    pub page_count: usize,
    pub page_size: usize,
    pub timings: TimingBreakdown,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    /// Container format of the decoded input, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    pub color: bool,
    pub min_intensity: u8,
    pub max_intensity: u8,
}

impl InputDescriptor {
    pub fn from_gray(gray: ImageU8<'_>, format: Option<String>, color: bool) -> Self {
        let (min_intensity, max_intensity) = gray.intensity_range().unwrap_or((0, 0));
        Self {
            width: gray.w,
            height: gray.h,
            format,
            color,
            min_intensity,
            max_intensity,
        }
    }
}

/// Count summary for one threshold, with its position in the rendered pages.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdSample {
    pub index: usize,
    pub threshold: f64,
    pub count: usize,
    pub foreground_pixels: usize,
    pub page: usize,
    pub slot: [usize; 2],
}

impl SweepReport {
    pub fn new(input: InputDescriptor, sweep: &SweepResult, timings: TimingBreakdown) -> Self {
        let layout = PageLayout::STANDARD;
        let samples = sweep
            .results
            .iter()
            .enumerate()
            .map(|(i, r)| {
                let (row, col) = layout.cell(i % PAGE_SIZE);
                ThresholdSample {
                    index: r.index,
                    threshold: r.threshold,
                    count: r.count,
                    foreground_pixels: r.mask.foreground_count(),
                    page: i / PAGE_SIZE,
                    slot: [row, col],
                }
            })
            .collect();
        Self {
            input,
            params: sweep.params.clone(),
            samples,
            page_count: page_count(sweep.results.len(), PAGE_SIZE),
            page_size: PAGE_SIZE,
            timings,
        }
    }

    /// Tab-separated `threshold count` lines for terminal output.
    pub fn count_table(&self) -> String {
        let mut out = String::from("threshold\tcount\n");
        for s in &self.samples {
            out.push_str(&format!("{:.2}\t{}\n", s.threshold, s.count));
        }
        out
    }
}
