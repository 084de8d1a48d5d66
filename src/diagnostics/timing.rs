//! Wall-clock timings of the analysis stages.
use serde::{Deserialize, Serialize};
use std::fmt;

/// The stages of one analysis request, in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Sniffing and decoding the uploaded bytes.
    Decode,
    /// BT.601 conversion (or pass-through for gray inputs).
    Grayscale,
    /// Binarize, cleanup and counting over every threshold.
    Sweep,
    /// Pagination and page composition.
    Render,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Decode => "decode",
            Stage::Grayscale => "grayscale",
            Stage::Sweep => "sweep",
            Stage::Render => "render",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub stage: Stage,
    pub elapsed_ms: f64,
}

/// Stage timings of one request plus its end-to-end total.
///
/// Stages that did not run (no `decode` for pre-decoded input, no `render`
/// for count-only runs) are simply absent.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    /// Breakdown for a bare sweep: a single `sweep` stage that is also the total.
    pub fn sweep_only(elapsed_ms: f64) -> Self {
        let mut timings = Self {
            total_ms: elapsed_ms,
            stages: Vec::with_capacity(1),
        };
        timings.record(Stage::Sweep, elapsed_ms);
        timings
    }

    pub fn record(&mut self, stage: Stage, elapsed_ms: f64) {
        self.stages.push(StageTiming { stage, elapsed_ms });
    }

    /// Time spent in `stage`, if it ran.
    pub fn stage_ms(&self, stage: Stage) -> Option<f64> {
        self.stages
            .iter()
            .find(|s| s.stage == stage)
            .map(|s| s.elapsed_ms)
    }
}
