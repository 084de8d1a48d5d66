//! Parameters for the threshold sweep.
//!
//! Defaults reproduce the interactive tool: 50 thresholds between 40 and 300,
//! a 20 px noise floor and a radius-2 disk for closing. Bounds above 255 are
//! allowed; such thresholds simply produce empty masks.

use crate::error::{LensError, Result};
use serde::{Deserialize, Serialize};

/// Which side of the threshold counts as foreground.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    /// Droplets brighter than the background: `intensity >= threshold`.
    #[default]
    BrightOnDark,
    /// Droplets darker than the background: `intensity < threshold`.
    DarkOnBright,
}

/// Pixel adjacency used for region filtering and labeling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Connectivity {
    /// Edge neighbours only.
    #[default]
    Four,
    /// Edge and corner neighbours.
    Eight,
}

impl From<Connectivity> for imageproc::region_labelling::Connectivity {
    fn from(c: Connectivity) -> Self {
        match c {
            Connectivity::Four => Self::Four,
            Connectivity::Eight => Self::Eight,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepParams {
    /// First threshold of the sweep (inclusive).
    pub lower: f64,
    /// Last threshold of the sweep (inclusive).
    pub upper: f64,
    /// Number of evenly spaced thresholds.
    pub samples: usize,
    /// Foreground regions with fewer pixels than this are treated as noise.
    pub min_object_area: usize,
    /// Radius of the disk structuring element used for closing.
    pub closing_radius: u8,
    pub polarity: Polarity,
    pub connectivity: Connectivity,
}

impl Default for SweepParams {
    fn default() -> Self {
        Self {
            lower: 40.0,
            upper: 300.0,
            samples: 50,
            min_object_area: 20,
            closing_radius: 2,
            polarity: Polarity::default(),
            connectivity: Connectivity::default(),
        }
    }
}

impl SweepParams {
    /// Reject configurations the sweep cannot run with.
    pub fn validate(&self) -> Result<()> {
        if !self.lower.is_finite() || !self.upper.is_finite() {
            return Err(LensError::InvalidConfig(format!(
                "threshold bounds must be finite (lower={}, upper={})",
                self.lower, self.upper
            )));
        }
        if self.lower > self.upper {
            return Err(LensError::InvalidConfig(format!(
                "lower bound {} exceeds upper bound {}",
                self.lower, self.upper
            )));
        }
        if self.samples == 0 {
            return Err(LensError::InvalidConfig(
                "sample count must be positive".to_string(),
            ));
        }
        if self.min_object_area == 0 {
            return Err(LensError::InvalidConfig(
                "minimum object area must be positive".to_string(),
            ));
        }
        if self.closing_radius == 0 {
            return Err(LensError::InvalidConfig(
                "closing radius must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Thresholds visited by the sweep, in ascending order.
    pub fn thresholds(&self) -> Vec<f64> {
        super::threshold_values(self.lower, self.upper, self.samples)
    }
}
