use crate::error::{LensError, Result};
use crate::render::RenderStyle;
use crate::sweep::SweepParams;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Everything one analysis request needs besides the image bytes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub sweep: SweepParams,
    pub render: RenderStyle,
}

impl AnalyzerConfig {
    pub fn validate(&self) -> Result<()> {
        self.sweep.validate()?;
        self.render.validate()
    }
}

pub fn load_config(path: &Path) -> Result<AnalyzerConfig> {
    let data = fs::read_to_string(path).map_err(|e| LensError::io(path, e))?;
    parse_config(&data).map_err(|e| match e {
        LensError::Json(msg) => LensError::Json(format!("{}: {msg}", path.display())),
        other => other,
    })
}

pub fn parse_config(json: &str) -> Result<AnalyzerConfig> {
    serde_json::from_str(json).map_err(|e| LensError::Json(e.to_string()))
}
