use anyhow::Context;
use serde::Deserialize;
use std::fs::OpenOptions;
use std::path::Path;

/// * `time_loss_thresholds` - (s) Lap-to-lap deltas above these thresholds are reported
/// * `trend_window` - Number of laps averaged at the start and at the end of a session
/// * `trend_tolerance` - (s) Average differences within this tolerance count as a plateau
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AnalysisPars {
    #[serde(default = "default_time_loss_thresholds")]
    pub time_loss_thresholds: Vec<f64>,
    #[serde(default = "default_trend_window")]
    pub trend_window: usize,
    #[serde(default = "default_trend_tolerance")]
    pub trend_tolerance: f64,
}

fn default_time_loss_thresholds() -> Vec<f64> {
    vec![0.2, 0.3, 0.4, 0.5]
}

fn default_trend_window() -> usize {
    3
}

fn default_trend_tolerance() -> f64 {
    0.1
}

impl Default for AnalysisPars {
    fn default() -> Self {
        AnalysisPars {
            time_loss_thresholds: default_time_loss_thresholds(),
            trend_window: default_trend_window(),
            trend_tolerance: default_trend_tolerance(),
        }
    }
}

/// read_analysis_pars reads the JSON file and decodes the JSON string into the analysis
/// parameters struct.
pub fn read_analysis_pars(filepath: &Path) -> anyhow::Result<AnalysisPars> {
    // open file
    let fh = OpenOptions::new()
        .read(true)
        .open(filepath)
        .context(format!(
            "Failed to open parameter file {}!",
            filepath.display()
        ))?;

    // read and parse parameter file content
    let pars = serde_json::from_reader(&fh).context(format!(
        "Failed to parse parameter file {}!",
        filepath.display()
    ))?;
    Ok(pars)
}
