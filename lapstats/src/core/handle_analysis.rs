use crate::core::consistency::consistency_metrics;
use crate::core::deltas::{best_lap_deltas, previous_lap_deltas};
use crate::core::series::LapTimeSeries;
use crate::core::session::{performance_dropoff, session_summary, time_loss, time_trend};
use crate::post::analysis_result::AnalysisResult;
use crate::pre::read_analysis_pars::AnalysisPars;
use crate::pre::read_lap_times::read_lap_times;
use helpers::general::EntityNotFoundError;
use std::path::Path;
use tracing::{info, warn};

/// handle_analysis runs all metrics on the inserted lap time series and returns the results for
/// post-processing. Metrics lacking data report this in their result, the others still run.
pub fn handle_analysis(series: &LapTimeSeries, analysis_pars: &AnalysisPars) -> AnalysisResult {
    AnalysisResult {
        entity: series.entity.to_owned(),
        entity_found: true,
        laptimes: series.laptimes().to_vec(),
        previous_lap_deltas: previous_lap_deltas(series),
        best_lap_deltas: best_lap_deltas(series),
        consistency_metrics: consistency_metrics(series),
        pace_consistency_index: series.pace_consistency_index(),
        session_summary: session_summary(series),
        time_losses: time_loss(series, &analysis_pars.time_loss_thresholds),
        performance_dropoff: performance_dropoff(series),
        time_trend: time_trend(
            series,
            analysis_pars.trend_window,
            analysis_pars.trend_tolerance,
        ),
    }
}

/// analyze_entity reads the lap times of the entity from the CSV file and analyzes them. An
/// entity that is not part of the file is reported and results in an analysis of an empty
/// series, all other errors are returned.
pub fn analyze_entity(
    csvfile_path: &Path,
    entity: &str,
    analysis_pars: &AnalysisPars,
) -> anyhow::Result<AnalysisResult> {
    let series = match read_lap_times(csvfile_path, entity) {
        Ok(series) => series,
        Err(e) if e.downcast_ref::<EntityNotFoundError>().is_some() => {
            warn!("{} not found in {}", entity, csvfile_path.display());
            let mut result = handle_analysis(&LapTimeSeries::empty(entity), analysis_pars);
            result.entity_found = false;
            return Ok(result);
        }
        Err(e) => return Err(e),
    };

    info!(
        "Analyzing {} laps of {} ({} with valid time)",
        series.len(),
        entity,
        series.valid_laptimes().len()
    );

    Ok(handle_analysis(&series, analysis_pars))
}
