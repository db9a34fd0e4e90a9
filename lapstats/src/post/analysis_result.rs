use crate::core::consistency::{ConsistencyMetrics, PaceConsistencyIndex};
use crate::core::deltas::{BestLapDelta, LapDelta};
use crate::core::session::{PerformanceDropoff, SessionSummary, TimeLoss, TimeTrend};
use helpers::general::InsufficientDataError;
use std::fmt;

/// AnalysisResult contains all metrics of a single entity that are required for reporting.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub entity: String,
    pub entity_found: bool,
    pub laptimes: Vec<Option<f64>>,
    pub previous_lap_deltas: Vec<LapDelta>,
    pub best_lap_deltas: Result<Vec<BestLapDelta>, InsufficientDataError>,
    pub consistency_metrics: Result<ConsistencyMetrics, InsufficientDataError>,
    pub pace_consistency_index: Result<PaceConsistencyIndex, InsufficientDataError>,
    pub session_summary: Result<SessionSummary, InsufficientDataError>,
    pub time_losses: Vec<TimeLoss>,
    pub performance_dropoff: Option<PerformanceDropoff>,
    pub time_trend: Result<TimeTrend, InsufficientDataError>,
}

impl AnalysisResult {
    /// print_report prints the results of all metrics to the console output.
    pub fn print_report(&self) {
        println!("{}", self);
    }
}

impl fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.entity_found {
            return writeln!(f, "RESULT: {} not found", self.entity);
        }

        // lap times
        writeln!(f, "RESULT: Lap times of {}", self.entity)?;
        let laptimes: Vec<String> = self
            .laptimes
            .iter()
            .map(|laptime| match laptime {
                Some(t) => format!("{:.3}", t),
                None => String::from("-"),
            })
            .collect();
        writeln!(f, "[{}]", laptimes.join(", "))?;

        // deltas from previous lap
        writeln!(f, "\nRESULT: Deltas from previous lap")?;
        for lap_delta in self.previous_lap_deltas.iter() {
            writeln!(f, "{}", lap_delta)?;
        }

        // consistency
        writeln!(f, "\nRESULT: Consistency metrics")?;
        match &self.consistency_metrics {
            Ok(metrics) => {
                writeln!(f, "Variance: {:.3}", metrics.variance)?;
                writeln!(f, "Standard Deviation: {:.3}", metrics.stddev)?;
            }
            Err(e) => writeln!(f, "{}", e)?,
        }

        // deltas from best lap
        writeln!(f, "\nRESULT: Deltas from best lap")?;
        match &self.best_lap_deltas {
            Ok(deltas) => {
                for best_lap_delta in deltas.iter() {
                    writeln!(f, "{}", best_lap_delta)?;
                }
            }
            Err(e) => writeln!(f, "{}", e)?,
        }

        // pace consistency index
        writeln!(f, "\nRESULT: Pace consistency index")?;
        match &self.pace_consistency_index {
            Ok(pci) => {
                writeln!(f, "PCI (mean): {:.3}", pci.pci_mean)?;
                writeln!(f, "PCI (median): {:.3}", pci.pci_median)?;
            }
            Err(e) => writeln!(f, "{}", e)?,
        }

        // session summary
        writeln!(f, "\nRESULT: Session summary")?;
        match &self.session_summary {
            Ok(summary) => {
                writeln!(
                    f,
                    "Laps: {} ({} with time)",
                    summary.no_laps, summary.no_valid_laps
                )?;
                writeln!(
                    f,
                    "Best Lap: {:.3} (lap {})",
                    summary.best_time, summary.best_lap
                )?;
                writeln!(
                    f,
                    "Worst Lap: {:.3} (lap {})",
                    summary.worst_time, summary.worst_lap
                )?;
                writeln!(f, "Average Lap: {:.3}", summary.average_time)?;
            }
            Err(e) => writeln!(f, "{}", e)?,
        }

        // time loss
        writeln!(f, "\nRESULT: Time loss identification")?;
        if self.time_losses.is_empty() {
            writeln!(f, "No lap-to-lap delta above the thresholds")?;
        }
        for loss in self.time_losses.iter() {
            writeln!(f, "{}", loss)?;
        }

        // performance drop-off
        writeln!(f, "\nRESULT: Performance drop-off")?;
        match &self.performance_dropoff {
            Some(dropoff) => {
                writeln!(f, "Start Time: {:.3}", dropoff.start_time)?;
                writeln!(f, "End Time: {:.3}", dropoff.end_time)?;
                writeln!(f, "Performance Drop-off: {:+.3}", dropoff.dropoff)?;
            }
            None => writeln!(f, "First or last lap without time")?,
        }

        // trend
        writeln!(f, "\nRESULT: Time trend")?;
        match &self.time_trend {
            Ok(trend) => writeln!(
                f,
                "Start Average: {:.3}, End Average: {:.3} -> {}",
                trend.start_avg, trend.end_avg, trend.direction
            ),
            Err(e) => writeln!(f, "{}", e),
        }
    }
}
