use crate::core::series::LapTimeSeries;
use helpers::buffer::RollingWindow;
use helpers::general::{argmax, argmin, ensure_len, mean, InsufficientDataError};
use std::fmt;

/// * `no_laps` - Number of laps including laps without time
/// * `no_valid_laps` - Number of laps with time
/// * `best_lap` - Lap in which the best lap time was set (first one in case of ties)
/// * `best_time` - (s) Best lap time
/// * `worst_lap` - Lap in which the worst lap time was set (last one in case of ties)
/// * `worst_time` - (s) Worst lap time
/// * `average_time` - (s) Mean of all lap times
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub no_laps: usize,
    pub no_valid_laps: usize,
    pub best_lap: usize,
    pub best_time: f64,
    pub worst_lap: usize,
    pub worst_time: f64,
    pub average_time: f64,
}

pub fn session_summary(series: &LapTimeSeries) -> Result<SessionSummary, InsufficientDataError> {
    let valid_laps = series.valid_laps();
    ensure_len(&valid_laps, 1)?;

    let laptimes: Vec<f64> = valid_laps.iter().map(|&(_, t)| t).collect();
    let idx_best = argmin(&laptimes);
    let idx_worst = argmax(&laptimes);

    Ok(SessionSummary {
        no_laps: series.len(),
        no_valid_laps: valid_laps.len(),
        best_lap: valid_laps[idx_best].0,
        best_time: laptimes[idx_best],
        worst_lap: valid_laps[idx_worst].0,
        worst_time: laptimes[idx_worst],
        average_time: mean(&laptimes).unwrap_or(laptimes[idx_best]),
    })
}

/// TimeLoss marks a lap whose time differs from that of the previous lap by more than a
/// threshold. A positive delta means time was lost, a negative delta means time was gained.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeLoss {
    pub lap: usize,
    pub delta: f64,
    pub threshold: f64,
}

impl TimeLoss {
    pub fn is_loss(&self) -> bool {
        self.delta > 0.0
    }
}

impl fmt::Display for TimeLoss {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Lap {}: Time {} ({:.3}s) compared to previous lap with threshold {}s",
            self.lap,
            if self.is_loss() { "lost" } else { "gained" },
            self.delta.abs(),
            self.threshold
        )
    }
}

/// time_loss returns one entry per lap and exceeded threshold. Only consecutive laps that both
/// have a time are compared.
pub fn time_loss(series: &LapTimeSeries, thresholds: &[f64]) -> Vec<TimeLoss> {
    let laptimes = series.laptimes();
    let mut losses = Vec::new();

    for i in 1..laptimes.len() {
        if let (Some(prev), Some(cur)) = (laptimes[i - 1], laptimes[i]) {
            let delta = cur - prev;

            for &threshold in thresholds.iter() {
                if delta.abs() > threshold {
                    losses.push(TimeLoss {
                        lap: i + 1,
                        delta,
                        threshold,
                    });
                }
            }
        }
    }

    losses
}

/// * `start_time` - (s) Time of the first lap
/// * `end_time` - (s) Time of the last lap
/// * `dropoff` - (s) End time minus start time (positive if the pace dropped)
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceDropoff {
    pub start_time: f64,
    pub end_time: f64,
    pub dropoff: f64,
}

/// performance_dropoff compares the first and the last lap of the session. None is returned if
/// either of them has no time.
pub fn performance_dropoff(series: &LapTimeSeries) -> Option<PerformanceDropoff> {
    let start_time = series.get(1)?;
    let end_time = series.get(series.len())?;

    Some(PerformanceDropoff {
        start_time,
        end_time,
        dropoff: end_time - start_time,
    })
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrendDirection {
    Improving,
    Plateau,
    Declining,
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TrendDirection::Improving => write!(f, "improving"),
            TrendDirection::Plateau => write!(f, "plateau"),
            TrendDirection::Declining => write!(f, "declining"),
        }
    }
}

/// * `start_avg` - (s) Average of the first `window` laps with time
/// * `end_avg` - (s) Average of the last `window` laps with time
/// * `direction` - Trend derived from the difference of both averages
#[derive(Debug, Clone, PartialEq)]
pub struct TimeTrend {
    pub start_avg: f64,
    pub end_avg: f64,
    pub direction: TrendDirection,
}

/// time_trend compares the rolling average at the start of the session with the one at the
/// end. The start average is taken as soon as the window is filled for the first time.
/// Differences within the tolerance count as a plateau. At least window + 1 laps with time are
/// required.
pub fn time_trend(
    series: &LapTimeSeries,
    window: usize,
    tolerance: f64,
) -> Result<TimeTrend, InsufficientDataError> {
    let window = window.max(1);
    let laptimes = series.valid_laptimes();

    if laptimes.len() <= window {
        return Err(InsufficientDataError {
            required: window.saturating_add(1),
            available: laptimes.len(),
        });
    }

    // rolling average after every lap that completes a full window
    let mut rolling_window = RollingWindow::new(window);
    let mut rolling_avgs = Vec::with_capacity(laptimes.len() - window + 1);

    for &laptime in laptimes.iter() {
        rolling_window.push(laptime);
        if rolling_window.is_full() {
            rolling_avgs.extend(rolling_window.get_avg());
        }
    }

    let start_avg = rolling_avgs[0];
    let end_avg = rolling_avgs[rolling_avgs.len() - 1];

    let diff = end_avg - start_avg;
    let direction = if diff < -tolerance {
        TrendDirection::Improving
    } else if diff > tolerance {
        TrendDirection::Declining
    } else {
        TrendDirection::Plateau
    };

    Ok(TimeTrend {
        start_avg,
        end_avg,
        direction,
    })
}
