use crate::core::series::LapTimeSeries;
use helpers::general::{ensure_len, min, InsufficientDataError};
use std::fmt;

/// LapDelta is the lap time of a lap compared to the lap before. A lap without time is kept as
/// NoTime such that the deltas line up with the laps of the series.
#[derive(Debug, Clone, PartialEq)]
pub enum LapDelta {
    NoTime { lap: usize },
    Timed { lap: usize, time: f64, delta: f64 },
}

impl LapDelta {
    pub fn lap(&self) -> usize {
        match *self {
            LapDelta::NoTime { lap } => lap,
            LapDelta::Timed { lap, .. } => lap,
        }
    }

    pub fn delta(&self) -> Option<f64> {
        match *self {
            LapDelta::NoTime { .. } => None,
            LapDelta::Timed { delta, .. } => Some(delta),
        }
    }
}

/// Returns '+' for a delta of zero or more and '-' otherwise.
pub fn delta_sign(delta: f64) -> char {
    if delta >= 0.0 {
        '+'
    } else {
        '-'
    }
}

impl fmt::Display for LapDelta {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            LapDelta::NoTime { lap } => write!(f, "Lap {}: No time", lap),
            LapDelta::Timed { lap, time, delta } => write!(
                f,
                "Lap {}: {:.3} ({}{:.3})",
                lap,
                time,
                delta_sign(delta),
                delta.abs()
            ),
        }
    }
}

/// previous_lap_deltas returns one entry per lap of the series. The first lap has a delta of
/// zero, and so has every lap following a lap without time.
pub fn previous_lap_deltas(series: &LapTimeSeries) -> Vec<LapDelta> {
    let laptimes = series.laptimes();

    laptimes
        .iter()
        .enumerate()
        .map(|(i, laptime)| match *laptime {
            None => LapDelta::NoTime { lap: i + 1 },
            Some(time) => {
                let delta = match i {
                    0 => 0.0,
                    _ => laptimes[i - 1].map_or(0.0, |prev| time - prev),
                };
                LapDelta::Timed {
                    lap: i + 1,
                    time,
                    delta,
                }
            }
        })
        .collect()
}

/// BestLapDelta is the lap time of a lap compared to the best lap of the series.
#[derive(Debug, Clone, PartialEq)]
pub struct BestLapDelta {
    pub lap: usize,
    pub time: f64,
    pub delta: f64,
}

impl fmt::Display for BestLapDelta {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Lap {}: {:.3} ({:+.3})", self.lap, self.time, self.delta)
    }
}

/// best_lap_deltas returns the deltas of all laps with time to the best lap. Laps without time
/// are skipped. At least one lap with time is required.
pub fn best_lap_deltas(series: &LapTimeSeries) -> Result<Vec<BestLapDelta>, InsufficientDataError> {
    let valid_laptimes = series.valid_laptimes();
    ensure_len(&valid_laptimes, 1)?;

    let best = min(&valid_laptimes);

    Ok(series
        .valid_laps()
        .into_iter()
        .map(|(lap, time)| BestLapDelta {
            lap,
            time,
            delta: time - best,
        })
        .collect())
}
