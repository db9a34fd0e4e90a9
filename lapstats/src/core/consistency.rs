use crate::core::series::LapTimeSeries;
use helpers::general::{mean, median_upper, min, round_to, sample_variance, InsufficientDataError};

/// * `variance` - (s^2) Sample variance of the valid lap times
/// * `stddev` - (s) Sample standard deviation of the valid lap times
#[derive(Debug, Clone, PartialEq)]
pub struct ConsistencyMetrics {
    pub variance: f64,
    pub stddev: f64,
}

/// consistency_metrics calculates variance and standard deviation (N - 1 denominator) over all
/// laps with time. At least two of them are required.
pub fn consistency_metrics(
    series: &LapTimeSeries,
) -> Result<ConsistencyMetrics, InsufficientDataError> {
    let valid_laptimes = series.valid_laptimes();
    let variance = sample_variance(&valid_laptimes).ok_or(InsufficientDataError {
        required: 2,
        available: valid_laptimes.len(),
    })?;

    Ok(ConsistencyMetrics {
        variance,
        stddev: variance.sqrt(),
    })
}

/// * `pci_mean` - Best lap time divided by the mean lap time (rounded to 3 decimals)
/// * `pci_median` - Best lap time divided by the median lap time (rounded to 3 decimals)
#[derive(Debug, Clone, PartialEq)]
pub struct PaceConsistencyIndex {
    pub pci_mean: f64,
    pub pci_median: f64,
}

/// pace_consistency_index quantifies how close to the best lap the typical lap is. The median
/// of an even number of values is the upper one of the two middle values. The values must not
/// contain laps without time, use LapTimeSeries::pace_consistency_index for a series.
pub fn pace_consistency_index(
    laptimes: &[f64],
) -> Result<PaceConsistencyIndex, InsufficientDataError> {
    let (avg, median) = match (mean(laptimes), median_upper(laptimes)) {
        (Some(avg), Some(median)) => (avg, median),
        _ => {
            return Err(InsufficientDataError {
                required: 1,
                available: laptimes.len(),
            })
        }
    };
    let best = min(laptimes);

    Ok(PaceConsistencyIndex {
        pci_mean: round_to(best / avg, 3),
        pci_median: round_to(best / median, 3),
    })
}
