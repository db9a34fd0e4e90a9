use std::error::Error;
use std::fmt;

/// InputValueError is used if some analysis option or parameter does not fulfill the posed
/// requirements, e.g., a negative time loss threshold.
#[derive(Debug, Clone)]
pub struct InputValueError;

impl fmt::Display for InputValueError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Invalid input value")
    }
}

impl Error for InputValueError {}

/// EntityNotFoundError is used if the requested entity (e.g. a driver or car name) is not one of
/// the column headers of the lap time source.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityNotFoundError {
    pub entity: String,
}

impl fmt::Display for EntityNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Entity {} not found", self.entity)
    }
}

impl Error for EntityNotFoundError {}

/// InsufficientDataError is returned by metrics that need a minimum number of valid values.
#[derive(Debug, Clone, PartialEq)]
pub struct InsufficientDataError {
    pub required: usize,
    pub available: usize,
}

impl fmt::Display for InsufficientDataError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Not enough data (requires at least {} valid values, got {})",
            self.required, self.available
        )
    }
}

impl Error for InsufficientDataError {}

/// ensure_len returns an InsufficientDataError if x contains less than `required` values.
pub fn ensure_len<T>(x: &[T], required: usize) -> Result<(), InsufficientDataError> {
    if x.len() < required {
        return Err(InsufficientDataError {
            required,
            available: x.len(),
        });
    }
    Ok(())
}

/// argmin returns the index of the minimum value in the array x. In case of ties the first
/// occurrence wins. x must not be empty.
pub fn argmin<T: std::cmp::PartialOrd>(x: &[T]) -> usize {
    let (min_idx, _min_val) =
        x.iter()
            .enumerate()
            .fold((0, &x[0]), |(idx_min, val_min), (idx, val)| {
                if val_min <= val {
                    (idx_min, val_min)
                } else {
                    (idx, val)
                }
            });
    min_idx
}

/// argmax returns the index of the maximum value in the array x. In case of ties the last
/// occurrence wins. x must not be empty.
pub fn argmax<T: std::cmp::PartialOrd>(x: &[T]) -> usize {
    let (max_idx, _max_val) =
        x.iter()
            .enumerate()
            .fold((0, &x[0]), |(idx_max, val_max), (idx, val)| {
                if val_max > val {
                    (idx_max, val_max)
                } else {
                    (idx, val)
                }
            });
    max_idx
}

/// min returns the minimum value in the array x. x must not be empty.
pub fn min<T: std::cmp::PartialOrd + std::marker::Copy>(x: &[T]) -> T {
    x[argmin(x)]
}

/// mean returns the arithmetic mean of x, or None for an empty array.
pub fn mean(x: &[f64]) -> Option<f64> {
    if x.is_empty() {
        return None;
    }
    Some(x.iter().sum::<f64>() / x.len() as f64)
}

/// median_upper returns the element at index len / 2 of the sorted array, i.e. the upper one of
/// the two middle elements for an even number of values (no averaging).
pub fn median_upper(x: &[f64]) -> Option<f64> {
    if x.is_empty() {
        return None;
    }
    let mut sorted = x.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    Some(sorted[sorted.len() / 2])
}

/// sample_variance returns the variance of x using the N - 1 denominator. At least two values
/// are required.
pub fn sample_variance(x: &[f64]) -> Option<f64> {
    if x.len() < 2 {
        return None;
    }
    let avg = mean(x)?;
    let sq_sum: f64 = x.iter().map(|val| (val - avg).powi(2)).sum();
    Some(sq_sum / (x.len() - 1) as f64)
}

/// round_to rounds x to the given number of decimal places.
pub fn round_to(x: f64, decimals: i32) -> f64 {
    let factor = 10.0_f64.powi(decimals);
    (x * factor).round() / factor
}
