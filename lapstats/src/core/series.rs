use crate::core::consistency::{pace_consistency_index, PaceConsistencyIndex};
use helpers::general::{EntityNotFoundError, InsufficientDataError};
use std::io;
use std::str;
use tracing::debug;

/// LapTimeSeries holds the lap times of a single entity (driver, car, ...) in chronological
/// order. A lap without a (parseable) time is stored as None. Laps are 1-based in all public
/// accessors.
#[derive(Debug, Clone, PartialEq)]
pub struct LapTimeSeries {
    pub entity: String,
    laptimes: Vec<Option<f64>>,
}

impl LapTimeSeries {
    pub fn new(entity: &str, laptimes: Vec<Option<f64>>) -> LapTimeSeries {
        LapTimeSeries {
            entity: entity.to_owned(),
            laptimes,
        }
    }

    pub fn empty(entity: &str) -> LapTimeSeries {
        LapTimeSeries::new(entity, Vec::new())
    }

    /// from_reader reads the column of the given entity from CSV data with a header row. Empty
    /// cells, missing cells and cells that cannot be decoded or parsed as a number result in a
    /// lap without time. Only the entity's column is decoded, broken cells elsewhere in a row do
    /// not matter. An EntityNotFoundError is returned if no header matches the entity.
    pub fn from_reader<R: io::Read>(rdr: R, entity: &str) -> anyhow::Result<LapTimeSeries> {
        let mut csv_rdr = csv::ReaderBuilder::new().flexible(true).from_reader(rdr);

        let col_idx = csv_rdr
            .byte_headers()?
            .iter()
            .position(|header| header == entity.as_bytes())
            .ok_or_else(|| EntityNotFoundError {
                entity: entity.to_owned(),
            })?;

        let mut laptimes = Vec::new();

        for (i, record) in csv_rdr.byte_records().enumerate() {
            let record = record?;
            let raw = record.get(col_idx);
            let laptime = parse_laptime(raw.and_then(|cell| str::from_utf8(cell).ok()));

            if laptime.is_none() {
                debug!(
                    "No valid lap time for {} in lap {} (raw value {:?})",
                    entity,
                    i + 1,
                    String::from_utf8_lossy(raw.unwrap_or(b""))
                );
            }
            laptimes.push(laptime);
        }

        Ok(LapTimeSeries::new(entity, laptimes))
    }

    /// Number of laps, including laps without time.
    pub fn len(&self) -> usize {
        self.laptimes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.laptimes.is_empty()
    }

    /// get returns the time of the given (1-based) lap, or None if the lap has no time or does
    /// not exist.
    pub fn get(&self, lap: usize) -> Option<f64> {
        if lap == 0 {
            return None;
        }
        self.laptimes.get(lap - 1).copied().flatten()
    }

    pub fn laptimes(&self) -> &[Option<f64>] {
        &self.laptimes
    }

    /// valid_laps returns (lap, time) pairs of all laps with time.
    pub fn valid_laps(&self) -> Vec<(usize, f64)> {
        self.laptimes
            .iter()
            .enumerate()
            .filter_map(|(i, laptime)| laptime.map(|t| (i + 1, t)))
            .collect()
    }

    pub fn valid_laptimes(&self) -> Vec<f64> {
        self.laptimes.iter().flatten().copied().collect()
    }

    /// pace_consistency_index calculates the PCI over the laps with time only.
    pub fn pace_consistency_index(&self) -> Result<PaceConsistencyIndex, InsufficientDataError> {
        pace_consistency_index(&self.valid_laptimes())
    }
}

/// parse_laptime converts a raw cell into a lap time. Missing or blank cells as well as values
/// that are not a number yield None.
pub fn parse_laptime(raw: Option<&str>) -> Option<f64> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<f64>().ok().filter(|t| t.is_finite())
}
