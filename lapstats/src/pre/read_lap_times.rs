use crate::core::series::LapTimeSeries;
use anyhow::Context;
use std::fs::OpenOptions;
use std::path::Path;

/// read_lap_times opens the CSV file and reads the lap times of the given entity. If the entity
/// is not one of the column headers, the returned error can be downcast to an
/// EntityNotFoundError.
pub fn read_lap_times(filepath: &Path, entity: &str) -> anyhow::Result<LapTimeSeries> {
    // open file
    let fh = OpenOptions::new()
        .read(true)
        .open(filepath)
        .context(format!("Failed to open lap time file {}!", filepath.display()))?;

    // read and parse the entity's column
    LapTimeSeries::from_reader(&fh, entity).context(format!(
        "Failed to read lap times of {} from {}!",
        entity,
        filepath.display()
    ))
}
