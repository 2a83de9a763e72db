//! Export the aggregated sequence as tab-separated text.
//!
//! One line per half-hour interval, four fields joined by tabs:
//! `from`, `to`, `forecast`, `actual`. No header row, no escaping (the API
//! values never contain tabs or newlines). A missing `actual` renders as an
//! empty field.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::domain::IntensityRecord;
use crate::error::AppError;

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

/// Write the aggregated sequence to `path`, creating or truncating it.
///
/// Lines come out in sequence order; any I/O failure is fatal.
pub fn write_intensity_tsv(path: &Path, records: &[IntensityRecord]) -> Result<(), AppError> {
    let write_err =
        |e: std::io::Error| AppError::new(2, format!("Failed to write '{}': {e}", path.display()));

    let file = File::create(path).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to create output file '{}': {e}", path.display()),
        )
    })?;
    let mut out = BufWriter::new(file);

    for record in records {
        out.write_all(render_line(record).as_bytes())
            .and_then(|()| out.write_all(LINE_ENDING.as_bytes()))
            .map_err(write_err)?;
    }

    out.flush().map_err(write_err)?;

    Ok(())
}

/// Render one record as its four tab-joined fields, without a terminator.
fn render_line(record: &IntensityRecord) -> String {
    let actual = record
        .intensity
        .actual
        .map(|v| v.to_string())
        .unwrap_or_default();
    format!(
        "{}\t{}\t{}\t{}",
        record.from, record.to, record.intensity.forecast, actual
    )
}
