/// Report aggregation
///
/// This module handles:
/// - Opening the report file
/// - Checking the header for the two instruction columns
/// - Streaming rows and folding them into an `Aggregate`
use crate::error::{ReportError, ReportResult};
use crate::types::*;
use csv::{ReaderBuilder, StringRecord};
use log::debug;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Summarize the report at `path`.
///
/// The file is owned by the csv reader for the duration of the pass and is
/// closed when it is dropped, on success and on every error path.
pub fn summarize_report(path: &Path) -> ReportResult<CoverageSummary> {
    debug!("Opening report {:?}", path);

    let file = File::open(path).map_err(|source| ReportError::FileAccess { path: path.to_path_buf(), source })?;

    summarize_reader(file, &path.display().to_string())
}

/// Summarize a report read from any source.
///
/// `source_name` is only used in error messages and logs.
pub fn summarize_reader<R: Read>(reader: R, source_name: &str) -> ReportResult<CoverageSummary> {
    let aggregate = aggregate_reader(reader, source_name)?;
    Ok(aggregate.summary())
}

/// Single forward pass over the report.
///
/// One record buffer is reused for every row, so memory stays constant
/// regardless of report size.
pub fn aggregate_reader<R: Read>(reader: R, source_name: &str) -> ReportResult<Aggregate> {
    // Rows with extra trailing fields are fine; short rows fail when a
    // required field is missing.
    let mut csv_reader = ReaderBuilder::new().has_headers(true).flexible(true).from_reader(reader);

    let headers = csv_reader.headers().map_err(|source| ReportError::Header { source })?.clone();
    if headers.is_empty() {
        return Err(ReportError::EmptyReport { source_name: source_name.to_string() });
    }
    check_required_columns(&headers)?;

    let mut aggregate = Aggregate::new();
    let mut record = StringRecord::new();
    // Header is line 1
    let mut line: u64 = 1;

    while csv_reader.read_record(&mut record).map_err(|e| ReportError::malformed_row(e, line + 1))? {
        line = record.position().map(|p| p.line()).unwrap_or(line + 1);

        let row: ReportRow = record.deserialize(Some(&headers)).map_err(|e| ReportError::malformed_row(e, line))?;
        aggregate.add(&row).ok_or(ReportError::Overflow { line })?;
    }

    debug!(
        "Aggregated {} rows from {}: missed={} covered={}",
        aggregate.rows, source_name, aggregate.total_missed, aggregate.total_covered
    );

    Ok(aggregate)
}

/// Fail early if the header does not name both instruction columns
fn check_required_columns(headers: &StringRecord) -> ReportResult<()> {
    for column in [MISSED_COLUMN, COVERED_COLUMN] {
        match headers.iter().position(|h| h == column) {
            Some(index) => debug!("Column {} at position {}", column, index),
            None => return Err(ReportError::MissingColumn { column }),
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "aggregate_test.rs"]
mod aggregate_test;
