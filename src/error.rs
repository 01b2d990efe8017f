//! Error types for report aggregation

use std::path::PathBuf;
use thiserror::Error;

/// Result type for aggregation operations
pub type ReportResult<T> = Result<T, ReportError>;

/// Everything that can stop a report from being summarized.
///
/// A report whose instruction totals are zero is not an error; it yields
/// `CoverageSummary::Empty` instead.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The report file could not be opened
    #[error("cannot open report {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The report has no header row
    #[error("report {source_name} is empty (no header row)")]
    EmptyReport { source_name: String },

    /// The header row does not name a required column
    #[error("report header is missing required column '{column}'")]
    MissingColumn { column: &'static str },

    /// Reading the header row failed
    #[error("cannot read report header: {source}")]
    Header {
        #[source]
        source: csv::Error,
    },

    /// A data row is missing a required field or has a non-numeric count
    #[error("malformed row at line {line}: {source}")]
    MalformedRow {
        line: u64,
        #[source]
        source: csv::Error,
    },

    /// Instruction totals no longer fit in a u64
    #[error("instruction count overflow at line {line}")]
    Overflow { line: u64 },
}

impl ReportError {
    /// Wrap a csv error raised while decoding a data row.
    ///
    /// The line number comes from the csv position when available, falling
    /// back to the caller's running line counter.
    pub fn malformed_row(source: csv::Error, fallback_line: u64) -> Self {
        let line = source.position().map(|p| p.line()).unwrap_or(fallback_line);
        ReportError::MalformedRow { line, source }
    }
}
