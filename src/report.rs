//! Summary rendering.
//!
//! Turns a `CoverageSummary` into the plain-text report. Rendering writes to
//! any `std::io::Write`, so tests can capture output in a buffer while the
//! binary writes to stdout.

use crate::types::CoverageSummary;
use std::io::{self, Write};

/// Line printed when the report contains no instructions
pub const NO_INSTRUCTIONS: &str = "No instructions found.";

/// Writer for summary output
pub struct SummaryWriter<W: Write> {
    writer: W,
}

impl<W: Write> SummaryWriter<W> {
    /// Create a new summary writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write the full summary
    pub fn write_summary(&mut self, summary: &CoverageSummary) -> io::Result<()> {
        write!(self.writer, "{}", format_summary(summary))?;
        self.writer.flush()
    }
}

/// Format the summary as newline-terminated text.
///
/// Four lines when instructions were counted, otherwise the single
/// `No instructions found.` line.
pub fn format_summary(summary: &CoverageSummary) -> String {
    match summary {
        CoverageSummary::Instructions { total, covered, missed, percent } => format!(
            "Total Instructions: {}\nCovered: {}\nMissed: {}\nTotal Coverage: {:.2}%\n",
            total, covered, missed, percent
        ),
        CoverageSummary::Empty => format!("{}\n", NO_INSTRUCTIONS),
    }
}

/// Print the summary to stdout
pub fn print_summary(summary: &CoverageSummary) -> io::Result<()> {
    let stdout = io::stdout();
    SummaryWriter::new(stdout.lock()).write_summary(summary)
}

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;
