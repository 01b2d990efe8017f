/// Core data structures for coverage aggregation
///
/// This module defines the row shape decoded from a JaCoCo CSV report,
/// the running totals built from those rows, and the summary handed to
/// the report printer.
use serde::{Deserialize, Deserializer};

/// Header name of the missed-instructions column
pub const MISSED_COLUMN: &str = "INSTRUCTION_MISSED";

/// Header name of the covered-instructions column
pub const COVERED_COLUMN: &str = "INSTRUCTION_COVERED";

/// A single data row of the report.
///
/// Only the two instruction columns are decoded; every other column
/// (GROUP, PACKAGE, CLASS, BRANCH_*, LINE_*, ...) is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ReportRow {
    #[serde(rename = "INSTRUCTION_MISSED", deserialize_with = "decimal_count")]
    pub instructions_missed: u64,

    #[serde(rename = "INSTRUCTION_COVERED", deserialize_with = "decimal_count")]
    pub instructions_covered: u64,
}

/// Parse a count made only of ASCII digits.
///
/// `u64::from_str` would also accept a leading `+`, which the report format
/// does not allow.
pub fn parse_count(value: &str) -> Result<u64, String> {
    if value.is_empty() {
        return Err("empty instruction count".to_string());
    }
    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("invalid instruction count {:?}", value));
    }
    value.parse::<u64>().map_err(|_| format!("instruction count {:?} is too large", value))
}

fn decimal_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_count(&raw).map_err(serde::de::Error::custom)
}

/// Running instruction totals for one pass over a report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Aggregate {
    pub total_missed: u64,
    pub total_covered: u64,
    /// Number of data rows consumed
    pub rows: u64,
}

impl Aggregate {
    /// Create an empty aggregate
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one row into the totals.
    ///
    /// Returns `None` (leaving `self` untouched) if either total, or their
    /// sum, would overflow.
    pub fn add(&mut self, row: &ReportRow) -> Option<()> {
        let missed = self.total_missed.checked_add(row.instructions_missed)?;
        let covered = self.total_covered.checked_add(row.instructions_covered)?;
        missed.checked_add(covered)?;

        self.total_missed = missed;
        self.total_covered = covered;
        self.rows += 1;
        Some(())
    }

    /// Missed plus covered
    pub fn total(&self) -> u64 {
        self.total_missed + self.total_covered
    }

    /// Percentage of instructions covered, or `None` when there are none
    pub fn percent_covered(&self) -> Option<f64> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        Some(self.total_covered as f64 / total as f64 * 100.0)
    }

    /// Reduce the totals to the summary that gets printed
    pub fn summary(&self) -> CoverageSummary {
        match self.percent_covered() {
            Some(percent) => CoverageSummary::Instructions {
                total: self.total(),
                covered: self.total_covered,
                missed: self.total_missed,
                percent,
            },
            None => CoverageSummary::Empty,
        }
    }
}

/// Outcome of a successful aggregation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoverageSummary {
    /// At least one instruction was counted
    Instructions { total: u64, covered: u64, missed: u64, percent: f64 },
    /// No rows, or every row was zero
    Empty,
}

impl CoverageSummary {
    /// Check if no instructions were found
    pub fn is_empty(&self) -> bool {
        matches!(self, CoverageSummary::Empty)
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
