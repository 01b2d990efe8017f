//! User-facing failure output
//!
//! Failures are reported as one plain line on stdout so the output of a
//! failed run is never mixed with a partial summary.

/// Format an error message as the single `Error: ...` line (no newline)
pub fn format_error(msg: &str) -> String {
    format!("Error: {}", msg)
}

/// Print an error message
pub fn print_error(msg: &str) {
    println!("{}", format_error(msg));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_line_prefix() {
        assert_eq!(format_error("cannot open report x.csv"), "Error: cannot open report x.csv");
    }

    #[test]
    fn test_error_is_single_line() {
        assert_eq!(format_error("bad row").lines().count(), 1);
    }
}
