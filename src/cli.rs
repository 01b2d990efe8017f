use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "jacoco-total")]
#[command(about = "Print total instruction coverage from a JaCoCo CSV report")]
#[command(version)]
pub struct CliArgs {
    /// Path to the JaCoCo CSV report, or a directory containing jacoco.csv
    /// Falls back to $JACOCO_CSV, then target/site/jacoco/jacoco.csv
    #[arg(value_name = "REPORT")]
    pub report: Option<PathBuf>,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_is_valid() {
        let args = CliArgs::try_parse_from(["jacoco-total"]).expect("no arguments should parse");
        assert!(args.report.is_none());
    }

    #[test]
    fn test_positional_report_path() {
        let args = CliArgs::try_parse_from(["jacoco-total", "build/jacoco.csv"]).expect("path should parse");
        assert_eq!(args.report, Some(PathBuf::from("build/jacoco.csv")));
    }

    #[test]
    fn test_extra_positional_rejected() {
        assert!(CliArgs::try_parse_from(["jacoco-total", "a.csv", "b.csv"]).is_err());
    }
}
