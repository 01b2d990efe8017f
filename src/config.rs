/// Configuration resolution module
///
/// This module handles:
/// - Picking the report path from the CLI argument, environment, or default
/// - Resolving a report directory to the jacoco.csv inside it
use crate::cli::CliArgs;
use log::debug;
use std::env;
use std::path::PathBuf;

/// Where Maven's jacoco plugin writes its CSV report, relative to the project
pub const DEFAULT_REPORT_PATH: &str = "target/site/jacoco/jacoco.csv";

/// Environment variable consulted when no path argument is given
pub const REPORT_ENV_VAR: &str = "JACOCO_CSV";

/// File name looked up when the resolved path is a directory
pub const REPORT_FILE_NAME: &str = "jacoco.csv";

/// Resolve the report path from CLI arguments and the process environment
pub fn resolve_report_path(args: &CliArgs) -> PathBuf {
    resolve_report_path_with(args, env::var(REPORT_ENV_VAR).ok())
}

/// Resolve the report path with an explicit environment value.
///
/// Precedence: CLI argument, then `env_value` (ignored when empty), then
/// `DEFAULT_REPORT_PATH`. An existing directory resolves to its jacoco.csv.
pub fn resolve_report_path_with(args: &CliArgs, env_value: Option<String>) -> PathBuf {
    let path = if let Some(ref path) = args.report {
        debug!("Using report path from argument: {:?}", path);
        path.clone()
    } else if let Some(value) = env_value.filter(|v| !v.is_empty()) {
        debug!("Using report path from ${}: {}", REPORT_ENV_VAR, value);
        PathBuf::from(value)
    } else {
        debug!("Using default report path {}", DEFAULT_REPORT_PATH);
        PathBuf::from(DEFAULT_REPORT_PATH)
    };

    if path.is_dir() { path.join(REPORT_FILE_NAME) } else { path }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
