// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod aggregate;
mod cli;
mod config;
mod error;
mod report;
mod types;
mod ui;

use log::debug;

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Resolve the report location once, up front
    let report_path = config::resolve_report_path(&args);
    debug!("Report path resolved to {:?}", report_path);

    // Aggregate everything before printing anything, so a bad row never
    // leaves a partial summary behind
    let summary = match aggregate::summarize_report(&report_path) {
        Ok(summary) => summary,
        Err(e) => {
            ui::print_error(&e.to_string());
            std::process::exit(1);
        }
    };

    if summary.is_empty() {
        debug!("No instructions counted in {:?}", report_path);
    }

    if let Err(e) = report::print_summary(&summary) {
        ui::print_error(&format!("failed to write summary: {}", e));
        std::process::exit(1);
    }
}
