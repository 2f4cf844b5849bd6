// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod classify;
mod cli;
mod config;
mod input;
mod parser;
mod report;
mod runner;
mod types;
mod ui;

use std::io;

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Resolve configuration (validates arguments)
    let config = match config::build_report_config(&args) {
        Ok(c) => c,
        Err(e) => {
            ui::print_error(&format!("Configuration error: {}", e));
            std::process::exit(1);
        }
    };

    if config.input.is_none() {
        ui::notice("No input file specified, using empty input");
    }

    // Build the report
    let outcome = match runner::run_report(&config) {
        Ok(o) => o,
        Err(e) => {
            ui::print_error(&format!("Failed to build report: {}", e));
            std::process::exit(1);
        }
    };

    // Print the report
    let stdout = io::stdout();
    if let Err(e) = runner::write_report(&outcome, config.output_format, &mut stdout.lock()) {
        ui::print_error(&format!("Failed to write report: {}", e));
        std::process::exit(1);
    }

    // Export JSON report if requested
    if let Some(ref path) = config.json_export {
        match report::export_json_report(&outcome.to_json(), path) {
            Ok(_) => log::info!("JSON report saved to: {}", path.display()),
            Err(e) => ui::print_warning(&format!("Failed to save JSON report: {}", e)),
        }
    }
}
