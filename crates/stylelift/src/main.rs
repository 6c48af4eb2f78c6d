//! Stylelift - shared CSS extraction for static sites
//!
//! Usage: stylelift [--root <PATH>] [--styles-path <PATH>] [--selectors-file <PATH>]
//!                  [--recursive] [--dry-run]

use std::process::ExitCode;

use clap::Parser;

use stylelift::{run, Args, Config};

fn main() -> ExitCode {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let config = Config::from(Args::parse());
    if config.dry_run {
        log::info!("Dry run, no files will be written");
    }

    match run(&config) {
        Ok(summary) => {
            println!("{}", summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
