//! Bank Transfer Engine CLI
//!
//! Command-line interface for applying a batch of money transfers from CSV
//! files.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- data/accounts.csv data/transfers.csv > balances.csv
//! ```
//!
//! The program loads accounts and transfer instructions from the two input
//! files, applies every transfer in file order, writes the final balances
//! to stdout, and logs skipped rows and failed transfers to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success (including runs where some transfers were recorded as failed)
//! - 1: Error (missing arguments, file not found, file not readable, etc.)

use bank_transfer_engine::cli;
use bank_transfer_engine::pipeline;
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    // Diagnostics go to stderr so stdout stays a clean balance report
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    // Parse command-line arguments using clap
    let args = cli::parse_args();

    // Run the pipeline; final balances go to stdout
    let mut output = std::io::stdout();
    match pipeline::run(&args.accounts_file, &args.transfers_file, &mut output) {
        Ok(report) => {
            let summary = report.summary();
            info!(total_failed = summary.total_failed, "batch complete");
            for reason in &summary.reasons {
                info!("failed transfer: {}", reason);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
