//! Run orchestration
//!
//! Wires the external loader, the transfer engine, and the reporter into a
//! single run: load accounts, load the transfer batch, process it, write
//! the final balances.
//!
//! # Error Handling
//!
//! Fatal errors (an input file that cannot be opened) are returned
//! immediately; the run never starts half-loaded. Malformed rows are
//! recoverable: they are logged with their line number and skipped, so a
//! bad row never reaches the registry or the engine.

use crate::core::{process_batch, AccountRegistry, BatchReport};
use crate::io::csv_format::write_balances_csv;
use crate::io::reader::{AccountReader, TransferReader};
use crate::types::{TransferError, TransferRequest};
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

/// Load the account registry from the accounts file
///
/// Malformed rows are skipped with a warning. A later row for an
/// already-known account number replaces the earlier one.
///
/// # Errors
///
/// Returns an error if the file cannot be opened.
pub fn load_accounts(path: &Path) -> Result<AccountRegistry, TransferError> {
    let reader = AccountReader::new(path)?;
    let mut registry = AccountRegistry::new();

    for result in reader {
        match result {
            Ok(account) => registry.put(account),
            Err(e) => warn!("Skipping account row: {}", e),
        }
    }

    info!(accounts = registry.len(), "accounts loaded");

    Ok(registry)
}

/// Load the ordered transfer batch from the transfers file
///
/// Malformed rows are skipped with a warning; the surviving requests keep
/// their file order, which is the order the engine will apply them in.
///
/// # Errors
///
/// Returns an error if the file cannot be opened.
pub fn load_transfers(path: &Path) -> Result<Vec<TransferRequest>, TransferError> {
    let reader = TransferReader::new(path)?;
    let mut batch = Vec::new();

    for result in reader {
        match result {
            Ok(request) => batch.push(request),
            Err(e) => warn!("Skipping transfer row: {}", e),
        }
    }

    info!(transfers = batch.len(), "transfer batch loaded");

    Ok(batch)
}

/// Execute a complete run
///
/// Loads both inputs, applies the batch, and writes the final balances to
/// `output`. Returns the batch report so the caller can inspect or log the
/// failure side of the outcome.
///
/// # Errors
///
/// Returns an error if an input file cannot be opened or the output cannot
/// be written. Per-request transfer failures are not errors; they are part
/// of the returned report.
pub fn run(
    accounts_path: &Path,
    transfers_path: &Path,
    output: &mut dyn Write,
) -> Result<BatchReport, TransferError> {
    let mut registry = load_accounts(accounts_path)?;
    let batch = load_transfers(transfers_path)?;

    let report = process_batch(&mut registry, &batch);

    write_balances_csv(&registry, output)?;

    Ok(report)
}
