//! CSV format handling for input rows and the balance report
//!
//! This module centralizes all CSV format concerns, providing:
//! - Row structures for deserialization of the two input files
//! - Conversion from raw rows to domain types, with format validation
//! - Balance report serialization
//!
//! Input files are headerless: accounts as `accountNumber,balance` rows,
//! transfers as `fromAccount,toAccount,amount` rows. All functions are
//! pure (no I/O) for easy testing.

use crate::core::AccountRegistry;
use crate::types::{Account, AccountNumber, TransferError, TransferRequest};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// Raw account row as read from the accounts file
///
/// Fields are kept as strings so that validation failures can carry the
/// offending value in the error message.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AccountRow {
    pub number: String,
    pub balance: String,
}

/// Raw transfer row as read from the transfers file
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TransferRow {
    pub from: String,
    pub to: String,
    pub amount: String,
}

/// Validate an account number string
///
/// Account numbers must be exactly 16 ASCII digits. Surrounding whitespace
/// is tolerated and stripped.
pub fn parse_account_number(value: &str) -> Result<AccountNumber, TransferError> {
    let trimmed = value.trim();

    if trimmed.len() == 16 && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        Ok(trimmed.to_string())
    } else {
        Err(TransferError::invalid_account_number(trimmed))
    }
}

/// Parse a decimal amount string
fn parse_amount(value: &str) -> Result<Decimal, TransferError> {
    let trimmed = value.trim();

    Decimal::from_str(trimmed).map_err(|_| TransferError::invalid_amount(trimmed))
}

/// Convert an AccountRow into an Account
///
/// Validates the account-number format and requires a parseable,
/// non-negative opening balance: a negative balance would violate the
/// registry invariant the moment the account is inserted.
///
/// # Errors
///
/// Returns an error if:
/// - The account number is not exactly 16 digits
/// - The balance does not parse as a decimal
/// - The balance is negative
pub fn convert_account_row(row: AccountRow) -> Result<Account, TransferError> {
    let number = parse_account_number(&row.number)?;
    let balance = parse_amount(&row.balance)?;

    if balance < Decimal::ZERO {
        return Err(TransferError::NegativeOpeningBalance {
            account: number,
            balance,
        });
    }

    Ok(Account::new(number, balance))
}

/// Convert a TransferRow into a TransferRequest
///
/// Validates both account-number formats and requires a parseable,
/// strictly positive amount.
///
/// # Errors
///
/// Returns an error if:
/// - Either account number is not exactly 16 digits
/// - The amount does not parse as a decimal
/// - The amount is zero or negative
pub fn convert_transfer_row(row: TransferRow) -> Result<TransferRequest, TransferError> {
    let source = parse_account_number(&row.from)?;
    let destination = parse_account_number(&row.to)?;
    let amount = parse_amount(&row.amount)?;

    if amount <= Decimal::ZERO {
        return Err(TransferError::NonPositiveAmount { amount });
    }

    Ok(TransferRequest {
        source,
        destination,
        amount,
    })
}

/// Write final balances as CSV
///
/// Writes headerless `accountNumber,balance` rows with two decimal places,
/// in registry insertion order, mirroring the input file format.
///
/// # Errors
///
/// Returns an error if writing to the underlying output fails.
pub fn write_balances_csv(
    registry: &AccountRegistry,
    output: &mut dyn Write,
) -> Result<(), TransferError> {
    let mut writer = csv::Writer::from_writer(output);

    for account in registry.accounts() {
        writer.write_record(&[
            account.number.clone(),
            format!("{:.2}", account.balance),
        ])?;
    }

    writer.flush()?;

    Ok(())
}
