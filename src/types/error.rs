//! Error types for the transfer engine
//!
//! This module defines all error types that can occur while loading input
//! files and applying transfers.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: File not found, permission denied, etc. These are
//!   fatal: the run never starts without its inputs.
//! - **Row Validation Errors**: Malformed account numbers, unparseable
//!   amounts, etc. These are recoverable: the offending row is skipped.
//! - **Account Operation Errors**: Insufficient funds, non-positive amounts,
//!   checked-arithmetic failures. These are recoverable: the transfer is
//!   recorded as failed and the batch continues.

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the transfer engine
///
/// Each variant includes enough context to diagnose the failure from the
/// log output alone.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransferError {
    /// Input file could not be opened
    ///
    /// This is a fatal error that prevents processing from starting.
    #[error("Failed to open file '{path}': {message}")]
    FileOpen {
        /// The path that could not be opened
        path: String,
        /// The underlying OS error
        message: String,
    },

    /// I/O error occurred while reading or writing
    ///
    /// This is typically a fatal error (file permissions, disk full, etc.).
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    ///
    /// This is a recoverable error: the malformed row is skipped and
    /// loading continues with the next row.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    Parse {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// Account number does not match the expected fixed format
    ///
    /// Account numbers must be exactly 16 ASCII digits.
    /// This is a recoverable error: the row is skipped.
    #[error("Invalid account number '{value}': must be exactly 16 digits")]
    InvalidAccountNumber {
        /// The offending account number string
        value: String,
    },

    /// Amount field could not be parsed as a decimal
    ///
    /// This is a recoverable error: the row is skipped.
    #[error("Invalid amount '{value}'")]
    InvalidAmount {
        /// The offending amount string
        value: String,
    },

    /// Amount is zero or negative where a positive amount is required
    ///
    /// Transfer amounts and withdraw/deposit amounts must be strictly
    /// positive. This is a recoverable error.
    #[error("Amount must be positive, got {amount}")]
    NonPositiveAmount {
        /// The offending amount
        amount: Decimal,
    },

    /// Opening balance in the accounts file is negative
    ///
    /// Balances must be non-negative from the moment an account enters the
    /// registry. This is a recoverable error: the row is skipped.
    #[error("Negative opening balance {balance} for account {account}")]
    NegativeOpeningBalance {
        /// Account number from the offending row
        account: String,
        /// The negative balance value
        balance: Decimal,
    },

    /// Insufficient funds for a withdrawal
    ///
    /// This is a recoverable error: the transfer is recorded as failed and
    /// the account state remains unchanged.
    #[error("Insufficient funds in account {account}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Account number of the source account
        account: String,
        /// Current balance
        balance: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// Arithmetic overflow would occur
    ///
    /// This is a recoverable error: the mutation is refused to keep the
    /// account state intact.
    #[error("Arithmetic overflow in {operation} for account {account}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account number
        account: String,
    },

    /// Arithmetic underflow would occur
    ///
    /// This is a recoverable error: the mutation is refused to keep the
    /// account state intact.
    #[error("Arithmetic underflow in {operation} for account {account}")]
    ArithmeticUnderflow {
        /// Operation that would underflow
        operation: String,
        /// Account number
        account: String,
    },
}

// Conversion from io::Error to TransferError
impl From<std::io::Error> for TransferError {
    fn from(error: std::io::Error) -> Self {
        TransferError::Io {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to TransferError
impl From<csv::Error> for TransferError {
    fn from(error: csv::Error) -> Self {
        // Extract line number if available
        let line = error.position().map(|pos| pos.line());

        TransferError::Parse {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl TransferError {
    /// Create a FileOpen error
    pub fn file_open(path: &str, message: impl ToString) -> Self {
        TransferError::FileOpen {
            path: path.to_string(),
            message: message.to_string(),
        }
    }

    /// Create an InvalidAccountNumber error
    pub fn invalid_account_number(value: &str) -> Self {
        TransferError::InvalidAccountNumber {
            value: value.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(value: &str) -> Self {
        TransferError::InvalidAmount {
            value: value.to_string(),
        }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(account: &str, balance: Decimal, requested: Decimal) -> Self {
        TransferError::InsufficientFunds {
            account: account.to_string(),
            balance,
            requested,
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, account: &str) -> Self {
        TransferError::ArithmeticOverflow {
            operation: operation.to_string(),
            account: account.to_string(),
        }
    }

    /// Create an ArithmeticUnderflow error
    pub fn arithmetic_underflow(operation: &str, account: &str) -> Self {
        TransferError::ArithmeticUnderflow {
            operation: operation.to_string(),
            account: account.to_string(),
        }
    }
}
