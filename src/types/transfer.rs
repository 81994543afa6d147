//! Transfer-related types for the transfer engine
//!
//! This module defines the transfer request value object, the failure
//! record appended to the batch failure log, and the closed set of failure
//! reasons.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::fmt;

/// Account identifier
///
/// A fixed-format numeric string (exactly 16 digits in the reference data).
/// The format is validated by the loader; the core treats account numbers
/// as opaque strings.
pub type AccountNumber = String;

/// A single money-transfer instruction
///
/// Immutable value object: consumed exactly once by the engine, in the
/// position it occupies within the ordered batch. The amount is strictly
/// positive, enforced by the loader before the request reaches the core
/// and asserted again by the account operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    /// Account number to debit
    pub source: AccountNumber,

    /// Account number to credit
    pub destination: AccountNumber,

    /// Amount to move, strictly greater than zero
    pub amount: Decimal,
}

impl TransferRequest {
    /// Create a new transfer request
    pub fn new(
        source: impl Into<AccountNumber>,
        destination: impl Into<AccountNumber>,
        amount: Decimal,
    ) -> Self {
        TransferRequest {
            source: source.into(),
            destination: destination.into(),
            amount,
        }
    }
}

impl fmt::Display for TransferRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} for {}", self.source, self.destination, self.amount)
    }
}

/// Which side(s) of a transfer could not be resolved in the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingParty {
    /// The source account is unknown
    Source,
    /// The destination account is unknown
    Destination,
    /// Both accounts are unknown
    Both,
}

impl fmt::Display for MissingParty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingParty::Source => write!(f, "source"),
            MissingParty::Destination => write!(f, "destination"),
            MissingParty::Both => write!(f, "source and destination"),
        }
    }
}

/// Why a transfer request was not applied
///
/// Closed set of reason categories. `TransferExecution` absorbs any
/// unexpected failure during the withdraw/deposit step; with pre-checked
/// withdrawals it is only reachable through checked-arithmetic failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// One or both parties of the transfer are absent from the registry
    AccountNotFound {
        /// Which side(s) were missing
        missing: MissingParty,
    },

    /// Source balance is less than the requested amount
    InsufficientFunds,

    /// The withdraw/deposit step itself failed
    TransferExecution {
        /// Description of the underlying failure
        detail: String,
    },
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::AccountNotFound { missing } => {
                write!(f, "{} account not found", missing)
            }
            FailureReason::InsufficientFunds => write!(f, "insufficient funds"),
            FailureReason::TransferExecution { detail } => {
                write!(f, "transfer execution failed: {}", detail)
            }
        }
    }
}

/// A transfer request that could not be applied
///
/// Appended to the ordered failure log by the engine; never mutated
/// afterward. The timestamp records when the failure was detected and is
/// for audit/debugging only; it is never used in processing logic.
#[derive(Debug, Clone)]
pub struct FailureRecord {
    /// The request that failed
    pub request: TransferRequest,

    /// Why it failed
    pub reason: FailureReason,

    /// When the failure was detected
    pub timestamp: DateTime<Utc>,
}

impl FailureRecord {
    /// Create a failure record stamped with the current time
    pub fn new(request: TransferRequest, reason: FailureReason) -> Self {
        FailureRecord {
            request,
            reason,
            timestamp: Utc::now(),
        }
    }
}
