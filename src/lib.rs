//! Bank Transfer Engine Library
//! # Overview
//!
//! This library applies a batch of money-transfer instructions from CSV
//! files against a set of in-memory accounts and reports the resulting
//! balances plus any transfers that could not be applied.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, TransferRequest, FailureRecord, etc.)
//! - [`cli`] - CLI argument parsing
//! - [`core`] - Business logic components:
//!   - [`core::registry`] - Account storage and the non-negative-balance invariant
//!   - [`core::engine`] - Sequential batch application and failure accounting
//! - [`io`] - CSV input readers and the balance report writer
//! - [`pipeline`] - Run orchestration (load, process, report)
//!
//! # Processing Model
//!
//! A run is a single synchronous pass: the loader populates the account
//! registry and the ordered transfer batch, the engine applies each
//! request in exactly the order supplied, and the reporter writes the
//! final balances. Order matters: a later transfer may spend funds that an
//! earlier transfer in the same batch credited.
//!
//! # Failure Semantics
//!
//! A request that cannot be applied (unknown account, insufficient funds)
//! is recorded in an ordered failure log and skipped; it never stops the
//! batch. Each request is all-or-nothing: the source is never left debited
//! without the destination being credited.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod pipeline;
pub mod types;

pub use self::core::{process_batch, AccountRegistry, BatchReport, BatchSummary};
pub use io::write_balances_csv;
pub use pipeline::{load_accounts, load_transfers, run};
pub use types::{
    Account, AccountNumber, FailureReason, FailureRecord, MissingParty, TransferError,
    TransferRequest,
};
