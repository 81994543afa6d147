//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: the Account entity and its balance operations
//! - `transfer`: transfer requests and failure records
//! - `error`: error types for the transfer engine

pub mod account;
pub mod error;
pub mod transfer;

pub use account::Account;
pub use error::TransferError;
pub use transfer::{AccountNumber, FailureReason, FailureRecord, MissingParty, TransferRequest};
