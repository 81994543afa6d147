//! Core business logic module
//!
//! This module contains the components that own and mutate account state:
//! - `registry` - keyed account storage with the non-negative-balance invariant
//! - `engine` - sequential batch application and failure accounting

pub mod engine;
pub mod registry;

pub use engine::{process_batch, BatchReport, BatchSummary};
pub use registry::AccountRegistry;
