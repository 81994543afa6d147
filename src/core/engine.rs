//! Transfer processing engine
//!
//! This module applies an ordered batch of transfer requests against the
//! account registry and produces the failure log for any request that
//! could not be fully applied.
//!
//! The engine enforces the batch rules:
//! - Requests are applied strictly in input order, one at a time; a later
//!   request may depend on balance changes made by an earlier one
//! - A failed request never stops the batch; it is recorded and skipped
//! - Each request is all-or-nothing: the withdraw/deposit pair either both
//!   happen or neither does

use crate::core::registry::AccountRegistry;
use crate::types::{FailureReason, FailureRecord, MissingParty, TransferRequest};
use tracing::{debug, warn};

/// Outcome of processing one batch
///
/// Owns the ordered failure log for the run. The registry itself carries
/// the balance side of the outcome; this report carries everything that
/// did not happen.
#[derive(Debug, Default)]
pub struct BatchReport {
    failures: Vec<FailureRecord>,
}

impl BatchReport {
    /// The accumulated failure log, in detection order
    pub fn failures(&self) -> &[FailureRecord] {
        &self.failures
    }

    /// Whether every request in the batch was applied
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Derived view of the failure log for reporting
    pub fn summary(&self) -> BatchSummary {
        BatchSummary {
            total_failed: self.failures.len(),
            reasons: self
                .failures
                .iter()
                .map(|failure| failure.reason.to_string())
                .collect(),
        }
    }
}

/// Failure counts and reasons, purely computed from the failure log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    /// Number of requests that were not applied
    pub total_failed: usize,

    /// One reason string per failure, in detection order
    pub reasons: Vec<String>,
}

/// Apply an ordered batch of transfer requests against the registry
///
/// Requests are applied in exactly the order supplied; no filtering or
/// reordering happens here. The registry is borrowed exclusively for the
/// duration of the call, so no other component can observe or mutate
/// balances mid-batch. Balances reflect every successfully applied request
/// on return; the report holds one record per unsuccessful request.
pub fn process_batch(registry: &mut AccountRegistry, batch: &[TransferRequest]) -> BatchReport {
    let mut failures = Vec::new();

    for request in batch {
        match apply_transfer(registry, request) {
            Ok(()) => {
                debug!(%request, "transfer applied");
            }
            Err(reason) => {
                warn!(%request, %reason, "transfer failed");
                failures.push(FailureRecord::new(request.clone(), reason));
            }
        }
    }

    BatchReport { failures }
}

/// Apply a single transfer request, or explain why it cannot be applied
///
/// Validation order: resolve both parties, check funds, then mutate.
/// No account is touched until every check has passed, and a deposit-side
/// failure after a successful withdrawal re-credits the source, so a
/// request is never left half-applied.
fn apply_transfer(
    registry: &mut AccountRegistry,
    request: &TransferRequest,
) -> Result<(), FailureReason> {
    if let Some(missing) = missing_party(registry, request) {
        return Err(FailureReason::AccountNotFound { missing });
    }

    let covered = registry
        .get(&request.source)
        .is_some_and(|source| source.can_withdraw(request.amount));
    if !covered {
        return Err(FailureReason::InsufficientFunds);
    }

    let Some(source) = registry.get_mut(&request.source) else {
        return Err(FailureReason::AccountNotFound {
            missing: MissingParty::Source,
        });
    };
    source
        .withdraw(request.amount)
        .map_err(|err| FailureReason::TransferExecution {
            detail: err.to_string(),
        })?;

    let deposit_result = registry
        .get_mut(&request.destination)
        .map(|destination| destination.deposit(request.amount));

    match deposit_result {
        Some(Ok(())) => Ok(()),
        Some(Err(err)) => {
            recredit_source(registry, request);
            Err(FailureReason::TransferExecution {
                detail: err.to_string(),
            })
        }
        None => {
            recredit_source(registry, request);
            Err(FailureReason::AccountNotFound {
                missing: MissingParty::Destination,
            })
        }
    }
}

/// Determine which side(s) of the request are absent from the registry
fn missing_party(registry: &AccountRegistry, request: &TransferRequest) -> Option<MissingParty> {
    match (
        registry.contains(&request.source),
        registry.contains(&request.destination),
    ) {
        (true, true) => None,
        (false, true) => Some(MissingParty::Source),
        (true, false) => Some(MissingParty::Destination),
        (false, false) => Some(MissingParty::Both),
    }
}

/// Put withdrawn funds back after a failed deposit
///
/// Restores the exact balance the source held before the withdrawal, which
/// cannot overflow.
fn recredit_source(registry: &mut AccountRegistry, request: &TransferRequest) {
    if let Some(source) = registry.get_mut(&request.source) {
        if source.deposit(request.amount).is_err() {
            warn!(%request, "failed to re-credit source after deposit failure");
        }
    }
}
