//! Account entity for the transfer engine
//!
//! This module defines the Account structure and its balance operations.
//! The single invariant is that a balance is never negative: withdrawals
//! that would overdraw the account are refused.

use super::error::TransferError;
use super::transfer::AccountNumber;
use rust_decimal::Decimal;

/// A named balance holder
///
/// Created once at load time, mutated only through [`Account::withdraw`]
/// and [`Account::deposit`], never deleted during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// The account number, unique within the registry
    pub number: AccountNumber,

    /// Current balance, never negative
    pub balance: Decimal,
}

impl Account {
    /// Create an account with an opening balance
    ///
    /// The loader guarantees the opening balance is non-negative before an
    /// account enters the registry.
    pub fn new(number: impl Into<AccountNumber>, balance: Decimal) -> Self {
        Account {
            number: number.into(),
            balance,
        }
    }

    /// Check whether the account can cover a withdrawal of `amount`
    ///
    /// Pure predicate, no side effect.
    pub fn can_withdraw(&self, amount: Decimal) -> bool {
        self.balance >= amount
    }

    /// Deduct `amount` from the balance
    ///
    /// Refuses non-positive amounts and any withdrawal that would leave the
    /// balance negative. Callers are expected to check [`Account::can_withdraw`]
    /// first, but the operation itself never produces a negative balance.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `amount` is zero or negative
    /// - `amount` exceeds the current balance
    /// - Subtracting the amount would cause arithmetic underflow
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), TransferError> {
        if amount <= Decimal::ZERO {
            return Err(TransferError::NonPositiveAmount { amount });
        }

        if !self.can_withdraw(amount) {
            return Err(TransferError::insufficient_funds(
                &self.number,
                self.balance,
                amount,
            ));
        }

        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or_else(|| TransferError::arithmetic_underflow("withdraw", &self.number))?;

        Ok(())
    }

    /// Add `amount` to the balance
    ///
    /// Refuses non-positive amounts. There is no upper bound on a balance;
    /// the only failure beyond the positivity check is decimal overflow,
    /// which is refused rather than wrapped.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `amount` is zero or negative
    /// - Adding the amount would cause arithmetic overflow
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), TransferError> {
        if amount <= Decimal::ZERO {
            return Err(TransferError::NonPositiveAmount { amount });
        }

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| TransferError::arithmetic_overflow("deposit", &self.number))?;

        Ok(())
    }
}
