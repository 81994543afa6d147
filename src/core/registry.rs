//! Account registry
//!
//! This module provides the `AccountRegistry` struct which holds all
//! account state for a run.
//!
//! The registry is responsible for:
//! - Storing accounts keyed by account number, unique keys
//! - Lookups without side effects (unknown numbers are never provisioned)
//! - Preserving insertion order for reporting
//!
//! It assumes a single logical writer per run: the loader populates it,
//! then the transfer engine holds the only mutable handle while a batch is
//! processed.

use crate::types::{Account, AccountNumber};
use std::collections::HashMap;

/// Keyed store of all accounts for a run
///
/// Backed by a map for lookups plus a side list of account numbers so that
/// reporting can iterate in insertion order. Insertion order carries no
/// processing semantics; it only makes the final report mirror the input
/// file.
#[derive(Debug, Default)]
pub struct AccountRegistry {
    /// Map of account numbers to account state
    accounts: HashMap<AccountNumber, Account>,

    /// Account numbers in first-insertion order
    order: Vec<AccountNumber>,
}

impl AccountRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        AccountRegistry {
            accounts: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Insert or replace the account at its number
    ///
    /// Used only during load. A later account with an already-known number
    /// replaces the earlier one without changing its reporting position.
    pub fn put(&mut self, account: Account) {
        if !self.accounts.contains_key(&account.number) {
            self.order.push(account.number.clone());
        }
        self.accounts.insert(account.number.clone(), account);
    }

    /// Look up an account by number
    ///
    /// Returns `None` for unknown numbers; never creates an account.
    pub fn get(&self, number: &str) -> Option<&Account> {
        self.accounts.get(number)
    }

    /// Look up an account by number for mutation
    pub fn get_mut(&mut self, number: &str) -> Option<&mut Account> {
        self.accounts.get_mut(number)
    }

    /// Check whether an account number is known
    pub fn contains(&self, number: &str) -> bool {
        self.accounts.contains_key(number)
    }

    /// Iterate over all accounts in insertion order
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.order.iter().filter_map(|number| self.accounts.get(number))
    }

    /// Number of accounts in the registry
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the registry holds no accounts
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_new_creates_empty_registry() {
        let registry = AccountRegistry::new();

        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert_eq!(registry.accounts().count(), 0);
    }

    #[test]
    fn test_put_and_get() {
        let mut registry = AccountRegistry::new();

        registry.put(Account::new("1111234522226789", Decimal::new(500000, 2)));

        let account = registry.get("1111234522226789").unwrap();
        assert_eq!(account.number, "1111234522226789");
        assert_eq!(account.balance, Decimal::new(500000, 2));
    }

    #[test]
    fn test_get_unknown_number_returns_none() {
        let registry = AccountRegistry::new();

        assert!(registry.get("0000000000000000").is_none());
        // Lookups must not provision accounts
        assert!(registry.is_empty());
    }

    #[test]
    fn test_get_mut_allows_balance_mutation() {
        let mut registry = AccountRegistry::new();
        registry.put(Account::new("1111234522226789", Decimal::new(10000, 2)));

        let account = registry.get_mut("1111234522226789").unwrap();
        account.deposit(Decimal::new(5000, 2)).unwrap();

        assert_eq!(
            registry.get("1111234522226789").unwrap().balance,
            Decimal::new(15000, 2)
        );
    }

    #[test]
    fn test_contains() {
        let mut registry = AccountRegistry::new();
        registry.put(Account::new("1111234522226789", Decimal::ZERO));

        assert!(registry.contains("1111234522226789"));
        assert!(!registry.contains("0000000000000000"));
    }

    #[test]
    fn test_accounts_iterates_in_insertion_order() {
        let mut registry = AccountRegistry::new();
        registry.put(Account::new("3212343433335755", Decimal::ZERO));
        registry.put(Account::new("1111234522226789", Decimal::ZERO));
        registry.put(Account::new("2222123433331212", Decimal::ZERO));

        let numbers: Vec<&str> = registry.accounts().map(|a| a.number.as_str()).collect();

        assert_eq!(
            numbers,
            vec!["3212343433335755", "1111234522226789", "2222123433331212"]
        );
    }

    #[test]
    fn test_put_replaces_existing_account_without_reordering() {
        let mut registry = AccountRegistry::new();
        registry.put(Account::new("1111234522226789", Decimal::new(10000, 2)));
        registry.put(Account::new("2222123433331212", Decimal::new(20000, 2)));

        // Same number again: last row wins, position stays
        registry.put(Account::new("1111234522226789", Decimal::new(99900, 2)));

        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.get("1111234522226789").unwrap().balance,
            Decimal::new(99900, 2)
        );

        let numbers: Vec<&str> = registry.accounts().map(|a| a.number.as_str()).collect();
        assert_eq!(numbers, vec!["1111234522226789", "2222123433331212"]);
    }
}
