//! Durable bookkeeping for the cash-flow ledger.

use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::warn;

use crate::config::StorageKeys;
use crate::core::time::{Clock, SystemClock};
use crate::domain::transaction::{Transaction, TransactionDraft, TransactionStatus};
use crate::errors::Result;
use crate::storage::KeyValueStore;

const ID_SUFFIX_LEN: usize = 9;
const ID_SUFFIX_CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Repository for the transaction list and the running balance.
///
/// The two values live under separate keys and are written independently:
/// `add_transaction` persists the list first and the balance second, with no
/// rollback in between. A failed balance write leaves the stores diverged
/// until `recompute_balance` is run.
pub struct LedgerService<S> {
    store: S,
    keys: StorageKeys,
    clock: Box<dyn Clock>,
}

impl<S: KeyValueStore> LedgerService<S> {
    pub fn new(store: S, keys: StorageKeys) -> Self {
        Self::with_clock(store, keys, Box::new(SystemClock))
    }

    pub fn with_clock(store: S, keys: StorageKeys, clock: Box<dyn Clock>) -> Self {
        Self { store, keys, clock }
    }

    /// Returns the stored transaction list in insertion order.
    ///
    /// Read and parse failures degrade to an empty list; the caller treats a
    /// fresh profile and an unreadable one the same way.
    pub fn load_transactions(&self) -> Vec<Transaction> {
        let key = self.keys.transactions();
        let raw = match self.store.get(&key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!(%key, %err, "transaction list read failed, returning empty");
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(list) => list,
            Err(err) => {
                warn!(%key, %err, "transaction list unparsable, returning empty");
                Vec::new()
            }
        }
    }

    /// Returns the running balance, `0.0` when unset or unreadable.
    pub fn load_balance(&self) -> f64 {
        let key = self.keys.balance();
        let raw = match self.store.get(&key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return 0.0,
            Err(err) => {
                warn!(%key, %err, "balance read failed, returning zero");
                return 0.0;
            }
        };
        match raw.trim().parse::<f64>() {
            Ok(value) => value,
            Err(err) => {
                warn!(%key, %err, "stored balance unparsable, returning zero");
                0.0
            }
        }
    }

    /// Persists the full transaction list under its key.
    pub fn save_transactions(&self, transactions: &[Transaction]) -> Result<()> {
        let json = serde_json::to_string(transactions)?;
        self.store.set(&self.keys.transactions(), &json)
    }

    /// Persists the balance as its decimal string representation.
    pub fn save_balance(&self, balance: f64) -> Result<()> {
        self.store.set(&self.keys.balance(), &balance.to_string())
    }

    /// Validates, records, and persists a new transaction.
    ///
    /// Recurring entries are stored as scheduled and leave the balance
    /// untouched; everything else completes immediately and moves the balance
    /// by its signed amount.
    pub fn add_transaction(&self, draft: TransactionDraft) -> Result<Transaction> {
        draft.validate()?;

        let mut transactions = self.load_transactions();
        let balance = self.load_balance();

        let created_at = self.clock.now();
        let status = if draft.is_recurring {
            TransactionStatus::Scheduled
        } else {
            TransactionStatus::Completed
        };
        let transaction = Transaction {
            id: generate_id(created_at),
            kind: draft.kind,
            amount: draft.amount,
            date: draft.date,
            created_at,
            is_recurring: draft.is_recurring,
            status,
        };

        transactions.push(transaction.clone());
        self.save_transactions(&transactions)?;

        if !transaction.is_recurring {
            self.save_balance(balance + transaction.signed_amount())?;
        }

        Ok(transaction)
    }

    /// Rebuilds the balance from the stored list and persists it.
    ///
    /// Repair path for the drift a partial `add_transaction` leaves behind.
    /// Scheduled entries never contributed to the balance, so only
    /// non-recurring ones are summed.
    pub fn recompute_balance(&self) -> Result<f64> {
        let balance: f64 = self
            .load_transactions()
            .iter()
            .filter(|txn| !txn.is_recurring)
            .map(Transaction::signed_amount)
            .sum();
        self.save_balance(balance)?;
        Ok(balance)
    }
}

fn generate_id(created_at: DateTime<Utc>) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| ID_SUFFIX_CHARSET[rng.gen_range(0..ID_SUFFIX_CHARSET.len())] as char)
        .collect();
    format!("{}{}", created_at.timestamp_millis(), suffix)
}
