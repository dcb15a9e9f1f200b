use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{CashflowError, Result};

/// Direction of a ledger entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

/// Completion state, fixed at creation time.
///
/// Wire values stay in the app's locale because existing stored lists use
/// them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TransactionStatus {
    #[serde(rename = "agendado")]
    Scheduled,
    #[serde(rename = "concluído")]
    Completed,
}

/// A single ledger entry as persisted in the transaction list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub is_recurring: bool,
    pub status: TransactionStatus,
}

impl Transaction {
    /// Date used for forward-looking bucketing. Scheduled entries may carry
    /// an explicit date; everything else falls back to the insertion
    /// timestamp.
    pub fn effective_date(&self) -> DateTime<Utc> {
        self.date.unwrap_or(self.created_at)
    }

    /// Amount signed by direction: income positive, expense negative.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

/// Caller-supplied fields for a new ledger entry, validated at the repository
/// boundary before anything is persisted.
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    pub kind: TransactionKind,
    pub amount: f64,
    pub date: Option<DateTime<Utc>>,
    pub is_recurring: bool,
}

impl TransactionDraft {
    pub fn new(kind: TransactionKind, amount: f64) -> Self {
        Self {
            kind,
            amount,
            date: None,
            is_recurring: false,
        }
    }

    pub fn recurring(mut self) -> Self {
        self.is_recurring = true;
        self
    }

    pub fn on_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err(CashflowError::InvalidInput(format!(
                "transaction amount must be a non-negative number, got {}",
                self.amount
            )));
        }
        Ok(())
    }
}
