//! Realized income/expense totals over a trailing window.

use chrono::{DateTime, Datelike, Duration, Utc};

use crate::domain::transaction::{Transaction, TransactionKind, TransactionStatus};

/// Reporting window for the financial summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryPeriod {
    /// First day of the current month through now.
    Monthly,
    /// Trailing seven days through now.
    Weekly,
}

/// Income/expense totals with their relative percentages, formatted to one
/// decimal place for display.
#[derive(Debug, Clone, PartialEq)]
pub struct FinancialSummary {
    pub income: f64,
    pub expenses: f64,
    pub income_percentage: String,
    pub expense_percentage: String,
}

pub struct SummaryService;

impl SummaryService {
    /// Sums completed entries whose `created_at` falls inside the window and
    /// derives the income/expense split.
    ///
    /// A zero total yields a symmetric 50.0/50.0 split instead of dividing by
    /// zero; the dashboard renders its two gauges evenly in that case.
    /// Scheduled entries are excluded: this reports realized money, not
    /// projections.
    pub fn financial_summary(
        transactions: &[Transaction],
        period: SummaryPeriod,
        now: DateTime<Utc>,
    ) -> FinancialSummary {
        let start = period_start(period, now);
        let mut income = 0.0;
        let mut expenses = 0.0;
        for txn in transactions {
            if txn.created_at < start || txn.created_at > now {
                continue;
            }
            if txn.status != TransactionStatus::Completed {
                continue;
            }
            match txn.kind {
                TransactionKind::Income => income += txn.amount,
                TransactionKind::Expense => expenses += txn.amount,
            }
        }

        let total = income + expenses;
        let (income_percentage, expense_percentage) = if total == 0.0 {
            ("50.0".to_string(), "50.0".to_string())
        } else {
            (
                format!("{:.1}", income / total * 100.0),
                format!("{:.1}", expenses / total * 100.0),
            )
        };

        FinancialSummary {
            income,
            expenses,
            income_percentage,
            expense_percentage,
        }
    }
}

fn period_start(period: SummaryPeriod, now: DateTime<Utc>) -> DateTime<Utc> {
    match period {
        SummaryPeriod::Monthly => now
            .date_naive()
            .with_day(1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            .and_utc(),
        SummaryPeriod::Weekly => now - Duration::days(7),
    }
}
