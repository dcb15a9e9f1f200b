//! Forward-looking projection of upcoming ledger activity.

use chrono::{Duration, NaiveDate};

use crate::domain::transaction::{Transaction, TransactionKind};

/// Income/expense totals for a single projection bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ForecastBucket {
    pub income: f64,
    pub expenses: f64,
}

impl ForecastBucket {
    fn absorb(&mut self, txn: &Transaction) {
        match txn.kind {
            TransactionKind::Income => self.income += txn.amount,
            TransactionKind::Expense => self.expenses += txn.amount,
        }
    }
}

/// Projection over the coming week: today, tomorrow, and days two through
/// seven.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FinancialForecast {
    pub today: ForecastBucket,
    pub tomorrow: ForecastBucket,
    pub future: ForecastBucket,
}

pub struct ForecastService;

impl ForecastService {
    /// Buckets entries by effective date relative to `today`.
    ///
    /// Scheduled and completed entries both count; the projection answers
    /// "what is due", not "what has cleared".
    pub fn financial_forecast(
        transactions: &[Transaction],
        today: NaiveDate,
    ) -> FinancialForecast {
        let tomorrow = today + Duration::days(1);
        let next_week = today + Duration::days(7);

        let mut forecast = FinancialForecast::default();
        for txn in transactions {
            let date = txn.effective_date().date_naive();
            if date == today {
                forecast.today.absorb(txn);
            } else if date == tomorrow {
                forecast.tomorrow.absorb(txn);
            } else if date > tomorrow && date <= next_week {
                forecast.future.absorb(txn);
            }
        }
        forecast
    }
}
