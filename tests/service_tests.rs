mod common;

use caixa_core::config::StorageKeys;
use caixa_core::core::services::{ForecastService, LedgerService, SummaryPeriod, SummaryService};
use caixa_core::core::time::FixedClock;
use caixa_core::domain::{TransactionDraft, TransactionKind, TransactionStatus};
use caixa_core::storage::MemoryStore;
use chrono::Duration;

use common::reference_time;

fn ledger() -> LedgerService<MemoryStore> {
    LedgerService::with_clock(
        MemoryStore::new(),
        StorageKeys::default(),
        common::fixed_clock(),
    )
}

#[test]
fn summary_reflects_entries_added_through_the_ledger() {
    let ledger = ledger();
    ledger
        .add_transaction(TransactionDraft::new(TransactionKind::Income, 300.0))
        .unwrap();
    ledger
        .add_transaction(TransactionDraft::new(TransactionKind::Expense, 100.0))
        .unwrap();
    // Scheduled entry: visible in the list, invisible to the summary.
    ledger
        .add_transaction(TransactionDraft::new(TransactionKind::Expense, 900.0).recurring())
        .unwrap();

    let transactions = ledger.load_transactions();
    let summary = SummaryService::financial_summary(
        &transactions,
        SummaryPeriod::Monthly,
        reference_time(),
    );
    assert_eq!(summary.income, 300.0);
    assert_eq!(summary.expenses, 100.0);
    assert_eq!(summary.income_percentage, "75.0");
    assert_eq!(summary.expense_percentage, "25.0");
}

#[test]
fn forecast_buckets_scheduled_entries_by_due_date() {
    let ledger = ledger();
    let now = reference_time();
    ledger
        .add_transaction(
            TransactionDraft::new(TransactionKind::Income, 150.0)
                .recurring()
                .on_date(now),
        )
        .unwrap();
    ledger
        .add_transaction(
            TransactionDraft::new(TransactionKind::Expense, 45.0)
                .recurring()
                .on_date(now + Duration::days(1)),
        )
        .unwrap();
    ledger
        .add_transaction(
            TransactionDraft::new(TransactionKind::Income, 80.0)
                .recurring()
                .on_date(now + Duration::days(5)),
        )
        .unwrap();

    let transactions = ledger.load_transactions();
    let forecast = ForecastService::financial_forecast(&transactions, now.date_naive());
    assert_eq!(forecast.today.income, 150.0);
    assert_eq!(forecast.tomorrow.expenses, 45.0);
    assert_eq!(forecast.future.income, 80.0);
}

#[test]
fn forecast_counts_entries_regardless_of_status() {
    let ledger = ledger();
    // Completed today and scheduled today land in the same bucket.
    ledger
        .add_transaction(TransactionDraft::new(TransactionKind::Expense, 25.0))
        .unwrap();
    ledger
        .add_transaction(
            TransactionDraft::new(TransactionKind::Expense, 75.0)
                .recurring()
                .on_date(reference_time()),
        )
        .unwrap();

    let transactions = ledger.load_transactions();
    assert_eq!(transactions[0].status, TransactionStatus::Completed);
    assert_eq!(transactions[1].status, TransactionStatus::Scheduled);

    let forecast =
        ForecastService::financial_forecast(&transactions, reference_time().date_naive());
    assert_eq!(forecast.today.expenses, 100.0);
}

#[test]
fn summary_and_balance_agree_on_realized_money() {
    let ledger = ledger();
    for (kind, amount) in [
        (TransactionKind::Income, 500.0),
        (TransactionKind::Expense, 120.0),
        (TransactionKind::Income, 60.0),
    ] {
        ledger
            .add_transaction(TransactionDraft::new(kind, amount))
            .unwrap();
    }

    let transactions = ledger.load_transactions();
    let summary = SummaryService::financial_summary(
        &transactions,
        SummaryPeriod::Weekly,
        reference_time(),
    );
    assert_eq!(summary.income - summary.expenses, ledger.load_balance());
}
