#![allow(dead_code)]

use std::path::Path;

use caixa_core::config::StorageKeys;
use caixa_core::core::services::LedgerService;
use caixa_core::core::time::FixedClock;
use caixa_core::storage::JsonFileStore;
use chrono::{DateTime, TimeZone, Utc};

/// Instant every deterministic test pins its clock to.
pub fn reference_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap()
}

pub fn fixed_clock() -> Box<FixedClock> {
    Box::new(FixedClock(reference_time()))
}

pub fn file_store(dir: &Path) -> JsonFileStore {
    JsonFileStore::new(dir.join("store.json")).expect("create json store")
}

pub fn ledger_at(dir: &Path) -> LedgerService<JsonFileStore> {
    LedgerService::with_clock(file_store(dir), StorageKeys::default(), fixed_clock())
}
