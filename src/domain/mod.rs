pub mod catalog;
pub mod common;
pub mod transaction;

pub use catalog::{Equipment, ServiceTemplate, StockItem};
pub use common::CatalogRecord;
pub use transaction::{Transaction, TransactionDraft, TransactionKind, TransactionStatus};
