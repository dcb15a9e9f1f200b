pub mod catalog_service;
pub mod forecast_service;
pub mod ledger_service;
pub mod summary_service;

pub use catalog_service::CatalogService;
pub use forecast_service::{FinancialForecast, ForecastBucket, ForecastService};
pub use ledger_service::LedgerService;
pub use summary_service::{FinancialSummary, SummaryPeriod, SummaryService};
