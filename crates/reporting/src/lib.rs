//! `stockwise-reporting`
//!
//! **Responsibility:** inventory reporting and aggregation.
//!
//! Every report is a pure function over borrowed snapshot slices:
//! - It must not mutate its inputs.
//! - It must not perform IO.
//! - It returns owned, serializable rows that outlive the snapshot.
//!
//! Degenerate input (empty slices, dangling product references, zero stock)
//! always has a defined result; none of these functions fail.

pub mod categories;
pub mod dashboard;
pub mod sales;
pub mod settings;
pub mod snapshot;
pub mod stock;
pub mod transactions;

#[cfg(test)]
pub(crate) mod fixtures;

pub use categories::{CategoryRollup, category_rollup};
pub use dashboard::{DEFAULT_RECENT_ACTIVITY, DashboardStats, dashboard_stats, dashboard_stats_with_limit};
pub use sales::{TopSeller, TurnoverEntry, top_selling_products, turnover_ranking};
pub use settings::{ReportSettings, SettingsError};
pub use snapshot::{ReportError, ReportKind, Snapshot, run_report};
pub use stock::{InventoryValuation, inventory_valuation, low_stock_items};
pub use transactions::{
    DateRange, ProductActivity, ReportFilters, TransactionReport, TransactionSummary,
    UserActivity, transaction_report,
};
