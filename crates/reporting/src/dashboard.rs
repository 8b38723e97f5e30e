use serde::{Deserialize, Serialize};

use stockwise_catalog::{Product, Transaction};

use crate::stock::low_stock_items;

/// Number of transactions shown in the dashboard activity feed.
pub const DEFAULT_RECENT_ACTIVITY: usize = 5;

/// Dashboard summary cards plus the activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_products: usize,
    pub low_stock_items: usize,
    pub total_transactions: usize,
    /// Most recent transactions first.
    pub recent_activity: Vec<Transaction>,
}

pub fn dashboard_stats(products: &[Product], transactions: &[Transaction]) -> DashboardStats {
    dashboard_stats_with_limit(products, transactions, DEFAULT_RECENT_ACTIVITY)
}

/// Same as [`dashboard_stats`] with a configurable activity feed length.
///
/// Transactions sharing a timestamp keep their input order.
pub fn dashboard_stats_with_limit(
    products: &[Product],
    transactions: &[Transaction],
    recent_limit: usize,
) -> DashboardStats {
    let mut recent: Vec<&Transaction> = transactions.iter().collect();
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    recent.truncate(recent_limit);

    DashboardStats {
        total_products: products.len(),
        low_stock_items: low_stock_items(products).len(),
        total_transactions: transactions.len(),
        recent_activity: recent.into_iter().cloned().collect(),
    }
}
