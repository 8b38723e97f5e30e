//! Snapshot container and report dispatch.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use thiserror::Error;

use stockwise_auth::User;
use stockwise_catalog::{Category, Product, Transaction};

use crate::settings::ReportSettings;
use crate::transactions::ReportFilters;
use crate::{
    category_rollup, dashboard_stats_with_limit, inventory_valuation, low_stock_items,
    top_selling_products, transaction_report, turnover_ranking,
};

/// Everything the reports read, as fetched from the store in one pass.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub users: Vec<User>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportKind {
    Dashboard,
    LowStock,
    TopSelling,
    Turnover,
    Categories,
    Valuation,
    Transactions,
}

impl ReportKind {
    pub const ALL: [ReportKind; 7] = [
        ReportKind::Dashboard,
        ReportKind::LowStock,
        ReportKind::TopSelling,
        ReportKind::Turnover,
        ReportKind::Categories,
        ReportKind::Valuation,
        ReportKind::Transactions,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Dashboard => "dashboard",
            ReportKind::LowStock => "low-stock",
            ReportKind::TopSelling => "top-selling",
            ReportKind::Turnover => "turnover",
            ReportKind::Categories => "categories",
            ReportKind::Valuation => "valuation",
            ReportKind::Transactions => "transactions",
        }
    }
}

impl core::fmt::Display for ReportKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportKind {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReportKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| ReportError::UnknownReport(s.to_string()))
    }
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("unknown report '{0}'")]
    UnknownReport(String),

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Compute one report over `snapshot` and render it as JSON.
///
/// `filters` only applies to [`ReportKind::Transactions`].
pub fn run_report(
    kind: ReportKind,
    snapshot: &Snapshot,
    settings: &ReportSettings,
    filters: &ReportFilters,
) -> Result<JsonValue, ReportError> {
    let Snapshot {
        products,
        transactions,
        categories,
        ..
    } = snapshot;

    let value = match kind {
        ReportKind::Dashboard => serde_json::to_value(dashboard_stats_with_limit(
            products,
            transactions,
            settings.recent_activity_limit,
        ))?,
        ReportKind::LowStock => serde_json::to_value(low_stock_items(products))?,
        ReportKind::TopSelling => {
            serde_json::to_value(top_selling_products(products, transactions, settings.top_limit))?
        }
        ReportKind::Turnover => serde_json::to_value(turnover_ranking(
            products,
            transactions,
            settings.period_days,
            settings.turnover_limit,
        ))?,
        ReportKind::Categories => serde_json::to_value(category_rollup(categories, products))?,
        ReportKind::Valuation => serde_json::to_value(inventory_valuation(products))?,
        ReportKind::Transactions => {
            serde_json::to_value(transaction_report(products, transactions, filters))?
        }
    };

    tracing::debug!(report = %kind, "report computed");
    Ok(value)
}
