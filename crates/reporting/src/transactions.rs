//! Filtered transaction history with per-product and per-user summaries.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockwise_catalog::{Product, Transaction, TransactionType};
use stockwise_core::{ProductId, index_by_id};

/// Inclusive calendar-day range, compared against the UTC date of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl DateRange {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self { start_date, end_date }
    }

    pub fn contains(&self, tx: &Transaction) -> bool {
        let day = tx.date.date_naive();
        self.start_date <= day && day <= self.end_date
    }
}

/// Report criteria. Every criterion is optional; unset means "any".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportFilters {
    #[serde(default)]
    pub date_range: Option<DateRange>,
    #[serde(default)]
    pub product_id: Option<ProductId>,
    #[serde(default)]
    pub performed_by: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<TransactionType>,
}

impl ReportFilters {
    pub fn matches(&self, tx: &Transaction) -> bool {
        self.date_range.is_none_or(|r| r.contains(tx))
            && self.product_id.is_none_or(|id| tx.product_id == id)
            && self.performed_by.as_deref().is_none_or(|u| tx.performed_by == u)
            && self.kind.is_none_or(|k| tx.kind == k)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductActivity {
    pub product_id: ProductId,
    pub product_name: String,
    pub total_in: u64,
    pub total_out: u64,
    /// On-hand quantity from the product snapshot, not recomputed from history.
    pub current_stock: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserActivity {
    pub performed_by: String,
    pub total_transactions: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionSummary {
    pub total_in: u64,
    pub total_out: u64,
    pub product_stats: Vec<ProductActivity>,
    pub user_stats: Vec<UserActivity>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReport {
    /// Matching transactions, in input order.
    pub transactions: Vec<Transaction>,
    pub summary: TransactionSummary,
}

/// Build the transaction history report.
///
/// Totals cover every matching transaction. Product rows appear in order of
/// first matching transaction and omit products missing from the snapshot;
/// user rows appear in order of first matching transaction.
pub fn transaction_report(
    products: &[Product],
    transactions: &[Transaction],
    filters: &ReportFilters,
) -> TransactionReport {
    let by_id = index_by_id(products);

    let mut summary = TransactionSummary::default();
    let mut product_slots: HashMap<ProductId, usize> = HashMap::new();
    let mut user_slots: HashMap<&str, usize> = HashMap::new();
    let mut matching = Vec::new();

    for tx in transactions.iter().filter(|t| filters.matches(t)) {
        let quantity = u64::from(tx.quantity);
        match tx.kind {
            TransactionType::In => summary.total_in += quantity,
            TransactionType::Out => summary.total_out += quantity,
        }

        if let Some(product) = by_id.get(&tx.product_id) {
            let slot = *product_slots.entry(product.id).or_insert_with(|| {
                summary.product_stats.push(ProductActivity {
                    product_id: product.id,
                    product_name: product.name.clone(),
                    total_in: 0,
                    total_out: 0,
                    current_stock: product.quantity,
                });
                summary.product_stats.len() - 1
            });
            let row = &mut summary.product_stats[slot];
            match tx.kind {
                TransactionType::In => row.total_in += quantity,
                TransactionType::Out => row.total_out += quantity,
            }
        } else {
            tracing::debug!(
                transaction_id = %tx.id,
                product_id = %tx.product_id,
                "no product stats for product missing from snapshot"
            );
        }

        let slot = *user_slots.entry(tx.performed_by.as_str()).or_insert_with(|| {
            summary.user_stats.push(UserActivity {
                performed_by: tx.performed_by.clone(),
                total_transactions: 0,
            });
            summary.user_stats.len() - 1
        });
        summary.user_stats[slot].total_transactions += 1;

        matching.push(tx.clone());
    }

    TransactionReport {
        transactions: matching,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::*;
    use rust_decimal_macros::dec;

    fn by(mut tx: Transaction, user: &str) -> Transaction {
        tx.performed_by = user.to_string();
        tx
    }

    fn snapshot() -> (Vec<Product>, Vec<Transaction>) {
        let products = vec![product(1, 25, 10, dec!(1)), product(2, 8, 10, dec!(1))];
        let transactions = vec![
            by(restock(0, 1, 10), "admin"),
            by(sale(1, 2, 3), "staff1"),
            by(sale(2, 1, 4), "staff1"),
            by(sale(30, 99, 2), "admin"),
            by(restock(50, 2, 6), "staff2"),
        ];
        (products, transactions)
    }

    #[test]
    fn unfiltered_report_summarizes_everything() {
        let (products, transactions) = snapshot();
        let report = transaction_report(&products, &transactions, &ReportFilters::default());

        assert_eq!(report.transactions, transactions);
        assert_eq!(report.summary.total_in, 16);
        assert_eq!(report.summary.total_out, 9);

        let stats = &report.summary.product_stats;
        assert_eq!(stats.len(), 2);
        assert_eq!(
            stats[0],
            ProductActivity {
                product_id: pid(1),
                product_name: "Product 1".to_string(),
                total_in: 10,
                total_out: 4,
                current_stock: 25,
            }
        );
        assert_eq!(stats[1].product_id, pid(2));
        assert_eq!((stats[1].total_in, stats[1].total_out), (6, 3));

        let users: Vec<_> = report
            .summary
            .user_stats
            .iter()
            .map(|u| (u.performed_by.as_str(), u.total_transactions))
            .collect();
        assert_eq!(users, vec![("admin", 2), ("staff1", 2), ("staff2", 1)]);
    }

    #[test]
    fn filters_combine() {
        let (products, transactions) = snapshot();
        let filters = ReportFilters {
            performed_by: Some("staff1".to_string()),
            kind: Some(TransactionType::Out),
            product_id: Some(pid(1)),
            ..ReportFilters::default()
        };

        let report = transaction_report(&products, &transactions, &filters);
        assert_eq!(report.transactions.len(), 1);
        assert_eq!(report.summary.total_out, 4);
        assert_eq!(report.summary.total_in, 0);
    }

    #[test]
    fn date_range_is_inclusive_by_day() {
        let (products, transactions) = snapshot();
        // Hours 0..=2 fall on 2025-01-01, hour 30 on 2025-01-02, hour 50 on 2025-01-03.
        let day = |d| NaiveDate::from_ymd_opt(2025, 1, d).unwrap();
        let filters = ReportFilters {
            date_range: Some(DateRange::new(day(1), day(2))),
            ..ReportFilters::default()
        };

        let report = transaction_report(&products, &transactions, &filters);
        assert_eq!(report.transactions.len(), 4);

        let filters = ReportFilters {
            date_range: Some(DateRange::new(day(3), day(1))),
            ..ReportFilters::default()
        };
        assert!(transaction_report(&products, &transactions, &filters).transactions.is_empty());
    }

    #[test]
    fn empty_input_gives_empty_report() {
        let report = transaction_report(&[], &[], &ReportFilters::default());
        assert_eq!(report, TransactionReport::default());
    }

    #[test]
    fn filters_deserialize_from_form_shape() {
        let json = r#"{
            "dateRange": { "startDate": "2025-01-01", "endDate": "2025-01-31" },
            "type": "in"
        }"#;
        let filters: ReportFilters = serde_json::from_str(json).unwrap();
        assert_eq!(filters.kind, Some(TransactionType::In));
        assert!(filters.product_id.is_none());
        assert_eq!(
            filters.date_range.map(|r| r.end_date),
            NaiveDate::from_ymd_opt(2025, 1, 31)
        );
    }
}
