//! Sales-velocity rankings: best sellers by volume and fastest-turning stock.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockwise_catalog::{Product, Transaction};
use stockwise_core::{ProductId, index_by_id};

/// One row of the "top selling products" ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopSeller {
    pub product_id: ProductId,
    pub name: String,
    /// Units sold (sum of stock-out quantities).
    pub quantity: u64,
    /// Units sold times the product's *current* price; historical prices are
    /// not tracked. Saturates at the `Decimal` bounds.
    pub revenue: Decimal,
}

/// Products ranked by units sold, highest first, at most `limit` rows.
///
/// Only stock-out transactions count. Sales referencing a product missing from
/// the snapshot are skipped. Products with equal volume keep the order in
/// which their first sale appears.
pub fn top_selling_products(
    products: &[Product],
    transactions: &[Transaction],
    limit: usize,
) -> Vec<TopSeller> {
    let by_id = index_by_id(products);
    let mut rows: Vec<TopSeller> = Vec::new();
    let mut slots: HashMap<ProductId, usize> = HashMap::new();

    for tx in transactions.iter().filter(|t| t.is_stock_out()) {
        let Some(product) = by_id.get(&tx.product_id) else {
            tracing::debug!(
                transaction_id = %tx.id,
                product_id = %tx.product_id,
                "skipping sale for product missing from snapshot"
            );
            continue;
        };

        let slot = *slots.entry(product.id).or_insert_with(|| {
            rows.push(TopSeller {
                product_id: product.id,
                name: product.name.clone(),
                quantity: 0,
                revenue: Decimal::ZERO,
            });
            rows.len() - 1
        });

        let row = &mut rows[slot];
        row.quantity += u64::from(tx.quantity);
        row.revenue = row.revenue.saturating_add(product.value_of(tx.quantity));
    }

    rows.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    rows.truncate(limit);
    rows
}

/// One row of the turnover ("easy selling") ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnoverEntry {
    pub product_id: ProductId,
    pub name: String,
    pub sales: u64,
    /// `sales / (on_hand + sales)`, in `[0, 1]`.
    pub turnover_rate: f64,
    /// `period_days / turnover_rate`.
    ///
    /// `None` (JSON `null`) when the turnover rate is zero: nothing sold in the
    /// period, so the stock never clears at the observed rate.
    pub days_to_sell: Option<f64>,
}

/// Products ranked by turnover rate, highest first, at most `limit` rows.
///
/// Every product is considered, including ones with no sales. A product with
/// nothing on hand and nothing sold has a turnover rate of zero. Zero-rate rows
/// sort after every selling product and keep their input order among
/// themselves.
pub fn turnover_ranking(
    products: &[Product],
    transactions: &[Transaction],
    period_days: u32,
    limit: usize,
) -> Vec<TurnoverEntry> {
    let mut sold: HashMap<ProductId, u64> = HashMap::new();
    for tx in transactions.iter().filter(|t| t.is_stock_out()) {
        *sold.entry(tx.product_id).or_default() += u64::from(tx.quantity);
    }

    let mut rows: Vec<TurnoverEntry> = products
        .iter()
        .map(|p| {
            let sales = sold.get(&p.id).copied().unwrap_or(0);
            let handled = u64::from(p.quantity) + sales;
            let turnover_rate = if handled == 0 {
                0.0
            } else {
                sales as f64 / handled as f64
            };
            let days_to_sell = (turnover_rate > 0.0).then(|| f64::from(period_days) / turnover_rate);

            TurnoverEntry {
                product_id: p.id,
                name: p.name.clone(),
                sales,
                turnover_rate,
                days_to_sell,
            }
        })
        .collect();

    rows.sort_by(|a, b| b.turnover_rate.total_cmp(&a.turnover_rate));
    rows.truncate(limit);
    rows
}
