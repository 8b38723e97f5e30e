use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockwise_catalog::{Category, Product};
use stockwise_core::CategoryId;

/// Per-category totals for the category analysis report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRollup {
    pub category_id: CategoryId,
    pub name: String,
    /// The store's cached product count, passed through unchanged.
    pub product_count: u32,
    pub total_items: u64,
    pub total_value: Decimal,
}

/// One row per category, in input order.
///
/// A product belongs to a category when its `category` label equals the
/// category name exactly (case-sensitive). Child categories are not folded into
/// their parents. Values saturate at the `Decimal` bounds.
pub fn category_rollup(categories: &[Category], products: &[Product]) -> Vec<CategoryRollup> {
    categories
        .iter()
        .map(|category| {
            let (total_items, total_value) = products
                .iter()
                .filter(|p| p.category == category.name)
                .fold((0u64, Decimal::ZERO), |(items, value), p| {
                    (items + u64::from(p.quantity), value.saturating_add(p.stock_value()))
                });

            CategoryRollup {
                category_id: category.id,
                name: category.name.clone(),
                product_count: category.count,
                total_items,
                total_value,
            }
        })
        .collect()
}
