use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockwise_catalog::Product;

/// Products at or below their minimum stock level, in input order.
pub fn low_stock_items(products: &[Product]) -> Vec<Product> {
    products.iter().filter(|p| p.is_low_stock()).cloned().collect()
}

/// Totals for the inventory report footer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryValuation {
    pub total_quantity: u64,
    /// Sum of `price * quantity` at current prices, saturating at the `Decimal`
    /// bounds.
    pub total_value: Decimal,
}

pub fn inventory_valuation(products: &[Product]) -> InventoryValuation {
    products
        .iter()
        .fold(InventoryValuation::default(), |mut acc, p| {
            acc.total_quantity += u64::from(p.quantity);
            acc.total_value = acc.total_value.saturating_add(p.stock_value());
            acc
        })
}
