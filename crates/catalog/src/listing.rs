//! Sorting and searching for list views.
//!
//! Columns are a closed set of fields rather than string keys; each field knows
//! how to compare two records.

use core::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::product::Product;
use crate::transaction::Transaction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Sortable product columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProductField {
    Name,
    Sku,
    Category,
    Quantity,
    Location,
    Supplier,
    MinStockLevel,
    Price,
}

impl ProductField {
    pub fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            ProductField::Name => compare_text(&a.name, &b.name),
            ProductField::Sku => compare_text(&a.sku, &b.sku),
            ProductField::Category => compare_text(&a.category, &b.category),
            ProductField::Quantity => a.quantity.cmp(&b.quantity),
            ProductField::Location => compare_text(&a.location, &b.location),
            ProductField::Supplier => compare_text(&a.supplier, &b.supplier),
            ProductField::MinStockLevel => a.min_stock_level.cmp(&b.min_stock_level),
            ProductField::Price => a.price.cmp(&b.price),
        }
    }
}

/// Sortable transaction columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransactionField {
    Date,
    Type,
    Quantity,
    Reason,
    PerformedBy,
}

impl TransactionField {
    pub fn compare(self, a: &Transaction, b: &Transaction) -> Ordering {
        match self {
            TransactionField::Date => a.date.cmp(&b.date),
            TransactionField::Type => a.kind.as_str().cmp(b.kind.as_str()),
            TransactionField::Quantity => a.quantity.cmp(&b.quantity),
            TransactionField::Reason => compare_text(&a.reason, &b.reason),
            TransactionField::PerformedBy => compare_text(&a.performed_by, &b.performed_by),
        }
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Sorted copy of `products`; equal keys keep their input order.
pub fn sort_products(
    products: &[Product],
    field: ProductField,
    direction: SortDirection,
) -> Vec<Product> {
    let mut sorted = products.to_vec();
    sorted.sort_by(|a, b| direction.apply(field.compare(a, b)));
    sorted
}

/// Sorted copy of `transactions`; equal keys keep their input order.
pub fn sort_transactions(
    transactions: &[Transaction],
    field: TransactionField,
    direction: SortDirection,
) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();
    sorted.sort_by(|a, b| direction.apply(field.compare(a, b)));
    sorted
}

/// Products matching a free-text query and an optional exact category.
///
/// The query is matched case-insensitively against name, SKU and supplier; a
/// blank query matches everything.
pub fn search_products<'a>(
    products: &'a [Product],
    query: &str,
    category: Option<&str>,
) -> Vec<&'a Product> {
    let needle = query.trim().to_lowercase();

    products
        .iter()
        .filter(|p| category.is_none_or(|c| p.category == c))
        .filter(|p| {
            needle.is_empty()
                || p.name.to_lowercase().contains(&needle)
                || p.sku.to_lowercase().contains(&needle)
                || p.supplier.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use stockwise_core::{ProductId, TransactionId};

    use crate::transaction::TransactionType;

    fn products() -> Vec<Product> {
        let at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        vec![
            Product::new(ProductId::from_u128(1), "wireless Keyboard", "KB-001", "Electronics", at)
                .with_stock(25, 10)
                .with_price(dec!(59.99))
                .with_supplier("Tech Supplies Inc"),
            Product::new(ProductId::from_u128(2), "Ergonomic Mouse", "MS-002", "Electronics", at)
                .with_stock(8, 15)
                .with_price(dec!(29.99))
                .with_supplier("Tech Supplies Inc"),
            Product::new(ProductId::from_u128(3), "Monitor Stand", "ST-003", "Office Supplies", at)
                .with_stock(8, 5)
                .with_price(dec!(49.99))
                .with_supplier("Office Solutions"),
        ]
    }

    fn ids(products: &[Product]) -> Vec<u128> {
        products.iter().map(|p| p.id.as_uuid().as_u128()).collect()
    }

    #[test]
    fn text_sort_ignores_case() {
        let sorted = sort_products(&products(), ProductField::Name, SortDirection::Asc);
        assert_eq!(ids(&sorted), vec![2, 3, 1]);
    }

    #[test]
    fn numeric_sort_descending_is_stable_for_ties() {
        let sorted = sort_products(&products(), ProductField::Quantity, SortDirection::Desc);
        assert_eq!(ids(&sorted), vec![1, 2, 3]);

        let sorted = sort_products(&products(), ProductField::Price, SortDirection::Asc);
        assert_eq!(ids(&sorted), vec![2, 3, 1]);
    }

    #[test]
    fn transactions_sort_by_date() {
        let base = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let txs: Vec<Transaction> = (0..3)
            .map(|i| {
                Transaction::new(
                    TransactionId::from_u128(i),
                    ProductId::from_u128(1),
                    TransactionType::In,
                    1,
                    base + Duration::hours(i as i64),
                    "admin",
                )
                .unwrap()
            })
            .collect();

        let sorted = sort_transactions(&txs, TransactionField::Date, SortDirection::Desc);
        let order: Vec<_> = sorted.iter().map(|t| t.id).collect();
        assert_eq!(
            order,
            vec![TransactionId::from_u128(2), TransactionId::from_u128(1), TransactionId::from_u128(0)]
        );
        // Caller's slice is untouched.
        assert_eq!(txs[0].id, TransactionId::from_u128(0));
    }

    #[test]
    fn search_matches_name_sku_and_supplier() {
        let all = products();
        assert_eq!(search_products(&all, "keyboard", None).len(), 1);
        assert_eq!(search_products(&all, "st-003", None).len(), 1);
        assert_eq!(search_products(&all, "tech supplies", None).len(), 2);
        assert_eq!(search_products(&all, "  ", None).len(), 3);
    }

    #[test]
    fn search_category_filter_is_exact() {
        let all = products();
        assert_eq!(search_products(&all, "", Some("Electronics")).len(), 2);
        assert!(search_products(&all, "", Some("electronics")).is_empty());
        assert_eq!(search_products(&all, "mouse", Some("Electronics")).len(), 1);
    }

    const PRODUCT_FIELDS: [ProductField; 8] = [
        ProductField::Name,
        ProductField::Sku,
        ProductField::Category,
        ProductField::Quantity,
        ProductField::Location,
        ProductField::Supplier,
        ProductField::MinStockLevel,
        ProductField::Price,
    ];

    const TRANSACTION_FIELDS: [TransactionField; 5] = [
        TransactionField::Date,
        TransactionField::Type,
        TransactionField::Quantity,
        TransactionField::Reason,
        TransactionField::PerformedBy,
    ];

    fn arb_direction() -> impl Strategy<Value = SortDirection> {
        prop_oneof![Just(SortDirection::Asc), Just(SortDirection::Desc)]
    }

    // Small alphabets and ranges so that ties are common.
    fn arb_products() -> impl Strategy<Value = Vec<Product>> {
        let row = ("[aAbB]{0,2}", "[aAbB]{0,2}", 0u32..4, 0u32..4, 0i64..4);
        prop::collection::vec(row, 0..20).prop_map(|rows| {
            let at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
            rows.into_iter()
                .enumerate()
                .map(|(i, (name, supplier, q, min, cents))| {
                    Product::new(ProductId::from_u128(i as u128), name.clone(), name, "Misc", at)
                        .with_stock(q, min)
                        .with_price(Decimal::new(cents, 2))
                        .with_supplier(supplier)
                })
                .collect()
        })
    }

    fn arb_transactions() -> impl Strategy<Value = Vec<Transaction>> {
        let row = (0i64..4, any::<bool>(), 1u32..4, "[aAbB]{0,2}", "[ab]{1,2}");
        prop::collection::vec(row, 0..20).prop_map(|rows| {
            let base = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
            rows.into_iter()
                .enumerate()
                .map(|(i, (hours, out, q, reason, user))| {
                    let kind = if out { TransactionType::Out } else { TransactionType::In };
                    Transaction::new(
                        TransactionId::from_u128(i as u128),
                        ProductId::from_u128(1),
                        kind,
                        q,
                        base + Duration::hours(hours),
                        user,
                    )
                    .unwrap()
                    .with_reason(reason)
                })
                .collect()
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 128,
            ..ProptestConfig::default()
        })]

        /// Property: a sorted copy is a permutation of the input, ordered by the
        /// field, ties in input order, input untouched.
        #[test]
        fn product_sort_is_stable_permutation(
            products in arb_products(),
            field_idx in 0usize..PRODUCT_FIELDS.len(),
            direction in arb_direction()
        ) {
            let field = PRODUCT_FIELDS[field_idx];
            let before = products.clone();
            let sorted = sort_products(&products, field, direction);

            prop_assert_eq!(&products, &before);
            prop_assert_eq!(sorted.len(), products.len());

            let mut got = ids(&sorted);
            got.sort_unstable();
            prop_assert_eq!(got, ids(&products));

            for pair in sorted.windows(2) {
                match direction.apply(field.compare(&pair[0], &pair[1])) {
                    Ordering::Greater => prop_assert!(false, "out of order under {:?}", field),
                    Ordering::Equal => prop_assert!(pair[0].id.as_uuid() < pair[1].id.as_uuid()),
                    Ordering::Less => {}
                }
            }
        }

        /// Property: same guarantees for transaction lists.
        #[test]
        fn transaction_sort_is_stable_permutation(
            transactions in arb_transactions(),
            field_idx in 0usize..TRANSACTION_FIELDS.len(),
            direction in arb_direction()
        ) {
            let field = TRANSACTION_FIELDS[field_idx];
            let before = transactions.clone();
            let sorted = sort_transactions(&transactions, field, direction);

            prop_assert_eq!(&transactions, &before);

            let mut got: Vec<_> = sorted.iter().map(|t| t.id.as_uuid().as_u128()).collect();
            got.sort_unstable();
            let want: Vec<_> = transactions.iter().map(|t| t.id.as_uuid().as_u128()).collect();
            prop_assert_eq!(got, want);

            for pair in sorted.windows(2) {
                match direction.apply(field.compare(&pair[0], &pair[1])) {
                    Ordering::Greater => prop_assert!(false, "out of order under {:?}", field),
                    Ordering::Equal => prop_assert!(pair[0].id.as_uuid() < pair[1].id.as_uuid()),
                    Ordering::Less => {}
                }
            }
        }
    }
}
