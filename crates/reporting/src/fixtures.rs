//! Test data shared by the report modules.

use chrono::{DateTime, Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use stockwise_catalog::{Category, Product, Transaction, TransactionType};
use stockwise_core::{CategoryId, ProductId, TransactionId};

pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
}

pub fn pid(n: u128) -> ProductId {
    ProductId::from_u128(n)
}

pub fn product(n: u128, quantity: u32, min_stock_level: u32, price: Decimal) -> Product {
    Product::new(pid(n), format!("Product {n}"), format!("SKU-{n:03}"), "Electronics", epoch())
        .with_stock(quantity, min_stock_level)
        .with_price(price)
}

pub fn in_category(mut product: Product, category: &str) -> Product {
    product.category = category.to_string();
    product
}

/// Transaction `n` for product `product`, dated `n` hours after the epoch.
pub fn tx(n: u128, product: u128, kind: TransactionType, quantity: u32) -> Transaction {
    Transaction {
        id: TransactionId::from_u128(n),
        product_id: pid(product),
        product_name: format!("Product {product}"),
        kind,
        quantity,
        date: epoch() + Duration::hours(n as i64),
        reason: String::new(),
        performed_by: "admin".to_string(),
        audit_log: None,
    }
}

pub fn sale(n: u128, product: u128, quantity: u32) -> Transaction {
    tx(n, product, TransactionType::Out, quantity)
}

pub fn restock(n: u128, product: u128, quantity: u32) -> Transaction {
    tx(n, product, TransactionType::In, quantity)
}

pub fn category(n: u128, name: &str) -> Category {
    Category::new(CategoryId::from_u128(n), name)
}
