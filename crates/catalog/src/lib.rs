//! Catalog domain module.
//!
//! Snapshot records for products, stock transactions and categories, plus the
//! small amount of deterministic logic that belongs to them (validation, stock
//! movements, category navigation, list sorting). No IO, no storage.

pub mod category;
pub mod listing;
pub mod product;
pub mod transaction;

pub use category::{Category, CategoryTree, slugify};
pub use listing::{
    ProductField, SortDirection, TransactionField, search_products, sort_products,
    sort_transactions,
};
pub use product::Product;
pub use transaction::{AuditEntry, Transaction, TransactionType, apply_movement};
