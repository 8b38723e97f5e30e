use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockwise_core::{DomainError, DomainResult, Entity, ProductId};

/// Catalog product as read from the backing store.
///
/// Fields are public: this is a snapshot record, not an aggregate. SKU
/// uniqueness is enforced by the store, never here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub sku: String,
    /// Category label; matched against `Category::name` by exact string equality.
    pub category: String,
    pub quantity: u32,
    pub min_stock_level: u32,
    /// Unit price in currency units.
    pub price: Decimal,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub supplier: String,
    /// Username of whoever created the record.
    #[serde(default)]
    pub added_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Minimal product with zero stock, zero threshold and zero price.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        sku: impl Into<String>,
        category: impl Into<String>,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            sku: sku.into(),
            category: category.into(),
            quantity: 0,
            min_stock_level: 0,
            price: Decimal::ZERO,
            location: String::new(),
            supplier: String::new(),
            added_by: String::new(),
            created_at: at,
            updated_at: at,
        }
    }

    pub fn with_stock(mut self, quantity: u32, min_stock_level: u32) -> Self {
        self.quantity = quantity;
        self.min_stock_level = min_stock_level;
        self
    }

    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = price;
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_supplier(mut self, supplier: impl Into<String>) -> Self {
        self.supplier = supplier.into();
        self
    }

    pub fn added_by(mut self, username: impl Into<String>) -> Self {
        self.added_by = username.into();
        self
    }

    /// At or below the configured minimum.
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.min_stock_level
    }

    /// On-hand value at the current price.
    pub fn stock_value(&self) -> Decimal {
        self.value_of(self.quantity)
    }

    /// Value of `quantity` units at the current price, saturating at the
    /// `Decimal` bounds.
    pub fn value_of(&self, quantity: u32) -> Decimal {
        self.price.saturating_mul(Decimal::from(quantity))
    }

    /// Form-level checks applied before a product is written.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if self.sku.trim().is_empty() {
            return Err(DomainError::validation("SKU cannot be empty"));
        }
        if self.price < Decimal::ZERO {
            return Err(DomainError::validation("price cannot be negative"));
        }
        Ok(())
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
