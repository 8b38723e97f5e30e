use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockwise_core::{DomainError, DomainResult, Entity, ProductId, TransactionId, UserId};

use crate::product::Product;

/// Direction of a stock movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Stock-in: increases on-hand quantity.
    In,
    /// Stock-out: decreases on-hand quantity (a sale or write-off).
    Out,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::In => "in",
            TransactionType::Out => "out",
        }
    }
}

impl core::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for TransactionType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in" => Ok(TransactionType::In),
            "out" => Ok(TransactionType::Out),
            other => Err(DomainError::validation(format!(
                "unknown transaction type '{other}' (expected 'in' or 'out')"
            ))),
        }
    }
}

/// Who recorded a movement, as stamped by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    pub user_id: UserId,
    pub action: String,
    pub timestamp: DateTime<Utc>,
}

/// Recorded stock movement. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: TransactionId,
    /// Reference to the moved product; may dangle in a snapshot.
    pub product_id: ProductId,
    /// Product name at the time of the movement. Kept so history stays
    /// readable after the product is deleted.
    #[serde(default)]
    pub product_name: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub quantity: u32,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub reason: String,
    pub performed_by: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audit_log: Option<AuditEntry>,
}

impl Transaction {
    /// Record a new movement, rejecting a zero quantity.
    pub fn new(
        id: TransactionId,
        product_id: ProductId,
        kind: TransactionType,
        quantity: u32,
        date: DateTime<Utc>,
        performed_by: impl Into<String>,
    ) -> DomainResult<Self> {
        let tx = Self {
            id,
            product_id,
            product_name: String::new(),
            kind,
            quantity,
            date,
            reason: String::new(),
            performed_by: performed_by.into(),
            audit_log: None,
        };
        tx.validate()?;
        Ok(tx)
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    pub fn with_product_name(mut self, name: impl Into<String>) -> Self {
        self.product_name = name.into();
        self
    }

    pub fn with_audit_log(mut self, entry: AuditEntry) -> Self {
        self.audit_log = Some(entry);
        self
    }

    pub fn is_stock_out(&self) -> bool {
        self.kind == TransactionType::Out
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.quantity == 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }
        if self.performed_by.trim().is_empty() {
            return Err(DomainError::validation("performed_by cannot be empty"));
        }
        Ok(())
    }
}

impl Entity for Transaction {
    type Id = TransactionId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// On-hand quantity of `product` after applying `tx`.
///
/// Neither argument is modified; the caller writes the returned quantity back
/// to the store.
pub fn apply_movement(product: &Product, tx: &Transaction) -> DomainResult<u32> {
    if product.id != tx.product_id {
        return Err(DomainError::invariant("product_id mismatch"));
    }
    tx.validate()?;

    match tx.kind {
        TransactionType::In => product
            .quantity
            .checked_add(tx.quantity)
            .ok_or_else(|| DomainError::invariant("stock quantity overflow")),
        TransactionType::Out => product.quantity.checked_sub(tx.quantity).ok_or_else(|| {
            DomainError::invariant(format!(
                "stock cannot go negative (on hand: {}, requested: {})",
                product.quantity, tx.quantity
            ))
        }),
    }
}
