use serde::{Deserialize, Serialize};

use botica_core::{DomainError, DomainResult, Entity, ProductId};

/// A single stocked item type: unit price plus quantity on hand.
///
/// Prices are held in the smallest currency unit (e.g. cents). Quantities
/// are `i64` so stock adjustments can be expressed as signed deltas, with
/// the invariant that the stored quantity never goes negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    sku: String,
    name: String,
    /// Unit price in smallest currency unit (e.g., cents).
    unit_price: u64,
    quantity: i64,
}

impl Product {
    /// Validated constructor.
    pub fn new(
        id: ProductId,
        sku: impl Into<String>,
        name: impl Into<String>,
        unit_price: u64,
        quantity: i64,
    ) -> DomainResult<Self> {
        let sku = sku.into();
        let name = name.into();

        if sku.trim().is_empty() {
            return Err(DomainError::validation("sku cannot be empty"));
        }
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if quantity < 0 {
            return Err(DomainError::invariant("quantity cannot be negative"));
        }

        Ok(Self {
            id,
            sku,
            name,
            unit_price,
            quantity,
        })
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> u64 {
        self.unit_price
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Total line value: unit price × quantity on hand (saturating).
    pub fn line_value(&self) -> u64 {
        if self.quantity > 0 {
            self.unit_price.saturating_mul(self.quantity as u64)
        } else {
            0
        }
    }

    /// Apply a signed stock adjustment.
    ///
    /// Rejects zero deltas and any adjustment that would drive the on-hand
    /// quantity negative.
    pub fn adjust_quantity(&mut self, delta: i64) -> DomainResult<()> {
        if delta == 0 {
            return Err(DomainError::validation("delta cannot be zero"));
        }

        let new_quantity = self.quantity + delta;
        if new_quantity < 0 {
            return Err(DomainError::invariant("quantity cannot go negative"));
        }

        self.quantity = new_quantity;
        Ok(())
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
