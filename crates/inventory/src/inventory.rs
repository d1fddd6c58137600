use botica_core::{DomainError, DomainResult, ProductId};
use botica_products::Product;

use crate::store::ProductStore;

/// Reorder threshold used when none is configured explicitly.
pub const DEFAULT_REORDER_THRESHOLD: i64 = 5;

/// The inventory collaborator: owns the authoritative product list and the
/// low-stock determination.
///
/// Generic over the injected [`ProductStore`]; every query re-reads the
/// store, so callers always see live state.
#[derive(Debug)]
pub struct Inventory<S>
where
    S: ProductStore,
{
    store: S,
    reorder_threshold: i64,
}

impl<S> Inventory<S>
where
    S: ProductStore,
{
    pub fn new(store: S) -> Self {
        Self::with_threshold(store, DEFAULT_REORDER_THRESHOLD)
    }

    pub fn with_threshold(store: S, reorder_threshold: i64) -> Self {
        Self {
            store,
            reorder_threshold,
        }
    }

    pub fn reorder_threshold(&self) -> i64 {
        self.reorder_threshold
    }

    /// Register a new product.
    ///
    /// Both the id and the SKU must be unique across the inventory.
    pub fn add_product(&self, product: Product) -> DomainResult<()> {
        if self.store.get(&product.id_typed()).is_some() {
            return Err(DomainError::conflict("product id already registered"));
        }
        if self.store.list().iter().any(|p| p.sku() == product.sku()) {
            return Err(DomainError::conflict(format!(
                "sku already registered: {}",
                product.sku()
            )));
        }

        tracing::debug!(sku = product.sku(), "product registered");
        self.store.upsert(product);
        Ok(())
    }

    pub fn remove_product(&self, id: &ProductId) -> DomainResult<()> {
        if self.store.remove(id) {
            Ok(())
        } else {
            Err(DomainError::not_found())
        }
    }

    /// Apply a signed stock adjustment to one product.
    pub fn adjust_stock(&self, id: &ProductId, delta: i64) -> DomainResult<()> {
        let mut product = self.store.get(id).ok_or_else(DomainError::not_found)?;
        product.adjust_quantity(delta)?;

        tracing::debug!(sku = product.sku(), delta, quantity = product.quantity(), "stock adjusted");
        self.store.upsert(product);
        Ok(())
    }

    pub fn get_product(&self, id: &ProductId) -> Option<Product> {
        self.store.get(id)
    }

    /// Full product list, in stable store order.
    pub fn all_products(&self) -> Vec<Product> {
        self.store.list()
    }

    /// Products at or below the reorder threshold, in stable store order.
    pub fn low_stock_products(&self) -> Vec<Product> {
        self.store
            .list()
            .into_iter()
            .filter(|p| p.quantity() <= self.reorder_threshold)
            .collect()
    }

    /// Number of distinct product rows (not units).
    pub fn product_count(&self) -> usize {
        self.store.len()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::store::InMemoryProductStore;

    fn test_inventory() -> Inventory<InMemoryProductStore> {
        Inventory::new(InMemoryProductStore::new())
    }

    fn test_product(sku: &str, unit_price: u64, quantity: i64) -> Product {
        Product::new(ProductId::new(), sku, sku, unit_price, quantity).unwrap()
    }

    #[test]
    fn add_product_rejects_duplicate_id() {
        let inventory = test_inventory();
        let product = test_product("SKU-001", 100, 10);
        inventory.add_product(product.clone()).unwrap();

        let err = inventory.add_product(product).unwrap_err();
        match err {
            DomainError::Conflict(_) => {}
            _ => panic!("Expected Conflict error for duplicate id"),
        }
    }

    #[test]
    fn add_product_rejects_duplicate_sku() {
        let inventory = test_inventory();
        inventory.add_product(test_product("SKU-001", 100, 10)).unwrap();

        let err = inventory.add_product(test_product("SKU-001", 200, 3)).unwrap_err();
        match err {
            DomainError::Conflict(msg) => assert!(msg.contains("SKU-001")),
            _ => panic!("Expected Conflict error for duplicate SKU"),
        }
    }

    #[test]
    fn remove_product_requires_presence() {
        let inventory = test_inventory();
        let product = test_product("SKU-001", 100, 10);
        let id = product.id_typed();
        inventory.add_product(product).unwrap();

        inventory.remove_product(&id).unwrap();
        let err = inventory.remove_product(&id).unwrap_err();
        match err {
            DomainError::NotFound => {}
            _ => panic!("Expected NotFound error"),
        }
    }

    #[test]
    fn adjust_stock_round_trips_through_store() {
        let inventory = test_inventory();
        let product = test_product("SKU-001", 100, 10);
        let id = product.id_typed();
        inventory.add_product(product).unwrap();

        inventory.adjust_stock(&id, -4).unwrap();
        assert_eq!(inventory.get_product(&id).unwrap().quantity(), 6);
    }

    #[test]
    fn adjust_stock_rejects_unknown_product() {
        let inventory = test_inventory();
        let err = inventory.adjust_stock(&ProductId::new(), 1).unwrap_err();
        match err {
            DomainError::NotFound => {}
            _ => panic!("Expected NotFound error"),
        }
    }

    #[test]
    fn low_stock_threshold_is_inclusive() {
        let inventory = Inventory::with_threshold(InMemoryProductStore::new(), 5);
        inventory.add_product(test_product("SKU-001", 100, 4)).unwrap();
        inventory.add_product(test_product("SKU-002", 100, 5)).unwrap();
        inventory.add_product(test_product("SKU-003", 100, 6)).unwrap();

        let low: Vec<String> = inventory
            .low_stock_products()
            .iter()
            .map(|p| p.sku().to_string())
            .collect();
        assert_eq!(low, vec!["SKU-001", "SKU-002"]);
    }

    #[test]
    fn shared_store_handles_see_live_state() {
        let store = Arc::new(InMemoryProductStore::new());
        let inventory = Inventory::new(Arc::clone(&store));
        let other = Inventory::new(store);

        let product = test_product("SKU-001", 100, 10);
        let id = product.id_typed();
        inventory.add_product(product).unwrap();
        other.adjust_stock(&id, -2).unwrap();

        assert_eq!(inventory.get_product(&id).unwrap().quantity(), 8);
    }

    #[test]
    fn product_count_tracks_rows_not_units() {
        let inventory = test_inventory();
        inventory.add_product(test_product("SKU-001", 100, 500)).unwrap();
        inventory.add_product(test_product("SKU-002", 100, 500)).unwrap();
        assert_eq!(inventory.product_count(), 2);
    }
}
