use std::sync::{Arc, RwLock};

use botica_core::ProductId;
use botica_products::Product;

/// Storage abstraction for the authoritative product list.
///
/// `list` must return products in a stable order (insertion order for the
/// in-memory store); the reporting layer relies on it for first-encountered
/// tie-breaking.
pub trait ProductStore: Send + Sync {
    fn get(&self, id: &ProductId) -> Option<Product>;
    fn upsert(&self, product: Product);
    /// Remove a product; returns whether it was present.
    fn remove(&self, id: &ProductId) -> bool;
    fn list(&self) -> Vec<Product>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    fn get(&self, id: &ProductId) -> Option<Product> {
        (**self).get(id)
    }

    fn upsert(&self, product: Product) {
        (**self).upsert(product)
    }

    fn remove(&self, id: &ProductId) -> bool {
        (**self).remove(id)
    }

    fn list(&self) -> Vec<Product> {
        (**self).list()
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

/// In-memory insertion-ordered store for tests/dev and the CLI.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    inner: RwLock<Vec<Product>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Vec::new()),
        }
    }
}

impl ProductStore for InMemoryProductStore {
    fn get(&self, id: &ProductId) -> Option<Product> {
        let products = self.inner.read().ok()?;
        products.iter().find(|p| p.id_typed() == *id).cloned()
    }

    fn upsert(&self, product: Product) {
        if let Ok(mut products) = self.inner.write() {
            match products.iter().position(|p| p.id_typed() == product.id_typed()) {
                // Replace in place so insertion order is preserved.
                Some(idx) => products[idx] = product,
                None => products.push(product),
            }
        }
    }

    fn remove(&self, id: &ProductId) -> bool {
        if let Ok(mut products) = self.inner.write() {
            match products.iter().position(|p| p.id_typed() == *id) {
                Some(idx) => {
                    products.remove(idx);
                    true
                }
                None => false,
            }
        } else {
            false
        }
    }

    fn list(&self) -> Vec<Product> {
        match self.inner.read() {
            Ok(products) => products.clone(),
            Err(_) => vec![],
        }
    }

    fn len(&self) -> usize {
        match self.inner.read() {
            Ok(products) => products.len(),
            Err(_) => 0,
        }
    }
}
