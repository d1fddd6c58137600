use chrono::Local;
use serde::Serialize;

use botica_inventory::{Inventory, ProductStore};
use botica_products::Product;

/// Timestamp layout stamped on every generated report.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Composite report value.
///
/// Field order is the report's ordered mapping; serializing the struct (e.g.
/// to JSON) keeps that order. Extremal products are `None` for an empty
/// inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryReport {
    pub generated_at: String,
    pub total_products: usize,
    pub total_units: i64,
    pub total_value: u64,
    pub most_expensive: Option<Product>,
    pub cheapest: Option<Product>,
    pub low_stock_products: Vec<Product>,
}

/// Derives summary statistics from the injected inventory collaborator.
///
/// Holds a borrow of the inventory for its lifetime; no product data is
/// copied at construction time. Each query re-reads the live list, so no
/// snapshot consistency is promised across the sub-metrics of a full report.
#[derive(Debug)]
pub struct ReportGenerator<'a, S>
where
    S: ProductStore,
{
    inventory: &'a Inventory<S>,
}

impl<'a, S> ReportGenerator<'a, S>
where
    S: ProductStore,
{
    pub fn new(inventory: &'a Inventory<S>) -> Self {
        Self { inventory }
    }

    /// Total monetary value of the inventory: sum of line values.
    pub fn total_inventory_value(&self) -> u64 {
        self.inventory
            .all_products()
            .iter()
            .map(Product::line_value)
            .sum()
    }

    /// Number of distinct product rows (not units).
    pub fn total_product_count(&self) -> usize {
        self.inventory.product_count()
    }

    /// Total units on hand across all products.
    pub fn total_stock_units(&self) -> i64 {
        self.inventory
            .all_products()
            .iter()
            .map(Product::quantity)
            .sum()
    }

    /// Product with the highest unit price.
    ///
    /// `None` for an empty inventory; ties resolve to the first product in
    /// list order.
    pub fn most_expensive_product(&self) -> Option<Product> {
        self.inventory
            .all_products()
            .into_iter()
            .reduce(|best, p| if p.unit_price() > best.unit_price() { p } else { best })
    }

    /// Product with the lowest unit price; same empty/tie policy as
    /// [`most_expensive_product`](Self::most_expensive_product).
    pub fn cheapest_product(&self) -> Option<Product> {
        self.inventory
            .all_products()
            .into_iter()
            .reduce(|best, p| if p.unit_price() < best.unit_price() { p } else { best })
    }

    /// Build the composite report, stamped with the generation time.
    ///
    /// Sub-metrics are computed independently (each re-reads the store); the
    /// low-stock list is the collaborator's current answer, not a copy taken
    /// earlier.
    pub fn generate_full_report(&self) -> InventoryReport {
        let report = InventoryReport {
            generated_at: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            total_products: self.total_product_count(),
            total_units: self.total_stock_units(),
            total_value: self.total_inventory_value(),
            most_expensive: self.most_expensive_product(),
            cheapest: self.cheapest_product(),
            low_stock_products: self.inventory.low_stock_products(),
        };

        tracing::debug!(
            total_products = report.total_products,
            total_value = report.total_value,
            low_stock = report.low_stock_products.len(),
            "inventory report generated"
        );

        report
    }
}
