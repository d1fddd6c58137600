//! Inventory module: the authoritative product list for the pharmacy.
//!
//! The [`store::ProductStore`] trait abstracts where the product list lives;
//! [`inventory::Inventory`] layers the business operations (stock
//! adjustments, low-stock determination) on top of whichever store is
//! injected.

pub mod inventory;
pub mod store;

pub use inventory::{Inventory, DEFAULT_REORDER_THRESHOLD};
pub use store::{InMemoryProductStore, ProductStore};
