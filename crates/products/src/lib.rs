//! Products domain module.
//!
//! This crate contains the stocked-product entity for the pharmacy catalog,
//! implemented purely as deterministic domain logic (no IO, no storage).

pub mod product;

pub use product::Product;
