//! Product catalog records.
//!
//! This crate defines the catalog record shape exchanged between the products
//! service, its backing store and the catalog loader, plus read-only helpers
//! over a loaded catalog (no HTTP, no storage).

pub mod catalog;
pub mod category;
pub mod product;

pub use catalog::Catalog;
pub use category::{Category, derive_categories};
pub use product::{Product, Products, StoreKey};
