//! Inventory records.
//!
//! Only the stock-change request shape lives here; applying a delta to a stock
//! level is the inventory service's job.

pub mod stock;

pub use stock::{Inventory, StockDirection};
