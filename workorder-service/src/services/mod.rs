//! Services module for workorder-service.

pub mod store;
pub mod totals;

pub use store::{FileSlot, MemorySlot, OrderStore, StorageSlot, SCHEMA_VERSION};
pub use totals::{line_total, order_totals, parse_amount, OrderTotals};
