//! Common test utilities for workorder-service integration tests.

use rust_decimal::Decimal;
use std::sync::Once;
use workorder_service::models::ServiceOrder;
use workorder_service::services::{MemorySlot, OrderStore};

static INIT: Once = Once::new();

/// Initialize tracing for tests (only once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("info,workorder_service=debug")
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// An isolated in-memory store.
pub fn test_store() -> OrderStore<MemorySlot> {
    init_tracing();
    OrderStore::in_memory()
}

/// Parse a decimal literal.
pub fn dec(s: &str) -> Decimal {
    s.parse().expect("valid decimal literal")
}

/// A blank order with a customer name and one priced row (quantity x price
/// on row 0). Line and order totals are left stale on purpose; the store
/// recomputes them on save.
pub fn priced_order(
    store: &OrderStore<MemorySlot>,
    quantity: &str,
    unit_price: &str,
) -> ServiceOrder {
    let mut order = store.create_blank();
    order.customer_name = "João da Silva".to_string();
    order.line_items[0].quantity = dec(quantity);
    order.line_items[0].unit_price = dec(unit_price);
    order
}
