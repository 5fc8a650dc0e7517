//! Field-group edits for the active service order.

use rust_decimal::Decimal;

/// An explicit edit against the active record, one variant per field group.
///
/// The store applies these and recomputes the order totals on every variant,
/// so a `Discount` edit can never leave stale totals behind.
#[derive(Debug, Clone)]
pub enum OrderEdit {
    Header {
        order_number: Option<String>,
        date: Option<String>,
    },
    Customer {
        customer_name: Option<String>,
        address: Option<String>,
        phone: Option<String>,
    },
    Vehicle {
        plate: Option<String>,
        vehicle: Option<String>,
        color: Option<String>,
        year: Option<String>,
        engine: Option<String>,
        chassis_number: Option<String>,
    },
    Discount(Decimal),
    PaymentTerms(String),
    Notes(String),
}
