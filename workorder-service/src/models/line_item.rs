//! Line item model for workorder-service.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One billable row of a service order.
///
/// `line_total` is derived and kept equal to `quantity * unit_price` by the
/// store; it is never persisted out of sync.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: Uuid,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub quantity: Decimal,
    pub description: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub unit_price: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub line_total: Decimal,
}

impl LineItem {
    /// A blank row with a fresh id and zero amounts.
    pub fn blank() -> Self {
        LineItem {
            id: Uuid::new_v4(),
            quantity: Decimal::ZERO,
            description: String::new(),
            unit_price: Decimal::ZERO,
            line_total: Decimal::ZERO,
        }
    }
}

/// Partial update for a line item. Unset fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct LineItemPatch {
    pub quantity: Option<Decimal>,
    pub description: Option<String>,
    pub unit_price: Option<Decimal>,
}
