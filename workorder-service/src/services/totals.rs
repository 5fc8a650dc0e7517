//! Total engine: pure arithmetic over line items and the discount percentage.
//!
//! No I/O, no state. Range validation of the discount is a caller concern;
//! the store's edit path clamps, these functions do not.

use rust_decimal::Decimal;

use crate::models::LineItem;

/// Gross and final totals for one order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderTotals {
    pub gross_total: Decimal,
    pub final_total: Decimal,
}

/// Total for a single row: `quantity * unit_price`.
pub fn line_total(quantity: Decimal, unit_price: Decimal) -> Decimal {
    quantity * unit_price
}

/// Totals for a whole order.
///
/// The gross total is the sum of each item's already-derived `line_total`;
/// the final total applies the percentage discount to the gross.
pub fn order_totals(items: &[LineItem], discount_percent: Decimal) -> OrderTotals {
    let gross_total: Decimal = items.iter().map(|item| item.line_total).sum();
    let discount_amount = gross_total * discount_percent / Decimal::ONE_HUNDRED;

    OrderTotals {
        gross_total,
        final_total: gross_total - discount_amount,
    }
}

/// Lenient numeric input coercion: empty or non-numeric input is zero.
///
/// Operator-typed quantities and prices arrive as free text; a value that
/// does not parse contributes nothing to the totals rather than failing.
pub fn parse_amount(raw: &str) -> Decimal {
    raw.trim().parse().unwrap_or(Decimal::ZERO)
}
