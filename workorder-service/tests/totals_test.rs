//! Total engine tests for workorder-service.

mod common;

use common::dec;
use rust_decimal::Decimal;
use workorder_service::models::LineItem;
use workorder_service::services::{line_total, order_totals, parse_amount};

/// A row with a derived line total, as the store would hold it.
fn row(quantity: &str, unit_price: &str) -> LineItem {
    let mut item = LineItem::blank();
    item.quantity = dec(quantity);
    item.unit_price = dec(unit_price);
    item.line_total = line_total(item.quantity, item.unit_price);
    item
}

#[test]
fn line_total_is_quantity_times_unit_price() {
    assert_eq!(line_total(dec("2"), dec("50")), dec("100"));
    assert_eq!(line_total(dec("1.5"), dec("10.50")), dec("15.75"));
    assert_eq!(line_total(Decimal::ZERO, dec("99.99")), Decimal::ZERO);
}

#[test]
fn order_totals_of_no_rows_are_zero() {
    let totals = order_totals(&[], Decimal::ZERO);
    assert_eq!(totals.gross_total, Decimal::ZERO);
    assert_eq!(totals.final_total, Decimal::ZERO);
}

#[test]
fn gross_total_sums_all_line_totals() {
    let items = vec![row("2", "50"), row("1", "19.90"), row("0", "7")];
    let totals = order_totals(&items, Decimal::ZERO);
    assert_eq!(totals.gross_total, dec("119.90"));
    assert_eq!(totals.final_total, dec("119.90"));
}

#[test]
fn ten_percent_discount_on_one_hundred_yields_ninety() {
    let items = vec![row("2", "50")];
    let totals = order_totals(&items, dec("10"));
    assert_eq!(totals.gross_total, dec("100"));
    assert_eq!(totals.final_total, dec("90"));
}

#[test]
fn full_discount_yields_zero_final_total() {
    let items = vec![row("4", "25")];
    let totals = order_totals(&items, dec("100"));
    assert_eq!(totals.gross_total, dec("100"));
    assert_eq!(totals.final_total, Decimal::ZERO);
}

#[test]
fn engine_passes_out_of_range_discount_through() {
    // Range validation belongs to the store's edit path, not the engine.
    let items = vec![row("2", "50")];

    let negative = order_totals(&items, dec("-10"));
    assert_eq!(negative.final_total, dec("110"));

    let oversized = order_totals(&items, dec("150"));
    assert_eq!(oversized.final_total, dec("-50"));
}

#[test]
fn parse_amount_coerces_bad_input_to_zero() {
    assert_eq!(parse_amount("12.5"), dec("12.5"));
    assert_eq!(parse_amount(" 7 "), dec("7"));
    assert_eq!(parse_amount(""), Decimal::ZERO);
    assert_eq!(parse_amount("   "), Decimal::ZERO);
    assert_eq!(parse_amount("abc"), Decimal::ZERO);
    assert_eq!(parse_amount("12,50"), Decimal::ZERO);
}
