//! Domain models for workorder-service.

mod edit;
mod line_item;
mod order;

pub use edit::OrderEdit;
pub use line_item::{LineItem, LineItemPatch};
pub use order::{ServiceOrder, BLANK_LINE_ITEMS, DEFAULT_PAYMENT_TERMS};
