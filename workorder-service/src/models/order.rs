//! Service order ("Ordem de Serviço") model for workorder-service.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::LineItem;

/// Number of blank line-item rows a freshly created order carries.
pub const BLANK_LINE_ITEMS: usize = 23;

/// Boilerplate payment-terms text stamped onto new orders.
pub const DEFAULT_PAYMENT_TERMS: &str = "Informe aqui as formas e condições de pagamento para \
     seus clientes, bem como a validade do orçamento e outras informações que julgar pertinentes.";

/// A service-order record.
///
/// `gross_total` and `final_total` are derived from `line_items` and
/// `discount_percent`; every mutating path in the store recomputes them
/// before it completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOrder {
    pub id: Uuid,
    pub order_number: String,
    pub date: String,
    pub customer_name: String,
    pub address: String,
    pub phone: String,
    pub plate: String,
    pub vehicle: String,
    pub color: String,
    pub year: String,
    pub engine: String,
    pub chassis_number: String,
    pub line_items: Vec<LineItem>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub gross_total: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub discount_percent: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub final_total: Decimal,
    pub payment_terms: String,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
