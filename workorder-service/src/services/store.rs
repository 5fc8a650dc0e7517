//! Record store for service orders.
//!
//! Owns the durable collection and the in-memory active record. The durable
//! side is a single named slot holding the whole serialized collection; every
//! change to the collection is followed by a synchronous slot write.

use std::fs;
use std::io;
use std::path::PathBuf;

use chrono::{Local, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use workshop_core::error::AppError;

use crate::models::{
    LineItem, LineItemPatch, OrderEdit, ServiceOrder, BLANK_LINE_ITEMS, DEFAULT_PAYMENT_TERMS,
};
use crate::services::totals;

/// Version of the persisted document layout.
pub const SCHEMA_VERSION: u32 = 1;

/// A single named durable slot the whole collection is written to.
pub trait StorageSlot {
    /// Read the slot contents. `None` when the slot has never been written.
    fn read(&self) -> Result<Option<Vec<u8>>, AppError>;

    /// Replace the slot contents.
    fn write(&mut self, bytes: &[u8]) -> Result<(), AppError>;
}

/// File-backed slot. Writes go through a sibling temp file and a rename so a
/// crash mid-write cannot truncate the existing collection.
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSlot { path: path.into() }
    }
}

impl StorageSlot for FileSlot {
    fn read(&self) -> Result<Option<Vec<u8>>, AppError> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// In-memory slot for tests and ephemeral stores.
#[derive(Default)]
pub struct MemorySlot {
    buf: Option<Vec<u8>>,
}

impl StorageSlot for MemorySlot {
    fn read(&self) -> Result<Option<Vec<u8>>, AppError> {
        Ok(self.buf.clone())
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), AppError> {
        self.buf = Some(bytes.to_vec());
        Ok(())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DocumentRef<'a> {
    schema_version: u32,
    ordens: &'a [ServiceOrder],
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Document {
    // Absent in documents written before versioning was introduced.
    #[serde(default = "legacy_schema_version")]
    schema_version: u32,
    #[serde(default)]
    ordens: Vec<ServiceOrder>,
}

fn legacy_schema_version() -> u32 {
    1
}

/// The record store: durable collection plus the active record being edited.
///
/// The collection is append-ordered; `save` is an upsert by `id` that keeps
/// an existing record's position. The active record lives in memory only and
/// reaches the collection exclusively through `save`.
pub struct OrderStore<S: StorageSlot> {
    slot: S,
    orders: Vec<ServiceOrder>,
    active: Option<ServiceOrder>,
}

impl OrderStore<FileSlot> {
    /// Open a store backed by a JSON file. A missing file is an empty
    /// collection; a file that fails to parse is a fatal open error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        Self::open_slot(FileSlot::new(path))
    }
}

impl OrderStore<MemorySlot> {
    /// An isolated store with no durable backing, for tests.
    pub fn in_memory() -> Self {
        OrderStore {
            slot: MemorySlot::default(),
            orders: Vec::new(),
            active: None,
        }
    }
}

impl<S: StorageSlot> OrderStore<S> {
    /// Open a store over an arbitrary slot.
    pub fn open_slot(slot: S) -> Result<Self, AppError> {
        let orders = match slot.read()? {
            Some(bytes) => {
                let doc: Document = serde_json::from_slice(&bytes)?;
                if doc.schema_version > SCHEMA_VERSION {
                    return Err(AppError::StorageError(anyhow::anyhow!(
                        "Unsupported schema version {} (newest known is {})",
                        doc.schema_version,
                        SCHEMA_VERSION
                    )));
                }
                doc.ordens
            }
            None => Vec::new(),
        };

        info!(orders = orders.len(), "Order store opened");

        Ok(OrderStore {
            slot,
            orders,
            active: None,
        })
    }

    /// Flush and drop the store.
    pub fn close(mut self) -> Result<(), AppError> {
        self.persist()
    }

    /// The durable collection, in append order.
    pub fn orders(&self) -> &[ServiceOrder] {
        &self.orders
    }

    /// The record currently open for editing, if any.
    pub fn active(&self) -> Option<&ServiceOrder> {
        self.active.as_ref()
    }

    /// Replace the active record wholesale (the "open this record in the
    /// form" hook for the presentation layer).
    pub fn set_active(&mut self, order: Option<ServiceOrder>) {
        self.active = order;
    }

    /// A fresh order with defaults: sequential `OS`-prefixed number, today's
    /// date, 23 blank rows, zero totals. Not inserted into the collection.
    pub fn create_blank(&self) -> ServiceOrder {
        let now = Utc::now();
        ServiceOrder {
            id: Uuid::new_v4(),
            order_number: format!("OS{:04}", self.orders.len() + 1),
            date: Local::now().format("%d/%m/%Y").to_string(),
            customer_name: String::new(),
            address: String::new(),
            phone: String::new(),
            plate: String::new(),
            vehicle: String::new(),
            color: String::new(),
            year: String::new(),
            engine: String::new(),
            chassis_number: String::new(),
            line_items: (0..BLANK_LINE_ITEMS).map(|_| LineItem::blank()).collect(),
            gross_total: Decimal::ZERO,
            discount_percent: Decimal::ZERO,
            final_total: Decimal::ZERO,
            payment_terms: DEFAULT_PAYMENT_TERMS.to_string(),
            notes: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Reset the active record to a blank form, keeping its order number and
    /// date. No-op when nothing is active.
    pub fn clear_active(&mut self) {
        let Some(current) = self.active.take() else {
            return;
        };
        let mut cleared = self.create_blank();
        cleared.order_number = current.order_number;
        cleared.date = current.date;
        self.active = Some(cleared);
    }

    /// Upsert `order` into the collection by `id`, stamp `updated_at`, and
    /// persist. The stamped record becomes the active record.
    ///
    /// Totals are recomputed here rather than trusted, so a caller-assembled
    /// record can never persist stale arithmetic.
    pub fn save(&mut self, mut order: ServiceOrder) -> Result<ServiceOrder, AppError> {
        for item in &mut order.line_items {
            item.line_total = totals::line_total(item.quantity, item.unit_price);
        }
        let computed = totals::order_totals(&order.line_items, order.discount_percent);
        order.gross_total = computed.gross_total;
        order.final_total = computed.final_total;
        order.updated_at = Utc::now();

        match self.orders.iter_mut().find(|o| o.id == order.id) {
            Some(existing) => *existing = order.clone(),
            None => self.orders.push(order.clone()),
        }
        self.persist()?;

        info!(id = %order.id, order_number = %order.order_number, "Order saved");
        self.active = Some(order.clone());
        Ok(order)
    }

    /// Remove the order with `id` from the collection. Unknown ids are a
    /// silent no-op. The active slot is cleared whenever it holds that id,
    /// including for a record that was never saved.
    pub fn delete(&mut self, id: Uuid) -> Result<(), AppError> {
        if self.active.as_ref().is_some_and(|a| a.id == id) {
            self.active = None;
        }
        let before = self.orders.len();
        self.orders.retain(|o| o.id != id);
        if self.orders.len() == before {
            debug!(%id, "Delete of unknown order ignored");
            return Ok(());
        }
        self.persist()?;

        info!(%id, "Order deleted");
        Ok(())
    }

    /// Make the stored order with `id` the active record. `None` (and an
    /// unchanged active slot) when the id is unknown.
    pub fn load_active(&mut self, id: Uuid) -> Option<&ServiceOrder> {
        let found = self.orders.iter().find(|o| o.id == id)?;
        self.active = Some(found.clone());
        self.active.as_ref()
    }

    /// Merge `patch` into line item `index` of the active record and
    /// recompute its `line_total` and the order totals.
    ///
    /// Guard: applies only when `order_id` matches the active record; a
    /// mismatch or an out-of-range index is a silent no-op. In-memory only;
    /// the collection is untouched until `save`.
    pub fn update_line_item(&mut self, order_id: Uuid, index: usize, patch: LineItemPatch) {
        let Some(active) = self.active.as_mut().filter(|a| a.id == order_id) else {
            debug!(%order_id, "Line-item update against non-active order ignored");
            return;
        };
        let Some(item) = active.line_items.get_mut(index) else {
            debug!(%order_id, index, "Line-item update outside the row range ignored");
            return;
        };

        if let Some(quantity) = patch.quantity {
            item.quantity = quantity.max(Decimal::ZERO);
        }
        if let Some(description) = patch.description {
            item.description = description;
        }
        if let Some(unit_price) = patch.unit_price {
            item.unit_price = unit_price.max(Decimal::ZERO);
        }
        item.line_total = totals::line_total(item.quantity, item.unit_price);

        let computed = totals::order_totals(&active.line_items, active.discount_percent);
        active.gross_total = computed.gross_total;
        active.final_total = computed.final_total;
    }

    /// Apply a field-group edit to the active record.
    ///
    /// Same narrowing guard as `update_line_item`. Totals are recomputed on
    /// every variant; `Discount` is clamped to [0, 100]. In-memory only.
    pub fn apply_edit(&mut self, order_id: Uuid, edit: OrderEdit) {
        let Some(active) = self.active.as_mut().filter(|a| a.id == order_id) else {
            debug!(%order_id, "Edit against non-active order ignored");
            return;
        };

        match edit {
            OrderEdit::Header { order_number, date } => {
                if let Some(order_number) = order_number {
                    active.order_number = order_number;
                }
                if let Some(date) = date {
                    active.date = date;
                }
            }
            OrderEdit::Customer {
                customer_name,
                address,
                phone,
            } => {
                if let Some(customer_name) = customer_name {
                    active.customer_name = customer_name;
                }
                if let Some(address) = address {
                    active.address = address;
                }
                if let Some(phone) = phone {
                    active.phone = phone;
                }
            }
            OrderEdit::Vehicle {
                plate,
                vehicle,
                color,
                year,
                engine,
                chassis_number,
            } => {
                if let Some(plate) = plate {
                    active.plate = plate;
                }
                if let Some(vehicle) = vehicle {
                    active.vehicle = vehicle;
                }
                if let Some(color) = color {
                    active.color = color;
                }
                if let Some(year) = year {
                    active.year = year;
                }
                if let Some(engine) = engine {
                    active.engine = engine;
                }
                if let Some(chassis_number) = chassis_number {
                    active.chassis_number = chassis_number;
                }
            }
            OrderEdit::Discount(percent) => {
                active.discount_percent = percent.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
            }
            OrderEdit::PaymentTerms(payment_terms) => {
                active.payment_terms = payment_terms;
            }
            OrderEdit::Notes(notes) => {
                active.notes = notes;
            }
        }

        let computed = totals::order_totals(&active.line_items, active.discount_percent);
        active.gross_total = computed.gross_total;
        active.final_total = computed.final_total;
    }

    fn persist(&mut self) -> Result<(), AppError> {
        let doc = DocumentRef {
            schema_version: SCHEMA_VERSION,
            ordens: &self.orders,
        };
        let bytes = serde_json::to_vec_pretty(&doc)?;
        self.slot.write(&bytes)
    }
}
