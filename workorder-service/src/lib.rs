//! workorder-service: service-order (OS) record management for an automotive
//! workshop.
//!
//! Two components: a pure total engine (`services::totals`) and a record
//! store (`services::store`) that owns the durable collection and the active
//! record. The presentation layer (form UI, printing) is an external consumer
//! of this crate's API and is not part of it.

pub mod models;
pub mod services;
