//! # Domain Models
//!
//! This crate contains pure domain types with minimal dependencies
//! (`serde`, `rust_decimal`). Keep it lean: no I/O, networking, or heavy
//! logic, just data and simple helpers.

pub mod records;

pub use records::{Child, NormalizedEntry, PrimitiveSourceRecord, StreamInfo, TaxonomyRecord};
