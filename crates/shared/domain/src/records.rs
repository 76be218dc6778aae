//! Record types flowing through the migration pipeline.
//!
//! Everything here is single-run data: loaded at command start, held in
//! memory for one invocation, discarded on exit.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One data row of a taxonomy CSV file.
///
/// Produced by the taxonomy loader and consumed immediately by the
/// normalizer; the unused `table` CSV field is dropped at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyRecord {
    /// Stream this row's child belongs to.
    pub parent_of: String,
    /// Aggregation weight of the child within its parent.
    pub weight: Decimal,
    /// The child stream id.
    pub stream_id: String,
}

/// A weighted child stream, owned exclusively by its parent's
/// [`NormalizedEntry`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Child {
    pub id: String,
    pub weight: Decimal,
}

/// One entry per distinct parent stream id seen in the taxonomy file.
///
/// Invariant: stream ids are unique within a normalized set, and the child
/// list preserves the relative order of the parent's input rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedEntry {
    pub stream_id: String,
    pub children: Vec<Child>,
}

/// One row of a primitive-sources CSV file.
///
/// Unlike taxonomy rows these are independent per-row entities; duplicates
/// across rows are never merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimitiveSourceRecord {
    pub stream_id: String,
    pub source_type: String,
    pub source_id: String,
    pub update_frequency: u32,
}

/// A deployed stream as reported by the remote listing.
///
/// Only `name` is consumed by the resolver; the owner identity tags which
/// account the listing was scoped to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamInfo {
    pub name: String,
    #[serde(default)]
    pub owner: String,
}
