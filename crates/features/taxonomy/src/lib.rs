//! # Taxonomy Loading
//!
//! CSV ingestion for stream migrations: the taxonomy loader (composed
//! streams and their weighted children), the primitive-source loader, and
//! the normalizer that collapses taxonomy rows into one entry per parent.

mod error;
pub mod normalize;
pub mod primitive;
mod reader;
pub mod taxonomy;

pub use error::{TaxonomyError, TaxonomyErrorExt};
pub use normalize::normalize;
pub use primitive::load_primitive_sources;
pub use taxonomy::load_taxonomy;
