//! # Stream Migration
//!
//! The core of the toolkit: resolving which streams a run will act upon and
//! driving the drop/redeploy sequence against the remote network.
//!
//! Composed and primitive migrations share this pipeline; the
//! [`MigrationTarget`] trait abstracts over the child/weight dimension.

mod error;
pub mod execute;
pub mod resolve;
mod target;

pub use error::{MigrationError, MigrationErrorExt};
pub use execute::{MigratedStream, MigrationReport, MigrationRunner};
pub use resolve::{resolve, select_targets, PendingSet};
pub use target::{MigrationSet, MigrationTarget};
