//! Migration targets.
//!
//! Composed and primitive migrations share one pipeline; this trait is the
//! seam that lets the resolver and runner work on either without caring
//! about the child/weight dimension.

use sgrate_domain::{Child, NormalizedEntry, PrimitiveSourceRecord};

/// Anything the pipeline can migrate: it has a stream id, and possibly
/// weighted children.
pub trait MigrationTarget {
    /// The stream this target migrates.
    fn stream_id(&self) -> &str;

    /// Weighted children to re-establish after redeploy. Empty for
    /// primitive streams.
    fn children(&self) -> &[Child] {
        &[]
    }
}

impl MigrationTarget for NormalizedEntry {
    fn stream_id(&self) -> &str {
        &self.stream_id
    }

    fn children(&self) -> &[Child] {
        &self.children
    }
}

impl MigrationTarget for PrimitiveSourceRecord {
    fn stream_id(&self) -> &str {
        &self.stream_id
    }
}

/// The resolved, ordered collection of targets a run will act upon.
///
/// Computed once per run by [`resolve`](crate::resolve::resolve); order is
/// the surviving targets' original input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationSet<T> {
    targets: Vec<T>,
}

impl<T: MigrationTarget> MigrationSet<T> {
    pub(crate) fn new(targets: Vec<T>) -> Self {
        Self { targets }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.targets.iter()
    }

    /// Stream ids in migration order.
    #[must_use]
    pub fn stream_ids(&self) -> Vec<&str> {
        self.targets.iter().map(MigrationTarget::stream_id).collect()
    }
}

impl<'a, T: MigrationTarget> IntoIterator for &'a MigrationSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.targets.iter()
    }
}
