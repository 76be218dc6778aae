//! Migration-set resolution.
//!
//! Reconciles three sets before anything touches the network: the stream
//! ids present in the source data, the subset the operator asked for, and
//! the streams actually deployed remotely.
//!
//! Resolution is two-phase so callers can fail on a bad operator subset
//! before issuing any remote call: [`select_targets`] validates the subset
//! against the source data, and [`PendingSet::confirm_deployed`] checks the
//! survivors against the remote listing. [`resolve`] composes both for
//! callers that already hold the listing.

use crate::error::MigrationError;
use crate::target::{MigrationSet, MigrationTarget};
use sgrate_domain::StreamInfo;
use std::collections::HashSet;
use tracing::debug;

/// Targets that passed the source-side check but are not yet confirmed
/// against the remote deployed listing.
#[derive(Debug)]
pub struct PendingSet<T> {
    targets: Vec<T>,
    requested: Vec<String>,
}

/// Validates the operator subset against the source data and selects the
/// working set (steps 1–2 of resolution).
///
/// An empty `requested` slice means "all streams in the source data".
///
/// # Errors
/// [`MigrationError::NotFoundInSource`] naming the first requested id (in
/// `requested` order) absent from the source data.
pub fn select_targets<T: MigrationTarget>(
    targets: Vec<T>,
    requested: &[String],
) -> Result<PendingSet<T>, MigrationError> {
    let source_ids: HashSet<&str> = targets.iter().map(MigrationTarget::stream_id).collect();

    if let Some(missing) = requested.iter().find(|id| !source_ids.contains(id.as_str())) {
        return Err(MigrationError::NotFoundInSource { stream_id: missing.clone() });
    }

    Ok(PendingSet { targets, requested: requested.to_vec() })
}

impl<T: MigrationTarget> PendingSet<T> {
    /// Stream ids the run intends to migrate, in the order the deployed
    /// check will report a miss: requested order when a subset was given,
    /// otherwise the targets' own order.
    fn check_order(&self) -> Vec<&str> {
        if self.requested.is_empty() {
            self.targets.iter().map(MigrationTarget::stream_id).collect()
        } else {
            self.requested.iter().map(String::as_str).collect()
        }
    }

    /// Confirms every targeted stream against the remote listing and
    /// produces the final migration set (steps 3–4 of resolution).
    ///
    /// Surviving targets keep their original order and, for composed
    /// entries, their full child lists.
    ///
    /// # Errors
    /// [`MigrationError::NotDeployed`] naming the first targeted id absent
    /// from the deployed listing.
    pub fn confirm_deployed(
        self,
        deployed: &[StreamInfo],
    ) -> Result<MigrationSet<T>, MigrationError> {
        let deployed_names: HashSet<&str> = deployed.iter().map(|s| s.name.as_str()).collect();

        if let Some(missing) =
            self.check_order().iter().find(|id| !deployed_names.contains(*id))
        {
            return Err(MigrationError::NotDeployed { stream_id: (*missing).to_owned() });
        }

        let working: HashSet<&str> = if self.requested.is_empty() {
            self.targets.iter().map(MigrationTarget::stream_id).collect()
        } else {
            self.requested.iter().map(String::as_str).collect()
        };
        let keep: Vec<bool> =
            self.targets.iter().map(|t| working.contains(t.stream_id())).collect();

        let mut keep_flags = keep.into_iter();
        let resolved: Vec<T> =
            self.targets.into_iter().filter(|_| keep_flags.next().unwrap_or(false)).collect();
        debug!(count = resolved.len(), "Resolved migration set");

        Ok(MigrationSet::new(resolved))
    }
}

/// One-shot resolution for callers that already hold the deployed listing.
///
/// # Errors
/// Propagates the errors of [`select_targets`] and
/// [`PendingSet::confirm_deployed`].
pub fn resolve<T: MigrationTarget>(
    targets: Vec<T>,
    requested: &[String],
    deployed: &[StreamInfo],
) -> Result<MigrationSet<T>, MigrationError> {
    select_targets(targets, requested)?.confirm_deployed(deployed)
}
