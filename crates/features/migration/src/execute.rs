//! Drop-and-redeploy execution.

use crate::error::{MigrationError, MigrationErrorExt};
use crate::target::{MigrationSet, MigrationTarget};
use sgrate_client::{StreamClient, StreamSchema};
use tracing::{debug, info};

/// Record of one fully migrated stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigratedStream {
    pub stream_id: String,
    pub drop_tx: String,
    pub deploy_tx: String,
}

/// Outcome of a completed run.
#[derive(Debug, Default)]
pub struct MigrationReport {
    pub migrated: Vec<MigratedStream>,
}

/// Executes a resolved migration set against the remote network.
///
/// Targets are processed strictly sequentially in the set's order: a
/// stream is dropped and redeployed to completion before the next one is
/// touched. Both calls wait for synchronous confirmation. Any failure
/// aborts the run immediately; streams already migrated in the same run
/// are not rolled back, so a partial run is re-driven manually by
/// narrowing the requested subset.
#[derive(Debug)]
pub struct MigrationRunner<C> {
    client: C,
    template: StreamSchema,
}

impl<C: StreamClient> MigrationRunner<C> {
    #[must_use]
    pub fn new(client: C, template: StreamSchema) -> Self {
        Self { client, template }
    }

    /// Runs the full migration set, fail-fast.
    ///
    /// # Errors
    /// Returns [`MigrationError::Client`] on the first drop or deploy
    /// failure; targets after the failing one are not attempted.
    pub async fn run<T: MigrationTarget>(
        &self,
        set: &MigrationSet<T>,
    ) -> Result<MigrationReport, MigrationError> {
        let mut report = MigrationReport::default();

        for target in set {
            report.migrated.push(self.migrate_one(target).await?);
        }

        info!(migrated = report.migrated.len(), "Migration run complete");
        Ok(report)
    }

    async fn migrate_one<T: MigrationTarget>(
        &self,
        target: &T,
    ) -> Result<MigratedStream, MigrationError> {
        let stream_id = target.stream_id();

        let drop_ack = self
            .client
            .drop_stream(stream_id, true)
            .await
            .context(format!("Dropping stream {stream_id}"))?;

        let schema = self.template.with_name(stream_id);
        let deploy_ack = self
            .client
            .deploy_stream(&schema, true)
            .await
            .context(format!("Deploying stream {stream_id}"))?;

        if !target.children().is_empty() {
            // TODO: push child weight relationships once the node exposes a
            // taxonomy write call; until then redeployed composed streams
            // start without their child links.
            debug!(stream_id, children = target.children().len(), "Child weights not uploaded");
        }

        info!(stream_id, "Stream migrated");
        Ok(MigratedStream {
            stream_id: stream_id.to_owned(),
            drop_tx: drop_ack.tx_hash,
            deploy_tx: deploy_ack.tx_hash,
        })
    }
}
