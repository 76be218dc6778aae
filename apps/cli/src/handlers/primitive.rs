use crate::services::setup;
use anyhow::Context;
use sgrate_client::StreamClient;
use sgrate_migration::{MigrationRunner, select_targets};
use sgrate_taxonomy::load_primitive_sources;
use std::path::Path;
use tracing::info;

/// Drops and redeploys the primitive streams listed in a source CSV file.
///
/// The source file and the operator subset are validated before anything
/// touches the network.
///
/// # Errors
/// Returns an error on a malformed source file, an unknown requested stream,
/// or a failed remote call. A remote failure aborts the run at the stream
/// that caused it.
pub async fn migrate_primitive(
    private_key: &str,
    rpc: &str,
    primitive_file: &Path,
    schema: &Path,
    schemas: &[String],
) -> anyhow::Result<()> {
    let records = load_primitive_sources(primitive_file).with_context(|| {
        format!("Failed to load primitive sources from '{}'", primitive_file.display())
    })?;
    let pending = select_targets(records, schemas)?;

    let (client, template) = setup::connect(private_key, rpc, schema).await?;
    let deployed = client.list_streams(client.identity()).await?;
    let set = pending.confirm_deployed(&deployed)?;

    println!("🚀 Migrating {} primitive stream(s)...", set.len());
    let report = MigrationRunner::new(client, template).run(&set).await?;

    for stream in &report.migrated {
        info!(stream_id = %stream.stream_id, drop_tx = %stream.drop_tx, deploy_tx = %stream.deploy_tx, "Stream migrated");
    }
    println!("✅ Migrated {} stream(s)", report.migrated.len());

    Ok(())
}
