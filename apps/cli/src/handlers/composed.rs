use crate::services::setup;
use anyhow::Context;
use sgrate_client::StreamClient;
use sgrate_migration::{MigrationRunner, select_targets};
use sgrate_taxonomy::{load_taxonomy, normalize};
use std::path::Path;
use tracing::info;

/// Drops and redeploys the composed streams described by a taxonomy CSV file.
///
/// Taxonomy rows are normalized into one entry per parent stream before
/// resolution, so a parent appearing on many rows is migrated exactly once.
///
/// # Errors
/// Returns an error on a malformed taxonomy file, an unknown requested
/// stream, or a failed remote call. A remote failure aborts the run at the
/// stream that caused it.
pub async fn migrate_composed(
    private_key: &str,
    rpc: &str,
    taxonomy_file: &Path,
    schema: &Path,
    schemas: &[String],
) -> anyhow::Result<()> {
    let records = load_taxonomy(taxonomy_file).with_context(|| {
        format!("Failed to load the taxonomy from '{}'", taxonomy_file.display())
    })?;
    let entries = normalize(&records);
    let pending = select_targets(entries, schemas)?;

    let (client, template) = setup::connect(private_key, rpc, schema).await?;
    let deployed = client.list_streams(client.identity()).await?;
    let set = pending.confirm_deployed(&deployed)?;

    println!("🚀 Migrating {} composed stream(s)...", set.len());
    let report = MigrationRunner::new(client, template).run(&set).await?;

    for stream in &report.migrated {
        info!(stream_id = %stream.stream_id, drop_tx = %stream.drop_tx, deploy_tx = %stream.deploy_tx, "Stream migrated");
    }
    println!("✅ Migrated {} stream(s)", report.migrated.len());

    Ok(())
}
