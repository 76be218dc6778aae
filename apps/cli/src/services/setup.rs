use anyhow::Context;
use sgrate_client::{RpcClient, StreamSchema, read_schema};
use sgrate_signer::Signer;
use std::path::Path;

/// Builds the signed RPC client and loads the schema template shared by the
/// migration subcommands.
///
/// # Errors
/// Returns an error if the key is malformed, the node is unreachable, or the
/// template file cannot be read.
pub async fn connect(
    private_key: &str,
    rpc: &str,
    schema: &Path,
) -> anyhow::Result<(RpcClient, StreamSchema)> {
    let signer = Signer::from_hex(private_key).context("Failed to parse the private key")?;
    let client = RpcClient::builder()
        .url(rpc)
        .signer(signer)
        .init()
        .await
        .context("Failed to connect to the stream network")?;
    let template = read_schema(schema)
        .with_context(|| format!("Failed to read the schema template '{}'", schema.display()))?;

    Ok((client, template))
}
