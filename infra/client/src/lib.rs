//! # Stream Network Client
//!
//! This crate provides a unified interface for talking to a stream network
//! node over JSON-RPC.
//!
//! ## Key Features
//! - **Trait Seam**: The [`StreamClient`] trait keeps callers testable with
//!   in-memory fakes.
//! - **Signed Requests**: Mutating calls carry the signer's identity and a
//!   detached signature over the payload.
//! - **Builder Pattern**: Fluent API for configuring the endpoint and signer.
//!
//! ## Example
//!
//! ```rust,no_run
//! use sgrate_client::{RpcClient, ClientError};
//! use sgrate_signer::Signer;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let signer = Signer::from_hex(&"7f".repeat(32))?;
//! let client = RpcClient::builder()
//!     .url("http://localhost:8484/rpc")
//!     .signer(signer)
//!     .init()
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod error;
mod rpc;
pub mod schema;

pub use error::{ClientError, ClientErrorExt};
pub use schema::{StreamSchema, read_schema};

use crate::rpc::{DeployParams, DropParams, ListParams, RpcRequest, RpcResponse, SignedEnvelope};
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use sgrate_domain::StreamInfo;
use sgrate_signer::Signer;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{info, instrument, trace};
use url::Url;

/// Acknowledgement returned by broadcast calls (drop/deploy).
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct BroadcastAck {
    pub tx_hash: String,
}

/// Remote operations the migration pipeline depends on.
///
/// Calls resolve only once the node has confirmed the request; when `sync`
/// is set, broadcast calls additionally wait for the transaction to be
/// included before returning their ack.
#[async_trait]
pub trait StreamClient: Send + Sync {
    /// Lists the streams deployed by `owner` (a hex-encoded identity).
    async fn list_streams(&self, owner: &str) -> Result<Vec<StreamInfo>, ClientError>;

    /// Drops a deployed stream by id.
    async fn drop_stream(&self, stream_id: &str, sync: bool) -> Result<BroadcastAck, ClientError>;

    /// Deploys a stream under the schema's name.
    async fn deploy_stream(
        &self,
        schema: &StreamSchema,
        sync: bool,
    ) -> Result<BroadcastAck, ClientError>;
}

#[derive(Debug)]
struct RpcClientInner {
    http: reqwest::Client,
    url: Url,
    signer: Signer,
    next_id: AtomicU64,
}

/// JSON-RPC client wrapper that provides thread-safe sharing and contextual
/// error handling.
#[derive(Debug, Clone)]
pub struct RpcClient {
    inner: Arc<RpcClientInner>,
}

impl RpcClient {
    /// Creates a new [`RpcClientBuilder`].
    pub fn builder() -> RpcClientBuilder {
        RpcClientBuilder::new()
    }

    /// The identity this client signs requests with.
    #[must_use]
    pub fn identity(&self) -> &str {
        self.inner.signer.identity()
    }

    async fn call<P, T>(&self, method: &'static str, params: P) -> Result<T, ClientError>
    where
        P: Serialize + Send + Sync,
        T: DeserializeOwned,
    {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        let request = RpcRequest::new(id, method, params);
        trace!(method, id, "Dispatching RPC request");

        let response = self
            .inner
            .http
            .post(self.inner.url.clone())
            .json(&request)
            .send()
            .await
            .context(method)?
            .error_for_status()
            .context(method)?;

        let parsed: RpcResponse<T> = response.json().await.context(method)?;
        parsed.into_result(method)
    }

    async fn call_signed<P, T>(&self, method: &'static str, params: P) -> Result<T, ClientError>
    where
        P: Serialize + Send + Sync,
        T: DeserializeOwned,
    {
        let envelope = SignedEnvelope::seal(method, params, &self.inner.signer)?;
        self.call(method, envelope).await
    }
}

#[async_trait]
impl StreamClient for RpcClient {
    #[instrument(skip(self))]
    async fn list_streams(&self, owner: &str) -> Result<Vec<StreamInfo>, ClientError> {
        let streams: Vec<StreamInfo> = self.call("stream.list", ListParams { owner }).await?;
        trace!(count = streams.len(), "Listed deployed streams");
        Ok(streams)
    }

    #[instrument(skip(self))]
    async fn drop_stream(&self, stream_id: &str, sync: bool) -> Result<BroadcastAck, ClientError> {
        let ack: BroadcastAck =
            self.call_signed("stream.drop", DropParams { stream_id, sync }).await?;
        info!(stream_id, tx_hash = %ack.tx_hash, "Stream dropped");
        Ok(ack)
    }

    #[instrument(skip(self, schema), fields(stream_id = %schema.name))]
    async fn deploy_stream(
        &self,
        schema: &StreamSchema,
        sync: bool,
    ) -> Result<BroadcastAck, ClientError> {
        let ack: BroadcastAck =
            self.call_signed("stream.deploy", DeployParams { schema, sync }).await?;
        info!(stream_id = %schema.name, tx_hash = %ack.tx_hash, "Stream deployed");
        Ok(ack)
    }
}

/// A fluent builder for configuring and establishing a node connection.
///
/// This builder ensures that the endpoint URL and the signing identity are
/// provided upfront.
#[must_use = "builders do nothing unless you call .init()"]
#[derive(Debug, Default)]
pub struct RpcClientBuilder {
    url: Option<String>,
    signer: Option<Signer>,
}

impl RpcClientBuilder {
    /// Creates a new [`RpcClientBuilder`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the node endpoint URL.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the signing identity used for all requests.
    pub fn signer(mut self, signer: Signer) -> Self {
        self.signer = Some(signer);
        self
    }

    /// Consumes the builder and attempts to establish a connection to the node.
    ///
    /// # Process
    /// 1. **Validation**: Ensures URL and signer are provided and the URL parses.
    /// 2. **Health Check**: Issues a single `net.health` call. Migration runs
    ///    are fail-fast, so an unreachable node is reported here rather than
    ///    midway through a batch; there is no retry.
    ///
    /// # Errors
    /// * [`ClientError::Validation`] if required parameters are missing or the URL is invalid.
    /// * [`ClientError::Connection`] if the node does not answer the health check.
    #[instrument(skip(self), fields(url = ?self.url))]
    pub async fn init(self) -> Result<RpcClient, ClientError> {
        let url = self.url.ok_or(ClientError::Validation {
            message: "URL is required".into(),
            context: None,
        })?;
        let signer = self.signer.ok_or(ClientError::Validation {
            message: "Signer is required".into(),
            context: None,
        })?;

        let url = Url::parse(&url).map_err(|e| ClientError::Validation {
            message: e.to_string().into(),
            context: Some(url.into()),
        })?;

        let http = reqwest::Client::builder().build().map_err(|e| ClientError::Connection {
            message: e.to_string().into(),
            context: Some("Building HTTP client".into()),
        })?;

        let client = RpcClient {
            inner: Arc::new(RpcClientInner {
                http,
                url,
                signer,
                next_id: AtomicU64::new(1),
            }),
        };

        let health: serde_json::Value =
            client.call("net.health", serde_json::json!({})).await.map_err(|e| {
                ClientError::Connection {
                    message: e.to_string().into(),
                    context: Some("Node health check".into()),
                }
            })?;
        info!(identity = %client.identity(), %health, "Stream network connection established");

        Ok(client)
    }
}
