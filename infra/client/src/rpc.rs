//! JSON-RPC 2.0 wire types.
//!
//! Mutating calls travel inside a [`SignedEnvelope`]: the signature covers
//! the method name concatenated with the canonical JSON of the parameters,
//! so a payload cannot be replayed under a different method.

use crate::error::{ClientError, ClientErrorExt};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use sgrate_signer::Signer;

pub(crate) const JSONRPC_VERSION: &str = "2.0";

#[derive(Debug, Serialize)]
pub(crate) struct RpcRequest<P: Serialize> {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'static str,
    pub params: P,
}

impl<P: Serialize> RpcRequest<P> {
    pub(crate) fn new(id: u64, method: &'static str, params: P) -> Self {
        Self { jsonrpc: JSONRPC_VERSION, id, method, params }
    }
}

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
pub(crate) struct RpcResponse<T> {
    #[serde(default)]
    pub result: Option<T>,
    #[serde(default)]
    pub error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RpcErrorObject {
    pub code: i64,
    pub message: String,
}

impl<T: DeserializeOwned> RpcResponse<T> {
    /// Collapses the result/error pair into a `Result`.
    pub(crate) fn into_result(self, method: &'static str) -> Result<T, ClientError> {
        if let Some(err) = self.error {
            return Err(ClientError::Rpc {
                message: format!("{} (code {})", err.message, err.code).into(),
                context: Some(method.into()),
            });
        }
        self.result.ok_or_else(|| ClientError::Internal {
            message: "response carried neither result nor error".into(),
            context: Some(method.into()),
        })
    }
}

/// Parameters wrapped with the caller's identity and a detached signature.
#[derive(Debug, Serialize)]
pub(crate) struct SignedEnvelope<P: Serialize> {
    pub params: P,
    pub identity: String,
    pub signature: String,
}

impl<P: Serialize> SignedEnvelope<P> {
    pub(crate) fn seal(
        method: &'static str,
        params: P,
        signer: &Signer,
    ) -> Result<Self, ClientError> {
        let canonical =
            serde_json::to_vec(&params).context("Serializing signed request params")?;
        let mut message = Vec::with_capacity(method.len() + 1 + canonical.len());
        message.extend_from_slice(method.as_bytes());
        message.push(b':');
        message.extend_from_slice(&canonical);

        Ok(Self {
            params,
            identity: signer.identity().to_owned(),
            signature: hex::encode(signer.sign(&message)),
        })
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ListParams<'a> {
    pub owner: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct DropParams<'a> {
    pub stream_id: &'a str,
    pub sync: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct DeployParams<'a> {
    pub schema: &'a crate::schema::StreamSchema,
    pub sync: bool,
}
