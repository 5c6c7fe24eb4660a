//! JSON-RPC client for a single ledger node endpoint.
//!
//! The client is a thin gateway: it builds the JSON-RPC 2.0 envelope,
//! posts it, and surfaces the node's answer. A non-null `error.message`
//! in the response becomes [`ClientError::Rpc`] with the server text
//! unmodified; nothing is retried or reinterpreted here — transport
//! resilience belongs to the caller.

use std::sync::atomic::{AtomicU64, Ordering};

use ledger_codec::{Pubkey, RuntimeTransaction, Transaction};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::ClientError;
use crate::types::{AccountInfo, ProcessedTransaction};

/// JSON-RPC client for one configured node endpoint.
#[derive(Debug)]
pub struct RpcClient {
    http: reqwest::Client,
    endpoint: Url,
    // Correlation ids are owned by the client instance, not a module
    // global.
    next_id: AtomicU64,
}

#[derive(Serialize)]
struct RpcRequest<'a, P: Serialize> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    params: Option<P>,
}

#[derive(Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Value,
    error: Option<RpcErrorObject>,
}

#[derive(Deserialize)]
struct RpcErrorObject {
    message: String,
}

impl RpcClient {
    /// Create a client for the given endpoint URL.
    pub fn new(endpoint: &str) -> Result<Self, ClientError> {
        Ok(Self {
            http: reqwest::Client::new(),
            endpoint: Url::parse(endpoint)?,
            next_id: AtomicU64::new(1),
        })
    }

    /// The endpoint this client posts to.
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    // -- node queries --------------------------------------------------------

    /// Whether the node reports itself ready to accept transactions.
    pub async fn is_node_ready(&self) -> Result<bool, ClientError> {
        self.call("is_node_ready", None::<()>).await
    }

    /// The node-derived address string for an account pubkey.
    pub async fn get_account_address(&self, pubkey: &Pubkey) -> Result<String, ClientError> {
        self.call("get_account_address", Some(pubkey)).await
    }

    /// Current state of an account.
    pub async fn read_account_info(&self, pubkey: &Pubkey) -> Result<AccountInfo, ClientError> {
        self.call("read_account_info", Some(pubkey)).await
    }

    /// Height of the chain tip.
    pub async fn get_block_count(&self) -> Result<u64, ClientError> {
        self.call("get_block_count", None::<()>).await
    }

    /// Hash of the block at the given height.
    pub async fn get_block_hash(&self, height: u64) -> Result<String, ClientError> {
        self.call("get_block_hash", Some(height)).await
    }

    /// Full block contents. The shape is node-defined; it is passed
    /// through as raw JSON.
    pub async fn get_block(&self, hash: &str) -> Result<Value, ClientError> {
        self.call_raw("get_block", Some(hash)).await
    }

    /// Ask the node cluster to start its distributed key generation round.
    pub async fn start_dkg(&self) -> Result<(), ClientError> {
        self.call_raw("start_dkg", None::<()>).await.map(|_| ())
    }

    // -- transaction submission ----------------------------------------------

    /// Submit one signed transaction. Returns the node-assigned
    /// transaction id.
    pub async fn send_transaction(&self, transaction: &Transaction) -> Result<String, ClientError> {
        self.call("send_transaction", Some(transaction.to_wire()))
            .await
    }

    /// Submit a batch of signed transactions in one round-trip.
    ///
    /// The returned ids correspond to the input transactions positionally.
    /// Any ordering guarantee among them is a server-side property.
    pub async fn send_transactions(
        &self,
        transactions: &[Transaction],
    ) -> Result<Vec<String>, ClientError> {
        let wire: Vec<RuntimeTransaction> =
            transactions.iter().map(Transaction::to_wire).collect();
        self.call("send_transactions", Some(wire)).await
    }

    /// Fetch a submitted transaction together with its processing status.
    pub async fn get_processed_transaction(
        &self,
        txid: &str,
    ) -> Result<ProcessedTransaction, ClientError> {
        self.call("get_processed_transaction", Some(txid)).await
    }

    // -- plumbing ------------------------------------------------------------

    async fn call<P: Serialize, T: DeserializeOwned>(
        &self,
        method: &str,
        params: Option<P>,
    ) -> Result<T, ClientError> {
        let value = self.call_raw(method, params).await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn call_raw<P: Serialize>(
        &self,
        method: &str,
        params: Option<P>,
    ) -> Result<Value, ClientError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        debug!(method, id, "posting rpc request");

        let request = RpcRequest {
            jsonrpc: "2.0",
            id,
            method,
            params,
        };
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await?
            .error_for_status()?;
        let body: RpcResponse = response.json().await?;

        if let Some(error) = body.error {
            debug!(method, id, message = %error.message, "node returned error");
            return Err(ClientError::Rpc(error.message));
        }
        Ok(body.result)
    }
}
