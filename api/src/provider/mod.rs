//! Ethereum JSON-RPC client for the hosted provider.
//!
//! Each method is one remote call: no retries, no caching, no validation
//! beyond decoding the response.

pub mod config;

use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

use dioxus_logger::tracing;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Serialize;
use serde_json::json;
use serde_json::Value;
use tokio::sync::OnceCell;

pub use config::ProviderConfig;

use crate::error::ProviderError;
use crate::quantity::Quantity;
use crate::types::BlockSummary;
use crate::types::BlockWithTransactions;
use crate::types::TransactionReceipt;

#[derive(Debug, Serialize)]
struct JsonRpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: Value,
}

#[derive(Debug, Deserialize)]
struct JsonRpcResponse<T> {
    result: Option<T>,
    error: Option<JsonRpcError>,
}

#[derive(Debug, Deserialize)]
struct JsonRpcError {
    code: i64,
    message: String,
}

/// Encodes a block number the way `eth_getBlockByNumber` expects it.
pub fn block_tag(number: u64) -> String {
    format!("{:#x}", number)
}

/// A JSON-RPC client bound to one provider endpoint.
#[derive(Debug)]
pub struct ProviderClient {
    http: Client,
    config: ProviderConfig,
    request_id: AtomicU64,
}

impl ProviderClient {
    pub fn new(config: ProviderConfig) -> Result<Self, ProviderError> {
        let http = Client::builder().build()?;
        Ok(Self {
            http,
            config,
            request_id: AtomicU64::new(1),
        })
    }

    fn next_request_id(&self) -> u64 {
        self.request_id.fetch_add(1, Ordering::Relaxed)
    }

    /// Sends one request. `Ok(None)` means the provider returned `null`.
    async fn call<T: DeserializeOwned>(
        &self,
        method: &'static str,
        params: Value,
    ) -> Result<Option<T>, ProviderError> {
        let request = JsonRpcRequest {
            jsonrpc: "2.0",
            id: self.next_request_id(),
            method,
            params,
        };
        tracing::debug!("rpc {} {}", method, request.params);

        let response = self
            .http
            .post(self.config.endpoint())
            .json(&request)
            .send()
            .await
            .inspect_err(|e| tracing::warn!("rpc {} transport error: {}", method, e))?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!("rpc {} HTTP {}", method, status);
            // Rate limits and auth failures still carry a JSON-RPC error body.
            let parsed: Result<JsonRpcResponse<Value>, _> = serde_json::from_str(&body);
            if let Ok(JsonRpcResponse {
                error: Some(error), ..
            }) = parsed
            {
                return Err(ProviderError::Rpc {
                    code: error.code,
                    message: error.message,
                });
            }
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let rpc_response: JsonRpcResponse<T> = serde_json::from_str(&body)?;
        if let Some(error) = rpc_response.error {
            tracing::warn!("rpc {} error {}: {}", method, error.code, error.message);
            return Err(ProviderError::Rpc {
                code: error.code,
                message: error.message,
            });
        }
        Ok(rpc_response.result)
    }

    /// `eth_blockNumber`.
    pub async fn block_number(&self) -> Result<u64, ProviderError> {
        let quantity: Quantity = self
            .call("eth_blockNumber", json!([]))
            .await?
            .ok_or(ProviderError::MissingResult("eth_blockNumber"))?;
        quantity
            .as_u64()
            .ok_or_else(|| ProviderError::InvalidBlockNumber(quantity.to_string()))
    }

    /// `eth_getBlockByNumber` with transaction hashes only.
    pub async fn block_summary(&self, number: u64) -> Result<Option<BlockSummary>, ProviderError> {
        self.call("eth_getBlockByNumber", json!([block_tag(number), false]))
            .await
    }

    /// `eth_getBlockByNumber` with full transaction objects.
    pub async fn block_with_transactions(
        &self,
        number: u64,
    ) -> Result<Option<BlockWithTransactions>, ProviderError> {
        self.call("eth_getBlockByNumber", json!([block_tag(number), true]))
            .await
    }

    /// `eth_getTransactionReceipt`.
    pub async fn transaction_receipt(
        &self,
        hash: &str,
    ) -> Result<Option<TransactionReceipt>, ProviderError> {
        self.call("eth_getTransactionReceipt", json!([hash])).await
    }
}

/// The process-wide client, built from the environment on first use.
///
/// A configuration error is not cached, so every call reports it again.
pub async fn shared_client() -> Result<&'static ProviderClient, ProviderError> {
    static CLIENT: OnceCell<ProviderClient> = OnceCell::const_new();

    CLIENT
        .get_or_try_init(|| async {
            let config = ProviderConfig::from_env()?;
            tracing::info!("using provider for {}", config.network());
            ProviderClient::new(config)
        })
        .await
}
