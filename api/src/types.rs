//! Block and transaction types exchanged between the provider, the server
//! functions and the browser.
//!
//! Field names follow the Ethereum JSON-RPC spelling so the same types decode
//! the provider response and travel to the client unchanged.

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

use crate::quantity::Quantity;

/// Header-level view of a block, as returned by `eth_getBlockByNumber(n, false)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<Quantity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Quantity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub miner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proposer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_fee_per_gas: Option<Quantity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_used: Option<Quantity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_limit: Option<Quantity>,
    /// Transaction hashes, in block order.
    #[serde(default)]
    pub transactions: Vec<String>,
    /// Every other field of the provider's block object, kept for the raw view.
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl BlockSummary {
    /// The block's miner, or its proposer when no miner is reported.
    pub fn author(&self) -> Option<&str> {
        self.miner
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.proposer.as_deref().filter(|s| !s.is_empty()))
    }
}

/// A transaction as listed inside a block fetched with full transactions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionSummary {
    #[serde(default)]
    pub hash: Option<String>,
    #[serde(default)]
    pub from: Option<String>,
    /// `None` for contract creation.
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub nonce: Option<Quantity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Quantity>,
}

/// The part of `eth_getBlockByNumber(n, true)` the view uses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockWithTransactions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<Quantity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(default)]
    pub transactions: Vec<TransactionSummary>,
}

/// Result of `eth_getTransactionReceipt`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    #[serde(default)]
    pub transaction_hash: Option<String>,
    #[serde(default)]
    pub block_number: Option<Quantity>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub contract_address: Option<String>,
    #[serde(default)]
    pub gas_used: Option<Quantity>,
    #[serde(default)]
    pub effective_gas_price: Option<Quantity>,
    #[serde(default)]
    pub status: Option<Quantity>,
}

impl TransactionReceipt {
    /// `Some(true)` for status 1, `Some(false)` for status 0, `None` if unknown
    /// (pre-Byzantium receipts carry no status).
    pub fn succeeded(&self) -> Option<bool> {
        match self.status.as_ref()?.as_u64()? {
            0 => Some(false),
            1 => Some(true),
            _ => None,
        }
    }
}
