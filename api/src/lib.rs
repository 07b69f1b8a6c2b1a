//! This crate contains the shared block types and all fullstack server functions.
//!
//! The server functions forward to the provider client, which only exists on
//! the server; the API key never reaches the browser.

pub mod error;
pub mod network;
#[cfg(not(target_arch = "wasm32"))]
pub mod provider;
pub mod quantity;
pub mod types;
pub mod view_config;

use dioxus::prelude::*;

pub use error::ProviderError;
pub use network::Network;
pub use quantity::Quantity;
pub use types::BlockSummary;
pub use types::BlockWithTransactions;
pub use types::TransactionReceipt;
pub use types::TransactionSummary;
pub use view_config::ViewConfig;

pub type ApiError = anyhow::Error;

/// Retrieves the settings the page needs before its first fetch.
#[post("/api/view_config")]
pub async fn view_config() -> Result<ViewConfig, ApiError> {
    Ok(ViewConfig::from_env())
}

/// The number of the most recent block.
#[post("/api/latest_block_number")]
pub async fn latest_block_number() -> Result<u64, ApiError> {
    let client = provider::shared_client().await?;
    Ok(client.block_number().await?)
}

/// Header-level data for a block, or `None` if the provider does not know it.
#[post("/api/block_summary")]
pub async fn block_summary(number: u64) -> Result<Option<BlockSummary>, ApiError> {
    let client = provider::shared_client().await?;
    Ok(client.block_summary(number).await?)
}

/// A block together with its full transaction list.
#[post("/api/block_with_transactions")]
pub async fn block_with_transactions(
    number: u64,
) -> Result<Option<BlockWithTransactions>, ApiError> {
    let client = provider::shared_client().await?;
    Ok(client.block_with_transactions(number).await?)
}

/// The receipt for a transaction, or `None` if it is unknown or still pending.
#[post("/api/transaction_receipt")]
pub async fn transaction_receipt(hash: String) -> Result<Option<TransactionReceipt>, ApiError> {
    let client = provider::shared_client().await?;
    Ok(client.transaction_receipt(&hash).await?)
}
