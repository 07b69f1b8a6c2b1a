//! Errors produced while talking to the Ethereum provider.

use thiserror::Error;

/// Any failure of a provider call.
///
/// The view does not tell these apart; it only shows the message.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The provider endpoint could not be determined from the environment.
    #[error("provider not configured: {0}")]
    Config(String),

    /// The request never produced an HTTP response.
    #[error("provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered with a non-success HTTP status.
    #[error("provider returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The provider answered with a JSON-RPC error object.
    #[error("{message}")]
    Rpc { code: i64, message: String },

    /// The response body was not the expected JSON.
    #[error("invalid provider response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The provider returned `null` where a value is required.
    #[error("provider returned no result for {0}")]
    MissingResult(&'static str),

    /// A block number that does not fit the expected integer range.
    #[error("unexpected block number from provider: {0}")]
    InvalidBlockNumber(String),
}
