//! Resolves the provider endpoint from the environment.

use std::env;
use std::fmt;

use crate::error::ProviderError;
use crate::network::Network;
use crate::view_config::network_from_env;

/// Where JSON-RPC requests are sent.
///
/// The endpoint usually embeds the API key, so `Debug` never prints it.
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    endpoint: String,
    network: Network,
}

impl ProviderConfig {
    /// An explicit JSON-RPC endpoint.
    pub fn new(endpoint: impl Into<String>, network: Network) -> Self {
        Self {
            endpoint: endpoint.into(),
            network,
        }
    }

    /// The hosted provider's URL for `network`.
    pub fn alchemy(network: Network, api_key: &str) -> Self {
        Self::new(
            format!("https://{}.g.alchemy.com/v2/{}", network.slug(), api_key),
            network,
        )
    }

    /// Reads the configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `ETH_RPC_URL`: explicit endpoint. Takes precedence over the key.
    /// - `ALCHEMY_API_KEY`: key for the hosted provider.
    /// - `ALCHEMY_NETWORK`: see [`Network`]. Defaults to mainnet.
    pub fn from_env() -> Result<Self, ProviderError> {
        Self::from_vars(
            env::var("ETH_RPC_URL").ok(),
            env::var("ALCHEMY_API_KEY").ok(),
            network_from_env(),
        )
    }

    pub fn from_vars(
        rpc_url: Option<String>,
        api_key: Option<String>,
        network: Network,
    ) -> Result<Self, ProviderError> {
        let non_empty = |v: Option<String>| v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());

        if let Some(url) = non_empty(rpc_url) {
            return Ok(Self::new(url, network));
        }
        match non_empty(api_key) {
            Some(key) => Ok(Self::alchemy(network, &key)),
            None => Err(ProviderError::Config(
                "set ALCHEMY_API_KEY or ETH_RPC_URL".to_string(),
            )),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn network(&self) -> Network {
        self.network
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("network", &self.network)
            .finish_non_exhaustive()
    }
}
