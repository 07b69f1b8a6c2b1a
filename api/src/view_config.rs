//! Settings the browser needs before it can render the page.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;

use crate::network::Network;

/// Interval between automatic refreshes when `POLL_INTERVAL_SECS` is unset.
/// Roughly one Ethereum slot.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 12;

/// Client-facing settings. Carries nothing secret.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ViewConfig {
    network: Network,
    /// `0` disables automatic refresh.
    poll_interval_secs: u64,
}

impl ViewConfig {
    pub fn new(network: Network, poll_interval_secs: u64) -> Self {
        Self {
            network,
            poll_interval_secs,
        }
    }

    /// Reads the settings from environment variables, with in-code defaults.
    ///
    /// # Environment Variables
    /// - `ALCHEMY_NETWORK`: `eth-mainnet`, `eth-sepolia` or `eth-holesky`.
    /// - `POLL_INTERVAL_SECS`: seconds between refreshes, `0` to disable.
    pub fn from_env() -> Self {
        let network = network_from_env();

        let poll_interval_secs = env::var("POLL_INTERVAL_SECS")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_POLL_INTERVAL_SECS);

        Self {
            network,
            poll_interval_secs,
        }
    }

    pub fn network(&self) -> Network {
        self.network
    }

    /// `None` when automatic refresh is disabled.
    pub fn poll_interval(&self) -> Option<Duration> {
        match self.poll_interval_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self::new(Network::default(), DEFAULT_POLL_INTERVAL_SECS)
    }
}

/// Reads `ALCHEMY_NETWORK`, falling back to mainnet on absent or unknown values.
pub fn network_from_env() -> Network {
    env::var("ALCHEMY_NETWORK")
        .ok()
        .and_then(|s| Network::from_str(s.trim()).ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_interval_disables_polling() {
        assert_eq!(ViewConfig::new(Network::EthMainnet, 0).poll_interval(), None);
        assert_eq!(
            ViewConfig::default().poll_interval(),
            Some(Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS))
        );
    }
}
