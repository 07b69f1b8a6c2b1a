//! Defines the Ethereum networks the provider can be pointed at.

use serde::Deserialize;
use serde::Serialize;

/// An Ethereum network served by the hosted provider.
///
/// The string form is the provider's subdomain, e.g. `eth-mainnet`.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Default,
    strum::EnumIs,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::Display,
)]
#[strum(ascii_case_insensitive, serialize_all = "kebab-case")]
pub enum Network {
    #[default]
    EthMainnet,
    EthSepolia,
    EthHolesky,
}

impl Network {
    /// Human-readable name for the page footer.
    pub fn label(&self) -> &'static str {
        match self {
            Self::EthMainnet => "Ethereum Mainnet",
            Self::EthSepolia => "Sepolia Testnet",
            Self::EthHolesky => "Holesky Testnet",
        }
    }

    /// The provider subdomain, e.g. `eth-mainnet`.
    pub fn slug(&self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parses_provider_slugs() {
        assert_eq!(Network::from_str("eth-mainnet").unwrap(), Network::EthMainnet);
        assert_eq!(Network::from_str("ETH-SEPOLIA").unwrap(), Network::EthSepolia);
        assert!(Network::from_str("polygon-mainnet").is_err());
    }

    #[test]
    fn slug_round_trips() {
        for network in <Network as strum::IntoEnumIterator>::iter() {
            assert_eq!(Network::from_str(network.slug()).unwrap(), network);
        }
    }
}
