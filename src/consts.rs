/// Chain id written into every user-signed action (Arbitrum Sepolia, 421614).
pub const SIGNATURE_CHAIN_ID: &str = "0x66eee";

/// Chain id of the fixed domain used by phantom-agent (L1) signatures.
pub const L1_AGENT_CHAIN_ID: u64 = 1337;
pub const L1_DOMAIN_NAME: &str = "Exchange";
pub const USER_SIGNED_DOMAIN_NAME: &str = "HyperliquidSignTransaction";
pub const DOMAIN_VERSION: &str = "1";

pub const MAINNET_SOURCE: &str = "a";
pub const TESTNET_SOURCE: &str = "b";

/// Wire precision of prices, sizes and trigger prices.
pub const WIRE_DECIMALS: u32 = 8;
pub const USD_DECIMALS: u32 = 6;

/// Network an action is signed for. A local node signs like testnet.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum BaseUrl {
    Localhost,
    Testnet,
    #[default]
    Mainnet,
}

impl BaseUrl {
    pub fn is_mainnet(&self) -> bool {
        matches!(self, BaseUrl::Mainnet)
    }

    /// Value of the `hyperliquidChain` field in user-signed actions.
    pub fn hyperliquid_chain(&self) -> &'static str {
        if self.is_mainnet() {
            "Mainnet"
        } else {
            "Testnet"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_selection() {
        assert!(BaseUrl::default().is_mainnet());
        assert_eq!(BaseUrl::Mainnet.hyperliquid_chain(), "Mainnet");
        assert_eq!(BaseUrl::Testnet.hyperliquid_chain(), "Testnet");
        assert_eq!(BaseUrl::Localhost.hyperliquid_chain(), "Testnet");
        assert!(!BaseUrl::Localhost.is_mainnet());
    }
}
