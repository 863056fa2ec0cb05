//! Bitcoin network definitions and constants.

/// Bitcoin network type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Network {
    /// Bitcoin mainnet
    #[default]
    Mainnet,
    /// Bitcoin testnet
    Testnet,
    /// Local regression-test network
    Regtest,
}

/// Human-readable prefix -> network.
const HRP_TABLE: [(&str, Network); 3] = [
    ("bc", Network::Mainnet),
    ("tb", Network::Testnet),
    ("bcrt", Network::Regtest),
];

impl Network {
    /// All networks, in declaration order.
    pub const ALL: [Network; 3] = [Network::Mainnet, Network::Testnet, Network::Regtest];

    /// Get the Bech32 human-readable part for this network.
    pub fn bech32_hrp(&self) -> &'static str {
        match self {
            Network::Mainnet => "bc",
            Network::Testnet => "tb",
            Network::Regtest => "bcrt",
        }
    }

    /// Look up the network for a decoded human-readable part.
    pub fn from_hrp(hrp: &str) -> Option<Self> {
        HRP_TABLE
            .iter()
            .find(|(prefix, _)| *prefix == hrp)
            .map(|&(_, network)| network)
    }

    /// Get the version byte for P2PKH addresses.
    ///
    /// Regtest shares testnet's version bytes.
    pub fn p2pkh_version(&self) -> u8 {
        match self {
            Network::Mainnet => 0x00,
            Network::Testnet | Network::Regtest => 0x6f,
        }
    }

    /// Get the version byte for P2SH addresses.
    pub fn p2sh_version(&self) -> u8 {
        match self {
            Network::Mainnet => 0x05,
            Network::Testnet | Network::Regtest => 0xc4,
        }
    }

    /// Parse network from a user-facing name.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" | "main" | "bitcoin" => Some(Network::Mainnet),
            "testnet" | "test" => Some(Network::Testnet),
            "regtest" => Some(Network::Regtest),
            _ => None,
        }
    }

    /// Get network name as string.
    pub fn name(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Regtest => "regtest",
        }
    }
}

impl core::fmt::Display for Network {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hrp_table() {
        for network in Network::ALL {
            assert_eq!(Network::from_hrp(network.bech32_hrp()), Some(network));
        }
        assert_eq!(Network::from_hrp("BC"), None);
        assert_eq!(Network::from_hrp("ltc"), None);
        assert_eq!(Network::from_hrp(""), None);
    }

    #[test]
    fn test_network_from_name() {
        assert_eq!(Network::from_name("mainnet"), Some(Network::Mainnet));
        assert_eq!(Network::from_name("MAINNET"), Some(Network::Mainnet));
        assert_eq!(Network::from_name("testnet"), Some(Network::Testnet));
        assert_eq!(Network::from_name("Regtest"), Some(Network::Regtest));
        assert_eq!(Network::from_name("invalid"), None);
    }

    #[test]
    fn test_version_bytes() {
        assert_eq!(Network::Mainnet.p2pkh_version(), 0x00);
        assert_eq!(Network::Mainnet.p2sh_version(), 0x05);
        assert_eq!(Network::Regtest.p2pkh_version(), Network::Testnet.p2pkh_version());
        assert_eq!(Network::Regtest.p2sh_version(), 0xc4);
    }

    #[test]
    fn test_default_and_display() {
        assert_eq!(Network::default(), Network::Mainnet);
        assert_eq!(alloc::format!("{}", Network::Regtest), "regtest");
    }
}
