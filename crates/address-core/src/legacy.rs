//! Base58Check decoding of legacy (P2PKH / P2SH) addresses.

use alloc::string::String;

use crate::address::AddressType;
use crate::error::AddressError;
use crate::hash::{self, CHECKSUM_LENGTH};
use crate::network::Network;

/// Decoded length of a legacy address: version + hash160 + checksum.
pub const DECODED_LENGTH: usize = 25;

/// Length of the hash carried by a legacy address.
pub const PAYLOAD_LENGTH: usize = 20;

/// Version byte -> (type, network).
const VERSION_TABLE: [(u8, AddressType, Network); 4] = [
    (0x00, AddressType::P2PKH, Network::Mainnet),
    (0x6f, AddressType::P2PKH, Network::Testnet),
    (0x05, AddressType::P2SH, Network::Mainnet),
    (0xc4, AddressType::P2SH, Network::Testnet),
];

/// A checksum-verified legacy address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyDecoded {
    pub version: u8,
    pub payload: [u8; PAYLOAD_LENGTH],
    pub checksum: [u8; CHECKSUM_LENGTH],
    pub address_type: AddressType,
    pub network: Network,
}

impl LegacyDecoded {
    /// Hex representation of the 20-byte hash.
    pub fn payload_hex(&self) -> String {
        hex::encode(self.payload)
    }
}

/// Map a version byte to its address type and network.
pub fn lookup_version(version: u8) -> Result<(AddressType, Network), AddressError> {
    VERSION_TABLE
        .iter()
        .find(|(v, _, _)| *v == version)
        .map(|&(_, address_type, network)| (address_type, network))
        .ok_or(AddressError::UnknownVersionByte(version))
}

/// Decode and verify a Base58Check address.
pub fn decode(address: &str) -> Result<LegacyDecoded, AddressError> {
    let decoded = bs58::decode(address)
        .into_vec()
        .map_err(AddressError::Base58)?;

    if decoded.len() != DECODED_LENGTH {
        return Err(AddressError::InvalidDecodedLength(decoded.len()));
    }

    let (body, checksum) = decoded.split_at(DECODED_LENGTH - CHECKSUM_LENGTH);
    if hash::checksum(body).as_slice() != checksum {
        return Err(AddressError::InvalidBase58Checksum);
    }

    let version = body[0];
    let (address_type, network) = lookup_version(version)?;

    let mut payload = [0u8; PAYLOAD_LENGTH];
    payload.copy_from_slice(&body[1..]);
    let mut check = [0u8; CHECKSUM_LENGTH];
    check.copy_from_slice(checksum);

    Ok(LegacyDecoded {
        version,
        payload,
        checksum: check,
        address_type,
        network,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_p2pkh_mainnet() {
        let decoded = decode("17VZNX1SN5NtKa8UQFxwQbFeFc3iqRYhem").unwrap();
        assert_eq!(decoded.version, 0x00);
        assert_eq!(decoded.address_type, AddressType::P2PKH);
        assert_eq!(decoded.network, Network::Mainnet);
        assert_eq!(
            decoded.payload_hex(),
            "47376c6f537d62177a2c41c4ca9b45829ab99083"
        );
    }

    #[test]
    fn test_p2sh_testnet() {
        let decoded = decode("2MzQwSSnBHWHqSAqtTVQ6v47XtaisrJa1Vc").unwrap();
        assert_eq!(decoded.version, Network::Testnet.p2sh_version());
        assert_eq!(decoded.address_type, AddressType::P2SH);
        assert_eq!(decoded.network, Network::Testnet);
        assert_eq!(
            decoded.payload_hex(),
            "4e9f39ca4688ff102128ea4ccda34105324305b0"
        );
    }

    #[test]
    fn test_version_table_matches_network_constants() {
        for network in [Network::Mainnet, Network::Testnet] {
            assert_eq!(
                lookup_version(network.p2pkh_version()),
                Ok((AddressType::P2PKH, network))
            );
            assert_eq!(
                lookup_version(network.p2sh_version()),
                Ok((AddressType::P2SH, network))
            );
        }
        assert_eq!(lookup_version(0x30), Err(AddressError::UnknownVersionByte(0x30)));
    }

    #[test]
    fn test_invalid_checksum() {
        // Changed last char
        assert_eq!(
            decode("1BvBMSEYstWetqTFn5Au4m4GFg7xJaNVN3"),
            Err(AddressError::InvalidBase58Checksum)
        );
        assert_eq!(
            decode("17VZNX1SN5NtKa8UFFxwQbFeFc3iqRYhem"),
            Err(AddressError::InvalidBase58Checksum)
        );
    }

    #[test]
    fn test_unknown_version() {
        // Valid Base58Check with a Litecoin version byte
        assert_eq!(
            decode("LVuDpNCSSj6pQ7t9Pv6d6sUkLKoqDEVUnJ"),
            Err(AddressError::UnknownVersionByte(0x30))
        );
    }

    #[test]
    fn test_decoded_length() {
        assert_eq!(decode("1111111111"), Err(AddressError::InvalidDecodedLength(10)));
        assert_eq!(decode(""), Err(AddressError::InvalidDecodedLength(0)));
        // 26 bytes with a correct checksum is still rejected
        assert_eq!(
            decode("1p8KevEo5z2dqhHVZQ6v6D6s8PRnAtbespV"),
            Err(AddressError::InvalidDecodedLength(26))
        );
    }

    #[test]
    fn test_invalid_base58_character() {
        let err = decode("0BvBMSEYstWetqTFn5Au4m4GFg7xJaNVN2").unwrap_err();
        assert!(matches!(err, AddressError::Base58(_)));
    }
}
