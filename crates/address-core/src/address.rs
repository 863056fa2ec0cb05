//! Bitcoin address classification.
//!
//! Supports:
//! - P2PKH (Pay to Public Key Hash) - Legacy addresses starting with 1 (mainnet) or m/n (testnet)
//! - P2SH (Pay to Script Hash) - Addresses starting with 3 (mainnet) or 2 (testnet)
//! - P2WPKH (Pay to Witness Public Key Hash) - Native SegWit, 20-byte program
//! - P2WSH (Pay to Witness Script Hash) - Native SegWit, any other program
//! - P2TR (Pay to Taproot) - SegWit v1, bc1p.../tb1p.../bcrt1p...

use alloc::string::{String, ToString};
use core::fmt;

use crate::bech32;
use crate::checksum::Variant;
use crate::error::AddressError;
use crate::legacy;
use crate::network::Network;

/// Highest valid witness version.
pub const MAX_WITNESS_VERSION: u8 = 16;

/// Program length that marks a witness pubkey hash.
const WPKH_PROGRAM_LENGTH: usize = 20;

/// Bitcoin address type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressType {
    /// Legacy P2PKH: OP_DUP OP_HASH160 <20-byte-hash> OP_EQUALVERIFY OP_CHECKSIG
    P2PKH,
    /// P2SH: OP_HASH160 <20-byte-hash> OP_EQUAL
    P2SH,
    /// Native SegWit P2WPKH: OP_0 <20-byte-hash>
    P2WPKH,
    /// Native SegWit P2WSH: OP_0 <32-byte-hash>
    P2WSH,
    /// Taproot P2TR: OP_1 <32-byte-x-only-pubkey>
    P2TR,
}

impl AddressType {
    /// Get the display name for this address type.
    pub fn name(&self) -> &'static str {
        match self {
            AddressType::P2PKH => "P2PKH",
            AddressType::P2SH => "P2SH",
            AddressType::P2WPKH => "P2WPKH",
            AddressType::P2WSH => "P2WSH",
            AddressType::P2TR => "P2TR",
        }
    }

    /// Whether this type is encoded with Bech32/Bech32m.
    pub fn is_segwit(&self) -> bool {
        matches!(
            self,
            AddressType::P2WPKH | AddressType::P2WSH | AddressType::P2TR
        )
    }
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified Bitcoin address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressResult {
    /// The original address string.
    pub address: String,
    /// The type of address.
    pub address_type: AddressType,
    /// The network this address belongs to.
    pub network: Network,
    /// Whether the address is Bech32/Bech32m encoded.
    pub is_bech32: bool,
}

impl fmt::Display for AddressResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Address info:")?;
        writeln!(f, "\tAddress: {}", self.address)?;
        writeln!(f, "\tType: {}", self.address_type)?;
        writeln!(f, "\tNetwork: {}", self.network)?;
        write!(f, "\tBech32: {}", self.is_bech32)
    }
}

/// Classify an address by encoding, type and network.
pub fn classify(address: &str) -> Result<AddressResult, AddressError> {
    let prefix = address.get(..2).map(str::to_ascii_lowercase);

    match prefix.as_deref() {
        Some("bc") | Some("tb") => classify_bech32(address),
        _ => classify_legacy(address),
    }
}

/// Whether `address` classifies cleanly, optionally on a given network.
pub fn validate(address: &str, expected_network: Option<Network>) -> bool {
    match classify(address) {
        Ok(result) => expected_network.map_or(true, |network| network == result.network),
        Err(_) => false,
    }
}

/// Classify a Bech32/Bech32m address (P2WPKH, P2WSH, or P2TR).
fn classify_bech32(address: &str) -> Result<AddressResult, AddressError> {
    let decoded = bech32::decode(address, Variant::for_address(address))?;

    let network = Network::from_hrp(&decoded.hrp)
        .ok_or_else(|| AddressError::UnknownHrp(decoded.hrp.clone()))?;

    let witness_version = decoded
        .witness_version()
        .ok_or(AddressError::MissingWitnessVersion)?;
    if witness_version > MAX_WITNESS_VERSION {
        return Err(AddressError::InvalidWitnessVersion(witness_version));
    }

    let program = decoded.witness_program()?;

    // Length wins over version: any 20-byte program is a pubkey hash
    let address_type = if program.len() == WPKH_PROGRAM_LENGTH {
        AddressType::P2WPKH
    } else if witness_version == 1 {
        AddressType::P2TR
    } else {
        AddressType::P2WSH
    };

    Ok(AddressResult {
        address: address.to_string(),
        address_type,
        network,
        is_bech32: true,
    })
}

/// Classify a Base58Check encoded address (P2PKH or P2SH).
fn classify_legacy(address: &str) -> Result<AddressResult, AddressError> {
    let decoded = legacy::decode(address)?;

    Ok(AddressResult {
        address: address.to_string(),
        address_type: decoded.address_type,
        network: decoded.network,
        is_bech32: false,
    })
}
