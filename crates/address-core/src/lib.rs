//! Bitcoin address decoding and classification.
//!
//! This crate provides pure Rust implementations of:
//! - Bech32 / Bech32m checksum verification (BIP-173, BIP-350)
//! - 5-bit <-> 8-bit regrouping of witness programs
//! - Base58Check verification of legacy addresses
//! - Classification into P2PKH, P2SH, P2WPKH, P2WSH and P2TR on
//!   mainnet, testnet or regtest

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod address;
pub mod alphabet;
pub mod bech32;
pub mod checksum;
pub mod error;
pub mod hash;
pub mod legacy;
pub mod network;
pub mod regroup;

pub use address::{classify, validate, AddressResult, AddressType};
pub use bech32::DecodedBech32;
pub use checksum::Variant;
pub use error::{AddressError, ErrorKind, RegroupError};
pub use hash::double_sha256;
pub use legacy::LegacyDecoded;
pub use network::Network;
