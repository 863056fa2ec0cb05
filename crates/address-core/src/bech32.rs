//! Bech32/Bech32m string decoding.

use alloc::string::String;
use alloc::vec::Vec;

use crate::alphabet;
use crate::checksum::{Checksum, Variant, CHECKSUM_LENGTH};
use crate::error::{AddressError, RegroupError};
use crate::regroup;

/// Maximum address length accepted by [`decode`] (BIP-173).
pub const DEFAULT_LENGTH_LIMIT: usize = 90;

/// Shortest string that can hold a prefix, separator and checksum.
pub const MIN_LENGTH: usize = 8;

/// Separator between the human-readable part and the data part.
pub const SEPARATOR: char = '1';

/// A checksum-verified Bech32 string split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedBech32 {
    /// Lower-cased human-readable prefix.
    pub hrp: String,
    /// 5-bit payload words, checksum stripped.
    pub words: Vec<u8>,
}

impl DecodedBech32 {
    /// The first payload word, if any.
    pub fn witness_version(&self) -> Option<u8> {
        self.words.first().copied()
    }

    /// The payload after the witness version, re-grouped to bytes.
    pub fn witness_program(&self) -> Result<Vec<u8>, RegroupError> {
        regroup::from_base32(self.words.get(1..).unwrap_or_default())
    }
}

/// Decode `address` with the default length limit.
pub fn decode(address: &str, variant: Variant) -> Result<DecodedBech32, AddressError> {
    decode_with_limit(address, variant, DEFAULT_LENGTH_LIMIT)
}

/// Decode `address`, verifying its checksum against `variant`.
pub fn decode_with_limit(
    address: &str,
    variant: Variant,
    limit: usize,
) -> Result<DecodedBech32, AddressError> {
    let len = address.chars().count();
    if len < MIN_LENGTH {
        return Err(AddressError::TooShort(len));
    }
    if len > limit {
        return Err(AddressError::TooLong { len, limit });
    }

    // ASCII-only case folding: non-ASCII letters must reach the alphabet check
    let has_lower = address.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = address.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper {
        return Err(AddressError::MixedCase);
    }
    let address = address.to_ascii_lowercase();

    let sep = address.rfind(SEPARATOR).ok_or(AddressError::MissingSeparator)?;
    if sep == 0 {
        return Err(AddressError::EmptyPrefix);
    }
    let (hrp, data) = (&address[..sep], &address[sep + 1..]);

    let data_len = data.chars().count();
    if data_len < CHECKSUM_LENGTH {
        return Err(AddressError::DataTooShort(data_len));
    }

    let mut chk = Checksum::with_prefix(hrp)?;
    let payload_len = data_len - CHECKSUM_LENGTH;
    let mut words = Vec::with_capacity(payload_len);
    for (i, c) in data.chars().enumerate() {
        let value = alphabet::decode(c)?;
        chk.fold(u32::from(value));
        // trailing six characters are checksum only
        if i < payload_len {
            words.push(value);
        }
    }
    chk.verify(variant)?;

    Ok(DecodedBech32 {
        hrp: String::from(hrp),
        words,
    })
}
