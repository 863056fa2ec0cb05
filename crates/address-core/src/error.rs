//! Address decoding errors.

use alloc::string::String;
use thiserror::Error;

use crate::checksum::Variant;

/// Failure while re-grouping symbols between bit widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegroupError {
    /// An input symbol does not fit in the declared input width.
    #[error("symbol {value} does not fit in {width} bits")]
    SymbolOutOfRange { value: u8, width: u32 },
    /// A whole input symbol (or more) was left over.
    #[error("excess padding")]
    ExcessPadding,
    /// The incomplete final group carries non-zero bits.
    #[error("non-zero padding")]
    NonZeroPadding,
}

/// Broad classification of an [`AddressError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Length,
    Case,
    Separator,
    Prefix,
    Alphabet,
    Checksum,
    Padding,
    Network,
    Version,
    DecodedLength,
    Format,
}

/// Address validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// Address shorter than the minimum Bech32 length
    #[error("address is too short: {0} characters")]
    TooShort(usize),
    /// Address longer than the configured limit
    #[error("address is too long: {len} characters (limit {limit})")]
    TooLong { len: usize, limit: usize },
    /// Data part cannot hold the 6-character checksum
    #[error("data part is too short: {0} characters")]
    DataTooShort(usize),
    /// Both upper and lower case letters present
    #[error("address mixes upper and lower case")]
    MixedCase,
    /// No '1' separator in the address
    #[error("missing separator character")]
    MissingSeparator,
    /// Separator is the first character
    #[error("missing human-readable prefix")]
    EmptyPrefix,
    /// Prefix character outside printable ASCII
    #[error("invalid prefix character: {0:?}")]
    InvalidPrefixChar(char),
    /// Data character outside the Bech32 alphabet
    #[error("invalid data character: {0:?}")]
    InvalidChar(char),
    /// Bech32 checksum did not match the expected variant
    #[error("invalid {0} checksum")]
    InvalidChecksum(Variant),
    /// Base58Check digest mismatch
    #[error("invalid base58check checksum")]
    InvalidBase58Checksum,
    /// Bit re-grouping failed
    #[error("invalid witness program: {0}")]
    Padding(#[from] RegroupError),
    /// Human-readable prefix does not name a known network
    #[error("unknown network prefix: {0}")]
    UnknownHrp(String),
    /// Bech32 payload is empty
    #[error("missing witness version")]
    MissingWitnessVersion,
    /// Witness version above 16
    #[error("invalid witness version: {0}")]
    InvalidWitnessVersion(u8),
    /// Base58Check version byte not in the lookup table
    #[error("unknown version byte: 0x{0:02x}")]
    UnknownVersionByte(u8),
    /// Base58 payload is not 25 bytes
    #[error("invalid decoded length: {0} bytes")]
    InvalidDecodedLength(usize),
    /// Base58 primitive rejected the string
    #[error("invalid base58: {0}")]
    Base58(bs58::decode::Error),
}

impl AddressError {
    /// The taxonomy bucket this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AddressError::TooShort(_)
            | AddressError::TooLong { .. }
            | AddressError::DataTooShort(_) => ErrorKind::Length,
            AddressError::MixedCase => ErrorKind::Case,
            AddressError::MissingSeparator => ErrorKind::Separator,
            AddressError::EmptyPrefix | AddressError::InvalidPrefixChar(_) => ErrorKind::Prefix,
            AddressError::InvalidChar(_) => ErrorKind::Alphabet,
            AddressError::InvalidChecksum(_) | AddressError::InvalidBase58Checksum => {
                ErrorKind::Checksum
            }
            AddressError::Padding(_) => ErrorKind::Padding,
            AddressError::UnknownHrp(_) => ErrorKind::Network,
            AddressError::MissingWitnessVersion
            | AddressError::InvalidWitnessVersion(_)
            | AddressError::UnknownVersionByte(_) => ErrorKind::Version,
            AddressError::InvalidDecodedLength(_) => ErrorKind::DecodedLength,
            AddressError::Base58(_) => ErrorKind::Format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(AddressError::TooShort(3).kind(), ErrorKind::Length);
        assert_eq!(AddressError::DataTooShort(5).kind(), ErrorKind::Length);
        assert_eq!(AddressError::EmptyPrefix.kind(), ErrorKind::Prefix);
        assert_eq!(
            AddressError::InvalidChecksum(Variant::Bech32m).kind(),
            ErrorKind::Checksum
        );
        assert_eq!(AddressError::InvalidBase58Checksum.kind(), ErrorKind::Checksum);
        assert_eq!(
            AddressError::from(RegroupError::NonZeroPadding).kind(),
            ErrorKind::Padding
        );
        assert_eq!(AddressError::UnknownVersionByte(0x30).kind(), ErrorKind::Version);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            AddressError::UnknownVersionByte(0x30).to_string(),
            "unknown version byte: 0x30"
        );
        assert_eq!(
            AddressError::InvalidChecksum(Variant::Bech32m).to_string(),
            "invalid bech32m checksum"
        );
        assert_eq!(
            AddressError::from(RegroupError::ExcessPadding).to_string(),
            "invalid witness program: excess padding"
        );
    }
}
