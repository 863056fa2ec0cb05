//! Re-grouping of bit strings between symbol widths.

use alloc::vec::Vec;

use crate::error::RegroupError;

/// Convert `from_bits`-wide symbols into `to_bits`-wide symbols, MSB first.
///
/// With `pad` set, leftover bits are left-aligned into one final symbol.
/// Without it, the leftover must be shorter than one input symbol and all
/// zero.
pub fn convert_bits(
    data: &[u8],
    from_bits: u32,
    to_bits: u32,
    pad: bool,
) -> Result<Vec<u8>, RegroupError> {
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let max_value = (1u32 << to_bits) - 1;
    let max_acc = (1u32 << (from_bits + to_bits - 1)) - 1;
    let mut result = Vec::with_capacity((data.len() * from_bits as usize).div_ceil(to_bits as usize));

    for &value in data {
        if u32::from(value) >> from_bits != 0 {
            return Err(RegroupError::SymbolOutOfRange {
                value,
                width: from_bits,
            });
        }
        acc = ((acc << from_bits) | u32::from(value)) & max_acc;
        bits += from_bits;

        while bits >= to_bits {
            bits -= to_bits;
            result.push(((acc >> bits) & max_value) as u8);
        }
    }

    if pad {
        if bits > 0 {
            result.push(((acc << (to_bits - bits)) & max_value) as u8);
        }
    } else if bits >= from_bits {
        return Err(RegroupError::ExcessPadding);
    } else if ((acc << (to_bits - bits)) & max_value) != 0 {
        return Err(RegroupError::NonZeroPadding);
    }

    Ok(result)
}

/// Bytes to 5-bit words, padding the final word.
pub fn to_base32(bytes: &[u8]) -> Result<Vec<u8>, RegroupError> {
    convert_bits(bytes, 8, 5, true)
}

/// 5-bit words back to bytes, rejecting bad padding.
pub fn from_base32(words: &[u8]) -> Result<Vec<u8>, RegroupError> {
    convert_bits(words, 5, 8, false)
}
