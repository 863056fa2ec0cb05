//! The 32-symbol Bech32 alphabet.

use crate::error::AddressError;

/// Bech32 characters in value order.
pub const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// ASCII -> 5-bit value, -1 for characters outside the alphabet.
static REVERSE: [i8; 128] = build_reverse();

const fn build_reverse() -> [i8; 128] {
    let mut table = [-1i8; 128];
    let mut i = 0;
    while i < CHARSET.len() {
        table[CHARSET[i] as usize] = i as i8;
        i += 1;
    }
    table
}

/// Map a (lower-case) Bech32 character to its 5-bit value.
#[inline]
pub fn decode(c: char) -> Result<u8, AddressError> {
    let code = c as u32;
    if code < 128 {
        let value = REVERSE[code as usize];
        if value >= 0 {
            return Ok(value as u8);
        }
    }
    Err(AddressError::InvalidChar(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_values_follow_charset_order() {
        for (i, &b) in CHARSET.iter().enumerate() {
            assert_eq!(decode(b as char).unwrap(), i as u8);
        }
    }

    #[test]
    fn test_excluded_characters() {
        // '1', 'b', 'i' and 'o' are not part of the alphabet
        for c in ['1', 'b', 'i', 'o', 'B', 'Q', ' ', 'é'] {
            assert_eq!(decode(c), Err(AddressError::InvalidChar(c)));
        }
    }
}
