//! Bech32 / Bech32m checksum (BIP-173, BIP-350).
//!
//! Both variants run the same BCH polymod over a 30-bit accumulator and only
//! differ in the constant the accumulator must equal once every character,
//! checksum included, has been folded in.

use core::fmt;

use crate::error::AddressError;

/// Generator constants of the BCH code.
const GEN: [u32; 5] = [0x3b6a57b2, 0x26508e6d, 0x1ea119fa, 0x3d4233dd, 0x2a1462b3];

/// Number of checksum characters at the end of the data part.
pub const CHECKSUM_LENGTH: usize = 6;

/// Which checksum constant an address is verified against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// BIP-173, used by witness v0 addresses
    Bech32,
    /// BIP-350, used by Taproot addresses
    Bech32m,
}

impl Variant {
    /// Final accumulator value for a valid checksum.
    pub const fn target(self) -> u32 {
        match self {
            Variant::Bech32 => 1,
            Variant::Bech32m => 0x2bc830a3,
        }
    }

    /// Pick the variant from the literal address prefix.
    ///
    /// Only lower-case `bc1p`, `tb1p` and `bcrt1p` select Bech32m.
    pub fn for_address(address: &str) -> Self {
        if ["bc1p", "tb1p", "bcrt1p"]
            .iter()
            .any(|prefix| address.starts_with(prefix))
        {
            Variant::Bech32m
        } else {
            Variant::Bech32
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Variant::Bech32 => "bech32",
            Variant::Bech32m => "bech32m",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One LFSR step of the polymod.
#[inline]
pub fn polymod_step(chk: u32) -> u32 {
    let top = chk >> 25;
    let mut chk = (chk & 0x1ffffff) << 5;
    for (i, &g) in GEN.iter().enumerate() {
        if (top >> i) & 1 == 1 {
            chk ^= g;
        }
    }
    chk
}

/// Running checksum accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checksum(u32);

impl Checksum {
    /// Seed the accumulator from the human-readable prefix.
    ///
    /// Folds the high bits of every character, a zero for the separator,
    /// then the low five bits of every character.
    pub fn with_prefix(hrp: &str) -> Result<Self, AddressError> {
        let mut chk = Checksum(1);
        for c in hrp.chars() {
            let code = c as u32;
            if !(33..=126).contains(&code) {
                return Err(AddressError::InvalidPrefixChar(c));
            }
            chk.fold(code >> 5);
        }
        chk.fold(0);
        for c in hrp.chars() {
            chk.fold(c as u32 & 0x1f);
        }
        Ok(chk)
    }

    /// Step the accumulator and xor in a 5-bit value.
    #[inline]
    pub fn fold(&mut self, value: u32) {
        self.0 = polymod_step(self.0) ^ value;
    }

    /// Current accumulator value.
    pub fn residue(&self) -> u32 {
        self.0
    }

    /// Check the accumulator against the variant's target constant.
    pub fn verify(&self, variant: Variant) -> Result<(), AddressError> {
        if self.0 == variant.target() {
            Ok(())
        } else {
            Err(AddressError::InvalidChecksum(variant))
        }
    }
}
