//! Ethereum addresses: the last 20 bytes of the Keccak-256 hash of the public key coordinates

use crate::{encoding::Sec1Point, error::StealthError};
use ark_std::{str::FromStr, string::String};
use core::fmt;
use ps_stealth_utils::{
    error::EncodingError,
    hashing_utils::keccak256,
    serde_utils::{from_prefixed_hex, PrefixedHex},
};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

pub const ADDRESS_LEN: usize = 20;

#[serde_as]
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Address(#[serde_as(as = "PrefixedHex")] pub [u8; ADDRESS_LEN]);

impl Address {
    pub fn from_public_key<G: Sec1Point>(public_key: &G) -> Self {
        let hash = keccak256(&public_key.to_coordinates_bytes());
        let mut address = [0u8; ADDRESS_LEN];
        address.copy_from_slice(&hash[32 - ADDRESS_LEN..]);
        Self(address)
    }

    /// EIP-55 mixed-case hex: a letter is uppercased when the matching nibble of the Keccak-256 hash of the lowercase
    /// hex is at least 8
    pub fn to_checksum(&self) -> String {
        let lower = hex::encode(self.0);
        let hash = keccak256(lower.as_bytes());
        let mut out = String::with_capacity(2 + 2 * ADDRESS_LEN);
        out.push_str("0x");
        for (i, c) in lower.chars().enumerate() {
            let nibble = (hash[i / 2] >> (if i % 2 == 0 { 4 } else { 0 })) & 0x0f;
            if nibble >= 8 {
                out.push(c.to_ascii_uppercase());
            } else {
                out.push(c);
            }
        }
        out
    }

    /// Word of an ABI encoded `address`, left padded with zeros
    pub fn to_word(&self) -> [u8; 32] {
        let mut word = [0u8; 32];
        word[32 - ADDRESS_LEN..].copy_from_slice(&self.0);
        word
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_checksum())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_checksum())
    }
}

/// Parses hex with or without `0x`. All lowercase or all uppercase hex is accepted as is, mixed case must match the
/// checksum.
impl FromStr for Address {
    type Err = StealthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = from_prefixed_hex(s).map_err(|_| EncodingError::InvalidHex)?;
        let address = <[u8; ADDRESS_LEN]>::try_from(bytes.as_slice())
            .map(Self)
            .map_err(|_| EncodingError::InvalidLength {
                expected: ADDRESS_LEN,
                found: bytes.len(),
            })?;
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let has_lower = digits.chars().any(|c| c.is_ascii_lowercase());
        let has_upper = digits.chars().any(|c| c.is_ascii_uppercase());
        if has_lower && has_upper && address.to_checksum()[2..] != *digits {
            return Err(StealthError::InvalidAddressChecksum);
        }
        Ok(address)
    }
}
