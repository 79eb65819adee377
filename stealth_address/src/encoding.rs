//! SEC1 encoding of public keys. Public keys are published compressed (`0x02`/`0x03` followed by `x`), hashes and
//! addresses are computed over the uncompressed form (`0x04` followed by `x` and `y`).

use ark_ec::{
    short_weierstrass::{Affine, SWCurveConfig},
    AffineRepr,
};
use ark_ff::{BigInteger, PrimeField};
use ark_std::{string::String, vec, vec::Vec};
use ps_stealth_utils::{
    error::EncodingError,
    evm_encoding::{field_from_word, field_to_word, word_len, EvmAffine},
    serde_utils::{from_prefixed_hex, to_prefixed_hex},
};
use serde::{Deserialize, Deserializer, Serializer};
use serde_with::{DeserializeAs, SerializeAs};

pub const TAG_COMPRESSED_EVEN: u8 = 0x02;
pub const TAG_COMPRESSED_ODD: u8 = 0x03;
pub const TAG_UNCOMPRESSED: u8 = 0x04;

/// Points of a curve over a prime field that have a SEC1 encoding. The identity is encoded as the single byte `0x00`
/// but never decoded, as it can't be a public key.
pub trait Sec1Point: EvmAffine {
    /// `x` and `y` as big-endian words without any tag. This is what an Ethereum address is the hash of.
    fn to_coordinates_bytes(&self) -> Vec<u8>;

    fn to_compressed(&self) -> Vec<u8>;

    fn to_uncompressed(&self) -> Vec<u8> {
        if self.is_zero() {
            return vec![0];
        }
        let mut bytes = vec![TAG_UNCOMPRESSED];
        bytes.append(&mut self.to_coordinates_bytes());
        bytes
    }

    /// Decode a compressed or uncompressed public key, rejecting points outside the prime order subgroup
    fn from_sec1_bytes(bytes: &[u8]) -> Result<Self, EncodingError>;
}

impl<P: SWCurveConfig> Sec1Point for Affine<P>
where
    P::BaseField: PrimeField,
{
    fn to_coordinates_bytes(&self) -> Vec<u8> {
        match self.xy() {
            Some((x, y)) => [field_to_word(x), field_to_word(y)].concat(),
            None => vec![0u8; 2 * word_len::<P::BaseField>()],
        }
    }

    fn to_compressed(&self) -> Vec<u8> {
        match self.xy() {
            Some((x, y)) => {
                let tag = if y.into_bigint().is_odd() {
                    TAG_COMPRESSED_ODD
                } else {
                    TAG_COMPRESSED_EVEN
                };
                let mut bytes = vec![tag];
                bytes.append(&mut field_to_word(x));
                bytes
            }
            None => vec![0],
        }
    }

    fn from_sec1_bytes(bytes: &[u8]) -> Result<Self, EncodingError> {
        let len = word_len::<P::BaseField>();
        let (tag, rest) = bytes.split_first().ok_or(EncodingError::InvalidLength {
            expected: 1 + len,
            found: 0,
        })?;
        match *tag {
            0 => Err(EncodingError::PointAtInfinity),
            TAG_COMPRESSED_EVEN | TAG_COMPRESSED_ODD => {
                if rest.len() != len {
                    return Err(EncodingError::InvalidLength {
                        expected: 1 + len,
                        found: bytes.len(),
                    });
                }
                let x = field_from_word::<P::BaseField>(rest)?;
                let (y1, y2) = Self::get_ys_from_x_unchecked(x).ok_or(EncodingError::NotOnCurve)?;
                let odd = *tag == TAG_COMPRESSED_ODD;
                let y = if y1.into_bigint().is_odd() == odd { y1 } else { y2 };
                Self::from_coordinates(x, y)
            }
            TAG_UNCOMPRESSED => {
                if rest.len() != 2 * len {
                    return Err(EncodingError::InvalidLength {
                        expected: 1 + 2 * len,
                        found: bytes.len(),
                    });
                }
                let point = Self::from_words(&[&rest[..len], &rest[len..]])?;
                if point.is_zero() {
                    return Err(EncodingError::PointAtInfinity);
                }
                Ok(point)
            }
            t => Err(EncodingError::InvalidPrefix(t)),
        }
    }
}

/// Decode a hex public key, `0x` prefix optional
pub fn public_key_from_hex<G: Sec1Point>(s: &str) -> Result<G, EncodingError> {
    let bytes = from_prefixed_hex(s).map_err(|_| EncodingError::InvalidHex)?;
    G::from_sec1_bytes(&bytes)
}

/// `0x`-prefixed hex of the compressed encoding, the form public keys are published in
pub fn public_key_to_hex<G: Sec1Point>(point: &G) -> String {
    to_prefixed_hex(&point.to_compressed())
}

/// Serde adapter writing a public key with [`public_key_to_hex`]
pub struct Sec1Hex;

impl<G: Sec1Point> SerializeAs<G> for Sec1Hex {
    fn serialize_as<S>(point: &G, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&public_key_to_hex(point))
    }
}

impl<'de, G: Sec1Point> DeserializeAs<'de, G> for Sec1Hex {
    fn deserialize_as<D>(deserializer: D) -> Result<G, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: String = Deserialize::deserialize(deserializer)?;
        public_key_from_hex(&s).map_err(serde::de::Error::custom)
    }
}
