//! Structures handed to a Solidity verifier.
//!
//! Every coordinate and scalar is an EVM word as produced by [`ps_stealth_utils::evm_encoding`], and G2 coordinates
//! keep the reversed coefficient order `[c1, c0]`. With serde the words become `0x`-prefixed hex strings which is what
//! ethers-style tooling takes as `uint256` arguments. Importing validates every point and scalar, so a structure coming
//! from outside can't inject off-curve points or unreduced scalars.

use crate::{error::GroupSigError, setup::GroupPublicKey, signature::Signature};
use ark_ec::{pairing::Pairing, AffineRepr};
use ark_std::{ops::Neg, vec::Vec};
use ps_stealth_utils::{
    error::EncodingError,
    evm_encoding::{field_from_word, field_to_word, point_to_words, EvmAffine},
    serde_utils::PrefixedHex,
};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

#[serde_as]
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct G1Point {
    #[serde_as(as = "PrefixedHex")]
    pub x: Vec<u8>,
    #[serde_as(as = "PrefixedHex")]
    pub y: Vec<u8>,
}

/// Coordinates as `[c1, c0]`
#[serde_as]
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct G2Point {
    #[serde_as(as = "[PrefixedHex; 2]")]
    pub x: [Vec<u8>; 2],
    #[serde_as(as = "[PrefixedHex; 2]")]
    pub y: [Vec<u8>; 2],
}

#[serde_as]
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct SignatureExport {
    #[serde_as(as = "PrefixedHex")]
    pub c: Vec<u8>,
    pub y_minus_k: G1Point,
    #[serde_as(as = "PrefixedHex")]
    pub s: Vec<u8>,
    pub sigma1: G2Point,
    pub sigma2: G2Point,
}

/// Group public key as passed to the verifier contract. `g_tilde` is not included as the verifier only needs its
/// negation.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct GroupPublicKeyExport {
    pub g_tilde_neg: G1Point,
    pub g_x: G1Point,
    pub g_y: G1Point,
}

impl G1Point {
    pub fn from_affine<G: AffineRepr>(point: &G) -> Result<Self, EncodingError> {
        let mut words = point_to_words(point);
        if words.len() != 2 {
            return Err(EncodingError::InvalidWordCount {
                expected: 2,
                found: words.len(),
            });
        }
        let y = words.remove(1);
        let x = words.remove(0);
        Ok(Self { x, y })
    }

    pub fn to_affine<G: EvmAffine>(&self) -> Result<G, EncodingError> {
        G::from_words(&[&self.x, &self.y])
    }
}

impl G2Point {
    pub fn from_affine<G: AffineRepr>(point: &G) -> Result<Self, EncodingError> {
        let words = point_to_words(point);
        match <[Vec<u8>; 4]>::try_from(words) {
            Ok([x1, x0, y1, y0]) => Ok(Self {
                x: [x1, x0],
                y: [y1, y0],
            }),
            Err(words) => Err(EncodingError::InvalidWordCount {
                expected: 4,
                found: words.len(),
            }),
        }
    }

    pub fn to_affine<G: EvmAffine>(&self) -> Result<G, EncodingError> {
        G::from_words(&[&self.x[0], &self.x[1], &self.y[0], &self.y[1]])
    }
}

impl<E: Pairing> From<&Signature<E>> for SignatureExport {
    fn from(sig: &Signature<E>) -> Self {
        Self {
            c: field_to_word(&sig.challenge),
            y_minus_k: g1_point::<E>(&sig.y_minus_k),
            s: field_to_word(&sig.response),
            sigma1: g2_point::<E>(&sig.sigma1_random),
            sigma2: g2_point::<E>(&sig.sigma2_random),
        }
    }
}

impl<E: Pairing> TryFrom<&SignatureExport> for Signature<E>
where
    E::G1Affine: EvmAffine,
    E::G2Affine: EvmAffine,
{
    type Error = GroupSigError;

    fn try_from(export: &SignatureExport) -> Result<Self, Self::Error> {
        Ok(Self {
            sigma1_random: export.sigma1.to_affine()?,
            sigma2_random: export.sigma2.to_affine()?,
            y_minus_k: export.y_minus_k.to_affine()?,
            challenge: field_from_word(&export.c)?,
            response: field_from_word(&export.s)?,
        })
    }
}

impl<E: Pairing> From<&GroupPublicKey<E>> for GroupPublicKeyExport {
    fn from(gpk: &GroupPublicKey<E>) -> Self {
        Self {
            g_tilde_neg: g1_point::<E>(&gpk.g_tilde_neg),
            g_x: g1_point::<E>(&gpk.g_x),
            g_y: g1_point::<E>(&gpk.g_y),
        }
    }
}

impl<E: Pairing> TryFrom<&GroupPublicKeyExport> for GroupPublicKey<E>
where
    E::G1Affine: EvmAffine,
{
    type Error = GroupSigError;

    fn try_from(export: &GroupPublicKeyExport) -> Result<Self, Self::Error> {
        let g_tilde_neg: E::G1Affine = export.g_tilde_neg.to_affine()?;
        let gpk = Self {
            g_tilde: g_tilde_neg.into_group().neg().into(),
            g_tilde_neg,
            g_x: export.g_x.to_affine()?,
            g_y: export.g_y.to_affine()?,
        };
        if !gpk.is_valid() {
            return Err(GroupSigError::InvalidPublicKey);
        }
        Ok(gpk)
    }
}

// G1 of a pairing is over a prime field and G2 over a quadratic extension so these don't fail
fn g1_point<E: Pairing>(point: &E::G1Affine) -> G1Point {
    let mut words = point_to_words(point).into_iter();
    G1Point {
        x: words.next().unwrap_or_default(),
        y: words.next().unwrap_or_default(),
    }
}

fn g2_point<E: Pairing>(point: &E::G2Affine) -> G2Point {
    let mut words = point_to_words(point).into_iter();
    let mut next = || words.next().unwrap_or_default();
    G2Point {
        x: [next(), next()],
        y: [next(), next()],
    }
}
