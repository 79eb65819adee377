//! Key generation of the group authority

use crate::error::GroupSigError;
use ark_ec::{pairing::Pairing, AffineRepr, CurveGroup};
use ark_ff::PrimeField;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{end_timer, ops::Neg, rand::RngCore, start_timer, vec::Vec};
use ps_stealth_utils::{randomness::try_rand_non_zero, serde_utils::ArkObjectBytes};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Secret key of the group authority, used to issue credentials
#[serde_as]
#[derive(
    Clone,
    PartialEq,
    Eq,
    Debug,
    CanonicalSerialize,
    CanonicalDeserialize,
    Zeroize,
    ZeroizeOnDrop,
    Serialize,
    Deserialize,
)]
pub struct GroupSecretKey<F: PrimeField> {
    #[serde_as(as = "ArkObjectBytes")]
    pub x: F,
    #[serde_as(as = "ArkObjectBytes")]
    pub y: F,
}

/// Public key of the group. `g_tilde` is a random element of G1 rather than the fixed generator, and its negation is
/// published as well since the on-chain verifier works with `-g_tilde`.
#[serde_as]
#[derive(
    Clone, PartialEq, Eq, Debug, CanonicalSerialize, CanonicalDeserialize, Serialize, Deserialize,
)]
pub struct GroupPublicKey<E: Pairing> {
    #[serde_as(as = "ArkObjectBytes")]
    pub g_tilde: E::G1Affine,
    #[serde_as(as = "ArkObjectBytes")]
    pub g_tilde_neg: E::G1Affine,
    /// `g_tilde * x`
    #[serde_as(as = "ArkObjectBytes")]
    pub g_x: E::G1Affine,
    /// `g_tilde * y`
    #[serde_as(as = "ArkObjectBytes")]
    pub g_y: E::G1Affine,
}

impl<F: PrimeField> GroupSecretKey<F> {
    pub fn new<R: RngCore>(rng: &mut R) -> Result<Self, GroupSigError> {
        Ok(Self {
            x: try_rand_non_zero(rng)?,
            y: try_rand_non_zero(rng)?,
        })
    }
}

impl<E: Pairing> GroupPublicKey<E> {
    pub fn new<R: RngCore>(
        rng: &mut R,
        secret_key: &GroupSecretKey<E::ScalarField>,
    ) -> Result<Self, GroupSigError> {
        let r = try_rand_non_zero::<E::ScalarField, _>(rng)?;
        Ok(Self::new_given_generator_exponent(&r, secret_key))
    }

    /// Public key with `g_tilde = g1 * r`
    pub fn new_given_generator_exponent(
        r: &E::ScalarField,
        secret_key: &GroupSecretKey<E::ScalarField>,
    ) -> Self {
        let g_tilde = E::G1Affine::generator() * r;
        let points = E::G1::normalize_batch(&[
            g_tilde,
            g_tilde.neg(),
            g_tilde * secret_key.x,
            g_tilde * secret_key.y,
        ]);
        Self {
            g_tilde: points[0],
            g_tilde_neg: points[1],
            g_x: points[2],
            g_y: points[3],
        }
    }

    /// Public key shouldn't contain the identity and `g_tilde_neg` must be the negation of `g_tilde`. A verifier
    /// receiving a public key from elsewhere must check this before using it.
    pub fn is_valid(&self) -> bool {
        !(self.g_tilde.is_zero() || self.g_x.is_zero() || self.g_y.is_zero())
            && self.g_tilde.into_group().neg() == self.g_tilde_neg.into_group()
    }
}

/// Generate the key pair of the group authority
pub fn setup<E: Pairing, R: RngCore>(
    rng: &mut R,
) -> Result<(GroupSecretKey<E::ScalarField>, GroupPublicKey<E>), GroupSigError> {
    let setup_time = start_timer!(|| "Group setup");
    let secret_key = GroupSecretKey::new(rng)?;
    let public_key = GroupPublicKey::new(rng, &secret_key)?;
    end_timer!(setup_time);
    Ok((secret_key, public_key))
}
