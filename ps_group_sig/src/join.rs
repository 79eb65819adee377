//! Enrollment of a member. The member picks a secret and sends the authority `tau = g2 * secret` and
//! `tau_tilde = g_y * secret`. The secret never leaves the member; the authority keeps `tau_tilde` to open signatures.

use crate::{error::GroupSigError, setup::GroupPublicKey};
use ark_ec::{pairing::Pairing, AffineRepr};
use ark_ff::PrimeField;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{ops::Neg, rand::RngCore, vec::Vec, Zero};
use ps_stealth_utils::{
    multi_pairing, randomness::try_rand_non_zero, serde_utils::ArkObjectBytes,
};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Long-term identity secret of a member
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
pub struct MemberSecret<F: PrimeField>(#[serde_as(as = "ArkObjectBytes")] pub F);

/// The public part of a join request, sent to the authority
#[serde_as]
#[derive(
    Clone, PartialEq, Eq, Debug, CanonicalSerialize, CanonicalDeserialize, Serialize, Deserialize,
)]
pub struct JoinRequest<E: Pairing> {
    /// `g2 * secret`
    #[serde_as(as = "ArkObjectBytes")]
    pub tau: E::G2Affine,
    /// `g_y * secret`
    #[serde_as(as = "ArkObjectBytes")]
    pub tau_tilde: E::G1Affine,
}

impl<F: PrimeField> MemberSecret<F> {
    pub fn new<R: RngCore>(rng: &mut R) -> Result<Self, GroupSigError> {
        Ok(Self(try_rand_non_zero(rng)?))
    }
}

impl<E: Pairing> JoinRequest<E> {
    /// Pick a fresh member secret and build the join request for it
    pub fn new<R: RngCore>(
        rng: &mut R,
        gpk: &GroupPublicKey<E>,
    ) -> Result<(MemberSecret<E::ScalarField>, Self), GroupSigError> {
        let secret = MemberSecret::new(rng)?;
        let request = Self::new_given_secret(&secret, gpk);
        Ok((secret, request))
    }

    pub fn new_given_secret(
        secret: &MemberSecret<E::ScalarField>,
        gpk: &GroupPublicKey<E>,
    ) -> Self {
        Self {
            tau: (E::G2Affine::generator() * secret.0).into(),
            tau_tilde: (gpk.g_y * secret.0).into(),
        }
    }

    /// Checks that `tau` and `tau_tilde` hide the same secret, i.e. `e(tau_tilde, g2) = e(g_y, tau)`. An authority
    /// should reject requests failing this as it could not open the member's signatures.
    pub fn is_well_formed(&self, gpk: &GroupPublicKey<E>) -> bool {
        if self.tau.is_zero() || self.tau_tilde.is_zero() {
            return false;
        }
        multi_pairing! {
            self.tau_tilde, E::G2Affine::generator();
            gpk.g_y.into_group().neg(), self.tau
        }
        .is_zero()
    }
}
