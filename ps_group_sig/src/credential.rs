//! Membership credential issued by the authority for one join request. It is a PS signature on the member secret
//! lifted into G2: `sigma1 = g2 * u`, `sigma2 = (g2 * x + tau * y) * u = sigma1 * (x + secret * y)`.

use crate::{
    error::GroupSigError,
    join::JoinRequest,
    setup::{GroupPublicKey, GroupSecretKey},
};
use ark_ec::{pairing::Pairing, AffineRepr, CurveGroup};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{end_timer, ops::Neg, rand::RngCore, start_timer, vec::Vec, Zero};
use ps_stealth_utils::{
    multi_pairing, randomness::try_rand_non_zero, serde_utils::ArkObjectBytes,
};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

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
pub struct Credential<E: Pairing> {
    #[serde_as(as = "ArkObjectBytes")]
    pub sigma1: E::G2Affine,
    #[serde_as(as = "ArkObjectBytes")]
    pub sigma2: E::G2Affine,
}

impl<E: Pairing> Credential<E> {
    /// Issue a credential for the join request. The blinding `u` is sampled fresh on every call; issuing two
    /// credentials with the same `u` would let anyone link them.
    pub fn new<R: RngCore>(
        rng: &mut R,
        join_request: &JoinRequest<E>,
        gsk: &GroupSecretKey<E::ScalarField>,
    ) -> Result<Self, GroupSigError> {
        if join_request.tau.is_zero() {
            return Err(GroupSigError::InvalidJoinRequest);
        }
        let issue_time = start_timer!(|| "Credential issuance");
        let u = Zeroizing::new(try_rand_non_zero::<E::ScalarField, _>(rng)?);
        let credential = Self::new_given_randomness(&u, join_request, gsk);
        end_timer!(issue_time);
        Ok(credential)
    }

    pub fn new_given_randomness(
        u: &E::ScalarField,
        join_request: &JoinRequest<E>,
        gsk: &GroupSecretKey<E::ScalarField>,
    ) -> Self {
        let g2 = E::G2Affine::generator();
        let sigma1 = g2 * u;
        let sigma2 = (g2 * gsk.x + join_request.tau * gsk.y) * u;
        let points = E::G2::normalize_batch(&[sigma1, sigma2]);
        Self {
            sigma1: points[0],
            sigma2: points[1],
        }
    }

    /// Check done by the member on receiving the credential: `e(g_tilde, sigma2) = e(g_x + tau_tilde, sigma1)`.
    pub fn verify(&self, join_request: &JoinRequest<E>, gpk: &GroupPublicKey<E>) -> bool {
        if !self.is_non_zero() {
            return false;
        }
        multi_pairing! {
            gpk.g_tilde, self.sigma2;
            (gpk.g_x + join_request.tau_tilde).neg(), self.sigma1
        }
        .is_zero()
    }

    pub fn is_non_zero(&self) -> bool {
        !(self.sigma1.is_zero() || self.sigma2.is_zero())
    }
}

/// Issue a credential for the join request, see [`Credential::new`]
pub fn accept_user<E: Pairing, R: RngCore>(
    rng: &mut R,
    join_request: &JoinRequest<E>,
    gsk: &GroupSecretKey<E::ScalarField>,
) -> Result<Credential<E>, GroupSigError> {
    Credential::new(rng, join_request, gsk)
}
