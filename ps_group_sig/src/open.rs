//! Opening of a signature by the group authority. A signature was created by the member of a join request iff
//! `e(g_tilde, sigma2_random) = e(g_x + tau_tilde, sigma1_random)` as `sigma2_random = sigma1_random * (x + secret * y)`
//! and `g_x + tau_tilde = g_tilde * (x + secret * y)`.

use crate::{join::JoinRequest, setup::GroupPublicKey, signature::Signature};
use ark_ec::{pairing::Pairing, AffineRepr};
use ark_std::{end_timer, ops::Neg, start_timer, Zero};
use ps_stealth_utils::multi_pairing;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Returns true if `signature` was created by the member who sent `join_request`. Does not verify the signature.
pub fn open<E: Pairing>(
    signature: &Signature<E>,
    join_request: &JoinRequest<E>,
    gpk: &GroupPublicKey<E>,
) -> bool {
    if signature.sigma1_random.is_zero() || join_request.tau_tilde.is_zero() {
        return false;
    }
    multi_pairing! {
        gpk.g_tilde, signature.sigma2_random;
        (gpk.g_x + join_request.tau_tilde).neg(), signature.sigma1_random
    }
    .is_zero()
}

/// Index of the join request among `join_requests` whose member created `signature`, if any
pub fn open_among<E: Pairing>(
    signature: &Signature<E>,
    join_requests: &[JoinRequest<E>],
    gpk: &GroupPublicKey<E>,
) -> Option<usize> {
    let open_time = start_timer!(|| "Opening among members");

    #[cfg(feature = "parallel")]
    let index = join_requests
        .par_iter()
        .position_first(|jr| open(signature, jr, gpk));

    #[cfg(not(feature = "parallel"))]
    let index = join_requests
        .iter()
        .position(|jr| open(signature, jr, gpk));

    end_timer!(open_time);
    index
}
