//! Recipient side: find the announcements addressed to us and recover the private keys of their addresses.
//!
//! For an announcement with ephemeral public key `E`, the private key of the stealth address is
//! `spending + SHA-256(viewing * E) mod n`. It belongs to us iff its address is the announced one. Only the viewing
//! key is needed to find payments, the spending key to spend them.

use crate::{
    address::Address,
    ecdh::{shared_secret, shared_secret_scalar},
    encoding::Sec1Point,
    generator::Announcement,
    keys::{KeyPair, StealthKeys, StealthPrivateKey},
};
use ark_ec::AffineRepr;
use ark_std::{end_timer, start_timer, vec::Vec};
use zeroize::Zeroizing;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct UnlockResult<G: AffineRepr> {
    pub matched: bool,
    /// Key pair of the candidate address. Only meaningful when `matched`.
    pub key_pair: KeyPair<G>,
}

pub fn try_unlock<G: Sec1Point>(
    address: &Address,
    ephemeral_public_key: &G,
    keys: &StealthKeys<G>,
) -> UnlockResult<G> {
    let shared = Zeroizing::new(shared_secret(
        &keys.viewing.private_key,
        ephemeral_public_key,
    ));
    let offset = Zeroizing::new(shared_secret_scalar(&*shared));
    let key_pair =
        KeyPair::from_private_key(StealthPrivateKey(*offset + keys.spending.private_key.0));
    UnlockResult {
        matched: key_pair.address() == *address,
        key_pair,
    }
}

/// Key pairs of the announcements addressed to `keys`, in the order of `candidates`. The iterator is lazy and can be
/// cloned to start over.
pub fn scan<'a, G: Sec1Point>(
    candidates: &'a [Announcement<G>],
    keys: &'a StealthKeys<G>,
) -> impl Iterator<Item = KeyPair<G>> + Clone + 'a {
    candidates.iter().filter_map(move |c| {
        let res = try_unlock(&c.address, &c.ephemeral_public_key, keys);
        res.matched.then_some(res.key_pair)
    })
}

/// Same as [`scan`] but eager, and in parallel with the `parallel` feature. Matches are in the order of
/// `candidates`.
pub fn scan_all<G: Sec1Point>(
    candidates: &[Announcement<G>],
    keys: &StealthKeys<G>,
) -> Vec<KeyPair<G>> {
    let scan_time = start_timer!(|| "Scanning announcements");

    #[cfg(feature = "parallel")]
    let found = candidates
        .par_iter()
        .filter_map(|c| {
            let res = try_unlock(&c.address, &c.ephemeral_public_key, keys);
            res.matched.then_some(res.key_pair)
        })
        .collect::<Vec<_>>();

    #[cfg(not(feature = "parallel"))]
    let found = scan(candidates, keys).collect::<Vec<_>>();

    end_timer!(scan_time);
    found
}
