//! Diffie-Hellman between the sender's ephemeral key and the recipient's viewing key. Both sides get the same point,
//! `ephemeral * viewing_public = viewing * ephemeral_public`, and hash its uncompressed SEC1 encoding with SHA-256 to
//! get the scalar that offsets the spending key.

use crate::{encoding::Sec1Point, keys::StealthPrivateKey};
use ark_ec::CurveGroup;
use ps_stealth_utils::hashing_utils::field_elem_from_sha256;
use zeroize::Zeroizing;

pub fn shared_secret<G: Sec1Point>(
    private_key: &StealthPrivateKey<G::ScalarField>,
    public_key: &G,
) -> G {
    (*public_key * private_key.0).into_affine()
}

/// `SHA-256(uncompressed(shared)) mod n`
pub fn shared_secret_scalar<G: Sec1Point>(shared: &G) -> G::ScalarField {
    let bytes = Zeroizing::new(shared.to_uncompressed());
    field_elem_from_sha256(&bytes)
}
