//! Fiat-Shamir challenge of a signature.
//!
//! The challenge is `keccak256(sigma1_random || sigma2_random || y_minus_k || message) mod r` where each point is
//! written as its EVM words (G2 coordinates with the coefficient order reversed), and the message bytes are appended
//! as they are. This is `abi.encodePacked` over `uint256` coordinates followed by the message, so a Solidity verifier
//! recomputes the same value.

use ark_ec::pairing::Pairing;
use ark_std::vec::Vec;
use ps_stealth_utils::{evm_encoding::point_to_packed_bytes, hashing_utils::field_elem_from_keccak};

/// Bytes hashed to get the challenge
pub fn challenge_bytes<E: Pairing>(
    sigma1_random: &E::G2Affine,
    sigma2_random: &E::G2Affine,
    y_minus_k: &E::G1Affine,
    message: &[u8],
) -> Vec<u8> {
    let mut bytes = point_to_packed_bytes(sigma1_random);
    bytes.append(&mut point_to_packed_bytes(sigma2_random));
    bytes.append(&mut point_to_packed_bytes(y_minus_k));
    bytes.extend_from_slice(message);
    bytes
}

pub fn compute_challenge<E: Pairing>(
    sigma1_random: &E::G2Affine,
    sigma2_random: &E::G2Affine,
    y_minus_k: &E::G1Affine,
    message: &[u8],
) -> E::ScalarField {
    field_elem_from_keccak(&challenge_bytes::<E>(
        sigma1_random,
        sigma2_random,
        y_minus_k,
        message,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bn254::{Bn254, Fr, G1Affine, G2Affine};
    use ark_ec::{AffineRepr, CurveGroup};
    use ark_ff::PrimeField;
    use ps_stealth_utils::{evm_encoding::field_to_word, hashing_utils::keccak256};

    #[test]
    fn layout() {
        let s1 = G2Affine::generator();
        let s2 = (G2Affine::generator() * Fr::from(2u64)).into_affine();
        let ymk = (G1Affine::generator() * Fr::from(3u64)).into_affine();
        let bytes = challenge_bytes::<Bn254>(&s1, &s2, &ymk, b"msg");

        // 4 words per G2 point, 2 per G1 point
        assert_eq!(bytes.len(), 10 * 32 + 3);
        assert_eq!(&bytes[0..32], field_to_word(&s1.x.c1).as_slice());
        assert_eq!(&bytes[32..64], field_to_word(&s1.x.c0).as_slice());
        assert_eq!(&bytes[192..224], field_to_word(&s2.y.c1).as_slice());
        assert_eq!(&bytes[256..288], field_to_word(&ymk.x).as_slice());
        assert_eq!(&bytes[320..], b"msg");

        let c = compute_challenge::<Bn254>(&s1, &s2, &ymk, b"msg");
        assert_eq!(c, Fr::from_be_bytes_mod_order(&keccak256(&bytes)));
        assert_ne!(c, compute_challenge::<Bn254>(&s1, &s2, &ymk, b"msh"));
        // Changing the order of the points changes the challenge
        assert_ne!(c, compute_challenge::<Bn254>(&s2, &s1, &ymk, b"msg"));
    }
}
