use crate::aliases::FullDigest;
use ark_ff::{
    field_hashers::{DefaultFieldHasher, HashToField},
    PrimeField,
};
use digest::Digest;
use sha2::Sha256;
use sha3::Keccak256;
use zeroize::Zeroizing;

/// Keccak-256, the hash behind `keccak256` in Solidity
pub fn keccak256(bytes: &[u8]) -> [u8; 32] {
    Keccak256::digest(bytes).into()
}

pub fn sha256(bytes: &[u8]) -> [u8; 32] {
    Sha256::digest(bytes).into()
}

/// Interpret the Keccak-256 digest of `bytes` as a big-endian integer and reduce it modulo the order of `F`. This
/// matches `uint256(keccak256(..)) % r` on chain.
pub fn field_elem_from_keccak<F: PrimeField>(bytes: &[u8]) -> F {
    F::from_be_bytes_mod_order(&keccak256(bytes))
}

/// Same as [`field_elem_from_keccak`] but with SHA-256. The digest is zeroized as the result is often a secret key.
pub fn field_elem_from_sha256<F: PrimeField>(bytes: &[u8]) -> F {
    let digest = Zeroizing::new(sha256(bytes));
    F::from_be_bytes_mod_order(digest.as_slice())
}

/// Hash `bytes` to a uniformly distributed field element with domain separation `domain`, following
/// the `hash_to_field` construction of RFC 9380. Used as a PRF when the bytes contain a secret.
pub fn hash_to_field<F: PrimeField, D: FullDigest>(domain: &[u8], bytes: &[u8]) -> F {
    let hasher = <DefaultFieldHasher<D> as HashToField<F>>::new(domain);
    hasher.hash_to_field(bytes, 1)[0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use blake2::Blake2b512;

    #[test]
    fn known_digests() {
        assert_eq!(
            hex::encode(keccak256(b"")),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
        assert_eq!(
            hex::encode(sha256(b"abc")),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn reduction_and_domain_separation() {
        let f = field_elem_from_keccak::<ark_bn254::Fr>(b"hello");
        assert_eq!(
            f,
            ark_bn254::Fr::from_be_bytes_mod_order(&keccak256(b"hello"))
        );
        assert_ne!(f, field_elem_from_sha256::<ark_bn254::Fr>(b"hello"));

        let a = hash_to_field::<ark_bn254::Fr, Blake2b512>(b"domain-a", b"bytes");
        let b = hash_to_field::<ark_bn254::Fr, Blake2b512>(b"domain-b", b"bytes");
        assert_ne!(a, b);
        assert_eq!(
            a,
            hash_to_field::<ark_bn254::Fr, Blake2b512>(b"domain-a", b"bytes")
        );
    }
}
