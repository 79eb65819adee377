//! Group signature on a message.
//!
//! The member rerandomizes its credential with `t` as `(sigma1 * t, sigma2 * t)` and proves knowledge of its member
//! secret with a Schnorr protocol in G1 over the base `g_y`: commitment `y_minus_k = -(g_y * k)`, challenge `c` from
//! [`compute_challenge`] and response `s = k + c * secret`. Verification checks
//! `e(g_x * c + g_y * s + y_minus_k, sigma1_random) = e(g_tilde * c, sigma2_random)` which holds as
//! `g_y * s + y_minus_k = g_y * (c * secret)`, and that `c` is the challenge of the signature and message.
//!
//! `k` must never repeat for two different challenges signed with the same member secret. Given two signatures with
//! the same `k`, `s1 - s2 = (c1 - c2) * secret` reveals the secret. [`Signature::new`] hedges `k` by hashing fresh
//! randomness with the secret, the message, the credential and `t`, and [`Signature::new_deterministic`] derives
//! both `t` and `k` from the secret, the credential and the message.

use crate::{
    challenge::compute_challenge, credential::Credential, error::GroupSigError,
    join::MemberSecret, setup::GroupPublicKey,
};
use ark_ec::{pairing::Pairing, AffineRepr, CurveGroup};
use ark_ff::{PrimeField, Zero};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{end_timer, ops::Neg, rand::RngCore, start_timer, vec::Vec};
use ps_stealth_utils::{
    aliases::FullDigest,
    hashing_utils::hash_to_field,
    multi_pairing,
    randomness::{try_rand_non_zero, try_random_bytes},
    serde_utils::ArkObjectBytes,
};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use sha2::Sha256;
use zeroize::Zeroizing;

pub const NONCE_DOMAIN: &[u8] = b"PS-GROUP-SIG-NONCE";
pub const RERANDOMIZATION_DOMAIN: &[u8] = b"PS-GROUP-SIG-RERANDOMIZATION";

#[serde_as]
#[derive(
    Clone, PartialEq, Eq, Debug, CanonicalSerialize, CanonicalDeserialize, Serialize, Deserialize,
)]
pub struct Signature<E: Pairing> {
    /// `sigma1 * t`
    #[serde_as(as = "ArkObjectBytes")]
    pub sigma1_random: E::G2Affine,
    /// `sigma2 * t`
    #[serde_as(as = "ArkObjectBytes")]
    pub sigma2_random: E::G2Affine,
    /// `-(g_y * k)`
    #[serde_as(as = "ArkObjectBytes")]
    pub y_minus_k: E::G1Affine,
    #[serde_as(as = "ArkObjectBytes")]
    pub challenge: E::ScalarField,
    /// `k + challenge * secret`
    #[serde_as(as = "ArkObjectBytes")]
    pub response: E::ScalarField,
}

impl<E: Pairing> Signature<E> {
    /// Sign `message` with a fresh `t`. `k` is hashed from the member secret, the message, the credential, `t` and
    /// 32 fresh random bytes, so a weak randomness source alone doesn't make it repeat across messages or across
    /// credentials of the same secret.
    pub fn new<R: RngCore>(
        rng: &mut R,
        message: &[u8],
        credential: &Credential<E>,
        gpk: &GroupPublicKey<E>,
        secret: &MemberSecret<E::ScalarField>,
    ) -> Result<Self, GroupSigError> {
        if !credential.is_non_zero() {
            return Err(GroupSigError::ZeroCredential);
        }
        let sign_time = start_timer!(|| "Group signing");
        let t = Zeroizing::new(try_rand_non_zero::<E::ScalarField, _>(rng)?);
        let seed = Zeroizing::new(try_random_bytes::<32, _>(rng)?);
        let mut cred_bytes = Zeroizing::new(Vec::new());
        credential.serialize_compressed(&mut *cred_bytes)?;
        let mut t_bytes = Zeroizing::new(Vec::new());
        t.serialize_compressed(&mut *t_bytes)?;
        let k = Zeroizing::new(hashed_nonce::<E::ScalarField, Sha256>(
            NONCE_DOMAIN,
            secret,
            &[
                message,
                cred_bytes.as_slice(),
                t_bytes.as_slice(),
                seed.as_slice(),
            ],
        )?);
        let sig = Self::new_given_randomness(&t, &k, message, credential, gpk, secret);
        end_timer!(sign_time);
        Ok(sig)
    }

    /// Sign `message` with `t` and `k` derived from the member secret, the credential and the message. Signing the
    /// same message twice gives the same signature, so the two are linkable.
    pub fn new_deterministic<D: FullDigest>(
        message: &[u8],
        credential: &Credential<E>,
        gpk: &GroupPublicKey<E>,
        secret: &MemberSecret<E::ScalarField>,
    ) -> Result<Self, GroupSigError> {
        if !credential.is_non_zero() {
            return Err(GroupSigError::ZeroCredential);
        }
        let mut cred_bytes = Zeroizing::new(Vec::new());
        credential.serialize_compressed(&mut *cred_bytes)?;
        let t = Zeroizing::new(hashed_nonce::<E::ScalarField, D>(
            RERANDOMIZATION_DOMAIN,
            secret,
            &[cred_bytes.as_slice(), message],
        )?);
        let k = Zeroizing::new(hashed_nonce::<E::ScalarField, D>(
            NONCE_DOMAIN,
            secret,
            &[cred_bytes.as_slice(), message],
        )?);
        // Happens with negligible probability but a zero `t` would give an unverifiable signature
        if t.is_zero() {
            return Err(GroupSigError::ZeroCredential);
        }
        Ok(Self::new_given_randomness(
            &t, &k, message, credential, gpk, secret,
        ))
    }

    /// Sign with the given rerandomization `t` and Schnorr blinding `k`. Both must be fresh for each message, see the
    /// module docs.
    pub fn new_given_randomness(
        t: &E::ScalarField,
        k: &E::ScalarField,
        message: &[u8],
        credential: &Credential<E>,
        gpk: &GroupPublicKey<E>,
        secret: &MemberSecret<E::ScalarField>,
    ) -> Self {
        let sigmas = E::G2::normalize_batch(&[credential.sigma1 * t, credential.sigma2 * t]);
        let y_minus_k = (gpk.g_y * k).neg().into_affine();
        let challenge = compute_challenge::<E>(&sigmas[0], &sigmas[1], &y_minus_k, message);
        let response = *k + challenge * secret.0;
        Self {
            sigma1_random: sigmas[0],
            sigma2_random: sigmas[1],
            y_minus_k,
            challenge,
            response,
        }
    }

    /// Checks `e(g_x * c + g_y * s + y_minus_k, sigma1_random) * e(-g_tilde * c, sigma2_random) = 1`. A signature
    /// whose `sigma1_random` is the identity is rejected as it would satisfy the equation for any `sigma2_random`.
    pub fn verify_pairing(&self, gpk: &GroupPublicKey<E>) -> bool {
        if self.sigma1_random.is_zero() || !gpk.is_valid() {
            return false;
        }
        let pairing_time = start_timer!(|| "Group signature pairing check");
        let lhs = gpk.g_x * self.challenge + gpk.g_y * self.response + self.y_minus_k;
        let rhs = gpk.g_tilde_neg * self.challenge;
        let res = multi_pairing! {
            lhs, self.sigma1_random;
            rhs, self.sigma2_random
        };
        end_timer!(pairing_time);
        res.is_zero()
    }

    /// Checks that the challenge is the hash of the randomized credential, the commitment and `message`
    pub fn verify_hash(&self, message: &[u8]) -> bool {
        self.challenge
            == compute_challenge::<E>(
                &self.sigma1_random,
                &self.sigma2_random,
                &self.y_minus_k,
                message,
            )
    }

    /// A signature is valid only if both [`Self::verify_hash`] and [`Self::verify_pairing`] hold
    pub fn verify(&self, message: &[u8], gpk: &GroupPublicKey<E>) -> bool {
        // The hash is cheaper so check it first
        self.verify_hash(message) && self.verify_pairing(gpk)
    }
}

/// Hash `domain`, the member secret and `parts` to a field element. The intermediate buffer holding the secret is
/// zeroized on every path.
fn hashed_nonce<F: PrimeField, D: FullDigest>(
    domain: &[u8],
    secret: &MemberSecret<F>,
    parts: &[&[u8]],
) -> Result<F, GroupSigError> {
    let mut bytes = Zeroizing::new(Vec::new());
    secret.0.serialize_compressed(&mut *bytes)?;
    for p in parts {
        // Length prefix keeps the split between the parts unambiguous
        bytes.extend_from_slice(&(p.len() as u64).to_be_bytes());
        bytes.extend_from_slice(p);
    }
    Ok(hash_to_field::<F, D>(domain, &bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        credential::accept_user,
        join::JoinRequest,
        setup::{setup, GroupSecretKey},
    };
    use ark_bls12_381::Bls12_381;
    use ark_bn254::Bn254;
    use ark_std::{
        rand::{rngs::StdRng, SeedableRng},
        UniformRand,
    };
    use blake2::Blake2b512;
    use test_utils::test_serialization;

    #[test]
    fn sign_verify() {
        let mut rng = StdRng::seed_from_u64(0u64);

        fn check<E: Pairing>(rng: &mut StdRng) {
            let (gsk, gpk) = setup::<E, _>(rng).unwrap();
            let (secret, request) = JoinRequest::new(rng, &gpk).unwrap();
            let credential = accept_user(rng, &request, &gsk).unwrap();

            let message = b"transfer 10 tokens";
            let sig = Signature::new(rng, message, &credential, &gpk, &secret).unwrap();
            assert!(sig.verify_pairing(&gpk));
            assert!(sig.verify_hash(message));
            assert!(sig.verify(message, &gpk));
            assert!(!sig.verify(b"transfer 11 tokens", &gpk));

            // Two signatures on the same message are unlinkable
            let sig1 = Signature::new(rng, message, &credential, &gpk, &secret).unwrap();
            assert!(sig1.verify(message, &gpk));
            assert_ne!(sig.sigma1_random, sig1.sigma1_random);
            assert_ne!(sig.y_minus_k, sig1.y_minus_k);

            // Doesn't verify under another group's key
            let (_, other_gpk) = setup::<E, _>(rng).unwrap();
            assert!(!sig.verify(message, &other_gpk));

            // Wrong member secret
            let (other_secret, _) = JoinRequest::new(rng, &gpk).unwrap();
            let forged = Signature::new(rng, message, &credential, &gpk, &other_secret).unwrap();
            assert!(forged.verify_hash(message));
            assert!(!forged.verify_pairing(&gpk));

            // Tampered response
            let mut tampered = sig.clone();
            tampered.response += E::ScalarField::from(1u64);
            assert!(!tampered.verify(message, &gpk));
        }

        check::<Bn254>(&mut rng);
        check::<Bls12_381>(&mut rng);
    }

    #[test]
    fn fixed_scalars_hello() {
        fn check<E: Pairing>() {
            let gsk = GroupSecretKey {
                x: E::ScalarField::from(3u64),
                y: E::ScalarField::from(5u64),
            };
            let gpk =
                GroupPublicKey::<E>::new_given_generator_exponent(&E::ScalarField::from(1u64), &gsk);
            let secret = MemberSecret(E::ScalarField::from(7u64));
            let request = JoinRequest::new_given_secret(&secret, &gpk);
            let credential =
                Credential::new_given_randomness(&E::ScalarField::from(2u64), &request, &gsk);
            assert!(credential.verify(&request, &gpk));

            let sig = Signature::new_given_randomness(
                &E::ScalarField::from(11u64),
                &E::ScalarField::from(13u64),
                b"hello",
                &credential,
                &gpk,
                &secret,
            );
            assert!(sig.verify(b"hello", &gpk));
            assert_eq!(
                sig.response,
                E::ScalarField::from(13u64) + sig.challenge * E::ScalarField::from(7u64)
            );
            assert!(!sig.verify_hash(b"hellp"));
            assert!(!sig.verify(b"hellp", &gpk));
        }

        check::<Bn254>();
        check::<Bls12_381>();
    }

    #[test]
    fn message_bit_flips() {
        let mut rng = StdRng::seed_from_u64(0u64);
        let (gsk, gpk) = setup::<Bn254, _>(&mut rng).unwrap();
        let (secret, request) = JoinRequest::new(&mut rng, &gpk).unwrap();
        let credential = accept_user(&mut rng, &request, &gsk).unwrap();

        let message = b"pay 0xdeadbeef".to_vec();
        let sig = Signature::new(&mut rng, &message, &credential, &gpk, &secret).unwrap();
        for i in 0..message.len() * 8 {
            let mut flipped = message.clone();
            flipped[i / 8] ^= 1 << (i % 8);
            assert!(!sig.verify_hash(&flipped));
        }
        // Appending or dropping bytes also changes the challenge
        assert!(!sig.verify_hash(&message[..message.len() - 1]));
        let mut longer = message.clone();
        longer.push(0);
        assert!(!sig.verify_hash(&longer));
    }

    #[test]
    fn rejects_degenerate_signatures() {
        let mut rng = StdRng::seed_from_u64(0u64);
        let (gsk, gpk) = setup::<Bn254, _>(&mut rng).unwrap();
        let (secret, request) = JoinRequest::new(&mut rng, &gpk).unwrap();
        let credential = accept_user(&mut rng, &request, &gsk).unwrap();

        // Identity sigmas with a matching challenge pass the hash check but not the pairing check
        let y_minus_k = ark_bn254::G1Affine::rand(&mut rng);
        let zero = ark_bn254::G2Affine::zero();
        let challenge = compute_challenge::<Bn254>(&zero, &zero, &y_minus_k, b"m");
        let sig = Signature::<Bn254> {
            sigma1_random: zero,
            sigma2_random: zero,
            y_minus_k,
            challenge,
            response: ark_bn254::Fr::rand(&mut rng),
        };
        assert!(sig.verify_hash(b"m"));
        assert!(!sig.verify(b"m", &gpk));

        // A zero credential can't be used to sign
        let zero_cred = Credential::<Bn254> {
            sigma1: zero,
            sigma2: zero,
        };
        assert!(matches!(
            Signature::new(&mut rng, b"m", &zero_cred, &gpk, &secret),
            Err(GroupSigError::ZeroCredential)
        ));

        // Public key with a wrong `g_tilde_neg`
        let sig = Signature::new(&mut rng, b"m", &credential, &gpk, &secret).unwrap();
        let mut bad_gpk = gpk.clone();
        bad_gpk.g_tilde_neg = gpk.g_tilde;
        assert!(!sig.verify(b"m", &bad_gpk));
    }

    #[test]
    fn deterministic_signatures() {
        let mut rng = StdRng::seed_from_u64(0u64);
        let (gsk, gpk) = setup::<Bls12_381, _>(&mut rng).unwrap();
        let (secret, request) = JoinRequest::new(&mut rng, &gpk).unwrap();
        let credential = accept_user(&mut rng, &request, &gsk).unwrap();

        let sig =
            Signature::new_deterministic::<Blake2b512>(b"m1", &credential, &gpk, &secret).unwrap();
        assert!(sig.verify(b"m1", &gpk));
        assert_eq!(
            sig,
            Signature::new_deterministic::<Blake2b512>(b"m1", &credential, &gpk, &secret).unwrap()
        );

        // A different message gets a different nonce, so the secret doesn't leak
        let sig2 =
            Signature::new_deterministic::<Blake2b512>(b"m2", &credential, &gpk, &secret).unwrap();
        assert!(sig2.verify(b"m2", &gpk));
        assert_ne!(sig.y_minus_k, sig2.y_minus_k);
        assert_ne!(sig.sigma1_random, sig2.sigma1_random);

        test_serialization!(Signature<Bls12_381>, sig);

        // `t` and `k` are the keyed hashes of the credential and message
        let mut cred_bytes = Vec::new();
        credential.serialize_compressed(&mut cred_bytes).unwrap();
        let t = hashed_nonce::<_, Blake2b512>(
            RERANDOMIZATION_DOMAIN,
            &secret,
            &[&cred_bytes, b"m1"],
        )
        .unwrap();
        let k = hashed_nonce::<_, Blake2b512>(NONCE_DOMAIN, &secret, &[&cred_bytes, b"m1"])
            .unwrap();
        assert_eq!(
            sig,
            Signature::new_given_randomness(&t, &k, b"m1", &credential, &gpk, &secret)
        );
        // Moving bytes between the parts changes the nonce
        assert_ne!(
            hashed_nonce::<ark_bls12_381::Fr, Blake2b512>(NONCE_DOMAIN, &secret, &[b"ab", b"c"])
                .unwrap(),
            hashed_nonce::<ark_bls12_381::Fr, Blake2b512>(NONCE_DOMAIN, &secret, &[b"a", b"bc"])
                .unwrap()
        );
    }

    #[test]
    fn repeated_randomness_across_credentials() {
        // Two credentials for the same secret and an RNG replaying the same output for both signatures
        let mut rng = StdRng::seed_from_u64(0u64);
        let (gsk, gpk) = setup::<Bn254, _>(&mut rng).unwrap();
        let (secret, request) = JoinRequest::new(&mut rng, &gpk).unwrap();
        let credential1 = accept_user(&mut rng, &request, &gsk).unwrap();
        let credential2 = accept_user(&mut rng, &request, &gsk).unwrap();
        assert_ne!(credential1, credential2);

        let sig1 = Signature::new(
            &mut StdRng::seed_from_u64(9u64),
            b"m",
            &credential1,
            &gpk,
            &secret,
        )
        .unwrap();
        let sig2 = Signature::new(
            &mut StdRng::seed_from_u64(9u64),
            b"m",
            &credential2,
            &gpk,
            &secret,
        )
        .unwrap();
        assert!(sig1.verify(b"m", &gpk));
        assert!(sig2.verify(b"m", &gpk));
        assert_ne!(sig1.challenge, sig2.challenge);

        // Different `k`, so the responses don't give away the secret
        assert_ne!(sig1.y_minus_k, sig2.y_minus_k);
        let extracted = (sig1.response - sig2.response)
            / (sig1.challenge - sig2.challenge);
        assert_ne!(extracted, secret.0);

        // Same credential and replayed randomness gives the same signature, not a different challenge with the same `k`
        let sig3 = Signature::new(
            &mut StdRng::seed_from_u64(9u64),
            b"m",
            &credential1,
            &gpk,
            &secret,
        )
        .unwrap();
        assert_eq!(sig1, sig3);
    }

    #[test]
    fn failing_rng() {
        let mut rng = StdRng::seed_from_u64(0u64);
        let (gsk, gpk) = setup::<Bn254, _>(&mut rng).unwrap();
        let (secret, request) = JoinRequest::new(&mut rng, &gpk).unwrap();
        let credential = accept_user(&mut rng, &request, &gsk).unwrap();
        assert!(matches!(
            Signature::new(&mut test_utils::FailingRng, b"m", &credential, &gpk, &secret),
            Err(GroupSigError::RandomnessUnavailable)
        ));
    }
}
