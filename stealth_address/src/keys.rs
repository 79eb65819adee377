//! Spending and viewing keys of a stealth address recipient.
//!
//! Both keys are derived from the 65-byte signature the recipient's wallet produces over
//! [`key_derivation_message`]. As wallets sign deterministically, the keys can be recomputed whenever needed instead
//! of being stored. The first 32 bytes of the signature give the spending key and the next 32 the viewing key, each as
//! `SHA-256(half) mod n`. The chain id in the message keeps the keys of different networks apart.

use crate::{
    address::Address,
    encoding::{public_key_to_hex, Sec1Hex, Sec1Point},
    error::StealthError,
};
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::PrimeField;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{format, rand::RngCore, string::String, vec::Vec};
use ps_stealth_utils::{
    concat_slices, error::EncodingError, hashing_utils::field_elem_from_sha256,
    randomness::try_rand_non_zero,
    serde_utils::{from_prefixed_hex, ArkObjectBytes},
};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

pub const KEY_DERIVATION_BASE_MESSAGE: &str = "Sign this message to access our stealth app";

/// Size of an Ethereum `personal_sign` signature: `r || s || v`
pub const WALLET_SIGNATURE_LEN: usize = 65;

/// The message the wallet signs to derive the stealth keys for chain `chain_id`
pub fn key_derivation_message(chain_id: u64) -> String {
    format!("{}\n\nChain ID: {}", KEY_DERIVATION_BASE_MESSAGE, chain_id)
}

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
pub struct StealthPrivateKey<F: PrimeField>(#[serde_as(as = "ArkObjectBytes")] pub F);

impl<F: PrimeField> StealthPrivateKey<F> {
    pub fn new<R: RngCore>(rng: &mut R) -> Result<Self, StealthError> {
        Ok(Self(try_rand_non_zero(rng)?))
    }

    /// `SHA-256(bytes) mod n`, rejecting 0
    pub fn from_hashed_bytes(bytes: &[u8]) -> Result<Self, StealthError> {
        let key = field_elem_from_sha256::<F>(bytes);
        if key.is_zero() {
            return Err(StealthError::ZeroPrivateKey);
        }
        Ok(Self(key))
    }

    /// 32 byte big-endian form, as wallets import private keys
    pub fn to_bytes_be(&self) -> Vec<u8> {
        ps_stealth_utils::evm_encoding::field_to_word(&self.0)
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct KeyPair<G: AffineRepr> {
    pub private_key: StealthPrivateKey<G::ScalarField>,
    pub public_key: G,
}

impl<G: Sec1Point> KeyPair<G> {
    pub fn new<R: RngCore>(rng: &mut R) -> Result<Self, StealthError> {
        Ok(Self::from_private_key(StealthPrivateKey::new(rng)?))
    }

    pub fn from_private_key(private_key: StealthPrivateKey<G::ScalarField>) -> Self {
        let public_key = (G::generator() * private_key.0).into_affine();
        Self {
            private_key,
            public_key,
        }
    }

    pub fn address(&self) -> Address {
        Address::from_public_key(&self.public_key)
    }

    pub fn public_key_hex(&self) -> String {
        public_key_to_hex(&self.public_key)
    }
}

/// The public keys a recipient publishes, e.g. in a key registry contract
#[serde_as]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct StealthMetaAddress<G: Sec1Point> {
    #[serde_as(as = "Sec1Hex")]
    pub spending_public_key: G,
    #[serde_as(as = "Sec1Hex")]
    pub viewing_public_key: G,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct StealthKeys<G: AffineRepr> {
    pub spending: KeyPair<G>,
    pub viewing: KeyPair<G>,
}

impl<G: Sec1Point> StealthKeys<G> {
    /// Derive the keys from the wallet's 65-byte signature over [`key_derivation_message`]
    pub fn from_wallet_signature(signature: &[u8]) -> Result<Self, StealthError> {
        if signature.len() != WALLET_SIGNATURE_LEN {
            return Err(StealthError::InvalidSignatureLength(signature.len()));
        }
        let (spending_half, rest) = signature.split_at(32);
        let (viewing_half, last_byte) = rest.split_at(32);
        let rejoined = Zeroizing::new(concat_slices!(spending_half, viewing_half, last_byte));
        if last_byte.len() != 1 || rejoined.as_slice() != signature {
            return Err(StealthError::SignatureSplitMismatch);
        }
        let spending = StealthPrivateKey::from_hashed_bytes(spending_half)?;
        let viewing = StealthPrivateKey::from_hashed_bytes(viewing_half)?;
        Ok(Self {
            spending: KeyPair::from_private_key(spending),
            viewing: KeyPair::from_private_key(viewing),
        })
    }

    /// Same as [`Self::from_wallet_signature`] with the signature as `0x` followed by 130 hex digits, the form wallets
    /// return it in
    pub fn from_wallet_signature_hex(signature: &str) -> Result<Self, StealthError> {
        if !signature.starts_with("0x") || signature.len() != 2 + 2 * WALLET_SIGNATURE_LEN {
            return Err(StealthError::Encoding(EncodingError::InvalidHex));
        }
        let bytes = Zeroizing::new(
            from_prefixed_hex(signature).map_err(|_| EncodingError::InvalidHex)?,
        );
        Self::from_wallet_signature(&bytes)
    }

    pub fn meta_address(&self) -> StealthMetaAddress<G> {
        StealthMetaAddress {
            spending_public_key: self.spending.public_key,
            viewing_public_key: self.viewing.public_key,
        }
    }
}
