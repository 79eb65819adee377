#![cfg_attr(not(feature = "std"), no_std)]

//! # Stealth addresses
//!
//! Lets a sender pay a recipient at a fresh one-time address that only the sender and the recipient can link to the
//! recipient, in the dual-key scheme used by Umbra-style stealth payments on EVM chains.
//!
//! 1. The recipient derives a spending and a viewing key pair from a wallet signature with
//!    [`keys::StealthKeys::from_wallet_signature`] and publishes the public keys as a [`keys::StealthMetaAddress`].
//! 2. The sender runs [`generator::generate`] which picks an ephemeral key, pays to the address of
//!    `spending_public + SHA-256(ECDH(ephemeral, viewing_public)) * G` and announces the address with the ephemeral
//!    public key.
//! 3. The recipient runs [`scanner::scan`] over the announcements and recovers the private key of each address
//!    addressed to it as `spending + SHA-256(ECDH(viewing, ephemeral_public))`.
//! 4. To withdraw through a relayer, the private key of the stealth address signs the digest of a
//!    [`withdrawal::MetaWithdrawal`].
//!
//! Everything is generic over the curve through [`encoding::Sec1Point`] and the type aliases below fix it to
//! secp256k1, the curve of Ethereum accounts.

extern crate alloc;

pub mod address;
pub mod ecdh;
pub mod encoding;
pub mod error;
pub mod generator;
pub mod keys;
pub mod recovery;
pub mod scanner;
pub mod withdrawal;

pub type Secp256k1KeyPair = keys::KeyPair<ark_secp256k1::Affine>;
pub type Secp256k1StealthKeys = keys::StealthKeys<ark_secp256k1::Affine>;
pub type Secp256k1MetaAddress = keys::StealthMetaAddress<ark_secp256k1::Affine>;
pub type Secp256k1Announcement = generator::Announcement<ark_secp256k1::Affine>;

pub mod prelude {
    pub use crate::{
        address::Address,
        encoding::Sec1Point,
        error::StealthError,
        generator::{generate, Announcement, StealthPayment},
        keys::{key_derivation_message, KeyPair, StealthKeys, StealthMetaAddress, StealthPrivateKey},
        recovery::{resolve_recipient_keys, verify_recovered_public_key},
        scanner::{scan, scan_all, try_unlock, UnlockResult},
        withdrawal::MetaWithdrawal,
        Secp256k1Announcement, Secp256k1KeyPair, Secp256k1MetaAddress, Secp256k1StealthKeys,
    };
}
