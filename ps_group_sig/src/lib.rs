#![cfg_attr(not(feature = "std"), no_std)]

//! # Pointcheval-Sanders group signatures
//!
//! A group authority certifies members so that a member can sign messages on behalf of the group without revealing
//! which member signed, while the authority can still open a signature to the member who created it. The scheme is
//! built on the randomizable signatures from the paper [Short Randomizable Signatures](https://eprint.iacr.org/2015/525)
//! with the credential living in G2 so that verification fits the EVM pairing precompile.
//!
//! 1. The authority runs [`setup::setup`] to get the group secret key `(x, y)` and the group public key
//!    `(g~, -g~, g~^x, g~^y)` in G1.
//! 2. A member creates a [`join::JoinRequest`] `(tau = g2^sk, tau~ = (g~^y)^sk)` for its secret `sk` and sends it to
//!    the authority which answers with a [`credential::Credential`] `(g2^u, (g2^x * tau^y)^u)` for a fresh `u`.
//! 3. To sign a message the member rerandomizes the credential with `t` and gives a Schnorr-style proof of knowledge
//!    of `sk` with blinding `k`, the challenge being the Keccak-256 hash of the randomized credential, the commitment
//!    `g~^-yk` and the message. See [`signature::Signature`].
//! 4. Anyone verifies a signature with the group public key, see [`signature::Signature::verify`].
//! 5. The authority, knowing each member's `tau~`, opens a signature with [`open::open`].
//!
//! Challenges are computed over the EVM word encoding of [`ps_stealth_utils::evm_encoding`] and the types in
//! [`export`] are the structures a Solidity verifier consumes, so signatures created here verify on chain.

extern crate alloc;

pub mod challenge;
pub mod credential;
pub mod error;
pub mod export;
pub mod join;
pub mod open;
pub mod setup;
pub mod signature;

pub mod prelude {
    pub use crate::{
        credential::{accept_user, Credential},
        error::GroupSigError,
        export::{G1Point, G2Point, GroupPublicKeyExport, SignatureExport},
        join::{JoinRequest, MemberSecret},
        open::{open, open_among},
        setup::{setup, GroupPublicKey, GroupSecretKey},
        signature::Signature,
    };
}
