#![cfg_attr(not(feature = "std"), no_std)]

//! Common code shared by the PS group signature and stealth address crates.
//!
//! - [`evm_encoding`]: fixed-width big-endian encoding of field elements and affine points, the byte layout
//!   EVM contracts and precompiles expect.
//! - [`hashing_utils`]: Keccak-256 and SHA-256 helpers and hashing bytes to a field element.
//! - [`randomness`]: fallible sampling of field elements so that a failing randomness source propagates as an error.

extern crate alloc;

#[macro_use]
pub mod macros;
pub mod aliases;
pub mod error;
pub mod evm_encoding;
pub mod hashing_utils;
pub mod randomness;
pub mod serde_utils;
