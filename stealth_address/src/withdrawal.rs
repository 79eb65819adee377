//! Digest of a meta-withdrawal. The owner of a stealth address signs it so that a relayer can withdraw the tokens to
//! `destination` and pay for gas, taking `fee` in return. The signing and submission happen outside this crate; this
//! is only the digest a contract recomputes as
//! `keccak256(abi.encode(chainId, contract, destination, token, relayer, fee[, data]))`, and the EIP-191 message hash
//! of it that `personal_sign` actually signs.

use crate::address::Address;
use ark_std::vec::Vec;
use ps_stealth_utils::{concat_slices, hashing_utils::keccak256, serde_utils::PrefixedHex};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

pub const EIP191_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n32";

#[serde_as]
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MetaWithdrawal {
    pub chain_id: u64,
    /// Contract holding the tokens of stealth addresses
    pub contract: Address,
    pub destination: Address,
    pub token: Address,
    pub relayer: Address,
    pub fee: u128,
    /// Call data for a hook run after the withdrawal. `Some` with empty data is encoded as an empty `bytes`, which
    /// differs from `None`.
    #[serde_as(as = "Option<PrefixedHex>")]
    pub data: Option<Vec<u8>>,
}

impl MetaWithdrawal {
    /// ABI encoding of the fields, `bytes` data going in the tail
    pub fn abi_encode(&self) -> Vec<u8> {
        let mut encoded = concat_slices!(
            uint_word(self.chain_id as u128),
            self.contract.to_word(),
            self.destination.to_word(),
            self.token.to_word(),
            self.relayer.to_word(),
            uint_word(self.fee)
        );
        if let Some(data) = &self.data {
            // Offset of the tail, after the 7 head words
            encoded.extend_from_slice(&uint_word(7 * 32));
            encoded.extend_from_slice(&uint_word(data.len() as u128));
            encoded.extend_from_slice(data);
            let padding = (32 - data.len() % 32) % 32;
            encoded.resize(encoded.len() + padding, 0);
        }
        encoded
    }

    pub fn digest(&self) -> [u8; 32] {
        keccak256(&self.abi_encode())
    }

    /// The hash an Ethereum wallet signs for [`Self::digest`] with `personal_sign`
    pub fn signing_hash(&self) -> [u8; 32] {
        eip191_hash(&self.digest())
    }
}

/// `keccak256("\x19Ethereum Signed Message:\n32" || digest)`
pub fn eip191_hash(digest: &[u8; 32]) -> [u8; 32] {
    keccak256(&concat_slices!(EIP191_PREFIX, digest))
}

fn uint_word(v: u128) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[16..].copy_from_slice(&v.to_be_bytes());
    word
}
