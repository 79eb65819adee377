use crate::address::Address;
use ark_serialize::SerializationError;
use core::fmt;
use ps_stealth_utils::{
    error::EncodingError, randomness::RandomnessUnavailable, serde_utils::ArkSerializationError,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub enum StealthError {
    RandomnessUnavailable,
    /// A public key, address or hex string could not be decoded
    Encoding(EncodingError),
    /// Wallet signature is not 65 bytes
    InvalidSignatureLength(usize),
    /// The pieces the wallet signature was split into don't put back together to the signature
    SignatureSplitMismatch,
    /// A hashed key reduced to 0 modulo the curve order
    ZeroPrivateKey,
    /// Mixed-case address whose case doesn't match its EIP-55 checksum
    InvalidAddressChecksum,
    /// A public key recovered from a past transaction doesn't hash to the address that sent it
    RecoveredAddressMismatch { expected: Address, found: Address },
    /// The recipient neither registered stealth keys nor has a recovered public key
    RecipientKeysUnavailable,
    #[serde(with = "ArkSerializationError")]
    Serialization(SerializationError),
}

impl From<RandomnessUnavailable> for StealthError {
    fn from(_: RandomnessUnavailable) -> Self {
        Self::RandomnessUnavailable
    }
}

impl From<EncodingError> for StealthError {
    fn from(e: EncodingError) -> Self {
        Self::Encoding(e)
    }
}

impl From<SerializationError> for StealthError {
    fn from(e: SerializationError) -> Self {
        Self::Serialization(e)
    }
}

impl fmt::Display for StealthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RandomnessUnavailable => write!(f, "randomness source failed"),
            Self::Encoding(e) => write!(f, "malformed input: {}", e),
            Self::InvalidSignatureLength(l) => {
                write!(f, "wallet signature must be 65 bytes but was {} bytes", l)
            }
            Self::SignatureSplitMismatch => write!(f, "signature incorrectly generated or parsed"),
            Self::ZeroPrivateKey => write!(f, "derived private key is zero"),
            Self::InvalidAddressChecksum => write!(f, "address checksum mismatch"),
            Self::RecoveredAddressMismatch { expected, found } => write!(
                f,
                "public key not recovered properly: expected address {} but got {}",
                expected, found
            ),
            Self::RecipientKeysUnavailable => write!(f, "no public key known for the recipient"),
            Self::Serialization(e) => write!(f, "serialization error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StealthError {}
