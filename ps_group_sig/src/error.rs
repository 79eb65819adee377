use ark_serialize::SerializationError;
use core::fmt;
use ps_stealth_utils::{
    error::EncodingError, randomness::RandomnessUnavailable, serde_utils::ArkSerializationError,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub enum GroupSigError {
    RandomnessUnavailable,
    /// A point or scalar received from outside could not be decoded
    Encoding(EncodingError),
    /// `tau` or `tau_tilde` is the identity, or they are not built from the same member secret
    InvalidJoinRequest,
    /// The group public key contains the identity or `g_tilde_neg` is not the negation of `g_tilde`
    InvalidPublicKey,
    ZeroCredential,
    #[serde(with = "ArkSerializationError")]
    Serialization(SerializationError),
}

impl From<RandomnessUnavailable> for GroupSigError {
    fn from(_: RandomnessUnavailable) -> Self {
        Self::RandomnessUnavailable
    }
}

impl From<EncodingError> for GroupSigError {
    fn from(e: EncodingError) -> Self {
        Self::Encoding(e)
    }
}

impl From<SerializationError> for GroupSigError {
    fn from(e: SerializationError) -> Self {
        Self::Serialization(e)
    }
}

impl fmt::Display for GroupSigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RandomnessUnavailable => write!(f, "randomness source failed"),
            Self::Encoding(e) => write!(f, "malformed input: {}", e),
            Self::InvalidJoinRequest => write!(f, "invalid join request"),
            Self::InvalidPublicKey => write!(f, "invalid group public key"),
            Self::ZeroCredential => write!(f, "credential contains the identity element"),
            Self::Serialization(e) => write!(f, "serialization error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GroupSigError {}
