//! Public keys of a recipient who didn't register stealth keys.
//!
//! Such a recipient's public key can be recovered from the signature of any transaction it sent. Recovery itself
//! needs the chain's transaction history and happens outside this crate, but the recovered key must hash to the
//! sender's address before anything is sent to it, otherwise the funds would go to keys nobody holds. With a single
//! public key, it serves as both the spending and the viewing key, so anyone who can see the recipient's transactions
//! can also link its stealth payments.

use crate::{address::Address, encoding::Sec1Point, error::StealthError, keys::StealthMetaAddress};

/// Check that `public_key` is the key of `sender`
pub fn verify_recovered_public_key<G: Sec1Point>(
    public_key: &G,
    sender: &Address,
) -> Result<(), StealthError> {
    let found = Address::from_public_key(public_key);
    if found != *sender {
        return Err(StealthError::RecoveredAddressMismatch {
            expected: *sender,
            found,
        });
    }
    Ok(())
}

/// Keys to send to `recipient`: its registered stealth keys if any, else its recovered public key used for both
pub fn resolve_recipient_keys<G: Sec1Point>(
    recipient: &Address,
    registered: Option<&StealthMetaAddress<G>>,
    recovered_public_key: Option<&G>,
) -> Result<StealthMetaAddress<G>, StealthError> {
    if let Some(keys) = registered {
        return Ok(*keys);
    }
    let public_key = recovered_public_key.ok_or(StealthError::RecipientKeysUnavailable)?;
    verify_recovered_public_key(public_key, recipient)?;
    Ok(StealthMetaAddress {
        spending_public_key: *public_key,
        viewing_public_key: *public_key,
    })
}
