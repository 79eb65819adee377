//! Sender side: a one-time address for a payment to a recipient.
//!
//! For an ephemeral key `e`, the stealth public key is `spending_public + SHA-256(e * viewing_public) * G` and the
//! payment goes to its address. The sender then publishes the address with `e * G` as an [`Announcement`]. The
//! ephemeral key must not be reused: two payments with the same ephemeral key to the same recipient go to the same
//! address, and to different recipients correlate their shared secrets.

use crate::{
    address::Address,
    ecdh::{shared_secret, shared_secret_scalar},
    encoding::{Sec1Hex, Sec1Point},
    error::StealthError,
    keys::{KeyPair, StealthMetaAddress, StealthPrivateKey},
};
use ark_ec::CurveGroup;
use ark_std::{end_timer, rand::RngCore, start_timer};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use zeroize::Zeroizing;

/// What the sender publishes for the recipient to find the payment
#[serde_as]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Announcement<G: Sec1Point> {
    pub address: Address,
    #[serde_as(as = "Sec1Hex")]
    pub ephemeral_public_key: G,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct StealthPayment<G: Sec1Point> {
    pub address: Address,
    pub ephemeral_public_key: G,
    pub stealth_public_key: G,
}

impl<G: Sec1Point> StealthPayment<G> {
    pub fn announcement(&self) -> Announcement<G> {
        Announcement {
            address: self.address,
            ephemeral_public_key: self.ephemeral_public_key,
        }
    }
}

/// Generate a one-time address for the recipient with a fresh ephemeral key
pub fn generate<G: Sec1Point, R: RngCore>(
    rng: &mut R,
    recipient: &StealthMetaAddress<G>,
) -> Result<StealthPayment<G>, StealthError> {
    let ephemeral = KeyPair::<G>::new(rng)?;
    Ok(generate_given_ephemeral(&ephemeral.private_key, recipient))
}

pub fn generate_given_ephemeral<G: Sec1Point>(
    ephemeral_private_key: &StealthPrivateKey<G::ScalarField>,
    recipient: &StealthMetaAddress<G>,
) -> StealthPayment<G> {
    let gen_time = start_timer!(|| "Stealth address generation");
    let ephemeral_public_key = (G::generator() * ephemeral_private_key.0).into_affine();
    let shared = Zeroizing::new(shared_secret(
        ephemeral_private_key,
        &recipient.viewing_public_key,
    ));
    let offset = Zeroizing::new(shared_secret_scalar(&*shared));
    let stealth_public_key =
        (G::generator() * *offset + recipient.spending_public_key).into_affine();
    end_timer!(gen_time);
    StealthPayment {
        address: Address::from_public_key(&stealth_public_key),
        ephemeral_public_key,
        stealth_public_key,
    }
}
