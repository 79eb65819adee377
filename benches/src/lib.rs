use ark_ec::pairing::Pairing;
use ark_std::rand::RngCore;
use ps_group_sig::prelude::*;
use stealth_address::prelude::*;

pub struct Member<E: Pairing> {
    pub secret: MemberSecret<E::ScalarField>,
    pub join_request: JoinRequest<E>,
    pub credential: Credential<E>,
}

/// A group with `member_count` enrolled members
pub fn setup_group<E: Pairing, R: RngCore>(
    rng: &mut R,
    member_count: usize,
) -> (
    GroupSecretKey<E::ScalarField>,
    GroupPublicKey<E>,
    Vec<Member<E>>,
) {
    let (gsk, gpk) = setup::<E, _>(rng).unwrap();
    let members = (0..member_count)
        .map(|_| {
            let (secret, join_request) = JoinRequest::new(rng, &gpk).unwrap();
            let credential = accept_user(rng, &join_request, &gsk).unwrap();
            Member {
                secret,
                join_request,
                credential,
            }
        })
        .collect();
    (gsk, gpk, members)
}

pub fn stealth_keys<R: RngCore>(rng: &mut R) -> Secp256k1StealthKeys {
    StealthKeys {
        spending: KeyPair::new(rng).unwrap(),
        viewing: KeyPair::new(rng).unwrap(),
    }
}

/// `count` announcements of which every `stride`-th is addressed to `keys`
pub fn announcements<R: RngCore>(
    rng: &mut R,
    keys: &Secp256k1StealthKeys,
    count: usize,
    stride: usize,
) -> Vec<Secp256k1Announcement> {
    let decoy = stealth_keys(rng).meta_address();
    let meta = keys.meta_address();
    (0..count)
        .map(|i| {
            let to = if i % stride == 0 { &meta } else { &decoy };
            generate(rng, to).unwrap().announcement()
        })
        .collect()
}
