//! Sampling that surfaces a failing randomness source instead of panicking inside the RNG

use ark_ff::PrimeField;
use ark_std::{rand::RngCore, vec};
use core::fmt;
use serde::Serialize;
use zeroize::Zeroize;

/// The random number generator could not produce bytes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RandomnessUnavailable;

impl fmt::Display for RandomnessUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "randomness source failed")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RandomnessUnavailable {}

pub fn try_random_bytes<const N: usize, R: RngCore>(
    rng: &mut R,
) -> Result<[u8; N], RandomnessUnavailable> {
    let mut bytes = [0u8; N];
    rng.try_fill_bytes(&mut bytes)
        .map_err(|_| RandomnessUnavailable)?;
    Ok(bytes)
}

/// Uniform element of `F`. Twice the byte size of the field is drawn so the bias of the modular reduction is
/// negligible.
pub fn try_rand<F: PrimeField, R: RngCore>(rng: &mut R) -> Result<F, RandomnessUnavailable> {
    let mut bytes = vec![0u8; 2 * ((F::MODULUS_BIT_SIZE as usize + 7) / 8)];
    let res = rng.try_fill_bytes(&mut bytes);
    let elem = F::from_le_bytes_mod_order(&bytes);
    bytes.zeroize();
    res.map_err(|_| RandomnessUnavailable)?;
    Ok(elem)
}

/// Uniform non-zero element of `F`
pub fn try_rand_non_zero<F: PrimeField, R: RngCore>(
    rng: &mut R,
) -> Result<F, RandomnessUnavailable> {
    loop {
        let elem = try_rand::<F, R>(rng)?;
        if !elem.is_zero() {
            return Ok(elem);
        }
    }
}
