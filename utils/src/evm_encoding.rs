//! Fixed-width big-endian encoding of field elements and affine points.
//!
//! This is the layout Solidity contracts and the EVM pairing precompiles work with. Every base field element becomes
//! one big-endian "word" whose size is the byte size of the field rounded up to a multiple of 32, so 32 bytes for BN254
//! and 64 bytes for BLS12-381 (as in EIP-2537). Elements of an extension field are written highest coefficient first,
//! so a G2 point over `Fq2` becomes `x.c1, x.c0, y.c1, y.c0`. The point at infinity is written as all-zero words.

use crate::error::EncodingError;
use ark_ec::{
    short_weierstrass::{Affine, SWCurveConfig},
    AffineRepr,
};
use ark_ff::{BigInteger, Field, PrimeField};
use ark_std::{vec, vec::Vec};

pub const WORD_SIZE: usize = 32;

/// Number of bytes of a word holding an element of `F`
pub fn word_len<F: PrimeField>() -> usize {
    let byte_size = (F::MODULUS_BIT_SIZE as usize + 7) / 8;
    ((byte_size + WORD_SIZE - 1) / WORD_SIZE) * WORD_SIZE
}

pub fn field_to_word<F: PrimeField>(elem: &F) -> Vec<u8> {
    let len = word_len::<F>();
    let bytes = elem.into_bigint().to_bytes_be();
    if bytes.len() >= len {
        // The element is smaller than the modulus so the surplus leading bytes are all 0
        bytes[bytes.len() - len..].to_vec()
    } else {
        let mut word = vec![0u8; len - bytes.len()];
        word.extend_from_slice(&bytes);
        word
    }
}

/// Decode a word, rejecting integers that are not reduced modulo the field order
pub fn field_from_word<F: PrimeField>(word: &[u8]) -> Result<F, EncodingError> {
    let len = word_len::<F>();
    if word.len() != len {
        return Err(EncodingError::InvalidLength {
            expected: len,
            found: word.len(),
        });
    }
    let elem = F::from_be_bytes_mod_order(word);
    if field_to_word(&elem) != word {
        return Err(EncodingError::NotInField);
    }
    Ok(elem)
}

/// Coefficients of `elem` over the base prime field as words, highest coefficient first
pub fn extension_to_words<F: Field>(elem: &F) -> Vec<Vec<u8>> {
    let mut coeffs = elem.to_base_prime_field_elements().collect::<Vec<_>>();
    coeffs.reverse();
    coeffs.iter().map(field_to_word).collect()
}

/// Inverse of [`extension_to_words`]
pub fn extension_from_words<F: Field>(words: &[&[u8]]) -> Result<F, EncodingError> {
    let degree = F::extension_degree() as usize;
    if words.len() != degree {
        return Err(EncodingError::InvalidWordCount {
            expected: degree,
            found: words.len(),
        });
    }
    let mut coeffs = words
        .iter()
        .map(|w| field_from_word::<F::BasePrimeField>(w))
        .collect::<Result<Vec<_>, _>>()?;
    coeffs.reverse();
    F::from_base_prime_field_elems(&coeffs).ok_or(EncodingError::NotInField)
}

/// Number of words in the encoding of a point of `G`
pub fn point_word_count<G: AffineRepr>() -> usize {
    2 * G::BaseField::extension_degree() as usize
}

/// Words of `x` followed by words of `y`
pub fn point_to_words<G: AffineRepr>(point: &G) -> Vec<Vec<u8>> {
    match point.xy() {
        Some((x, y)) => {
            let mut words = extension_to_words(x);
            words.append(&mut extension_to_words(y));
            words
        }
        None => vec![
            vec![0u8; word_len::<<G::BaseField as Field>::BasePrimeField>()];
            point_word_count::<G>()
        ],
    }
}

/// Concatenation of [`point_to_words`], the layout of `abi.encodePacked` over the coordinates
pub fn point_to_packed_bytes<G: AffineRepr>(point: &G) -> Vec<u8> {
    point_to_words(point).concat()
}

/// Affine points that can be imported from EVM words. Import validates that the point is on the curve and in the
/// prime order subgroup so no arithmetic ever runs on a malformed point.
pub trait EvmAffine: AffineRepr {
    fn from_coordinates(x: Self::BaseField, y: Self::BaseField) -> Result<Self, EncodingError>;

    fn from_words(words: &[&[u8]]) -> Result<Self, EncodingError> {
        let count = point_word_count::<Self>();
        if words.len() != count {
            return Err(EncodingError::InvalidWordCount {
                expected: count,
                found: words.len(),
            });
        }
        let len = word_len::<<Self::BaseField as Field>::BasePrimeField>();
        if words
            .iter()
            .all(|w| w.len() == len && w.iter().all(|b| *b == 0))
        {
            return Ok(Self::zero());
        }
        let (x_words, y_words) = words.split_at(count / 2);
        let x = extension_from_words(x_words)?;
        let y = extension_from_words(y_words)?;
        Self::from_coordinates(x, y)
    }
}

impl<P: SWCurveConfig> EvmAffine for Affine<P> {
    fn from_coordinates(x: P::BaseField, y: P::BaseField) -> Result<Self, EncodingError> {
        let point = Affine::<P>::new_unchecked(x, y);
        if !point.is_on_curve() {
            return Err(EncodingError::NotOnCurve);
        }
        if !point.is_in_correct_subgroup_assuming_on_curve() {
            return Err(EncodingError::NotInSubgroup);
        }
        Ok(point)
    }
}
