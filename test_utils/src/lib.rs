use ark_std::rand::{Error, RngCore};
use core::num::NonZeroU32;

#[macro_use]
pub mod serialization;

/// An RNG whose source is exhausted. `try_fill_bytes` always fails while the infallible methods return zeros.
pub struct FailingRng;

impl RngCore for FailingRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0)
    }

    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), Error> {
        Err(Error::from(NonZeroU32::new(Error::CUSTOM_START).unwrap()))
    }
}
