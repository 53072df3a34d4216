//! This module defines shared traits used across the kernels and block decoders.

use crate::error::UnpackError;

/// The largest number of values a single packed word can carry.
pub const MAX_VALUES_PER_WORD: usize = 240;

/// A trait that maps a signed integer type to its unsigned counterpart.
pub trait HasUnsigned {
    type Unsigned;
}

/// A trait that maps an unsigned integer type to its signed counterpart.
pub trait HasSigned {
    type Signed;
}

// Implement the traits for all primitive integer types.
macro_rules! impl_signed_unsigned_pair {
    ($S:ty, $U:ty) => {
        impl HasUnsigned for $S {
            type Unsigned = $U;
        }
        impl HasSigned for $U {
            type Signed = $S;
        }
    };
}

impl_signed_unsigned_pair!(i8, u8);
impl_signed_unsigned_pair!(i16, u16);
impl_signed_unsigned_pair!(i32, u32);
impl_signed_unsigned_pair!(i64, u64);
impl_signed_unsigned_pair!(i128, u128);

/// The word-oriented bit-unpacking capability consumed by the Packed-Delta decoder.
///
/// Implementations must be pure: the same word always unpacks to the same values,
/// and `count` must agree with the length `unpack` reports for that word.
pub trait WordUnpacker {
    /// Unpacks `word` into the front of `dst`, returning how many values were written.
    fn unpack(
        &self,
        word: u64,
        dst: &mut [u64; MAX_VALUES_PER_WORD],
    ) -> Result<usize, UnpackError>;

    /// Returns how many values `word` holds without materializing them.
    fn count(&self, word: u64) -> Result<usize, UnpackError>;

    /// Sums `count` over every complete 8-byte big-endian word in `bytes`.
    /// A trailing fragment shorter than 8 bytes is not consumed.
    fn count_words(&self, bytes: &[u8]) -> Result<usize, UnpackError> {
        let mut total = 0usize;
        let mut rest = bytes;
        while let Some((word, tail)) = rest.split_first_chunk::<8>() {
            total += self.count(u64::from_be_bytes(*word))?;
            rest = tail;
        }
        Ok(total)
    }
}

impl<U: WordUnpacker + ?Sized> WordUnpacker for &U {
    fn unpack(
        &self,
        word: u64,
        dst: &mut [u64; MAX_VALUES_PER_WORD],
    ) -> Result<usize, UnpackError> {
        (**self).unpack(word, dst)
    }

    fn count(&self, word: u64) -> Result<usize, UnpackError> {
        (**self).count(word)
    }
}
