//! This module contains the Simple8b word unpacker, the default `WordUnpacker`
//! used for Packed-Delta integer blocks.
//!
//! A Simple8b word is a 64-bit value whose top 4 bits select a layout and whose
//! low 60 bits carry `n` values of `bits` width each, least-significant value
//! first. Selectors 0 and 1 carry no payload bits and stand for runs of 240 or
//! 120 ones, the most common delta in regularly spaced timestamps.

use crate::error::UnpackError;
use crate::traits::{WordUnpacker, MAX_VALUES_PER_WORD};

/// Number of high bits used by the selector.
pub const SELECTOR_BITS: u32 = 4;

/// Largest value representable by a packed slot (the 60-bit, single value layout).
pub const MAX_VALUE: u64 = (1 << 60) - 1;

/// One row of the selector table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Values stored in the word.
    pub n: usize,
    /// Width of each value in bits. Zero means every value is 1.
    pub bits: u32,
}

/// The selector table, indexed by the top 4 bits of a word.
pub const LAYOUTS: [Layout; 16] = [
    Layout { n: 240, bits: 0 },
    Layout { n: 120, bits: 0 },
    Layout { n: 60, bits: 1 },
    Layout { n: 30, bits: 2 },
    Layout { n: 20, bits: 3 },
    Layout { n: 15, bits: 4 },
    Layout { n: 12, bits: 5 },
    Layout { n: 10, bits: 6 },
    Layout { n: 8, bits: 7 },
    Layout { n: 7, bits: 8 },
    Layout { n: 6, bits: 10 },
    Layout { n: 5, bits: 12 },
    Layout { n: 4, bits: 15 },
    Layout { n: 3, bits: 20 },
    Layout { n: 2, bits: 30 },
    Layout { n: 1, bits: 60 },
];

/// Every 4-bit selector has a layout, so no word is rejected by Simple8b.
#[inline]
fn layout_of(word: u64) -> Layout {
    LAYOUTS[(word >> (64 - SELECTOR_BITS)) as usize]
}

/// Stateless Simple8b unpacker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Simple8b;

impl WordUnpacker for Simple8b {
    fn unpack(
        &self,
        word: u64,
        dst: &mut [u64; MAX_VALUES_PER_WORD],
    ) -> Result<usize, UnpackError> {
        let Layout { n, bits } = layout_of(word);
        let out = &mut dst[..n];
        if bits == 0 {
            out.fill(1);
            return Ok(n);
        }

        let mask = (1u64 << bits) - 1;
        let mut payload = word;
        for slot in out.iter_mut() {
            *slot = payload & mask;
            payload >>= bits;
        }
        Ok(n)
    }

    #[inline]
    fn count(&self, word: u64) -> Result<usize, UnpackError> {
        Ok(layout_of(word).n)
    }
}
