//! This module contains the pure, stateless kernels for Zig-zag (sign-fold)
//! encoding and decoding.
//!
//! Zig-zag maps signed integers onto unsigned integers so that small negative and
//! small positive deltas both become small words: 0 -> 0, -1 -> 1, 1 -> 2, -2 -> 3.
//! Every block strategy stores its deltas this way. The mapping is a total,
//! branch-free bijection and is panic-free.

use num_traits::{PrimInt, Signed, Unsigned};

use crate::traits::{HasSigned, HasUnsigned};

//==================================================================================
// 1. Generic Core Logic
//==================================================================================

/// Encodes a single signed integer using the Zig-zag algorithm.
#[inline]
pub fn encode_val<T>(n: T) -> T::Unsigned
where
    T: PrimInt + Signed + HasUnsigned + bytemuck::Pod,
    T::Unsigned: bytemuck::Pod,
{
    let bits = std::mem::size_of::<T>() * 8;
    // (n << 1) ^ (n >> (BITS - 1)); the right shift is arithmetic for signed T.
    let folded = (n << 1) ^ (n >> (bits - 1));
    bytemuck::cast::<T, T::Unsigned>(folded)
}

/// Decodes a single unsigned integer back to its signed representation.
#[inline]
pub fn decode_val<U>(n: U) -> U::Signed
where
    U: PrimInt + Unsigned + HasSigned + bytemuck::Pod,
    U::Signed: PrimInt + Signed + bytemuck::Pod,
{
    // (n >> 1) ^ -(n & 1)
    let shifted = bytemuck::cast::<U, U::Signed>(n >> 1);
    let lsb = bytemuck::cast::<U, U::Signed>(n & U::one());
    shifted ^ -lsb
}

//==================================================================================
// 2. Unit Tests
//==================================================================================
