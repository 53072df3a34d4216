//! This module contains the pure, stateless kernels for LEB128 (Little-Endian
//! Base 128) unsigned variable-length integer encoding and decoding.
//!
//! Run-length blocks store their delta and repeat count this way. Each byte holds
//! seven bits of magnitude, least-significant group first, and its top bit marks
//! that another byte follows. It is fully panic-free.

use num_traits::{PrimInt, Unsigned};
use std::io::Cursor;
use thiserror::Error;

/// Why a varint could not be decoded.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leb128Error {
    #[error("unexpected end of buffer")]
    UnexpectedEnd,

    #[error("integer overflow during decoding: value exceeds {0} bits")]
    Overflow(usize),
}

//==================================================================================
// 1. Public API for Single-Value Operations
//==================================================================================

/// Encodes a single unsigned integer into a LEB128 byte sequence, appending to `buffer`.
pub fn encode_one<T>(value: T, buffer: &mut Vec<u8>)
where
    T: PrimInt + Unsigned + From<u8>,
{
    let seven_bit_mask = <T as From<u8>>::from(0x7F);
    let mut current_value = value;
    loop {
        let low = current_value & seven_bit_mask;
        current_value = current_value >> 7;
        // `low` fits in seven bits, so the narrowing is lossless.
        let mut byte = low.to_u8().unwrap_or(0);
        if current_value != T::zero() {
            byte |= 0x80;
        }
        buffer.push(byte);

        if current_value == T::zero() {
            break;
        }
    }
}

/// Decodes a single unsigned integer from a LEB128 byte stream cursor.
///
/// Fails if the buffer ends before a byte without the continuation bit, or if the
/// encoded value does not fit in `T`. Non-minimal encodings (`0x80 0x00`) are accepted.
pub fn decode_one<T>(cursor: &mut Cursor<&[u8]>) -> Result<T, Leb128Error>
where
    T: PrimInt + Unsigned + From<u8>,
{
    let mut result = T::zero();
    let mut shift = 0;
    let total_bits = std::mem::size_of::<T>() * 8;

    loop {
        let pos = cursor.position() as usize;
        let byte = *cursor.get_ref().get(pos).ok_or(Leb128Error::UnexpectedEnd)?;
        cursor.set_position((pos + 1) as u64);

        // Check if adding these 7 bits would overflow the type's capacity.
        if shift >= total_bits {
            return Err(Leb128Error::Overflow(total_bits));
        }

        let payload = <T as From<u8>>::from(byte & 0x7F);

        if byte & 0x80 == 0 {
            // The final group may only set bits that still fit in T.
            if shift + 7 > total_bits && (byte >> (total_bits - shift)) > 0 {
                return Err(Leb128Error::Overflow(total_bits));
            }
            return Ok(result | (payload << shift));
        }

        result = result | (payload << shift);
        shift += 7;
    }
}
