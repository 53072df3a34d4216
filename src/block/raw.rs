//! Decoder for raw blocks: every value is stored as an 8-byte big-endian zig-zag
//! delta from the previous value (the first from zero).

use crate::block::format::WORD_LEN;
use crate::block::size_destination;
use crate::config::DecoderConfig;
use crate::error::TsmIntError;
use crate::kernels::zigzag;

/// Number of values a raw payload holds.
pub(crate) fn value_count(payload: &[u8]) -> Result<usize, TsmIntError> {
    if payload.len() % WORD_LEN != 0 {
        return Err(TsmIntError::MalformedLength(payload.len()));
    }
    Ok(payload.len() / WORD_LEN)
}

pub(crate) fn decode(
    payload: &[u8],
    dst: &mut Vec<i64>,
    config: &DecoderConfig,
) -> Result<(), TsmIntError> {
    let count = value_count(payload)?;
    config.check_len(count)?;
    size_destination(dst, count)?;

    let mut prev = 0i64;
    let mut rest = payload;
    while let Some((word, tail)) = rest.split_first_chunk::<WORD_LEN>() {
        prev = prev.wrapping_add(zigzag::decode_val(u64::from_be_bytes(*word)));
        dst.push(prev);
        rest = tail;
    }
    Ok(())
}
