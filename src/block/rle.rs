//! Decoder for run-length blocks.
//!
//! An RLE block describes an arithmetic progression:
//!
//! ```text
//! [first: 8 bytes BE zig-zag][delta: uvarint zig-zag][repeat - 1: uvarint]
//! ```
//!
//! Bytes after the repeat count are not part of the block and are ignored.

use std::io::Cursor;

use crate::block::format::WORD_LEN;
use crate::block::size_destination;
use crate::config::DecoderConfig;
use crate::error::TsmIntError;
use crate::kernels::{leb128, zigzag};

/// The decoded fields of a run-length payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RunHeader {
    pub first: i64,
    pub delta: i64,
    /// Number of values in the run (stored field plus one).
    pub count: usize,
    /// Payload bytes occupied by the three fields.
    pub consumed: usize,
}

pub(crate) fn parse(payload: &[u8]) -> Result<RunHeader, TsmIntError> {
    let (first, rest) = payload
        .split_first_chunk::<WORD_LEN>()
        .ok_or(TsmIntError::TooShort {
            encoding: "RLE",
            needed: WORD_LEN,
            got: payload.len(),
        })?;
    let first = zigzag::decode_val(u64::from_be_bytes(*first));

    let mut cursor = Cursor::new(rest);
    let delta = leb128::decode_one::<u64>(&mut cursor)
        .map_err(|source| TsmIntError::MalformedVarint { field: "delta", source })?;
    let repeat_field = leb128::decode_one::<u64>(&mut cursor)
        .map_err(|source| TsmIntError::MalformedVarint { field: "repeat", source })?;

    let count = repeat_field
        .checked_add(1)
        .and_then(|count| usize::try_from(count).ok())
        .ok_or(TsmIntError::TooManyValues {
            count: repeat_field as u128 + 1,
            limit: usize::MAX,
        })?;

    Ok(RunHeader {
        first,
        delta: zigzag::decode_val(delta),
        count,
        consumed: WORD_LEN + cursor.position() as usize,
    })
}

pub(crate) fn decode(
    payload: &[u8],
    dst: &mut Vec<i64>,
    config: &DecoderConfig,
) -> Result<(), TsmIntError> {
    let RunHeader {
        first, delta, count, ..
    } = parse(payload)?;
    config.check_len(count)?;
    size_destination(dst, count)?;

    if delta == 0 {
        dst.resize(count, first);
    } else {
        // Accumulate rather than multiply so overflow wraps step by step.
        let run = std::iter::successors(Some(first), |acc| Some(acc.wrapping_add(delta)));
        dst.extend(run.take(count));
    }
    Ok(())
}
