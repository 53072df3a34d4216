//! Decoder for packed blocks.
//!
//! Layout: the first value as an 8-byte big-endian zig-zag word, followed by zero
//! or more 8-byte big-endian packed words. Each packed word carries up to 240
//! zig-zag deltas. A trailing fragment shorter than a word is ignored, matching
//! the block writers in the field.

use crate::block::format::WORD_LEN;
use crate::block::size_destination;
use crate::config::DecoderConfig;
use crate::error::{TsmIntError, UnpackError};
use crate::kernels::zigzag;
use crate::traits::{WordUnpacker, MAX_VALUES_PER_WORD};

/// Splits a payload into its first value and the packed words that follow.
fn split_first(payload: &[u8]) -> Result<(i64, &[u8]), TsmIntError> {
    let (first, words) = payload
        .split_first_chunk::<WORD_LEN>()
        .ok_or(TsmIntError::TooShort {
            encoding: "packed",
            needed: WORD_LEN,
            got: payload.len(),
        })?;
    Ok((zigzag::decode_val(u64::from_be_bytes(*first)), words))
}

/// Number of values a packed payload holds, and the bytes left unconsumed.
pub(crate) fn value_count<U>(payload: &[u8], unpacker: &U) -> Result<(usize, usize), TsmIntError>
where
    U: WordUnpacker + ?Sized,
{
    let (_, words) = split_first(payload)?;
    let count = unpacker.count_words(words)? + 1;
    Ok((count, words.len() % WORD_LEN))
}

pub(crate) fn decode<U>(
    payload: &[u8],
    dst: &mut Vec<i64>,
    unpacker: &U,
    config: &DecoderConfig,
) -> Result<(), TsmIntError>
where
    U: WordUnpacker + ?Sized,
{
    let (first, words) = split_first(payload)?;

    // Pre-pass: size the destination once instead of growing it per word.
    let count = unpacker.count_words(words)? + 1;
    config.check_len(count)?;
    size_destination(dst, count)?;

    dst.push(first);
    let mut prev = first;
    let mut values = [0u64; MAX_VALUES_PER_WORD];
    let mut rest = words;
    while let Some((bytes, tail)) = rest.split_first_chunk::<WORD_LEN>() {
        let word = u64::from_be_bytes(*bytes);
        let n = unpacker.unpack(word, &mut values)?;
        let unpacked = values.get(..n).ok_or_else(|| UnpackError::Rejected {
            word,
            reason: format!("unpacked {} values, a word holds at most {}", n, MAX_VALUES_PER_WORD),
        })?;
        // The destination was sized from the counts; it must not grow here.
        if dst.len() + n > count {
            return Err(UnpackError::Rejected {
                word,
                reason: format!("unpacked {} values, more than the word count reported", n),
            }
            .into());
        }

        for &value in unpacked {
            prev = prev.wrapping_add(zigzag::decode_val(value));
            dst.push(prev);
        }
        rest = tail;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::simple8b::Simple8b;
    use crate::kernels::zigzag::encode_val;

    fn first_word(v: i64) -> Vec<u8> {
        encode_val(v).to_be_bytes().to_vec()
    }

    #[test]
    fn test_first_value_only() {
        let mut dst = Vec::new();
        decode(&first_word(-42), &mut dst, &Simple8b, &DecoderConfig::default()).unwrap();
        assert_eq!(dst, vec![-42]);
    }

    #[test]
    fn test_too_short() {
        let mut dst = Vec::new();
        let result = decode(&[0u8; 7], &mut dst, &Simple8b, &DecoderConfig::default());
        assert!(matches!(
            result,
            Err(TsmIntError::TooShort { needed: 8, got: 7, .. })
        ));
    }

    #[test]
    fn test_run_of_ones_selector() {
        // Selector 1: 120 deltas of zig-zag 1, i.e. -1 each.
        let mut payload = first_word(1000);
        payload.extend_from_slice(&(1u64 << 60).to_be_bytes());

        let mut dst = Vec::new();
        decode(&payload, &mut dst, &Simple8b, &DecoderConfig::default()).unwrap();
        assert_eq!(dst.len(), 121);
        assert_eq!(dst[0], 1000);
        assert_eq!(dst[1], 999);
        assert_eq!(dst[120], 880);
    }

    #[test]
    fn test_value_count_reports_trailing_fragment() {
        let mut payload = first_word(0);
        payload.extend_from_slice(&(15u64 << 60 | 4).to_be_bytes());
        payload.extend_from_slice(&[1, 2, 3]);
        assert_eq!(value_count(&payload, &Simple8b).unwrap(), (2, 3));
    }
}
