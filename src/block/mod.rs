// In: src/block/mod.rs

//! The integer block decoder.
//!
//! `IntegerBlockDecoder` reads the header byte of a block, classifies it into an
//! `Encoding`, and hands the payload to the matching strategy decoder. The decoder
//! holds only immutable configuration and its unpacker, so one instance can serve
//! any number of threads, as long as each call brings its own destination `Vec`.
//!
//! # Destination reuse
//! Every strategy first computes the exact number of values from block metadata,
//! then sizes the destination once: existing storage is reused when its capacity
//! suffices, otherwise it is reallocated to the exact length. The destination
//! never grows while values are being written. On error it is left empty.

pub mod format;

mod packed;
mod raw;
mod rle;

#[cfg(test)]
mod test_support;

use serde::Serialize;

pub use format::Encoding;

use crate::config::DecoderConfig;
use crate::error::TsmIntError;
use crate::kernels::simple8b::Simple8b;
use crate::traits::WordUnpacker;

/// The most `i64` values a `Vec` can ever hold.
pub(crate) const MAX_DESTINATION_LEN: usize = isize::MAX as usize / std::mem::size_of::<i64>();

/// Clears `dst` and guarantees room for exactly `count` values without growth.
///
/// A count the allocator cannot satisfy is reported as `TooManyValues`.
#[inline]
pub(crate) fn size_destination(dst: &mut Vec<i64>, count: usize) -> Result<(), TsmIntError> {
    dst.clear();
    dst.try_reserve_exact(count).map_err(|_| TsmIntError::TooManyValues {
        count: count as u128,
        limit: MAX_DESTINATION_LEN,
    })
}

/// What a block declares about itself, computed without decoding its values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlockStats {
    pub encoding: Encoding,
    /// Bytes after the header.
    pub payload_len: usize,
    /// Number of values the block decodes to.
    pub value_count: usize,
    /// Payload bytes the decoder does not consume.
    pub trailing_bytes: usize,
}

/// Decodes compressed integer blocks into `i64` sequences.
#[derive(Debug, Clone)]
pub struct IntegerBlockDecoder<U = Simple8b> {
    unpacker: U,
    config: DecoderConfig,
}

impl Default for IntegerBlockDecoder<Simple8b> {
    fn default() -> Self {
        Self::new(Simple8b, DecoderConfig::default())
    }
}

impl<U: WordUnpacker> IntegerBlockDecoder<U> {
    pub fn new(unpacker: U, config: DecoderConfig) -> Self {
        Self { unpacker, config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decodes `bytes` into `dst`, reusing its storage when large enough.
    ///
    /// An empty buffer decodes to an empty sequence. On error `dst` is emptied;
    /// a truncated prefix is never returned.
    pub fn decode_into(&self, bytes: &[u8], dst: &mut Vec<i64>) -> Result<(), TsmIntError> {
        match self.dispatch(bytes, dst) {
            Ok(encoding) => {
                log_metric!(
                    "event" = "decode_block",
                    "encoding" = encoding.map_or("empty", Encoding::name),
                    "bytes" = bytes.len(),
                    "values" = dst.len(),
                );
                Ok(())
            }
            Err(err) => {
                dst.clear();
                if self.config.log_decode_errors {
                    log::debug!(
                        "integer block of {} bytes (header {:#04x}) failed to decode: {}",
                        bytes.len(),
                        bytes.first().copied().unwrap_or_default(),
                        err
                    );
                }
                Err(err)
            }
        }
    }

    /// Decodes `bytes` into a freshly allocated vector.
    pub fn decode(&self, bytes: &[u8]) -> Result<Vec<i64>, TsmIntError> {
        let mut values = Vec::new();
        self.decode_into(bytes, &mut values)?;
        Ok(values)
    }

    /// Reports the encoding and value count of a block without materializing values.
    ///
    /// Applies the same structural checks as decoding, so a block that inspects
    /// cleanly will decode (subject to `max_values`, which is not applied here).
    /// Returns `None` for an empty buffer.
    pub fn inspect(&self, bytes: &[u8]) -> Result<Option<BlockStats>, TsmIntError> {
        let Some((&header, payload)) = bytes.split_first() else {
            return Ok(None);
        };

        let encoding = Encoding::from_header(header);
        let (value_count, trailing_bytes) = match encoding {
            Encoding::Raw => (raw::value_count(payload)?, 0),
            Encoding::PackedDelta => packed::value_count(payload, &self.unpacker)?,
            Encoding::RunLength => {
                let run = rle::parse(payload)?;
                (run.count, payload.len() - run.consumed)
            }
            Encoding::Invalid(nibble) => return Err(TsmIntError::UnknownEncoding(nibble)),
        };

        Ok(Some(BlockStats {
            encoding,
            payload_len: payload.len(),
            value_count,
            trailing_bytes,
        }))
    }

    fn dispatch(&self, bytes: &[u8], dst: &mut Vec<i64>) -> Result<Option<Encoding>, TsmIntError> {
        let Some((&header, payload)) = bytes.split_first() else {
            dst.clear();
            return Ok(None);
        };

        let encoding = Encoding::from_header(header);
        match encoding {
            Encoding::Raw => raw::decode(payload, dst, &self.config)?,
            Encoding::PackedDelta => packed::decode(payload, dst, &self.unpacker, &self.config)?,
            Encoding::RunLength => rle::decode(payload, dst, &self.config)?,
            Encoding::Invalid(nibble) => return Err(TsmIntError::UnknownEncoding(nibble)),
        }
        Ok(Some(encoding))
    }
}

/// Decodes one block with the default Simple8b decoder and default config.
pub fn decode_all(bytes: &[u8], dst: &mut Vec<i64>) -> Result<(), TsmIntError> {
    IntegerBlockDecoder::<Simple8b>::default().decode_into(bytes, dst)
}
