// In: src/block/format.rs

//! Defines the on-disk layout constants of an integer block and the closed set of
//! encodings its header can name.
//!
//! ```text
//! byte 0        bytes 1..
//! +------+------+-----------------------------+
//! | enc  | rsvd | encoding-specific payload   |
//! +------+------+-----------------------------+
//!  4 bits 4 bits
//! ```

use std::fmt;

use serde::Serialize;

/// Raw format: 8 bytes per value, each a zig-zag delta from the previous value.
pub const ENCODING_RAW: u8 = 0;
/// Packed format: first value, then Simple8b words of zig-zag deltas.
pub const ENCODING_PACKED: u8 = 1;
/// Run-length format: first value, varint delta, varint repeat count minus one.
pub const ENCODING_RLE: u8 = 2;

/// Bytes taken by the block header.
pub const HEADER_LEN: usize = 1;
/// Width of every fixed-size big-endian field in a payload.
pub const WORD_LEN: usize = 8;

/// The encoding named by a block header.
///
/// `Invalid` keeps the nibble exactly as it was read so that errors report the
/// value actually found on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "encoding", content = "nibble", rename_all = "snake_case")]
pub enum Encoding {
    Raw,
    PackedDelta,
    RunLength,
    Invalid(u8),
}

impl Encoding {
    /// Classifies the high nibble of a header byte. The low nibble is reserved.
    #[inline]
    pub fn from_header(header: u8) -> Self {
        match header >> 4 {
            ENCODING_RAW => Encoding::Raw,
            ENCODING_PACKED => Encoding::PackedDelta,
            ENCODING_RLE => Encoding::RunLength,
            nibble => Encoding::Invalid(nibble),
        }
    }

    /// The 4-bit code this encoding occupies in a header.
    pub fn code(self) -> u8 {
        match self {
            Encoding::Raw => ENCODING_RAW,
            Encoding::PackedDelta => ENCODING_PACKED,
            Encoding::RunLength => ENCODING_RLE,
            Encoding::Invalid(nibble) => nibble,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Encoding::Raw => "raw",
            Encoding::PackedDelta => "packed",
            Encoding::RunLength => "RLE",
            Encoding::Invalid(_) => "invalid",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Invalid(nibble) => write!(f, "invalid({})", nibble),
            other => f.write_str(other.name()),
        }
    }
}
