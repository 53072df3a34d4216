// In: src/error.rs

//! This module defines the single, unified error type for the tsmint decoder.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.
//!
//! Every variant is a local validation failure: the block being decoded is
//! unreadable, the process is fine.

use thiserror::Error;

use crate::kernels::leb128::Leb128Error;

/// Rejection reported by a `WordUnpacker` for a word it cannot unpack.
///
/// The decoder never rewrites these; they surface verbatim inside
/// `TsmIntError::InvalidPackedWord`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnpackError {
    /// A selector the unpacker has no layout for. `Simple8b` maps all 16
    /// selectors, so this comes only from other `WordUnpacker` implementations.
    #[error("invalid selector {selector} in packed word {word:#018x}")]
    InvalidSelector { word: u64, selector: u8 },

    #[error("word {word:#018x} is not a validly packed word: {reason}")]
    Rejected { word: u64, reason: String },
}

#[derive(Error, Debug)]
pub enum TsmIntError {
    // =========================================================================
    // === Block Structure Errors
    // =========================================================================
    #[error("raw block payload must be a multiple of 8 bytes, got {0}")]
    MalformedLength(usize),

    #[error(
        "not enough data to decode {encoding} block: need {needed} payload bytes, got {got}"
    )]
    TooShort {
        encoding: &'static str,
        needed: usize,
        got: usize,
    },

    #[error("invalid RLE {field} value: {source}")]
    MalformedVarint {
        field: &'static str,
        #[source]
        source: Leb128Error,
    },

    #[error("failed to decode packed value: {0}")]
    InvalidPackedWord(#[from] UnpackError),

    #[error("unknown encoding {0}")]
    UnknownEncoding(u8),

    #[error("block declares {count} values, exceeding the limit of {limit}")]
    TooManyValues { count: u128, limit: usize },

    // =========================================================================
    // === External Error Wrappers (config loading and log setup only)
    // =========================================================================
    /// An error originating from the underlying I/O subsystem.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error from the Serde JSON library, raised while parsing a `DecoderConfig`.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}
